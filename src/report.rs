use super::*;

const HEADER: [&str; 4] = ["videoId", "isReply", "authorName", "commentText"];

const LAST_REPLY_MARKER: &str = "└── ";

const LEAF_MARKER: &str = ".";

const REPLY_MARKER: &str = "├── ";

const THREAD_MARKER: &str = "┌───";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub(crate) fn rows(videos: &[VideoInfo]) -> Vec<[String; 4]> {
  let mut rows = Vec::new();

  for video in videos {
    for comment in &video.comments {
      let marker = if comment.replies.is_empty() {
        LEAF_MARKER
      } else {
        THREAD_MARKER
      };

      rows.push([
        video.video_id.clone(),
        marker.to_string(),
        clean_field(&comment.author),
        clean_field(&comment.text),
      ]);

      for (index, reply) in comment.replies.iter().enumerate() {
        let marker = if index + 1 == comment.replies.len() {
          LAST_REPLY_MARKER
        } else {
          REPLY_MARKER
        };

        rows.push([
          video.video_id.clone(),
          marker.to_string(),
          clean_field(&reply.author),
          clean_field(&reply.text),
        ]);
      }
    }
  }

  rows
}

pub(crate) fn write_report<W: Write>(mut sink: W, videos: &[VideoInfo]) -> Result {
  sink.write_all(UTF8_BOM)?;

  let mut writer = csv::WriterBuilder::new()
    .delimiter(b';')
    .from_writer(&mut sink);

  writer.write_record(HEADER)?;

  for row in rows(videos) {
    writer.write_record(&row)?;
  }

  writer.flush()?;
  drop(writer);

  sink.flush()?;

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn comment(id: &str, author: &str, text: &str, replies: Vec<Comment>) -> Comment {
    Comment {
      author: author.to_string(),
      id: Some(id.to_string()),
      is_reply: false,
      replies,
      text: text.to_string(),
    }
  }

  fn reply(author: &str, text: &str) -> Comment {
    Comment {
      author: author.to_string(),
      id: None,
      is_reply: true,
      replies: Vec::new(),
      text: text.to_string(),
    }
  }

  fn video(video_id: &str, comments: Vec<Comment>) -> VideoInfo {
    VideoInfo {
      comments,
      pending_replies: Vec::new(),
      video_id: video_id.to_string(),
    }
  }

  #[test]
  fn leaf_comments_get_the_dot_marker() {
    let videos = [video(
      "vid",
      vec![comment("a", "alice", "nice video", Vec::new())],
    )];

    let rows = rows(&videos);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0], ["vid", ".", "alice", "nice video"].map(String::from));
  }

  #[test]
  fn threads_with_replies_get_tree_markers() {
    let videos = [video(
      "vid",
      vec![comment(
        "a",
        "alice",
        "nice video",
        vec![
          reply("bob", "agreed"),
          reply("carol", "same here"),
          reply("dave", "me too!!"),
        ],
      )],
    )];

    let markers: Vec<_> = rows(&videos)
      .into_iter()
      .map(|row| row[1].clone())
      .collect();

    assert_eq!(markers, vec!["┌───", "├── ", "├── ", "└── "]);
  }

  #[test]
  fn a_single_reply_gets_the_last_marker() {
    let videos = [video(
      "vid",
      vec![comment("a", "alice", "nice video", vec![reply("bob", "agreed")])],
    )];

    let markers: Vec<_> = rows(&videos)
      .into_iter()
      .map(|row| row[1].clone())
      .collect();

    assert_eq!(markers, vec!["┌───", "└── "]);
  }

  #[test]
  fn row_count_matches_retained_comments_and_replies() {
    let videos = [
      video(
        "one",
        vec![
          comment("a", "alice", "first", vec![reply("bob", "agreed")]),
          comment("b", "bob", "second", Vec::new()),
        ],
      ),
      video("two", vec![comment("c", "carol", "third", Vec::new())]),
    ];

    assert_eq!(rows(&videos).len(), 4);
  }

  #[test]
  fn fields_are_sanitized() {
    let videos = [video(
      "vid",
      vec![comment("a", "alice;bob", "line one\nline two", Vec::new())],
    )];

    let row = &rows(&videos)[0];

    assert_eq!(row[2], "alice,bob");
    assert_eq!(row[3], "line one line two");
  }

  #[test]
  fn flattening_is_idempotent() {
    let videos = [video(
      "vid",
      vec![comment("a", "alice", "nice video", vec![reply("bob", "agreed")])],
    )];

    assert_eq!(rows(&videos), rows(&videos));
  }

  #[test]
  fn report_starts_with_a_bom_and_the_header_row() {
    let videos = [video(
      "vid",
      vec![comment("a", "alice", "nice video", Vec::new())],
    )];

    let mut buffer = Vec::new();
    write_report(&mut buffer, &videos).unwrap();

    let report = String::from_utf8(buffer).unwrap();

    assert_eq!(
      report,
      "\u{feff}videoId;isReply;authorName;commentText\nvid;.;alice;nice video\n"
    );
  }
}
