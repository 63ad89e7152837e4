use super::*;

pub(crate) struct VideoInfo {
  pub(crate) comments: Vec<Comment>,
  pub(crate) pending_replies: Vec<String>,
  pub(crate) video_id: String,
}

impl VideoInfo {
  pub(crate) fn attach_reply(&mut self, reply: CommentResource, min_length: usize) {
    let CommentSnippet {
      author_display_name,
      parent_id,
      text_display,
    } = reply.snippet;

    if text_display.len() < min_length {
      return;
    }

    let Some(parent_id) = parent_id else {
      return;
    };

    // one level of nesting only: a reply whose parent id matches no retained
    // top-level comment is dropped
    if let Some(parent) = self
      .comments
      .iter_mut()
      .find(|comment| comment.id.as_deref() == Some(parent_id.as_str()))
    {
      parent.replies.push(Comment {
        author: author_display_name,
        id: None,
        is_reply: true,
        replies: Vec::new(),
        text: text_display,
      });
    }
  }

  pub(crate) fn new(video_id: String) -> Self {
    Self {
      comments: Vec::new(),
      pending_replies: Vec::new(),
      video_id,
    }
  }

  pub(crate) fn record_thread(&mut self, thread: CommentThread, min_length: usize) {
    let ThreadSnippet {
      top_level_comment,
      total_reply_count,
    } = thread.snippet;

    let CommentSnippet {
      author_display_name,
      text_display,
      ..
    } = top_level_comment.snippet;

    if text_display.len() < min_length {
      return;
    }

    if total_reply_count > 0 {
      self.pending_replies.push(top_level_comment.id);
    }

    self.comments.push(Comment {
      author: author_display_name,
      id: Some(thread.id),
      is_reply: false,
      replies: Vec::new(),
      text: text_display,
    });
  }

  pub(crate) fn take_pending(&mut self) -> Vec<String> {
    mem::take(&mut self.pending_replies)
  }
}
