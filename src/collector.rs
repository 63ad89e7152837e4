use super::*;

pub(crate) struct Collector {
  client: Client,
  config: Config,
}

impl Collector {
  pub(crate) async fn collect(&self, video_id: &str) -> Result<VideoInfo> {
    let mut info = VideoInfo::new(video_id.to_string());
    let mut seen = 0;

    info!(video = video_id, "fetching comment threads");

    drain(
      |cursor| self.client.comment_threads(video_id, cursor),
      |thread| {
        seen += 1;
        info.record_thread(thread, self.config.min_length);

        if seen >= self.config.max_comments {
          info!(video = video_id, seen, "reached the comment budget, stopping early");

          PageFlow::StopBudgetReached
        } else {
          PageFlow::Continue
        }
      },
    )
    .await
    .with_context(|| format!("failed to fetch comment threads for video {video_id}"))?;

    for parent_id in info.take_pending() {
      info!(video = video_id, parent = parent_id.as_str(), "fetching replies");

      drain(
        |cursor| self.client.replies(&parent_id, cursor),
        |reply| {
          info.attach_reply(reply, self.config.min_length);

          PageFlow::Continue
        },
      )
      .await
      .with_context(|| format!("failed to fetch replies for comment {parent_id}"))?;
    }

    Ok(info)
  }

  pub(crate) fn new(client: Client, config: Config) -> Self {
    Self { client, config }
  }
}
