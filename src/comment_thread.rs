use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct CommentThread {
  pub(crate) id: String,
  pub(crate) snippet: ThreadSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ThreadSnippet {
  pub(crate) top_level_comment: CommentResource,
  pub(crate) total_reply_count: u64,
}
