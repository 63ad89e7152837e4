use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct CommentResource {
  pub(crate) id: String,
  pub(crate) snippet: CommentSnippet,
}
