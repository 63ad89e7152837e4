use super::*;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CommentSnippet {
  pub(crate) author_display_name: String,
  #[serde(default)]
  pub(crate) parent_id: Option<String>,
  pub(crate) text_display: String,
}
