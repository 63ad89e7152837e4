use super::*;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Page<T> {
  #[serde(default = "Vec::new")]
  pub(crate) items: Vec<T>,
  pub(crate) next_page_token: Option<String>,
}
