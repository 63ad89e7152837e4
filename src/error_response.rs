use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
  #[serde(default)]
  pub(crate) errors: Vec<ErrorItem>,
  pub(crate) message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorItem {
  pub(crate) reason: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
  pub(crate) error: ErrorBody,
}
