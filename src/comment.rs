#[derive(Clone, Debug)]
pub(crate) struct Comment {
  pub(crate) author: String,
  pub(crate) id: Option<String>,
  #[allow(dead_code)]
  pub(crate) is_reply: bool,
  pub(crate) replies: Vec<Comment>,
  pub(crate) text: String,
}
