use super::*;

pub(crate) fn clean_field(text: &str) -> String {
  text.replace(';', ",").replace('\n', " ")
}
