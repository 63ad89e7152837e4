use super::*;

const DEFAULT_MAX_COMMENTS: usize = 1000;

const DEFAULT_MIN_LENGTH: usize = 5;

#[derive(Clone, Debug)]
pub(crate) struct Config {
  pub(crate) api_key: String,
  pub(crate) max_comments: usize,
  pub(crate) min_length: usize,
}

impl Config {
  pub(crate) fn from_env() -> Result<Self> {
    Ok(Self {
      api_key: env::var("YOUTUBE_API_KEY")
        .map_err(|_| anyhow!("YOUTUBE_API_KEY is required"))?,
      max_comments: env_count("MAX_COMMENTS", DEFAULT_MAX_COMMENTS)?,
      min_length: env_count("MIN_LENGTH", DEFAULT_MIN_LENGTH)?,
    })
  }
}

fn count_from(key: &str, raw: Option<&str>, fallback: usize) -> Result<usize> {
  match raw {
    None | Some("") => Ok(fallback),
    Some(value) => value
      .parse()
      .with_context(|| format!("failed to convert {key} to integer: {value}")),
  }
}

fn env_count(key: &str, fallback: usize) -> Result<usize> {
  count_from(key, env::var(key).ok().as_deref(), fallback)
}
