use super::*;

pub(crate) fn video_id(raw: &str) -> Result<String> {
  let url =
    Url::parse(raw).with_context(|| format!("unparseable video url: {raw}"))?;

  match url.host_str() {
    Some("youtu.be") => Ok(url.path().trim_start_matches('/').to_string()),
    Some("www.youtube.com") => url
      .query_pairs()
      .find_map(|(key, value)| (key == "v").then(|| value.into_owned()))
      .ok_or_else(|| anyhow!("no v parameter in video url: {raw}")),
    Some(host) => Err(anyhow!("unknown host: {host}")),
    None => Err(anyhow!("unknown host: {raw}")),
  }
}
