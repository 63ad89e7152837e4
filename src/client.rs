use super::*;

pub(crate) struct Client {
  api_key: String,
  client: reqwest::Client,
}

impl Client {
  const API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

  const PAGE_SIZE: &str = "100";

  pub(crate) async fn comment_threads(
    &self,
    video_id: &str,
    page_token: Option<String>,
  ) -> Result<Page<CommentThread>, ApiError> {
    let mut query = vec![
      ("key", self.api_key.as_str()),
      ("maxResults", Self::PAGE_SIZE),
      ("part", "snippet"),
      ("videoId", video_id),
    ];

    if let Some(token) = page_token.as_deref() {
      query.push(("pageToken", token));
    }

    self
      .get_page(&format!("{}/commentThreads", Self::API_BASE_URL), &query)
      .await
  }

  async fn get_page<T: DeserializeOwned>(
    &self,
    url: &str,
    query: &[(&str, &str)],
  ) -> Result<Page<T>, ApiError> {
    let response = self.client.get(url).query(query).send().await?;

    let status = response.status();

    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();

      return Err(ApiError::from_response(status, &body));
    }

    Ok(response.json().await?)
  }

  pub(crate) fn new(api_key: String) -> Self {
    Self {
      api_key,
      client: reqwest::Client::new(),
    }
  }

  pub(crate) async fn replies(
    &self,
    parent_id: &str,
    page_token: Option<String>,
  ) -> Result<Page<CommentResource>, ApiError> {
    let mut query = vec![
      ("key", self.api_key.as_str()),
      ("maxResults", Self::PAGE_SIZE),
      ("parentId", parent_id),
      ("part", "snippet"),
    ];

    if let Some(token) = page_token.as_deref() {
      query.push(("pageToken", token));
    }

    self
      .get_page(&format!("{}/comments", Self::API_BASE_URL), &query)
      .await
  }
}
