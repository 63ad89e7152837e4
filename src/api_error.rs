use super::*;

#[derive(Debug)]
pub(crate) enum ApiError {
  CommentsDisabled,
  Http(reqwest::Error),
  QuotaExceeded(String),
  Service { code: u16, message: String },
}

impl ApiError {
  pub(crate) fn from_response(status: StatusCode, body: &str) -> Self {
    match serde_json::from_str::<ErrorResponse>(body) {
      Ok(response) => {
        let reasons: Vec<&str> = response
          .error
          .errors
          .iter()
          .map(|item| item.reason.as_str())
          .collect();

        if reasons.contains(&"commentsDisabled") {
          Self::CommentsDisabled
        } else if status == StatusCode::TOO_MANY_REQUESTS
          || reasons.iter().any(|reason| {
            matches!(
              *reason,
              "quotaExceeded" | "rateLimitExceeded" | "userRateLimitExceeded"
            )
          })
        {
          Self::QuotaExceeded(response.error.message)
        } else {
          Self::Service {
            code: status.as_u16(),
            message: response.error.message,
          }
        }
      }
      Err(_) if status == StatusCode::TOO_MANY_REQUESTS => {
        Self::QuotaExceeded(body.trim().to_string())
      }
      Err(_) => Self::Service {
        code: status.as_u16(),
        message: body.trim().to_string(),
      },
    }
  }

  pub(crate) fn is_retryable(&self) -> bool {
    matches!(self, Self::QuotaExceeded(_))
  }
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::CommentsDisabled => write!(f, "comments are disabled for this video"),
      Self::Http(error) => write!(f, "request failed: {error}"),
      Self::QuotaExceeded(message) => {
        write!(f, "request quota exhausted: {message}")
      }
      Self::Service { code, message } => {
        write!(f, "comment service error {code}: {message}")
      }
    }
  }
}

impl std::error::Error for ApiError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Http(error) => Some(error),
      _ => None,
    }
  }
}

impl From<reqwest::Error> for ApiError {
  fn from(error: reqwest::Error) -> Self {
    Self::Http(error)
  }
}
