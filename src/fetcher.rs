use super::*;

const RETRY_DELAY: Duration = Duration::from_secs(10);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum PageFlow {
  Continue,
  StopBudgetReached,
  StopExhausted,
}

pub(crate) async fn drain<T, F, Fut, C>(
  mut fetch: F,
  mut on_item: C,
) -> Result<PageFlow, ApiError>
where
  C: FnMut(T) -> PageFlow,
  F: FnMut(Option<String>) -> Fut,
  Fut: Future<Output = Result<Page<T>, ApiError>>,
{
  let mut cursor: Option<String> = None;

  loop {
    let page = match fetch(cursor.clone()).await {
      Ok(page) => page,
      Err(error) if error.is_retryable() => {
        warn!(
          error = %error,
          delay_secs = RETRY_DELAY.as_secs(),
          "comment service rate limited, retrying"
        );

        sleep(RETRY_DELAY).await;

        // the retried request reuses the current cursor, so nothing fetched
        // so far is requested twice
        continue;
      }
      Err(ApiError::CommentsDisabled) => {
        warn!("comments are disabled for this video");

        return Ok(PageFlow::StopExhausted);
      }
      Err(error) => return Err(error),
    };

    debug!(items = page.items.len(), "fetched page");

    for item in page.items {
      let flow = on_item(item);

      if flow != PageFlow::Continue {
        return Ok(flow);
      }
    }

    match page.next_page_token {
      Some(token) => cursor = Some(token),
      None => return Ok(PageFlow::StopExhausted),
    }
  }
}
