//! HTTP client for the external quote API. The request shapes here are a
//! fixed contract with the backend: the `max_age` query parameter and the
//! multipart field names must not change.

use gloo_net::http::Request;
use thiserror::Error;
use web_sys::FormData;

use crate::app::model::{Quote, TimeWindow};

const QUOTES_ENDPOINT: &str = "/api/quotes";
const QUOTE_ENDPOINT: &str = "/api/quote";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
}

pub fn list_quotes_url(window: TimeWindow) -> String {
    format!("{}?max_age={}", QUOTES_ENDPOINT, window.as_query_value())
}

/// Fetch every quote within `window`. The returned order is whatever the
/// server sent; callers sort.
pub async fn fetch_quotes(window: TimeWindow) -> Result<Vec<Quote>, ApiError> {
    let response = Request::get(&list_quotes_url(window))
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json::<Vec<Quote>>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

/// Submit one new quote as multipart form fields `name` and `message`.
///
/// The body is a browser `FormData` so the multipart boundary is set by the
/// browser; setting a Content-Type header by hand would break it.
pub async fn submit_quote(name: &str, message: &str) -> Result<(), ApiError> {
    let form = FormData::new().map_err(|_| ApiError::Network("FormData unavailable".into()))?;
    form.append_with_str("name", name)
        .map_err(|_| ApiError::Network("could not append name field".into()))?;
    form.append_with_str("message", message)
        .map_err(|_| ApiError::Network("could not append message field".into()))?;

    let response = Request::post(QUOTE_ENDPOINT)
        .body(form)
        .map_err(|err| ApiError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_url_carries_exactly_the_selected_window() {
        assert_eq!(list_quotes_url(TimeWindow::All), "/api/quotes?max_age=all");
        assert_eq!(
            list_quotes_url(TimeWindow::Week),
            "/api/quotes?max_age=week"
        );
        assert_eq!(
            list_quotes_url(TimeWindow::Month),
            "/api/quotes?max_age=month"
        );
        assert_eq!(
            list_quotes_url(TimeWindow::Year),
            "/api/quotes?max_age=year"
        );
    }

    #[test]
    fn api_errors_describe_the_failure() {
        assert_eq!(
            ApiError::Status(500).to_string(),
            "server returned status 500"
        );
        assert!(ApiError::Network("offline".into())
            .to_string()
            .contains("offline"));
    }
}
