//! HTTP response handling shared by the stream endpoint requests.

use crux_http::Response;

/// Dummy absolute prefix for request URLs.
///
/// NOTE: `crux_http` requires absolute URLs and rejects relative paths
/// (`RelativeUrlWithoutBase` error). The page shell strips this prefix
/// before sending requests via `fetch()`, keeping them relative to the
/// admin page origin.
pub const BASE_URL: &str = "https://relative";

/// Constructs the full address from a given endpoint.
///
/// # Example
/// ```
/// use wallbox_ui_core::http_helpers::build_url;
/// let url = build_url("/teslaloggerstream.php");
/// assert_eq!(url, "https://relative/teslaloggerstream.php");
/// ```
pub fn build_url(endpoint: &str) -> String {
    format!("{BASE_URL}{endpoint}")
}

/// Returns `true` if the response status is 2xx.
pub fn is_response_success(response: &Response<Vec<u8>>) -> bool {
    response.status().is_success()
}

/// Extracts an error message from a failed HTTP response, using the body
/// when there is one.
pub fn extract_error_message(action: &str, response: &mut Response<Vec<u8>>) -> String {
    let status = response.status().to_string();

    match response.take_body() {
        Some(body) if !body.is_empty() => match String::from_utf8(body) {
            Ok(msg) => format!("{action} failed: {msg}"),
            Err(e) => format!("{action} failed: HTTP {status} (invalid UTF-8: {e})"),
        },
        _ => format!("{action} failed: HTTP {status}"),
    }
}

/// Parse JSON from a response body.
///
/// Returns an error if the response is not successful or JSON parsing
/// fails.
pub fn parse_json_response<T: serde::de::DeserializeOwned>(
    action: &str,
    response: &mut Response<Vec<u8>>,
) -> Result<T, String> {
    if !is_response_success(response) {
        return Err(extract_error_message(action, response));
    }

    match response.take_body() {
        Some(body) => serde_json::from_slice(&body).map_err(|e| {
            log::error!("{action}: failed to decode response body: {e}");
            format!("{action}: JSON parse error: {e}")
        }),
        None => Err(format!("{action}: empty response body")),
    }
}

/// Map a transport-level error to a message.
pub fn map_http_error(action: &str, error: crux_http::HttpError) -> String {
    format!("{action} failed: {error}")
}

/// Process an HTTP response result and parse the JSON body.
pub fn process_json_response<T: serde::de::DeserializeOwned>(
    action: &str,
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<T, String> {
    match result {
        Ok(mut response) => parse_json_response(action, &mut response),
        Err(e) => Err(map_http_error(action, e)),
    }
}

/// Handle request creation error - sets error message and returns a render
/// command
///
/// Used when building a request fails (e.g. a serialization error).
pub fn handle_request_error<M, E>(
    model: &mut M,
    action: &str,
    error: impl std::fmt::Display,
) -> crux_core::Command<crate::Effect, E>
where
    M: crate::model::ModelErrorHandler,
    E: Send + 'static,
{
    model.set_error(format!("Failed to create {action} request: {error}"));
    crux_core::render::render()
}

// Note: Unit tests for the response helpers are not included because
// crux_http::Response has a private constructor. They are exercised through
// the core tests in tests.rs, which resolve whole HTTP effects.
