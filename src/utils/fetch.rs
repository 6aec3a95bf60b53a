//! Network helpers over `gloo-net`.
//!
//! Reads are aborted after [`FETCH_TIMEOUT_MS`]; mutations report their
//! status and body to the caller.

use std::cell::Cell;
use std::rc::Rc;

use gloo_net::http::{Request, Response};
use gloo_timers::callback::Timeout;
use serde::{Serialize, de::DeserializeOwned};
use web_sys::AbortController;

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;

/// Fetch and parse JSON from a URL.
///
/// Any non-success status is an error; no partial body is parsed.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let response = get_with_timeout(url, FETCH_TIMEOUT_MS).await?;
    if !response.ok() {
        return Err(FetchError::HttpError(response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?;
    serde_json::from_str(&text).map_err(|e| FetchError::JsonParseError(e.to_string()))
}

/// POST a JSON body and return the status code with the response text.
///
/// Non-success statuses are returned with their body, not as errors.
pub async fn post_json<B: Serialize>(url: &str, body: &B) -> Result<(u16, String), FetchError> {
    let request = Request::post(url)
        .json(body)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let response = request
        .send()
        .await
        .map_err(|e| FetchError::NetworkError(e.to_string()))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?;

    Ok((status, text))
}

/// GET `url`, aborting the request once `timeout_ms` has passed.
async fn get_with_timeout(url: &str, timeout_ms: u32) -> Result<Response, FetchError> {
    let controller = AbortController::new().map_err(|_| FetchError::RequestCreationFailed)?;
    let timed_out = Rc::new(Cell::new(false));

    let timer = {
        let controller = controller.clone();
        let timed_out = Rc::clone(&timed_out);
        Timeout::new(timeout_ms, move || {
            timed_out.set(true);
            controller.abort();
        })
    };

    let result = Request::get(url)
        .abort_signal(Some(&controller.signal()))
        .send()
        .await;
    // Dropping the timer cancels it
    drop(timer);

    result.map_err(|e| {
        if timed_out.get() {
            FetchError::Timeout
        } else {
            FetchError::NetworkError(e.to_string())
        }
    })
}
