//! `POST /fetch-preview`.

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Html,
    Json,
};

use crate::http::{AppState, PreviewRequest, RelayError};

/// Fetch the page named in the payload and hand its body back unchanged.
///
/// Outcomes: 200 with the origin's text, 400 `URL is required`, or 500 with
/// the error text for a bad payload or failed fetch.
pub async fn fetch_preview(
    State(state): State<AppState>,
    payload: Result<Json<PreviewRequest>, JsonRejection>,
) -> Result<Html<String>, RelayError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Malformed preview payload");
        RelayError::from(rejection)
    })?;

    let url = request.target().inspect_err(|e| {
        tracing::warn!(error = %e, "Preview request without a usable url");
    })?;

    tracing::debug!(url = %url, "Fetching preview");

    match state.fetcher.fetch_text(url).await {
        Ok(fetched) => {
            tracing::info!(
                url = %url,
                origin_status = %fetched.status,
                bytes = fetched.body.len(),
                "Preview relayed"
            );
            Ok(Html(fetched.body))
        }
        Err(e) => {
            tracing::error!(
                url = %url,
                origin_status = ?e.origin_status(),
                error = %e,
                "Preview fetch failed"
            );
            Err(e.into())
        }
    }
}
