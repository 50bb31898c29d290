//! REST API helper for the lead-intake endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stub returning an error since the endpoint is
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a `Result` with a ready-to-display message; transport,
//! parse, timeout, and server-side rejection all converge on the same
//! error channel so the page shows exactly one banner.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::{Deserialize, Serialize};

use crate::state::form::FormFields;

/// Lead-intake endpoint path. Routing to the intake host is a reverse
/// proxy concern in deployment.
pub const SEND_ENDPOINT: &str = "/api/send";

/// Seconds before an in-flight submission is treated as failed.
#[cfg(feature = "hydrate")]
const SUBMIT_TIMEOUT_SECS: u64 = 15;

/// Message when the server rejects the lead without supplying detail.
pub const MSG_SEND_REJECTED: &str = "전송에 실패했습니다.";
/// Message when the request itself fails (network, parse, timeout).
pub const MSG_SEND_ERROR: &str = "전송 중 오류가 발생했습니다.";

/// JSON payload for `POST /api/send`. Field names are fixed by the
/// intake endpoint's schema.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadPayload {
    #[serde(rename = "carNumber")]
    pub car_number: String,
    pub phone: String,
    pub region: String,
    pub mileage: String,
}

impl From<&FormFields> for LeadPayload {
    fn from(fields: &FormFields) -> Self {
        Self {
            car_number: fields.plate_number.clone(),
            phone: fields.phone.clone(),
            region: fields.region.clone(),
            mileage: fields.mileage.clone(),
        }
    }
}

/// Acknowledgment body returned by the intake endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SendResponse {
    /// Acknowledgment flag; absent counts as not accepted.
    #[serde(default)]
    pub ok: bool,
    /// Optional server-supplied failure message.
    #[serde(default)]
    pub error: Option<String>,
}

/// Map transport status plus acknowledgment body to the submission
/// outcome. Success requires both; failures prefer the server message.
///
/// # Errors
///
/// Returns the server-supplied `error` string when present, otherwise
/// the generic rejection message.
pub fn resolve_ack(transport_ok: bool, body: &SendResponse) -> Result<(), String> {
    if transport_ok && body.ok {
        return Ok(());
    }
    Err(body
        .error
        .clone()
        .unwrap_or_else(|| MSG_SEND_REJECTED.to_owned()))
}

/// Submit a lead via `POST /api/send`.
///
/// Exactly one request per call; the attempt is abandoned after 15
/// seconds so a stalled exchange cannot leave the form disabled
/// forever.
///
/// # Errors
///
/// Returns a user-facing message on transport failure, unparseable
/// response, timeout, or server-side rejection.
pub async fn submit_lead(fields: &FormFields) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        use futures::future::Either;

        let payload = LeadPayload::from(fields);
        let request = async move {
            let resp = gloo_net::http::Request::post(SEND_ENDPOINT)
                .json(&payload)
                .map_err(|_| MSG_SEND_ERROR.to_owned())?
                .send()
                .await
                .map_err(|_| MSG_SEND_ERROR.to_owned())?;
            let transport_ok = resp.ok();
            let body: SendResponse = resp.json().await.map_err(|_| MSG_SEND_ERROR.to_owned())?;
            resolve_ack(transport_ok, &body)
        };
        let timeout =
            gloo_timers::future::sleep(std::time::Duration::from_secs(SUBMIT_TIMEOUT_SECS));
        match futures::future::select(Box::pin(request), Box::pin(timeout)).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(MSG_SEND_ERROR.to_owned()),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = fields;
        Err("not available on server".to_owned())
    }
}
