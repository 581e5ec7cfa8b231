use gloo::net::http::Request;
use valentine_core::notify::{check_status, JSON_MIME};
use valentine_core::{NotificationPayload, NotifyError};

pub(crate) async fn send_notification(
    endpoint: String,
    payload: NotificationPayload,
) -> Result<(), NotifyError> {
    let request = Request::post(&endpoint)
        .header("Accept", JSON_MIME)
        .json(&payload)
        .map_err(|err| NotifyError::Encode(err.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|err| NotifyError::Transport(err.to_string()))?;
    check_status(response.status())
}
