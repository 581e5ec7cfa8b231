use std::future::Future;

use serde::Serialize;

use crate::identity::FormData;
use crate::modal::ModalEvent;

pub const NOTIFY_ENDPOINT: &str = "https://formspree.io/f/xvzqlbql";
pub const NOTIFY_SUBJECT: &str = "Ma Valentine - Réponse et Coordonnées ❤️";
pub const NOTIFY_STATUS: &str = "Identité vérifiée avec succès";
pub const NOTIFY_MESSAGE: &str = "Elle a validé son identité et a accepté la proposition !";
pub const JSON_MIME: &str = "application/json";

/// Body of the form-relay POST. Field names are the relay's, not ours.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NotificationPayload {
    pub subject: String,
    #[serde(rename = "adresse")]
    pub address: String,
    pub status: String,
    pub message: String,
}

impl NotificationPayload {
    pub fn from_form(data: &FormData) -> Self {
        Self {
            subject: NOTIFY_SUBJECT.to_string(),
            address: data.address.clone(),
            status: NOTIFY_STATUS.to_string(),
            message: NOTIFY_MESSAGE.to_string(),
        }
    }

    pub fn to_json(&self) -> Result<String, NotifyError> {
        serde_json::to_string(self).map_err(|err| NotifyError::Encode(err.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotifyError {
    #[error("payload encode failed: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("relay answered with status {0}")]
    Status(u16),
}

pub fn check_status(status: u16) -> Result<(), NotifyError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(NotifyError::Status(status))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Delivery {
    pub event: ModalEvent,
    pub failure: Option<NotifyError>,
}

/// Runs the relay call to completion, then always yields
/// `IdentityValidated` for the form `generation` that submitted. The result
/// is only reported, never acted on.
pub async fn deliver_then_advance<F, Fut>(
    generation: u32,
    endpoint: Option<&str>,
    data: &FormData,
    send: F,
) -> Delivery
where
    F: FnOnce(String, NotificationPayload) -> Fut,
    Fut: Future<Output = Result<(), NotifyError>>,
{
    let failure = match endpoint {
        Some(endpoint) => send(endpoint.to_string(), NotificationPayload::from_form(data))
            .await
            .err(),
        None => None,
    };
    Delivery {
        event: ModalEvent::IdentityValidated { generation },
        failure,
    }
}
