pub mod config;
pub mod embed;
pub mod evade;
pub mod identity;
pub mod modal;
pub mod notify;
pub mod toggle;

pub use config::{CardConfig, ConfigError, QUERY_KEYS};
pub use evade::{EvadeState, Rect, Viewport, EVADE_MARGIN_DEFAULT};
pub use identity::{
    is_expected_identity, verify_identity, FormData, FormField, FormPhase, IdentityError,
    IdentityForm, SubmitOutcome, REJECTION_MESSAGE,
};
pub use modal::{ModalEvent, ModalFlow, ModalState};
pub use notify::{deliver_then_advance, Delivery, NotificationPayload, NotifyError, NOTIFY_ENDPOINT};
pub use toggle::{PointerKind, ToggleOutcome, TogglePolicy, ToggleState};
