use crate::evade::EVADE_MARGIN_DEFAULT;
use crate::notify::NOTIFY_ENDPOINT;
use crate::toggle::TogglePolicy;

#[derive(Clone, Debug, PartialEq)]
pub struct CardConfig {
    pub toggle_policy: TogglePolicy,
    pub evade_margin: f64,
    /// `None` skips the relay call; the flow still reaches the success panel.
    pub notify_endpoint: Option<String>,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            toggle_policy: TogglePolicy::default(),
            evade_margin: EVADE_MARGIN_DEFAULT,
            notify_endpoint: Some(NOTIFY_ENDPOINT.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value '{value}' for '{key}'")]
    InvalidValue { key: String, value: String },
}

/// Query keys read by [`CardConfig::apply_override`].
pub const QUERY_KEYS: [&str; 3] = ["toggle", "margin", "notify"];

impl CardConfig {
    pub fn with_endpoint_override(mut self, raw: Option<&str>) -> Self {
        if let Some(raw) = raw {
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                self.notify_endpoint = Some(trimmed.to_string());
            }
        }
        self
    }

    /// Applies one already-decoded `key=value` override. A bad value keeps
    /// the previous setting and is returned so the caller can log it.
    /// Unknown keys are ignored.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        if key.eq_ignore_ascii_case("toggle") {
            self.toggle_policy = value.parse().map_err(|_| invalid())?;
        } else if key.eq_ignore_ascii_case("margin") {
            let margin = value.parse::<f64>().map_err(|_| invalid())?;
            if !margin.is_finite() || margin < 0.0 {
                return Err(invalid());
            }
            self.evade_margin = margin;
        } else if key.eq_ignore_ascii_case("notify") {
            match value.to_ascii_lowercase().as_str() {
                "off" | "0" | "false" => self.notify_endpoint = None,
                "on" | "1" | "true" => {
                    if self.notify_endpoint.is_none() {
                        self.notify_endpoint = Some(NOTIFY_ENDPOINT.to_string());
                    }
                }
                _ => return Err(invalid()),
            }
        }
        Ok(())
    }
}
