//! Quick action request/response and the notification it produces

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::i18n::Messages;

/// `status` value the backend uses for a successful action
pub const SUCCESS_STATUS: &str = "sucesso";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no action selected")]
    MissingAction,
    #[error("no lead selected")]
    MissingLead,
}

/// Body of `POST /api/quick-action`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickActionRequest {
    pub action: String,
    pub lead_id: String,
}

impl QuickActionRequest {
    /// Build a request from raw form values. Empty values are rejected;
    /// anything else, whitespace included, is sent as typed.
    pub fn from_form(action: &str, lead_id: &str) -> Result<Self, ValidationError> {
        if action.is_empty() {
            return Err(ValidationError::MissingAction);
        }
        if lead_id.is_empty() {
            return Err(ValidationError::MissingLead);
        }
        Ok(Self {
            action: action.to_string(),
            lead_id: lead_id.to_string(),
        })
    }
}

/// Body of the quick action response. Fields of any JSON type decode;
/// only a body that is not JSON at all is a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QuickActionResponse {
    #[serde(default, deserialize_with = "status_text")]
    pub status: String,
    #[serde(default, deserialize_with = "message_text")]
    pub mensagem: String,
}

/// Only a string can match the success status.
fn status_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

/// Null reads as empty; numbers, booleans and objects keep their JSON text.
fn message_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

impl QuickActionResponse {
    pub fn is_success(&self) -> bool {
        self.status == SUCCESS_STATUS
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Warn,
    Error,
}

/// Blocking, user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub text: String,
    pub level: NotificationLevel,
}

impl Notification {
    pub fn validation(messages: &Messages) -> Self {
        Self {
            text: messages.validation_failed().to_string(),
            level: NotificationLevel::Warn,
        }
    }

    pub fn from_response(response: &QuickActionResponse, messages: &Messages) -> Self {
        if response.is_success() {
            Self {
                text: messages.action_succeeded().to_string(),
                level: NotificationLevel::Success,
            }
        } else {
            Self {
                text: messages.action_rejected(&response.mensagem),
                level: NotificationLevel::Error,
            }
        }
    }

    pub fn failure(messages: &Messages) -> Self {
        Self {
            text: messages.action_failed().to_string(),
            level: NotificationLevel::Error,
        }
    }

    pub fn is_success(&self) -> bool {
        self.level == NotificationLevel::Success
    }
}
