//! Per-message end-user identification for attribution.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validate::is_valid_record;

/// End-user identity applied to the reporting scope. All fields optional;
/// only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub username: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub ip_address: Option<String>,
}

impl UserIdentity {
  /// Discriminated parse of a `user` payload field. `None` when the value is
  /// not a non-empty object, a field carries a non-string, or no identity
  /// field is present. Malformed payloads leave the scope untouched.
  pub fn from_value(value: &Value) -> Option<UserIdentity> {
    if !is_valid_record(value) {
      return None;
    }
    serde_json::from_value::<UserIdentity>(value.clone())
      .ok()
      .filter(|user| !user.is_empty())
  }

  /// True when no identity field is set.
  pub fn is_empty(&self) -> bool {
    self.id.is_none() && self.username.is_none() && self.email.is_none() && self.ip_address.is_none()
  }
}
