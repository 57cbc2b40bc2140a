//! Bridge message shapes.
//!
//! Content-origin notifications arrive as JSON strings handed to the native
//! bridge object the surface exposes; host-origin commands are JSON objects
//! passed to a well-known entry point the content defines. Both directions
//! are specified here as pure serde types; scheduling and dispatch live in
//! `alcove-runtime`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Payload of a content notification that carries only a correlation id
/// (token-expired and account-provision requests).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestNotice {
	pub request_id: String,
}

/// Payload of a telemetry notification. `payload` is an arbitrary keyed
/// mapping and may be absent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TelemetryNotice {
	pub name: String,
	#[serde(default)]
	pub payload: Option<Map<String, Value>>,
}

/// Payload of a share request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShareNotice {
	pub text: String,
	#[serde(default)]
	pub title: Option<String>,
}

/// A host → content command, one variant per well-known entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundCommand {
	UpdateLocale { locale: String },
	UpdateCredentials { request_id: String, id_token: String },
	AccountProvisionInitiated { request_id: String },
}

#[derive(Serialize)]
struct LocalePayload<'a> {
	locale: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CredentialsPayload<'a> {
	request_id: &'a str,
	id_token: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestIdPayload<'a> {
	request_id: &'a str,
}

impl OutboundCommand {
	/// Name of the function the content is expected to define for this
	/// command.
	pub fn entry_point(&self) -> &'static str {
		match self {
			Self::UpdateLocale { .. } => "updateLocale",
			Self::UpdateCredentials { .. } => "updateCredentials",
			Self::AccountProvisionInitiated { .. } => "accountProvisionInitiated",
		}
	}

	/// Compact JSON argument for the entry point.
	pub fn payload_json(&self) -> serde_json::Result<String> {
		match self {
			Self::UpdateLocale { locale } => serde_json::to_string(&LocalePayload { locale }),
			Self::UpdateCredentials { request_id, id_token } => {
				serde_json::to_string(&CredentialsPayload { request_id, id_token })
			}
			Self::AccountProvisionInitiated { request_id } => {
				serde_json::to_string(&RequestIdPayload { request_id })
			}
		}
	}

	/// The statement submitted to the content's execution context:
	/// `entryPoint('<json>')`.
	pub fn script(&self) -> serde_json::Result<String> {
		Ok(format!("{}('{}')", self.entry_point(), self.payload_json()?))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn request_notice_requires_request_id() {
		let notice: RequestNotice = serde_json::from_str(r#"{"requestId": "abc-123"}"#).unwrap();
		assert_eq!(notice.request_id, "abc-123");
		assert!(serde_json::from_str::<RequestNotice>("{}").is_err());
	}

	#[test]
	fn telemetry_notice_payload_is_optional() {
		let bare: TelemetryNotice = serde_json::from_str(r#"{"name":"content_loaded"}"#).unwrap();
		assert_eq!(bare.name, "content_loaded");
		assert!(bare.payload.is_none());

		let full: TelemetryNotice =
			serde_json::from_str(r#"{"name":"tap","payload":{"param_1":true}}"#).unwrap();
		assert_eq!(full.payload.unwrap()["param_1"], Value::Bool(true));
	}

	#[test]
	fn share_notice_title_is_optional() {
		let notice: ShareNotice = serde_json::from_str(r#"{"text":"look at this"}"#).unwrap();
		assert_eq!(notice.text, "look at this");
		assert!(notice.title.is_none());
	}

	#[test]
	fn update_locale_script_shape() {
		let cmd = OutboundCommand::UpdateLocale { locale: "fr_CA".into() };
		assert_eq!(cmd.script().unwrap(), r#"updateLocale('{"locale":"fr_CA"}')"#);
	}

	#[test]
	fn update_credentials_script_shape() {
		let cmd = OutboundCommand::UpdateCredentials {
			request_id: "req-1".into(),
			id_token: "token".into(),
		};
		assert_eq!(
			cmd.script().unwrap(),
			r#"updateCredentials('{"requestId":"req-1","idToken":"token"}')"#
		);
	}

	#[test]
	fn account_provision_script_shape() {
		let cmd = OutboundCommand::AccountProvisionInitiated { request_id: "req-2".into() };
		assert_eq!(
			cmd.script().unwrap(),
			r#"accountProvisionInitiated('{"requestId":"req-2"}')"#
		);
	}
}
