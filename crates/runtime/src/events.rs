//! Typed events originating from the content.

use serde_json::{Map, Value};

/// A content-origin event delivered to registered listeners.
///
/// Variants that expect a reply carry the correlation id the content
/// generated; the host threads it back through the matching outbound
/// command. The SDK never generates request ids.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
	/// The id token used to launch is no longer valid. Reply with
	/// `update_credentials` using the same request id.
	CredentialsExpired { request_id: String },
	/// An analytics event forwarded from the content. `payload` may be
	/// absent.
	Telemetry {
		name: String,
		payload: Option<Map<String, Value>>,
	},
	/// The content needs an account provisioned. Reply with
	/// `account_provision_initiated` using the same request id.
	AccountProvisionRequested { request_id: String },
	/// The user asked to leave the embedded content.
	ExitRequested,
	/// The content wants `text` shared through the host's share affordance.
	Share { text: String, title: Option<String> },
}
