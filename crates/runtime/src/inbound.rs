//! Inbound half of the event bridge: content → host notifications.
//!
//! The surface exposes a [`ContentBridge`] to the content under
//! [`BRIDGE_NAME`]. Each method takes the raw JSON string the content
//! passed, parses it into the corresponding typed [`Event`], and fans it
//! out through the listener registry. Malformed payloads are logged and
//! dropped; nothing here ever raises back into the content.

use std::sync::Arc;

use alcove_protocol::{RequestNotice, ShareNotice, TelemetryNotice};
use tracing::{trace, warn};

use crate::events::Event;
use crate::registry::ListenerRegistry;

/// Name under which the host must expose the bridge object to the content.
pub const BRIDGE_NAME: &str = "JSBridge";

/// The content-callable entry points of the bridge.
#[derive(Clone)]
pub struct ContentBridge {
	registry: Arc<ListenerRegistry>,
}

impl ContentBridge {
	pub fn new(registry: Arc<ListenerRegistry>) -> Self {
		Self { registry }
	}

	/// The id token used to launch has expired.
	pub fn on_id_token_did_expire(&self, request_data: &str) {
		match serde_json::from_str::<RequestNotice>(request_data) {
			Ok(notice) => self.registry.dispatch(&Event::CredentialsExpired {
				request_id: notice.request_id,
			}),
			Err(e) => {
				warn!(target = "alcove", error = %e, "unable to parse token-expired request data");
			}
		}
	}

	/// An analytics event from the content.
	pub fn on_telemetry_event(&self, data: &str) {
		match serde_json::from_str::<TelemetryNotice>(data) {
			Ok(notice) => {
				trace!(target = "alcove", name = %notice.name, "telemetry event");
				self.registry.dispatch(&Event::Telemetry {
					name: notice.name,
					payload: notice.payload,
				});
			}
			Err(e) => warn!(target = "alcove", error = %e, "unable to parse telemetry"),
		}
	}

	/// The content asked for an account to be provisioned.
	pub fn on_account_provision_requested(&self, request_data: &str) {
		match serde_json::from_str::<RequestNotice>(request_data) {
			Ok(notice) => self.registry.dispatch(&Event::AccountProvisionRequested {
				request_id: notice.request_id,
			}),
			Err(e) => {
				warn!(target = "alcove", error = %e, "unable to parse provision request data");
			}
		}
	}

	/// The user asked to leave the content. Carries no payload.
	pub fn on_exit_requested(&self) {
		self.registry.dispatch(&Event::ExitRequested);
	}

	/// The content asked the host to share some text.
	pub fn on_share_requested(&self, data: &str) {
		match serde_json::from_str::<ShareNotice>(data) {
			Ok(notice) => self.registry.dispatch(&Event::Share {
				text: notice.text,
				title: notice.title,
			}),
			Err(e) => warn!(target = "alcove", error = %e, "unable to parse share request"),
		}
	}
}
