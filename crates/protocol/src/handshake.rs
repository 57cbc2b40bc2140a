//! Token-verification handshake wire shapes.
//!
//! The handshake is a single POST that exchanges the host-supplied id token
//! for a navigable, authenticated content URL plus any session cookies the
//! backend wants installed before navigation.

use serde::Serialize;

/// Path of the verification endpoint, relative to the configured base
/// endpoint.
pub const VERIFY_TOKEN_PATH: &str = "users/verify_token";

/// JSON body of the verification POST.
///
/// Field order is part of the wire contract; serde emits struct fields in
/// declaration order, so this serializes to exactly
/// `{"client_id":…,"token":…,"locale":…}`.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyTokenBody<'a> {
	pub client_id: &'a str,
	pub token: &'a str,
	pub locale: &'a str,
}

/// Outcome of a successful verification exchange: the URL the surface
/// should navigate to and the `Set-Cookie` values to install first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitResponse {
	pub url: String,
	pub cookies: Vec<String>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn body_serializes_compact_in_contract_order() {
		let body = VerifyTokenBody {
			client_id: "clientId",
			token: "id token",
			locale: "fr-CA",
		};
		assert_eq!(
			serde_json::to_string(&body).unwrap(),
			r#"{"client_id":"clientId","token":"id token","locale":"fr-CA"}"#
		);
	}

	#[test]
	fn body_escapes_token_content() {
		let body = VerifyTokenBody {
			client_id: "c",
			token: "with \"quotes\"",
			locale: "",
		};
		assert_eq!(
			serde_json::to_string(&body).unwrap(),
			r#"{"client_id":"c","token":"with \"quotes\"","locale":""}"#
		);
	}
}
