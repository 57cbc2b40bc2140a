//! User credentials.

/// The token used to authenticate the user against the content backend.
///
/// Supplied by the host per launch or update call; the SDK never persists
/// it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
	id_token: String,
}

impl Credentials {
	pub fn new(id_token: impl Into<String>) -> Self {
		Self { id_token: id_token.into() }
	}

	pub fn id_token(&self) -> &str {
		&self.id_token
	}
}
