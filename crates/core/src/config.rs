//! SDK configuration.
//!
//! Hosts construct a [`Config`] once at application start and hand it to
//! [`Alcove::new`](crate::Alcove::new). For hosts that prefer one
//! process-wide configuration, [`configure`] installs a global with
//! first-write-wins semantics.

use std::sync::OnceLock;

use alcove_protocol::Locale;
use thiserror::Error;
use url::Url;

/// Static configuration for one content deployment: the client id issued
/// to the host and the backend endpoint the handshake talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	client_id: String,
	base_endpoint: Url,
	default_locale: Locale,
}

#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("client id must not be empty")]
	EmptyClientId,
	#[error("invalid base endpoint: {0}")]
	InvalidBaseEndpoint(#[from] url::ParseError),
}

impl Config {
	pub fn new(client_id: impl Into<String>, base_endpoint: &str) -> Result<Self, ConfigError> {
		let client_id = client_id.into();
		if client_id.is_empty() {
			return Err(ConfigError::EmptyClientId);
		}
		Ok(Self {
			client_id,
			base_endpoint: Url::parse(base_endpoint)?,
			default_locale: Locale::root(),
		})
	}

	/// Locale used when a launch does not supply one.
	pub fn with_default_locale(mut self, locale: Locale) -> Self {
		self.default_locale = locale;
		self
	}

	pub fn client_id(&self) -> &str {
		&self.client_id
	}

	pub fn base_endpoint(&self) -> &Url {
		&self.base_endpoint
	}

	pub fn default_locale(&self) -> &Locale {
		&self.default_locale
	}
}

static GLOBAL: OnceLock<Config> = OnceLock::new();

/// Install `config` as the process-wide configuration.
///
/// First write wins: once a configuration is installed, later calls are
/// no-ops returning the already-installed value.
pub fn configure(config: Config) -> &'static Config {
	GLOBAL.get_or_init(|| config)
}

/// Whether [`configure`] has been called.
pub fn is_configured() -> bool {
	GLOBAL.get().is_some()
}

/// The process-wide configuration.
///
/// # Panics
///
/// Panics if [`configure`] has not been called. Reading configuration
/// before initialization is a host programming error, not a recoverable
/// condition.
pub fn global() -> &'static Config {
	match GLOBAL.get() {
		Some(config) => config,
		None => panic!("alcove::configure() must be called before accessing the global configuration"),
	}
}
