//! Embed a remotely hosted web application inside a host application.
//!
//! The SDK owns two things: the launch handshake (exchanging the host's id
//! token for an authenticated, navigable content URL plus session cookies)
//! and the bidirectional typed event bridge between host and content. The
//! rendering surface itself (a webview widget or equivalent) stays with
//! the host behind the [`ContentSurface`] trait; no UI framework is
//! prescribed.
//!
//! Typical wiring:
//!
//! ```ignore
//! let config = alcove::Config::new("clientId", "https://checkout.example")?;
//! let alcove = alcove::Alcove::new(config, surface);
//!
//! alcove.register_event_listener(Arc::new(|event: &alcove::Event| {
//!     if let alcove::Event::CredentialsExpired { request_id } = event {
//!         // refresh the token, then:
//!         // alcove.update_credentials(request_id, fresh_credentials);
//!     }
//! }));
//!
//! alcove.launch(alcove::Credentials::new(id_token), None, |result| {
//!     // handshake outcome; navigation has already been requested on success
//! });
//! ```

pub mod config;
mod client;
mod credentials;
pub mod error;
mod view;

pub use alcove_protocol::{InitResponse, Locale};
pub use alcove_runtime::{
	BRIDGE_NAME, ContentBridge, ContentSurface, Event, EventListener, ListenerRegistry,
};
pub use config::{Config, ConfigError, configure, global, is_configured};
pub use credentials::Credentials;
pub use error::LaunchError;
pub use view::Alcove;
