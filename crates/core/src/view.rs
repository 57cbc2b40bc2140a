//! The host-facing SDK object.

use std::sync::Arc;

use alcove_protocol::{InitResponse, Locale, OutboundCommand};
use alcove_runtime::{
	CommandOutbox, ContentBridge, ContentSurface, EventListener, ListenerRegistry,
};
use tracing::{error, info};

use crate::client;
use crate::config::Config;
use crate::credentials::Credentials;
use crate::error::LaunchError;

/// One embedded content instance: a configuration, a rendering surface,
/// and the event bridge between them.
///
/// The surface widget belongs to the host; `Alcove` only drives it. On
/// teardown the host must call [`clear_event_listeners`] (listeners are
/// held strongly, there is no automatic cleanup) and drop the instance,
/// which stops the command dispatcher.
///
/// [`clear_event_listeners`]: Alcove::clear_event_listeners
pub struct Alcove {
	config: Config,
	surface: Arc<dyn ContentSurface>,
	registry: Arc<ListenerRegistry>,
	outbox: CommandOutbox,
	bridge: ContentBridge,
}

impl Alcove {
	/// Create an instance over `surface`. Must be called within a tokio
	/// runtime; the outbound command dispatcher is spawned here.
	pub fn new(config: Config, surface: Arc<dyn ContentSurface>) -> Self {
		let registry = Arc::new(ListenerRegistry::new());
		let outbox = CommandOutbox::spawn(Arc::clone(&surface));
		let bridge = ContentBridge::new(Arc::clone(&registry));
		Self { config, surface, registry, outbox, bridge }
	}

	/// Like [`Alcove::new`], reading the process-wide configuration
	/// installed with [`crate::configure`].
	pub fn with_global_config(surface: Arc<dyn ContentSurface>) -> Self {
		Self::new(crate::config::global().clone(), surface)
	}

	/// The bridge object the host must expose to the content under
	/// [`alcove_runtime::BRIDGE_NAME`].
	pub fn bridge(&self) -> ContentBridge {
		self.bridge.clone()
	}

	/// Authenticate and load the content.
	///
	/// Resolves the effective locale (`locale`, else the configured
	/// default), exchanges `credentials` against the backend off the
	/// surface thread, installs any returned session cookies, requests
	/// navigation, and then calls `on_completion` exactly once. Completion
	/// reports handshake success only; it does not wait for the page load.
	///
	/// A second `launch` while one is in flight is allowed and runs
	/// independently; the SDK performs no retries and no coalescing.
	pub fn launch<F>(&self, credentials: Credentials, locale: Option<Locale>, on_completion: F)
	where
		F: FnOnce(Result<(), LaunchError>) + Send + 'static,
	{
		let posix_locale = locale
			.unwrap_or_else(|| self.config.default_locale().clone())
			.posix();
		let config = self.config.clone();
		let surface = Arc::clone(&self.surface);
		let outbox = self.outbox.clone();

		tokio::spawn(async move {
			match handshake(&config, &credentials, &posix_locale).await {
				Ok(init) => {
					// Cookies must land before the navigation request or
					// the content loads unauthenticated.
					for cookie in &init.cookies {
						surface.install_cookie(&init.url, cookie);
					}
					surface.navigate(&init.url);
					outbox.mark_ready();
					info!(target = "alcove", url = %init.url, "content launched");
					on_completion(Ok(()));
				}
				Err(e) => on_completion(Err(e)),
			}
		});
	}

	/// [`launch`](Alcove::launch) with a completion handler that just logs
	/// failures.
	pub fn launch_logged(&self, credentials: Credentials, locale: Option<Locale>) {
		self.launch(credentials, locale, |result| {
			if let Err(e) = result {
				error!(target = "alcove", error = %e, "failed to launch content");
			}
		});
	}

	/// Tell the content to switch locale.
	pub fn update_locale(&self, locale: &Locale) {
		self.outbox
			.submit(OutboundCommand::UpdateLocale { locale: locale.posix() });
	}

	/// Reply to a credentials-expired event with fresh credentials,
	/// echoing the request id the event carried.
	pub fn update_credentials(&self, request_id: impl Into<String>, credentials: Credentials) {
		self.outbox.submit(OutboundCommand::UpdateCredentials {
			request_id: request_id.into(),
			id_token: credentials.id_token().to_string(),
		});
	}

	/// Reply to an account-provision request once the account exists.
	pub fn account_provision_initiated(&self, request_id: impl Into<String>) {
		self.outbox.submit(OutboundCommand::AccountProvisionInitiated {
			request_id: request_id.into(),
		});
	}

	/// Register a listener for content events. Always succeeds.
	pub fn register_event_listener(&self, listener: Arc<dyn EventListener>) -> bool {
		self.registry.register(listener)
	}

	/// Remove one registration of `listener`. Returns whether a
	/// registration was removed.
	pub fn remove_event_listener(&self, listener: &Arc<dyn EventListener>) -> bool {
		self.registry.remove(listener)
	}

	/// Remove every registered listener. Call on teardown.
	pub fn clear_event_listeners(&self) {
		self.registry.clear();
	}

	/// Whether the surface has history to navigate back through.
	pub fn can_go_back(&self) -> bool {
		self.surface.can_go_back()
	}

	/// Navigate one step back in the surface history.
	pub fn go_back(&self) {
		self.surface.go_back();
	}
}

async fn handshake(
	config: &Config,
	credentials: &Credentials,
	posix_locale: &str,
) -> Result<InitResponse, LaunchError> {
	let http = client::handshake_client()?;
	client::verify_token(
		&http,
		config.base_endpoint(),
		config.client_id(),
		credentials.id_token(),
		posix_locale,
	)
	.await
}
