//! Host-provided rendering surface abstraction.

/// The rendering surface hosting the content, a webview widget or
/// equivalent, owned and driven by the host application.
///
/// Every method is a non-blocking enqueue: implementations forward the call
/// to whatever thread drives the surface and must apply calls in the order
/// they were received. The launch sequence relies on that ordering so that
/// session cookies are installed before the navigation request goes out.
///
/// The SDK never creates or destroys a surface; teardown, including
/// clearing registered event listeners, is the host's obligation.
pub trait ContentSurface: Send + Sync + 'static {
	/// Install `cookie` (a raw `Set-Cookie` value) into the shared cookie
	/// store, scoped to the origin of `url`.
	fn install_cookie(&self, url: &str, cookie: &str);

	/// Navigate the surface to `url`.
	fn navigate(&self, url: &str);

	/// Evaluate `script` inside the content's execution context. Best
	/// effort; no result is reported back to the SDK.
	fn evaluate(&self, script: &str);

	/// Whether the surface has history to navigate back through.
	fn can_go_back(&self) -> bool;

	/// Navigate one step back in the surface history.
	fn go_back(&self);
}
