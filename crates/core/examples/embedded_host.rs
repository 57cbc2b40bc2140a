//! Minimal host wiring against a fake backend.
//!
//! Spins up a stub verification endpoint, launches with a surface that just
//! logs what it is asked to do, and then feeds a few content notifications
//! through the bridge the way a real webview binding would.

use std::sync::Arc;
use std::time::Duration;

use alcove::{Alcove, Config, ContentSurface, Credentials, Event};
use axum::Router;
use axum::body::Body;
use axum::routing::post;
use tracing::info;

struct LoggingSurface;

impl ContentSurface for LoggingSurface {
	fn install_cookie(&self, url: &str, cookie: &str) {
		info!(target = "host", %url, %cookie, "cookie installed");
	}

	fn navigate(&self, url: &str) {
		info!(target = "host", %url, "navigating");
	}

	fn evaluate(&self, script: &str) {
		info!(target = "host", %script, "evaluating in content");
	}

	fn can_go_back(&self) -> bool {
		false
	}

	fn go_back(&self) {}
}

async fn fake_backend() -> anyhow::Result<String> {
	let app = Router::new().route(
		"/users/verify_token",
		post(|| async {
			axum::http::Response::builder()
				.status(302)
				.header("location", "https://content.example/home")
				.header("set-cookie", "session=abc; Path=/; HttpOnly")
				.body(Body::empty())
				.unwrap()
		}),
	);
	let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
	let base = format!("http://{}", listener.local_addr()?);
	tokio::spawn(async move {
		if let Err(e) = axum::serve(listener, app).await {
			eprintln!("fake backend stopped: {e}");
		}
	});
	Ok(base)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	tracing_subscriber::fmt().init();

	let base = fake_backend().await?;
	let alcove = Arc::new(Alcove::new(
		Config::new("clientId", &base)?,
		Arc::new(LoggingSurface),
	));

	{
		let handle = Arc::clone(&alcove);
		alcove.register_event_listener(Arc::new(move |event: &Event| match event {
			Event::CredentialsExpired { request_id } => {
				info!(target = "host", %request_id, "refreshing credentials");
				handle.update_credentials(request_id.clone(), Credentials::new("a fresh token"));
			}
			Event::Telemetry { name, .. } => info!(target = "host", %name, "telemetry"),
			Event::ExitRequested => info!(target = "host", "exit requested"),
			other => info!(target = "host", ?other, "event"),
		}));
	}

	let (tx, rx) = tokio::sync::oneshot::channel();
	alcove.launch(Credentials::new("id token"), None, move |result| {
		let _ = tx.send(result);
	});
	rx.await??;

	// Pretend the content talks back.
	let bridge = alcove.bridge();
	bridge.on_telemetry_event(r#"{"name":"content_loaded"}"#);
	bridge.on_id_token_did_expire(r#"{"requestId":"req-1"}"#);
	bridge.on_exit_requested();

	// Let the credentials reply flush through the dispatcher before exit.
	tokio::time::sleep(Duration::from_millis(50)).await;
	alcove.clear_event_listeners();
	Ok(())
}
