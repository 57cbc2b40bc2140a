//! Credential exchange against the content backend.
//!
//! One POST per launch: the id token goes out, a navigable content URL and
//! session cookies come back. Redirect statuses are part of the success
//! contract here, so the HTTP client must never follow them on its own.

use alcove_protocol::{InitResponse, VerifyTokenBody, VERIFY_TOKEN_PATH};
use reqwest::{header, redirect, Client};
use tracing::debug;
use url::Url;

use crate::error::{LaunchError, Result};

/// Build the HTTP client used for the handshake. Redirects must reach the
/// classifier untouched.
pub(crate) fn handshake_client() -> Result<Client> {
	Client::builder()
		.redirect(redirect::Policy::none())
		.build()
		.map_err(|e| LaunchError::unexpected("unable to build http client", e))
}

fn verify_token_url(base: &Url) -> Result<Url> {
	let mut url = base.clone();
	{
		let mut segments = url
			.path_segments_mut()
			.map_err(|()| LaunchError::unexpected_message("base endpoint cannot carry path segments"))?;
		segments.pop_if_empty();
		segments.extend(VERIFY_TOKEN_PATH.split('/'));
	}
	Ok(url)
}

fn session_cookies(response: &reqwest::Response) -> Vec<String> {
	response
		.headers()
		.get_all(header::SET_COOKIE)
		.iter()
		.filter_map(|value| value.to_str().ok())
		.map(str::to_string)
		.collect()
}

/// Exchange `token` for an authenticated content URL.
///
/// Classification, in priority order: redirect statuses succeed with the
/// `Location` target, other 2xx succeed with the request URL itself, 422
/// means the credentials were rejected, and everything else is an HTTP
/// error. Transport faults and a redirect without `Location` surface as
/// [`LaunchError::UnexpectedError`]. The response body is never read;
/// dropping the response releases the connection on every path.
pub(crate) async fn verify_token(
	http: &Client,
	base_endpoint: &Url,
	client_id: &str,
	token: &str,
	posix_locale: &str,
) -> Result<InitResponse> {
	let url = verify_token_url(base_endpoint)?;
	let body = serde_json::to_string(&VerifyTokenBody {
		client_id,
		token,
		locale: posix_locale,
	})
	.map_err(|e| LaunchError::unexpected("unable to encode verification body", e))?;

	debug!(target = "alcove", %url, "verifying token");

	let response = http
		.post(url)
		.header(header::CONTENT_TYPE, "application/json; utf-8")
		.header(header::ACCEPT, "application/json")
		.body(body)
		.send()
		.await
		.map_err(|e| LaunchError::unexpected("verification request failed", e))?;

	let status = response.status();
	match status.as_u16() {
		301 | 302 | 303 | 307 | 308 => {
			let cookies = session_cookies(&response);
			match response
				.headers()
				.get(header::LOCATION)
				.and_then(|value| value.to_str().ok())
			{
				Some(location) => Ok(InitResponse { url: location.to_string(), cookies }),
				None => Err(LaunchError::unexpected_message(format!(
					"location header missing in {status} response"
				))),
			}
		}
		200..=299 => Ok(InitResponse {
			url: response.url().to_string(),
			cookies: session_cookies(&response),
		}),
		422 => Err(LaunchError::InvalidCredentials { message: "invalid token".into() }),
		code => Err(LaunchError::HttpError {
			status: code,
			message: status.canonical_reason().unwrap_or("unknown status").to_string(),
		}),
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use axum::Router;
	use axum::body::Body;
	use axum::extract::State;
	use axum::http::HeaderMap;
	use axum::routing::post;
	use parking_lot::Mutex;

	use super::*;

	#[derive(Default)]
	struct Recorded {
		headers: Option<HeaderMap>,
		body: Option<String>,
	}

	#[derive(Clone)]
	struct StubState {
		status: u16,
		headers: Vec<(&'static str, &'static str)>,
		recorded: Arc<Mutex<Recorded>>,
	}

	async fn verify_handler(
		State(state): State<StubState>,
		headers: HeaderMap,
		body: String,
	) -> axum::response::Response {
		*state.recorded.lock() = Recorded { headers: Some(headers), body: Some(body) };
		let mut builder = axum::http::Response::builder().status(state.status);
		for (name, value) in &state.headers {
			builder = builder.header(*name, *value);
		}
		builder.body(Body::empty()).unwrap()
	}

	async fn start_stub(
		status: u16,
		headers: Vec<(&'static str, &'static str)>,
	) -> (Url, Arc<Mutex<Recorded>>) {
		let recorded = Arc::new(Mutex::new(Recorded::default()));
		let state = StubState { status, headers, recorded: Arc::clone(&recorded) };
		let app = Router::new()
			.route("/users/verify_token", post(verify_handler))
			.with_state(state);
		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
		let base = Url::parse(&format!("http://{}", listener.local_addr().unwrap())).unwrap();
		tokio::spawn(async move {
			axum::serve(listener, app).await.unwrap();
		});
		(base, recorded)
	}

	#[tokio::test]
	async fn redirect_statuses_succeed_with_location_target() {
		for status in [301u16, 302, 303, 307, 308] {
			let (base, _) = start_stub(
				status,
				vec![
					("location", "https://content.example/home"),
					("set-cookie", "session=abc; Path=/"),
					("set-cookie", "region=eu; Path=/"),
				],
			)
			.await;

			let http = handshake_client().unwrap();
			let init = verify_token(&http, &base, "clientId", "token", "en")
				.await
				.unwrap_or_else(|e| panic!("status {status} should succeed, got {e}"));

			assert_eq!(init.url, "https://content.example/home");
			assert_eq!(init.cookies, ["session=abc; Path=/", "region=eu; Path=/"]);
		}
	}

	#[tokio::test]
	async fn plain_success_uses_the_request_url() {
		let (base, _) = start_stub(200, vec![("set-cookie", "session=abc")]).await;

		let http = handshake_client().unwrap();
		let init = verify_token(&http, &base, "clientId", "token", "en").await.unwrap();

		assert_eq!(init.url, format!("{base}users/verify_token"));
		assert_eq!(init.cookies, ["session=abc"]);
	}

	#[tokio::test]
	async fn redirect_without_location_is_unexpected() {
		let (base, _) = start_stub(302, vec![]).await;

		let http = handshake_client().unwrap();
		let err = verify_token(&http, &base, "clientId", "token", "en").await.unwrap_err();

		assert!(matches!(err, LaunchError::UnexpectedError { .. }), "got {err:?}");
	}

	#[tokio::test]
	async fn unprocessable_entity_means_invalid_credentials() {
		let (base, _) = start_stub(422, vec![]).await;

		let http = handshake_client().unwrap();
		let err = verify_token(&http, &base, "clientId", "bad token", "en").await.unwrap_err();

		assert!(matches!(err, LaunchError::InvalidCredentials { .. }), "got {err:?}");
	}

	#[tokio::test]
	async fn server_errors_keep_their_status() {
		for status in [400u16, 404, 500, 503] {
			let (base, _) = start_stub(status, vec![]).await;

			let http = handshake_client().unwrap();
			let err = verify_token(&http, &base, "clientId", "token", "en").await.unwrap_err();

			match err {
				LaunchError::HttpError { status: got, .. } => assert_eq!(got, status),
				other => panic!("expected HttpError for {status}, got {other:?}"),
			}
		}
	}

	#[tokio::test]
	async fn request_carries_contract_headers_and_exact_body() {
		let (base, recorded) = start_stub(200, vec![]).await;

		let http = handshake_client().unwrap();
		verify_token(&http, &base, "clientId", "id token", "fr-CA").await.unwrap();

		let recorded = recorded.lock();
		assert_eq!(
			recorded.body.as_deref(),
			Some(r#"{"client_id":"clientId","token":"id token","locale":"fr-CA"}"#)
		);
		let headers = recorded.headers.as_ref().unwrap();
		assert_eq!(headers["content-type"], "application/json; utf-8");
		assert_eq!(headers["accept"], "application/json");
	}

	#[tokio::test]
	async fn connection_failure_is_unexpected() {
		// Bind then drop to find a port nothing is listening on.
		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
		let base = Url::parse(&format!("http://{}", listener.local_addr().unwrap())).unwrap();
		drop(listener);

		let http = handshake_client().unwrap();
		let err = verify_token(&http, &base, "clientId", "token", "en").await.unwrap_err();

		assert!(matches!(err, LaunchError::UnexpectedError { .. }), "got {err:?}");
	}
}
