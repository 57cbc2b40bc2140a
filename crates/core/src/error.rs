//! Launch error taxonomy.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LaunchError>;

/// Why a launch failed. Exactly one variant is produced per failed launch,
/// delivered through the completion callback; launches never panic across
/// the host boundary.
#[derive(Debug, Error)]
pub enum LaunchError {
	/// The supplied credentials were rejected. Terminal: the user must
	/// re-authenticate; the SDK does not retry.
	#[error("invalid credentials: {message}")]
	InvalidCredentials { message: String },

	/// The backend answered with an unexpected HTTP status. Terminal for
	/// this call; whether to retry is the host's decision.
	#[error("http error {status}: {message}")]
	HttpError { status: u16, message: String },

	/// A network, parse, or environmental fault.
	#[error("unexpected error: {message}")]
	UnexpectedError {
		message: String,
		#[source]
		source: Option<Box<dyn std::error::Error + Send + Sync>>,
	},
}

impl LaunchError {
	pub(crate) fn unexpected(
		message: impl Into<String>,
		source: impl std::error::Error + Send + Sync + 'static,
	) -> Self {
		Self::UnexpectedError {
			message: message.into(),
			source: Some(Box::new(source)),
		}
	}

	pub(crate) fn unexpected_message(message: impl Into<String>) -> Self {
		Self::UnexpectedError { message: message.into(), source: None }
	}
}
