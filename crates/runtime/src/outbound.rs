//! Outbound half of the event bridge: host → content commands.
//!
//! Commands are serialized into the content's execution context through a
//! single dispatcher task. Until the surface is ready (the first launch
//! navigation has been requested) commands queue; once the gate opens each
//! command gets one best-effort evaluation, in submission order, with no
//! acknowledgement read back.

use std::sync::Arc;

use alcove_protocol::OutboundCommand;
use tokio::sync::{mpsc, watch};
use tracing::{trace, warn};

use crate::surface::ContentSurface;

/// Handle for submitting commands to the content.
///
/// Cheap to clone; all clones feed the same dispatcher task. Dropping every
/// clone stops the dispatcher after the queue drains.
#[derive(Clone)]
pub struct CommandOutbox {
	commands: mpsc::UnboundedSender<OutboundCommand>,
	ready: Arc<watch::Sender<bool>>,
}

impl CommandOutbox {
	/// Spawn the dispatcher task for `surface` and return the submission
	/// handle. Must be called from within a tokio runtime.
	pub fn spawn(surface: Arc<dyn ContentSurface>) -> Self {
		let (commands, rx) = mpsc::unbounded_channel();
		let (ready, ready_rx) = watch::channel(false);
		tokio::spawn(dispatch_loop(surface, rx, ready_rx));
		Self { commands, ready: Arc::new(ready) }
	}

	/// Queue `command` for evaluation in the content's execution context.
	pub fn submit(&self, command: OutboundCommand) {
		if self.commands.send(command).is_err() {
			warn!(target = "alcove", "command dropped: dispatcher is gone");
		}
	}

	/// Open the gate: the surface has been pointed at the content and
	/// queued commands may flow. Idempotent.
	pub fn mark_ready(&self) {
		self.ready.send_replace(true);
	}
}

async fn dispatch_loop(
	surface: Arc<dyn ContentSurface>,
	mut commands: mpsc::UnboundedReceiver<OutboundCommand>,
	mut ready: watch::Receiver<bool>,
) {
	while let Some(command) = commands.recv().await {
		if !*ready.borrow() {
			// A closed gate channel means the outbox itself is being torn
			// down; deliver what is already queued rather than hold it.
			let _ = ready.wait_for(|open| *open).await;
		}
		match command.script() {
			Ok(script) => {
				trace!(target = "alcove", entry = command.entry_point(), "evaluating command");
				surface.evaluate(&script);
			}
			Err(e) => {
				warn!(target = "alcove", entry = command.entry_point(), error = %e, "unable to serialize command");
			}
		}
	}
}
