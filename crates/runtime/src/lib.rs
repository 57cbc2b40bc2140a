//! Runtime plumbing for the alcove SDK: the rendering-surface abstraction,
//! the listener registry, and both halves of the host/content event bridge.
//!
//! Nothing in this crate performs network I/O; the handshake lives in
//! `alcove-rs`. The pieces here are the long-lived structures that outlast
//! any single launch.

pub mod events;
pub mod inbound;
pub mod outbound;
pub mod registry;
pub mod surface;

pub use events::Event;
pub use inbound::{BRIDGE_NAME, ContentBridge};
pub use outbound::CommandOutbox;
pub use registry::{EventListener, ListenerRegistry};
pub use surface::ContentSurface;
