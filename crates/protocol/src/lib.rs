//! Wire types for the alcove host/content protocol.
//!
//! This crate contains the serde-serializable types used on the two wires
//! the SDK speaks: the token-verification handshake (HTTP) and the
//! host/content bridge (JSON payloads evaluated in, or received from, the
//! content's execution context). These types represent the "protocol layer"
//! - the shapes of data as they appear on the wire.
//!
//! Higher-level ergonomic APIs are built on top of these types in
//! `alcove-rs`.

pub mod bridge;
pub mod handshake;
pub mod locale;

pub use bridge::*;
pub use handshake::*;
pub use locale::*;
