//! Core runtime for rumulocity: the `jsonc` structural serializer, the
//! paginated `collection` traversal protocol, and the platform's remote error
//! payload.
#![warn(unreachable_pub)]

extern crate self as rumulocity;

// public exports are one module level down
pub mod collection;
pub mod error;
pub mod jsonc;
pub mod remote;

pub use error::Error;

