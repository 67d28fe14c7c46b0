//! ## Crate layout
//! - `jsonc`: directive-driven JSON encoding of records.
//! - `collection`: paginated collection traversal over `next`/`prev` links.
//! - `remote`: the platform's error payload.
//! - `error`: the crate-level error and its classification.
//!
//! `#[derive(JsonObject)]` and `#[derive(Collection)]` generate the
//! descriptors both halves work from; the `prelude` brings them into scope
//! together with their traits.

pub use rumulocity_core::{Error, collection, error, jsonc, remote};
pub use rumulocity_derive::{Collection, JsonObject};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::{
        collection::{Collection, Link, Pager, PagingStatistics},
        jsonc::{Encode as _, Record as _},
    };
    pub use rumulocity_derive::{Collection, JsonObject};
    pub use serde::{Deserialize, Serialize};
}
