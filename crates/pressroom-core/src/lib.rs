//! Permission policy engine for the Pressroom platform.
//!
//! Decides, per HTTP method and per model, which rows a principal may act
//! upon: global model permissions combined with per-field restrictions that
//! narrow visibility to a field/value list.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod access;
pub mod perm;
pub mod registry;
pub mod restriction;
pub mod scope;

// Re-export commonly used types
pub use access::AccessEngine;
pub use perm::PermAction;
pub use registry::{ModelMeta, ModelRegistry};
pub use restriction::RestrictionService;
pub use scope::{FieldFilter, Queryset, Scope};

// vim: ts=4
