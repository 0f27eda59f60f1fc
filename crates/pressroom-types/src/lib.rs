//! Shared types, adapter traits, and error types for the Pressroom platform.
//!
//! This crate contains the foundational types that are shared between the
//! policy engine and all adapter implementations. Extracting these into a
//! separate crate allows adapter crates to compile in parallel with the
//! engine crate.

pub mod attrs;
pub mod auth;
pub mod error;
pub mod model;
pub mod perm_adapter;
pub mod prelude;
pub mod types;

// vim: ts=4
