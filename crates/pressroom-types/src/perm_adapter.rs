//! Adapter contract for the permission directory and the restriction store.
//!
//! The engine consumes grants and restriction rows exclusively through the
//! [`PermAdapter`] trait; storage backends implement it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::auth::Grantee;
use crate::prelude::*;

// Perm //
//******//
/// A model permission, formatted `"{app_label}.{action}_{model_name}"`
/// (e.g. `news.add_news`). Treated as an opaque identifier everywhere
/// outside the resolver that constructs it.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Perm(Box<str>);

impl Perm {
	pub fn new(perm: impl Into<Box<str>>) -> Perm {
		Perm(perm.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl std::fmt::Display for Perm {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl Serialize for Perm {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_str(&self.0)
	}
}

impl<'de> Deserialize<'de> for Perm {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		Ok(Perm(Box::<str>::deserialize(deserializer)?))
	}
}

/// A policy record narrowing an otherwise-granted permission to rows
/// matching a field/value filter.
///
/// Values are a typed list from creation time on; adapters that serialize
/// them as a delimited string parse at the storage boundary, never at
/// filter-evaluation time.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Restriction {
	#[serde(rename = "id")]
	pub restriction_id: RestrictionId,
	pub grantee: Grantee,
	pub perm: Perm,
	pub field: Box<str>,
	pub values: Box<[Box<str>]>,
	pub created_at: Timestamp,
}

/// Data needed to create a new restriction
#[derive(Debug)]
pub struct CreateRestrictionData<'a> {
	pub grantee: Grantee,
	pub perm: &'a Perm,
	pub field: &'a str,
	pub values: &'a [&'a str],
}

#[async_trait]
pub trait PermAdapter: Debug + Send + Sync {
	/// # Permission directory

	/// Grant `perm` to `grantee`. Idempotent: granting an already-held
	/// permission succeeds without effect.
	async fn grant(&self, grantee: Grantee, perm: &Perm) -> PrResult<()>;

	/// Revoke `perm` from `grantee`. Revoking an absent grant is a no-op.
	async fn revoke(&self, grantee: Grantee, perm: &Perm) -> PrResult<()>;

	/// Whether any of `grantees` holds `perm`.
	async fn has_perm(&self, grantees: &[Grantee], perm: &Perm) -> PrResult<bool>;

	/// All permissions held by `grantee`, sorted.
	async fn list_perms(&self, grantee: Grantee) -> PrResult<Vec<Perm>>;

	/// # Restrictions

	async fn create_restriction(&self, data: &CreateRestrictionData<'_>)
		-> PrResult<RestrictionId>;

	async fn read_restriction(&self, restriction_id: RestrictionId) -> PrResult<Restriction>;

	async fn delete_restriction(&self, restriction_id: RestrictionId) -> PrResult<()>;

	/// Restriction rows bound to any of `grantees` for `perm`.
	async fn list_restrictions(&self, grantees: &[Grantee], perm: &Perm)
		-> PrResult<Vec<Restriction>>;

	/// Number of restriction rows binding `grantee` to `perm`.
	async fn count_restrictions(&self, grantee: Grantee, perm: &Perm) -> PrResult<u32>;
}

// vim: ts=4
