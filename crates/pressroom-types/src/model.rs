//! Domain models shared between the engine and storage adapters.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::borrow::Cow;

use crate::attrs::AttrSet;
use crate::auth::AuthCtx;
use crate::prelude::*;

/// Tenant root. Owns users and resources.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
	#[serde(rename = "id")]
	pub account_id: AccountId,
	pub owner: UserId,
	pub expires_at: Option<Timestamp>,
	pub created_at: Timestamp,
	pub updated_at: Timestamp,
}

impl Account {
	pub fn is_expired(&self, at: Timestamp) -> bool {
		self.expires_at.is_some_and(|expires_at| expires_at <= at)
	}
}

/// Links a login identity to an account. Staff members administer the
/// account; ordinary members are scoped by permission rules.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountUser {
	pub user_id: UserId,
	pub account_id: AccountId,
	pub is_staff: bool,
	pub created_at: Timestamp,
}

/// Ownership metadata common to all tenant-owned content rows.
///
/// Account and creator always reflect the request identity at creation time.
/// Both fields are private: only [`ResourceMeta::for_principal`] sets them,
/// and nothing can change them afterwards.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceMeta {
	#[serde(rename = "account")]
	account_id: AccountId,
	creator: UserId,
	created_at: Timestamp,
}

impl ResourceMeta {
	/// Stamp a new resource with the requesting principal's identity.
	///
	/// Principals without an account cannot own resources.
	pub fn for_principal(auth: &AuthCtx) -> PrResult<ResourceMeta> {
		let Some(account_id) = auth.account_id else {
			return Err(Error::PermissionDenied);
		};
		Ok(ResourceMeta { account_id, creator: auth.user_id, created_at: now() })
	}

	pub fn account_id(&self) -> AccountId {
		self.account_id
	}

	pub fn creator(&self) -> UserId {
		self.creator
	}

	pub fn created_at(&self) -> Timestamp {
		self.created_at
	}
}

impl AttrSet for ResourceMeta {
	fn get(&self, key: &str) -> Option<Cow<'_, str>> {
		match key {
			"account" => Some(Cow::Owned(self.account_id.to_string())),
			"creator" => Some(Cow::Owned(self.creator.to_string())),
			_ => None,
		}
	}

	fn get_list(&self, _key: &str) -> Option<Vec<Cow<'_, str>>> {
		None
	}
}


// vim: ts=4
