//! Principal context for permission evaluation.
//!
//! Every engine operation takes the principal explicitly; nothing is read
//! from ambient request state.

use serde::{Deserialize, Serialize};

use crate::model::AccountUser;
use crate::types::{AccountId, GroupId, UserId};

/// Context struct for an authenticated principal
#[derive(Clone, Debug)]
pub struct AuthCtx {
	pub user_id: UserId,
	pub account_id: Option<AccountId>,
	pub groups: Box<[GroupId]>,
	pub is_superuser: bool,
	pub is_staff: bool,
}

impl AuthCtx {
	/// Principal context for a provisioned account member.
	pub fn for_user(user: &AccountUser, groups: impl Into<Box<[GroupId]>>) -> AuthCtx {
		AuthCtx {
			user_id: user.user_id,
			account_id: Some(user.account_id),
			groups: groups.into(),
			is_superuser: false,
			is_staff: user.is_staff,
		}
	}

	/// Principal context for a global superuser.
	pub fn superuser(user_id: UserId) -> AuthCtx {
		AuthCtx {
			user_id,
			account_id: None,
			groups: Box::new([]),
			is_superuser: true,
			is_staff: false,
		}
	}

	/// All principals a grant or restriction may be bound to: the user
	/// itself plus every group it belongs to.
	pub fn grantees(&self) -> Vec<Grantee> {
		let mut grantees = Vec::with_capacity(1 + self.groups.len());
		grantees.push(Grantee::User(self.user_id));
		grantees.extend(self.groups.iter().map(|group_id| Grantee::Group(*group_id)));
		grantees
	}
}

/// The principal a restriction and its permission grant are bound to
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Grantee {
	User(UserId),
	Group(GroupId),
}

impl std::fmt::Display for Grantee {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Grantee::User(user_id) => write!(f, "user:{}", user_id),
			Grantee::Group(group_id) => write!(f, "group:{}", group_id),
		}
	}
}


// vim: ts=4
