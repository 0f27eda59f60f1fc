//! Restriction lifecycle.
//!
//! Creating a restriction grants the bound permission to its grantee;
//! deleting one revokes the permission only when no sibling restriction of
//! the same grantee still references it.

use std::sync::Arc;

use pressroom_types::perm_adapter::{CreateRestrictionData, PermAdapter, Restriction};
use pressroom_types::prelude::*;

/// Service wrapping restriction persistence with its permission side
/// effects. All mutation of restriction rows goes through here.
#[derive(Clone, Debug)]
pub struct RestrictionService {
	perms: Arc<dyn PermAdapter>,
}

impl RestrictionService {
	pub fn new(perms: Arc<dyn PermAdapter>) -> RestrictionService {
		RestrictionService { perms }
	}

	/// Persist a restriction and grant its permission to the grantee.
	///
	/// The row is written first: a failed insert must not leave a stray
	/// grant behind.
	pub async fn create(&self, data: &CreateRestrictionData<'_>) -> PrResult<RestrictionId> {
		let restriction_id = self.perms.create_restriction(data).await?;
		self.perms.grant(data.grantee, data.perm).await?;
		info!(
			grantee = %data.grantee,
			perm = %data.perm,
			field = data.field,
			"restriction created"
		);
		Ok(restriction_id)
	}

	pub async fn read(&self, restriction_id: RestrictionId) -> PrResult<Restriction> {
		self.perms.read_restriction(restriction_id).await
	}

	/// Delete a restriction and revoke its permission unless a sibling
	/// restriction of the same grantee still requires it.
	pub async fn delete(&self, restriction_id: RestrictionId) -> PrResult<()> {
		let restriction = self.perms.read_restriction(restriction_id).await?;
		self.perms.delete_restriction(restriction_id).await?;

		let remaining =
			self.perms.count_restrictions(restriction.grantee, &restriction.perm).await?;
		if remaining == 0 {
			self.perms.revoke(restriction.grantee, &restriction.perm).await?;
			info!(
				grantee = %restriction.grantee,
				perm = %restriction.perm,
				"restriction deleted, permission revoked"
			);
		} else {
			debug!(
				grantee = %restriction.grantee,
				perm = %restriction.perm,
				remaining = remaining,
				"restriction deleted, permission still required"
			);
		}
		Ok(())
	}
}

// vim: ts=4
