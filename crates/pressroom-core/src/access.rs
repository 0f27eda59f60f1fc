//! Scope selection for authenticated principals.
//!
//! Branch order is fixed: superuser, then staff, then ordinary members.
//! Ordinary members without the resolved permission (and any verb that
//! resolves to no permission at all) end up in creator-only scope.

use axum::http::Method;
use std::sync::Arc;

use pressroom_types::auth::AuthCtx;
use pressroom_types::perm_adapter::PermAdapter;
use pressroom_types::prelude::*;

use crate::perm;
use crate::registry::ModelRegistry;
use crate::scope::{FieldFilter, Queryset, Scope};

/// Decides which rows a principal may act upon, per HTTP method and model.
#[derive(Clone, Debug)]
pub struct AccessEngine {
	registry: Arc<ModelRegistry>,
	perms: Arc<dyn PermAdapter>,
}

impl AccessEngine {
	pub fn new(registry: Arc<ModelRegistry>, perms: Arc<dyn PermAdapter>) -> AccessEngine {
		AccessEngine { registry, perms }
	}

	/// Compute the visibility scope for `auth` performing `method` on the
	/// model registered under `model`.
	pub async fn scope_for(
		&self,
		auth: &AuthCtx,
		method: &Method,
		model: &str,
	) -> PrResult<Scope> {
		let meta = self.registry.get(model)?;

		if auth.is_superuser {
			debug!(subject = %auth.user_id, model = model, "superuser, unrestricted scope");
			return Ok(Scope::All);
		}

		if auth.is_staff {
			if let Some(account_id) = auth.account_id {
				debug!(subject = %auth.user_id, account = %account_id, model = model, "staff, account scope");
				return Ok(Scope::Account(account_id));
			}
			warn!(subject = %auth.user_id, "staff principal without account");
			return Ok(Scope::Creator(auth.user_id));
		}

		let Some(required) = perm::resolve(method, meta) else {
			debug!(subject = %auth.user_id, method = %method, model = model, "verb requires no permission, creator scope");
			return Ok(Scope::Creator(auth.user_id));
		};

		let grantees = auth.grantees();
		if !self.perms.has_perm(&grantees, &required).await? {
			debug!(subject = %auth.user_id, perm = %required, "permission not granted, creator scope");
			return Ok(Scope::Creator(auth.user_id));
		}

		let restrictions = self.perms.list_restrictions(&grantees, &required).await?;
		if !restrictions.is_empty() {
			debug!(
				subject = %auth.user_id,
				perm = %required,
				restrictions = restrictions.len(),
				"restricted scope"
			);
			let filters: Box<[FieldFilter]> =
				restrictions.iter().map(FieldFilter::from).collect();
			return Ok(Scope::Restricted(filters));
		}

		match auth.account_id {
			Some(account_id) => {
				debug!(subject = %auth.user_id, perm = %required, account = %account_id, "no restrictions, account scope");
				Ok(Scope::Account(account_id))
			}
			None => Ok(Scope::Creator(auth.user_id)),
		}
	}

	/// Compute the scope and narrow `queryset` with it in one step.
	pub async fn filter<Q: Queryset>(
		&self,
		auth: &AuthCtx,
		method: &Method,
		model: &str,
		queryset: Q,
	) -> PrResult<Q> {
		let scope = self.scope_for(auth, method, model).await?;
		Ok(scope.apply(queryset))
	}
}

// vim: ts=4
