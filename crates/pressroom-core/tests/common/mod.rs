//! Shared test doubles and fixtures
//!
//! In-memory implementations of the adapter and queryset contracts, plus
//! principal and row builders used across the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use pressroom_core::{FieldFilter, ModelMeta, ModelRegistry, Queryset};
use pressroom_types::attrs::AttrSet;
use pressroom_types::auth::{AuthCtx, Grantee};
use pressroom_types::model::AccountUser;
use pressroom_types::perm_adapter::{CreateRestrictionData, Perm, PermAdapter, Restriction};
use pressroom_types::prelude::*;

/// Common test setup helper
pub fn setup_test_logging() {
	let _ = tracing_subscriber::fmt()
		.with_test_writer()
		.with_max_level(tracing::Level::DEBUG)
		.try_init();
}

// Principals //
//************//

pub fn member(user_id: u32, account_id: u32) -> AuthCtx {
	AuthCtx::for_user(
		&AccountUser {
			user_id: UserId(user_id),
			account_id: AccountId(account_id),
			is_staff: false,
			created_at: now(),
		},
		[],
	)
}

pub fn member_of_groups(user_id: u32, account_id: u32, groups: &[u32]) -> AuthCtx {
	AuthCtx::for_user(
		&AccountUser {
			user_id: UserId(user_id),
			account_id: AccountId(account_id),
			is_staff: false,
			created_at: now(),
		},
		groups.iter().map(|group_id| GroupId(*group_id)).collect::<Vec<_>>(),
	)
}

pub fn staff(user_id: u32, account_id: u32) -> AuthCtx {
	AuthCtx::for_user(
		&AccountUser {
			user_id: UserId(user_id),
			account_id: AccountId(account_id),
			is_staff: true,
			created_at: now(),
		},
		[],
	)
}

// Model registry //
//****************//

/// Registry with the platform's content models
pub fn content_registry() -> ModelRegistry {
	let mut registry = ModelRegistry::new();
	for (key, app_label, model_name) in [
		("news", "news", "news"),
		("publication", "publishing", "publication"),
		("category", "publishing", "category"),
		("file", "files", "file"),
		("newsletter", "newsletters", "newsletter"),
	] {
		registry
			.register(ModelMeta::new(key, app_label, model_name))
			.expect("fixture registers each model once");
	}
	registry
}

// Rows and querysets //
//********************//

#[derive(Clone, Debug)]
pub struct MemRow(pub HashMap<Box<str>, Box<str>>);

impl MemRow {
	pub fn new(pairs: &[(&str, &str)]) -> MemRow {
		MemRow(pairs.iter().map(|(key, value)| ((*key).into(), (*value).into())).collect())
	}
}

impl AttrSet for MemRow {
	fn get(&self, key: &str) -> Option<Cow<'_, str>> {
		self.0.get(key).map(|value| Cow::Borrowed(value.as_ref()))
	}

	fn get_list(&self, _key: &str) -> Option<Vec<Cow<'_, str>>> {
		None
	}
}

/// Row with the ownership fields every content row carries
pub fn owned_row(account_id: u32, creator: u32) -> MemRow {
	MemRow::new(&[("account", &account_id.to_string()), ("creator", &creator.to_string())])
}

/// In-memory collection implementing the storage filter contract
#[derive(Clone, Debug, Default)]
pub struct MemQueryset {
	rows: Vec<MemRow>,
}

impl MemQueryset {
	pub fn new(rows: Vec<MemRow>) -> MemQueryset {
		MemQueryset { rows }
	}

	pub fn rows(&self) -> &[MemRow] {
		&self.rows
	}

	pub fn len(&self) -> usize {
		self.rows.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}
}

impl Queryset for MemQueryset {
	fn filter_eq(mut self, field: &str, value: &str) -> Self {
		self.rows.retain(|row| row.has(field, value));
		self
	}

	fn filter_any(mut self, filters: &[FieldFilter]) -> Self {
		self.rows.retain(|row| filters.iter().any(|filter| filter.matches(row)));
		self
	}
}

// Permission adapter //
//********************//

#[derive(Debug, Default)]
struct MemPermState {
	grants: HashMap<Grantee, HashSet<Perm>>,
	restrictions: Vec<Restriction>,
	next_id: i64,
}

/// In-memory permission directory and restriction store
#[derive(Debug, Default)]
pub struct MemPermAdapter {
	state: Mutex<MemPermState>,
}

impl MemPermAdapter {
	pub fn new() -> MemPermAdapter {
		MemPermAdapter::default()
	}
}

#[async_trait]
impl PermAdapter for MemPermAdapter {
	async fn grant(&self, grantee: Grantee, perm: &Perm) -> PrResult<()> {
		let mut state = self.state.lock().map_err(|_| Error::DbError)?;
		state.grants.entry(grantee).or_default().insert(perm.clone());
		Ok(())
	}

	async fn revoke(&self, grantee: Grantee, perm: &Perm) -> PrResult<()> {
		let mut state = self.state.lock().map_err(|_| Error::DbError)?;
		if let Some(perms) = state.grants.get_mut(&grantee) {
			perms.remove(perm);
		}
		Ok(())
	}

	async fn has_perm(&self, grantees: &[Grantee], perm: &Perm) -> PrResult<bool> {
		let state = self.state.lock().map_err(|_| Error::DbError)?;
		Ok(grantees
			.iter()
			.any(|grantee| state.grants.get(grantee).is_some_and(|perms| perms.contains(perm))))
	}

	async fn list_perms(&self, grantee: Grantee) -> PrResult<Vec<Perm>> {
		let state = self.state.lock().map_err(|_| Error::DbError)?;
		let mut perms: Vec<Perm> =
			state.grants.get(&grantee).map(|perms| perms.iter().cloned().collect()).unwrap_or_default();
		perms.sort_by(|a, b| a.as_str().cmp(b.as_str()));
		Ok(perms)
	}

	async fn create_restriction(
		&self,
		data: &CreateRestrictionData<'_>,
	) -> PrResult<RestrictionId> {
		let mut state = self.state.lock().map_err(|_| Error::DbError)?;
		state.next_id += 1;
		let restriction_id = RestrictionId(state.next_id);
		let restriction = Restriction {
			restriction_id,
			grantee: data.grantee,
			perm: data.perm.clone(),
			field: data.field.into(),
			values: data.values.iter().map(|value| Box::from(*value)).collect(),
			created_at: now(),
		};
		state.restrictions.push(restriction);
		Ok(restriction_id)
	}

	async fn read_restriction(&self, restriction_id: RestrictionId) -> PrResult<Restriction> {
		let state = self.state.lock().map_err(|_| Error::DbError)?;
		state
			.restrictions
			.iter()
			.find(|restriction| restriction.restriction_id == restriction_id)
			.cloned()
			.ok_or(Error::NotFound)
	}

	async fn delete_restriction(&self, restriction_id: RestrictionId) -> PrResult<()> {
		let mut state = self.state.lock().map_err(|_| Error::DbError)?;
		state.restrictions.retain(|restriction| restriction.restriction_id != restriction_id);
		Ok(())
	}

	async fn list_restrictions(
		&self,
		grantees: &[Grantee],
		perm: &Perm,
	) -> PrResult<Vec<Restriction>> {
		let state = self.state.lock().map_err(|_| Error::DbError)?;
		Ok(state
			.restrictions
			.iter()
			.filter(|restriction| {
				restriction.perm == *perm && grantees.contains(&restriction.grantee)
			})
			.cloned()
			.collect())
	}

	async fn count_restrictions(&self, grantee: Grantee, perm: &Perm) -> PrResult<u32> {
		let state = self.state.lock().map_err(|_| Error::DbError)?;
		Ok(state
			.restrictions
			.iter()
			.filter(|restriction| restriction.perm == *perm && restriction.grantee == grantee)
			.count() as u32)
	}
}

// vim: ts=4
