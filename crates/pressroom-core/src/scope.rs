//! Row-visibility scopes.
//!
//! A [`Scope`] is the effective visibility filter for one {principal,
//! operation, model} triple. It is plain data: storage layers compile it to
//! their own filters through [`Queryset`], and in-memory rows are checked
//! directly with [`Scope::permits`].

use pressroom_types::attrs::AttrSet;
use pressroom_types::perm_adapter::Restriction;
use pressroom_types::prelude::*;

/// Field name resources carry their owning account under.
pub const ACCOUNT_FIELD: &str = "account";
/// Field name resources carry their creator under.
pub const CREATOR_FIELD: &str = "creator";

/// One `field ∈ values` clause taken from a restriction row.
///
/// Comparisons are opaque string comparisons, also against numeric ids.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldFilter {
	pub field: Box<str>,
	pub values: Box<[Box<str>]>,
}

impl FieldFilter {
	pub fn matches(&self, row: &dyn AttrSet) -> bool {
		if let Some(value) = row.get(&self.field) {
			return self.values.iter().any(|allowed| **allowed == *value);
		}
		if let Some(list) = row.get_list(&self.field) {
			return list.iter().any(|item| self.values.iter().any(|allowed| **allowed == **item));
		}
		false
	}
}

impl From<&Restriction> for FieldFilter {
	fn from(restriction: &Restriction) -> FieldFilter {
		FieldFilter { field: restriction.field.clone(), values: restriction.values.clone() }
	}
}

/// Effective row visibility for a principal
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Scope {
	/// Unrestricted. Superusers only.
	All,
	/// Rows belonging to one account.
	Account(AccountId),
	/// Rows authored by the principal. The fail-closed default.
	Creator(UserId),
	/// Rows matching any of the filters (OR semantics across restrictions).
	Restricted(Box<[FieldFilter]>),
}

impl Scope {
	/// Check a single row against this scope.
	pub fn permits(&self, row: &dyn AttrSet) -> bool {
		match self {
			Scope::All => true,
			Scope::Account(account_id) => row.has(ACCOUNT_FIELD, &account_id.to_string()),
			Scope::Creator(user_id) => row.has(CREATOR_FIELD, &user_id.to_string()),
			Scope::Restricted(filters) => filters.iter().any(|filter| filter.matches(row)),
		}
	}

	/// Narrow `queryset` to this scope.
	pub fn apply<Q: Queryset>(&self, queryset: Q) -> Q {
		match self {
			Scope::All => queryset,
			Scope::Account(account_id) => {
				queryset.filter_eq(ACCOUNT_FIELD, &account_id.to_string())
			}
			Scope::Creator(user_id) => queryset.filter_eq(CREATOR_FIELD, &user_id.to_string()),
			Scope::Restricted(filters) => queryset.filter_any(filters),
		}
	}
}

/// The only contract the scope selector requires from a storage layer.
pub trait Queryset: Sized {
	/// Keep rows whose `field` equals `value`.
	fn filter_eq(self, field: &str, value: &str) -> Self;

	/// Keep rows matching any of the `field ∈ values` clauses.
	fn filter_any(self, filters: &[FieldFilter]) -> Self;
}


// vim: ts=4
