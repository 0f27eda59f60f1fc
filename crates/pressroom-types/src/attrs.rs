//! Attribute view over content rows.
//!
//! Scopes and restriction filters never know the concrete row types of the
//! CRUD layer; they evaluate against this trait. Numeric fields (account and
//! creator ids among them) are exposed in their decimal string form, so all
//! filter comparisons are opaque string comparisons.

use std::borrow::Cow;

/// Attribute set trait - rows evaluated by a scope implement this
pub trait AttrSet: Send + Sync {
	/// Get a single attribute in string form
	fn get(&self, key: &str) -> Option<Cow<'_, str>>;

	/// Get a list attribute in string form
	fn get_list(&self, key: &str) -> Option<Vec<Cow<'_, str>>>;

	/// Check if attribute equals value
	fn has(&self, key: &str, value: &str) -> bool {
		self.get(key).as_deref() == Some(value)
	}

	/// Check if list attribute contains value
	fn contains(&self, key: &str, value: &str) -> bool {
		self.get_list(key).is_some_and(|list| list.iter().any(|item| item == value))
	}
}

// vim: ts=4
