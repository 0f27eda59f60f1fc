//! Permission resolution: HTTP verb and model to required permission.

use axum::http::Method;

use pressroom_types::perm_adapter::Perm;

use crate::registry::ModelMeta;

/// Action component of a model permission
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PermAction {
	View,
	Add,
	Change,
	Delete,
}

impl PermAction {
	/// Fixed verb table: GET maps to View, POST to Add, PUT/PATCH to Change,
	/// DELETE to Delete. OPTIONS, HEAD and unknown verbs require no
	/// permission; downstream scope selection treats those as fail-closed.
	pub fn from_method(method: &Method) -> Option<PermAction> {
		match *method {
			Method::GET => Some(PermAction::View),
			Method::POST => Some(PermAction::Add),
			Method::PUT | Method::PATCH => Some(PermAction::Change),
			Method::DELETE => Some(PermAction::Delete),
			_ => None,
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			PermAction::View => "view",
			PermAction::Add => "add",
			PermAction::Change => "change",
			PermAction::Delete => "delete",
		}
	}
}

impl std::fmt::Display for PermAction {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

/// Resolve the permission required for `method` on the model described by
/// `meta`, or `None` when the verb requires no permission. Pure function
/// over the verb table and the registry entry.
pub fn resolve(method: &Method, meta: &ModelMeta) -> Option<Perm> {
	PermAction::from_method(method).map(|action| meta.perm(action))
}


// vim: ts=4
