//! Model registration table.
//!
//! Maps a model key to the labels its permissions are built from. Populated
//! once at startup by the consuming layer; the engine never reflects into
//! model metadata at request time.

use std::collections::HashMap;

use pressroom_types::perm_adapter::Perm;
use pressroom_types::prelude::*;

use crate::perm::PermAction;

/// Permission namespace of one registered model
#[derive(Clone, Debug)]
pub struct ModelMeta {
	pub key: Box<str>,
	pub app_label: Box<str>,
	pub model_name: Box<str>,
}

impl ModelMeta {
	pub fn new(
		key: impl Into<Box<str>>,
		app_label: impl Into<Box<str>>,
		model_name: impl Into<Box<str>>,
	) -> ModelMeta {
		ModelMeta { key: key.into(), app_label: app_label.into(), model_name: model_name.into() }
	}

	/// Permission string for `action` on this model:
	/// `"{app_label}.{action}_{model_name}"`.
	pub fn perm(&self, action: PermAction) -> Perm {
		Perm::new(format!("{}.{}_{}", self.app_label, action, self.model_name))
	}
}

/// Registry of all models the engine can scope
#[derive(Debug, Default)]
pub struct ModelRegistry {
	models: HashMap<Box<str>, ModelMeta>,
}

impl ModelRegistry {
	pub fn new() -> ModelRegistry {
		ModelRegistry { models: HashMap::new() }
	}

	/// Register a model. Re-registering a key is a configuration error.
	pub fn register(&mut self, meta: ModelMeta) -> PrResult<()> {
		if self.models.contains_key(&meta.key) {
			warn!(model = %meta.key, "model registered twice");
			return Err(Error::AlreadyExists);
		}
		self.models.insert(meta.key.clone(), meta);
		Ok(())
	}

	pub fn get(&self, key: &str) -> PrResult<&ModelMeta> {
		self.models.get(key).ok_or_else(|| Error::UnknownModel(key.into()))
	}

	pub fn len(&self) -> usize {
		self.models.len()
	}

	pub fn is_empty(&self) -> bool {
		self.models.is_empty()
	}
}


// vim: ts=4
