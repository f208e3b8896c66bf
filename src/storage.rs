//! Filter storage adapter over the browser's persistent key/value store.
//!
//! The report page keeps the last-used search filters under three fixed
//! keys in `localStorage`, overwritten on every save, with no expiry or
//! versioning. Storage access goes through the [`FilterStore`] trait so
//! tests (and native embedders) can substitute [`MemoryStore`] for the
//! browser-backed [`BrowserStore`].

use std::collections::HashMap;

use crate::error::ClientResult;

/// Storage key for the plate filter.
pub const KEY_PLATE: &str = "placa";

/// Storage key for the start date filter.
pub const KEY_START_DATE: &str = "dt_inicial";

/// Storage key for the end date filter.
pub const KEY_END_DATE: &str = "dt_final";

/// Flat string key/value store for the search filters.
pub trait FilterStore {
	/// Returns the stored value for `key`, or `None` when absent.
	fn get(&self, key: &str) -> ClientResult<Option<String>>;

	/// Stores `value` under `key`, overwriting any prior value.
	fn set(&mut self, key: &str, value: &str) -> ClientResult<()>;

	/// Returns `true` when the store holds no entries at all.
	fn is_empty(&self) -> ClientResult<bool>;
}

/// In-memory [`FilterStore`] backed by a `HashMap`.
///
/// Used by native tests and dry runs; behaves like a fresh browser profile.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
	entries: HashMap<String, String>,
}

impl MemoryStore {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of stored entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}
}

impl FilterStore for MemoryStore {
	fn get(&self, key: &str) -> ClientResult<Option<String>> {
		Ok(self.entries.get(key).cloned())
	}

	fn set(&mut self, key: &str, value: &str) -> ClientResult<()> {
		self.entries.insert(key.to_string(), value.to_string());
		Ok(())
	}

	fn is_empty(&self) -> ClientResult<bool> {
		Ok(self.entries.is_empty())
	}
}

/// [`FilterStore`] backed by `window.localStorage`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct BrowserStore {
	storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl BrowserStore {
	/// Opens the page's local storage.
	///
	/// Returns [`ClientError::StorageUnavailable`](crate::ClientError::StorageUnavailable)
	/// when the browser blocks storage access (private mode, sandboxed frame).
	pub fn open() -> ClientResult<Self> {
		let storage = web_sys::window()
			.and_then(|w| w.local_storage().ok().flatten())
			.ok_or(crate::error::ClientError::StorageUnavailable)?;
		Ok(Self { storage })
	}
}

#[cfg(target_arch = "wasm32")]
impl FilterStore for BrowserStore {
	fn get(&self, key: &str) -> ClientResult<Option<String>> {
		self.storage
			.get_item(key)
			.map_err(crate::error::ClientError::storage)
	}

	fn set(&mut self, key: &str, value: &str) -> ClientResult<()> {
		self.storage
			.set_item(key, value)
			.map_err(crate::error::ClientError::storage)
	}

	fn is_empty(&self) -> ClientResult<bool> {
		let len = self
			.storage
			.length()
			.map_err(crate::error::ClientError::storage)?;
		Ok(len == 0)
	}
}
