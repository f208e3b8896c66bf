//! Error types for the report page helpers.
//!
//! The original page script let missing elements fail inside the browser
//! with an uncaught exception. Here every fallible operation returns a
//! [`ClientResult`] so callers see an explicit [`ClientError::ElementNotFound`]
//! instead of an unhandled fault.

use thiserror::Error;

/// Result type for client-side page operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors raised by the report page helpers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
	/// A DOM id did not resolve to an element.
	#[error("element not found: #{0}")]
	ElementNotFound(String),

	/// `window.localStorage` is missing or blocked by the browser.
	#[error("browser storage unavailable")]
	StorageUnavailable,

	/// The browser rejected a storage read or write.
	#[error("storage error: {0}")]
	Storage(String),

	/// Any other DOM or JS interop failure.
	#[error("DOM error: {0}")]
	Dom(String),
}

#[cfg(target_arch = "wasm32")]
impl ClientError {
	/// Wraps an opaque JS exception raised by the Storage API.
	pub(crate) fn storage(err: wasm_bindgen::JsValue) -> Self {
		Self::Storage(format!("{err:?}"))
	}

	/// Wraps an opaque JS exception raised by a DOM call.
	pub(crate) fn dom(err: wasm_bindgen::JsValue) -> Self {
		Self::Dom(format!("{err:?}"))
	}
}
