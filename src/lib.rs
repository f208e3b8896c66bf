//! Client-side helpers for the fleet report page.
//!
//! This crate replaces the report template's inline script with a WASM
//! bundle covering the same four page operations:
//!
//! - [`export`](mod@export): export the results table as an Excel-flavored
//!   download
//! - [`filters`]: persist the last-used search filters in `localStorage`
//!   and restore them on page load
//! - [`validate`]: disable the "generate report" control while the date
//!   range is inverted
//! - [`page`]: `#[wasm_bindgen]` entry points under the JS names the
//!   template already binds to
//!
//! Storage and DOM access go through the [`FilterStore`] and [`FilterForm`]
//! adapters, so all page logic runs unchanged on native targets against
//! [`MemoryStore`] and [`FakeFilterForm`].
//!
//! ## Example
//!
//! ```
//! use fleet_report_client::{
//! 	MemoryStore, ReportFilters, load_filters, save_filters,
//! };
//!
//! let mut store = MemoryStore::new();
//! let filters = ReportFilters::new("ABC1234", "2024-01-01", "2024-01-31");
//! save_filters(&mut store, &filters).unwrap();
//! assert_eq!(load_filters(&store).unwrap(), Some(filters));
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod export;
pub mod filters;
pub mod form;
pub mod logging;
pub mod storage;
pub mod validate;

// Page entry points are only meaningful inside the browser bundle.
#[cfg(target_arch = "wasm32")]
pub mod page;

pub use error::{ClientError, ClientResult};
pub use export::{
	DEFAULT_EXPORT_FILENAME, SPREADSHEET_MEDIA_TYPE, UTF8_BOM, encode_table_markup,
	export_filename, spreadsheet_data_uri,
};
#[cfg(target_arch = "wasm32")]
pub use export::export_table;
pub use filters::{ReportFilters, load_filters, save_filters};
#[cfg(target_arch = "wasm32")]
pub use form::DomFilterForm;
pub use form::{FakeFilterForm, FilterForm};
#[cfg(target_arch = "wasm32")]
pub use storage::BrowserStore;
pub use storage::{FilterStore, KEY_END_DATE, KEY_PLATE, KEY_START_DATE, MemoryStore};
pub use validate::{
	DateRangeCheck, END_BEFORE_START_MESSAGE, check_date_range, enforce_date_range,
};

// Logging macros are exported via #[macro_export]:
// fleet_report_client::info_log!, warn_log!, error_log!.
