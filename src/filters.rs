//! Search filter state, persister, and restorer.
//!
//! [`ReportFilters`] is the form-state object that the page operations pass
//! around instead of reaching into the DOM: the plate identifier plus the
//! start and end dates of the report query, all as plain strings.

use serde::{Deserialize, Serialize};

use crate::error::ClientResult;
use crate::storage::{FilterStore, KEY_END_DATE, KEY_PLATE, KEY_START_DATE};

/// Last-used search filters of the report form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFilters {
	/// Vehicle registration string.
	pub plate: String,
	/// Start date, ISO-style (`YYYY-MM-DD`).
	pub start_date: String,
	/// End date, ISO-style (`YYYY-MM-DD`).
	pub end_date: String,
}

impl ReportFilters {
	/// Creates a filter set from the three field values.
	pub fn new(
		plate: impl Into<String>,
		start_date: impl Into<String>,
		end_date: impl Into<String>,
	) -> Self {
		Self {
			plate: plate.into(),
			start_date: start_date.into(),
			end_date: end_date.into(),
		}
	}
}

/// Writes the filter values into the store, unconditionally overwriting
/// whatever was saved before. Saving the same values twice leaves the
/// store unchanged.
pub fn save_filters(store: &mut impl FilterStore, filters: &ReportFilters) -> ClientResult<()> {
	store.set(KEY_PLATE, &filters.plate)?;
	store.set(KEY_START_DATE, &filters.start_date)?;
	store.set(KEY_END_DATE, &filters.end_date)?;
	Ok(())
}

/// Reads the last saved filters back out of the store.
///
/// Returns `Ok(None)` when the store holds no entries at all, in which case
/// the caller must leave the form untouched. When the store is non-empty,
/// any individually absent key yields the empty string.
pub fn load_filters(store: &impl FilterStore) -> ClientResult<Option<ReportFilters>> {
	if store.is_empty()? {
		return Ok(None);
	}
	Ok(Some(ReportFilters {
		plate: store.get(KEY_PLATE)?.unwrap_or_default(),
		start_date: store.get(KEY_START_DATE)?.unwrap_or_default(),
		end_date: store.get(KEY_END_DATE)?.unwrap_or_default(),
	}))
}
