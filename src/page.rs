//! Page entry points wired to the report template's event handlers.
//!
//! The exports keep the JS names the template already binds to
//! (`exportTableToExcel`, `armazenarConsulta`, `ultimaConsulta`,
//! `verificar_data`), so swapping the old script for the WASM bundle needs
//! no template changes. The page has no error UI; failures go to the
//! console.

use wasm_bindgen::prelude::*;

use crate::error::ClientResult;
use crate::filters::{load_filters, save_filters};
use crate::form::{DomFilterForm, FilterForm};
use crate::storage::BrowserStore;
use crate::{error_log, info_log};

/// Exports the identified table as a spreadsheet download.
#[wasm_bindgen(js_name = "exportTableToExcel")]
pub fn export_table_to_excel(table_id: String, filename: Option<String>) {
	if let Err(err) = crate::export::export_table(&table_id, filename.as_deref().unwrap_or("")) {
		error_log!("table export failed: {err}");
	}
}

/// Persists the current search filters into local storage.
#[wasm_bindgen(js_name = "armazenarConsulta")]
pub fn store_last_search() {
	let result = (|| -> ClientResult<()> {
		let form = DomFilterForm::new();
		let mut store = BrowserStore::open()?;
		save_filters(&mut store, &form.read()?)
	})();
	match result {
		Ok(()) => info_log!("search filters stored"),
		Err(err) => error_log!("storing search filters failed: {err}"),
	}
}

/// Restores the last saved search filters into the form, if any were saved.
#[wasm_bindgen(js_name = "ultimaConsulta")]
pub fn restore_last_search() {
	let result = (|| -> ClientResult<bool> {
		let store = BrowserStore::open()?;
		match load_filters(&store)? {
			Some(filters) => {
				DomFilterForm::new().write(&filters)?;
				Ok(true)
			}
			None => Ok(false),
		}
	})();
	match result {
		Ok(true) => info_log!("last search filters restored"),
		Ok(false) => info_log!("no stored search filters"),
		Err(err) => error_log!("restoring search filters failed: {err}"),
	}
}

/// Re-checks the date range and toggles the submit control accordingly.
#[wasm_bindgen(js_name = "verificar_data")]
pub fn check_report_dates() {
	let mut form = DomFilterForm::new();
	if let Err(err) = crate::validate::enforce_date_range(&mut form) {
		error_log!("date range check failed: {err}");
	}
}
