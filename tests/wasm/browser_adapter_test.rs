//! Browser-backed round trips for the storage and form adapters.
//!
//! Run with: `wasm-pack test --chrome --headless`

#![cfg(target_arch = "wasm32")]

use fleet_report_client::{
	BrowserStore, DateRangeCheck, DomFilterForm, FilterForm, FilterStore, ReportFilters,
	enforce_date_range, load_filters, save_filters,
};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

/// Installs the report form controls and a small results table.
fn install_page() {
	let document = web_sys::window().unwrap().document().unwrap();
	let body = document.body().unwrap();
	body.set_inner_html(
		"<input id=\"placa\">\
		 <input id=\"data_inicial\">\
		 <input id=\"data_final\">\
		 <button id=\"gerar_relatorio\"></button>\
		 <table id=\"movimento\"><tr><td>ABC 1234</td></tr></table>",
	);
}

fn clear_storage() {
	let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
	storage.clear().unwrap();
}

#[wasm_bindgen_test]
fn dom_form_reads_and_writes_the_inputs() {
	install_page();
	let mut form = DomFilterForm::new();

	let filters = ReportFilters::new("ABC1234", "2024-01-01", "2024-01-31");
	form.write(&filters).unwrap();

	assert_eq!(form.read().unwrap(), filters);
}

#[wasm_bindgen_test]
fn missing_element_is_an_explicit_error() {
	install_page();
	let form = DomFilterForm::with_ids("placa", "nope", "data_final", "gerar_relatorio");

	let err = form.read().unwrap_err();
	assert_eq!(err.to_string(), "element not found: #nope");
}

#[wasm_bindgen_test]
fn browser_store_round_trips_filters() {
	clear_storage();
	let mut store = BrowserStore::open().unwrap();
	assert!(store.is_empty().unwrap());

	let filters = ReportFilters::new("ABC1234", "2024-01-01", "2024-01-31");
	save_filters(&mut store, &filters).unwrap();

	assert_eq!(load_filters(&store).unwrap(), Some(filters));
}

#[wasm_bindgen_test]
fn empty_browser_store_restores_nothing() {
	clear_storage();
	let store = BrowserStore::open().unwrap();
	assert_eq!(load_filters(&store).unwrap(), None);
}

#[wasm_bindgen_test]
fn valid_range_enables_the_submit_button() {
	install_page();
	let mut form = DomFilterForm::new();
	form.write(&ReportFilters::new("ABC1234", "2024-01-01", "2024-02-01"))
		.unwrap();

	let check = enforce_date_range(&mut form).unwrap();

	assert_eq!(check, DateRangeCheck::Valid);
	let document = web_sys::window().unwrap().document().unwrap();
	let button = document.get_element_by_id("gerar_relatorio").unwrap();
	assert_eq!(button.get_attribute("disabled"), None);
}
