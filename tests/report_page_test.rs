//! End-to-end exercises of the report page helpers against the in-memory
//! storage and form fakes.

use fleet_report_client::{
	DateRangeCheck, END_BEFORE_START_MESSAGE, FakeFilterForm, FilterForm, MemoryStore,
	ReportFilters, encode_table_markup, enforce_date_range, export_filename, load_filters,
	save_filters, spreadsheet_data_uri,
};
use rstest::rstest;

#[rstest]
fn persist_then_restore_round_trips_through_the_form() {
	// Fill the form, persist, clear the form, restore.
	let mut form = FakeFilterForm::with_filters(ReportFilters::new(
		"ABC1234",
		"2024-01-01",
		"2024-01-31",
	));
	let mut store = MemoryStore::new();

	save_filters(&mut store, &form.read().unwrap()).unwrap();
	form.write(&ReportFilters::default()).unwrap();

	let restored = load_filters(&store).unwrap().expect("filters were saved");
	form.write(&restored).unwrap();

	assert_eq!(
		form.read().unwrap(),
		ReportFilters::new("ABC1234", "2024-01-01", "2024-01-31")
	);
}

#[rstest]
fn restore_with_empty_storage_touches_no_field() {
	let filled = ReportFilters::new("XYZ9876", "2024-03-01", "2024-03-31");
	let mut form = FakeFilterForm::with_filters(filled.clone());
	let store = MemoryStore::new();

	if let Some(restored) = load_filters(&store).unwrap() {
		form.write(&restored).unwrap();
	}

	assert_eq!(form.read().unwrap(), filled);
}

#[rstest]
fn saving_twice_with_equal_values_leaves_storage_unchanged() {
	let filters = ReportFilters::new("ABC1234", "2024-01-01", "2024-01-31");
	let mut store = MemoryStore::new();

	save_filters(&mut store, &filters).unwrap();
	let first = load_filters(&store).unwrap();
	save_filters(&mut store, &filters).unwrap();
	let second = load_filters(&store).unwrap();

	assert_eq!(first, second);
	assert_eq!(store.len(), 3);
}

#[rstest]
fn inverted_range_alerts_and_disables_submit() {
	let mut form = FakeFilterForm::with_filters(ReportFilters::new(
		"ABC1234",
		"2024-02-01",
		"2024-01-01",
	));

	let check = enforce_date_range(&mut form).unwrap();

	assert_eq!(check, DateRangeCheck::EndBeforeStart);
	assert!(!form.submit_enabled);
	assert_eq!(form.alerts(), vec![END_BEFORE_START_MESSAGE]);
}

#[rstest]
fn valid_range_enables_submit_without_alert() {
	let mut form = FakeFilterForm::with_filters(ReportFilters::new(
		"ABC1234",
		"2024-01-01",
		"2024-02-01",
	));

	let check = enforce_date_range(&mut form).unwrap();

	assert_eq!(check, DateRangeCheck::Valid);
	assert!(form.submit_enabled);
	assert!(form.alerts().is_empty());
}

#[rstest]
fn equal_dates_enable_submit() {
	let mut form = FakeFilterForm::with_filters(ReportFilters::new(
		"ABC1234",
		"2024-01-15",
		"2024-01-15",
	));

	assert_eq!(enforce_date_range(&mut form).unwrap(), DateRangeCheck::Valid);
	assert!(form.submit_enabled);
}

#[rstest]
fn export_content_is_markup_with_encoded_spaces() {
	let table = "<table id=\"movimento\"><tr><td>ABC 1234</td><td>2024-01-01</td></tr></table>";

	let content = encode_table_markup(table);

	assert_eq!(
		content,
		"<table%20id=\"movimento\"><tr><td>ABC%201234</td><td>2024-01-01</td></tr></table>"
	);
	assert!(spreadsheet_data_uri(&content).starts_with("data:application/vnd.ms-excel, "));
}

#[rstest]
#[case("", "excel_data.xls")]
#[case("movimento", "movimento.xls")]
fn export_filename_rules(#[case] given: &str, #[case] expected: &str) {
	assert_eq!(export_filename(given), expected);
}
