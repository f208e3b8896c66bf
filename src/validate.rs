//! Date-range validation for the report form.
//!
//! The dates are ISO-style strings, so the comparison is lexicographic.
//! The submit control has two steady states (enabled, disabled) and a
//! single transition rule evaluated on every field-change event.

use crate::error::ClientResult;
use crate::form::FilterForm;

/// Blocking alert shown when the end date sorts before the start date.
/// The report page is Portuguese; the message stays verbatim.
pub const END_BEFORE_START_MESSAGE: &str = "Data Final não pode ser menor que a Data Inicial...";

/// Outcome of comparing the report date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRangeCheck {
	/// End date is on or after the start date (or either field is such
	/// that the lexicographic rule does not flag it).
	Valid,
	/// End date sorts strictly before the start date.
	EndBeforeStart,
}

/// Compares the two date strings lexicographically, exactly like the
/// page's original `<` comparison.
pub fn check_date_range(start: &str, end: &str) -> DateRangeCheck {
	if end < start {
		DateRangeCheck::EndBeforeStart
	} else {
		DateRangeCheck::Valid
	}
}

/// Reads both date fields from the form and applies the transition rule:
/// an inverted range raises the blocking alert and disables the submit
/// control, anything else enables it.
pub fn enforce_date_range(form: &mut impl FilterForm) -> ClientResult<DateRangeCheck> {
	let filters = form.read()?;
	let check = check_date_range(&filters.start_date, &filters.end_date);
	match check {
		DateRangeCheck::EndBeforeStart => {
			form.alert(END_BEFORE_START_MESSAGE);
			form.set_submit_enabled(false)?;
		}
		DateRangeCheck::Valid => {
			form.set_submit_enabled(true)?;
		}
	}
	Ok(check)
}
