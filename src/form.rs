//! Form-state adapter for the report page.
//!
//! Page operations never look elements up on their own; they receive a
//! [`FilterForm`] implementation instead. [`DomFilterForm`] binds the real
//! page controls on WASM targets, [`FakeFilterForm`] records everything in
//! memory for tests.

use crate::error::ClientResult;
use crate::filters::ReportFilters;

/// Element id of the plate input.
pub const PLATE_INPUT_ID: &str = "placa";

/// Element id of the start date input.
pub const START_DATE_INPUT_ID: &str = "data_inicial";

/// Element id of the end date input.
pub const END_DATE_INPUT_ID: &str = "data_final";

/// Element id of the "generate report" submit control.
pub const SUBMIT_CONTROL_ID: &str = "gerar_relatorio";

/// The report form as seen by the page operations.
pub trait FilterForm {
	/// Reads the current values of the three filter fields.
	fn read(&self) -> ClientResult<ReportFilters>;

	/// Writes filter values back into the three fields.
	fn write(&mut self, filters: &ReportFilters) -> ClientResult<()>;

	/// Enables or disables the submit control.
	fn set_submit_enabled(&mut self, enabled: bool) -> ClientResult<()>;

	/// Shows a blocking alert to the user.
	fn alert(&self, message: &str);
}

/// In-memory [`FilterForm`] for tests and native embedders.
///
/// Field values live in [`filters`](Self::filters); every alert message is
/// recorded instead of shown.
#[derive(Debug, Clone, Default)]
pub struct FakeFilterForm {
	/// Current field values.
	pub filters: ReportFilters,
	/// Whether the submit control is enabled. Defaults to `false`.
	pub submit_enabled: bool,
	alerts: std::cell::RefCell<Vec<String>>,
}

impl FakeFilterForm {
	/// Creates an empty form with the submit control disabled.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a form pre-filled with `filters`.
	pub fn with_filters(filters: ReportFilters) -> Self {
		Self {
			filters,
			..Self::default()
		}
	}

	/// Alert messages recorded so far, oldest first.
	pub fn alerts(&self) -> Vec<String> {
		self.alerts.borrow().clone()
	}
}

impl FilterForm for FakeFilterForm {
	fn read(&self) -> ClientResult<ReportFilters> {
		Ok(self.filters.clone())
	}

	fn write(&mut self, filters: &ReportFilters) -> ClientResult<()> {
		self.filters = filters.clone();
		Ok(())
	}

	fn set_submit_enabled(&mut self, enabled: bool) -> ClientResult<()> {
		self.submit_enabled = enabled;
		Ok(())
	}

	fn alert(&self, message: &str) {
		self.alerts.borrow_mut().push(message.to_string());
	}
}

/// [`FilterForm`] bound to the report page's DOM controls.
///
/// The default ids match the report template (`placa`, `data_inicial`,
/// `data_final`, `gerar_relatorio`); override them when embedding the
/// helpers on another page.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct DomFilterForm {
	plate_id: String,
	start_date_id: String,
	end_date_id: String,
	submit_id: String,
}

#[cfg(target_arch = "wasm32")]
impl Default for DomFilterForm {
	fn default() -> Self {
		Self {
			plate_id: PLATE_INPUT_ID.to_string(),
			start_date_id: START_DATE_INPUT_ID.to_string(),
			end_date_id: END_DATE_INPUT_ID.to_string(),
			submit_id: SUBMIT_CONTROL_ID.to_string(),
		}
	}
}

#[cfg(target_arch = "wasm32")]
impl DomFilterForm {
	/// Binds the default report page control ids.
	pub fn new() -> Self {
		Self::default()
	}

	/// Binds custom element ids.
	pub fn with_ids(
		plate_id: impl Into<String>,
		start_date_id: impl Into<String>,
		end_date_id: impl Into<String>,
		submit_id: impl Into<String>,
	) -> Self {
		Self {
			plate_id: plate_id.into(),
			start_date_id: start_date_id.into(),
			end_date_id: end_date_id.into(),
			submit_id: submit_id.into(),
		}
	}

	fn document() -> ClientResult<web_sys::Document> {
		web_sys::window()
			.and_then(|w| w.document())
			.ok_or_else(|| crate::error::ClientError::Dom("no document".to_string()))
	}

	fn element(id: &str) -> ClientResult<web_sys::Element> {
		Self::document()?
			.get_element_by_id(id)
			.ok_or_else(|| crate::error::ClientError::ElementNotFound(id.to_string()))
	}

	fn input(id: &str) -> ClientResult<web_sys::HtmlInputElement> {
		use wasm_bindgen::JsCast;

		Self::element(id)?
			.dyn_into::<web_sys::HtmlInputElement>()
			.map_err(|_| crate::error::ClientError::Dom(format!("#{id} is not an input")))
	}
}

#[cfg(target_arch = "wasm32")]
impl FilterForm for DomFilterForm {
	fn read(&self) -> ClientResult<ReportFilters> {
		Ok(ReportFilters {
			plate: Self::input(&self.plate_id)?.value(),
			start_date: Self::input(&self.start_date_id)?.value(),
			end_date: Self::input(&self.end_date_id)?.value(),
		})
	}

	fn write(&mut self, filters: &ReportFilters) -> ClientResult<()> {
		Self::input(&self.plate_id)?.set_value(&filters.plate);
		Self::input(&self.start_date_id)?.set_value(&filters.start_date);
		Self::input(&self.end_date_id)?.set_value(&filters.end_date);
		Ok(())
	}

	fn set_submit_enabled(&mut self, enabled: bool) -> ClientResult<()> {
		use wasm_bindgen::JsCast;

		// The submit control can be a <button> or an <input type="submit">.
		let element = Self::element(&self.submit_id)?;
		if let Some(button) = element.dyn_ref::<web_sys::HtmlButtonElement>() {
			button.set_disabled(!enabled);
			return Ok(());
		}
		if let Some(input) = element.dyn_ref::<web_sys::HtmlInputElement>() {
			input.set_disabled(!enabled);
			return Ok(());
		}
		Err(crate::error::ClientError::Dom(format!(
			"#{} is not a form control",
			self.submit_id
		)))
	}

	fn alert(&self, message: &str) {
		if let Some(window) = web_sys::window() {
			let _ = window.alert_with_message(message);
		}
	}
}
