//! HTML table to spreadsheet export.
//!
//! Excel opens raw HTML table markup served under the
//! `application/vnd.ms-excel` media type, so the export is a straight
//! serialization of the table element with literal spaces percent-encoded.
//! Delivery uses the legacy `navigator.msSaveOrOpenBlob` hook when the
//! browser exposes one, and a programmatically clicked data-URI anchor
//! everywhere else.

/// Media type declared on the exported file.
pub const SPREADSHEET_MEDIA_TYPE: &str = "application/vnd.ms-excel";

/// Filename used when the caller gives none.
pub const DEFAULT_EXPORT_FILENAME: &str = "excel_data.xls";

/// UTF-8 byte-order marker prepended on the blob path so spreadsheet
/// readers pick the right encoding.
pub const UTF8_BOM: &str = "\u{feff}";

/// Resolves the download filename: empty input falls back to
/// [`DEFAULT_EXPORT_FILENAME`], anything else gets the `.xls` suffix.
pub fn export_filename(name: &str) -> String {
	if name.is_empty() {
		DEFAULT_EXPORT_FILENAME.to_string()
	} else {
		format!("{name}.xls")
	}
}

/// Percent-encodes literal spaces in the table markup. Nothing else is
/// escaped; Excel tolerates the rest of the markup as-is.
pub fn encode_table_markup(html: &str) -> String {
	html.replace(' ', "%20")
}

/// Builds the data URI used on the anchor delivery path.
///
/// The space after the comma is part of the wire format the report page
/// has always produced; keep it.
pub fn spreadsheet_data_uri(markup: &str) -> String {
	format!("data:{SPREADSHEET_MEDIA_TYPE}, {markup}")
}

/// Serializes the table identified by `table_id` and offers it to the user
/// as a spreadsheet download.
///
/// An empty `filename` selects [`DEFAULT_EXPORT_FILENAME`]. The anchor
/// created on the data-URI path stays attached to the page, mirroring the
/// original script.
#[cfg(target_arch = "wasm32")]
pub fn export_table(table_id: &str, filename: &str) -> crate::error::ClientResult<()> {
	use wasm_bindgen::{JsCast, JsValue};

	use crate::error::ClientError;

	let window = web_sys::window().ok_or_else(|| ClientError::Dom("no window".to_string()))?;
	let document = window
		.document()
		.ok_or_else(|| ClientError::Dom("no document".to_string()))?;
	let table = document
		.get_element_by_id(table_id)
		.ok_or_else(|| ClientError::ElementNotFound(table_id.to_string()))?;

	let markup = encode_table_markup(&table.outer_html());
	let filename = export_filename(filename);

	let navigator = window.navigator();
	if let Some(save_blob) = ms_save_blob(&navigator) {
		let parts = js_sys::Array::new();
		parts.push(&JsValue::from_str(UTF8_BOM));
		parts.push(&JsValue::from_str(&markup));
		let options = web_sys::BlobPropertyBag::new();
		options.set_type(SPREADSHEET_MEDIA_TYPE);
		let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
			.map_err(ClientError::dom)?;
		save_blob
			.call2(navigator.as_ref(), blob.as_ref(), &JsValue::from_str(&filename))
			.map_err(ClientError::dom)?;
		return Ok(());
	}

	let anchor: web_sys::HtmlAnchorElement = document
		.create_element("a")
		.map_err(ClientError::dom)?
		.dyn_into()
		.map_err(|_| ClientError::Dom("created element is not an anchor".to_string()))?;
	let body = document
		.body()
		.ok_or_else(|| ClientError::Dom("no body".to_string()))?;
	body.append_child(&anchor).map_err(ClientError::dom)?;
	anchor.set_href(&spreadsheet_data_uri(&markup));
	anchor.set_download(&filename);
	anchor.click();
	Ok(())
}

/// Legacy IE/Edge save hook, detected dynamically since `web-sys` carries
/// no binding for it.
#[cfg(target_arch = "wasm32")]
fn ms_save_blob(navigator: &web_sys::Navigator) -> Option<js_sys::Function> {
	use wasm_bindgen::{JsCast, JsValue};

	let hook =
		js_sys::Reflect::get(navigator.as_ref(), &JsValue::from_str("msSaveOrOpenBlob")).ok()?;
	hook.dyn_into::<js_sys::Function>().ok()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_filename_defaults_when_empty() {
		assert_eq!(export_filename(""), "excel_data.xls");
	}

	#[rstest]
	#[case("relatorio", "relatorio.xls")]
	#[case("movimento_2024", "movimento_2024.xls")]
	fn test_filename_gets_xls_suffix(#[case] name: &str, #[case] expected: &str) {
		assert_eq!(export_filename(name), expected);
	}

	#[rstest]
	fn test_markup_spaces_are_percent_encoded() {
		let html = "<table id=\"tab\"><tr><td>ABC 1234</td></tr></table>";
		assert_eq!(
			encode_table_markup(html),
			"<table%20id=\"tab\"><tr><td>ABC%201234</td></tr></table>"
		);
	}

	#[rstest]
	fn test_markup_without_spaces_is_unchanged() {
		let html = "<table><tr><td>x</td></tr></table>";
		assert_eq!(encode_table_markup(html), html);
	}

	#[rstest]
	fn test_data_uri_carries_media_type_and_markup() {
		assert_eq!(
			spreadsheet_data_uri("<table></table>"),
			"data:application/vnd.ms-excel, <table></table>"
		);
	}

	#[rstest]
	fn test_bom_is_single_codepoint() {
		assert_eq!(UTF8_BOM.chars().count(), 1);
		assert_eq!(UTF8_BOM.as_bytes(), b"\xEF\xBB\xBF");
	}
}
