use multitab_core::{App, Field, InputEvent, MultitabError, Outcome};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Main table engine exposed to JavaScript.
///
/// The host owns the actual form, slider, and tabs widgets; it forwards
/// their change events here and re-reads whatever state the returned
/// outcome says was touched.
#[wasm_bindgen]
pub struct TableEngine {
    app: App,
}

/// Structured error object for JavaScript
#[derive(Serialize)]
pub struct JsMultitabError {
    code: String,
    message: String,
}

impl From<MultitabError> for JsMultitabError {
    fn from(err: MultitabError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

fn to_js_error(err: MultitabError) -> JsValue {
    let js_error = JsMultitabError::from(err);
    serde_wasm_bindgen::to_value(&js_error).unwrap_or(JsValue::NULL)
}

/// Per-field validation entry for JavaScript
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FieldReportData {
    field: &'static str,
    messages: Vec<&'static str>,
}

fn parse_field(name: &str) -> Result<Field, JsValue> {
    Field::from_name(name).ok_or_else(|| to_js_error(MultitabError::UnknownField(name.to_string())))
}

#[wasm_bindgen]
impl TableEngine {
    /// Create a new engine with empty fields and no tabs
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { app: App::new() }
    }

    // --- Input sync ---

    /// Record a text-field edit. Returns true when the active tab's table
    /// was rebuilt and must be re-rendered.
    #[wasm_bindgen(js_name = setFieldText)]
    pub fn set_field_text(&mut self, field: &str, text: &str) -> Result<bool, JsValue> {
        let field = parse_field(field)?;
        let outcome = self
            .app
            .handle_event(InputEvent::TextEdited {
                field,
                text: text.to_string(),
            })
            .map_err(to_js_error)?;
        Ok(outcome == Outcome::TableRebuilt)
    }

    /// Record a slider drag. Returns true when the table was rebuilt.
    #[wasm_bindgen(js_name = setSliderValue)]
    pub fn set_slider_value(&mut self, field: &str, value: i32) -> Result<bool, JsValue> {
        let field = parse_field(field)?;
        let outcome = self
            .app
            .handle_event(InputEvent::SliderMoved { field, value })
            .map_err(to_js_error)?;
        Ok(outcome == Outcome::TableRebuilt)
    }

    #[wasm_bindgen(js_name = getFieldText)]
    pub fn get_field_text(&self, field: &str) -> Result<String, JsValue> {
        Ok(self.app.field_text(parse_field(field)?).to_string())
    }

    #[wasm_bindgen(js_name = getSliderValue)]
    pub fn get_slider_value(&self, field: &str) -> Result<i32, JsValue> {
        Ok(self.app.slider_value(parse_field(field)?))
    }

    // --- Validation ---

    /// Per-field validation messages as a JSON array
    #[wasm_bindgen(js_name = getValidation)]
    pub fn get_validation(&self) -> String {
        let report = self.app.validate();
        let data: Vec<FieldReportData> = report
            .entries()
            .iter()
            .map(|(field, errors)| FieldReportData {
                field: field.name(),
                messages: errors.iter().map(|e| e.message()).collect(),
            })
            .collect();
        serde_json::to_string(&data).unwrap_or_else(|_| "[]".to_string())
    }

    #[wasm_bindgen(js_name = isFormValid)]
    pub fn is_form_valid(&self) -> bool {
        self.app.validate().is_valid()
    }

    // --- Tab management ---

    /// Save the current configuration as a new tab. Returns the new tab
    /// index, or undefined when the form is invalid.
    #[wasm_bindgen(js_name = saveTable)]
    pub fn save_table(&mut self) -> Result<Option<usize>, JsValue> {
        let outcome = self
            .app
            .handle_event(InputEvent::SaveRequested)
            .map_err(to_js_error)?;
        match outcome {
            Outcome::TabCreated(index) => {
                web_sys::console::log_1(&format!("Created tab {}", index + 1).into());
                Ok(Some(index))
            }
            _ => Ok(None),
        }
    }

    /// Switch to another tab. Returns true when stored bounds were loaded
    /// into the fields and sliders (the host must re-sync its widgets).
    #[wasm_bindgen(js_name = activateTab)]
    pub fn activate_tab(&mut self, index: usize) -> Result<bool, JsValue> {
        let outcome = self
            .app
            .handle_event(InputEvent::TabActivated(index))
            .map_err(to_js_error)?;
        Ok(outcome == Outcome::FieldsLoaded)
    }

    /// Close the tab at `index`. Returns the number of tabs remaining.
    #[wasm_bindgen(js_name = closeTab)]
    pub fn close_tab(&mut self, index: usize) -> Result<usize, JsValue> {
        self.app
            .handle_event(InputEvent::TabClosed(index))
            .map_err(to_js_error)?;
        let remaining = self.app.manager().tab_count();
        web_sys::console::log_1(
            &format!("Closed tab {} ({} remaining)", index + 1, remaining).into(),
        );
        Ok(remaining)
    }

    #[wasm_bindgen(js_name = setChecked)]
    pub fn set_checked(&mut self, index: usize, checked: bool) -> Result<(), JsValue> {
        self.app
            .handle_event(InputEvent::CheckboxToggled { index, checked })
            .map_err(to_js_error)?;
        Ok(())
    }

    /// Close every checked tab. Returns the number of tabs remaining.
    #[wasm_bindgen(js_name = closeSelected)]
    pub fn close_selected(&mut self) -> Result<usize, JsValue> {
        self.app
            .handle_event(InputEvent::CloseSelected)
            .map_err(to_js_error)?;
        Ok(self.app.manager().tab_count())
    }

    #[wasm_bindgen(js_name = tabCount)]
    pub fn tab_count(&self) -> usize {
        self.app.manager().tab_count()
    }

    #[wasm_bindgen(js_name = activeTabIndex)]
    pub fn active_tab_index(&self) -> usize {
        self.app.manager().active_index()
    }

    #[wasm_bindgen(js_name = hasTable)]
    pub fn has_table(&self) -> bool {
        self.app.manager().has_table()
    }

    /// All tab labels as a JSON array
    #[wasm_bindgen(js_name = getTabLabels)]
    pub fn get_tab_labels(&self) -> String {
        let labels = self.app.manager().labels();
        serde_json::to_string(&labels).unwrap_or_else(|_| "[]".to_string())
    }

    /// Checked state of one bulk-close checkbox
    #[wasm_bindgen(js_name = isChecked)]
    pub fn is_checked(&self, index: usize) -> bool {
        self.app
            .manager()
            .checkbox(index)
            .map(|c| c.checked)
            .unwrap_or(false)
    }

    // --- Rendering surface ---

    /// A tab's grid as a JSON array of rows of display strings, or JSON
    /// null when the tab does not exist
    #[wasm_bindgen(js_name = getTable)]
    pub fn get_table(&self, index: usize) -> String {
        match self.app.manager().tab(index) {
            Some(tab) => serde_json::to_string(&tab.table.display_rows())
                .unwrap_or_else(|_| "null".to_string()),
            None => "null".to_string(),
        }
    }

    /// The active tab's grid, or JSON null when no tab exists
    #[wasm_bindgen(js_name = getActiveTable)]
    pub fn get_active_table(&self) -> String {
        match self.app.manager().active_tab() {
            Some(tab) => serde_json::to_string(&tab.table.display_rows())
                .unwrap_or_else(|_| "null".to_string()),
            None => "null".to_string(),
        }
    }
}

impl Default for TableEngine {
    fn default() -> Self {
        Self::new()
    }
}
