// WebAssembly bindings for browser front-ends
use crate::config::{self, FormConfig};
use crate::form::{Axis, Form};
use crate::units::{self, UnitCategory};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct FormWasm {
    form: Form,
}

#[wasm_bindgen]
impl FormWasm {
    /// Build a form from a TOML form definition
    #[wasm_bindgen(constructor)]
    pub fn new(definition: &str) -> Result<FormWasm, JsValue> {
        let form = FormConfig::load_from_str(definition)
            .and_then(FormConfig::into_form)
            .map_err(|e| JsValue::from_str(&format!("Failed to build form: {}", e)))?;
        Ok(Self { form })
    }

    /// Layout as JSON: {"columns": n, "sections": [{"heading": ..., "rows": [[label, ...]]}]}
    #[wasm_bindgen]
    pub fn layout(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.form.layout())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize layout: {}", e)))
    }

    /// Raw values as a JSON value-tuple mapping
    #[wasm_bindgen]
    pub fn get_values(&self) -> Result<String, JsValue> {
        config::values_to_json(&self.form.get_values())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize values: {}", e)))
    }

    /// SI values as a JSON value-tuple mapping
    #[wasm_bindgen]
    pub fn get_values_si(&self) -> Result<String, JsValue> {
        config::values_to_json(&self.form.get_values_si())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize values: {}", e)))
    }

    /// Load a JSON value-tuple mapping shaped like `get_values()`
    #[wasm_bindgen]
    pub fn load_data(&mut self, values_json: &str) -> Result<(), JsValue> {
        let values = config::load_values_from_str(values_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse values: {}", e)))?;
        self.form
            .load_data(&values)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen]
    pub fn clear_values(&mut self) {
        self.form.clear_values();
    }

    #[wasm_bindgen]
    pub fn set_text(&mut self, label: &str, text: &str) -> Result<(), JsValue> {
        self.form
            .set_text(label, text)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Edit one component ("x", "y" or "z") of a position field
    #[wasm_bindgen]
    pub fn set_axis_text(&mut self, label: &str, axis: &str, text: &str) -> Result<(), JsValue> {
        let axis = Axis::from_name(axis)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown axis '{}'", axis)))?;
        self.form
            .set_axis_text(label, axis, text)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Enter a quantity such as "12 ft", selecting its unit
    #[wasm_bindgen]
    pub fn enter_quantity(&mut self, label: &str, quantity: &str) -> Result<(), JsValue> {
        self.form
            .enter_quantity(label, quantity)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen]
    pub fn set_checked(&mut self, label: &str, checked: bool) -> Result<(), JsValue> {
        self.form
            .set_checked(label, checked)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen]
    pub fn set_unit_index(&mut self, label: &str, index: usize) -> Result<(), JsValue> {
        self.form
            .set_unit_index(label, index)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Nested SI export keyed by canonical key
    #[wasm_bindgen]
    pub fn export_si(&self) -> Result<String, JsValue> {
        let exported = self
            .form
            .export_si()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        serde_json::to_string(&exported)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize export: {}", e)))
    }
}

/// Unit symbols of a category, in index order, as a JSON array
#[wasm_bindgen]
pub fn unit_symbols(category: &str) -> Result<String, JsValue> {
    let category: UnitCategory = category
        .parse()
        .map_err(|e: units::UnitError| JsValue::from_str(&e.to_string()))?;
    let symbols: Vec<&str> = units::entries(category).iter().map(|u| u.symbol).collect();
    serde_json::to_string(&symbols)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize units: {}", e)))
}
