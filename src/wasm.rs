use wasm_bindgen::prelude::*;

fn to_js(e: crate::LabelError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen(js_name = calculateLayout)]
pub fn calculate_layout(json: &str) -> Result<String, JsValue> {
    crate::layout_json(json).map_err(to_js)
}

#[wasm_bindgen(js_name = calculateLayoutInfo)]
pub fn calculate_layout_info(json: &str) -> Result<String, JsValue> {
    crate::layout_info_json(json).map_err(to_js)
}

#[wasm_bindgen(js_name = calculateSnap)]
pub fn calculate_snap(json: &str) -> Result<String, JsValue> {
    crate::snap_json(json).map_err(to_js)
}

#[wasm_bindgen(js_name = calculateResizeSnap)]
pub fn calculate_resize_snap(json: &str) -> Result<String, JsValue> {
    crate::resize_snap_json(json).map_err(to_js)
}

#[wasm_bindgen(js_name = calculateDistributionGuides)]
pub fn calculate_distribution_guides(json: &str) -> Result<String, JsValue> {
    crate::distribution_json(json).map_err(to_js)
}
