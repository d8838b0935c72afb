use wasm_bindgen::prelude::*;

use super::BurstOptions;

// `canvas-confetti` is loaded as a plain script in index.html and exposes a
// global `confetti` function.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_name = confetti)]
    fn confetti_js(options: JsValue) -> Result<JsValue, JsValue>;
}

pub fn fire(options: &BurstOptions) {
    let value = match serde_wasm_bindgen::to_value(options) {
        Ok(value) => value,
        Err(err) => {
            gloo::console::error!("confetti: failed to encode burst options:", err.to_string());
            return;
        }
    };
    if let Err(err) = confetti_js(value) {
        gloo::console::error!("confetti: burst failed", err);
    }
}

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

pub fn random_unit() -> f64 {
    js_sys::Math::random()
}
