use wasm_bindgen::prelude::*;

mod common;
mod viewer;

pub use viewer::WasmViewer;

/// Called automatically when the WASM module is instantiated.
/// Sets up panic hook so Rust panics appear as console.error in the browser,
/// and forwards log records to the console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    histmap_core::init_console_logger(log::LevelFilter::Info);
}

/// Roman-numeral century label for a year, e.g. 1583 -> "XVI".
#[wasm_bindgen(js_name = "centuryLabel")]
pub fn century_label(year: i32) -> String {
    histmap_core::century_label(year)
}
