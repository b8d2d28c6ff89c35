#![cfg(target_arch = "wasm32")]

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

mod fixture;
mod settings_tests;
mod storage_tests;
mod widget_tests;
