use std::cell::Cell;
use std::rc::Rc;

use folio_core::ConnectionHint;
use js_sys::Reflect;
use wasm_bindgen::JsValue;

use crate::dom;
use crate::page::Page;

const MOBILE_CLASS: &str = "is-mobile";
const RETINA_CLASS: &str = "retina-display";
const SCALABLE: &str = ".scalable-element";
const SAVE_DATA_CLASS: &str = "save-data";
const BACKGROUND_IMAGES: &str = ".bg-image";
const LAZY_IMAGES: &str = r#"img[loading="lazy"]"#;

/// Toggle the mobile body class for the current viewport width.
pub fn apply_layout(breakpoint_px: u32) {
    let width = dom::window()
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or(f64::MAX);
    let mobile = width <= f64::from(breakpoint_px);
    if let Some(body) = dom::body() {
        let _ = body.class_list().toggle_with_force(MOBILE_CLASS, mobile);
    }
    if mobile {
        for element in dom::query_all(SCALABLE) {
            dom::set_style(&element, "transform", Some("none"));
        }
    }
}

/// `navigator.connection`, read reflectively since the Network Information
/// API is not exposed by web-sys.
fn connection_hint() -> Option<ConnectionHint> {
    let navigator = dom::window().navigator();
    let connection = Reflect::get(&navigator, &JsValue::from_str("connection")).ok()?;
    if connection.is_undefined() || connection.is_null() {
        return None;
    }
    let field = |name: &str| Reflect::get(&connection, &JsValue::from_str(name)).ok();
    Some(ConnectionHint {
        save_data: field("saveData").and_then(|v| v.as_bool()).unwrap_or(false),
        effective_type: field("effectiveType").and_then(|v| v.as_string()),
    })
}

/// Drop decorative backgrounds and load lazy images eagerly.
pub fn apply_data_saver() {
    if let Some(body) = dom::body() {
        let _ = body.class_list().add_1(SAVE_DATA_CLASS);
    }
    for element in dom::query_all(BACKGROUND_IMAGES) {
        dom::set_style(&element, "background-image", Some("none"));
    }
    for image in dom::query_all(LAZY_IMAGES) {
        let _ = image.set_attribute("loading", "eager");
    }
}

pub fn install(page: &Page) {
    let (breakpoint, debounce) = (page.config.mobile_breakpoint_px, page.config.resize_debounce_ms);
    apply_layout(breakpoint);

    let pending = Rc::new(Cell::new(None::<i32>));
    dom::on(&dom::window(), "resize", move |_| {
        if let Some(handle) = pending.take() {
            dom::clear_timeout(handle);
        }
        let handle = dom::set_timeout(debounce, move || apply_layout(breakpoint));
        pending.set(handle);
    });

    if dom::window().device_pixel_ratio() >= 2.0
        && let Some(body) = dom::body()
    {
        let _ = body.class_list().add_1(RETINA_CLASS);
    }

    if let Some(hint) = connection_hint()
        && hint.wants_reduced_data()
    {
        log::debug!("reducing data for connection {hint:?}");
        apply_data_saver();
    }
}
