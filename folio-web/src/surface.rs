use folio_core::DocumentSurface;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement};

use crate::dom;

/// The live document: style variables on `<html>`, presentation classes on
/// `<body>`, settings controls looked up by id.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomSurface;

fn root_element() -> Option<HtmlElement> {
    dom::document()
        .document_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

impl DocumentSurface for DomSurface {
    fn set_style_var(&self, property: &str, value: &str) {
        if let Some(root) = root_element() {
            let _ = root.style().set_property(property, value);
        }
    }

    fn remove_style_var(&self, property: &str) {
        if let Some(root) = root_element() {
            let _ = root.style().remove_property(property);
        }
    }

    fn set_flag(&self, class_name: &str, enabled: bool) {
        if let Some(body) = dom::body() {
            let _ = body.class_list().toggle_with_force(class_name, enabled);
        }
    }

    fn set_control_value(&self, id: &str, value: &str) -> bool {
        dom::by_id::<HtmlInputElement>(id)
            .map(|input| input.set_value(value))
            .is_some()
    }

    fn set_control_checked(&self, id: &str, checked: bool) -> bool {
        dom::by_id::<HtmlInputElement>(id)
            .map(|input| input.set_checked(checked))
            .is_some()
    }

    fn set_control_text(&self, id: &str, text: &str) -> bool {
        dom::document()
            .get_element_by_id(id)
            .map(|el| el.set_text_content(Some(text)))
            .is_some()
    }
}
