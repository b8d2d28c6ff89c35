use folio_core::{KeyValueStore, SiteConfig, keys};
use folio_web::dom;
use folio_web::page::Page;
use folio_web::storage::WebStorage;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventInit, KeyboardEvent, KeyboardEventInit};

const FIXTURE_ID: &str = "fixture";

/// Replace the test fixture's markup and return its root.
pub fn mount(html: &str) -> Element {
    let doc = dom::document();
    let root = match doc.get_element_by_id(FIXTURE_ID) {
        Some(root) => root,
        None => {
            let root = doc.create_element("div").expect("create fixture");
            root.set_id(FIXTURE_ID);
            dom::body()
                .expect("document body")
                .append_child(&root)
                .expect("append fixture");
            root
        }
    };
    root.set_inner_html(html);
    root
}

/// A page wired with default timings and an empty local storage.
pub fn fresh_page() -> Page {
    let storage = WebStorage;
    for key in [
        keys::A11Y_SETTINGS,
        keys::THEME,
        keys::CONTACT_DRAFT,
        keys::COOKIES_ACCEPTED,
    ] {
        storage.delete(key).expect("clear storage");
    }
    if let Some(body) = dom::body() {
        body.set_class_name("");
    }
    Page::new(SiteConfig::default())
}

pub fn element(id: &str) -> Element {
    dom::document()
        .get_element_by_id(id)
        .unwrap_or_else(|| panic!("#{id} should exist"))
}

pub fn dispatch(target: &Element, kind: &str) {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict(kind, &init).expect("create event");
    target.dispatch_event(&event).expect("dispatch event");
}

pub fn key_down(target: &Element, key: &str, shift: bool) -> KeyboardEvent {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_shift_key(shift);
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event =
        KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).expect("keyboard event");
    target.dispatch_event(&event).expect("dispatch keydown");
    event
}

pub fn click(id: &str) {
    element(id)
        .dyn_into::<web_sys::HtmlElement>()
        .expect("clickable element")
        .click();
}

pub fn body_has_class(class_name: &str) -> bool {
    dom::body().is_some_and(|body| body.class_list().contains(class_name))
}
