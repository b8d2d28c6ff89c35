use std::cell::RefCell;
use std::rc::Rc;

use folio_core::FilterSet;
use web_sys::{Element, HtmlElement, HtmlInputElement};

use crate::dom;

const FILTER_BUTTONS: &str = ".projects__filter";
const CARDS: &str = ".project-card";
const ACTIVE_CLASS: &str = "projects__filter--active";

fn filter_name(label: &Element) -> String {
    label.get_attribute("data-filter").unwrap_or_default()
}

/// Checkbox a filter label is bound to through `for`.
fn bound_input(label: &Element) -> Option<HtmlInputElement> {
    label
        .get_attribute("for")
        .and_then(|id| dom::by_id::<HtmlInputElement>(&id))
}

fn render(labels: &[Element], filters: &FilterSet) {
    for label in labels {
        let pressed = filters.is_active(&filter_name(label));
        let _ = label.set_attribute("aria-pressed", dom::bool_attr(pressed));
        let _ = label.class_list().toggle_with_force(ACTIVE_CLASS, pressed);
        if let Some(input) = bound_input(label) {
            input.set_checked(pressed);
        }
    }
    for card in dom::query_all(CARDS) {
        let Ok(card) = wasm_bindgen::JsCast::dyn_into::<HtmlElement>(card) else {
            continue;
        };
        let tags = card.get_attribute("data-tags").unwrap_or_default();
        card.set_hidden(!filters.card_visible(&tags));
    }
}

pub fn install() {
    let labels = dom::query_all(FILTER_BUTTONS);
    if labels.is_empty() || dom::query_all(CARDS).is_empty() {
        return;
    }

    let initial: Vec<String> = labels
        .iter()
        .filter(|label| match bound_input(label) {
            Some(input) => input.checked(),
            None => dom::attr_is(label, "aria-pressed", "true"),
        })
        .map(filter_name)
        .collect();
    let state = Rc::new(RefCell::new(FilterSet::from_pressed(
        initial.iter().map(String::as_str),
    )));
    let labels = Rc::new(labels);
    render(&labels, &state.borrow());

    for label in labels.iter() {
        let (state, labels, name) = (Rc::clone(&state), Rc::clone(&labels), filter_name(label));
        dom::on(label, "click", move |event| {
            // Labels bound to a checkbox would toggle it a second time.
            event.prevent_default();
            let mut filters = state.borrow_mut();
            filters.toggle(&name);
            render(&labels, &filters);
        });

        let target = label.clone();
        dom::on_keydown(label, move |event| {
            if dom::is_activation_key(&event) {
                event.prevent_default();
                dom::click(&target);
            }
        });
    }
}
