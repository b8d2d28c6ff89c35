//! Text size, high contrast and read-aloud buttons.

use std::cell::Cell;
use std::rc::Rc;

use folio_core::quick_tools::{HIGH_CONTRAST_CLASS, SPEECH_LANG};
use folio_core::{ContrastMode, ReadAloud, ReadingEnd, ScaleChange, TextScale};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, HtmlElement, SpeechSynthesisUtterance};

use crate::dom;
use crate::page::Page;

const INCREASE_ID: &str = "increase-text";
const DECREASE_ID: &str = "decrease-text";
const CONTRAST_ID: &str = "high-contrast-mode";
const READ_ALOUD_ID: &str = "read-aloud";

pub fn install(page: &Page) {
    text_scale(page);
    high_contrast(page);
    read_aloud(page);
}

fn text_scale(page: &Page) {
    let scale = Rc::new(Cell::new(TextScale::default()));
    let buttons: [(&str, fn(&mut TextScale) -> ScaleChange); 2] = [
        (INCREASE_ID, TextScale::increase),
        (DECREASE_ID, TextScale::decrease),
    ];
    for (id, step) in buttons {
        let Some(button) = dom::by_id::<Element>(id) else {
            continue;
        };
        let (scale, page) = (Rc::clone(&scale), page.clone());
        dom::on(&button, "click", move |_| {
            let mut next = scale.get();
            let change = step(&mut next);
            scale.set(next);
            if matches!(change, ScaleChange::Increased(_) | ScaleChange::Decreased(_))
                && let Some(root) = dom::document().document_element()
            {
                dom::set_style(&root, "font-size", Some(&next.css_value()));
            }
            page.polite(&change.announcement());
        });
    }
}

fn high_contrast(page: &Page) {
    let Some(button) = dom::by_id::<HtmlElement>(CONTRAST_ID) else {
        return;
    };
    let mode = Rc::new(Cell::new(ContrastMode::default()));
    let (page, target) = (page.clone(), button.clone());
    dom::on(&button, "click", move |_| {
        let next = mode.get().toggled();
        mode.set(next);
        if let Some(body) = dom::body() {
            let _ = body
                .class_list()
                .toggle_with_force(HIGH_CONTRAST_CLASS, next.enabled);
        }
        target.set_text_content(Some(&next.button_text()));
        let _ = target.set_attribute("aria-label", &next.aria_label());
        page.polite(&next.announcement());
    });
}

fn label(button: &HtmlElement, state: ReadAloud) {
    button.set_text_content(Some(&state.button_text()));
    let _ = button.set_attribute("aria-label", &state.aria_label());
}

fn speech_supported() -> bool {
    js_sys::Reflect::has(&dom::window(), &"speechSynthesis".into()).unwrap_or(false)
}

fn read_aloud(page: &Page) {
    let Some(button) = dom::by_id::<HtmlElement>(READ_ALOUD_ID) else {
        return;
    };
    let state = Rc::new(Cell::new(ReadAloud::Idle));
    // Bumped per utterance so a cancelled one cannot reset a newer reading.
    let generation = Rc::new(Cell::new(0_u32));
    let (page, target) = (page.clone(), button.clone());

    dom::on(&button, "click", move |_| {
        if !speech_supported() {
            let _ = dom::window().alert_with_message(&ReadAloud::unsupported_message());
            return;
        }
        let synth = match dom::window().speech_synthesis() {
            Ok(synth) => synth,
            Err(err) => {
                log::warn!("speech synthesis unavailable: {}", dom::js_error_message(&err));
                return;
            }
        };

        if state.get() == ReadAloud::Reading {
            state.set(ReadAloud::Idle);
            synth.cancel();
            label(&target, ReadAloud::Idle);
            page.polite(&ReadAloud::end_message(ReadingEnd::Stopped));
            return;
        }

        let text = dom::query::<Element>("main")
            .and_then(|main| main.text_content())
            .unwrap_or_default();
        let utterance = match SpeechSynthesisUtterance::new_with_text(&text) {
            Ok(utterance) => utterance,
            Err(err) => {
                log::warn!("could not create utterance: {}", dom::js_error_message(&err));
                return;
            }
        };
        utterance.set_lang(SPEECH_LANG);
        utterance.set_rate(1.0);
        utterance.set_pitch(1.0);
        utterance.set_volume(1.0);

        generation.set(generation.get().wrapping_add(1));
        let this_reading = generation.get();
        let on_end = {
            let (state, generation, target, page) = (
                Rc::clone(&state),
                Rc::clone(&generation),
                target.clone(),
                page.clone(),
            );
            Closure::<dyn FnMut()>::new(move || {
                if generation.get() != this_reading || state.get() != ReadAloud::Reading {
                    return;
                }
                state.set(ReadAloud::Idle);
                label(&target, ReadAloud::Idle);
                page.polite(&ReadAloud::end_message(ReadingEnd::Finished));
            })
        };
        utterance.set_onend(Some(on_end.as_ref().unchecked_ref()));
        on_end.forget();

        synth.speak(&utterance);
        state.set(ReadAloud::Reading);
        label(&target, ReadAloud::Reading);
        page.polite(&ReadAloud::started_message());
    });
}
