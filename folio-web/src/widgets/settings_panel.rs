//! Accessibility settings dialog.

use folio_core::i18n;
use folio_core::{ControlSnapshot, PresentationFlag, SliderControl};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement};

use crate::a11y;
use crate::dom;
use crate::page::Page;

pub const DIALOG_ID: &str = "a11y-settings";
const OPEN_BUTTON: &str = ".footer__a11y-btn";
const CLOSE_BUTTONS: &str = ".modal__close";
const APPLY_ID: &str = "apply-a11y-settings";
const RESET_ID: &str = "reset-a11y-settings";
const FIRST_FOCUS: &str = "button, input, select, textarea";

#[derive(Clone)]
struct Dialog {
    modal: HtmlElement,
    opener: Option<HtmlElement>,
}

impl Dialog {
    fn open(&self, page: &Page) {
        self.modal.set_hidden(false);
        let _ = self.modal.set_attribute("aria-hidden", "false");
        if let Some(first) = dom::query_in::<Element>(&self.modal, FIRST_FOCUS) {
            dom::focus(&first);
        }
        if let Some(opener) = &self.opener {
            let _ = opener.set_attribute("aria-expanded", "true");
        }
        page.polite(&i18n::t("a11y.settings.opened"));
    }

    fn close(&self, return_focus: bool) {
        self.modal.set_hidden(true);
        let _ = self.modal.set_attribute("aria-hidden", "true");
        if let Some(opener) = &self.opener {
            let _ = opener.set_attribute("aria-expanded", "false");
            if return_focus {
                let _ = opener.focus();
            }
        }
    }
}

pub fn install(page: &Page) {
    let opener = dom::query::<HtmlElement>(OPEN_BUTTON);
    let dialog = match dom::by_id::<HtmlElement>(DIALOG_ID) {
        Some(modal) => {
            let dialog = Dialog { modal, opener };
            install_dialog(page, &dialog);
            Some(dialog)
        }
        None => {
            if let Some(opener) = opener {
                let href = page.config.settings_page_href.clone();
                dom::on(&opener, "click", move |_| {
                    if let Err(err) = dom::window().location().set_href(&href) {
                        log::warn!("could not open settings page: {}", dom::js_error_message(&err));
                    }
                });
            }
            None
        }
    };

    install_controls(page, dialog.clone());

    let hash = dom::window().location().hash().unwrap_or_default();
    if let Some(dialog) = &dialog
        && hash.strip_prefix('#') == Some(DIALOG_ID)
    {
        dialog.open(page);
    }
}

fn install_dialog(page: &Page, dialog: &Dialog) {
    a11y::trap_focus(&dialog.modal);

    if let Some(opener) = &dialog.opener {
        let (dialog, page) = (dialog.clone(), page.clone());
        dom::on(opener, "click", move |_| dialog.open(&page));
    }

    for close in dom::query_all(CLOSE_BUTTONS) {
        let (dialog, page) = (dialog.clone(), page.clone());
        dom::on(&close, "click", move |_| {
            dialog.close(true);
            page.polite(&i18n::t("a11y.settings.closed"));
        });
    }

    {
        let dialog = dialog.clone();
        dom::on_keydown(&dialog.modal.clone(), move |event| {
            if event.key() == "Escape" {
                dialog.close(true);
            }
        });
    }

    let backdrop: Element = dialog.modal.clone().into();
    let target_dialog = dialog.clone();
    dom::on(&dialog.modal, "click", move |event| {
        let on_backdrop = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .is_some_and(|target| target == backdrop);
        if on_backdrop {
            target_dialog.close(false);
        }
    });
}

/// Apply, reset and live slider read-outs. These work on an inline panel
/// too; `dialog` is closed after applying when the page has one.
fn install_controls(page: &Page, dialog: Option<Dialog>) {
    if let Some(apply) = dom::by_id::<Element>(APPLY_ID) {
        let page = page.clone();
        dom::on(&apply, "click", move |_| {
            page.settings.apply(&read_controls().to_settings());
            if let Some(dialog) = &dialog {
                dialog.close(false);
            }
        });
    }

    if let Some(reset) = dom::by_id::<Element>(RESET_ID) {
        let page = page.clone();
        dom::on(&reset, "click", move |_| page.settings.reset());
    }

    for slider in SliderControl::ALL {
        let Some(input) = dom::by_id::<HtmlInputElement>(slider.input_id()) else {
            continue;
        };
        let source = input.clone();
        dom::on(&input, "input", move |_| {
            if let Some(output) = dom::document().get_element_by_id(slider.output_id()) {
                output.set_text_content(Some(&slider.display_raw(&source.value())));
            }
        });
    }
}

/// Current state of whichever settings controls the page carries.
#[must_use]
pub fn read_controls() -> ControlSnapshot {
    let mut snapshot = ControlSnapshot::default();
    for slider in SliderControl::ALL {
        if let Some(input) = dom::by_id::<HtmlInputElement>(slider.input_id()) {
            snapshot = snapshot.with_slider(slider, input.value());
        }
    }
    for flag in PresentationFlag::ALL {
        if let Some(checkbox) = dom::by_id::<HtmlInputElement>(flag.checkbox_id()) {
            snapshot = snapshot.with_checkbox(flag, checkbox.checked());
        }
    }
    snapshot
}
