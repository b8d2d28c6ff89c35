use folio_core::draft::{load_draft, save_draft};
use folio_core::{ContactDraft, i18n};
use web_sys::Element;

use crate::dom;
use crate::page::Page;
use crate::widgets::forms::Field;

const SAVE_ID: &str = "save-draft";
const STATUS_ID: &str = "form-status";

/// Current values of the contact fields present on the page.
#[must_use]
pub fn read_fields() -> ContactDraft {
    let mut draft = ContactDraft::default();
    for id in ContactDraft::FIELD_IDS {
        if let Some(field) = Field::by_id(id) {
            draft.set_field(id, field.value());
        }
    }
    draft
}

pub fn fill_fields(draft: &ContactDraft) {
    for id in ContactDraft::FIELD_IDS {
        if let (Some(field), Some(value)) = (Field::by_id(id), draft.field(id)) {
            field.set_value(value);
        }
    }
}

fn save(page: &Page) {
    if let Err(err) = save_draft(&page.storage, &read_fields()) {
        log::warn!("could not save contact draft: {err}");
        return;
    }
    if let Some(status) = dom::by_id::<Element>(STATUS_ID) {
        status.set_text_content(Some(&i18n::t("draft.saved_status")));
        dom::set_style(&status, "display", Some("block"));
        dom::set_timeout(page.config.draft_status_ms, move || {
            dom::set_style(&status, "display", Some("none"));
        });
    }
    page.polite(&i18n::t("draft.saved"));
}

fn offer_restore(page: &Page) {
    let draft = match load_draft(&page.storage) {
        Ok(Some(draft)) => draft,
        Ok(None) => return,
        Err(err) => {
            log::warn!("ignoring saved contact draft: {err}");
            return;
        }
    };
    let accepted = dom::window()
        .confirm_with_message(&i18n::t("draft.confirm"))
        .unwrap_or(false);
    if accepted {
        fill_fields(&draft);
        page.polite(&i18n::t("draft.restored"));
    }
}

pub fn install(page: &Page) {
    let Some(button) = dom::by_id::<Element>(SAVE_ID) else {
        return;
    };
    let on_click = page.clone();
    dom::on(&button, "click", move |_| save(&on_click));
    offer_restore(page);
}
