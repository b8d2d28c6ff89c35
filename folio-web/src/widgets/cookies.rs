use folio_core::{CookieConsent, i18n};
use web_sys::{Element, HtmlElement};

use crate::dom;
use crate::page::Page;

const NOTICE_ID: &str = "cookie-notice";
const ACCEPT_ID: &str = "accept-cookies";
const REJECT_ID: &str = "reject-cookies";
const SETTINGS_ID: &str = "cookie-settings";

fn set_visible(notice: &HtmlElement, visible: bool) {
    dom::set_style(notice, "display", Some(if visible { "block" } else { "none" }));
    let _ = notice.set_attribute("aria-hidden", dom::bool_attr(!visible));
}

pub fn install(page: &Page) {
    let Some(notice) = dom::by_id::<HtmlElement>(NOTICE_ID) else {
        return;
    };
    let consent = CookieConsent::new(page.storage);
    if !consent.needs_notice() {
        set_visible(&notice, false);
        return;
    }

    {
        let (notice, page) = (notice.clone(), page.clone());
        dom::set_timeout(page.config.cookie_notice_delay_ms, move || {
            set_visible(&notice, true);
            page.polite(&i18n::t("cookies.notice"));
        });
    }

    for (id, accept, message_key) in [
        (ACCEPT_ID, true, "cookies.accepted"),
        (REJECT_ID, false, "cookies.rejected"),
    ] {
        let Some(button) = dom::by_id::<Element>(id) else {
            continue;
        };
        let (notice, page) = (notice.clone(), page.clone());
        dom::on(&button, "click", move |_| {
            let consent = CookieConsent::new(page.storage);
            let recorded = if accept { consent.accept() } else { consent.reject() };
            if let Err(err) = recorded {
                log::warn!("could not record cookie decision: {err}");
            }
            set_visible(&notice, false);
            page.polite(&i18n::t(message_key));
        });
    }

    if let Some(settings) = dom::by_id::<Element>(SETTINGS_ID) {
        dom::on(&settings, "click", |_| {
            let _ = dom::window().alert_with_message(&i18n::t("cookies.settings_unavailable"));
        });
    }
}
