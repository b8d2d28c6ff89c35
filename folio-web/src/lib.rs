#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod announcer;
pub mod dom;
pub mod page;
pub mod storage;
pub mod surface;
pub mod widgets;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    let Some(window) = web_sys::window() else {
        dom::console_error("folio: no window, page behaviors disabled");
        return;
    };
    if window.document().is_none() {
        dom::console_error("folio: no document, page behaviors disabled");
        return;
    }
    // Messages follow <html lang>; unsupported languages keep the default
    if let Some(lang) = dom::document()
        .document_element()
        .and_then(|root| root.get_attribute("lang"))
    {
        folio_core::i18n::set_lang(&lang);
    }

    let page = page::Page::from_document();
    let outcome = page.settings.restore();
    log::debug!("accessibility settings restore: {outcome:?}");
    a11y::install(&page);
    widgets::install_all(&page);
}
