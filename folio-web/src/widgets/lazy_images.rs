use folio_core::i18n;
use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};

use crate::dom;
use crate::page::Page;

const LAZY_IMAGES: &str = r#"img[loading="lazy"]"#;
const LOADED_CLASS: &str = "loaded";

fn reveal(image: &Element) {
    let _ = image.class_list().add_1(LOADED_CLASS);
}

/// Watch `images` and mark each one as it enters the viewport. Returns
/// `false` when the browser has no `IntersectionObserver`.
fn observe(images: &[Element]) -> bool {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let image = entry.target();
                    reveal(&image);
                    observer.unobserve(&image);
                }
            }
        },
    );
    let Ok(observer) = IntersectionObserver::new(callback.as_ref().unchecked_ref()) else {
        return false;
    };
    callback.forget();
    for image in images {
        observer.observe(image);
    }
    true
}

pub fn install(page: &Page) {
    let images = dom::query_all(LAZY_IMAGES);
    if images.is_empty() {
        return;
    }

    for image in &images {
        let target = image.clone();
        dom::on(image, "load", move |_| {
            let _ = target.set_attribute("data-loaded", "true");
        });

        let (target, page) = (image.clone(), page.clone());
        dom::on(image, "error", move |_| {
            let alt = target.get_attribute("alt").unwrap_or_default();
            let _ = target.set_attribute("alt", &format!("{alt}{}", i18n::t("a11y.image_failed_alt")));
            page.polite(&i18n::t("a11y.image_failed"));
        });
    }

    if !observe(&images) {
        images.iter().for_each(reveal);
    }
}
