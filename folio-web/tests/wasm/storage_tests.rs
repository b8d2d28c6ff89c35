use folio_core::{ConsentDecision, CookieConsent, KeyValueStore, keys};
use folio_web::announcer::{LIVE_REGION_ID, LiveRegion};
use folio_web::storage::WebStorage;
use folio_core::{Announcer, Politeness};
use wasm_bindgen_test::*;

use crate::fixture;

#[wasm_bindgen_test]
fn web_storage_round_trips_values() {
    let storage = WebStorage;
    storage.set("folio-test", "value").expect("write");
    assert_eq!(storage.get("folio-test").expect("read").as_deref(), Some("value"));
    storage.delete("folio-test").expect("delete");
    assert_eq!(storage.get("folio-test").expect("read"), None);
    storage.delete("folio-test").expect("deleting twice is fine");
}

#[wasm_bindgen_test]
fn rejecting_cookies_purges_local_state() {
    let _page = fixture::fresh_page();
    let storage = WebStorage;
    storage.set(keys::A11Y_SETTINGS, "{}").expect("seed settings");
    storage.set(keys::CONTACT_DRAFT, "{}").expect("seed draft");

    let consent = CookieConsent::new(storage);
    assert!(consent.needs_notice());
    consent.reject().expect("reject");

    assert_eq!(consent.decision().expect("read"), Some(ConsentDecision::Rejected));
    assert_eq!(storage.get(keys::A11Y_SETTINGS).expect("read"), None);
    assert_eq!(storage.get(keys::CONTACT_DRAFT).expect("read"), None);
    assert_eq!(storage.get(keys::COOKIES_MARKETING).expect("read").as_deref(), Some("false"));
}

#[wasm_bindgen_test]
fn live_region_is_created_once_and_carries_politeness() {
    let region = LiveRegion::new(60_000);
    region.announce("first", Politeness::Polite);
    region.announce("second", Politeness::Assertive);

    let doc = folio_web::dom::document();
    let element = doc.get_element_by_id(LIVE_REGION_ID).expect("live region");
    assert_eq!(element.text_content().as_deref(), Some("second"));
    assert_eq!(element.get_attribute("aria-live").as_deref(), Some("assertive"));
    assert_eq!(element.get_attribute("aria-atomic").as_deref(), Some("true"));
    let count = doc
        .query_selector_all(&format!("#{LIVE_REGION_ID}"))
        .expect("query")
        .length();
    assert_eq!(count, 1);
}
