//! Required-field checks for every form and live validation of the contact
//! form.

use folio_core::i18n;
use folio_core::validation::{
    FieldAttrs, FieldValidity, error_element_id, is_blank, required_message, validation_message,
};
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, ScrollLogicalPosition, ValidityState,
};

use crate::dom;
use crate::page::Page;

pub const CONTACT_FORM_ID: &str = "contactForm";
const FIELDS: &str = "input, textarea, select";
const ERROR_CLASS: &str = "error-message";
pub const FIELD_ERROR_CLASS: &str = "form-error";

/// A form control whose value and validity can be read uniformly.
#[derive(Clone)]
pub enum Field {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
    Select(HtmlSelectElement),
}

impl Field {
    #[must_use]
    pub fn from_element(element: Element) -> Option<Self> {
        let element = match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => return Some(Self::Input(input)),
            Err(element) => element,
        };
        let element = match element.dyn_into::<HtmlTextAreaElement>() {
            Ok(area) => return Some(Self::TextArea(area)),
            Err(element) => element,
        };
        element.dyn_into::<HtmlSelectElement>().ok().map(Self::Select)
    }

    #[must_use]
    pub fn by_id(id: &str) -> Option<Self> {
        dom::by_id::<Element>(id).and_then(Self::from_element)
    }

    #[must_use]
    pub fn element(&self) -> &Element {
        match self {
            Self::Input(el) => el.as_ref(),
            Self::TextArea(el) => el.as_ref(),
            Self::Select(el) => el.as_ref(),
        }
    }

    #[must_use]
    pub fn value(&self) -> String {
        match self {
            Self::Input(el) => el.value(),
            Self::TextArea(el) => el.value(),
            Self::Select(el) => el.value(),
        }
    }

    pub fn set_value(&self, value: &str) {
        match self {
            Self::Input(el) => el.set_value(value),
            Self::TextArea(el) => el.set_value(value),
            Self::Select(el) => el.set_value(value),
        }
    }

    #[must_use]
    pub fn required(&self) -> bool {
        match self {
            Self::Input(el) => el.required(),
            Self::TextArea(el) => el.required(),
            Self::Select(el) => el.required(),
        }
    }

    fn input_type(&self) -> String {
        match self {
            Self::Input(el) => el.type_(),
            Self::TextArea(_) => "textarea".to_string(),
            Self::Select(el) => el.type_(),
        }
    }

    #[must_use]
    pub fn validity(&self) -> FieldValidity {
        let state: ValidityState = match self {
            Self::Input(el) => el.validity(),
            Self::TextArea(el) => el.validity(),
            Self::Select(el) => el.validity(),
        };
        FieldValidity {
            valid: state.valid(),
            value_missing: state.value_missing(),
            type_mismatch: state.type_mismatch(),
            too_short: state.too_short(),
            too_long: state.too_long(),
        }
    }
}

fn error_element(field: &Element) -> Option<HtmlElement> {
    dom::by_id::<HtmlElement>(&error_element_id(&field.id()))
}

/// Mark `field` invalid and show `message` in its error element, creating
/// one next to the field when the page has none.
pub fn show_error(field: &Element, message: &str) {
    let _ = field.set_attribute("aria-invalid", "true");
    let error = error_element(field).or_else(|| create_error_element(field));
    if let Some(error) = error {
        error.set_text_content(Some(message));
        dom::set_style(&error, "display", Some("block"));
    }
}

fn create_error_element(field: &Element) -> Option<HtmlElement> {
    let parent = field.parent_node()?;
    let error = dom::document()
        .create_element("span")
        .ok()?
        .dyn_into::<HtmlElement>()
        .ok()?;
    error.set_id(&error_element_id(&field.id()));
    error.set_class_name(ERROR_CLASS);
    parent.append_child(&error).ok()?;
    Some(error)
}

/// Drop the invalid markers and hide the error text.
pub fn clear_error(field: &Element) {
    let _ = field.remove_attribute("aria-invalid");
    let _ = field.class_list().remove_1(FIELD_ERROR_CLASS);
    if let Some(error) = error_element(field) {
        dom::set_style(&error, "display", Some("none"));
    }
}

/// Check the required fields of `form`. Invalid fields are marked, an
/// assertive announcement is made and the first one is scrolled to the
/// middle of the viewport and focused.
pub fn check_required(page: &Page, form: &HtmlFormElement) -> bool {
    let mut first_invalid: Option<Element> = None;
    for field in dom::query_all_in(form, "[required]")
        .into_iter()
        .filter_map(Field::from_element)
    {
        let element = field.element();
        if is_blank(&field.value()) {
            show_error(element, &required_message());
            let _ = element.class_list().add_1(FIELD_ERROR_CLASS);
            page.assertive(&i18n::t("validation.required_announce"));
            first_invalid.get_or_insert_with(|| element.clone());
        } else {
            clear_error(element);
        }
    }
    match first_invalid {
        Some(field) => {
            dom::scroll_into_view(&field, ScrollLogicalPosition::Center);
            dom::focus(&field);
            false
        }
        None => true,
    }
}

/// Validate one contact-form field against its validity state.
pub fn validate_field(page: &Page, field: &Field) -> bool {
    let element = field.element();
    let input_type = field.input_type();
    let min_length = element.get_attribute("minlength");
    let max_length = element.get_attribute("maxlength");
    let attrs = FieldAttrs {
        input_type: &input_type,
        min_length: min_length.as_deref(),
        max_length: max_length.as_deref(),
    };
    match validation_message(field.validity(), attrs) {
        Some(message) => {
            show_error(element, &message);
            page.assertive(&message);
            false
        }
        None => {
            clear_error(element);
            if let Some(error) = error_element(element) {
                error.set_text_content(Some(""));
            }
            true
        }
    }
}

pub fn install(page: &Page) {
    for form in dom::query_all("form")
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlFormElement>().ok())
    {
        form.set_no_validate(true);

        for field in dom::query_all_in(&form, FIELDS) {
            let target = field.clone();
            dom::on(&field, "input", move |_| clear_error(&target));
        }

        // The contact form runs its own submit pipeline.
        if form.id() == CONTACT_FORM_ID {
            continue;
        }
        let (page, target) = (page.clone(), form.clone());
        dom::on(&form, "submit", move |event| {
            if !check_required(&page, &target) {
                event.prevent_default();
            }
        });
    }

    let Some(contact) = dom::by_id::<Element>(CONTACT_FORM_ID) else {
        return;
    };
    for field in dom::query_all_in(&contact, FIELDS)
        .into_iter()
        .filter_map(Field::from_element)
    {
        let page = page.clone();
        let element = field.element().clone();
        dom::on(&element, "blur", move |_| {
            validate_field(&page, &field);
        });
    }
}
