use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{Captcha, i18n};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use web_sys::{Element, HtmlInputElement};

use crate::dom;
use crate::page::Page;
use crate::widgets::forms;

const QUESTION_ID: &str = "captcha-question";
const INPUT_ID: &str = "captcha";
const REFRESH_ID: &str = "refresh-captcha";
const ERROR_ID: &str = "captcha-error";

fn entropy_seed() -> u64 {
    js_sys::Date::now().to_bits() ^ js_sys::Math::random().to_bits().rotate_left(17)
}

/// The arithmetic check shown on the contact form.
#[derive(Clone)]
pub struct CaptchaWidget {
    question: Element,
    input: HtmlInputElement,
    current: Rc<RefCell<Captcha>>,
    rng: Rc<RefCell<ChaCha20Rng>>,
}

impl CaptchaWidget {
    #[must_use]
    pub fn find() -> Option<Self> {
        let question = dom::by_id::<Element>(QUESTION_ID)?;
        let input = dom::by_id::<HtmlInputElement>(INPUT_ID)?;
        let mut rng = ChaCha20Rng::seed_from_u64(entropy_seed());
        let current = Captcha::generate(&mut rng);
        let widget = Self {
            question,
            input,
            current: Rc::new(RefCell::new(current)),
            rng: Rc::new(RefCell::new(rng)),
        };
        widget.render();
        Some(widget)
    }

    fn render(&self) {
        let captcha = self.current.borrow();
        self.question.set_text_content(Some(&captcha.question()));
        let _ = self.input.set_attribute("aria-label", &captcha.aria_label());
    }

    pub fn regenerate(&self) {
        let next = Captcha::generate(&mut *self.rng.borrow_mut());
        *self.current.borrow_mut() = next;
        self.render();
    }

    /// Check the typed answer. A wrong answer marks the input, announces the
    /// failure, focuses the input and asks a new question.
    pub fn verify(&self, page: &Page) -> bool {
        let correct = self.current.borrow().check(&self.input.value());
        if correct {
            forms::clear_error(&self.input);
            return true;
        }
        let _ = self.input.set_attribute("aria-invalid", "true");
        if let Some(error) = dom::by_id::<Element>(ERROR_ID) {
            error.set_text_content(Some(&i18n::t("captcha.wrong")));
            dom::set_style(&error, "display", Some("block"));
        }
        page.assertive(&i18n::t("captcha.wrong_announce"));
        dom::focus(&self.input);
        self.regenerate();
        false
    }
}

pub fn install(page: &Page) -> Option<CaptchaWidget> {
    let widget = CaptchaWidget::find()?;
    if let Some(refresh) = dom::by_id::<Element>(REFRESH_ID) {
        let (widget, page) = (widget.clone(), page.clone());
        dom::on(&refresh, "click", move |_| {
            widget.regenerate();
            page.polite(&i18n::t("captcha.refreshed"));
        });
    }
    Some(widget)
}
