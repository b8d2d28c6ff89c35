//! DOM bindings for the page widgets. Each `install` looks up its elements
//! and returns quietly when the current page does not carry them.

pub mod captcha;
pub mod contact_form;
pub mod cookies;
pub mod counter;
pub mod draft;
pub mod faq;
pub mod filters;
pub mod forms;
pub mod lazy_images;
pub mod quick_tools;
pub mod responsive;
pub mod settings_panel;
pub mod shortcuts;
pub mod status;
pub mod theme;

use crate::page::Page;

pub fn install_all(page: &Page) {
    settings_panel::install(page);
    theme::install(page);
    forms::install(page);
    let captcha = captcha::install(page);
    contact_form::install(page, captcha);
    counter::install(page);
    draft::install(page);
    faq::install(page);
    filters::install();
    shortcuts::install(page);
    lazy_images::install(page);
    quick_tools::install(page);
    cookies::install(page);
    status::install(page);
    responsive::install(page);
}
