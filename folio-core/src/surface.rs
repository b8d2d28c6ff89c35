//! Port for the live document plus an in-memory stand-in.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use crate::controls::SliderControl;
use crate::effects::PresentationFlag;
use crate::settings::AccessibilitySettings;

/// The parts of a page the accessibility settings touch.
///
/// Control setters return `false` when the page has no element with that id;
/// callers treat that as "skip", never as an error.
pub trait DocumentSurface {
    fn set_style_var(&self, property: &str, value: &str);
    fn remove_style_var(&self, property: &str);
    fn set_flag(&self, class_name: &str, enabled: bool);
    fn set_control_value(&self, id: &str, value: &str) -> bool;
    fn set_control_checked(&self, id: &str, checked: bool) -> bool;
    fn set_control_text(&self, id: &str, text: &str) -> bool;
}

impl<T: DocumentSurface + ?Sized> DocumentSurface for Rc<T> {
    fn set_style_var(&self, property: &str, value: &str) {
        (**self).set_style_var(property, value);
    }

    fn remove_style_var(&self, property: &str) {
        (**self).remove_style_var(property);
    }

    fn set_flag(&self, class_name: &str, enabled: bool) {
        (**self).set_flag(class_name, enabled);
    }

    fn set_control_value(&self, id: &str, value: &str) -> bool {
        (**self).set_control_value(id, value)
    }

    fn set_control_checked(&self, id: &str, checked: bool) -> bool {
        (**self).set_control_checked(id, checked)
    }

    fn set_control_text(&self, id: &str, text: &str) -> bool {
        (**self).set_control_text(id, text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlState {
    Value(String),
    Checked(bool),
    Text(String),
}

/// Style variables and body classes currently in effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresentationState {
    pub style_vars: BTreeMap<String, String>,
    pub flags: BTreeSet<String>,
}

impl PresentationState {
    #[must_use]
    pub fn is_pristine(&self) -> bool {
        self.style_vars.is_empty() && self.flags.is_empty()
    }
}

#[derive(Debug, Default)]
struct SurfaceInner {
    presentation: PresentationState,
    controls: BTreeMap<String, ControlState>,
}

/// Shared in-memory document. Clones observe the same state.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    inner: Rc<RefCell<SurfaceInner>>,
}

impl MemorySurface {
    /// A page with no settings controls at all.
    #[must_use]
    pub fn bare() -> Self {
        Self::default()
    }

    /// A page carrying the full settings panel, initialised the way its
    /// markup ships.
    #[must_use]
    pub fn with_settings_panel() -> Self {
        let surface = Self::default();
        let defaults = AccessibilitySettings::default();
        for slider in SliderControl::ALL {
            surface.insert_control(slider.input_id(), ControlState::Value(slider.value(&defaults)));
            surface.insert_control(
                slider.output_id(),
                ControlState::Text(slider.display(&defaults)),
            );
        }
        for flag in PresentationFlag::ALL {
            surface.insert_control(
                flag.checkbox_id(),
                ControlState::Checked(flag.enabled_in(&defaults)),
            );
        }
        surface
    }

    /// The settings panel without its sliders and read-outs.
    #[must_use]
    pub fn with_checkboxes_only() -> Self {
        let surface = Self::default();
        for flag in PresentationFlag::ALL {
            surface.insert_control(flag.checkbox_id(), ControlState::Checked(false));
        }
        surface
    }

    pub fn insert_control(&self, id: &str, state: ControlState) {
        self.inner.borrow_mut().controls.insert(id.to_string(), state);
    }

    #[must_use]
    pub fn control(&self, id: &str) -> Option<ControlState> {
        self.inner.borrow().controls.get(id).cloned()
    }

    #[must_use]
    pub fn style_var(&self, property: &str) -> Option<String> {
        self.inner
            .borrow()
            .presentation
            .style_vars
            .get(property)
            .cloned()
    }

    #[must_use]
    pub fn has_flag(&self, class_name: &str) -> bool {
        self.inner.borrow().presentation.flags.contains(class_name)
    }

    #[must_use]
    pub fn presentation(&self) -> PresentationState {
        self.inner.borrow().presentation.clone()
    }

    fn update_control(&self, id: &str, state: ControlState) -> bool {
        let mut inner = self.inner.borrow_mut();
        match inner.controls.get_mut(id) {
            Some(slot) => {
                *slot = state;
                true
            }
            None => false,
        }
    }
}

impl DocumentSurface for MemorySurface {
    fn set_style_var(&self, property: &str, value: &str) {
        self.inner
            .borrow_mut()
            .presentation
            .style_vars
            .insert(property.to_string(), value.to_string());
    }

    fn remove_style_var(&self, property: &str) {
        self.inner
            .borrow_mut()
            .presentation
            .style_vars
            .remove(property);
    }

    fn set_flag(&self, class_name: &str, enabled: bool) {
        let mut inner = self.inner.borrow_mut();
        if enabled {
            inner.presentation.flags.insert(class_name.to_string());
        } else {
            inner.presentation.flags.remove(class_name);
        }
    }

    fn set_control_value(&self, id: &str, value: &str) -> bool {
        self.update_control(id, ControlState::Value(value.to_string()))
    }

    fn set_control_checked(&self, id: &str, checked: bool) -> bool {
        self.update_control(id, ControlState::Checked(checked))
    }

    fn set_control_text(&self, id: &str, text: &str) -> bool {
        self.update_control(id, ControlState::Text(text.to_string()))
    }
}
