//! Checkbox and toggle multiselects.
//!
//! Thin entry points over [Multiselect] that fix the control kind; semantics
//! are identical to checkbox-mode multiselect.

use crate::multiselect::{ControlKind, Multiselect};
use crate::options::SelectOptions;

/// A checkbox list over `options`.
pub fn checkboxes<T: Clone + PartialEq + 'static>(
    options: impl Into<SelectOptions<T>>,
) -> Multiselect<T> {
    Multiselect::new(options).with_control(ControlKind::Checkbox)
}

/// A switch-style toggle list over `options`.
pub fn toggles<T: Clone + PartialEq + 'static>(
    options: impl Into<SelectOptions<T>>,
) -> Multiselect<T> {
    Multiselect::new(options).with_control(ControlKind::Toggle)
}
