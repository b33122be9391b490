// src/dom/patch.rs  -  Instructions produced by site logic, applied by Document::apply
use super::ElementId;
use crate::i18n::Dir;

/// One mutation of the page. Feature code never touches the document
/// directly; it returns these and the site applies them in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Patch {
    /// `lang` / `dir` on the document root
    SetRoot     { lang: String, dir: Dir },
    /// Content set as text; escaped when applied
    SetText     { target: ElementId, text: String },
    /// Trusted developer-authored markup, injected as-is
    SetMarkup   { target: ElementId, markup: String },
    SetAttr     { target: ElementId, name: String, value: String },
    AddClass    { target: ElementId, class: String },
    RemoveClass { target: ElementId, class: String },
    /// Live value of a form control
    SetValue    { target: ElementId, value: String },
    SetStyle    { target: ElementId, property: String, value: String },
    /// Every control inside the form goes back to its default value
    ResetForm   { form: ElementId },
    /// Smooth scroll of the viewport to an absolute offset
    ScrollTo    { top: f64 },
    /// Smooth scroll bringing `target` to the top of the viewport
    ScrollIntoView { target: ElementId },
    Navigate    { url: String },
}

impl Patch {
    pub fn text(target: ElementId, text: impl Into<String>) -> Self {
        Patch::SetText { target, text: text.into() }
    }

    pub fn markup(target: ElementId, markup: impl Into<String>) -> Self {
        Patch::SetMarkup { target, markup: markup.into() }
    }

    pub fn attr(target: ElementId, name: &str, value: impl Into<String>) -> Self {
        Patch::SetAttr { target, name: name.to_string(), value: value.into() }
    }

    pub fn add_class(target: ElementId, class: &str) -> Self {
        Patch::AddClass { target, class: class.to_string() }
    }

    pub fn remove_class(target: ElementId, class: &str) -> Self {
        Patch::RemoveClass { target, class: class.to_string() }
    }

    pub fn value(target: ElementId, value: impl Into<String>) -> Self {
        Patch::SetValue { target, value: value.into() }
    }

    pub fn style(target: ElementId, property: &str, value: impl Into<String>) -> Self {
        Patch::SetStyle { target, property: property.to_string(), value: value.into() }
    }
}
