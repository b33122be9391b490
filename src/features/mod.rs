// src/features/mod.rs  -  Component trait + registry of page features
pub mod decor;
pub mod forms;
pub mod lang;
pub mod nav;
pub mod products;
pub mod scroll;
pub mod tabs;

use crate::dom::{Document, ElementId, Patch};
use crate::site::Settings;
use crate::store::KeyValueStore;
use crate::sync::LanguageSync;
use crate::timers::Timers;

/// Browser-side happenings delivered to the site.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Page finished loading; fired once, after the first language render
    Load,
    Click     { target: ElementId },
    Submit    { form: ElementId },
    KeyDown   { key: String },
    /// Viewport scrolled to `y`
    Scroll    { y: f64 },
    /// Fraction of `target` currently inside the viewport
    Intersect { target: ElementId, ratio: f64 },
}

/// What a component may read and touch while handling one event.
pub struct Context<'a> {
    pub doc:      &'a Document,
    pub sync:     &'a mut LanguageSync,
    pub store:    &'a mut dyn KeyValueStore,
    pub timers:   &'a mut Timers,
    pub settings: &'a Settings,
    default_prevented: bool,
}

impl<'a> Context<'a> {
    pub fn new(
        doc:      &'a Document,
        sync:     &'a mut LanguageSync,
        store:    &'a mut dyn KeyValueStore,
        timers:   &'a mut Timers,
        settings: &'a Settings,
    ) -> Self {
        Self { doc, sync, store, timers, settings, default_prevented: false }
    }

    /// Suppress the browser default (link navigation) for this event.
    pub fn prevent_default(&mut self) { self.default_prevented = true; }

    pub fn default_prevented(&self) -> bool { self.default_prevented }
}

/// One self-contained page feature.
pub trait Component {
    fn name(&self) -> &'static str;

    /// Locate target elements. Returning `false` leaves the component
    /// unregistered, so handlers never run against a page that lacks them.
    fn activate(&mut self, doc: &Document) -> bool;

    fn handle(&mut self, event: &Event, cx: &mut Context<'_>) -> Vec<Patch>;
}

/// Every feature, in the order listeners were historically attached.
pub fn all() -> Vec<Box<dyn Component>> {
    vec![
        Box::new(nav::NavMenu::default()),
        Box::new(nav::ProductsDropdown::default()),
        Box::new(scroll::SmoothScroll),
        Box::new(scroll::ScrollReveal::default()),
        Box::new(decor::Logo::default()),
        Box::new(products::RequestButtons::default()),
        Box::new(lang::LanguageButton::default()),
        Box::new(scroll::Parallax::default()),
        Box::new(forms::FormComponent::<crate::forms::WholesaleRequest>::new("wholesaleForm", "formAlertWholesale")),
        Box::new(forms::FormComponent::<crate::forms::FeedbackRequest>::new("feedbackForm", "formAlertFeedback")),
        Box::new(tabs::ContactTabs::default()),
        Box::new(scroll::BackToTop::default()),
    ]
}

/// Nearest inclusive ancestor of `id` satisfying `pred`.
pub(crate) fn closest(doc: &Document, id: ElementId, pred: impl Fn(&crate::dom::Element) -> bool) -> Option<ElementId> {
    let mut cur = Some(id);
    while let Some(c) = cur {
        let el = doc.get(c)?;
        if pred(el) { return Some(c); }
        cur = el.parent();
    }
    None
}

/// True when some strict ancestor of `id` carries `class`.
pub(crate) fn inside_class(doc: &Document, id: ElementId, class: &str) -> bool {
    doc.get(id)
        .and_then(|e| e.parent())
        .and_then(|p| closest(doc, p, |e| e.has_class(class)))
        .is_some()
}

/// Add or remove `class` so that its presence equals `on`.
pub(crate) fn set_class(target: ElementId, class: &str, on: bool) -> Patch {
    if on { Patch::add_class(target, class) } else { Patch::remove_class(target, class) }
}
