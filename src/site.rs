// src/site.rs  -  Site registry: document, language state, store, timers, components
use crate::dom::{Document, ElementId, Patch, Tag};
use crate::features::{self, Component, Context, Event};
use crate::i18n::{Lang, TranslationTable};
use crate::store::KeyValueStore;
use crate::sync::LanguageSync;
use crate::timers::Timers;
use chrono::Datelike;
use std::time::Duration;

/// Runtime knobs the features read. Built from `AppConfig` in the binary.
#[derive(Debug, Clone)]
pub struct Settings {
    pub default_lang:        Lang,
    pub year:                i32,
    pub alert_dismiss:       Duration,
    pub logo_float_delay:    Duration,
    /// Fraction of an element that must be visible before it is revealed
    pub reveal_threshold:    f64,
    /// Viewport widths at or below this turn the products link into a toggle
    pub dropdown_breakpoint: u32,
    pub back_to_top_after:   f64,
    pub parallax_factor:     f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_lang:        Lang::Ar,
            year:                chrono::Local::now().year(),
            alert_dismiss:       Duration::from_millis(8000),
            logo_float_delay:    Duration::from_millis(1000),
            reveal_threshold:    0.15,
            dropdown_breakpoint: 820,
            back_to_top_after:   500.0,
            parallax_factor:     -0.05,
        }
    }
}

pub struct Site {
    doc:        Document,
    sync:       LanguageSync,
    store:      Box<dyn KeyValueStore>,
    timers:     Timers,
    settings:   Settings,
    components: Vec<Box<dyn Component>>,
}

impl Site {
    /// Activate every feature the page supports, render the persisted (or
    /// default) language, then fire `Load`.
    pub fn boot(doc: Document, store: Box<dyn KeyValueStore>, settings: Settings) -> Self {
        let components: Vec<Box<dyn Component>> = features::all()
            .into_iter()
            .filter_map(|mut c| {
                let on = c.activate(&doc);
                log::debug!("[site] {:<16} {}", c.name(), if on { "active" } else { "skipped" });
                on.then_some(c)
            })
            .collect();

        let mut site = Self {
            sync: LanguageSync::new(TranslationTable::global(), settings.year),
            doc,
            store,
            timers: Timers::new(),
            settings,
            components,
        };
        let first = site.sync.bootstrap(&site.doc, &*site.store, site.settings.default_lang);
        site.doc.apply(first);
        site.dispatch(Event::Load);
        log::info!(
            "site ready: {} components, lang={}",
            site.components.len(),
            site.sync.active()
        );
        site
    }

    /// Deliver one event to every component in registration order. Returns
    /// `true` when some component prevented the default action.
    pub fn dispatch(&mut self, event: Event) -> bool {
        if let Event::Scroll { y } = event {
            self.doc.scroll_y = y.max(0.0);
        }
        log::debug!("[site] dispatch {event:?}");

        let mut prevented = false;
        for c in self.components.iter_mut() {
            let mut cx = Context::new(
                &self.doc,
                &mut self.sync,
                &mut *self.store,
                &mut self.timers,
                &self.settings,
            );
            let patches = c.handle(&event, &mut cx);
            prevented |= cx.default_prevented();
            self.doc.apply(patches);
        }

        if !prevented {
            if let Event::Click { target } = event {
                if let Some(url) = self.default_navigation(target) {
                    self.doc.apply([Patch::Navigate { url }]);
                }
            }
        }
        prevented
    }

    /// Href of the anchor a click lands in, if any.
    fn default_navigation(&self, target: ElementId) -> Option<String> {
        let a = features::closest(&self.doc, target, |e| e.tag == Tag::A && e.has_attr("href"))?;
        self.doc.attr(a, "href").map(str::to_string)
    }

    /// Move the virtual clock and apply any deferred patches that fell due.
    pub fn advance(&mut self, now: Duration) {
        let due = self.timers.advance(now);
        if !due.is_empty() {
            log::debug!(
                "[site] t={:?}: {} deferred patches, {} tasks pending",
                self.timers.now(), due.len(), self.timers.pending()
            );
            self.doc.apply(due);
        }
    }

    // ── Convenience drivers ──────────────────────────────────────────────────
    /// Click the element with DOM id `dom_id`. Unknown ids are a no-op.
    pub fn click_id(&mut self, dom_id: &str) -> bool {
        match self.doc.by_id(dom_id) {
            Some(target) => self.dispatch(Event::Click { target }),
            None => false,
        }
    }

    pub fn submit_id(&mut self, dom_id: &str) -> bool {
        match self.doc.by_id(dom_id) {
            Some(form) => self.dispatch(Event::Submit { form }),
            None => false,
        }
    }

    pub fn key(&mut self, key: &str) -> bool {
        self.dispatch(Event::KeyDown { key: key.to_string() })
    }

    /// Type into a control, replacing its value.
    pub fn input(&mut self, dom_id: &str, value: &str) {
        if let Some(id) = self.doc.by_id(dom_id) {
            self.doc.apply([Patch::value(id, value)]);
        }
    }

    /// Scroll to `y` and report every `data-anim` element whose top edge is
    /// now inside a viewport of `height`.
    pub fn scroll(&mut self, y: f64, height: f64) {
        self.dispatch(Event::Scroll { y });
        let y = self.doc.scroll_y;
        let entering: Vec<ElementId> = self.doc.with_attr(features::scroll::REVEAL_ATTR)
            .into_iter()
            .filter(|id| {
                self.doc.get(*id).is_some_and(|e| e.offset_top() >= y && e.offset_top() < y + height)
            })
            .collect();
        for target in entering {
            self.dispatch(Event::Intersect { target, ratio: 1.0 });
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────────
    pub fn document(&self) -> &Document { &self.doc }

    pub fn document_mut(&mut self) -> &mut Document { &mut self.doc }

    pub fn sync(&self) -> &LanguageSync { &self.sync }

    pub fn store(&self) -> &dyn KeyValueStore { &*self.store }

    pub fn settings(&self) -> &Settings { &self.settings }

    pub fn components(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.components.iter().map(|c| c.name())
    }
}
