// src/features/tabs.rs  -  Contact page tabs + query/stored-contact prefill
use super::{inside_class, Component, Context, Event};
use crate::dom::{Document, ElementId, Patch, Tag};
use crate::i18n::product_key;
use crate::query;
use crate::store::{KEY_CONTACT_EMAIL, KEY_CONTACT_NAME};

pub const CONTACT_PAGE_CLASS: &str = "contact-page";
pub const TAB_WHOLESALE: &str = "wholesale";
pub const TAB_FEEDBACK:  &str = "feedback";

#[derive(Default)]
pub struct ContactTabs {
    buttons: Vec<ElementId>,
    panels:  Vec<ElementId>,
}

impl ContactTabs {
    /// Exactly one active button and exactly one visible panel.
    fn select(&self, doc: &Document, button: ElementId) -> Vec<Patch> {
        let tab = doc.attr(button, "data-tab").unwrap_or("");
        let mut out: Vec<Patch> = self.buttons.iter()
            .map(|b| Patch::remove_class(*b, "active"))
            .chain(self.panels.iter().map(|p| Patch::add_class(*p, "hidden")))
            .collect();
        out.push(Patch::add_class(button, "active"));
        if let Some(panel) = doc.with_attr_value("data-form-type", tab).first() {
            out.push(Patch::remove_class(*panel, "hidden"));
        }
        log::debug!("[tabs] -> {tab}");
        out
    }

    fn button_for(&self, doc: &Document, tab: &str) -> Option<ElementId> {
        self.buttons.iter().copied().find(|b| doc.attr(*b, "data-tab") == Some(tab))
    }

    fn prefill(&self, cx: &Context<'_>) -> Vec<Patch> {
        let doc = cx.doc;
        let q = doc.query();
        let tab = match query::param(q, "type").as_deref() {
            Some(TAB_FEEDBACK) => TAB_FEEDBACK,
            _                  => TAB_WHOLESALE,
        };
        let mut out = self.button_for(doc, tab)
            .map(|b| self.select(doc, b))
            .unwrap_or_default();

        if let Some(requested) = query::param(q, "product").filter(|p| !p.is_empty()) {
            let key = product_key(&requested);
            match doc.by_id("productSelect") {
                Some(select) if has_option(doc, select, key) => out.push(Patch::value(select, key)),
                Some(_) => log::debug!("[tabs] no product option {key:?}"),
                None => {}
            }
        }

        let stored = [
            (KEY_CONTACT_NAME,  ["contactName", "feedbackName"]),
            (KEY_CONTACT_EMAIL, ["email", "feedbackEmail"]),
        ];
        for (key, fields) in stored {
            let Some(saved) = cx.store.get(key).filter(|v| !v.is_empty()) else { continue };
            for field in fields.iter().filter_map(|f| doc.by_id(f)) {
                out.push(Patch::attr(field, "value", &saved));
                out.push(Patch::value(field, &saved));
            }
        }
        out
    }
}

fn has_option(doc: &Document, select: ElementId, value: &str) -> bool {
    doc.first_descendant(select, |e| e.tag == Tag::Option && e.get_attr("value") == Some(value))
        .is_some()
}

impl Component for ContactTabs {
    fn name(&self) -> &'static str { "contact-tabs" }

    fn activate(&mut self, doc: &Document) -> bool {
        self.buttons = doc.with_class("tab-btn")
            .into_iter()
            .filter(|b| inside_class(doc, *b, "form-tabs"))
            .collect();
        self.panels = doc.with_class("form")
            .into_iter()
            .filter(|p| inside_class(doc, *p, CONTACT_PAGE_CLASS))
            .collect();
        !self.buttons.is_empty() || doc.has_class(doc.body(), CONTACT_PAGE_CLASS)
    }

    fn handle(&mut self, event: &Event, cx: &mut Context<'_>) -> Vec<Patch> {
        match event {
            Event::Load if cx.doc.has_class(cx.doc.body(), CONTACT_PAGE_CLASS) => self.prefill(cx),
            Event::Click { target } => {
                match self.buttons.iter().copied().find(|b| cx.doc.contains(*b, *target)) {
                    Some(b) => self.select(cx.doc, b),
                    None    => Vec::new(),
                }
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages;
    use crate::site::Site;
    use crate::store::{KeyValueStore, MemoryStore};

    fn boot(location: &str, store: MemoryStore) -> Site {
        Site::boot(pages::contact(location), Box::new(store), Default::default())
    }

    fn visible(s: &Site, form_type: &str) -> bool {
        let d = s.document();
        let panel = d.with_attr_value("data-form-type", form_type)[0];
        !d.has_class(panel, "hidden")
    }

    fn active_tabs(s: &Site) -> Vec<String> {
        let d = s.document();
        d.with_class("tab-btn")
            .into_iter()
            .filter(|b| d.has_class(*b, "active"))
            .filter_map(|b| d.attr(b, "data-tab").map(str::to_string))
            .collect()
    }

    #[test]
    fn wholesale_is_the_default_tab() {
        let s = boot("contact.html", MemoryStore::new());
        assert_eq!(active_tabs(&s), ["wholesale"]);
        assert!(visible(&s, TAB_WHOLESALE));
        assert!(!visible(&s, TAB_FEEDBACK));
    }

    #[test]
    fn unknown_type_falls_back_to_wholesale() {
        let s = boot("contact.html?type=bogus", MemoryStore::new());
        assert_eq!(active_tabs(&s), ["wholesale"]);
    }

    #[test]
    fn clicking_switches_exactly_one_tab() {
        let mut s = boot("contact.html", MemoryStore::new());
        s.click_id("tabFeedbackBtn");
        assert_eq!(active_tabs(&s), ["feedback"]);
        assert!(visible(&s, TAB_FEEDBACK));
        assert!(!visible(&s, TAB_WHOLESALE));
    }

    #[test]
    fn arabic_product_name_preselects_option() {
        let s = boot("contact.html?type=wholesale&product=%D8%AE%D9%84%20%D8%A3%D9%88%D9%8A%D8%B3", MemoryStore::new());
        assert_eq!(s.document().field("productSelect"), "product_oweis");
    }

    #[test]
    fn unknown_product_leaves_select_alone() {
        let s = boot("contact.html?product=caviar", MemoryStore::new());
        assert_eq!(s.document().field("productSelect"), "");
    }

    #[test]
    fn stored_contact_prefills_both_forms() {
        let mut store = MemoryStore::new();
        store.set(KEY_CONTACT_NAME, "Mona").unwrap();
        store.set(KEY_CONTACT_EMAIL, "mona@example.com").unwrap();
        let s = boot("contact.html?type=feedback", store);
        let d = s.document();
        assert_eq!(d.field("contactName"), "Mona");
        assert_eq!(d.field("feedbackName"), "Mona");
        assert_eq!(d.field("email"), "mona@example.com");
        assert_eq!(d.field("feedbackEmail"), "mona@example.com");
    }

    #[test]
    fn home_page_is_not_prefilled() {
        let mut store = MemoryStore::new();
        store.set(KEY_CONTACT_NAME, "Mona").unwrap();
        let s = Site::boot(pages::home("index.html"), Box::new(store), Default::default());
        assert!(!s.components().any(|n| n == "contact-tabs"));
    }
}
