// src/features/lang.rs  -  Language toggle button
use super::{Component, Context, Event};
use crate::dom::{Document, ElementId, Patch};
use crate::sync::LANG_BTN_ID;

#[derive(Default)]
pub struct LanguageButton {
    button: Option<ElementId>,
}

impl Component for LanguageButton {
    fn name(&self) -> &'static str { "language-button" }

    fn activate(&mut self, doc: &Document) -> bool {
        self.button = doc.by_id(LANG_BTN_ID);
        self.button.is_some()
    }

    fn handle(&mut self, event: &Event, cx: &mut Context<'_>) -> Vec<Patch> {
        match (event, self.button) {
            (Event::Click { target }, Some(btn)) if cx.doc.contains(btn, *target) => {
                cx.sync.toggle(cx.doc, &mut *cx.store)
            }
            _ => Vec::new(),
        }
    }
}
