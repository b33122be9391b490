// src/features/products.rs  -  "Request" buttons on product cards
use super::{Component, Context, Event};
use crate::dom::{Document, ElementId, Patch, Tag};
use crate::query;

pub const CONTACT_PAGE: &str = "contact.html";

/// Each card button opens the wholesale form with its product preselected.
#[derive(Default)]
pub struct RequestButtons {
    buttons: Vec<ElementId>,
}

pub fn request_url(product_name: &str) -> String {
    format!("{CONTACT_PAGE}?type=wholesale&product={}", query::encode_component(product_name))
}

impl Component for RequestButtons {
    fn name(&self) -> &'static str { "product-request" }

    fn activate(&mut self, doc: &Document) -> bool {
        self.buttons = doc.with_attr_value("data-action", "request")
            .into_iter()
            .filter(|id| doc.get(*id).is_some_and(|e| e.tag == Tag::Button))
            .collect();
        !self.buttons.is_empty()
    }

    fn handle(&mut self, event: &Event, cx: &mut Context<'_>) -> Vec<Patch> {
        let Event::Click { target } = event else { return Vec::new() };
        let Some(btn) = self.buttons.iter().copied().find(|b| cx.doc.contains(*b, *target)) else {
            return Vec::new();
        };
        let name = cx.doc.attr(btn, "data-name").unwrap_or("");
        vec![Patch::Navigate { url: request_url(name) }]
    }
}
