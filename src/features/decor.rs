// src/features/decor.rs  -  Logo intro animation
use super::{Component, Context, Event};
use crate::dom::{Document, ElementId, Patch};

pub const LOGO_ID: &str = "logoImg";

/// Intro class at load, then the float loop once the intro has played.
#[derive(Default)]
pub struct Logo {
    logo: Option<ElementId>,
}

impl Component for Logo {
    fn name(&self) -> &'static str { "logo" }

    fn activate(&mut self, doc: &Document) -> bool {
        self.logo = doc.by_id(LOGO_ID);
        self.logo.is_some()
    }

    fn handle(&mut self, event: &Event, cx: &mut Context<'_>) -> Vec<Patch> {
        let (Event::Load, Some(logo)) = (event, self.logo) else { return Vec::new() };
        cx.timers.schedule(
            cx.settings.logo_float_delay,
            "logo float-loop",
            vec![Patch::add_class(logo, "float-loop")],
        );
        vec![Patch::add_class(logo, "logo-intro")]
    }
}
