// src/features/nav.rs  -  Mobile nav toggle + products dropdown
use super::{set_class, Component, Context, Event};
use crate::dom::{Document, ElementId, Patch, Tag};

pub const NAV_TOGGLE_ID: &str = "navToggle";
pub const MAIN_NAV_ID:   &str = "mainNav";
pub const PRODUCTS_MENU_ID: &str = "productsMenu";

/// Nav visibility: the toggle flips it, an outside click or Escape closes it.
#[derive(Default)]
pub struct NavMenu {
    toggle: Option<ElementId>,
    nav:    Option<ElementId>,
}

impl NavMenu {
    fn close(&self, nav: ElementId) -> Vec<Patch> {
        let mut out = vec![Patch::remove_class(nav, "show")];
        if let Some(t) = self.toggle {
            out.push(Patch::attr(t, "aria-expanded", "false"));
        }
        out
    }
}

impl Component for NavMenu {
    fn name(&self) -> &'static str { "nav" }

    fn activate(&mut self, doc: &Document) -> bool {
        self.toggle = doc.by_id(NAV_TOGGLE_ID);
        self.nav    = doc.by_id(MAIN_NAV_ID);
        self.nav.is_some()
    }

    fn handle(&mut self, event: &Event, cx: &mut Context<'_>) -> Vec<Patch> {
        let Some(nav) = self.nav else { return Vec::new() };
        let open = cx.doc.has_class(nav, "show");
        match event {
            Event::Click { target } => {
                if let Some(t) = self.toggle.filter(|t| cx.doc.contains(*t, *target)) {
                    let now_open = !open;
                    return vec![
                        set_class(nav, "show", now_open),
                        Patch::attr(t, "aria-expanded", if now_open { "true" } else { "false" }),
                    ];
                }
                if open && !cx.doc.contains(nav, *target) {
                    return self.close(nav);
                }
                Vec::new()
            }
            Event::KeyDown { key } if key == "Escape" && open => self.close(nav),
            _ => Vec::new(),
        }
    }
}

/// On narrow viewports the "Products" link opens its submenu instead of navigating.
#[derive(Default)]
pub struct ProductsDropdown {
    anchor:   Option<ElementId>,
    dropdown: Option<ElementId>,
}

impl Component for ProductsDropdown {
    fn name(&self) -> &'static str { "products-dropdown" }

    fn activate(&mut self, doc: &Document) -> bool {
        let Some(menu) = doc.by_id(PRODUCTS_MENU_ID) else { return false };
        self.anchor   = doc.first_descendant(menu, |e| e.tag == Tag::A);
        self.dropdown = doc.first_descendant(menu, |e| e.has_class("dropdown-menu"));
        self.anchor.is_some()
    }

    fn handle(&mut self, event: &Event, cx: &mut Context<'_>) -> Vec<Patch> {
        let Event::Click { target } = event else { return Vec::new() };
        let Some(anchor) = self.anchor else { return Vec::new() };
        if !cx.doc.contains(anchor, *target) || cx.doc.viewport_width > cx.settings.dropdown_breakpoint {
            return Vec::new();
        }
        cx.prevent_default();
        match self.dropdown {
            Some(dd) => vec![set_class(dd, "show", !cx.doc.has_class(dd, "show"))],
            None     => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Element;
    use crate::site::Site;
    use crate::store::MemoryStore;

    fn site(width: u32) -> Site {
        let mut doc = Document::new("index.html");
        doc.viewport_width = width;
        let body = doc.body();
        doc.append(body, Element::new(Tag::Button).id(NAV_TOGGLE_ID).attr("aria-expanded", "false"));
        let nav  = doc.append(body, Element::new(Tag::Nav).id(MAIN_NAV_ID));
        let menu = doc.append(nav, Element::new(Tag::Li).id(PRODUCTS_MENU_ID));
        doc.append(menu, Element::new(Tag::A).attr("href", "index.html#products").text("Products"));
        doc.append(menu, Element::new(Tag::Ul).class("dropdown-menu"));
        doc.append(body, Element::new(Tag::P).id("outside"));
        Site::boot(doc, Box::new(MemoryStore::new()), Default::default())
    }

    fn nav_open(s: &Site) -> bool {
        let d = s.document();
        d.has_class(d.by_id(MAIN_NAV_ID).unwrap(), "show")
    }

    fn aria(s: &Site) -> Option<String> {
        let d = s.document();
        d.attr(d.by_id(NAV_TOGGLE_ID).unwrap(), "aria-expanded").map(str::to_string)
    }

    #[test]
    fn toggle_flips_and_mirrors_aria() {
        let mut s = site(1280);
        s.click_id(NAV_TOGGLE_ID);
        assert!(nav_open(&s));
        assert_eq!(aria(&s).as_deref(), Some("true"));
        s.click_id(NAV_TOGGLE_ID);
        assert!(!nav_open(&s));
        assert_eq!(aria(&s).as_deref(), Some("false"));
    }

    #[test]
    fn outside_click_closes() {
        let mut s = site(1280);
        s.click_id(NAV_TOGGLE_ID);
        s.click_id(MAIN_NAV_ID);
        assert!(nav_open(&s), "click inside keeps it open");
        s.click_id("outside");
        assert!(!nav_open(&s));
        assert_eq!(aria(&s).as_deref(), Some("false"));
    }

    #[test]
    fn escape_closes() {
        let mut s = site(1280);
        s.click_id(NAV_TOGGLE_ID);
        s.dispatch(Event::KeyDown { key: "Enter".into() });
        assert!(nav_open(&s));
        assert_eq!(aria(&s).as_deref(), Some("true"));
        s.dispatch(Event::KeyDown { key: "Escape".into() });
        assert!(!nav_open(&s));
        assert_eq!(aria(&s).as_deref(), Some("false"));
    }

    #[test]
    fn dropdown_only_on_narrow_viewports() {
        let mut narrow = site(800);
        let anchor = narrow.document().with_attr("href")[0];
        let prevented = narrow.dispatch(Event::Click { target: anchor });
        assert!(prevented);
        let dd = narrow.document().with_class("dropdown-menu")[0];
        assert!(narrow.document().has_class(dd, "show"));
        assert_eq!(narrow.document().location, "index.html");

        let mut wide = site(1280);
        let prevented = wide.dispatch(Event::Click { target: anchor });
        assert!(!prevented);
        assert_eq!(wide.document().location, "index.html#products");
    }
}
