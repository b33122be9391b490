// src/preview.rs  -  Flattened view of a running site + the driver actions
//
// The terminal UI and `--dump` both render a `View`; neither touches the
// document directly.
use crate::dom::{Document, ElementId, Tag};
use crate::features::{nav, scroll};
use crate::i18n::Dir;
use crate::site::Site;
use crate::sync::LANG_BTN_ID;

/// Pixels of page scroll per preview line.
pub const PX_PER_LINE: f64 = 40.0;
/// Height of the simulated viewport used for reveal checks.
pub const VIEWPORT_HEIGHT: f64 = 800.0;
const SCROLL_STEP: f64 = 120.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind { Success, Error }

#[derive(Debug, Clone, Default)]
pub struct View {
    pub location:   String,
    pub lang:       String,
    pub dir:        Dir,
    pub lines:      Vec<String>,
    pub nav_open:   bool,
    pub tab:        Option<String>,
    pub alert:      Option<(AlertKind, String)>,
    pub scroll_y:   f64,
    pub back_to_top: bool,
}

fn hidden(doc: &Document, id: ElementId) -> bool {
    let mut cur = Some(id);
    while let Some(c) = cur {
        if doc.has_class(c, "hidden") { return true; }
        cur = doc.get(c).and_then(|e| e.parent());
    }
    false
}

fn selected_text(doc: &Document, select: ElementId) -> String {
    let value = doc.value(select).unwrap_or("");
    doc.first_descendant(select, |e| e.tag == Tag::Option && e.get_attr("value") == Some(value))
        .and_then(|o| doc.get(o))
        .map(|o| o.text_content())
        .unwrap_or_default()
}

impl View {
    pub fn capture(site: &Site) -> Self {
        let doc = site.document();
        let mut lines = Vec::new();
        for (id, e) in doc.iter() {
            if hidden(doc, id) || e.has_class("form-alert") { continue; }
            match e.tag {
                Tag::Option => {}
                Tag::Select => lines.push(format!("[▾ {}]", selected_text(doc, id))),
                Tag::Input | Tag::Textarea => {
                    let hint = e.get_attr("placeholder").or(e.dom_id()).unwrap_or("");
                    lines.push(format!("[{hint}: {}]", e.value()));
                }
                _ => {
                    let text = e.text_content();
                    if !text.trim().is_empty() { lines.push(text); }
                }
            }
        }

        let nav_open = doc.by_id(nav::MAIN_NAV_ID).is_some_and(|n| doc.has_class(n, "show"));
        let tab = doc.with_class("tab-btn")
            .into_iter()
            .find(|b| doc.has_class(*b, "active"))
            .and_then(|b| doc.attr(b, "data-tab"))
            .map(str::to_string);
        let alert = doc.with_class("form-alert")
            .into_iter()
            .find(|a| doc.has_class(*a, "show"))
            .and_then(|a| {
                let kind = if doc.has_class(a, "error") { AlertKind::Error } else { AlertKind::Success };
                doc.get(a).map(|e| (kind, e.text_content()))
            });
        let back_to_top = doc.by_id(scroll::BACK_TOP_ID)
            .and_then(|b| doc.get(b))
            .is_some_and(|e| e.style("display") == Some("block"));

        Self {
            location: doc.location.clone(),
            lang:     doc.lang.clone(),
            dir:      doc.dir,
            lines,
            nav_open,
            tab,
            alert,
            scroll_y: doc.scroll_y,
            back_to_top,
        }
    }

    /// First visible line for the current scroll position.
    pub fn first_line(&self) -> usize {
        (self.scroll_y / PX_PER_LINE) as usize
    }

    /// Plain-text rendering, right-aligned to `width` columns for rtl pages.
    pub fn render_text(&self, width: usize) -> String {
        let mut out = format!("{}  [{} | {}]\n", self.location, self.lang, self.dir.as_str());
        out.push_str(&"─".repeat(width));
        out.push('\n');
        for line in &self.lines {
            let pad = match self.dir {
                Dir::Rtl => width.saturating_sub(line.chars().count()),
                Dir::Ltr => 0,
            };
            out.push_str(&" ".repeat(pad));
            out.push_str(line);
            out.push('\n');
        }
        out.push_str(&"─".repeat(width));
        out.push('\n');
        out.push_str(&self.status_line());
        out.push('\n');
        out
    }

    pub fn status_line(&self) -> String {
        let mut s = format!("nav: {}", if self.nav_open { "open" } else { "closed" });
        if let Some(t) = &self.tab { s.push_str(&format!("  tab: {t}")); }
        if self.back_to_top { s.push_str("  [↑ top]"); }
        if let Some((kind, text)) = &self.alert {
            let tag = match kind { AlertKind::Success => "OK", AlertKind::Error => "ERR" };
            s.push_str(&format!("  {tag}: {text}"));
        }
        s
    }
}

// ── Driver actions ────────────────────────────────────────────────────────────
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    ToggleLang,
    ToggleNav,
    NextTab,
    ScrollDown,
    ScrollUp,
    BackToTop,
    /// Close the nav if open; otherwise the preview should exit
    Escape,
}

/// Run one action against the site. Returns `false` when the preview should quit.
pub fn perform(site: &mut Site, action: Action) -> bool {
    match action {
        Action::ToggleLang => { site.click_id(LANG_BTN_ID); }
        Action::ToggleNav  => { site.click_id(nav::NAV_TOGGLE_ID); }
        Action::NextTab    => next_tab(site),
        Action::ScrollDown => {
            let y = site.document().scroll_y + SCROLL_STEP;
            site.scroll(y, VIEWPORT_HEIGHT);
        }
        Action::ScrollUp => {
            let y = (site.document().scroll_y - SCROLL_STEP).max(0.0);
            site.scroll(y, VIEWPORT_HEIGHT);
        }
        Action::BackToTop => {
            site.click_id(scroll::BACK_TOP_ID);
            site.scroll(site.document().scroll_y, VIEWPORT_HEIGHT);
        }
        Action::Escape => {
            if !View::capture(site).nav_open { return false; }
            site.key("Escape");
        }
    }
    true
}

fn next_tab(site: &mut Site) {
    let doc = site.document();
    let buttons = doc.with_class("tab-btn");
    if buttons.is_empty() { return; }
    let current = buttons.iter().position(|b| doc.has_class(*b, "active"));
    let next = buttons[current.map_or(0, |i| (i + 1) % buttons.len())];
    site.dispatch(crate::features::Event::Click { target: next });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages;
    use crate::store::MemoryStore;

    fn boot(doc: Document) -> Site {
        Site::boot(doc, Box::new(MemoryStore::new()), Default::default())
    }

    #[test]
    fn rtl_lines_are_right_aligned() {
        let site = boot(pages::home("index.html"));
        let v = View::capture(&site);
        assert_eq!(v.dir, Dir::Rtl);
        let text = v.render_text(100);
        let about = text.lines().find(|l| l.contains("عن المؤسسة")).unwrap();
        assert!(about.starts_with(' '));
    }

    #[test]
    fn ltr_lines_start_at_column_zero() {
        let mut site = boot(pages::home("index.html"));
        perform(&mut site, Action::ToggleLang);
        let text = View::capture(&site).render_text(100);
        assert!(text.lines().any(|l| l == "About the Foundation"));
    }

    #[test]
    fn hidden_panel_is_not_rendered() {
        let site = boot(pages::contact("contact.html"));
        let v = View::capture(&site);
        assert_eq!(v.tab.as_deref(), Some("wholesale"));
        assert!(v.lines.iter().any(|l| l.starts_with("[quantity") || l.contains("الكمية")));
        assert!(!v.lines.iter().any(|l| l.starts_with("[details")));
    }

    #[test]
    fn next_tab_cycles() {
        let mut site = boot(pages::contact("contact.html"));
        perform(&mut site, Action::NextTab);
        assert_eq!(View::capture(&site).tab.as_deref(), Some("feedback"));
        perform(&mut site, Action::NextTab);
        assert_eq!(View::capture(&site).tab.as_deref(), Some("wholesale"));
    }

    #[test]
    fn escape_closes_nav_before_quitting() {
        let mut site = boot(pages::home("index.html"));
        perform(&mut site, Action::ToggleNav);
        assert!(View::capture(&site).nav_open);
        assert!(perform(&mut site, Action::Escape));
        assert!(!View::capture(&site).nav_open);
        assert!(!perform(&mut site, Action::Escape));
    }

    #[test]
    fn scrolling_shows_back_to_top_and_reveals() {
        let mut site = boot(pages::home("index.html"));
        for _ in 0..5 { perform(&mut site, Action::ScrollDown); }
        let v = View::capture(&site);
        assert_eq!(v.scroll_y, 600.0);
        assert!(v.back_to_top);
        assert_eq!(v.first_line(), 15);

        perform(&mut site, Action::BackToTop);
        let v = View::capture(&site);
        assert_eq!(v.scroll_y, 0.0);
        assert!(!v.back_to_top);
    }

    #[test]
    fn alert_shows_in_status_line() {
        let mut site = boot(pages::contact("contact.html"));
        site.submit_id("wholesaleForm");
        let v = View::capture(&site);
        assert_eq!(v.alert.as_ref().map(|(k, _)| *k), Some(AlertKind::Error));
        assert!(v.status_line().contains("ERR: ⚠"));
    }
}
