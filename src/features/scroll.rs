// src/features/scroll.rs  -  Smooth in-page links, reveal-on-scroll, parallax, back-to-top
use super::{closest, nav::MAIN_NAV_ID, Component, Context, Event};
use crate::dom::{Document, Element, ElementId, Patch, Tag};
use std::collections::BTreeSet;

pub const REVEAL_ATTR:   &str = "data-anim";
pub const REVEAL_CLASS:  &str = "is-visible";
pub const BACK_TOP_ID:   &str = "backTop";
pub const HERO_WAVE_CLASS: &str = "hero-wave";

/// `#...` links scroll to the first element their fragment selects on this page.
pub struct SmoothScroll;

fn fragment_link(doc: &Document, id: ElementId) -> Option<(ElementId, &str)> {
    let a = closest(doc, id, |e| e.tag == Tag::A && e.get_attr("href").is_some_and(|h| h.starts_with('#')))?;
    Some((a, doc.attr(a, "href")?))
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Combinator { Descendant, Child }

/// One compound selector: optional element name plus `#id` / `.class` parts.
#[derive(Debug, Default, PartialEq)]
struct Compound<'a> {
    tag:     Option<&'a str>,
    ids:     Vec<&'a str>,
    classes: Vec<&'a str>,
}

impl Compound<'_> {
    fn matches(&self, e: &Element) -> bool {
        self.tag.map_or(true, |t| e.tag.name().eq_ignore_ascii_case(t))
            && self.ids.iter().all(|id| e.dom_id() == Some(*id))
            && self.classes.iter().all(|c| e.has_class(c))
    }
}

/// Byte length of the CSS identifier at the start of `s`, 0 when there is none.
fn ident_len(s: &str) -> usize {
    let name_char = |c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii();
    let mut chars = s.chars();
    let starts_ok = match chars.next() {
        Some('-') => chars.next().is_some_and(|c| name_char(c) && !c.is_ascii_digit()),
        Some(c)   => name_char(c) && !c.is_ascii_digit(),
        None      => false,
    };
    if !starts_ok { return 0; }
    s.char_indices().find(|&(_, c)| !name_char(c)).map_or(s.len(), |(i, _)| i)
}

/// Parse a link fragment as a selector: compounds joined by whitespace or `>`.
/// `None` when it is not a valid selector.
fn parse_selector(href: &str) -> Option<Vec<(Combinator, Compound<'_>)>> {
    let mut out = Vec::new();
    let mut rest = href.trim();
    let mut comb = Combinator::Descendant;
    loop {
        let mut compound = Compound::default();
        let n = ident_len(rest);
        if n > 0 {
            compound.tag = Some(&rest[..n]);
            rest = &rest[n..];
        }
        while let Some(marker) = rest.chars().next().filter(|c| *c == '#' || *c == '.') {
            let n = ident_len(&rest[1..]);
            if n == 0 { return None; }
            let name = &rest[1..=n];
            if marker == '#' { compound.ids.push(name) } else { compound.classes.push(name) }
            rest = &rest[1 + n..];
        }
        if compound == Compound::default() { return None; }
        out.push((comb, compound));

        let trimmed = rest.trim_start();
        if trimmed.is_empty() { return Some(out); }
        let spaced = trimmed.len() < rest.len();
        (comb, rest) = match trimmed.strip_prefix('>') {
            Some(r)           => (Combinator::Child, r.trim_start()),
            None if spaced    => (Combinator::Descendant, trimmed),
            None              => return None,
        };
    }
}

fn matches_chain(doc: &Document, id: ElementId, chain: &[(Combinator, Compound<'_>)]) -> bool {
    let Some(((comb, last), before)) = chain.split_last() else { return true };
    let Some(el) = doc.get(id) else { return false };
    if !last.matches(el) { return false; }
    if before.is_empty() { return true; }
    match comb {
        Combinator::Child => el.parent().is_some_and(|p| matches_chain(doc, p, before)),
        Combinator::Descendant => {
            let mut up = el.parent();
            while let Some(p) = up {
                if matches_chain(doc, p, before) { return true; }
                up = doc.get(p).and_then(|e| e.parent());
            }
            false
        }
    }
}

/// First element in document order the selector matches.
fn query(doc: &Document, chain: &[(Combinator, Compound<'_>)]) -> Option<ElementId> {
    doc.iter().map(|(id, _)| id).find(|id| matches_chain(doc, *id, chain))
}

impl Component for SmoothScroll {
    fn name(&self) -> &'static str { "smooth-scroll" }

    fn activate(&mut self, doc: &Document) -> bool {
        doc.iter().any(|(id, _)| fragment_link(doc, id).is_some())
    }

    fn handle(&mut self, event: &Event, cx: &mut Context<'_>) -> Vec<Patch> {
        let Event::Click { target } = event else { return Vec::new() };
        let Some((_, href)) = fragment_link(cx.doc, *target) else { return Vec::new() };
        if href == "#" { return Vec::new(); }

        let Some(selector) = parse_selector(href) else {
            log::debug!("[smooth-scroll] ignoring invalid fragment {href:?}");
            cx.prevent_default();
            return Vec::new();
        };
        // Nothing on this page matches: let the browser navigate.
        let Some(dest) = query(cx.doc, &selector) else { return Vec::new() };

        cx.prevent_default();
        let mut out = vec![Patch::ScrollIntoView { target: dest }];
        if let Some(nav) = cx.doc.by_id(MAIN_NAV_ID).filter(|n| cx.doc.has_class(*n, "show")) {
            out.push(Patch::remove_class(nav, "show"));
        }
        out
    }
}

/// One-shot reveal: each watched element gets `is-visible` the first time it
/// crosses the threshold and is never watched again.
#[derive(Default)]
pub struct ScrollReveal {
    watched: BTreeSet<ElementId>,
}

impl Component for ScrollReveal {
    fn name(&self) -> &'static str { "scroll-reveal" }

    fn activate(&mut self, doc: &Document) -> bool {
        self.watched = doc.with_attr(REVEAL_ATTR).into_iter().collect();
        !self.watched.is_empty()
    }

    fn handle(&mut self, event: &Event, cx: &mut Context<'_>) -> Vec<Patch> {
        match event {
            Event::Intersect { target, ratio }
                if *ratio >= cx.settings.reveal_threshold && self.watched.remove(target) =>
            {
                vec![Patch::add_class(*target, REVEAL_CLASS)]
            }
            _ => Vec::new(),
        }
    }
}

#[derive(Default)]
pub struct Parallax {
    wave: Option<ElementId>,
}

impl Component for Parallax {
    fn name(&self) -> &'static str { "parallax" }

    fn activate(&mut self, doc: &Document) -> bool {
        self.wave = doc.with_class(HERO_WAVE_CLASS).first().copied();
        self.wave.is_some()
    }

    fn handle(&mut self, event: &Event, cx: &mut Context<'_>) -> Vec<Patch> {
        let (Event::Scroll { y }, Some(wave)) = (event, self.wave) else { return Vec::new() };
        let shift = y * cx.settings.parallax_factor;
        // No "-0" in the output.
        let shift = if shift == 0.0 { 0.0 } else { shift };
        vec![Patch::style(wave, "transform", format!("translateY({shift}px)"))]
    }
}

#[derive(Default)]
pub struct BackToTop {
    button: Option<ElementId>,
}

impl Component for BackToTop {
    fn name(&self) -> &'static str { "back-to-top" }

    fn activate(&mut self, doc: &Document) -> bool {
        self.button = doc.by_id(BACK_TOP_ID);
        self.button.is_some()
    }

    fn handle(&mut self, event: &Event, cx: &mut Context<'_>) -> Vec<Patch> {
        let Some(btn) = self.button else { return Vec::new() };
        match event {
            Event::Scroll { y } => {
                let shown = *y > cx.settings.back_to_top_after;
                vec![Patch::style(btn, "display", if shown { "block" } else { "none" })]
            }
            Event::Click { target } if cx.doc.contains(btn, *target) => {
                vec![Patch::ScrollTo { top: 0.0 }]
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Element;
    use crate::site::Site;
    use crate::store::MemoryStore;

    fn site() -> Site {
        let mut doc = Document::new("index.html");
        let body = doc.body();
        let nav = doc.append(body, Element::new(Tag::Nav).id(MAIN_NAV_ID));
        doc.append(nav, Element::new(Tag::A).id("toAbout").attr("href", "#about"));
        doc.append(body, Element::new(Tag::A).id("toMissing").attr("href", "#gallery"));
        doc.append(body, Element::new(Tag::A).id("toBad").attr("href", "#1bad"));
        doc.append(body, Element::new(Tag::A).id("toCompound").attr("href", "#quality.wide"));
        doc.append(body, Element::new(Tag::A).id("toCompoundMiss").attr("href", "#about.wide"));
        doc.append(body, Element::new(Tag::A).id("toDescendant").attr("href", "#quality h2"));
        doc.append(body, Element::new(Tag::A).id("toNothing").attr("href", "#"));
        doc.append(body, Element::new(Tag::Div).class(HERO_WAVE_CLASS));
        doc.append(body, Element::new(Tag::Section).id("about").attr(REVEAL_ATTR, "").at(640.0));
        let quality = doc.append(body, Element::new(Tag::Section).id("quality").class("wide").attr(REVEAL_ATTR, "").at(1400.0));
        doc.append(quality, Element::new(Tag::H2).text("Quality").at(1450.0));
        doc.append(body, Element::new(Tag::Button).id(BACK_TOP_ID));
        Site::boot(doc, Box::new(MemoryStore::new()), Default::default())
    }

    #[test]
    fn fragment_selectors() {
        let ids = |href| parse_selector(href).map(|c| c.into_iter().map(|(_, c)| c.ids).collect::<Vec<_>>());
        assert_eq!(ids("#about"), Some(vec![vec!["about"]]));
        assert_eq!(ids("#product_flow-2"), Some(vec![vec!["product_flow-2"]]));
        assert_eq!(ids("#-x"), Some(vec![vec!["-x"]]));
        assert_eq!(ids("#a.b"), Some(vec![vec!["a"]]));
        assert_eq!(ids("#a b"), Some(vec![vec!["a"], vec![]]));
        assert_eq!(ids("#a > .b"), Some(vec![vec!["a"], vec![]]));
        assert_eq!(ids("#1bad"), None);
        assert_eq!(ids("#-1"), None);
        assert_eq!(ids("#a."), None);
        assert_eq!(ids("#a>"), None);
        assert_eq!(ids("#a,b"), None);
        assert_eq!(ids("#"), None);
    }

    #[test]
    fn existing_target_scrolls_and_closes_nav() {
        let mut s = site();
        let nav = s.document().by_id(MAIN_NAV_ID).unwrap();
        s.document_mut().apply([Patch::add_class(nav, "show")]);
        let prevented = s.click_id("toAbout");
        assert!(prevented);
        assert_eq!(s.document().scroll_y, 640.0);
        assert!(!s.document().has_class(nav, "show"));
        assert_eq!(s.document().location, "index.html");
    }

    #[test]
    fn missing_target_falls_back_to_navigation() {
        let mut s = site();
        assert!(!s.click_id("toMissing"));
        assert_eq!(s.document().location, "index.html#gallery");
    }

    #[test]
    fn compound_fragments_resolve_like_selectors() {
        let mut s = site();
        assert!(s.click_id("toCompound"));
        assert_eq!(s.document().scroll_y, 1400.0);

        assert!(s.click_id("toDescendant"));
        assert_eq!(s.document().scroll_y, 1450.0);

        // Valid but unmatched: the browser gets the link.
        assert!(!s.click_id("toCompoundMiss"));
        assert_eq!(s.document().location, "index.html#about.wide");
    }

    #[test]
    fn invalid_selector_makes_link_inert() {
        let mut s = site();
        assert!(s.click_id("toBad"));
        assert_eq!(s.document().location, "index.html");
        assert_eq!(s.document().scroll_y, 0.0);
    }

    #[test]
    fn bare_hash_is_left_alone() {
        let mut s = site();
        assert!(!s.click_id("toNothing"));
        assert_eq!(s.document().location, "index.html#");
    }

    #[test]
    fn reveal_happens_once() {
        let mut s = site();
        let about = s.document().by_id("about").unwrap();
        s.dispatch(Event::Intersect { target: about, ratio: 0.05 });
        assert!(!s.document().has_class(about, REVEAL_CLASS));

        s.dispatch(Event::Intersect { target: about, ratio: 0.2 });
        assert!(s.document().has_class(about, REVEAL_CLASS));

        // Removing the marker and re-entering must not re-add it.
        s.document_mut().apply([Patch::remove_class(about, REVEAL_CLASS)]);
        s.dispatch(Event::Intersect { target: about, ratio: 1.0 });
        assert!(!s.document().has_class(about, REVEAL_CLASS));
    }

    #[test]
    fn parallax_and_back_to_top_follow_scroll() {
        let mut s = site();
        let wave = s.document().with_class(HERO_WAVE_CLASS)[0];
        let top  = s.document().by_id(BACK_TOP_ID).unwrap();

        s.dispatch(Event::Scroll { y: 1000.0 });
        assert_eq!(s.document().get(wave).unwrap().style("transform"), Some("translateY(-50px)"));
        assert_eq!(s.document().get(top).unwrap().style("display"), Some("block"));
        assert_eq!(s.document().scroll_y, 1000.0);

        s.dispatch(Event::Scroll { y: 0.0 });
        assert_eq!(s.document().get(wave).unwrap().style("transform"), Some("translateY(0px)"));
        assert_eq!(s.document().get(top).unwrap().style("display"), Some("none"));

        s.dispatch(Event::Scroll { y: 900.0 });
        s.click_id(BACK_TOP_ID);
        assert_eq!(s.document().scroll_y, 0.0);
    }
}
