// src/dom/mod.rs  -  In-memory page model (element arena) + patch adapter
pub mod html;
pub mod patch;

pub use patch::Patch;

use crate::i18n::Dir;
use std::collections::{BTreeMap, BTreeSet};

/// Index of an element inside its [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Body, Title, Header, Nav, Main, Section, Footer, Div,
    H1, H2, H3, P, Span, Small, Ul, Li, Img,
    A, Button, Form, Label, Input, Textarea, Select, Option,
}

impl Tag {
    /// Lower-case element name, as written in markup and selectors.
    pub fn name(self) -> &'static str {
        match self {
            Tag::Body => "body", Tag::Title => "title", Tag::Header => "header",
            Tag::Nav => "nav", Tag::Main => "main", Tag::Section => "section",
            Tag::Footer => "footer", Tag::Div => "div", Tag::H1 => "h1",
            Tag::H2 => "h2", Tag::H3 => "h3", Tag::P => "p", Tag::Span => "span",
            Tag::Small => "small", Tag::Ul => "ul", Tag::Li => "li", Tag::Img => "img",
            Tag::A => "a", Tag::Button => "button", Tag::Form => "form",
            Tag::Label => "label", Tag::Input => "input", Tag::Textarea => "textarea",
            Tag::Select => "select", Tag::Option => "option",
        }
    }

    /// Elements whose value is user data
    pub fn is_text_control(self) -> bool {
        matches!(self, Tag::Input | Tag::Textarea)
    }

    pub fn is_control(self) -> bool {
        matches!(self, Tag::Input | Tag::Textarea | Tag::Select)
    }
}

#[derive(Debug, Clone)]
pub struct Element {
    pub tag:    Tag,
    attrs:      BTreeMap<String, String>,
    classes:    BTreeSet<String>,
    style:      BTreeMap<String, String>,
    html:       String,
    value:      String,
    offset_top: f64,
    parent:     Option<ElementId>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attrs:      BTreeMap::new(),
            classes:    BTreeSet::new(),
            style:      BTreeMap::new(),
            html:       String::new(),
            value:      String::new(),
            offset_top: 0.0,
            parent:     None,
        }
    }

    // ── Builder ──────────────────────────────────────────────────────────────
    pub fn id(self, id: &str) -> Self { self.attr("id", id) }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        // The `value` attribute is the control's default; it seeds the live value.
        if name == "value" { self.value = value.to_string(); }
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.insert(class.to_string());
        self
    }

    pub fn i18n(self, key: &str) -> Self { self.attr("data-i18n", key) }

    pub fn text(mut self, text: &str) -> Self {
        self.html = html::escape(text);
        self
    }

    pub fn at(mut self, offset_top: f64) -> Self {
        self.offset_top = offset_top;
        self
    }

    // ── Accessors ────────────────────────────────────────────────────────────
    pub fn get_attr(&self, name: &str) -> Option<&str> { self.attrs.get(name).map(String::as_str) }
    pub fn has_attr(&self, name: &str) -> bool { self.attrs.contains_key(name) }
    pub fn dom_id(&self) -> Option<&str> { self.get_attr("id") }
    pub fn has_class(&self, class: &str) -> bool { self.classes.contains(class) }
    pub fn classes(&self) -> impl Iterator<Item = &str> { self.classes.iter().map(String::as_str) }
    pub fn style(&self, property: &str) -> Option<&str> { self.style.get(property).map(String::as_str) }
    pub fn inner_html(&self) -> &str { &self.html }
    pub fn text_content(&self) -> String { html::text_content(&self.html) }
    pub fn value(&self) -> &str { &self.value }
    pub fn offset_top(&self) -> f64 { self.offset_top }
    pub fn parent(&self) -> Option<ElementId> { self.parent }
}

/// The page: a body element plus everything appended beneath it, and the
/// few pieces of window state the site logic reads.
#[derive(Debug, Clone)]
pub struct Document {
    elements:           Vec<Element>,
    pub lang:           String,
    pub dir:            Dir,
    pub scroll_y:       f64,
    pub location:       String,
    pub viewport_width: u32,
}

impl Document {
    pub fn new(location: &str) -> Self {
        Self {
            elements:       vec![Element::new(Tag::Body)],
            lang:           String::new(),
            dir:            Dir::Ltr,
            scroll_y:       0.0,
            location:       location.to_string(),
            viewport_width: 1280,
        }
    }

    pub fn body(&self) -> ElementId { ElementId(0) }

    pub fn append(&mut self, parent: ElementId, mut el: Element) -> ElementId {
        el.parent = Some(parent);
        self.elements.push(el);
        ElementId(self.elements.len() - 1)
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> { self.elements.get(id.0) }

    fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> { self.elements.get_mut(id.0) }

    pub fn len(&self) -> usize { self.elements.len() }

    pub fn is_empty(&self) -> bool { self.elements.is_empty() }

    /// All elements in document (insertion) order.
    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &Element)> {
        self.elements.iter().enumerate().map(|(i, e)| (ElementId(i), e))
    }

    pub fn by_id(&self, dom_id: &str) -> Option<ElementId> {
        self.iter().find(|(_, e)| e.dom_id() == Some(dom_id)).map(|(id, _)| id)
    }

    pub fn with_attr(&self, name: &str) -> Vec<ElementId> {
        self.iter().filter(|(_, e)| e.has_attr(name)).map(|(id, _)| id).collect()
    }

    pub fn with_attr_value(&self, name: &str, value: &str) -> Vec<ElementId> {
        self.iter()
            .filter(|(_, e)| e.get_attr(name) == Some(value))
            .map(|(id, _)| id)
            .collect()
    }

    pub fn with_class(&self, class: &str) -> Vec<ElementId> {
        self.iter().filter(|(_, e)| e.has_class(class)).map(|(id, _)| id).collect()
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.get(id).is_some_and(|e| e.has_class(class))
    }

    pub fn attr(&self, id: ElementId, name: &str) -> Option<&str> {
        self.get(id).and_then(|e| e.get_attr(name))
    }

    pub fn value(&self, id: ElementId) -> Option<&str> {
        self.get(id).map(Element::value)
    }

    /// Trimmed value of the control with the given DOM id.
    pub fn field(&self, dom_id: &str) -> String {
        self.by_id(dom_id)
            .and_then(|id| self.value(id))
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    }

    /// Inclusive, like the DOM's `Node.contains`.
    pub fn contains(&self, ancestor: ElementId, node: ElementId) -> bool {
        let mut cur = Some(node);
        while let Some(id) = cur {
            if id == ancestor { return true; }
            cur = self.get(id).and_then(Element::parent);
        }
        false
    }

    /// Strict descendants of `ancestor`, in document order.
    pub fn descendants(&self, ancestor: ElementId) -> Vec<ElementId> {
        self.iter()
            .filter(|(id, _)| *id != ancestor && self.contains(ancestor, *id))
            .map(|(id, _)| id)
            .collect()
    }

    pub fn first_descendant(&self, ancestor: ElementId, pred: impl Fn(&Element) -> bool) -> Option<ElementId> {
        self.descendants(ancestor)
            .into_iter()
            .find(|id| self.get(*id).is_some_and(&pred))
    }

    /// Query part of the location, without the leading `?` or any fragment.
    pub fn query(&self) -> &str {
        let no_frag = self.location.split('#').next().unwrap_or("");
        no_frag.split_once('?').map(|(_, q)| q).unwrap_or("")
    }

    // ── Patch adapter ────────────────────────────────────────────────────────
    pub fn apply(&mut self, patches: impl IntoIterator<Item = Patch>) {
        for p in patches {
            self.apply_one(p);
        }
    }

    fn apply_one(&mut self, patch: Patch) {
        match patch {
            Patch::SetRoot { lang, dir } => {
                self.lang = lang;
                self.dir  = dir;
            }
            Patch::SetText { target, text } => {
                if let Some(e) = self.get_mut(target) { e.html = html::escape(&text); }
            }
            Patch::SetMarkup { target, markup } => {
                if let Some(e) = self.get_mut(target) { e.html = markup; }
            }
            Patch::SetAttr { target, name, value } => {
                if let Some(e) = self.get_mut(target) {
                    e.attrs.insert(name, value);
                }
            }
            Patch::AddClass { target, class } => {
                if let Some(e) = self.get_mut(target) { e.classes.insert(class); }
            }
            Patch::RemoveClass { target, class } => {
                if let Some(e) = self.get_mut(target) { e.classes.remove(&class); }
            }
            Patch::SetValue { target, value } => {
                if let Some(e) = self.get_mut(target) {
                    if e.tag.is_control() { e.value = value; }
                }
            }
            Patch::SetStyle { target, property, value } => {
                if let Some(e) = self.get_mut(target) { e.style.insert(property, value); }
            }
            Patch::ResetForm { form } => self.reset_form(form),
            Patch::ScrollTo { top } => self.scroll_y = top.max(0.0),
            Patch::ScrollIntoView { target } => {
                if let Some(e) = self.get(target) { self.scroll_y = e.offset_top; }
            }
            Patch::Navigate { url } => {
                self.location = self.resolve(&url);
            }
        }
    }

    fn reset_form(&mut self, form: ElementId) {
        let controls: Vec<ElementId> = self.descendants(form)
            .into_iter()
            .filter(|id| self.get(*id).is_some_and(|e| e.tag.is_control()))
            .collect();
        for id in controls {
            let default = self.default_value(id);
            if let Some(e) = self.get_mut(id) { e.value = default; }
        }
    }

    fn default_value(&self, id: ElementId) -> String {
        let Some(el) = self.get(id) else { return String::new() };
        if el.tag != Tag::Select {
            return el.get_attr("value").unwrap_or_default().to_string();
        }
        let options: Vec<ElementId> = self.descendants(id)
            .into_iter()
            .filter(|o| self.get(*o).is_some_and(|e| e.tag == Tag::Option))
            .collect();
        options.iter()
            .find(|o| self.get(**o).is_some_and(|e| e.has_attr("selected")))
            .or(options.first())
            .and_then(|o| self.attr(*o, "value"))
            .unwrap_or_default()
            .to_string()
    }

    /// Fragment-only URLs stay on the current page.
    fn resolve(&self, url: &str) -> String {
        match url.strip_prefix('#') {
            Some(frag) => {
                let base = self.location.split('#').next().unwrap_or("");
                format!("{base}#{frag}")
            }
            None => url.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_doc() -> (Document, ElementId, ElementId, ElementId) {
        let mut d = Document::new("contact.html");
        let body = d.body();
        let form  = d.append(body, Element::new(Tag::Form).id("f"));
        let name  = d.append(form, Element::new(Tag::Input).id("name").attr("value", "Mona"));
        let sel   = d.append(form, Element::new(Tag::Select).id("sel"));
        d.append(sel, Element::new(Tag::Option).attr("value", ""));
        d.append(sel, Element::new(Tag::Option).attr("value", "b"));
        (d, form, name, sel)
    }

    #[test]
    fn set_text_is_escaped_and_markup_is_not() {
        let mut d = Document::new("index.html");
        let p = d.append(d.body(), Element::new(Tag::P));
        d.apply([Patch::text(p, "<a>x</a>")]);
        assert_eq!(d.get(p).unwrap().inner_html(), "&lt;a&gt;x&lt;/a&gt;");
        assert_eq!(d.get(p).unwrap().text_content(), "<a>x</a>");

        d.apply([Patch::markup(p, "<a href=\"#\">x</a>")]);
        assert_eq!(d.get(p).unwrap().inner_html(), "<a href=\"#\">x</a>");
        assert_eq!(d.get(p).unwrap().text_content(), "x");
    }

    #[test]
    fn reset_restores_defaults() {
        let (mut d, form, name, sel) = form_doc();
        d.apply([Patch::value(name, "changed"), Patch::value(sel, "b")]);
        assert_eq!(d.field("name"), "changed");
        d.apply([Patch::ResetForm { form }]);
        assert_eq!(d.field("name"), "Mona");
        assert_eq!(d.field("sel"), "");
    }

    #[test]
    fn contains_is_inclusive_and_follows_parents() {
        let (d, form, name, _) = form_doc();
        assert!(d.contains(form, name));
        assert!(d.contains(name, name));
        assert!(!d.contains(name, form));
        assert!(d.contains(d.body(), name));
    }

    #[test]
    fn query_ignores_fragment() {
        let d = Document::new("contact.html?type=feedback#form");
        assert_eq!(d.query(), "type=feedback");
        assert_eq!(Document::new("index.html").query(), "");
    }

    #[test]
    fn fragment_navigation_keeps_the_page() {
        let mut d = Document::new("index.html?x=1#top");
        d.apply([Patch::Navigate { url: "#about".into() }]);
        assert_eq!(d.location, "index.html?x=1#about");
        d.apply([Patch::Navigate { url: "contact.html".into() }]);
        assert_eq!(d.location, "contact.html");
    }

    #[test]
    fn patches_for_missing_elements_are_ignored() {
        let mut d = Document::new("index.html");
        d.apply([Patch::text(ElementId(99), "x"), Patch::add_class(ElementId(42), "show")]);
        assert_eq!(d.len(), 1);
    }
}
