// src/sync.rs  -  Language/State Synchronizer
//
// Owns the active language and re-renders every translatable element when it
// changes. Output is a patch list; `Document::apply` performs the writes.
use crate::dom::{Document, Patch, Tag};
use crate::i18n::{Dir, EntryKind, Lang, TranslationTable};
use crate::store::{self, KeyValueStore};

pub const SITE_ID:     &str = "site";
pub const LANG_BTN_ID: &str = "langBtn";
pub const YEAR_ID:     &str = "year";

pub const ATTR_I18N:             &str = "data-i18n";
pub const ATTR_I18N_PLACEHOLDER: &str = "data-i18n-placeholder";
pub const ATTR_LANG:             &str = "data-lang";

pub struct LanguageSync {
    table:  &'static TranslationTable,
    active: String,
    year:   i32,
}

impl LanguageSync {
    pub fn new(table: &'static TranslationTable, year: i32) -> Self {
        Self { table, active: Lang::default().code().to_string(), year }
    }

    /// Raw active code; may be outside the supported set if one was persisted.
    pub fn active(&self) -> &str { &self.active }

    /// Active language for message lookups, Arabic when the code is unsupported.
    pub fn active_lang(&self) -> Lang {
        Lang::from_code(&self.active).unwrap_or_default()
    }

    pub fn table(&self) -> &'static TranslationTable { self.table }

    /// Message in the active language; empty when the key is unknown.
    pub fn message(&self, key: &str) -> &'static str {
        self.table.get(key, self.active_lang()).unwrap_or("")
    }

    /// Render the whole page in `code`.
    ///
    /// Elements whose key is missing (or whose code is unsupported) keep their
    /// current content. Input and textarea content is never written.
    pub fn apply_language(&mut self, doc: &Document, code: &str) -> Vec<Patch> {
        self.active = code.to_string();

        let Some(site) = doc.by_id(SITE_ID) else {
            log::debug!("[sync] no #{SITE_ID} container, nothing to render");
            return Vec::new();
        };
        let dir = Dir::for_code(code);
        let mut out = vec![
            Patch::attr(site, ATTR_LANG, code),
            Patch::SetRoot { lang: code.to_string(), dir },
            Patch::attr(site, "dir", dir.as_str()),
        ];

        for id in doc.with_attr(ATTR_I18N) {
            let Some(el) = doc.get(id) else { continue };
            let Some(key) = el.get_attr(ATTR_I18N) else { continue };
            let Some(loc) = self.table.lookup(key, code) else { continue };
            match el.tag {
                Tag::Option => out.push(Patch::text(id, loc.text)),
                t if t.is_text_control() => {}
                _ => match loc.kind {
                    EntryKind::Markup => out.push(Patch::markup(id, loc.text)),
                    EntryKind::Text   => out.push(Patch::text(id, loc.text)),
                },
            }
        }

        for id in doc.with_attr(ATTR_I18N_PLACEHOLDER) {
            let Some(key) = doc.attr(id, ATTR_I18N_PLACEHOLDER) else { continue };
            if let Some(loc) = self.table.lookup(key, code) {
                out.push(Patch::attr(id, "placeholder", loc.text));
            }
        }

        if let Some(btn) = doc.by_id(LANG_BTN_ID) {
            let label = self.table
                .lookup("langToggle", code)
                .map(|l| l.text)
                .unwrap_or(if code == "ar" { "English" } else { "العربية" });
            out.push(Patch::text(btn, label));
        }

        if let Some(year) = doc.by_id(YEAR_ID) {
            out.push(Patch::text(year, self.year.to_string()));
        }

        log::debug!("[sync] apply {code}: {} patches", out.len());
        out
    }

    /// Switch to the other language, persist it and scroll to the top.
    pub fn toggle(&mut self, doc: &Document, store: &mut dyn KeyValueStore) -> Vec<Patch> {
        let current = doc.by_id(SITE_ID)
            .and_then(|site| doc.attr(site, ATTR_LANG))
            .unwrap_or("ar");
        let next = Lang::from_code(current).map_or(Lang::Ar, Lang::other);
        store::persist(store, store::KEY_SITE_LANG, next.code());

        let mut out = self.apply_language(doc, next.code());
        out.push(Patch::ScrollTo { top: 0.0 });
        log::info!("language switched {current} -> {}", next.code());
        out
    }

    /// First render at startup: persisted language, else `default`.
    pub fn bootstrap(&mut self, doc: &Document, store: &dyn KeyValueStore, default: Lang) -> Vec<Patch> {
        let code = store.get(store::KEY_SITE_LANG)
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| default.code().to_string());
        log::debug!("[sync] bootstrap with {code}");
        self.apply_language(doc, &code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Element;
    use crate::store::MemoryStore;

    struct Page {
        doc:   Document,
        title: crate::dom::ElementId,
        addr:  crate::dom::ElementId,
        opt:   crate::dom::ElementId,
        input: crate::dom::ElementId,
        area:  crate::dom::ElementId,
        btn:   crate::dom::ElementId,
    }

    fn page() -> Page {
        let mut doc = Document::new("index.html");
        let body  = doc.body();
        let site  = doc.append(body, Element::new(Tag::Div).id(SITE_ID));
        let title = doc.append(site, Element::new(Tag::H1).i18n("heroTitle").text("placeholder"));
        let addr  = doc.append(site, Element::new(Tag::P).i18n("address"));
        let sel   = doc.append(site, Element::new(Tag::Select).id("clientType"));
        let opt   = doc.append(sel, Element::new(Tag::Option).attr("value", "").i18n("optionChoose"));
        let input = doc.append(site, Element::new(Tag::Input).id("contactName")
            .i18n("labelContactName").attr("data-i18n-placeholder", "labelContactName"));
        let area  = doc.append(site, Element::new(Tag::Textarea).id("notes").i18n("labelNotes"));
        let btn   = doc.append(site, Element::new(Tag::Button).id(LANG_BTN_ID));
        doc.append(site, Element::new(Tag::P).i18n("noSuchKey").text("kept"));
        Page { doc, title, addr, opt, input, area, btn }
    }

    fn sync() -> LanguageSync { LanguageSync::new(TranslationTable::global(), 2030) }

    fn render(p: &mut Page, s: &mut LanguageSync, code: &str) {
        let patches = s.apply_language(&p.doc, code);
        p.doc.apply(patches);
    }

    #[test]
    fn direction_follows_language() {
        let mut p = page();
        let mut s = sync();
        render(&mut p, &mut s, "ar");
        assert_eq!(p.doc.dir, Dir::Rtl);
        assert_eq!(p.doc.lang, "ar");
        render(&mut p, &mut s, "en");
        assert_eq!(p.doc.dir, Dir::Ltr);
        let site = p.doc.by_id(SITE_ID).unwrap();
        assert_eq!(p.doc.attr(site, "dir"), Some("ltr"));
        assert_eq!(p.doc.attr(site, ATTR_LANG), Some("en"));
    }

    #[test]
    fn rendering_twice_is_idempotent() {
        for code in ["ar", "en"] {
            let mut p = page();
            let mut s = sync();
            render(&mut p, &mut s, code);
            let first: Vec<String> = p.doc.iter().map(|(_, e)| e.inner_html().to_string()).collect();
            render(&mut p, &mut s, code);
            let second: Vec<String> = p.doc.iter().map(|(_, e)| e.inner_html().to_string()).collect();
            assert_eq!(first, second, "{code}");
        }
    }

    #[test]
    fn controls_keep_user_content() {
        let mut p = page();
        p.doc.apply([Patch::value(p.input, "typed"), Patch::value(p.area, "notes")]);
        let mut s = sync();
        render(&mut p, &mut s, "en");
        render(&mut p, &mut s, "ar");
        assert_eq!(p.doc.value(p.input), Some("typed"));
        assert_eq!(p.doc.value(p.area), Some("notes"));
        assert_eq!(p.doc.get(p.input).unwrap().inner_html(), "");
        assert_eq!(p.doc.attr(p.input, "placeholder"), Some("اسم جهة الاتصال (المُرسِل)"));
    }

    #[test]
    fn markup_entries_keep_their_anchors() {
        let mut p = page();
        let mut s = sync();
        render(&mut p, &mut s, "en");
        let html = p.doc.get(p.addr).unwrap().inner_html().to_string();
        assert!(html.contains("<a href=\"https://g.co/kgs/UBNLNpj\""));
        assert_eq!(p.doc.get(p.opt).unwrap().text_content(), "--- Choose ---");
        assert_eq!(p.doc.get(p.title).unwrap().text_content(), "Foodstuff Packaging and Trading Products");
    }

    #[test]
    fn unsupported_code_leaves_content_alone() {
        let mut p = page();
        let mut s = sync();
        render(&mut p, &mut s, "en");
        render(&mut p, &mut s, "fr");
        assert_eq!(p.doc.get(p.title).unwrap().text_content(), "Foodstuff Packaging and Trading Products");
        assert_eq!(p.doc.get(p.btn).unwrap().text_content(), "العربية");
        assert_eq!(p.doc.dir, Dir::Ltr);
        assert_eq!(s.active(), "fr");
        assert_eq!(s.active_lang(), Lang::Ar);
    }

    #[test]
    fn missing_keys_are_skipped() {
        let mut p = page();
        let mut s = sync();
        render(&mut p, &mut s, "en");
        let kept = p.doc.with_attr_value(ATTR_I18N, "noSuchKey")[0];
        assert_eq!(p.doc.get(kept).unwrap().text_content(), "kept");
    }

    #[test]
    fn double_toggle_restores_label_and_direction() {
        let mut p = page();
        let mut s = sync();
        let mut st = MemoryStore::new();
        let boot = s.bootstrap(&p.doc, &st, Lang::Ar);
        p.doc.apply(boot);
        let label0 = p.doc.get(p.btn).unwrap().text_content();
        let dir0   = p.doc.dir;
        assert_eq!(label0, "English");

        let t1 = s.toggle(&p.doc, &mut st);
        assert_eq!(t1.last(), Some(&Patch::ScrollTo { top: 0.0 }));
        p.doc.apply(t1);
        assert_eq!(p.doc.get(p.btn).unwrap().text_content(), "العربية");
        assert_eq!(st.get(store::KEY_SITE_LANG).as_deref(), Some("en"));

        let t2 = s.toggle(&p.doc, &mut st);
        p.doc.apply(t2);
        assert_eq!(p.doc.get(p.btn).unwrap().text_content(), label0);
        assert_eq!(p.doc.dir, dir0);
        assert_eq!(st.get(store::KEY_SITE_LANG).as_deref(), Some("ar"));
    }

    #[test]
    fn toggle_from_unsupported_code_goes_to_arabic() {
        let mut p = page();
        let mut s = sync();
        let mut st = MemoryStore::new();
        render(&mut p, &mut s, "fr");
        let t = s.toggle(&p.doc, &mut st);
        p.doc.apply(t);
        assert_eq!(st.get(store::KEY_SITE_LANG).as_deref(), Some("ar"));
        assert_eq!(p.doc.dir, Dir::Rtl);
    }

    #[test]
    fn bootstrap_prefers_the_persisted_language() {
        let mut p = page();
        let mut s = sync();
        let mut st = MemoryStore::new();
        st.set(store::KEY_SITE_LANG, "en").unwrap();
        let boot = s.bootstrap(&p.doc, &st, Lang::Ar);
        p.doc.apply(boot);
        assert_eq!(p.doc.lang, "en");
        assert_eq!(s.active_lang(), Lang::En);
    }

    #[test]
    fn no_site_container_means_no_patches() {
        let doc = Document::new("index.html");
        let mut s = sync();
        assert!(s.apply_language(&doc, "en").is_empty());
        assert_eq!(s.active(), "en");
    }

    #[test]
    fn year_is_restamped() {
        let mut p = page();
        let site = p.doc.by_id(SITE_ID).unwrap();
        let year = p.doc.append(site, Element::new(Tag::Span).id(YEAR_ID).text("2025"));
        let mut s = sync();
        render(&mut p, &mut s, "ar");
        assert_eq!(p.doc.get(year).unwrap().text_content(), "2030");
    }
}
