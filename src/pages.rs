// src/pages.rs  -  The two site pages as in-memory documents
//
// Mirrors the markup the scripts run against: same ids, classes and data-*
// attributes. Vertical offsets are rough layout positions used for scrolling.
use crate::dom::{Document, Element, ElementId, Patch, Tag};
use crate::features::{decor, nav, products, scroll, tabs};
use crate::sync::{ATTR_I18N_PLACEHOLDER, ATTR_LANG, LANG_BTN_ID, SITE_ID, YEAR_ID};

/// Which page to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    #[default]
    Home,
    Contact,
}

impl PageKind {
    pub fn default_location(self) -> &'static str {
        match self {
            PageKind::Home    => "index.html",
            PageKind::Contact => products::CONTACT_PAGE,
        }
    }

    pub fn build(self, location: &str) -> Document {
        match self {
            PageKind::Home    => home(location),
            PageKind::Contact => contact(location),
        }
    }
}

// Product cards: (display name used in request links, name key, description key)
const PRODUCTS: [(&str, &str, &str); 4] = [
    ("ملح فلو",      "product_flow",  "desc_flow"),
    ("ملح روزابيلا", "product_ros",   "desc_ros"),
    ("خل فرست",      "product_first", "desc_first"),
    ("خل أويس",      "product_oweis", "desc_oweis"),
];

fn el(tag: Tag) -> Element { Element::new(tag) }

fn i18n(tag: Tag, key: &str) -> Element { Element::new(tag).i18n(key) }

fn option(value: &str, key: Option<&str>, text: &str) -> Element {
    let o = el(Tag::Option).attr("value", value).text(text);
    match key {
        Some(k) => o.i18n(k),
        None    => o,
    }
}

/// `<body>` + `#site` wrapper + shared header. Returns the document, the site
/// container and the page's `<main>`.
fn skeleton(location: &str, title_key: &str, on_contact: bool) -> (Document, ElementId, ElementId) {
    let mut d = Document::new(location);
    let body = d.body();
    let site = d.append(body, el(Tag::Div).id(SITE_ID).attr(ATTR_LANG, "ar"));
    d.append(site, i18n(Tag::Title, title_key));

    // Same-page fragments on the home page; absolute links from the contact page.
    let base = if on_contact { "index.html" } else { "" };

    let header = d.append(site, el(Tag::Header).class("site-header"));
    d.append(header, el(Tag::Img).id(decor::LOGO_ID).attr("src", "images/logo.png").attr("alt", "logo"));
    d.append(header, i18n(Tag::Span, "brandNameAR").class("brand"));
    d.append(header, el(Tag::Button).id(nav::NAV_TOGGLE_ID).attr("aria-expanded", "false").text("☰"));
    let nav_el = d.append(header, el(Tag::Nav).id(nav::MAIN_NAV_ID));
    let list = d.append(nav_el, el(Tag::Ul).class("nav-list"));

    let li = d.append(list, el(Tag::Li));
    d.append(li, i18n(Tag::A, "home").id("navHome").attr("href", &format!("{base}#home")));
    let li = d.append(list, el(Tag::Li));
    d.append(li, i18n(Tag::A, "about").id("navAbout").attr("href", &format!("{base}#about")));

    let menu = d.append(list, el(Tag::Li).id(nav::PRODUCTS_MENU_ID).class("dropdown"));
    d.append(menu, i18n(Tag::A, "products").id("navProducts").attr("href", &format!("{base}#products")));
    let dropdown = d.append(menu, el(Tag::Ul).class("dropdown-menu"));
    for (_, key, _) in PRODUCTS {
        let li = d.append(dropdown, el(Tag::Li));
        d.append(li, i18n(Tag::A, key).attr("href", &format!("{base}#products")));
    }

    let li = d.append(list, el(Tag::Li));
    d.append(li, i18n(Tag::A, "quality").id("navQuality").attr("href", &format!("{base}#quality")));
    let li = d.append(list, el(Tag::Li));
    d.append(li, i18n(Tag::A, "contact").id("navContact").attr("href", products::CONTACT_PAGE));

    d.append(header, el(Tag::Button).id(LANG_BTN_ID).class("lang-btn").text("English"));

    let main = d.append(site, el(Tag::Main));
    (d, site, main)
}

fn footer(d: &mut Document, site: ElementId, at: f64) {
    let f = d.append(site, el(Tag::Footer).at(at));
    let p = d.append(f, el(Tag::P));
    d.append(p, i18n(Tag::Span, "footerCopy"));
    d.append(p, el(Tag::Span).id(YEAR_ID));
    d.append(p, i18n(Tag::Span, "brandNameAR").class("footer-brand"));
    let social = d.append(f, el(Tag::Div).class("social"));
    d.append(social, i18n(Tag::A, "facebook").attr("href", "https://www.facebook.com/"));
    d.append(social, i18n(Tag::A, "instagram").attr("href", "https://www.instagram.com/"));
    d.append(site, i18n(Tag::Button, "backTop").id(scroll::BACK_TOP_ID).class("back-top"));
}

pub fn home(location: &str) -> Document {
    let (mut d, site, main) = skeleton(location, "pageTitle", false);

    let hero = d.append(main, el(Tag::Section).id("home").class("hero"));
    d.append(hero, el(Tag::Div).class(scroll::HERO_WAVE_CLASS));
    d.append(hero, i18n(Tag::H2, "statementTitle"));
    d.append(hero, i18n(Tag::P, "statementSubtitle"));
    d.append(hero, i18n(Tag::H1, "heroTitle"));
    d.append(hero, i18n(Tag::P, "heroSubtitle"));
    d.append(hero, i18n(Tag::A, "explore").id("heroExplore").class("btn").attr("href", "#products"));
    d.append(hero, i18n(Tag::A, "request").id("heroRequest").class("btn")
        .attr("href", "contact.html?type=wholesale"));
    let card = d.append(hero, el(Tag::Div).class("hero-card"));
    d.append(card, i18n(Tag::H3, "cardTitle"));
    d.append(card, i18n(Tag::P, "cardText"));
    d.append(card, i18n(Tag::A, "orderNow").class("btn").attr("href", products::CONTACT_PAGE));

    let about = d.append(main, el(Tag::Section).id("about").attr(scroll::REVEAL_ATTR, "fade-up").at(640.0));
    d.append(about, i18n(Tag::H2, "aboutTitle"));
    d.append(about, i18n(Tag::P, "aboutText"));

    let prods = d.append(main, el(Tag::Section).id("products").attr(scroll::REVEAL_ATTR, "fade-up").at(1400.0));
    d.append(prods, i18n(Tag::H2, "productsTitle"));
    d.append(prods, i18n(Tag::P, "productsSubtitle"));
    for (i, (name, key, desc)) in PRODUCTS.into_iter().enumerate() {
        let card = d.append(prods, el(Tag::Div).class("product-card").attr(scroll::REVEAL_ATTR, "zoom")
            .at(1500.0 + 120.0 * i as f64));
        d.append(card, el(Tag::Img).attr("src", &format!("images/{key}.jpg")).attr("alt", name));
        d.append(card, i18n(Tag::H3, key));
        d.append(card, i18n(Tag::P, desc));
        if key == "product_flow" {
            d.append(card, i18n(Tag::Small, "weight_flow"));
        }
        d.append(card, i18n(Tag::Button, "orderNow").id(&format!("req_{key}"))
            .attr("data-action", "request").attr("data-name", name));
    }

    let quality = d.append(main, el(Tag::Section).id("quality").attr(scroll::REVEAL_ATTR, "fade-up").at(2200.0));
    d.append(quality, i18n(Tag::H2, "qualityTitle"));

    let gallery = d.append(main, el(Tag::Section).id("gallery").attr(scroll::REVEAL_ATTR, "fade-up").at(2900.0));
    d.append(gallery, i18n(Tag::H2, "galleryTitle"));
    d.append(gallery, i18n(Tag::P, "gallerySubtitle"));

    footer(&mut d, site, 3600.0);
    d
}

pub fn contact(location: &str) -> Document {
    let (mut d, site, main) = skeleton(location, "pageTitleContact", true);
    // Contact behaviour is keyed off the body class.
    d.apply([Patch::add_class(d.body(), tabs::CONTACT_PAGE_CLASS)]);

    let info = d.append(main, el(Tag::Section).id("quickInfo").class("quick-info"));
    d.append(info, i18n(Tag::H3, "quickInfoTitle"));
    for key in ["address", "phoneLandline", "phoneMobile", "websiteLink", "facebookLink"] {
        d.append(info, i18n(Tag::P, key));
    }
    d.append(info, i18n(Tag::Span, "location"));

    let section = d.append(main, el(Tag::Section).id("contact").at(500.0));
    let tabs_el = d.append(section, el(Tag::Div).class("form-tabs"));
    d.append(tabs_el, i18n(Tag::Button, "tabWholesale").id("tabWholesaleBtn").class("tab-btn")
        .attr("data-tab", tabs::TAB_WHOLESALE));
    d.append(tabs_el, i18n(Tag::Button, "tabFeedback").id("tabFeedbackBtn").class("tab-btn")
        .attr("data-tab", tabs::TAB_FEEDBACK));

    wholesale_form(&mut d, section);
    feedback_form(&mut d, section);

    footer(&mut d, site, 1800.0);
    d
}

fn wholesale_form(d: &mut Document, parent: ElementId) {
    let form = d.append(parent, el(Tag::Form).id("wholesaleForm").class("form")
        .attr("data-form-type", tabs::TAB_WHOLESALE));
    d.append(form, i18n(Tag::H3, "formWholesaleTitle"));

    d.append(form, i18n(Tag::Label, "labelClientType").attr("for", "clientType"));
    let client = d.append(form, el(Tag::Select).id("clientType"));
    for (value, key) in [
        ("", "optionChoose"),
        ("retailer", "optionRetailer"),
        ("distributor", "optionDistributor"),
        ("company", "optionCompany"),
        ("other", "optionOther"),
    ] {
        d.append(client, option(value, Some(key), ""));
    }

    d.append(form, i18n(Tag::Label, "labelProduct").attr("for", "productSelect"));
    let product = d.append(form, el(Tag::Select).id("productSelect"));
    d.append(product, option("", Some("optionChooseProduct"), ""));
    for (_, key, _) in PRODUCTS {
        d.append(product, option(key, Some(key), ""));
    }

    for (id, label, tag) in [
        ("quantity",    "labelQuantity",    Tag::Input),
        ("companyName", "labelCompanyName", Tag::Input),
        ("contactName", "labelContactName", Tag::Input),
        ("email",       "labelEmail",       Tag::Input),
        ("phone",       "labelPhone",       Tag::Input),
    ] {
        d.append(form, i18n(Tag::Label, label).attr("for", id));
        d.append(form, el(tag).id(id).attr(ATTR_I18N_PLACEHOLDER, label));
    }
    d.append(form, i18n(Tag::Label, "labelNotes").attr("for", "notes"));
    d.append(form, el(Tag::Textarea).id("notes").attr(ATTR_I18N_PLACEHOLDER, "labelNotes"));

    d.append(form, i18n(Tag::Button, "btnSendQuote").attr("type", "submit"));
    d.append(form, el(Tag::Div).id("formAlertWholesale").class("form-alert"));
}

fn feedback_form(d: &mut Document, parent: ElementId) {
    let form = d.append(parent, el(Tag::Form).id("feedbackForm").class("form").class("hidden")
        .attr("data-form-type", tabs::TAB_FEEDBACK));

    let kind = d.append(form, el(Tag::Select).id("feedbackType"));
    d.append(kind, option("", Some("optionChoose"), ""));
    for (value, text) in [("complaint", "Complaint"), ("inquiry", "Inquiry"), ("suggestion", "Suggestion")] {
        d.append(kind, option(value, None, text));
    }

    d.append(form, i18n(Tag::Label, "labelProduct").attr("for", "productReference"));
    d.append(form, el(Tag::Input).id("productReference"));
    d.append(form, el(Tag::Textarea).id("details"));
    d.append(form, i18n(Tag::Label, "labelContactName").attr("for", "feedbackName"));
    d.append(form, el(Tag::Input).id("feedbackName"));
    d.append(form, i18n(Tag::Label, "labelEmail").attr("for", "feedbackEmail"));
    d.append(form, el(Tag::Input).id("feedbackEmail").attr(ATTR_I18N_PLACEHOLDER, "labelEmail"));
    d.append(form, i18n(Tag::Label, "labelPhone").attr("for", "feedbackPhone"));
    d.append(form, el(Tag::Input).id("feedbackPhone"));

    d.append(form, el(Tag::Button).attr("type", "submit").text("Send"));
    d.append(form, el(Tag::Div).id("formAlertFeedback").class("form-alert"));
}

/// Every `data-i18n` / `data-i18n-placeholder` key on the page.
pub fn translation_keys(doc: &Document) -> Vec<(ElementId, String)> {
    doc.iter()
        .flat_map(|(id, e)| {
            [crate::sync::ATTR_I18N, ATTR_I18N_PLACEHOLDER]
                .into_iter()
                .filter_map(move |a| e.get_attr(a).map(|k| (id, k.to_string())))
        })
        .collect()
}
