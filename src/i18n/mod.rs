// src/i18n/mod.rs  -  Bilingual (ar/en) string table
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// The closed set of languages the site ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Lang {
    #[default]
    Ar,
    En,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::Ar => "ar",
            Lang::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ar" => Some(Lang::Ar),
            "en" => Some(Lang::En),
            _    => None,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Lang::Ar => Lang::En,
            Lang::En => Lang::Ar,
        }
    }

    /// Name of the language in its own script
    pub fn native_name(self) -> &'static str {
        match self {
            Lang::Ar => "العربية",
            Lang::En => "English",
        }
    }
}

/// Text direction mirrored onto the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dir {
    #[default]
    Ltr,
    Rtl,
}

impl Dir {
    /// Right-to-left only for Arabic; every other code (known or not) is ltr.
    pub fn for_code(code: &str) -> Self {
        if code == "ar" { Dir::Rtl } else { Dir::Ltr }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Ltr => "ltr",
            Dir::Rtl => "rtl",
        }
    }
}

/// How a translated string may be rendered.
///
/// `Markup` entries are developer-authored and carry inline links; they are
/// the only strings ever injected unescaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Text,
    Markup,
}

#[derive(Debug, Clone, Copy)]
pub struct Entry {
    pub kind: EntryKind,
    pub ar:   &'static str,
    pub en:   &'static str,
}

impl Entry {
    pub fn get(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::Ar => self.ar,
            Lang::En => self.en,
        }
    }
}

/// One resolved lookup: the string plus how it may be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized {
    pub kind: EntryKind,
    pub text: &'static str,
}

// ── Helper macro ──────────────────────────────────────────────────────────────
macro_rules! translations {
    ($fn_name:ident, [ $( $k:literal => $kind:ident { ar: $ar:literal, en: $en:literal } ),* $(,)? ]) => {
        pub(super) fn $fn_name() -> std::collections::HashMap<&'static str, $crate::i18n::Entry> {
            let mut m = std::collections::HashMap::new();
            $( m.insert($k, $crate::i18n::Entry {
                kind: $crate::i18n::EntryKind::$kind,
                ar:   $ar,
                en:   $en,
            }); )*
            m
        }
    };
}

mod table;

/// Static key → entry dictionary. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct TranslationTable {
    entries: HashMap<&'static str, Entry>,
}

static GLOBAL: OnceLock<TranslationTable> = OnceLock::new();

impl TranslationTable {
    /// A fresh copy of the built-in dictionary.
    pub fn builtin() -> Self {
        Self { entries: table::site_entries() }
    }

    /// Process-wide shared instance of the built-in dictionary.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(Self::builtin)
    }

    pub fn entry(&self, key: &str) -> Option<&Entry> { self.entries.get(key) }

    pub fn contains(&self, key: &str) -> bool { self.entries.contains_key(key) }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Resolve `key` for a raw language code. Unknown keys and codes outside
    /// the supported set both resolve to `None`.
    pub fn lookup(&self, key: &str, code: &str) -> Option<Localized> {
        let lang  = Lang::from_code(code)?;
        let entry = self.entries.get(key)?;
        Some(Localized { kind: entry.kind, text: entry.get(lang) })
    }

    /// Plain string for a supported language.
    pub fn get(&self, key: &str, lang: Lang) -> Option<&'static str> {
        self.entries.get(key).map(|e| e.get(lang))
    }
}

/// Product cards link with their Arabic display name; the dropdown options
/// use dictionary keys. Unknown names pass through unchanged.
pub fn product_key(name: &str) -> &str {
    match name {
        "ملح فلو"      => "product_flow",
        "ملح روزابيلا" => "product_ros",
        "خل فرست"      => "product_first",
        "خل أويس"      => "product_oweis",
        other          => other,
    }
}
