// src/config.rs  -  Runtime configuration (CLI + TOML)
use crate::i18n::Lang;
use crate::pages::PageKind;
use crate::site::Settings;
use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// The example config is embedded directly in the binary at compile time.
/// Users can write it out with:  eauf-site --write-config
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../config.toml.example");

// ── CLI ───────────────────────────────────────────────────────────────────────
#[derive(Parser, Debug, Default)]
#[command(
    name        = "eauf-site",
    about       = "Egyptian Arab United Foundation site  |  interactive preview",
    version,
)]
pub struct Cli {
    /// Config file path (default: ~/.config/eauf-site/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Page to open: home | contact
    #[arg(long)]
    pub page: Option<PageKind>,

    /// Query string for the page (e.g. "type=feedback&product=product_ros")
    #[arg(long)]
    pub query: Option<String>,

    /// Force the language (ar | en) and persist it like the toggle does
    #[arg(long)]
    pub lang: Option<Lang>,

    /// Key/value store file (default: ~/.config/eauf-site/store.toml)
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// Keep the store in memory only; nothing is written to disk
    #[arg(long, action)]
    pub no_persist: bool,

    /// Viewport width in CSS pixels (narrow widths enable the dropdown toggle)
    #[arg(long)]
    pub width: Option<u32>,

    /// Footer year (default: current year)
    #[arg(long)]
    pub year: Option<i32>,

    /// Report data-i18n keys on the page that the dictionary lacks, then exit
    #[arg(long, action)]
    pub check_translations: bool,

    /// Print the rendered page once and exit (no terminal UI)
    #[arg(long, action)]
    pub dump: bool,

    /// Write the built-in default config.toml to the config path and exit.
    /// Use --config <PATH> to write to a custom location.
    #[arg(long, action)]
    pub write_config: bool,

    /// Print the built-in default config.toml to stdout and exit
    #[arg(long, action)]
    pub print_config: bool,
}

// ── TOML file structure ───────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    pub site:    Option<SiteCfg>,
    pub effects: Option<EffectsCfg>,
    pub forms:   Option<FormsCfg>,
    pub store:   Option<StoreCfg>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteCfg {
    pub default_lang:   Option<Lang>,
    pub page:           Option<PageKind>,
    pub query:          Option<String>,
    pub viewport_width: Option<u32>,
    pub year:           Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectsCfg {
    pub logo_float_ms:       Option<u64>,
    pub reveal_threshold:    Option<f64>,
    pub dropdown_breakpoint: Option<u32>,
    pub back_to_top_after:   Option<f64>,
    pub parallax_factor:     Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormsCfg {
    /// How long a form alert stays visible (ms)
    pub alert_dismiss_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreCfg {
    pub path:    Option<PathBuf>,
    pub persist: Option<bool>,
}

// ── Resolved / merged config ──────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub default_lang:        Lang,
    /// Language forced from the command line
    pub force_lang:          Option<Lang>,
    pub page:                PageKind,
    pub query:               String,
    pub viewport_width:      u32,
    /// `None` stamps the current year
    pub year:                Option<i32>,
    pub alert_dismiss_ms:    u64,
    pub logo_float_ms:       u64,
    pub reveal_threshold:    f64,
    pub dropdown_breakpoint: u32,
    pub back_to_top_after:   f64,
    pub parallax_factor:     f64,
    pub store_path:          PathBuf,
    pub persist:             bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_lang:        Lang::Ar,
            force_lang:          None,
            page:                PageKind::Home,
            query:               String::new(),
            viewport_width:      1280,
            year:                None,
            alert_dismiss_ms:    8000,
            logo_float_ms:       1000,
            reveal_threshold:    0.15,
            dropdown_breakpoint: 820,
            back_to_top_after:   500.0,
            parallax_factor:     -0.05,
            store_path:          default_store_path(),
            persist:             true,
        }
    }
}

// ── Config loader ─────────────────────────────────────────────────────────────
impl AppConfig {
    /// Write the embedded default config to disk.
    /// Returns the path it was written to.
    pub fn write_default_config(cli: &Cli) -> Result<PathBuf> {
        let path = cli.config.clone().unwrap_or_else(default_config_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Creating config directory {:?}", parent))?;
        }
        std::fs::write(&path, DEFAULT_CONFIG_TOML)
            .with_context(|| format!("Writing config to {:?}", path))?;
        Ok(path)
    }

    pub fn load(cli: &Cli) -> Result<Self> {
        let mut cfg = Self::default();

        // 1. Load TOML file
        let path = cli.config.clone().unwrap_or_else(default_config_path);
        if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Reading config {:?}", path))?;
            let fc: FileConfig = toml::from_str(&raw)
                .with_context(|| format!("Parsing config {:?}", path))?;
            cfg.apply_file(&fc);
        } else {
            log::warn!(
                "no config file at {} (run `eauf-site --write-config` to create one)",
                path.display()
            );
        }

        // 2. Apply CLI overrides
        cfg.apply_cli(cli);
        Ok(cfg)
    }

    fn apply_file(&mut self, fc: &FileConfig) {
        if let Some(s) = &fc.site {
            if let Some(v) = s.default_lang   { self.default_lang   = v; }
            if let Some(v) = s.page           { self.page           = v; }
            if let Some(v) = &s.query         { self.query          = v.clone(); }
            if let Some(v) = s.viewport_width { self.viewport_width = v; }
            if let Some(v) = s.year           { self.year           = Some(v); }
        }
        if let Some(e) = &fc.effects {
            if let Some(v) = e.logo_float_ms       { self.logo_float_ms       = v; }
            if let Some(v) = e.reveal_threshold    { self.reveal_threshold    = v; }
            if let Some(v) = e.dropdown_breakpoint { self.dropdown_breakpoint = v; }
            if let Some(v) = e.back_to_top_after   { self.back_to_top_after   = v; }
            if let Some(v) = e.parallax_factor     { self.parallax_factor     = v; }
        }
        if let Some(f) = &fc.forms {
            if let Some(v) = f.alert_dismiss_ms { self.alert_dismiss_ms = v; }
        }
        if let Some(st) = &fc.store {
            if let Some(v) = &st.path   { self.store_path = v.clone(); }
            if let Some(v) = st.persist { self.persist    = v; }
        }
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(v) = cli.page   { self.page           = v; }
        if let Some(v) = &cli.query { self.query          = v.clone(); }
        if let Some(v) = cli.lang   { self.force_lang     = Some(v); }
        if let Some(v) = &cli.store { self.store_path     = v.clone(); }
        if let Some(v) = cli.width  { self.viewport_width = v; }
        if let Some(v) = cli.year   { self.year           = Some(v); }
        if cli.no_persist           { self.persist        = false; }
    }

    /// Page location: `contact.html?type=feedback`, or just the page.
    pub fn location(&self) -> String {
        let page = self.page.default_location();
        match self.query.trim_start_matches('?') {
            "" => page.to_string(),
            q  => format!("{page}?{q}"),
        }
    }

    pub fn settings(&self) -> Settings {
        let defaults = Settings::default();
        Settings {
            default_lang:        self.default_lang,
            year:                self.year.unwrap_or(defaults.year),
            alert_dismiss:       Duration::from_millis(self.alert_dismiss_ms),
            logo_float_delay:    Duration::from_millis(self.logo_float_ms),
            reveal_threshold:    self.reveal_threshold,
            dropdown_breakpoint: self.dropdown_breakpoint,
            back_to_top_after:   self.back_to_top_after,
            parallax_factor:     self.parallax_factor,
        }
    }
}

fn default_config_path() -> PathBuf {
    dirs_next().join("eauf-site").join("config.toml")
}

fn default_store_path() -> PathBuf {
    dirs_next().join("eauf-site").join("store.toml")
}

fn dirs_next() -> PathBuf {
    if let Ok(v) = std::env::var("XDG_CONFIG_HOME") { return PathBuf::from(v); }
    if let Ok(v) = std::env::var("APPDATA")          { return PathBuf::from(v); }
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_default();
    PathBuf::from(home).join(".config")
}
