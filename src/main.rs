// src/main.rs  -  eauf-site  entry point
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use eauf_site::config::{self, AppConfig, Cli};
use eauf_site::i18n::TranslationTable;
use eauf_site::preview::View;
use eauf_site::store::{self, FileStore, KeyValueStore, MemoryStore};
use eauf_site::{pages, Site};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // ── --print-config  ───────────────────────────────────────────────────────
    if cli.print_config {
        print!("{}", config::DEFAULT_CONFIG_TOML);
        return Ok(());
    }

    // ── --write-config  ───────────────────────────────────────────────────────
    if cli.write_config {
        let path = AppConfig::write_default_config(&cli)?;
        println!("Config written to: {}", path.display());
        println!("Edit it to set the default language, page and effect timings.");
        return Ok(());
    }

    // ── Load config ───────────────────────────────────────────────────────────
    let cfg = AppConfig::load(&cli)?;
    let mut doc = cfg.page.build(&cfg.location());
    doc.viewport_width = cfg.viewport_width;

    // ── --check-translations  ─────────────────────────────────────────────────
    if cli.check_translations {
        let table = TranslationTable::global();
        let missing: Vec<String> = pages::translation_keys(&doc)
            .into_iter()
            .map(|(_, key)| key)
            .filter(|key| !table.contains(key))
            .collect();
        if missing.is_empty() {
            println!("{}: all keys translated ({} entries in table)", doc.location, table.len());
        } else {
            println!("{}: {} key(s) missing from the table:", doc.location, missing.len());
            for k in &missing { println!("  {k}"); }
        }
        std::process::exit(if missing.is_empty() { 0 } else { 1 });
    }

    // ── Store ─────────────────────────────────────────────────────────────────
    let mut kv: Box<dyn KeyValueStore> = if cfg.persist {
        let fs = FileStore::open(&cfg.store_path)
            .with_context(|| format!("Opening store {:?}", cfg.store_path))?;
        log::info!("store: {}", fs.path().display());
        Box::new(fs)
    } else {
        Box::new(MemoryStore::new())
    };
    if let Some(lang) = cfg.force_lang {
        store::persist(&mut *kv, store::KEY_SITE_LANG, lang.code());
    }

    // ── Site ──────────────────────────────────────────────────────────────────
    let mut site = Site::boot(doc, kv, cfg.settings());

    if cli.dump {
        print!("{}", View::capture(&site).render_text(80));
        return Ok(());
    }

    run(&mut site)
}

#[cfg(feature = "tui")]
fn run(site: &mut Site) -> Result<()> {
    use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
    use eauf_site::preview::{self, Action};
    use std::thread;
    use std::time::{Duration, Instant};

    let mut tui = tui::Tui::new()?;
    let start = Instant::now();
    let tick = Duration::from_millis(30);

    'main: loop {
        // ── Single crossterm event reader ─────────────────────────────────────
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(k) = event::read()? {
                if k.kind == KeyEventKind::Release { continue; }
                if k.code == KeyCode::Char('c') && k.modifiers.contains(KeyModifiers::CONTROL) {
                    break 'main;
                }
                let action = match k.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') => break 'main,
                    KeyCode::Char('l') => Action::ToggleLang,
                    KeyCode::Char('n') => Action::ToggleNav,
                    KeyCode::Char('t') => Action::NextTab,
                    KeyCode::Char('b') => Action::BackToTop,
                    KeyCode::Down      => Action::ScrollDown,
                    KeyCode::Up        => Action::ScrollUp,
                    KeyCode::Esc       => Action::Escape,
                    _ => continue,
                };
                if !preview::perform(site, action) {
                    break 'main;
                }
            }
        }

        // Deferred effects (alert dismissal, logo float) run on wall-clock time.
        site.advance(start.elapsed());

        let view = View::capture(site);
        if let Err(e) = tui.draw(&view) {
            tui.cleanup();
            return Err(e);
        }
        thread::sleep(tick);
    }

    // ── Cleanup ───────────────────────────────────────────────────────────────
    tui.cleanup();
    println!("\nمع السلامة / Goodbye from eauf-site.\n");
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run(site: &mut Site) -> Result<()> {
    // No terminal UI: let the load-time effects settle and print the page once.
    let mut tui = tui::Tui::new()?;
    site.advance(site.settings().logo_float_delay);
    tui.draw(&View::capture(site))?;
    tui.cleanup();
    Ok(())
}
