// src/lib.rs  -  eauf-site library: page model, language sync, forms, effects
pub mod config;
pub mod dom;
pub mod features;
pub mod forms;
pub mod i18n;
pub mod pages;
pub mod preview;
pub mod query;
pub mod site;
pub mod store;
pub mod sync;
pub mod timers;

pub use site::{Settings, Site};
