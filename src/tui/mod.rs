// src/tui/mod.rs  -  ratatui page preview
#[cfg(feature = "tui")]
mod inner;
#[cfg(feature = "tui")]
pub use inner::Tui;

#[cfg(not(feature = "tui"))]
pub struct Tui;
#[cfg(not(feature = "tui"))]
impl Tui {
    pub fn new() -> anyhow::Result<Self> { Ok(Self) }
    pub fn draw(&mut self, view: &eauf_site::preview::View) -> anyhow::Result<()> {
        print!("{}", view.render_text(80));
        Ok(())
    }
    pub fn cleanup(&mut self) {}
}
