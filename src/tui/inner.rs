// src/tui/inner.rs  -  ratatui layout
use anyhow::Result;
use crossterm::{execute, terminal::{self, EnterAlternateScreen, LeaveAlternateScreen}};
use eauf_site::i18n::Dir;
use eauf_site::preview::{AlertKind, View};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Terminal,
};
use std::io::stdout;

pub struct Tui {
    terminal: Terminal<CrosstermBackend<std::io::Stdout>>,
}

impl Tui {
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = stdout();
        execute!(out, EnterAlternateScreen)?;
        let backend  = CrosstermBackend::new(out);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }

    pub fn cleanup(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
    }

    pub fn draw(&mut self, v: &View) -> Result<()> {
        self.terminal.draw(|f| {
            let area = f.area();
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),  // header / location
                    Constraint::Min(8),     // page body
                    Constraint::Length(3),  // nav / tab / alert
                    Constraint::Length(1),  // key hints
                ])
                .split(area);

            // ── Header ────────────────────────────────────────────────────
            let header = Paragraph::new(format!(
                " {}  |  lang: {}  dir: {}  |  scroll: {:.0}px",
                v.location, v.lang, v.dir.as_str(), v.scroll_y
            ))
            .block(Block::default().borders(Borders::BOTTOM))
            .style(Style::default().fg(Color::Black).bg(Color::Cyan)
                   .add_modifier(Modifier::BOLD));
            f.render_widget(header, chunks[0]);

            // ── Page body ─────────────────────────────────────────────────
            let body: Vec<Line> = v.lines.iter()
                .skip(v.first_line())
                .map(|l| {
                    let style = if l.starts_with('[') {
                        Style::default().fg(Color::Yellow)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    Line::from(Span::styled(l.clone(), style))
                })
                .collect();
            let align = match v.dir { Dir::Rtl => Alignment::Right, Dir::Ltr => Alignment::Left };
            let page = Paragraph::new(body)
                .alignment(align)
                .block(Block::default()
                    .title(" PAGE ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Green)))
                .wrap(Wrap { trim: true });
            f.render_widget(page, chunks[1]);

            // ── Status ────────────────────────────────────────────────────
            let alert_style = match &v.alert {
                Some((AlertKind::Error, _))   => Style::default().fg(Color::Red),
                Some((AlertKind::Success, _)) => Style::default().fg(Color::Green),
                None                          => Style::default().fg(Color::DarkGray),
            };
            let status = Paragraph::new(Line::from(Span::styled(v.status_line(), alert_style)))
                .block(Block::default()
                    .title(" STATUS ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)));
            f.render_widget(status, chunks[2]);

            // ── Footer ────────────────────────────────────────────────────
            let footer = Paragraph::new(
                " l = language   n = menu   t = next tab   ↑/↓ = scroll   b = top   Esc = close/quit   q = quit"
            )
            .style(Style::default().fg(Color::DarkGray).bg(Color::Black));
            f.render_widget(footer, chunks[3]);
        })?;
        Ok(())
    }
}
