use crate::ui::app::{App, Focus};
use crate::ui::table::LoadStatus;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(MUTED_TEXT);
        let table = app.table();

        let status = match &table.load {
            LoadStatus::Loading => Span::styled(
                format!("{} Loading products", SPINNER[app.spinner_frame() % SPINNER.len()]),
                Style::default().fg(ACCENT),
            ),
            LoadStatus::Ready => Span::styled(
                format!("{} products, {} shown", table.store.len(), table.view.len()),
                Style::default().fg(STATUS_OK),
            ),
            LoadStatus::Failed { .. } => {
                Span::styled("Load failed", Style::default().fg(STATUS_ERROR))
            }
        };

        let searching = app.focus() == Focus::Search;
        let search_style = if searching {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            text_style
        };
        let cursor = if searching { "_" } else { "" };

        let line = Line::from(vec![
            Span::styled("  Products", text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            status,
            Span::styled("  │  ", separator_style),
            Span::styled("Search: ", text_style),
            Span::styled(format!("{}{}", app.search_input(), cursor), search_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
