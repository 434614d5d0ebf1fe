use crate::table::{SortDirection, SortField};
use crate::ui::app::App;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = "/: Search │ ←/→: Page │ [/]: Rows │ 1-4: Sort │ 0: Unsort │ q: Quit";

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App, area: Rect) -> Paragraph<'static> {
        let info = app.page_info();
        let query = &app.table().query;

        let enabled = Style::default().fg(ACCENT);
        let disabled = Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM);
        let text_style = Style::default().fg(HEADER_TEXT);
        let hint_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let sort = match query.sort {
            None => "none".to_string(),
            Some(key) => {
                let field = match key.field {
                    SortField::Price => "price",
                    SortField::Title => "title",
                };
                let arrow = match key.direction {
                    SortDirection::Ascending => "↑",
                    SortDirection::Descending => "↓",
                };
                format!("{} {}", field, arrow)
            }
        };

        let mut spans = vec![
            Span::styled(
                " ‹ Prev ",
                if info.prev_disabled() { disabled } else { enabled },
            ),
            Span::styled(info.to_string(), text_style),
            Span::styled(
                " Next › ",
                if info.next_disabled() { disabled } else { enabled },
            ),
            Span::styled(
                format!("│ Rows: {} │ Sort: {} │ ", query.page_size, sort),
                text_style,
            ),
        ];

        let used: usize = spans.iter().map(|span| span.content.chars().count()).sum();
        let version = format!("v{} ", VERSION);
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let remaining = content_width.saturating_sub(used);
        if remaining >= HINTS.chars().count() + version.chars().count() {
            let padding = remaining - HINTS.chars().count() - version.chars().count();
            spans.push(Span::styled(HINTS, hint_style));
            spans.push(Span::styled(" ".repeat(padding), hint_style));
            spans.push(Span::styled(version, hint_style));
        }

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
