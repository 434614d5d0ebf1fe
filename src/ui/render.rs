use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::rows::{project_rows, COLUMNS, EMPTY_PLACEHOLDER};
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, ROW_STRIPE, STATUS_ERROR,
};
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Row, Table, Wrap};
use ratatui::Frame;

const COLUMN_WIDTHS: [Constraint; 5] = [
    Constraint::Length(6),
    Constraint::Percentage(30),
    Constraint::Min(20),
    Constraint::Length(10),
    Constraint::Length(14),
];

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app), header);
    frame.render_widget(Clear, body);
    draw_table(frame, app, body);
    frame.render_widget(Footer::new().widget(app, footer), footer);

    if let Some(notification) = app.notification() {
        let lines = vec![
            Line::from(Span::styled(
                notification.summary.clone(),
                Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                notification.details.clone(),
                Style::default().fg(HEADER_TEXT),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press any key to continue",
                Style::default().fg(MUTED_TEXT),
            )),
        ];
        let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
        let popup_width = content_width.saturating_add(4).clamp(40, 80);
        let popup_height = (lines.len() as u16).saturating_add(4);
        let popup_area = centered_rect_by_size(body, popup_width, popup_height);

        frame.render_widget(Clear, popup_area);
        let block = Block::default()
            .title(Span::styled("Error", Style::default().fg(STATUS_ERROR)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER));
        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
            popup_area,
        );
    }
}

fn draw_table(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let header = Row::new(COLUMNS).style(header_style);

    let rows = project_rows(app.table().current_rows());
    let empty = rows.is_empty();
    let table_rows: Vec<Row> = rows
        .into_iter()
        .enumerate()
        .map(|(idx, row)| {
            let style = if idx % 2 == 1 {
                Style::default().fg(HEADER_TEXT).bg(ROW_STRIPE)
            } else {
                Style::default().fg(HEADER_TEXT)
            };
            Row::new([row.id, row.image, row.title, row.price, row.category]).style(style)
        })
        .collect();

    frame.render_widget(
        Table::new(table_rows, COLUMN_WIDTHS)
            .header(header)
            .column_spacing(1),
        inner,
    );

    // Placeholder spans every column under the header.
    if empty && inner.height > 1 {
        let message = if app.table().is_loading() {
            "Loading products..."
        } else {
            EMPTY_PLACEHOLDER
        };
        let placeholder = Rect {
            y: inner.y + 1,
            height: 1,
            ..inner
        };
        frame.render_widget(
            Paragraph::new(message)
                .alignment(Alignment::Center)
                .style(Style::default().fg(MUTED_TEXT)),
            placeholder,
        );
    }
}
