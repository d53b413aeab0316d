//! Blocking close dialog.

use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::theme::{COLOR_DIALOG_BORDER, COLOR_DIM, COLOR_HEADER};
use crate::close::CloseNotice;

/// Rectangle of `width` x `height` centered in `area`, clipped to it.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

pub fn render_close_dialog(frame: &mut Frame, notice: &CloseNotice) {
    let text = notice.alert_text();
    let width = (text.chars().count() as u16).saturating_add(6).max(32);
    let area = centered_rect(frame.area(), width, 6);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_DIALOG_BORDER))
        .title(" Connection closed ");

    let lines = vec![
        Line::from(""),
        Line::styled(
            text,
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled("Press any key", Style::default().fg(COLOR_DIM)),
    ];

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}
