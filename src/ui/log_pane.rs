//! Message log pane.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_JSON, COLOR_RAW};
use crate::message_log::{LogEntry, MessageLog};

/// Lines for one entry: header, body, separator.
fn entry_lines(entry: &LogEntry) -> Vec<Line<'_>> {
    let mut header = vec![
        Span::styled(
            format!("#{} ", entry.seq),
            Style::default().fg(COLOR_DIM).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            entry.received_at.format("%H:%M:%S%.3f").to_string(),
            Style::default().fg(COLOR_DIM),
        ),
    ];
    if !entry.is_json {
        header.push(Span::styled("  raw", Style::default().fg(COLOR_RAW)));
    }

    let body_style = Style::default().fg(if entry.is_json { COLOR_JSON } else { COLOR_RAW });

    let mut lines = vec![Line::from(header)];
    let mut body: Vec<Line> = entry
        .text
        .lines()
        .map(|l| Line::styled(l, body_style))
        .collect();
    if body.is_empty() {
        body.push(Line::from(""));
    }
    lines.extend(body);
    lines.push(Line::from(""));
    lines
}

/// All log lines, newest entry first.
pub fn log_lines(log: &MessageLog) -> Vec<Line<'_>> {
    log.entries().flat_map(entry_lines).collect()
}

/// Rows `lines` occupy once wrapped to `width` columns.
///
/// Each line takes `ceil(display_width / width)` rows and an empty line takes
/// one. A width of zero counts logical lines.
pub fn wrapped_line_count(lines: &[Line], width: usize) -> usize {
    if width == 0 {
        return lines.len();
    }

    lines
        .iter()
        .map(|line| {
            let cols: usize = line.spans.iter().map(|s| s.content.width()).sum();
            cols.div_ceil(width).max(1)
        })
        .sum()
}

pub fn render_log_pane(frame: &mut Frame, area: Rect, log: &MessageLog, scroll_offset: usize) {
    let title = if log.total_received() as usize > log.len() {
        format!(" Messages ({} of {}) ", log.len(), log.total_received())
    } else {
        format!(" Messages ({}) ", log.len())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(title);

    let lines = log_lines(log);
    let inner = block.inner(area);
    let rows = wrapped_line_count(&lines, inner.width as usize);
    let max_offset = rows.saturating_sub(inner.height as usize);
    let offset = scroll_offset.min(max_offset);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((offset.min(u16::MAX as usize) as u16, 0));
    frame.render_widget(paragraph, area);
}
