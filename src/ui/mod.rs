//! Terminal UI rendering.
//!
//! Layout, top to bottom: header, message log, template bar, composer,
//! status line. A close notice is drawn on top of everything.

mod dialog;
mod log_pane;
pub mod theme;

pub use dialog::{centered_rect, render_close_dialog};
pub use log_pane::{log_lines, render_log_pane, wrapped_line_count};

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::session::ConnectionPhase;
use crate::traits::Transport;
use crate::widgets::InputBoxWidget;
use theme::*;

/// Composer height including borders.
const COMPOSER_HEIGHT: u16 = 10;

pub const COMPOSER_TITLE: &str = " Message  Enter/Ctrl+S send  Alt+Enter newline ";

pub fn render<T: Transport>(frame: &mut Frame, app: &App<T>) {
    let [header, log, templates, composer, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(COMPOSER_HEIGHT),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header, app);
    render_log_pane(frame, log, app.session.log(), app.scroll_offset);
    render_template_bar(frame, templates, app);
    frame.render_widget(
        InputBoxWidget::new(
            app.session.composer(),
            COMPOSER_TITLE,
            app.session.notice().is_none(),
        ),
        composer,
    );
    render_status(frame, status, app);

    if let Some(notice) = app.session.notice() {
        render_close_dialog(frame, notice);
    }
}

fn phase_color(phase: ConnectionPhase) -> ratatui::style::Color {
    match phase {
        ConnectionPhase::Connecting => COLOR_PHASE_CONNECTING,
        ConnectionPhase::Open => COLOR_PHASE_OPEN,
        ConnectionPhase::Closed => COLOR_PHASE_CLOSED,
    }
}

fn render_header<T: Transport>(frame: &mut Frame, area: Rect, app: &App<T>) {
    let profile = app.session.profile();
    let phase = app.session.phase();

    let line = Line::from(vec![
        Span::styled(
            " wsdebug ",
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{} ", profile.name), Style::default().fg(COLOR_HEADER)),
        Span::styled(format!("{} ", profile.url), Style::default().fg(COLOR_DIM)),
        Span::styled(
            format!("[{}]", phase.label()),
            Style::default().fg(phase_color(phase)),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// `F1 handshake  F2 respawn ...`
pub fn template_bar_line(names: &[&str]) -> Line<'static> {
    let mut spans = Vec::with_capacity(names.len() * 2 + 1);
    spans.push(Span::raw(" "));
    for (i, name) in names.iter().enumerate().take(12) {
        spans.push(Span::styled(
            format!("F{}", i + 1),
            Style::default().fg(COLOR_KEY_HINT).bg(COLOR_KEY_HINT_BG),
        ));
        spans.push(Span::raw(format!(" {}  ", name)));
    }
    Line::from(spans)
}

fn render_template_bar<T: Transport>(frame: &mut Frame, area: Rect, app: &App<T>) {
    let names = app.session.profile().templates.names();
    frame.render_widget(Paragraph::new(template_bar_line(&names)), area);
}

fn render_status<T: Transport>(frame: &mut Frame, area: Rect, app: &App<T>) {
    let message = app
        .status
        .as_deref()
        .or(app.session.last_diagnostic())
        .unwrap_or("Esc quit  PgUp/PgDn scroll");

    let counts = format!(
        "recv {}  sent {} ",
        app.session.log().total_received(),
        app.session.sent_count()
    );

    let [left, right] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(counts.len() as u16),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Span::styled(format!(" {}", message), Style::default().fg(COLOR_DIM))),
        left,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(counts, Style::default().fg(COLOR_DIM))),
        right,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_bar_line() {
        let line = template_bar_line(&["handshake", "respawn"]);
        assert_eq!(line.to_string(), " F1 handshake  F2 respawn  ");
    }

    #[test]
    fn test_template_bar_stops_at_f12() {
        let names: Vec<String> = (0..15).map(|i| format!("t{}", i)).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let line = template_bar_line(&refs);
        assert!(line.to_string().contains("F12 t11"));
        assert!(!line.to_string().contains("F13"));
    }
}
