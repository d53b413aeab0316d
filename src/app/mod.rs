//! Terminal application state.
//!
//! [`App`] wraps a [`ConsoleSession`] with the view state the terminal UI
//! needs: log scroll position, a transient status message, the quit flag
//! and the dirty flag that decides whether the next tick redraws.

mod handlers;

use tracing::debug;

use crate::session::ConsoleSession;
use crate::traits::{Transport, TransportEvent};
use crate::ui::{log_lines, wrapped_line_count};

/// Lines moved by one PageUp/PageDown.
pub const PAGE_SCROLL_LINES: usize = 10;

/// Lines moved by one mouse wheel step.
pub const WHEEL_SCROLL_LINES: usize = 3;

pub struct App<T: Transport> {
    pub session: ConsoleSession<T>,
    /// First visible log line, counted from the newest entry
    pub scroll_offset: usize,
    /// Feedback from the last operator action
    pub status: Option<String>,
    pub should_quit: bool,
    /// Inner width of the log pane; 0 until the terminal size is known
    log_width: usize,
    needs_redraw: bool,
}

impl<T: Transport> App<T> {
    pub fn new(session: ConsoleSession<T>) -> Self {
        Self {
            session,
            scroll_offset: 0,
            status: None,
            should_quit: false,
            log_width: 0,
            needs_redraw: true,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Whether a redraw is due. Resets the flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::replace(&mut self.needs_redraw, false)
    }

    /// Feed one transport event into the session.
    pub fn handle_transport_event(&mut self, event: TransportEvent) {
        debug!("Transport event: {:?}", event);
        self.session.apply(event);
        self.mark_dirty();
    }

    /// Track the terminal width. The log pane spans it minus its borders.
    pub fn set_terminal_width(&mut self, width: u16) {
        self.log_width = width.saturating_sub(2) as usize;
        self.mark_dirty();
    }

    /// Rows the log pane would need to show every entry once wrapped.
    ///
    /// Each entry takes a header line, its text lines and a separator.
    pub fn log_line_count(&self) -> usize {
        wrapped_line_count(&log_lines(self.session.log()), self.log_width)
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
        self.mark_dirty();
    }

    pub fn scroll_down(&mut self, lines: usize) {
        let max = self.log_line_count().saturating_sub(1);
        self.scroll_offset = (self.scroll_offset + lines).min(max);
        self.mark_dirty();
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
        self.mark_dirty();
    }
}
