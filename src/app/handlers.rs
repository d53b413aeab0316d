//! Input handling for the App.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use tracing::warn;

use super::{App, PAGE_SCROLL_LINES, WHEEL_SCROLL_LINES};
use crate::error::ConsoleResult;
use crate::session::SubmitOutcome;
use crate::traits::Transport;

impl<T: Transport> App<T> {
    /// Handle one terminal event.
    pub async fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key).await,
            Event::Paste(text) => {
                if self.session.notice().is_none() {
                    self.session.composer_mut().insert_str(&text);
                    self.mark_dirty();
                }
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(width, _) => self.set_terminal_width(width),
            _ => {}
        }
    }

    /// Handle a key press.
    ///
    /// While a close notice is shown it swallows the first key press and
    /// nothing else is processed.
    pub async fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.session.notice().is_some() {
            self.session.dismiss_notice();
            self.mark_dirty();
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);
        // AltGr arrives as Ctrl+Alt; those chords are typed characters
        let altgr = ctrl && alt;

        match key.code {
            KeyCode::Char('c') if ctrl && !altgr => self.should_quit = true,
            KeyCode::Esc => self.should_quit = true,

            KeyCode::Enter if alt || shift => self.session.composer_mut().insert_newline(),
            KeyCode::Char('j') if ctrl && !altgr => self.session.composer_mut().insert_newline(),
            KeyCode::Enter => self.submit().await,
            KeyCode::Char('s') if ctrl && !altgr => self.submit().await,

            KeyCode::F(n) if (1..=12).contains(&n) => {
                let result = self.session.select_template_index(usize::from(n) - 1);
                self.report_template(result);
            }
            KeyCode::Char(c @ '1'..='9') if alt && !altgr => {
                let index = c as usize - '1' as usize;
                let result = self.session.select_template_index(index);
                self.report_template(result);
            }

            KeyCode::PageUp => self.scroll_up(PAGE_SCROLL_LINES),
            KeyCode::PageDown => self.scroll_down(PAGE_SCROLL_LINES),
            KeyCode::Home if ctrl => self.scroll_up(usize::MAX),

            KeyCode::Backspace => self.session.composer_mut().backspace(),
            KeyCode::Delete => self.session.composer_mut().delete_char(),
            KeyCode::Left => self.session.composer_mut().move_cursor_left(),
            KeyCode::Right => self.session.composer_mut().move_cursor_right(),
            KeyCode::Home => self.session.composer_mut().move_cursor_home(),
            KeyCode::End => self.session.composer_mut().move_cursor_end(),
            KeyCode::Tab => self.session.composer_mut().insert_str("  "),
            KeyCode::Char(c) if altgr || (!ctrl && !alt) => {
                self.session.composer_mut().insert_char(c)
            }
            _ => return,
        }

        self.mark_dirty();
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.scroll_up(WHEEL_SCROLL_LINES),
            MouseEventKind::ScrollDown => self.scroll_down(WHEEL_SCROLL_LINES),
            _ => {}
        }
    }

    async fn submit(&mut self) {
        match self.session.submit().await {
            Ok(SubmitOutcome::Sent) => {
                let n = self.session.sent_count();
                self.set_status(format!("Sent #{}", n));
            }
            Ok(SubmitOutcome::Empty) => {}
            Ok(SubmitOutcome::NotOpen) => self.set_status("Still connecting, nothing sent"),
            Err(e) => {
                warn!("Submit failed: {}", e);
                self.set_status(e.user_message());
            }
        }
    }

    fn report_template(&mut self, result: ConsoleResult<()>) {
        match result {
            Ok(()) => self.status = None,
            Err(e) => self.set_status(e.user_message()),
        }
    }
}
