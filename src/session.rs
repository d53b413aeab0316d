//! The console session.
//!
//! [`ConsoleSession`] owns the transport handle, the active profile, the
//! composer draft and the message log. It is driven from two directions:
//! inbound [`TransportEvent`]s go through [`ConsoleSession::apply`], and
//! operator actions call [`ConsoleSession::submit`] and
//! [`ConsoleSession::select_template`].

use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::adapters::TungsteniteTransport;
use crate::close::CloseNotice;
use crate::config::Profile;
use crate::error::{ConsoleError, ConsoleResult};
use crate::format::render_payload;
use crate::message_log::MessageLog;
use crate::traits::{Transport, TransportEvent};
use crate::widgets::InputBox;

/// Where the connection is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionPhase {
    Connecting,
    Open,
    Closed,
}

impl ConnectionPhase {
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionPhase::Connecting => "connecting",
            ConnectionPhase::Open => "open",
            ConnectionPhase::Closed => "closed",
        }
    }
}

/// Result of a submit that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The draft went out as one text frame
    Sent,
    /// The draft was empty, nothing was sent
    Empty,
    /// The connection has not opened yet, nothing was sent
    NotOpen,
}

/// One console connection and everything shown about it.
pub struct ConsoleSession<T: Transport> {
    transport: T,
    profile: Profile,
    log: MessageLog,
    composer: InputBox,
    phase: ConnectionPhase,
    /// Pending close dialog, cleared by [`ConsoleSession::dismiss_notice`]
    notice: Option<CloseNotice>,
    /// Last thing reported to the diagnostic channel, for the status line
    last_diagnostic: Option<String>,
    sent_count: u64,
}

impl ConsoleSession<TungsteniteTransport> {
    /// Open the profile's endpoint in the background.
    ///
    /// Must be called inside a tokio runtime. The returned receiver yields
    /// the connection's events and should be fed to [`ConsoleSession::apply`].
    pub fn connect(profile: Profile) -> (Self, mpsc::UnboundedReceiver<TransportEvent>) {
        info!("Connecting to {} (profile {})", profile.url, profile.name);
        let (transport, events) = TungsteniteTransport::connect(&profile.url);
        (Self::new(transport, profile), events)
    }
}

impl<T: Transport> ConsoleSession<T> {
    pub fn new(transport: T, profile: Profile) -> Self {
        Self {
            transport,
            profile,
            log: MessageLog::new(),
            composer: InputBox::new(),
            phase: ConnectionPhase::Connecting,
            notice: None,
            last_diagnostic: None,
            sent_count: 0,
        }
    }

    /// Replace the message log, e.g. with a bounded one.
    pub fn with_log(mut self, log: MessageLog) -> Self {
        self.log = log;
        self
    }

    // ---- inbound ----

    /// Dispatch one transport event to its handler.
    pub fn apply(&mut self, event: TransportEvent) {
        match event {
            TransportEvent::Opened => self.on_open(),
            TransportEvent::Message(text) => self.on_message(&text),
            TransportEvent::Error(detail) => self.on_error(&detail),
            TransportEvent::Closed { code } => self.on_close(code),
        }
    }

    pub fn on_open(&mut self) {
        if self.phase != ConnectionPhase::Connecting {
            debug!("Ignoring open in phase {}", self.phase.label());
            return;
        }
        info!("Connection open: {}", self.profile.url);
        self.phase = ConnectionPhase::Open;
    }

    pub fn on_close(&mut self, code: u16) {
        if self.phase == ConnectionPhase::Closed {
            debug!("Ignoring repeated close {}", code);
            return;
        }
        let notice = CloseNotice::new(code);
        info!("{}", notice.alert_text());
        self.phase = ConnectionPhase::Closed;
        self.notice = Some(notice);
    }

    /// Transport errors are reported and otherwise leave the session alone.
    pub fn on_error(&mut self, detail: &str) {
        error!("WebSocket error: {}", detail);
        self.last_diagnostic = Some(detail.to_string());
    }

    pub fn on_message(&mut self, raw: &str) {
        debug!("Received {} bytes", raw.len());
        let rendered = render_payload(raw, self.profile.truncate_at);
        if let Some(err) = &rendered.parse_error {
            warn!("Parsing Error: {}", err);
            self.last_diagnostic = Some(format!("Parsing Error: {}", err));
        }
        let is_json = rendered.is_json();
        self.log.push(rendered.text, is_json);
    }

    // ---- operator actions ----

    /// Send the composer contents as one text frame.
    ///
    /// Does nothing until the connection opens. After it closes the call
    /// fails with [`ConsoleError::NotConnected`]. When the profile asks for
    /// it the composer is cleared afterwards, also when it was empty; a
    /// draft whose send failed is kept.
    pub async fn submit(&mut self) -> ConsoleResult<SubmitOutcome> {
        match self.phase {
            ConnectionPhase::Connecting => {
                debug!("Submit ignored, connection not open yet");
                return Ok(SubmitOutcome::NotOpen);
            }
            ConnectionPhase::Closed => return Err(ConsoleError::NotConnected),
            ConnectionPhase::Open => {}
        }

        let outcome = if self.composer.is_empty() {
            SubmitOutcome::Empty
        } else {
            let text = self.composer.get_content().to_string();
            debug!("Sending {} bytes", text.len());
            self.transport.send_text(text).await?;
            self.sent_count += 1;
            SubmitOutcome::Sent
        };

        if self.profile.clear_on_send {
            self.composer.clear();
        }

        Ok(outcome)
    }

    /// Overwrite the composer with the named template.
    pub fn select_template(&mut self, name: &str) -> ConsoleResult<()> {
        let body = self
            .profile
            .templates
            .get(name)
            .map(|t| t.body.clone())
            .ok_or_else(|| ConsoleError::UnknownTemplate(name.to_string()))?;
        self.composer.set_content(body);
        Ok(())
    }

    /// Overwrite the composer with the template at a 0-based position.
    pub fn select_template_index(&mut self, index: usize) -> ConsoleResult<()> {
        let body = self
            .profile
            .templates
            .get_index(index)
            .map(|t| t.body.clone())
            .ok_or_else(|| ConsoleError::UnknownTemplate(format!("#{}", index + 1)))?;
        self.composer.set_content(body);
        Ok(())
    }

    /// Close the pending dialog and return it.
    pub fn dismiss_notice(&mut self) -> Option<CloseNotice> {
        self.notice.take()
    }

    /// Close the connection.
    pub fn shutdown(&self) {
        self.transport.shutdown();
    }

    // ---- accessors ----

    pub fn phase(&self) -> ConnectionPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase == ConnectionPhase::Open
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    pub fn composer(&self) -> &InputBox {
        &self.composer
    }

    pub fn composer_mut(&mut self) -> &mut InputBox {
        &mut self.composer
    }

    pub fn notice(&self) -> Option<&CloseNotice> {
        self.notice.as_ref()
    }

    pub fn last_diagnostic(&self) -> Option<&str> {
        self.last_diagnostic.as_deref()
    }

    pub fn sent_count(&self) -> u64 {
        self.sent_count
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: Transport> Drop for ConsoleSession<T> {
    fn drop(&mut self) {
        self.transport.shutdown();
    }
}
