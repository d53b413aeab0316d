use std::time::Duration;

use color_eyre::Result;
use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use tokio::sync::mpsc;

use wsdebug::app::App;
use wsdebug::cli::{parse_args, run_cli_command, CliCommand, LaunchOptions};
use wsdebug::config::{Profile, ProfileStore, URL_ENV_VAR};
use wsdebug::logging::{init_file_logging, init_stderr_logging};
use wsdebug::message_log::MessageLog;
use wsdebug::session::ConsoleSession;
use wsdebug::terminal::{setup_panic_hook, TerminalManager};
use wsdebug::traits::{Transport, TransportEvent};
use wsdebug::ui;
use wsdebug::web::start_web_console;

/// Redraw/poll interval for the terminal loop.
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let command = parse_args(std::env::args());
    if let Some(result) = run_cli_command(&command) {
        if let Err(e) = result {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
        return Ok(());
    }

    let CliCommand::Run(options) = command else {
        return Ok(());
    };

    color_eyre::install()?;

    let runtime = tokio::runtime::Runtime::new()?;

    if options.web {
        init_stderr_logging()?;
    } else {
        init_file_logging(None)?;
    }

    let store = ProfileStore::load(options.config_path.as_deref())?;
    let profile = options.resolve_profile(&store, std::env::var(URL_ENV_VAR).ok())?;

    if options.web {
        runtime.block_on(run_web(profile, &options))
    } else {
        setup_panic_hook();
        runtime.block_on(run_tui(profile, &options))
    }
}

async fn run_web(profile: Profile, options: &LaunchOptions) -> Result<()> {
    let (mut handle, addr) = start_web_console(options.port, profile).await?;
    println!("wsdebug console at http://{} (Ctrl+C to stop)", addr);

    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            result?;
            tracing::info!("Shutting down web console");
        }
        result = &mut handle => {
            result?;
        }
    }

    handle.abort();
    Ok(())
}

async fn run_tui(profile: Profile, options: &LaunchOptions) -> Result<()> {
    let (session, mut events) = ConsoleSession::connect(profile);
    let session = match options.max_entries {
        Some(max) => session.with_log(MessageLog::with_capacity_limit(max)),
        None => session,
    };
    let mut app = App::new(session);

    let mut term_manager = TerminalManager::new()?;
    let result = run_app(term_manager.terminal(), &mut app, &mut events).await;
    term_manager.restore()?;

    if let Err(e) = &result {
        tracing::error!("Console exited with error: {}", e);
    }
    result
}

async fn run_app<B, T>(
    terminal: &mut Terminal<B>,
    app: &mut App<T>,
    events: &mut mpsc::UnboundedReceiver<TransportEvent>,
) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    T: Transport,
{
    let mut event_stream = EventStream::new();
    let mut transport_done = false;
    app.set_terminal_width(terminal.size()?.width);

    loop {
        if app.take_redraw() {
            terminal.draw(|f| ui::render(f, app))?;
        }

        tokio::select! {
            _ = tokio::time::sleep(TICK) => {}

            event = events.recv(), if !transport_done => match event {
                Some(event) => app.handle_transport_event(event),
                None => transport_done = true,
            },

            term_event = event_stream.next() => match term_event {
                Some(Ok(event)) => app.handle_event(event).await,
                Some(Err(e)) => tracing::warn!("Terminal event error: {}", e),
                None => break,
            },
        }

        if app.should_quit {
            break;
        }
    }

    app.session.shutdown();
    Ok(())
}
