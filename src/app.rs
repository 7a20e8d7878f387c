use crate::config::Config;
use crate::error::AppResult;
use crate::events::network::{Event as NetworkEvent, Handler as NetworkEventHandler};
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger::{CustomLogger, LogEntries};
use crate::relay::Relay;
use crate::state::{Page, State};
use crate::theme::Theme;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout, Stdout};
use std::sync::{Arc, Mutex as SyncMutex};
use tokio::sync::Mutex;

pub type NetworkEventSender = std::sync::mpsc::Sender<NetworkEvent>;
type NetworkEventReceiver = std::sync::mpsc::Receiver<NetworkEvent>;

/// Install the capturing logger feeding the log panel.
///
fn install_logger(entries: &LogEntries) -> AppResult<()> {
    CustomLogger::capturing(LevelFilter::Debug, Arc::clone(entries)).install()?;
    Ok(())
}

/// Options chosen on the command line.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Launch {
    pub theme: Theme,
    pub page: Page,
}

impl Default for Launch {
    fn default() -> Self {
        Launch {
            theme: Theme::default(),
            page: Page::Intro,
        }
    }
}

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
    config: Config,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub async fn start(config: Config, launch: Launch) -> Result<()> {
        let log_entries: LogEntries = Arc::new(SyncMutex::new(vec![]));
        install_logger(&log_entries)?;

        info!("Starting application...");
        if let Some(path) = config.file_path() {
            debug!("Loaded configuration from {}.", path.display());
        }
        let (tx, rx) = std::sync::mpsc::channel::<NetworkEvent>();
        let relay_status = config.relay.status();
        if !relay_status.is_configured {
            warn!("Email relay is not configured, contact messages cannot be sent.");
        }
        let state = State::new(
            tx,
            config.content.clone(),
            launch.theme,
            launch.page,
            relay_status,
            log_entries,
        );
        let mut app = App {
            state: Arc::new(Mutex::new(state)),
            config,
        };
        app.start_network(rx)?;
        app.start_ui().await?;

        info!("Exiting application...");
        Ok(())
    }

    /// Start a separate thread for asynchronous state mutations.
    ///
    fn start_network(&self, net_receiver: NetworkEventReceiver) -> Result<()> {
        debug!("Creating new thread for asynchronous networking...");
        let cloned_state = Arc::clone(&self.state);
        let settings = self.config.relay.clone();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        std::thread::spawn(move || {
            runtime.block_on(async {
                let relay = Relay::new(settings);
                let mut network_event_handler = NetworkEventHandler::new(&cloned_state, &relay);
                while let Ok(network_event) = net_receiver.recv() {
                    match network_event_handler.handle(network_event).await {
                        Ok(_) => (),
                        Err(e) => error!("Failed to handle network event: {}", e),
                    }
                }
            })
        });
        Ok(())
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error.
    ///
    async fn start_ui(&mut self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let result = self.run(&mut terminal).await;

        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            let mut state = self.state.lock().await;
            if let Ok(size) = terminal.size() {
                state.set_terminal_size(size);
            };
            terminal.draw(|frame| crate::ui::render(frame, &mut state))?;
            if !terminal_event_handler.handle_next(&mut state)? {
                debug!("Received application exit request.");
                break;
            }
        }
        Ok(())
    }
}
