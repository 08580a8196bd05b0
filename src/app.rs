use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::events::network::{Event as NetworkEvent, Handler as NetworkEventHandler};
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::favorites::Favorites;
use crate::logger::{BufferLogger, LogBuffer};
use crate::mealdb::MealDb;
use crate::nutrition::NutritionEstimator;
use crate::preferences::Preferences;
use crate::state::State;
use crate::store::{FileStore, SharedStore};
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout, Stdout};
use std::sync::Arc;
use tokio::sync::Mutex;

pub type NetworkEventSender = std::sync::mpsc::Sender<NetworkEvent>;
type NetworkEventReceiver = std::sync::mpsc::Receiver<NetworkEvent>;

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
    pub async fn start(config: Config) -> Result<()> {
        let log_buffer = LogBuffer::default();
        BufferLogger::new(Arc::clone(&log_buffer), LevelFilter::Debug)
            .init()
            .map_err(|e| AppError::Logger(e.to_string()))?;

        info!("Starting application...");
        let store: SharedStore = Arc::new(FileStore::open(&config.store_dir)?);
        let favorites = Favorites::load(Arc::clone(&store));
        let preferences = Preferences::load(store);

        let (tx, rx) = std::sync::mpsc::channel::<NetworkEvent>();
        let app = App {
            state: Arc::new(Mutex::new(State::new(
                tx,
                favorites,
                preferences,
                log_buffer,
            ))),
            config,
        };
        app.start_network(rx);
        app.start_ui().await?;

        info!("Exiting application...");
        Ok(())
    }

    /// Start a separate thread for asynchronous state mutations. Every event
    /// is spawned as its own task so slow lookups never hold up later ones.
    ///
    fn start_network(&self, net_receiver: NetworkEventReceiver) {
        debug!("Creating new thread for asynchronous networking...");
        let cloned_state = Arc::clone(&self.state);
        let config = self.config.clone();
        std::thread::spawn(move || {
            let runtime = match tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    error!("Failed to build network runtime: {}", e);
                    return;
                }
            };
            runtime.block_on(async {
                let network_event_handler = NetworkEventHandler::new(
                    &cloned_state,
                    MealDb::new(&config.meal_db_url),
                    NutritionEstimator::new(
                        &config.nutrition_url,
                        &config.nutrition_app_id,
                        &config.nutrition_app_key,
                    ),
                );
                while let Ok(network_event) = net_receiver.recv() {
                    let handler = network_event_handler.clone();
                    tokio::spawn(async move { handler.handle(network_event).await });
                }
            })
        });
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error.
    ///
    async fn start_ui(&self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut terminal = setup_terminal()?;

        let terminal_event_handler = TerminalEventHandler::new();
        let result = async {
            loop {
                let mut state = self.state.lock().await;
                terminal.draw(|frame| crate::ui::render(frame, &state))?;
                if !terminal_event_handler.handle_next(&mut state)? {
                    debug!("Received application exit request.");
                    break;
                }
            }
            Ok::<(), anyhow::Error>(())
        }
        .await;

        restore_terminal(&mut terminal)?;
        result
    }
}

/// Switch the terminal into raw mode on the alternate screen.
///
fn setup_terminal() -> AppResult<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.hide_cursor()?;
    Ok(terminal)
}

/// Leave raw mode and the alternate screen.
///
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> AppResult<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
