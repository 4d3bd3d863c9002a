//! src/main.rs
//! Terminal media browser: list, filter, and hand files to a player.

use std::{
    io::{self, Stdout},
    panic::PanicHookInfo,
};

use anyhow::{Context, Result};
use crossterm::{
    event::EventStream,
    execute,
    terminal::{
        self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    },
};
use futures::StreamExt;
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use tokio::signal;
use tracing::{error, info, warn};

use mpl_core::{
    config::Config,
    controller::{
        browser::{Browser, DispatchResult},
        handlers::KeyHandler,
    },
    logging::LoggerBuilder,
    operators::player::{self, DetachedLauncher},
    view::{
        theme::{Palette, StyleSet},
        ui::UIRenderer,
    },
};

type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::load()
        .await
        .context("Failed to load configuration")?
        .with_env(|key| std::env::var(key).ok());

    let _log_guard = LoggerBuilder::new()
        .with_level(&config.log_level)
        .build()
        .await
        .context("Failed to initialize logging")?;

    setup_panic_handler();
    player::ignore_child_exit();

    let app = App::new(&config).context("Failed to initialize application")?;
    app.run().await.context("Application runtime error")?;

    info!("Application exited cleanly");
    Ok(())
}

struct App {
    terminal: AppTerminal,
    browser: Browser<DetachedLauncher>,
    keys: KeyHandler,
    ui_renderer: UIRenderer,
}

impl App {
    fn new(config: &Config) -> Result<Self> {
        info!(
            marker = "APP_START",
            version = env!("CARGO_PKG_VERSION"),
            "Starting media browser"
        );

        let styles = StyleSet::new(Palette::resolve(config.palette));
        let (width, height) = terminal::size().context("Failed to read terminal size")?;

        let mut browser = Browser::new(config, width, height, DetachedLauncher);
        browser.start();

        let terminal = setup_terminal().context("Failed to initialize terminal")?;

        Ok(Self {
            terminal,
            browser,
            keys: KeyHandler::new(),
            ui_renderer: UIRenderer::new(styles),
        })
    }

    /// One event at a time: map, dispatch, draw.
    async fn run(mut self) -> Result<()> {
        let mut event_stream = EventStream::new();

        loop {
            self.render()?;

            tokio::select! {
                _ = signal::ctrl_c() => {
                    info!("Received Ctrl+C");
                    break;
                }

                maybe_event = event_stream.next() => {
                    let event = match maybe_event {
                        Some(Ok(event)) => event,
                        Some(Err(e)) => {
                            warn!(marker = "TERMINAL_EVENT_ERROR", "Failed to read event: {}", e);
                            continue;
                        }
                        None => {
                            info!("Terminal event stream closed");
                            break;
                        }
                    };

                    let action = self.keys.map_event(&event);
                    if self.browser.dispatch(action) == DispatchResult::Quit {
                        break;
                    }
                }
            }
        }

        info!("Event loop terminated cleanly");
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        let (renderer, browser) = (&self.ui_renderer, &self.browser);

        self.terminal
            .draw(|frame: &mut Frame<'_>| renderer.render(frame, browser))
            .context("Failed to draw terminal")?;

        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Err(e) = cleanup_terminal(&mut self.terminal) {
            warn!("Failed to cleanup terminal: {}", e);
        }
    }
}

fn setup_terminal() -> Result<AppTerminal> {
    enable_raw_mode().context("Failed to enable raw mode")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    info!("Terminal setup complete");
    Ok(terminal)
}

fn cleanup_terminal(terminal: &mut AppTerminal) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    info!("Terminal cleanup complete");
    Ok(())
}

fn setup_panic_handler() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info: &PanicHookInfo<'_>| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);

        error!("Application panicked: {}", panic_info);
        original_hook(panic_info);
    }));
}
