//! Terminal User Interface for the data quality dashboard.
//!
//! A keyboard-driven `ratatui` interface with three phases: an upload view
//! with a file picker, a timed "analyzing" simulation, and the score
//! dashboard (gauge, radar chart, metric cards, dimension breakdown,
//! recommendations). Layout adapts to terminal width.

pub mod animation;
pub mod app;
pub mod layout;
pub mod renderer;
pub mod theme;
pub mod widgets;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use animation::AnimationController;
use app::App;
use renderer::render_adaptive;

/// Dashboard TUI manager owning the terminal and the application state.
pub struct DashboardTui {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: App,
    animation: AnimationController,
}

impl DashboardTui {
    /// Create the manager and switch the terminal into TUI mode.
    pub fn new(app: App) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app,
            animation: AnimationController::default(),
        })
    }

    /// Run the event loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        let tick = Duration::from_millis(self.app.config.dashboard.tick_ms.max(1));
        loop {
            self.app.tick();
            self.animation.tick();
            self.terminal
                .draw(|frame| render_adaptive(frame, &self.app, &self.animation))?;

            if event::poll(tick)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && self.app.handle_key(key)? {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    /// Clean up and restore terminal
    pub fn cleanup(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for DashboardTui {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
