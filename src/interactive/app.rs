//! TUI application state and event loop

use crate::core::Word;
use crate::game::{KeyInput, Phase, Session};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Idle redraw interval when no round advance is pending
const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Application state wrapping one game session
pub struct App {
    pub session: Session,
    words: Vec<Word>,
    pub should_quit: bool,
    /// Deadline of the scheduled round advance, if a round just ended
    pending_advance: Option<Instant>,
}

impl App {
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let session = Session::new(&words, &mut rand::rng());

        Self {
            session,
            words,
            should_quit: false,
            pending_advance: None,
        }
    }

    /// Restart with a fresh shuffle; cancels any scheduled advance
    pub fn new_game(&mut self) {
        self.session = Session::new(&self.words, &mut rand::rng());
        self.pending_advance = None;
    }

    /// Translate a terminal key event and feed it into the session
    pub fn on_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            _ if self.session.is_game_over() => match key.code {
                KeyCode::Char('r' | 'R') | KeyCode::Enter => self.new_game(),
                KeyCode::Char('q' | 'Q') => self.should_quit = true,
                _ => {}
            },
            KeyCode::Enter => self.session.handle_key(KeyInput::Enter),
            KeyCode::Backspace => self.session.handle_key(KeyInput::Backspace),
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                self.session.handle_key(KeyInput::Letter(c));
            }
            _ => {}
        }

        self.schedule_advance();
    }

    /// Arm the advance timer when a round just finished
    fn schedule_advance(&mut self) {
        if self.pending_advance.is_none()
            && let Phase::RoundOver(outcome) = self.session.phase()
        {
            self.pending_advance = Some(Instant::now() + outcome.display_pause());
        }
    }

    /// How long the event loop may block waiting for input
    #[must_use]
    pub fn poll_timeout(&self) -> Duration {
        match self.pending_advance {
            Some(deadline) => deadline
                .saturating_duration_since(Instant::now())
                .min(TICK_INTERVAL),
            None => TICK_INTERVAL,
        }
    }

    /// Fire the scheduled advance once its deadline has passed
    pub fn fire_due_advance(&mut self) {
        if let Some(deadline) = self.pending_advance
            && Instant::now() >= deadline
        {
            self.pending_advance = None;
            self.session.advance_round();
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(app.poll_timeout())? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                app.on_key(key);
            }
        }

        app.fire_due_advance();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
