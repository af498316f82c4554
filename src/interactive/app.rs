//! TUI application state and key handling
//!
//! Maps terminal key presses onto [`Session`] handlers and keeps the latest
//! snapshot for rendering.

use crate::session::{Session, Snapshot};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::info;

const MAX_NAME_LEN: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Game,
}

/// Application state
pub struct App<R: Rng = StdRng> {
    pub session: Session<R>,
    pub snapshot: Snapshot,
    pub screen: Screen,
    pub name_input: String,
    pub should_quit: bool,
}

impl<R: Rng> App<R> {
    #[must_use]
    pub fn new(session: Session<R>) -> Self {
        let snapshot = session.snapshot();
        Self {
            session,
            snapshot,
            screen: Screen::Login,
            name_input: String::new(),
            should_quit: false,
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if (ctrl && key.code == KeyCode::Char('c')) || key.code == KeyCode::Esc {
            self.quit();
            return;
        }

        match self.screen {
            Screen::Login if ctrl => {}
            Screen::Login => self.handle_login_key(key.code),
            Screen::Game if ctrl => match key.code {
                KeyCode::Char('s') => self.snapshot = self.session.on_save(),
                KeyCode::Char('n') => self.snapshot = self.session.on_reset(),
                _ => {}
            },
            Screen::Game => self.handle_game_key(key.code),
        }
    }

    fn handle_login_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => {
                if self.name_input.chars().count() < MAX_NAME_LEN {
                    self.name_input.push(c);
                }
            }
            KeyCode::Backspace => {
                self.name_input.pop();
            }
            KeyCode::Enter => {
                self.snapshot = self.session.on_login(&self.name_input);
                if self.snapshot.logged_in() {
                    self.screen = Screen::Game;
                }
            }
            _ => {}
        }
    }

    fn handle_game_key(&mut self, code: KeyCode) {
        self.snapshot = match code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => self.session.on_letter_key(c),
            KeyCode::Backspace => self.session.on_delete(),
            // Enter on a finished board starts the next game
            KeyCode::Enter if self.snapshot.is_over() => self.session.on_reset(),
            KeyCode::Enter => self.session.on_submit(),
            _ => return,
        };
    }

    fn quit(&mut self) {
        if self.screen == Screen::Game {
            self.snapshot = self.session.on_save();
        }
        self.should_quit = true;
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
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
        tracing::error!(error = %err, "tui exited with error");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            info!("player quit");
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LetterStatus, Outcome};
    use crate::player::PlayerStore;
    use crate::wordlists::WordList;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;

    fn app(dir: &std::path::Path) -> App {
        let words = WordList::new(words_from_slice(&["crane"])).unwrap();
        let session = Session::with_rng(words, PlayerStore::new(dir), StdRng::seed_from_u64(9));
        App::new(session)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn login(app: &mut App) {
        type_str(app, "ada");
        press(app, KeyCode::Enter);
    }

    #[test]
    fn starts_on_login_screen() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(dir.path());
        assert_eq!(app.screen, Screen::Login);
        assert!(!app.snapshot.logged_in());
    }

    #[test]
    fn login_edits_name_and_enters_game() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());

        type_str(&mut app, "adx");
        press(&mut app, KeyCode::Backspace);
        type_str(&mut app, "a");
        assert_eq!(app.name_input, "ada");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen, Screen::Game);
        assert_eq!(app.snapshot.player.as_ref().unwrap().name, "ada");
    }

    #[test]
    fn blank_name_stays_on_login() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());

        type_str(&mut app, "  ");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.screen, Screen::Login);
        assert!(app.snapshot.notice.is_some());
    }

    #[test]
    fn typing_and_submitting() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());
        login(&mut app);

        type_str(&mut app, "crat1e");
        assert_eq!(app.snapshot.current_col, 5);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.snapshot.current_row, 1);
        assert_eq!(app.snapshot.keyboard.status('T'), Some(LetterStatus::Absent));

        type_str(&mut app, "crane");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.snapshot.outcome, Outcome::Won);

        // Enter on a finished game starts another
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.snapshot.outcome, Outcome::Continue);
        assert_eq!(app.snapshot.current_row, 0);
    }

    #[test]
    fn control_shortcuts() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());
        login(&mut app);
        type_str(&mut app, "cr");

        ctrl(&mut app, 'n');
        assert_eq!(app.snapshot.current_col, 0);

        ctrl(&mut app, 's');
        assert_eq!(app.snapshot.notice.as_ref().unwrap().text, "Stats saved");
        assert!(PlayerStore::new(dir.path()).path_for("ada").exists());
    }

    #[test]
    fn escape_quits() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path());
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
