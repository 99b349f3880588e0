//! Application state and intent handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use rewind_tictactoe::{GameState, MoveResult, Position};
use tracing::{debug, info, instrument, warn};

use super::input::{digit_position, move_cursor};
use super::intent::Intent;

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    Board,
    /// Arrow keys move through the move list.
    Moves,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        }
    }
}

/// Main application state.
///
/// Owns the only [`GameState`] and replaces it with the value returned by
/// each transition.
#[derive(Debug)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    selected_step: usize,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application with the given move-list order.
    #[instrument]
    pub fn new(sort_ascending: bool) -> Self {
        Self {
            game: GameState::new().with_sort_ascending(sort_ascending),
            cursor: Position::Center,
            focus: Focus::Board,
            selected_step: 0,
            notice: None,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Board cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// History step highlighted in the move list.
    pub fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// Message about the last rejected intent, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies an intent to the game state.
    #[instrument(skip(self), fields(step = self.game.current_step()))]
    pub fn dispatch(&mut self, intent: Intent) {
        debug!(?intent, "Dispatching intent");
        self.notice = None;

        match intent {
            Intent::CellClicked(pos) => match self.game.play_move(pos) {
                MoveResult::Played(next) => {
                    self.game = next;
                    self.selected_step = self.game.current_step();
                }
                MoveResult::NoOp(reason) => {
                    debug!(%reason, "Move ignored");
                    self.notice = Some(reason.to_string());
                }
            },
            Intent::MoveSelected(step) => match self.game.jump_to(step) {
                Ok(next) => {
                    self.game = next;
                    self.selected_step = step;
                }
                Err(e) => {
                    warn!(error = %e, "Jump failed");
                    self.notice = Some(e.to_string());
                }
            },
            Intent::SortToggled => {
                self.game = self.game.toggle_sort();
            }
        }
    }

    /// Handles a key press, translating it into navigation or an intent.
    #[instrument(skip(self, key), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                self.selected_step = self.game.current_step();
            }
            KeyCode::Char('s') => self.dispatch(Intent::SortToggled),
            KeyCode::Char('[') if self.game.can_step_back() => {
                self.dispatch(Intent::MoveSelected(self.game.current_step() - 1));
            }
            KeyCode::Char(']') if self.game.can_step_forward() => {
                self.dispatch(Intent::MoveSelected(self.game.current_step() + 1));
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.dispatch(Intent::CellClicked(pos));
                }
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::Moves => self.handle_moves_key(code),
            },
        }
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.dispatch(Intent::CellClicked(self.cursor)),
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn handle_moves_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::Enter => self.dispatch(Intent::MoveSelected(self.selected_step)),
            _ => {}
        }
    }

    /// Moves the move-list highlight by `delta` rows in display order.
    fn move_selection(&mut self, delta: isize) {
        let rows = self.game.move_list();
        let row = rows
            .iter()
            .position(|item| item.step == self.selected_step)
            .unwrap_or(0);
        let next = row.saturating_add_signed(delta).min(rows.len() - 1);
        self.selected_step = rows[next].step;
    }
}
