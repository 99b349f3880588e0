//! Stateless UI rendering for the game screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use rewind_tictactoe::{Player, Position, Square};

use super::app::{App, Focus};

const HELP: &str = "←↑↓→/1-9: Play | Tab: Board/Moves | [ ]: Step | s: Sort | q: Quit";

/// Renders the whole screen from the application state.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Board and moves
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(area);

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(44), Constraint::Min(28)])
        .split(chunks[1]);

    draw_board(frame, body[0], app);
    draw_moves(frame, body[1], app);
    draw_status(frame, chunks[2], app);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let border_style = focus_style(app.focus() == Focus::Board);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title("Board");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 38, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, positions) in Position::ALL.chunks(3).enumerate() {
        if row > 0 {
            draw_separator(frame, rows[row * 2 - 1]);
        }
        draw_row(frame, rows[row * 2], app, positions);
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, positions: &[Position]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (col, pos) in positions.iter().enumerate() {
        if col > 0 {
            draw_separator_vertical(frame, cols[col * 2 - 1]);
        }
        draw_cell(frame, cols[col * 2], app, *pos);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let game = app.game();
    let square = game.current_board().get(pos);

    let (symbol, base_style) = match square {
        Square::Empty => (
            format!(" {} ", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            " X ".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            " O ".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if game.outcome().highlights(pos) {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if app.focus() == Focus::Board && pos == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Vertically center the symbol in the 3-line cell.
    let text = vec![
        Line::default(),
        Line::from(Span::styled(symbol, style)),
    ];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App) {
    let game = app.game();
    let direction = if game.sort_ascending() {
        "ascending ↑"
    } else {
        "descending ↓"
    };

    let rows = game.move_list();
    let items: Vec<ListItem> = rows
        .iter()
        .map(|item| {
            let style = if item.is_current {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(item.label.clone()).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(focus_style(app.focus() == Focus::Moves))
                .title(format!("Moves ({direction})")),
        )
        .highlight_style(Style::default().fg(Color::Yellow))
        .highlight_symbol("> ");

    let selected = if app.focus() == Focus::Moves {
        rows.iter().position(|item| item.step == app.selected_step())
    } else {
        None
    };
    let mut state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        app.game().status().to_string(),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )];
    if let Some(notice) = app.notice() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(notice.to_string(), Style::default().fg(Color::Red)));
    }

    let status = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────┼────────────┼────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::Intent;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use insta::assert_snapshot;
    use ratatui::{Terminal, backend::TestBackend};

    const WIDTH: u16 = 72;
    const HEIGHT: u16 = 22;

    /// Column of the first character of a move-list row.
    const MOVES_X: u16 = 45;
    /// Row of the first move-list entry.
    const MOVES_Y: u16 = 4;

    fn render(app: &App) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).expect("terminal");
        terminal.draw(|f| draw(f, app)).expect("draw");
        terminal
    }

    fn play(app: &mut App, cells: &[usize]) {
        for &index in cells {
            let pos = Position::from_index(index).expect("cell");
            app.dispatch(Intent::CellClicked(pos));
        }
    }

    #[test]
    fn test_renders_new_game() {
        let app = App::new(true);
        let terminal = render(&app);
        assert_snapshot!(terminal.backend().to_string(), @r#"
        "┌──────────────────────────────────────────────────────────────────────┐"
        "│                         Rewind - Tic Tac Toe                         │"
        "└──────────────────────────────────────────────────────────────────────┘"
        "┌Board─────────────────────────────────────┐┌Moves (ascending ↑)───────┐"
        "│              │            │              ││Go to game start          │"
        "│        1     │      2     │      3       ││                          │"
        "│              │            │              ││                          │"
        "│  ────────────┼────────────┼────────────  ││                          │"
        "│              │            │              ││                          │"
        "│        4     │      5     │      6       ││                          │"
        "│              │            │              ││                          │"
        "│  ────────────┼────────────┼────────────  ││                          │"
        "│              │            │              ││                          │"
        "│        7     │      8     │      9       ││                          │"
        "│              │            │              ││                          │"
        "└──────────────────────────────────────────┘└──────────────────────────┘"
        "┌──────────────────────────────────────────────────────────────────────┐"
        "│                            Next player: X                            │"
        "└──────────────────────────────────────────────────────────────────────┘"
        "┌──────────────────────────────────────────────────────────────────────┐"
        "│   ←↑↓→/1-9: Play | Tab: Board/Moves | [ ]: Step | s: Sort | q: Quit  │"
        "└──────────────────────────────────────────────────────────────────────┘"
        "#);
    }

    #[test]
    fn test_renders_win_with_descending_moves() {
        let mut app = App::new(false);
        play(&mut app, &[0, 4, 1, 3, 2]);
        let terminal = render(&app);
        assert_snapshot!(terminal.backend().to_string(), @r#"
        "┌──────────────────────────────────────────────────────────────────────┐"
        "│                         Rewind - Tic Tac Toe                         │"
        "└──────────────────────────────────────────────────────────────────────┘"
        "┌Board─────────────────────────────────────┐┌Moves (descending ↓)──────┐"
        "│              │            │              ││Go to move #5 (1, 3)      │"
        "│        X     │      X     │      X       ││Go to move #4 (2, 1)      │"
        "│              │            │              ││Go to move #3 (1, 2)      │"
        "│  ────────────┼────────────┼────────────  ││Go to move #2 (2, 2)      │"
        "│              │            │              ││Go to move #1 (1, 1)      │"
        "│        O     │      O     │      6       ││Go to game start          │"
        "│              │            │              ││                          │"
        "│  ────────────┼────────────┼────────────  ││                          │"
        "│              │            │              ││                          │"
        "│        7     │      8     │      9       ││                          │"
        "│              │            │              ││                          │"
        "└──────────────────────────────────────────┘└──────────────────────────┘"
        "┌──────────────────────────────────────────────────────────────────────┐"
        "│                               Winner: X                              │"
        "└──────────────────────────────────────────────────────────────────────┘"
        "┌──────────────────────────────────────────────────────────────────────┐"
        "│   ←↑↓→/1-9: Play | Tab: Board/Moves | [ ]: Step | s: Sort | q: Quit  │"
        "└──────────────────────────────────────────────────────────────────────┘"
        "#);
    }

    #[test]
    fn test_renders_move_list_selection() {
        let mut app = App::new(true);
        play(&mut app, &[0, 4, 8]);
        app.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
        app.handle_key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        let terminal = render(&app);
        assert_snapshot!(terminal.backend().to_string(), @r#"
        "┌──────────────────────────────────────────────────────────────────────┐"
        "│                         Rewind - Tic Tac Toe                         │"
        "└──────────────────────────────────────────────────────────────────────┘"
        "┌Board─────────────────────────────────────┐┌Moves (ascending ↑)───────┐"
        "│              │            │              ││  Go to game start        │"
        "│        X     │      2     │      3       ││  Go to move #1 (1, 1)    │"
        "│              │            │              ││> Go to move #2 (2, 2)    │"
        "│  ────────────┼────────────┼────────────  ││  Go to move #3 (3, 3)    │"
        "│              │            │              ││                          │"
        "│        4     │      O     │      6       ││                          │"
        "│              │            │              ││                          │"
        "│  ────────────┼────────────┼────────────  ││                          │"
        "│              │            │              ││                          │"
        "│        7     │      8     │      X       ││                          │"
        "│              │            │              ││                          │"
        "└──────────────────────────────────────────┘└──────────────────────────┘"
        "┌──────────────────────────────────────────────────────────────────────┐"
        "│                            Next player: O                            │"
        "└──────────────────────────────────────────────────────────────────────┘"
        "┌──────────────────────────────────────────────────────────────────────┐"
        "│   ←↑↓→/1-9: Play | Tab: Board/Moves | [ ]: Step | s: Sort | q: Quit  │"
        "└──────────────────────────────────────────────────────────────────────┘"
        "#);
    }

    #[test]
    fn test_winning_line_is_highlighted() {
        let mut app = App::new(true);
        play(&mut app, &[0, 4, 1, 3, 2]);
        let terminal = render(&app);

        let highlighted = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .filter(|cell| cell.symbol() == "X" && cell.bg == Color::Green)
            .count();
        assert_eq!(highlighted, 3);
    }

    #[test]
    fn test_current_step_row_is_bold() {
        let mut app = App::new(true);
        play(&mut app, &[0, 4, 8]);
        app.dispatch(Intent::MoveSelected(1));
        let terminal = render(&app);
        let buffer = terminal.backend().buffer();

        for step in 0..=3u16 {
            let cell = &buffer[(MOVES_X, MOVES_Y + step)];
            assert_eq!(cell.symbol(), "G");
            assert_eq!(
                cell.modifier.contains(Modifier::BOLD),
                step == 1,
                "row for step {step}"
            );
        }
    }
}
