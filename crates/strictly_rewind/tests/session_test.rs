//! End-to-end tests driving the app the way a terminal session does.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend, layout::Rect};
use strictly_rewind::{App, HitMap, OutputFormat, Palette, draw, replay_state, write_view};
use strictly_tictactoe::{Player, Position, Status};

fn click(rect: Rect) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: rect.x + 1,
        row: rect.y,
        modifiers: KeyModifiers::NONE,
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_clicking_cells_then_rewinding_branches_history() {
    let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
    let mut app = App::default();
    app_hits(&mut terminal, &mut app);

    // Keyboard: X top-left, O center, X bottom-right, O top-right.
    for c in ['1', '5', '9', '3'] {
        app.handle_key(key(KeyCode::Char(c)));
    }
    assert_eq!(app.state().history().len(), 5);

    // Click "Go to move #2" then play bottom-left.
    let (row, _) = *app_hits(&mut terminal, &mut app)
        .moves
        .iter()
        .find(|(_, step)| *step == 2)
        .unwrap();
    app.handle_mouse(click(row));
    assert_eq!(app.state().step(), 2);

    app.handle_key(key(KeyCode::Char('7')));
    assert_eq!(app.state().history().len(), 4);
    assert_eq!(app.state().step(), 3);
    assert!(app.state().current().board().is_empty(Position::TopRight));
    assert_eq!(app.view().status, Status::NextPlayer(Player::O));
}

#[test]
fn test_clicks_after_win_change_nothing() {
    use Position::*;
    let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
    let mut app = App::from_state(strictly_tictactoe::GameState::replay(&[
        TopLeft, Center, TopCenter, MiddleRight, TopRight,
    ]));
    let hits = app_hits(&mut terminal, &mut app);
    let before = app.state().clone();

    for (rect, _) in hits.cells.clone() {
        app.handle_mouse(click(rect));
    }
    assert_eq!(app.state(), &before);
    assert_eq!(app.view().status.to_string(), "Winner: X");
}

#[test]
fn test_replay_text_output() {
    let state = replay_state(&[0, 4, 1, 5, 2], None, false);
    let mut out = Vec::new();
    write_view(&state, OutputFormat::Text, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("[X]|[X]|[X]\n"));
    assert!(text.contains("\nWinner: X\n"));
    assert!(text.contains("> Go to move #5(3,1)"));
}

fn app_hits(terminal: &mut Terminal<TestBackend>, app: &mut App) -> HitMap {
    let mut hits = HitMap::default();
    terminal
        .draw(|f| hits = draw(f, app, &Palette::default()))
        .unwrap();
    app.set_hit_map(hits.clone());
    hits
}
