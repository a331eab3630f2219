//! Stateless terminal rendering of a [`GameView`].

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_tictactoe::{CellView, GameView, Player, Position, Square};

use crate::app::App;
use crate::config::Palette;
use crate::input::{Focus, HitMap};

const CELL_WIDTH: u16 = 11;
const CELL_HEIGHT: u16 = 3;
const GRID_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const GRID_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Draws the whole screen and returns the clickable regions.
pub fn draw(frame: &mut Frame, app: &App, palette: &Palette) -> HitMap {
    let view = app.view();
    let mut hits = HitMap::default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Min(GRID_HEIGHT + 2), // Board + info
            Constraint::Length(3),            // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Strictly Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(GRID_WIDTH + 4), Constraint::Min(24)])
        .split(chunks[1]);

    draw_board(frame, body[0], &view, app, palette, &mut hits);
    draw_info(frame, body[1], &view, app, &mut hits);

    let help = Paragraph::new(
        "Arrows: move | Enter/1-9: place | Tab: moves | r: reverse | q: quit | Mouse: click",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[2]);

    hits
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    view: &GameView,
    app: &App,
    palette: &Palette,
    hits: &mut HitMap,
) {
    let block = Block::default().borders(Borders::ALL).title("Board");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let grid = center_rect(inner, GRID_WIDTH, GRID_HEIGHT);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(grid);

    for (r, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(row_area);

        for (c, cell_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            let Some(pos) = Position::from_index(r * 3 + c) else {
                continue;
            };
            let cursor = app.focus() == Focus::Board && app.cursor() == pos;
            draw_cell(frame, cell_area, view.cell(pos), cursor, palette);
            hits.cells.push((cell_area, pos));
        }
        draw_separator_vertical(frame, cols[1]);
        draw_separator_vertical(frame, cols[3]);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &CellView, cursor: bool, palette: &Palette) {
    let (symbol, mut style) = match cell.square {
        Square::Empty => (
            (cell.position.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(palette.x).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(palette.o).add_modifier(Modifier::BOLD),
        ),
    };
    if cell.highlighted {
        style = style.bg(palette.highlight);
    }
    if cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let text = vec![Line::from(""), Line::from(symbol), Line::from("")];
    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_info(frame: &mut Frame, area: Rect, view: &GameView, app: &App, hits: &mut HitMap) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Status
            Constraint::Length(3), // Toggle
            Constraint::Min(3),    // Moves
        ])
        .split(area);

    let status = Paragraph::new(view.status.to_string())
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[0]);

    let order = if view.reversed { "newest first" } else { "oldest first" };
    let toggle = Paragraph::new(Line::from(vec![
        Span::styled("[ toggle ]", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!("  {}", order)),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(toggle, chunks[1]);
    hits.toggle = Some(chunks[1]);

    draw_moves(frame, chunks[2], view, app, hits);
}

fn draw_moves(frame: &mut Frame, area: Rect, view: &GameView, app: &App, hits: &mut HitMap) {
    let focused = app.focus() == Focus::History;
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title("Moves");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let height = usize::from(inner.height);
    if height == 0 {
        return;
    }
    // Scroll so the highlighted row stays visible.
    let offset = app.selected_move().saturating_sub(height - 1);

    for (line, (row, desc)) in view
        .moves
        .iter()
        .enumerate()
        .skip(offset)
        .take(height)
        .enumerate()
    {
        let selected = focused && row == app.selected_move();
        let mut style = Style::default();
        if desc.is_current {
            style = style.add_modifier(Modifier::BOLD);
        }
        if selected {
            style = style.fg(Color::Yellow);
        }
        let marker = if selected { "> " } else { "  " };

        let rect = Rect::new(inner.x, inner.y + line as u16, inner.width, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(format!("{}{}", marker, desc), style)),
            rect,
        );
        hits.moves.push((rect, desc.step));
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(usize::from(area.width)))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); usize::from(area.height)])
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
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use ratatui::{Terminal, backend::TestBackend};
    use strictly_tictactoe::GameState;

    use crate::input::Intent;

    fn render(app: &App) -> (String, HitMap) {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        let mut hits = HitMap::default();
        terminal
            .draw(|f| hits = draw(f, app, &Palette::default()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let text = buffer
            .content
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");
        (text, hits)
    }

    fn click_center(rect: Rect) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: rect.x + rect.width / 2,
            row: rect.y + rect.height / 2,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_initial_screen() {
        let (text, hits) = render(&App::default());
        assert!(text.contains("Next player: X"));
        assert!(text.contains("Go to game start"));
        assert!(text.contains("oldest first"));
        assert_eq!(hits.cells.len(), 9);
        assert_eq!(hits.moves.len(), 1);
        assert!(hits.toggle.is_some());
    }

    #[test]
    fn test_winner_and_moves_are_drawn() {
        use Position::*;
        let state = GameState::replay(&[TopLeft, Center, TopCenter, MiddleRight, TopRight]);
        let (text, hits) = render(&App::from_state(state));
        assert!(text.contains("Winner: X"));
        assert!(text.contains("Go to move #5(3,1)"));
        let steps: Vec<_> = hits.moves.iter().map(|(_, s)| *s).collect();
        assert_eq!(steps, [0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_clicks_on_drawn_regions_drive_the_game() {
        let mut app = App::default();
        let (_, hits) = render(&app);
        let center = hits
            .cells
            .iter()
            .find(|(_, pos)| *pos == Position::Center)
            .map(|(rect, _)| *rect)
            .unwrap();
        assert_eq!(
            hits.click(click_center(center)),
            Some(Intent::SelectCell(Position::Center))
        );

        app.set_hit_map(hits);
        app.handle_mouse(click_center(center));
        assert_eq!(app.state().step(), 1);

        let (_, hits) = render(&app);
        let toggle = hits.toggle.unwrap();
        let first_row = hits.moves[0].0;
        app.set_hit_map(hits);
        app.handle_mouse(click_center(first_row));
        assert_eq!(app.state().step(), 0);
        app.handle_mouse(click_center(toggle));
        assert!(app.state().is_reversed());

        let (text, hits) = render(&app);
        assert!(text.contains("newest first"));
        // Newest entry is drawn first but still jumps to its own step.
        assert_eq!(hits.moves[0].1, 1);
    }
}
