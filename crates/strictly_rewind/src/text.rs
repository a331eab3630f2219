//! Plain-text rendering of a [`GameView`], used by `replay`.

use strictly_tictactoe::{CellView, GameView};

/// Renders the grid, status line and move list.
///
/// Cells on the winning line are bracketed; `>` marks the displayed step.
/// Grid rows carry no trailing whitespace.
pub fn render(view: &GameView) -> String {
    let mut out = String::new();

    for (row, cells) in view.cells.chunks(3).enumerate() {
        if row > 0 {
            out.push_str("---+---+---\n");
        }
        let cells: Vec<String> = cells.iter().map(render_cell).collect();
        out.push_str(cells.join("|").trim_end());
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&view.status.to_string());
    out.push_str("\n\n");

    let order = if view.reversed { "newest first" } else { "oldest first" };
    out.push_str(&format!("Moves ({}):\n", order));
    for desc in &view.moves {
        let marker = if desc.is_current { '>' } else { ' ' };
        out.push_str(&format!("{} {}\n", marker, desc));
    }
    out
}

fn render_cell(cell: &CellView) -> String {
    let symbol = cell.square.symbol();
    if cell.highlighted {
        format!("[{}]", symbol)
    } else {
        format!(" {} ", symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_tictactoe::{GameState, Position::*};

    #[test]
    fn test_render_win() {
        let state = GameState::replay(&[TopLeft, Center, TopCenter, MiddleRight, TopRight]);
        let text = render(&GameView::from_state(&state));
        let expected = "\
[X]|[X]|[X]
---+---+---
   | O | O
---+---+---
   |   |

Winner: X

Moves (oldest first):
  Go to game start
  Go to move #1(1,1)
  Go to move #2(2,2)
  Go to move #3(2,1)
  Go to move #4(3,2)
> Go to move #5(3,1)
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_reversed_rewound() {
        let state = GameState::replay(&[Center, TopLeft]).jump_to(1).toggle_reverse();
        let text = render(&GameView::from_state(&state));
        assert!(text.contains("Next player: O"));
        let expected_moves = "\
Moves (newest first):
  Go to move #2(1,1)
> Go to move #1(2,2)
  Go to game start
";
        assert!(text.ends_with(expected_moves));
    }
}
