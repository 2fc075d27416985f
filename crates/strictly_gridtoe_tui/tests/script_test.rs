//! End-to-end tests for headless script mode.

use strictly_gridtoe::{Dimensions, Mark, Outcome, Status};
use strictly_gridtoe_tui::{GameConfig, parse_moves, render_text, run_script};

#[test]
fn test_rectangular_row_win() {
    let dims = GameConfig::default().resolve(Some(3), Some(4)).unwrap();
    let view = run_script(dims, &parse_moves("0,4,1,5,2,6,3").unwrap());
    assert_eq!(view.status(), &Status::Winner(Mark::X));
    assert_eq!(view.winning_cells(), vec![0, 1, 2, 3]);
}

#[test]
fn test_time_travel_then_branch() {
    let dims = Dimensions::new(3, 3);
    let view = run_script(dims, &parse_moves("0,1,2,j1,8").unwrap());
    assert_eq!(view.moves().len(), 3);
    assert_eq!(view.cursor(), &2);
    assert!(view.board().is_empty(1));
    assert!(!view.board().is_empty(8));
    assert_eq!(view.status(), &Status::NextPlayer(Mark::X));
}

#[test]
fn test_full_board_reports_draw_even_with_line() {
    // X completes row 0 with the move that also fills the board.
    let view = run_script(
        Dimensions::new(3, 3),
        &parse_moves("0,3,2,4,5,7,6,8,1").unwrap(),
    );
    assert_eq!(view.outcome(), &Outcome::Draw);
    assert!(render_text(&view).starts_with("Draw\n"));
}

#[test]
fn test_json_output_has_view_fields() {
    let view = run_script(Dimensions::new(4, 4), &parse_moves("5").unwrap());
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["cursor"], 1);
    assert_eq!(json["moves"].as_array().map(Vec::len), Some(2));
}
