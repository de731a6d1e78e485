use std::collections::HashSet;

use gridmark_core::{
    Annotations, Board, Cell, CellIndex, Coord, DragState, EditAction, Grid, GridError, MarkKind,
    PointerButton, PointerEvent,
};

#[test]
fn test_every_coordinate_round_trips() {
    let grid = Grid::new(9, 9);
    let mut keys = HashSet::new();
    for coord in grid.coords() {
        let key = CellIndex::encode(coord);
        assert_eq!(key.decode(), coord);
        assert!(keys.insert(key));
    }
    assert_eq!(keys.len(), 81);
}

#[test]
fn test_annotation_order_contract() {
    let mut marks = Annotations::new();
    for mark in ["3", "1", "2"] {
        marks.add(mark);
    }
    assert_eq!(marks.get(), vec!["1", "2", "3"]);
    assert_eq!(marks.get(), marks.get());
}

#[test]
fn test_clear_all_visits_every_cell_once() {
    let mut grid = Grid::new(9, 9);
    let mut visited = HashSet::new();
    for (coord, cell) in grid.cells_mut() {
        assert!(visited.insert(coord));
        cell.set_value("1");
        cell.corner_marks.add("2");
    }
    assert_eq!(visited.len(), 81);

    grid.clear_all();
    let once = grid.get_all_cells();
    grid.clear_all();

    assert_eq!(grid.get_all_cells(), once);
    assert!(once.iter().all(Cell::is_empty));
}

#[test]
fn test_fixed_cell_clear() {
    let mut grid = Grid::new(9, 9);
    let mut given = Cell::fixed("5");
    given.centre_marks.add("1");
    grid.set_cell(4, 4, given).unwrap();

    grid.get_cell_mut(4, 4).unwrap().clear();

    let cell = grid.get_cell(4, 4).unwrap();
    assert_eq!(cell.value(), "5");
    assert!(cell.centre_marks.is_empty());
}

#[test]
fn test_row_snapshot_survives_mutation() {
    let mut grid = Grid::new(9, 9);
    grid.get_cell_mut(2, 0).unwrap().set_value("4");

    let row = grid.get_row(2).unwrap();
    grid.get_cell_mut(2, 0).unwrap().set_value("6");
    grid.get_cell_mut(2, 1).unwrap().colours.add("blue");

    assert_eq!(row[0].value(), "4");
    assert!(row[1].colours.is_empty());
}

#[test]
fn test_out_of_bounds_addresses_fail() {
    let grid = Grid::new(9, 9);
    assert!(matches!(
        grid.get_cell(-1, 0),
        Err(GridError::OutOfBounds { row: -1, .. })
    ));
    assert!(matches!(
        grid.get_cell(9, 0),
        Err(GridError::OutOfBounds { row: 9, .. })
    ));
}

#[test]
fn test_drag_gesture_then_fresh_gesture() {
    let mut board = Board::with_size(9, 9);
    let script = [
        PointerEvent::Down {
            button: PointerButton::PRIMARY,
            row: 0,
            col: 0,
        },
        PointerEvent::Move { row: 0, col: 1 },
        PointerEvent::Move { row: 1, col: 1 },
        PointerEvent::Up {
            button: PointerButton::PRIMARY,
        },
    ];
    for event in script {
        board.handle_pointer(event);
    }

    let selected: HashSet<Coord> = board.selection().iter().collect();
    let expected: HashSet<Coord> = [Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 1)]
        .into_iter()
        .collect();
    assert_eq!(selected, expected);
    assert_eq!(board.selection().drag_state(), DragState::Idle);

    board.pointer_down(PointerButton::PRIMARY, 7, 7);
    assert_eq!(board.selection().iter().collect::<Vec<_>>(), vec![Coord::new(7, 7)]);
}

#[test]
fn test_drag_leaving_the_board_still_cleans_up() {
    let mut board = Board::with_size(9, 9);
    board.pointer_down(PointerButton::PRIMARY, 8, 7);
    board.pointer_move(8, 8);
    board.pointer_move(9, 9);
    board.pointer_move(-4, 12);
    board.pointer_up(PointerButton::PRIMARY);

    assert_eq!(board.selection().len(), 2);
    assert!(!board.listeners().is_listening());
    assert_eq!(board.listeners().released_count(), 1);
}

#[test]
fn test_scripted_session_from_json() {
    let events: Vec<PointerEvent> = serde_json::from_str(
        r#"[
            {"type": "down", "button": 0, "row": 3, "col": 3},
            {"type": "move", "row": 3, "col": 4},
            {"type": "up", "button": 2},
            {"type": "move", "row": 3, "col": 5},
            {"type": "up", "button": 0},
            {"type": "move", "row": 3, "col": 6}
        ]"#,
    )
    .unwrap();

    let mut board = Board::default();
    for event in events {
        board.handle_pointer(event);
    }

    // The secondary-button release is ignored, the trailing move arrives after the gesture
    assert_eq!(
        board.selection().iter().collect::<Vec<_>>(),
        vec![Coord::new(3, 3), Coord::new(3, 4), Coord::new(3, 5)]
    );

    let actions: Vec<EditAction> = serde_json::from_str(
        r#"[
            {"type": "setValue", "args": "8"},
            {"type": "toggleMark", "args": ["corner", "1"]}
        ]"#,
    )
    .unwrap();
    for action in actions {
        board.apply(action);
    }

    let cell = board.grid().get_cell(3, 5).unwrap();
    assert_eq!(cell.value(), "8");
    assert_eq!(cell.marks(MarkKind::Corner).get(), vec!["1"]);
    assert!(board.grid().get_cell(3, 6).unwrap().is_empty());
}
