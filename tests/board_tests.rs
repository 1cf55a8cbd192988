//! Board tests - grid, seed state and the shift algorithm

use tetris_board::core::{next_piece, Board, Piece, SimpleRng, J_PIECE};
use tetris_board::types::{
    CellChange, Direction, Rgb, BOARD_HEIGHT, BOARD_WIDTH, PIECE_MASK_LEN, SPAWN_POSITION,
};

fn spawned_board(at: (i8, i8)) -> Board {
    let mut board = Board::new();
    board.spawn_piece(next_piece(), at);
    board
}

fn all_cells() -> impl Iterator<Item = (i8, i8)> {
    (0..BOARD_HEIGHT as i8).flat_map(|y| (0..BOARD_WIDTH as i8).map(move |x| (x, y)))
}

#[test]
fn test_seed_state() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    assert_eq!(board.get(0, 0), Some(Some(Rgb::RED)));
    assert_eq!(board.get(1, 0), Some(Some(Rgb::CYAN)));
    assert_eq!(board.get(2, 0), Some(Some(Rgb::YELLOW)));
    assert_eq!(board.get(3, 0), Some(Some(Rgb::RED)));

    for (x, y) in all_cells() {
        if y == 0 && x < 4 {
            continue;
        }
        assert_eq!(board.get(x, y), Some(None), "cell ({}, {}) should be empty", x, y);
    }
    assert!(board.active_piece().is_none());
}

#[test]
fn test_get_and_set_out_of_bounds() {
    let mut board = Board::new();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
    assert!(!board.set(BOARD_WIDTH as i8, 0, Some(Rgb::RED)));
    assert!(!board.set(0, -1, Some(Rgb::RED)));

    assert!(board.set(9, 19, Some(Rgb::CYAN)));
    assert_eq!(board.get(9, 19), Some(Some(Rgb::CYAN)));
    assert!(board.set(9, 19, None));
    assert_eq!(board.get(9, 19), Some(None));
}

#[test]
fn test_spawn_paints_nothing_until_first_shift() {
    let board = spawned_board(SPAWN_POSITION);
    assert_eq!(board.snapshot(), Board::new().snapshot());
    assert_eq!(board.position(), SPAWN_POSITION);
}

#[test]
fn test_spawn_scenario_paints_mask_cells() {
    let at = (3, 8);
    let mut board = spawned_board(at);
    let before = board.clone();
    board.shift_piece(0, 0).unwrap();

    let piece = next_piece();
    for i in 0..PIECE_MASK_LEN {
        let (px, py) = ((i % 4) as i8, (i / 4) as i8);
        let (x, y) = (at.0 + px, at.1 + py);
        if [0, 4, 8, 9].contains(&i) {
            assert_eq!(board.get(x, y), Some(Some(piece.color())), "mask cell {}", i);
        } else {
            assert_eq!(board.get(x, y), before.get(x, y), "box cell {}", i);
        }
    }
}

#[test]
fn test_first_gravity_shift_from_spawn() {
    let mut board = spawned_board(SPAWN_POSITION);
    let changes = board.shift_piece(0, -1).unwrap();
    let blue = Some(Rgb::DARK_BLUE);

    assert_eq!(
        changes.as_slice(),
        &[
            CellChange::new(5, 17, blue),
            CellChange::new(5, 18, blue),
            CellChange::new(5, 19, blue),
            CellChange::new(6, 19, blue),
        ]
    );
    assert_eq!(board.lowest_piece_y(), Some(17));
}

#[test]
fn test_zero_shift_is_idempotent() {
    let mut board = spawned_board((4, 6));
    board.shift_piece(0, -1).unwrap();
    let before = board.clone();

    let changes = board.shift_piece(0, 0).unwrap();
    assert!(changes.is_empty());
    assert_eq!(board, before);
}

#[test]
fn test_clear_phase_reported_before_fill_phase() {
    let mut board = spawned_board((4, 10));
    board.shift_piece(0, 0).unwrap();

    let changes = board.handle_input(Direction::Right).unwrap();
    let blue = Some(Rgb::DARK_BLUE);
    assert_eq!(
        changes.as_slice(),
        &[
            CellChange::new(4, 10, None),
            CellChange::new(4, 11, None),
            CellChange::new(4, 12, None),
            CellChange::new(5, 10, blue),
            CellChange::new(5, 11, blue),
            CellChange::new(6, 12, blue),
        ]
    );
}

#[test]
fn test_overlap_is_not_double_reported() {
    // Every shift after the first: emptied footprint cells = old footprint
    // minus cells the new footprint still covers.
    let mut rng = SimpleRng::new(2024);
    let mut board = spawned_board((4, 9));
    board.shift_piece(0, 0).unwrap();

    for _ in 0..300 {
        let dx = rng.next_range(3) as i8 - 1;
        let dy = rng.next_range(3) as i8 - 1;

        let old: Vec<(i8, i8)> = board
            .footprint()
            .into_iter()
            .filter(|&(x, y)| !board.is_out_of_bounds(x, y))
            .collect();
        let changes = board.shift_piece(dx, dy).unwrap();
        let new = board.footprint();

        let still_covered = old.iter().filter(|c| new.contains(c)).count();
        let emptied = changes
            .iter()
            .filter(|c| c.color.is_none() && old.contains(&(c.x, c.y)))
            .count();
        assert_eq!(emptied, old.len() - still_covered, "shift ({}, {})", dx, dy);

        // Each cell at most once per batch
        for (i, a) in changes.iter().enumerate() {
            assert!(changes.iter().skip(i + 1).all(|b| (a.x, a.y) != (b.x, b.y)));
        }
    }
}

#[test]
fn test_out_of_bounds_never_reported() {
    let mut rng = SimpleRng::new(7);
    let mut board = spawned_board((8, 18));

    for _ in 0..300 {
        let dx = rng.next_range(3) as i8 - 1;
        let dy = rng.next_range(3) as i8 - 1;
        let changes = board.shift_piece(dx, dy).unwrap();
        for c in &changes {
            assert!((0..BOARD_WIDTH as i8).contains(&c.x), "x out of range: {:?}", c);
            assert!((0..BOARD_HEIGHT as i8).contains(&c.y), "y out of range: {:?}", c);
        }
    }
}

#[test]
fn test_left_edge_shift_clips_without_wrapping() {
    let mut board = spawned_board((0, 10));
    board.shift_piece(0, 0).unwrap();

    let changes = board.handle_input(Direction::Left).unwrap();
    assert_eq!(board.position(), (-1, 10));
    assert!(changes.iter().all(|c| c.x >= 0));

    // Only the foot at x=0 survives; nothing wrapped to the right edge
    assert_eq!(board.get(0, 12), Some(Some(Rgb::DARK_BLUE)));
    assert_eq!(board.get(0, 10), Some(None));
    for y in 0..BOARD_HEIGHT as i8 {
        assert_eq!(board.get(9, y), Some(None));
    }
}

/// Hold one direction far past the wall; the origin saturates and every
/// batch stays on the board.
fn hold_direction(direction: Direction, presses: usize) -> Board {
    let mut board = spawned_board(SPAWN_POSITION);
    board.shift_piece(0, -1).unwrap();

    for press in 1..=presses {
        let changes = board.handle_input(direction).unwrap();
        for c in &changes {
            assert!(
                !board.is_out_of_bounds(c.x, c.y),
                "press #{} reported {:?}",
                press,
                c
            );
        }
    }
    board
}

#[test]
fn test_sustained_left_saturates_origin() {
    let mut board = hold_direction(Direction::Left, 200);
    assert_eq!(board.position(), (i8::MIN, 17));
    // Walked off the left edge without disturbing the seeds
    assert_eq!(board.snapshot(), Board::new().snapshot());
    assert!(board.handle_input(Direction::Left).unwrap().is_empty());

    // Still controllable after saturating
    board.handle_input(Direction::Right).unwrap();
    assert_eq!(board.position(), (i8::MIN + 1, 17));
}

#[test]
fn test_sustained_right_saturates_origin() {
    let board = hold_direction(Direction::Right, 200);
    assert_eq!(board.position(), (i8::MAX, 17));
    assert_eq!(board.snapshot(), Board::new().snapshot());
}

#[test]
fn test_sustained_down_saturates_origin() {
    let mut board = hold_direction(Direction::Down, 200);
    assert_eq!(board.position(), (5, i8::MIN));
    assert_eq!(board.snapshot(), Board::new().snapshot());
    assert!(board.handle_input(Direction::Down).unwrap().is_empty());
}

#[test]
fn test_bottom_edge_shift_clips() {
    let mut board = Board::empty();
    board.spawn_piece(J_PIECE, (6, 0));
    board.shift_piece(0, 0).unwrap();

    let changes = board.handle_input(Direction::Down).unwrap();
    assert!(changes.iter().all(|c| c.y >= 0));
    assert_eq!(board.get(6, 0), Some(Some(Rgb::DARK_BLUE)));
    assert_eq!(board.get(6, 1), Some(Some(Rgb::DARK_BLUE)));
    assert_eq!(board.get(7, 1), Some(Some(Rgb::DARK_BLUE)));
    assert_eq!(board.get(6, 2), Some(None));
}

#[test]
fn test_piece_overwrites_seed_cells() {
    // No collision: the empty part of the box wipes whatever it covers.
    let mut board = spawned_board((0, 2));
    board.shift_piece(0, 0).unwrap();

    let changes = board.shift_piece(0, -2).unwrap();
    assert_eq!(board.get(0, 0), Some(Some(Rgb::DARK_BLUE)));
    assert_eq!(board.get(1, 0), Some(None));
    assert_eq!(board.get(2, 0), Some(None));
    assert_eq!(board.get(3, 0), Some(None));
    assert!(changes.as_slice().contains(&CellChange::new(1, 0, None)));
}

#[test]
fn test_handle_input_directions() {
    let mut board = spawned_board((4, 10));
    board.shift_piece(0, 0).unwrap();

    board.handle_input(Direction::Left).unwrap();
    assert_eq!(board.position(), (3, 10));
    board.handle_input(Direction::Right).unwrap();
    board.handle_input(Direction::Right).unwrap();
    assert_eq!(board.position(), (5, 10));
    board.handle_input(Direction::Down).unwrap();
    assert_eq!(board.position(), (5, 9));
}

#[test]
fn test_custom_piece_shift() {
    let mut mask = [false; PIECE_MASK_LEN];
    mask[5] = true;
    let dot = Piece::new(mask, Rgb::YELLOW);

    let mut board = Board::empty();
    board.spawn_piece(dot, (2, 2));
    let changes = board.shift_piece(1, 1).unwrap();
    assert_eq!(changes.as_slice(), &[CellChange::new(4, 4, Some(Rgb::YELLOW))]);
}

#[test]
fn test_repaint_reports_only_changed_cells() {
    let mut board = Board::new();
    let changes = board.repaint_with(|x, y| if y == 0 && x == 0 { Some(Rgb::RED) } else { None });

    // (0,0) was already red; the other three seeds are cleared
    assert_eq!(
        changes.as_slice(),
        &[
            CellChange::new(1, 0, None),
            CellChange::new(2, 0, None),
            CellChange::new(3, 0, None),
        ]
    );

    // Checkerboard: every even cell changes to cyan, including the red (0,0)
    let changes = board.repaint_with(checkerboard);
    assert_eq!(changes.len(), 100);
    assert!(changes.iter().all(|c| c.color == Some(Rgb::CYAN)));
}

fn checkerboard(x: i8, y: i8) -> Option<Rgb> {
    if (x + y) % 2 == 0 {
        Some(Rgb::CYAN)
    } else {
        None
    }
}
