//! Board generation tests - fresh boards and seeded determinism

use rand::rngs::SmallRng;
use rand::SeedableRng;

use tile_cascade::core::{
    create_board, find_matches, has_match, swap, Board, EngineError, GridEngine, SimpleRng,
    TileSource,
};
use tile_cascade::types::Position;

#[test]
fn test_fresh_boards_are_filled_and_match_free() {
    for seed in 0..200u32 {
        let mut rng = SimpleRng::new(seed);
        let board = create_board(6, 6, &mut rng).unwrap();
        assert!(board.is_filled(), "seed {} left an empty cell", seed);
        assert!(board.is_settled());
        assert!(
            find_matches(&board).is_empty(),
            "seed {} produced a pre-matched board:\n{}",
            seed,
            board
        );
    }
}

#[test]
fn test_three_color_boards_terminate_and_are_clean() {
    for seed in 0..50u64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = create_board(8, 3, &mut rng).unwrap();
        assert!(!has_match(&board));
        assert!(board.cells().iter().all(|c| c.color.unwrap() < 3));
    }
}

#[test]
fn test_every_color_stays_in_palette() {
    let mut rng = SimpleRng::new(4242);
    let board = create_board(16, 16, &mut rng).unwrap();
    assert_eq!(board.size(), 16);
    assert!(board.cells().iter().all(|c| c.color.unwrap() < 16));
}

#[test]
fn test_create_board_is_deterministic() {
    let a = create_board(6, 6, &mut SimpleRng::new(12345)).unwrap();
    let b = create_board(6, 6, &mut SimpleRng::new(12345)).unwrap();
    assert_eq!(a, b);

    let c = create_board(6, 6, &mut SmallRng::seed_from_u64(12345)).unwrap();
    let d = create_board(6, 6, &mut SmallRng::seed_from_u64(12345)).unwrap();
    assert_eq!(c, d);
}

#[test]
fn test_swap_sequences_are_deterministic() {
    let swaps = [
        (Position::new(0, 0), Position::new(0, 1)),
        (Position::new(2, 3), Position::new(3, 3)),
        (Position::new(5, 4), Position::new(5, 5)),
        (Position::new(1, 1), Position::new(4, 4)),
    ];

    let play = |seed: u32| {
        let mut rng = SimpleRng::new(seed);
        let mut engine = GridEngine::new(6, 6, &mut rng).unwrap();
        let mut log = Vec::new();
        for &(a, b) in &swaps {
            let res = engine.swap(a, b, &mut rng).unwrap();
            log.push((res.accumulated_score, res.max_chain_depth, res.total_removed));
        }
        (engine.into_board(), log)
    };

    assert_eq!(play(777), play(777));
}

#[test]
fn test_random_swaps_always_return_a_board_at_rest() {
    let mut rng = SimpleRng::new(31337);
    let mut board = create_board(6, 6, &mut rng).unwrap();
    let mut pick = SimpleRng::new(99);

    for _ in 0..500 {
        let a = Position::new(pick.next_tile(6), pick.next_tile(6));
        let b = Position::new(pick.next_tile(6), pick.next_tile(6));
        let res = swap(&mut board, a, b, &mut rng).unwrap();

        assert!(res.final_board.is_filled());
        assert!(!has_match(&res.final_board));
        let expected: u32 = res
            .passes
            .iter()
            .map(|p| p.removed.len() as u32 * 10 * p.depth.min(5))
            .sum();
        assert_eq!(res.accumulated_score, expected);
    }
}

#[test]
fn test_out_of_bounds_is_rejected() {
    let mut rng = SimpleRng::new(8);
    let mut engine = GridEngine::new(6, 6, &mut rng).unwrap();
    let before = engine.board().clone();

    let err = engine
        .swap(Position::new(6, 6), Position::new(5, 5), &mut rng)
        .unwrap_err();
    assert!(matches!(err, EngineError::OutOfBounds { size: 6, .. }));
    assert_eq!(engine.board(), &before);
}

#[test]
fn test_invalid_dimensions_are_rejected() {
    let mut rng = SimpleRng::new(1);
    assert_eq!(create_board(2, 6, &mut rng), Err(EngineError::InvalidDimensions(2)));
    assert_eq!(create_board(17, 6, &mut rng), Err(EngineError::InvalidDimensions(17)));
    assert_eq!(create_board(6, 2, &mut rng), Err(EngineError::InvalidColorCount(2)));
    assert_eq!(create_board(6, 17, &mut rng), Err(EngineError::InvalidColorCount(17)));

    let ragged = vec![vec![0, 1, 2], vec![2, 0], vec![1, 2, 0]];
    assert!(matches!(
        Board::from_color_rows(&ragged, 3),
        Err(EngineError::InvalidBoard(_))
    ));
}
