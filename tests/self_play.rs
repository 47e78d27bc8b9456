use checkers_engine::{best_move, Board, GameState, Move, Player};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

const MAX_MOVES: usize = 400;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).with_test_writer().try_init();
}

fn total_pieces(board: &Board) -> u32 {
    let counts = board.piece_counts();
    counts.total(Player::Light) + counts.total(Player::Dark)
}

/// Applies `mov` and checks the invariants every legal move must uphold.
fn play_checked(board: &mut Board, mov: Move) -> GameState {
    let before = board.clone();
    assert!(before.legal_moves().contains(&mov), "{} is not legal", mov);
    assert!(before.squares()[mov.to().row][mov.to().col].is_empty());

    let state = board.apply_move(mov).unwrap();

    assert_eq!(total_pieces(board), total_pieces(&before) - mov.is_capture() as u32);
    assert_eq!(board.total_turns(), before.total_turns() + 1);
    assert_eq!(board.history().last(), Some(&mov));
    if mov.is_capture() {
        assert_eq!(board.current_player(), before.current_player());
    } else {
        assert_eq!(board.current_player(), before.current_player().opponent());
    }

    if let GameState::WonBy(winner) = state {
        let loser = winner.opponent();
        let out_of_pieces = board.piece_counts().total(loser) == 0;
        let out_of_moves = board.current_player() == loser && board.legal_moves().is_empty();
        assert!(out_of_pieces || out_of_moves, "{} won without a reason:\n{}", winner, board);
    }
    state
}

#[test]
fn evaluator_games_respect_the_rules() {
    init_tracing();
    for seed in 0..8 {
        let mut board = Board::from_seed(seed);
        for _ in 0..MAX_MOVES {
            let mov = best_move(&board).unwrap();
            assert_eq!(mov.player(), board.current_player());
            if play_checked(&mut board, mov).is_over() {
                break;
            }
        }
    }
}

#[test]
fn random_games_respect_the_rules() {
    init_tracing();
    let mut rng = ChaCha8Rng::seed_from_u64(0xC0FFEE);
    for _ in 0..16 {
        let mut board = Board::with_rng(&mut rng);
        for _ in 0..MAX_MOVES {
            let moves = board.legal_moves();
            let Some(mov) = moves.choose(&mut rng).copied() else {
                break;
            };
            if play_checked(&mut board, mov).is_over() {
                assert!(board.apply_move(mov).is_err());
                break;
            }
        }
    }
}

#[test]
fn history_replays_to_the_same_position() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut board = Board::with_rng(&mut rng);
    let start = board.clone();
    for _ in 0..40 {
        if board.state().is_over() {
            break;
        }
        let mov = best_move(&board).unwrap();
        board.apply_move(mov).unwrap();
    }

    let mut replay = start;
    for mov in board.history() {
        replay.apply_move(*mov).unwrap();
    }
    assert_eq!(replay, board);
}
