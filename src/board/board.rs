use super::piece::{Player, Square};
use super::piece_move::Move;
use super::position::{Position, BOARD_SIZE};
use crate::error::{EngineError, Result};
use crate::move_generation::{has_legal_moves, legal_moves, MoveList};
use derive_more::Display;
use rand::{thread_rng, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;
use tracing::{debug, info};

pub type Grid = [[Square; BOARD_SIZE]; BOARD_SIZE];

#[derive(Debug, Default, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    #[default]
    #[display("Ongoing")]
    Ongoing,
    #[display("Won by {_0}")]
    WonBy(Player),
}

impl GameState {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameState::Ongoing)
    }
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameState::Ongoing => None,
            GameState::WonBy(player) => Some(*player),
        }
    }
}

/// Men and kings per player, always recomputed from a full scan of the grid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PieceCounts {
    men: [u32; 2],
    kings: [u32; 2],
}

impl PieceCounts {
    pub fn from_grid(grid: &Grid) -> PieceCounts {
        let mut by_square = [0u32; 5];
        for square in grid.iter().flatten() {
            by_square[*square] += 1;
        }
        PieceCounts {
            men: [by_square[Square::LightMan], by_square[Square::DarkMan]],
            kings: [by_square[Square::LightKing], by_square[Square::DarkKing]],
        }
    }
    pub fn men(&self, player: Player) -> u32 {
        self.men[player]
    }
    pub fn kings(&self, player: Player) -> u32 {
        self.kings[player]
    }
    pub fn total(&self, player: Player) -> u32 {
        self.men[player] + self.kings[player]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: Grid,
    current_player: Player,
    total_turns: u32,
    history: Vec<Move>,
    piece_counts: PieceCounts,
    state: GameState,
}

impl Board {
    pub const STARTING_LAYOUT: &'static str = "\
        d.d.d.d.
        .d.d.d.d
        d.d.d.d.
        ........
        ........
        .l.l.l.l
        l.l.l.l.
        .l.l.l.l";

    /// Starting position with the first player drawn from the thread-local generator.
    pub fn new() -> Self {
        Self::with_rng(&mut thread_rng())
    }
    pub fn with_rng<R: Rng>(rng: &mut R) -> Self {
        let first_player = Player::from(rng.gen_range(0..2u8));
        Self::from_grid(starting_grid(), first_player)
    }
    /// Reproducible starting position for a given seed.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(&mut ChaCha8Rng::seed_from_u64(seed))
    }

    /// Parses eight rows of eight cells: `.` empty, `l`/`L` light man/king,
    /// `d`/`D` dark man/king. Whitespace inside and around rows is ignored.
    pub fn from_layout(layout: &str, to_move: Player) -> Result<Self> {
        let rows: Vec<&str> = layout.lines().map(str::trim).filter(|line| !line.is_empty()).collect();
        if rows.len() != BOARD_SIZE {
            return Err(EngineError::InvalidLayout(format!("expected {} rows, found {}", BOARD_SIZE, rows.len())));
        }

        let mut grid = [[Square::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != BOARD_SIZE {
                return Err(EngineError::InvalidLayout(format!("row {} has {} squares", row, cells.len())));
            }
            for (col, cell) in cells.into_iter().enumerate() {
                let square = Square::from_char(cell).ok_or_else(|| EngineError::InvalidLayout(format!("unknown square '{}' at [{}, {}]", cell, row, col)))?;
                if !square.is_empty() && !(Position { row, col }).is_playable() {
                    return Err(EngineError::InvalidLayout(format!("piece on light square [{}, {}]", row, col)));
                }
                grid[row][col] = square;
            }
        }
        Ok(Self::from_grid(grid, to_move))
    }

    fn from_grid(squares: Grid, to_move: Player) -> Self {
        let mut board = Self {
            squares,
            current_player: to_move,
            total_turns: 1,
            history: Vec::new(),
            piece_counts: PieceCounts::from_grid(&squares),
            state: GameState::Ongoing,
        };
        board.state = board.terminal_state(to_move);
        board
    }

    pub fn squares(&self) -> &Grid {
        &self.squares
    }
    pub fn square(&self, row: i32, col: i32) -> Result<Square> {
        let position = Position::new(row, col)?;
        Ok(self.squares[position.row][position.col])
    }
    pub fn current_player(&self) -> Player {
        self.current_player
    }
    pub fn total_turns(&self) -> u32 {
        self.total_turns
    }
    /// Every applied move, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
    pub fn piece_counts(&self) -> PieceCounts {
        self.piece_counts
    }
    pub fn state(&self) -> GameState {
        self.state
    }
    pub fn legal_moves(&self) -> MoveList {
        legal_moves(&self.squares, self.current_player)
    }

    /// Plays `mov` for the current player and reports the resulting state.
    ///
    /// Moves that are not in [`Board::legal_moves`], or that name another
    /// player as the mover, are rejected and the board is left untouched.
    /// The turn passes to the opponent only after a non-capturing move; after
    /// a capture the same player moves again, whether or not another jump is
    /// available.
    pub fn apply_move(&mut self, mov: Move) -> Result<GameState> {
        if self.state.is_over() {
            return Err(EngineError::InvalidState("the game is already over"));
        }
        if mov.player() != self.current_player || !self.legal_moves().contains(&mov) {
            return Err(EngineError::InvalidMove(mov));
        }

        make_move(&mut self.squares, mov);
        self.history.push(mov);
        self.total_turns += 1;
        if !mov.is_capture() {
            self.current_player = self.current_player.opponent();
        }

        self.piece_counts = PieceCounts::from_grid(&self.squares);
        self.state = self.terminal_state(mov.player());

        debug!(%mov, turn = self.total_turns, next = %self.current_player, state = %self.state, "move applied");
        if let GameState::WonBy(winner) = self.state {
            info!(%winner, turns = self.total_turns, "game over");
        }
        Ok(self.state)
    }

    // Material is checked before mobility, the mover's side first.
    fn terminal_state(&self, mover: Player) -> GameState {
        for player in [mover, mover.opponent()] {
            if self.piece_counts.total(player) == 0 {
                return GameState::WonBy(player.opponent());
            }
        }
        if !has_legal_moves(&self.squares, self.current_player) {
            return GameState::WonBy(self.current_player.opponent());
        }
        GameState::Ongoing
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Relocates the moving piece on `grid`, removing a jumped piece and crowning
/// a man that reaches its far row. Coordinates must be on the board; legality
/// is not checked.
pub(crate) fn make_move(grid: &mut Grid, mov: Move) {
    let (from, to) = (mov.from(), mov.to());
    let piece = grid[from.row][from.col];

    grid[to.row][to.col] = match piece.player() {
        Some(player) if to.row == player.promotion_row() => piece.promoted(),
        _ => piece,
    };
    grid[from.row][from.col] = Square::Empty;

    if let Some(jumped) = mov.captured_position() {
        grid[jumped.row][jumped.col] = Square::Empty;
    }
}

fn starting_grid() -> Grid {
    let mut grid = [[Square::Empty; BOARD_SIZE]; BOARD_SIZE];
    for position in Position::all().filter(Position::is_playable) {
        grid[position.row][position.col] = match position.row {
            0..=2 => Square::DarkMan,
            5..=7 => Square::LightMan,
            _ => Square::Empty,
        };
    }
    grid
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Turn {}: {} to move", self.total_turns, self.current_player)?;
        for (row, squares) in self.squares.iter().enumerate() {
            write!(f, "{}", row)?;
            for square in squares {
                write!(f, " {}", square.to_char())?;
            }
            writeln!(f)?;
        }
        write!(f, " ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {}", col)?;
        }
        Ok(())
    }
}
