use derive_more::Display;
use num_enum::{FromPrimitive, IntoPrimitive};
use std::ops::{Index, IndexMut};

#[derive(Debug, Display, Clone, Copy, Eq, PartialEq, Hash, FromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum Player {
    #[num_enum(default)]
    Light = 0,
    Dark,
}

impl Player {
    pub fn opponent(&self) -> Player {
        match self {
            Player::Light => Player::Dark,
            Player::Dark => Player::Light,
        }
    }
    /// Row delta of a forward step. Light advances toward row 0, Dark toward row 7.
    pub fn forward(&self) -> i32 {
        match self {
            Player::Light => -1,
            Player::Dark => 1,
        }
    }
    /// Row on which this player's men are crowned.
    pub fn promotion_row(&self) -> usize {
        match self {
            Player::Light => 0,
            Player::Dark => 7,
        }
    }
    /// Whether `row` lies in the opponent's half of the board.
    pub fn is_advanced(&self, row: usize) -> bool {
        match self {
            Player::Light => row < 4,
            Player::Dark => row > 3,
        }
    }
    pub fn all() -> [Player; 2] {
        [Player::Light, Player::Dark]
    }
}

#[derive(Debug, Display, Clone, Copy, Eq, PartialEq, Hash)]
pub enum PieceKind {
    Man,
    King,
}

/// Contents of a single square.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, IntoPrimitive)]
#[repr(u8)]
pub enum Square {
    #[default]
    Empty = 0,
    LightMan,
    DarkMan,
    LightKing,
    DarkKing,
}

impl Square {
    pub fn new(kind: PieceKind, player: Player) -> Square {
        match (kind, player) {
            (PieceKind::Man, Player::Light) => Square::LightMan,
            (PieceKind::Man, Player::Dark) => Square::DarkMan,
            (PieceKind::King, Player::Light) => Square::LightKing,
            (PieceKind::King, Player::Dark) => Square::DarkKing,
        }
    }
    pub fn player(&self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::LightMan | Square::LightKing => Some(Player::Light),
            Square::DarkMan | Square::DarkKing => Some(Player::Dark),
        }
    }
    pub fn kind(&self) -> Option<PieceKind> {
        match self {
            Square::Empty => None,
            Square::LightMan | Square::DarkMan => Some(PieceKind::Man),
            Square::LightKing | Square::DarkKing => Some(PieceKind::King),
        }
    }
    pub fn is_empty(&self) -> bool {
        matches!(self, Square::Empty)
    }
    pub fn is_king(&self) -> bool {
        matches!(self, Square::LightKing | Square::DarkKing)
    }
    pub fn belongs_to(&self, player: Player) -> bool {
        self.player() == Some(player)
    }
    /// Kings never demote, so promoting a king or an empty square is a no-op.
    pub fn promoted(&self) -> Square {
        match self {
            Square::LightMan => Square::LightKing,
            Square::DarkMan => Square::DarkKing,
            other => *other,
        }
    }
    pub fn to_char(&self) -> char {
        match self {
            Square::Empty => '.',
            Square::LightMan => 'l',
            Square::DarkMan => 'd',
            Square::LightKing => 'L',
            Square::DarkKing => 'D',
        }
    }
    pub fn from_char(c: char) -> Option<Square> {
        match c {
            '.' => Some(Square::Empty),
            'l' => Some(Square::LightMan),
            'd' => Some(Square::DarkMan),
            'L' => Some(Square::LightKing),
            'D' => Some(Square::DarkKing),
            _ => None,
        }
    }
    pub fn all() -> [Square; 5] {
        [Square::Empty, Square::LightMan, Square::DarkMan, Square::LightKing, Square::DarkKing]
    }
}

impl<T, const N: usize> Index<Player> for [T; N] {
    type Output = T;

    fn index(&self, index: Player) -> &Self::Output {
        &self[u8::from(index) as usize]
    }
}
impl<T, const N: usize> IndexMut<Player> for [T; N] {
    fn index_mut(&mut self, index: Player) -> &mut Self::Output {
        &mut self[u8::from(index) as usize]
    }
}

impl<T, const N: usize> Index<Square> for [T; N] {
    type Output = T;

    fn index(&self, index: Square) -> &Self::Output {
        &self[u8::from(index) as usize]
    }
}
impl<T, const N: usize> IndexMut<Square> for [T; N] {
    fn index_mut(&mut self, index: Square) -> &mut Self::Output {
        &mut self[u8::from(index) as usize]
    }
}
