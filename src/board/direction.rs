use crate::board::piece::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    DownRight,
    UpRight,
    DownLeft,
    UpLeft,
}

impl Direction {
    /// (row, column) delta of a single step.
    pub const fn value(self) -> (i32, i32) {
        match self {
            Direction::DownRight => (1, 1),
            Direction::UpRight => (-1, 1),
            Direction::DownLeft => (1, -1),
            Direction::UpLeft => (-1, -1),
        }
    }
    /// Diagonals in move generation order.
    pub const fn all() -> [Direction; 4] {
        [Direction::DownRight, Direction::UpRight, Direction::DownLeft, Direction::UpLeft]
    }
    pub fn is_forward(self, player: Player) -> bool {
        self.value().0 == player.forward()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_depends_on_player() {
        assert!(Direction::UpLeft.is_forward(Player::Light));
        assert!(Direction::UpRight.is_forward(Player::Light));
        assert!(!Direction::DownLeft.is_forward(Player::Light));
        assert!(Direction::DownRight.is_forward(Player::Dark));
        assert!(!Direction::UpRight.is_forward(Player::Dark));
    }
}
