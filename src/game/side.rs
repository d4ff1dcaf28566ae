use super::grid::Mark;

/// One of the two competing sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Red,
    Yellow,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Red, Side::Yellow];

    /// Get the other side
    pub fn other(self) -> Side {
        match self {
            Side::Red => Side::Yellow,
            Side::Yellow => Side::Red,
        }
    }

    /// The mark this side leaves on the grid
    pub fn to_mark(self) -> Mark {
        match self {
            Side::Red => Mark::Red,
            Side::Yellow => Mark::Yellow,
        }
    }

    /// Side name for display
    pub fn name(self) -> &'static str {
        match self {
            Side::Red => "Red",
            Side::Yellow => "Yellow",
        }
    }
}
