#![forbid(unsafe_code)]

//! Edge and corner directions.

/// One side of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Edge {
    North,
    East,
    South,
    West,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::North, Edge::East, Edge::South, Edge::West];

    /// The side facing this one.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }
}

/// One corner of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Corner {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::NorthWest,
        Corner::NorthEast,
        Corner::SouthWest,
        Corner::SouthEast,
    ];

    /// The diagonally opposite corner, which stays anchored while this one
    /// is dragged.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::NorthWest => Self::SouthEast,
            Self::NorthEast => Self::SouthWest,
            Self::SouthWest => Self::NorthEast,
            Self::SouthEast => Self::NorthWest,
        }
    }

    /// The edge this corner shares along its row (north or south).
    #[must_use]
    pub const fn vertical_edge(self) -> Edge {
        match self {
            Self::NorthWest | Self::NorthEast => Edge::North,
            Self::SouthWest | Self::SouthEast => Edge::South,
        }
    }

    /// The edge this corner shares along its column (west or east).
    #[must_use]
    pub const fn horizontal_edge(self) -> Edge {
        match self {
            Self::NorthWest | Self::SouthWest => Edge::West,
            Self::NorthEast | Self::SouthEast => Edge::East,
        }
    }
}
