use std::fmt;
use std::str::FromStr;

/// One of the eight compass directions the marker can travel in.
///
/// Rows grow towards the south and columns towards the east, so `N` is
/// `(-1, 0)` and `SE` is `(+1, +1)`. The discriminant is the bit position
/// the direction occupies in an [`EdgeMask`](crate::edge_mask::EdgeMask):
///
/// ```text
///   NW(5)  N(0)  NE(4)
///       \   |   /
///  W(3) -- cell -- E(2)
///       /   |   \
///   SW(7)  S(1)  SE(6)
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    N = 0,
    S = 1,
    E = 2,
    W = 3,
    NE = 4,
    NW = 5,
    SE = 6,
    SW = 7,
}

impl Direction {
    /// All directions in canonical order.
    ///
    /// This order is used for option listing and as the tie-break order of the search.
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::S,
        Direction::E,
        Direction::W,
        Direction::NE,
        Direction::NW,
        Direction::SE,
        Direction::SW,
    ];

    /// Returns the single-bit mask of this direction.
    #[inline(always)]
    pub const fn bit(self) -> u8 {
        1 << self as u8
    }

    /// Returns the bit position (0..8) of this direction.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Converts a bit position back into a direction.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Direction> {
        if index < 8 {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Returns the `(row, col)` offset of one step in this direction.
    #[inline]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::N => (-1, 0),
            Direction::S => (1, 0),
            Direction::E => (0, 1),
            Direction::W => (0, -1),
            Direction::NE => (-1, 1),
            Direction::NW => (-1, -1),
            Direction::SE => (1, 1),
            Direction::SW => (1, -1),
        }
    }

    /// Returns the direction pointing back along the same edge.
    #[inline]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::N => Direction::S,
            Direction::S => Direction::N,
            Direction::E => Direction::W,
            Direction::W => Direction::E,
            Direction::NE => Direction::SW,
            Direction::NW => Direction::SE,
            Direction::SE => Direction::NW,
            Direction::SW => Direction::NE,
        }
    }

    /// Returns the numeric keypad digit that points the same way.
    ///
    /// ```text
    /// 7 8 9
    /// 4 . 6
    /// 1 2 3
    /// ```
    pub const fn numpad_key(self) -> char {
        match self {
            Direction::N => '8',
            Direction::S => '2',
            Direction::E => '6',
            Direction::W => '4',
            Direction::NE => '9',
            Direction::NW => '7',
            Direction::SE => '3',
            Direction::SW => '1',
        }
    }

    /// Maps a numeric keypad digit to a direction.
    pub fn from_numpad_key(key: char) -> Option<Direction> {
        Self::ALL.into_iter().find(|dir| dir.numpad_key() == key)
    }

    /// Returns the short upper-case name, e.g. `"NE"`.
    pub const fn name(self) -> &'static str {
        match self {
            Direction::N => "N",
            Direction::S => "S",
            Direction::E => "E",
            Direction::W => "W",
            Direction::NE => "NE",
            Direction::NW => "NW",
            Direction::SE => "SE",
            Direction::SW => "SW",
        }
    }
}

/// Error returned when a string does not name a direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseDirectionError {
    /// Empty input
    Empty,
    /// Neither a compass name nor a keypad digit
    Unknown(String),
}

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseDirectionError::Empty => write!(f, "Empty direction"),
            ParseDirectionError::Unknown(s) => write!(
                f,
                "Unknown direction '{s}': use n, s, e, w, ne, nw, se, sw or a keypad digit"
            ),
        }
    }
}

impl std::error::Error for ParseDirectionError {}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Parses a compass name (`"ne"`, `"north"`, `"South-West"`, ...) or a
    /// numeric keypad digit (`"9"`). Case is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseDirectionError::Empty);
        }

        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next())
            && let Some(dir) = Direction::from_numpad_key(c)
        {
            return Ok(dir);
        }

        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "n" | "north" => Ok(Direction::N),
            "s" | "south" => Ok(Direction::S),
            "e" | "east" => Ok(Direction::E),
            "w" | "west" => Ok(Direction::W),
            "ne" | "northeast" => Ok(Direction::NE),
            "nw" | "northwest" => Ok(Direction::NW),
            "se" | "southeast" => Ok(Direction::SE),
            "sw" | "southwest" => Ok(Direction::SW),
            _ => Err(ParseDirectionError::Unknown(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
