//! The fundamental and simple types of `octi_engine`.

use std::fmt::{self, Display, Write};
use std::ops::{Add, AddAssign, Mul, Neg, Not, Sub, SubAssign};
use std::str::FromStr;
use std::time::Duration;

use crate::error::{self, ErrorKind};

///////////////
// Constants //
///////////////

// The greatest depth reachable for the engine during search.
// This also expresses the maximum number of actions that can be in a line.
pub const MAX_DEPTH: PlyKind = 32;

// Depth limit used by iterative deepening when none is configured.
pub const DEFAULT_MAX_DEPTH: PlyKind = 5;

// Time reserved at the end of a decision for the recursion to unwind.
pub const DEFAULT_BUFFER: Duration = Duration::from_millis(30);

/////////////////////////
// Data and Structures //
/////////////////////////

/// Type alias for max ply/depth.
pub type PlyKind = u8;

// Type alias to make changing Score inner type easy if needed.
pub type ScoreKind = i32;

/// Score of a position from the point of view of the searching player.
/// Positive values favor the searching player, negative values its opponent.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct Score(pub ScoreKind);

/// Color identifies a player, and the pods and base that belong to it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Color {
    Red,
    Black,
}

/// A cell coordinate on the board. `x` is the column and `y` the row.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

//////////////////////
/// Implementations //
//////////////////////

impl Score {
    /// Score of a position the searching player has already won.
    pub const WIN: Score = Self(100_000_000);
    /// Score of a position the opponent has already won.
    pub const LOSS: Score = Self(-100_000_000);
    pub const MIN: Score = Self(-ScoreKind::MAX); // Symmetric with MAX so negation never overflows.
    pub const MAX: Score = Self(ScoreKind::MAX);

    pub const fn new(value: ScoreKind) -> Self {
        Self(value)
    }

    /// Returns the sign of the Score, either 1, -1, or 0.
    pub const fn signum(&self) -> ScoreKind {
        self.0.signum()
    }

    /// Returns true if the score is a proven win or loss rather than a heuristic.
    pub const fn is_decisive(&self) -> bool {
        self.0 >= Self::WIN.0 || self.0 <= Self::LOSS.0
    }
}

impl Add for Score {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}
impl AddAssign for Score {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0
    }
}
impl Sub for Score {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}
impl SubAssign for Score {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0
    }
}
impl Mul<ScoreKind> for Score {
    type Output = Score;
    fn mul(self, rhs: ScoreKind) -> Self::Output {
        Self(self.0 * rhs)
    }
}
impl Neg for Score {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}
impl Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:+}", self.0)
    }
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Red, Color::Black];

    pub const fn to_char(&self) -> char {
        match self {
            Color::Red => 'r',
            Color::Black => 'b',
        }
    }
}

impl Not for Color {
    type Output = Self;
    fn not(self) -> Self::Output {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

impl Not for &Color {
    type Output = Color;
    fn not(self) -> Self::Output {
        Color::not(*self)
    }
}

impl From<Color> for char {
    fn from(color: Color) -> Self {
        color.to_char()
    }
}

impl TryFrom<char> for Color {
    type Error = error::Error;
    fn try_from(ch: char) -> error::Result<Self> {
        match ch {
            'r' => Ok(Color::Red),
            'b' => Ok(Color::Black),
            _ => Err((ErrorKind::ParseColorMalformed, "char is not r|b").into()),
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char(char::from(*self))
    }
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan (L1) distance between two cells.
    pub const fn manhattan(&self, other: &Point) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Point {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        let (x, y) = s
            .split_once(',')
            .ok_or((ErrorKind::ParsePointMalformed, "expected x,y"))?;
        let x = x
            .trim()
            .parse()
            .map_err(|err| error::Error::new(ErrorKind::ParsePointMalformed, err))?;
        let y = y
            .trim()
            .parse()
            .map_err(|err| error::Error::new(ErrorKind::ParsePointMalformed, err))?;
        Ok(Self::new(x, y))
    }
}
