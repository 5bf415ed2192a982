//! Octi actions.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::coretypes::Point;
use crate::error::{self, ErrorKind};
use crate::state::Action;

/// An action moves one pod. A step moves to an adjacent empty cell,
/// a jump moves over an adjacent pod onto the empty cell directly beyond it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum OctiAction {
    Step { from: Point, to: Point },
    Jump { from: Point, over: Point, to: Point },
}

impl OctiAction {
    pub const fn step(from: Point, to: Point) -> Self {
        Self::Step { from, to }
    }

    /// Create a jump from `from` to `to`. The jumped cell is the midpoint of the two.
    pub const fn jump(from: Point, to: Point) -> Self {
        let over = Point::new((from.x + to.x) / 2, (from.y + to.y) / 2);
        Self::Jump { from, over, to }
    }

    pub const fn from(&self) -> Point {
        match self {
            Self::Step { from, .. } | Self::Jump { from, .. } => *from,
        }
    }

    pub const fn to(&self) -> Point {
        match self {
            Self::Step { to, .. } | Self::Jump { to, .. } => *to,
        }
    }
}

impl Action for OctiAction {
    fn is_jump(&self) -> bool {
        matches!(self, Self::Jump { .. })
    }
}

/// Steps display as `x,y>x,y` and jumps as `x,y*x,y`.
impl Display for OctiAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Step { from, to } => write!(f, "{from}>{to}"),
            Self::Jump { from, to, .. } => write!(f, "{from}*{to}"),
        }
    }
}

impl FromStr for OctiAction {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        let s = s.trim();
        let (from, to, is_jump) = if let Some((from, to)) = s.split_once('>') {
            (from, to, false)
        } else if let Some((from, to)) = s.split_once('*') {
            (from, to, true)
        } else {
            return Err((ErrorKind::ParseActionMalformed, "expected x,y>x,y or x,y*x,y").into());
        };

        let from: Point = from.parse()?;
        let to: Point = to.parse()?;
        let dx = (to.x - from.x).abs();
        let dy = (to.y - from.y).abs();

        if is_jump {
            let straight = (dx == 2 || dx == 0) && (dy == 2 || dy == 0) && dx + dy > 0;
            if !straight {
                return Err((ErrorKind::ParseActionMalformed, "jump must travel two cells in a line").into());
            }
            Ok(Self::jump(from, to))
        } else {
            if dx > 1 || dy > 1 || dx + dy == 0 {
                return Err((ErrorKind::ParseActionMalformed, "step must travel one cell").into());
            }
            Ok(Self::step(from, to))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jump_midpoint() {
        let action = OctiAction::jump(Point::new(1, 1), Point::new(3, 3));
        assert_eq!(
            action,
            OctiAction::Jump {
                from: Point::new(1, 1),
                over: Point::new(2, 2),
                to: Point::new(3, 3)
            }
        );
        assert!(action.is_jump());
        assert!(!OctiAction::step(Point::new(1, 1), Point::new(1, 2)).is_jump());
    }

    #[test]
    fn parse_and_display() {
        let step: OctiAction = "1,1>1,2".parse().unwrap();
        assert_eq!(step, OctiAction::step(Point::new(1, 1), Point::new(1, 2)));
        assert_eq!(step.to_string(), "1,1>1,2");

        let jump: OctiAction = "2,1*4,3".parse().unwrap();
        assert_eq!(jump, OctiAction::jump(Point::new(2, 1), Point::new(4, 3)));
        assert_eq!(jump.to_string(), "2,1*4,3");
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!("1,1-1,2".parse::<OctiAction>().is_err());
        assert!("1,1>1,3".parse::<OctiAction>().is_err());
        assert!("1,1>1,1".parse::<OctiAction>().is_err());
        assert!("1,1*2,2".parse::<OctiAction>().is_err());
        assert!("1,1*3,2".parse::<OctiAction>().is_err());
        assert_eq!(
            "x>1,2".parse::<OctiAction>().unwrap_err().kind(),
            ErrorKind::ParsePointMalformed
        );
    }
}
