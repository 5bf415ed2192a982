//! Octi game state and rules.

use std::fmt::{self, Display};

use arrayvec::ArrayVec;

use crate::coretypes::{Color, Point};
use crate::error::{self, ErrorKind};
use crate::octi::OctiAction;
use crate::state::GameState;

pub const WIDTH: i32 = 6;
pub const HEIGHT: i32 = 7;

// The most pods that can ever be on a board.
pub const MAX_PODS: usize = 16;

pub static RED_BASE: [Point; 4] = [
    Point::new(1, 1),
    Point::new(2, 1),
    Point::new(3, 1),
    Point::new(4, 1),
];

pub static BLACK_BASE: [Point; 4] = [
    Point::new(1, 5),
    Point::new(2, 5),
    Point::new(3, 5),
    Point::new(4, 5),
];

// N, NE, E, SE, S, SW, W, NW.
const DIRECTIONS: [Point; 8] = [
    Point::new(0, 1),
    Point::new(1, 1),
    Point::new(1, 0),
    Point::new(1, -1),
    Point::new(0, -1),
    Point::new(-1, -1),
    Point::new(-1, 0),
    Point::new(-1, 1),
];

/// A pod on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Pod {
    pub color: Color,
    pub id: u8,
    pub position: Point,
}

impl Pod {
    pub const fn new(color: Color, id: u8, position: Point) -> Self {
        Self {
            color,
            id,
            position,
        }
    }
}

/// A complete Octi position: every pod on the board, the player to move,
/// and the winner if the game is decided.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct OctiState {
    pods: ArrayVec<Pod, MAX_PODS>,
    player: Color,
    winner: Option<Color>,
}

impl OctiState {
    /// The standard start position. Each player has four pods on its own base and Red moves first.
    pub fn start_position() -> Self {
        let red: Vec<(i32, i32)> = RED_BASE.iter().map(|p| (p.x, p.y)).collect();
        let black: Vec<(i32, i32)> = BLACK_BASE.iter().map(|p| (p.x, p.y)).collect();
        Self::with_pods(Color::Red, &red, &black)
    }

    /// Create a position from pod coordinates.
    ///
    /// # Panics
    ///
    /// Panics if more than `MAX_PODS` pods are given in total.
    pub fn with_pods(player: Color, red: &[(i32, i32)], black: &[(i32, i32)]) -> Self {
        let mut pods = ArrayVec::new();
        for (id, &(x, y)) in red.iter().enumerate() {
            pods.push(Pod::new(Color::Red, id as u8, Point::new(x, y)));
        }
        for (id, &(x, y)) in black.iter().enumerate() {
            pods.push(Pod::new(Color::Black, id as u8, Point::new(x, y)));
        }

        let mut state = Self {
            pods,
            player,
            winner: None,
        };
        state.winner = state.find_winner();
        state
    }

    /// Returns the color of the player to move.
    pub fn player(&self) -> Color {
        self.player
    }

    /// Returns an iterator over every pod on the board.
    pub fn pods(&self) -> impl Iterator<Item = &Pod> {
        self.pods.iter()
    }

    /// Returns the pod standing on a cell, if any.
    pub fn pod_at(&self, point: Point) -> Option<&Pod> {
        self.pods.iter().find(|pod| pod.position == point)
    }

    /// Returns true if a point lies on the board.
    pub const fn in_bounds(point: Point) -> bool {
        point.x >= 0 && point.x < WIDTH && point.y >= 0 && point.y < HEIGHT
    }

    /// Returns the base cells a color is trying to reach.
    pub fn goal(color: Color) -> &'static [Point] {
        match color {
            Color::Red => &BLACK_BASE,
            Color::Black => &RED_BASE,
        }
    }

    /// Apply an action only if it is legal in this position.
    pub fn try_apply(&self, action: &OctiAction) -> error::Result<Self> {
        if self.winner.is_some() {
            return Err((ErrorKind::GameIllegalAction, "game is already decided").into());
        }
        if !self.legal_actions().contains(action) {
            return Err((ErrorKind::GameIllegalAction, action).into());
        }
        Ok(self.apply(action))
    }

    fn is_empty(&self, point: Point) -> bool {
        Self::in_bounds(point) && self.pod_at(point).is_none()
    }

    /// Actions of a single pod, in direction order.
    fn pod_actions(&self, pod: &Pod) -> impl Iterator<Item = OctiAction> + '_ {
        let from = pod.position;
        DIRECTIONS.iter().filter_map(move |&direction| {
            let adjacent = from + direction;
            if !Self::in_bounds(adjacent) {
                return None;
            }
            if self.pod_at(adjacent).is_none() {
                return Some(OctiAction::step(from, adjacent));
            }
            let landing = adjacent + direction;
            self.is_empty(landing)
                .then(|| OctiAction::jump(from, landing))
        })
    }

    fn has_action(&self, color: Color) -> bool {
        self.pods
            .iter()
            .filter(|pod| pod.color == color)
            .any(|pod| self.pod_actions(pod).next().is_some())
    }

    /// A pod on an opposing base wins. Otherwise losing every pod,
    /// or having no action on your turn, loses.
    fn find_winner(&self) -> Option<Color> {
        for color in Color::ALL {
            let goal = Self::goal(color);
            if self
                .pods
                .iter()
                .any(|pod| pod.color == color && goal.contains(&pod.position))
            {
                return Some(color);
            }
        }

        for color in Color::ALL {
            if !self.pods.iter().any(|pod| pod.color == color) {
                return Some(!color);
            }
        }

        if !self.has_action(self.player) {
            return Some(!self.player);
        }

        None
    }
}

impl GameState for OctiState {
    type Action = OctiAction;
    type Piece = Pod;

    fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    fn winner(&self) -> Option<Color> {
        self.winner
    }

    fn legal_actions(&self) -> Vec<OctiAction> {
        if self.winner.is_some() {
            return Vec::new();
        }
        self.pods
            .iter()
            .filter(|pod| pod.color == self.player)
            .flat_map(|pod| self.pod_actions(pod))
            .collect()
    }

    fn apply(&self, action: &OctiAction) -> Self {
        let mut pods = self.pods.clone();
        let from = action.from();

        if let OctiAction::Jump { over, .. } = action {
            let captured = pods
                .iter()
                .position(|pod| pod.position == *over && pod.color != self.player);
            if let Some(index) = captured {
                pods.remove(index);
            }
        }
        if let Some(pod) = pods.iter_mut().find(|pod| pod.position == from) {
            pod.position = action.to();
        }

        let mut state = Self {
            pods,
            player: !self.player,
            winner: None,
        };
        state.winner = state.find_winner();
        state
    }

    fn to_move(&self) -> Color {
        self.player
    }

    fn pieces(&self, color: Color) -> Vec<Pod> {
        self.pods
            .iter()
            .filter(|pod| pod.color == color)
            .copied()
            .collect()
    }

    fn position_of(&self, piece: &Pod) -> Point {
        piece.position
    }

    fn base(&self, color: Color) -> &[Point] {
        match color {
            Color::Red => &RED_BASE,
            Color::Black => &BLACK_BASE,
        }
    }

    fn piece_count(&self, color: Color) -> usize {
        self.pods.iter().filter(|pod| pod.color == color).count()
    }
}

/// Displays the board with the top row first.
/// `R` and `B` are pods, `+` is an empty base cell and `.` an empty cell.
impl Display for OctiState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in (0..HEIGHT).rev() {
            write!(f, "{y} ")?;
            for x in 0..WIDTH {
                let point = Point::new(x, y);
                let ch = match self.pod_at(point) {
                    Some(pod) => match pod.color {
                        Color::Red => 'R',
                        Color::Black => 'B',
                    },
                    None if RED_BASE.contains(&point) || BLACK_BASE.contains(&point) => '+',
                    None => '.',
                };
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for x in 0..WIDTH {
            write!(f, " {x}")?;
        }
        writeln!(f)?;
        write!(f, "to move: {}", self.player)?;
        if let Some(winner) = self.winner {
            write!(f, ", winner: {winner}")?;
        }
        Ok(())
    }
}
