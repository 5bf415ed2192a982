//! Action lists used in the Octi engine.
//!
//! The underlying type of Line may change at any time during
//! pre-1.0 development, so a Line type alias makes changes easy.

use std::fmt::Display;

use arrayvec::ArrayVec;

use crate::coretypes::MAX_DEPTH;

/// The most actions a line can hold, one per ply of the deepest search.
pub const MAX_LINE_LEN: usize = MAX_DEPTH as usize;

/// Line is a sequence of actions that can be applied to a state in order.
/// Useful for retaining a principal variation found from a search.
pub type Line<A> = ArrayVec<A, MAX_LINE_LEN>;

/// Replace the contents of `line` with `head` followed by `tail`.
pub fn replace_line<A: Clone>(line: &mut Line<A>, head: Option<&A>, tail: &Line<A>) {
    line.clear();
    line.extend(head.cloned());
    line.extend(tail.iter().cloned());
}

/// Returns a line as a space separated string of actions.
pub fn display<A: Display>(line: &Line<A>) -> String {
    line.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
