use std::fmt;

use super::grid::Field;
use super::point::{Direction, Point};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Robot {
    pub pos: Point,
    pub dir: Direction,
}

/// The immutable problem instance: board, goal cell and robot roster.
/// Loaded once; the solver only ever works on copies.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub goal: Point,
    pub field: Field,
    pub robots: Vec<Robot>,
}

impl World {
    pub fn n(&self) -> usize {
        self.field.n()
    }
}

/// One placed sign, printed as `row column letter`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Command {
    pub p: Point,
    pub dir: Direction,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.p.y, self.p.x, self.dir.letter())
    }
}
