use thiserror::Error;

use super::grid::{Grid, Panel, M, N};
use super::point::{Direction, Point};
use super::world::{Robot, World};

#[derive(Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("invalid integer: {0}")]
    BadInt(#[from] std::num::ParseIntError),
    #[error("unknown facing '{0}'")]
    BadFacing(String),
    #[error("cell out of range: row {row} col {col}")]
    OutOfRange { row: usize, col: usize },
}

struct Tokens<'a>(std::str::SplitWhitespace<'a>);

impl<'a> Tokens<'a> {
    fn next(&mut self) -> Result<&'a str, ParseError> {
        self.0.next().ok_or(ParseError::UnexpectedEof)
    }

    fn usize(&mut self) -> Result<usize, ParseError> {
        Ok(self.next()?.parse()?)
    }

    fn point(&mut self) -> Result<Point, ParseError> {
        let row = self.usize()?;
        let col = self.usize()?;
        if row >= N || col >= N {
            return Err(ParseError::OutOfRange { row, col });
        }
        Ok(Point::new(col, row))
    }

    fn facing(&mut self) -> Result<Direction, ParseError> {
        let token = self.next()?;
        let mut chars = token.chars();
        match (chars.next().and_then(Direction::from_letter), chars.next()) {
            (Some(dir), None) => Ok(dir),
            _ => Err(ParseError::BadFacing(token.to_string())),
        }
    }
}

/// Parses a full problem instance. The header's `n` and `m` are
/// informational: the board side and the roster size are fixed by the
/// format, and exactly `M` robot records always follow.
pub fn read_world(input: &str) -> Result<World, ParseError> {
    let mut tokens = Tokens(input.split_whitespace());

    let _n = tokens.usize()?;
    let _m = tokens.usize()?;
    let b = tokens.usize()?;

    let mut field = Grid::new(N, Panel::Empty);
    let goal = tokens.point()?;
    field[goal] = Panel::Goal;

    let mut robots = Vec::with_capacity(M);
    for _ in 0..M {
        let pos = tokens.point()?;
        let dir = tokens.facing()?;
        robots.push(Robot { pos, dir });
    }

    for _ in 0..b {
        let block = tokens.point()?;
        field[block] = Panel::Block;
    }

    Ok(World {
        goal,
        field,
        robots,
    })
}
