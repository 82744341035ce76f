use std::ops::{Index, IndexMut};

use super::point::{Direction, Point};

/// Contest board size. The instance header repeats it but the format fixes it.
pub const N: usize = 40;
/// Contest roster size; the input always carries exactly this many robots.
pub const M: usize = 100;

#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Panel {
    #[default]
    Empty,
    Block,
    Goal,
    Sign(Direction),
}

pub type Field = Grid<Panel>;

/// Dense square grid indexed by `Point`. The side length is fixed at
/// construction; all toroidal arithmetic lives in `Point`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    n: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    pub fn new(n: usize, v: T) -> Self {
        Grid {
            n,
            cells: vec![v; n * n],
        }
    }

    pub fn fill(&mut self, v: T) {
        self.cells.fill(v);
    }
}

impl<T> Grid<T> {
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    /// All cell coordinates in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let n = self.n;
        (0..n * n).map(move |i| Point::new(i % n, i / n))
    }
}

impl<T> Index<Point> for Grid<T> {
    type Output = T;

    fn index(&self, p: Point) -> &T {
        &self.cells[p.y * self.n + p.x]
    }
}

impl<T> IndexMut<Point> for Grid<T> {
    fn index_mut(&mut self, p: Point) -> &mut T {
        &mut self.cells[p.y * self.n + p.x]
    }
}
