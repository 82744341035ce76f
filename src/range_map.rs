use std::collections::VecDeque;

use super::grid::{Field, Grid, Panel};
use super::point::{Direction, Point};

/// Hop count assigned to cells the anchor cannot reach through free cells.
pub const UNREACHABLE: u32 = 0xffff;

/// Shortest toroidal hop count from every cell to an anchor cell,
/// breadth-first over the four-neighborhood, blocks impassable.
pub struct RangeMap {
    map: Grid<u32>,
}

impl RangeMap {
    pub fn build(field: &Field, anchor: Point) -> Self {
        let n = field.n();
        let mut map = Grid::new(n, UNREACHABLE);
        let mut check = Grid::new(n, false);
        let mut que = VecDeque::new();

        check[anchor] = true;
        map[anchor] = 0;
        que.push_back(anchor);

        while let Some(p) = que.pop_front() {
            for dir in Direction::ALL {
                let q = p.step(dir, n);
                if !check[q] && field[q] != Panel::Block {
                    map[q] = map[p] + 1;
                    check[q] = true;
                    que.push_back(q);
                }
            }
        }

        RangeMap { map }
    }

    pub fn get(&self, p: Point) -> u32 {
        self.map[p]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_field(n: usize) -> Field {
        Grid::new(n, Panel::Empty)
    }

    #[test]
    fn anchor_has_range_zero() {
        let field = empty_field(5);
        let range = RangeMap::build(&field, Point::new(2, 2));
        assert_eq!(range.get(Point::new(2, 2)), 0);
    }

    #[test]
    fn ranges_are_toroidal_manhattan_distances_on_an_open_board() {
        let n = 5;
        let field = empty_field(n);
        let anchor = Point::new(1, 1);
        let range = RangeMap::build(&field, anchor);

        for p in field.points() {
            let dx = anchor.x.abs_diff(p.x).min(n - anchor.x.abs_diff(p.x));
            let dy = anchor.y.abs_diff(p.y).min(n - anchor.y.abs_diff(p.y));
            assert_eq!(range.get(p) as usize, dx + dy, "at {p:?}");
        }
    }

    #[test]
    fn wraparound_is_shorter_than_the_direct_path() {
        let field = empty_field(5);
        let range = RangeMap::build(&field, Point::new(0, 0));
        // one step left off the edge
        assert_eq!(range.get(Point::new(4, 0)), 1);
        assert_eq!(range.get(Point::new(4, 4)), 2);
    }

    #[test]
    fn blocks_keep_the_sentinel_and_detours_count() {
        let n = 5;
        let mut field = empty_field(n);
        // wall across x = 2 except a gap at y = 4
        for y in 0..4 {
            field[Point::new(2, y)] = Panel::Block;
        }
        let range = RangeMap::build(&field, Point::new(0, 0));

        for y in 0..4 {
            assert_eq!(range.get(Point::new(2, y)), UNREACHABLE);
        }
        // (3, 0): around the wall through (2, 4), or leftwards over the wrap
        assert_eq!(range.get(Point::new(3, 0)), 2);
        assert_eq!(range.get(Point::new(3, 1)), 3);
    }

    #[test]
    fn sealed_regions_stay_unreachable() {
        let n = 5;
        let mut field = empty_field(n);
        // box in (0, 0) completely
        field[Point::new(1, 0)] = Panel::Block;
        field[Point::new(4, 0)] = Panel::Block;
        field[Point::new(0, 1)] = Panel::Block;
        field[Point::new(0, 4)] = Panel::Block;
        let range = RangeMap::build(&field, Point::new(2, 2));

        assert_eq!(range.get(Point::new(0, 0)), UNREACHABLE);
        assert_ne!(range.get(Point::new(3, 3)), UNREACHABLE);
    }
}
