#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Point { x, y }
    }

    /// One toroidal step: leaving an edge wraps to the opposite edge.
    pub fn step(self, dir: Direction, n: usize) -> Point {
        match dir {
            Direction::Up => Point::new(self.x, (self.y + n - 1) % n),
            Direction::Down => Point::new(self.x, (self.y + 1) % n),
            Direction::Left => Point::new((self.x + n - 1) % n, self.y),
            Direction::Right => Point::new((self.x + 1) % n, self.y),
        }
    }

    /// Cells strictly ahead of `self`, stopping at the board edge (no wrap).
    pub fn ray(self, dir: Direction, n: usize) -> Ray {
        Ray {
            x: self.x,
            y: self.y,
            dir,
            n,
        }
    }
}

pub struct Ray {
    x: usize,
    y: usize,
    dir: Direction,
    n: usize,
}

impl Iterator for Ray {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        match self.dir {
            Direction::Up => {
                if self.y == 0 {
                    return None;
                }
                self.y -= 1;
            }
            Direction::Down => {
                if self.y + 1 >= self.n {
                    return None;
                }
                self.y += 1;
            }
            Direction::Left => {
                if self.x == 0 {
                    return None;
                }
                self.x -= 1;
            }
            Direction::Right => {
                if self.x + 1 >= self.n {
                    return None;
                }
                self.x += 1;
            }
        }
        Some(Point::new(self.x, self.y))
    }
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }

    pub fn from_letter(c: char) -> Option<Direction> {
        match c {
            'U' => Some(Direction::Up),
            'D' => Some(Direction::Down),
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_wraps_on_every_edge() {
        let n = 5;
        assert_eq!(Point::new(0, 0).step(Direction::Up, n), Point::new(0, 4));
        assert_eq!(Point::new(0, 4).step(Direction::Down, n), Point::new(0, 0));
        assert_eq!(Point::new(0, 2).step(Direction::Left, n), Point::new(4, 2));
        assert_eq!(Point::new(4, 2).step(Direction::Right, n), Point::new(0, 2));
    }

    #[test]
    fn step_moves_one_cell_inside_the_board() {
        let n = 5;
        assert_eq!(Point::new(2, 2).step(Direction::Up, n), Point::new(2, 1));
        assert_eq!(Point::new(2, 2).step(Direction::Down, n), Point::new(2, 3));
        assert_eq!(Point::new(2, 2).step(Direction::Left, n), Point::new(1, 2));
        assert_eq!(Point::new(2, 2).step(Direction::Right, n), Point::new(3, 2));
    }

    #[test]
    fn ray_stops_at_the_edge() {
        let cells: Vec<Point> = Point::new(1, 3).ray(Direction::Right, 5).collect();
        assert_eq!(
            cells,
            vec![Point::new(2, 3), Point::new(3, 3), Point::new(4, 3)]
        );

        let cells: Vec<Point> = Point::new(1, 3).ray(Direction::Up, 5).collect();
        assert_eq!(cells, vec![Point::new(1, 2), Point::new(1, 1), Point::new(1, 0)]);

        assert_eq!(Point::new(0, 0).ray(Direction::Left, 5).count(), 0);
    }

    #[test]
    fn letters_round_trip() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_letter(dir.letter()), Some(dir));
        }
        assert_eq!(Direction::from_letter('X'), None);
    }

    #[test]
    fn opposite_is_involutive() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }
}
