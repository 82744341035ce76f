use super::*;

/// Builds the shared sign assignment one robot at a time.
///
/// The pass table records, for every cell some earlier robot walked, the
/// direction it used to leave that cell; committed cells are never
/// overwritten (first writer wins). Explicit turn signs written at junction
/// cells may override an earlier sign.
pub struct Router<'a> {
    world: &'a World,
    range: &'a RangeMap,
    signs: Field,
    pass: Grid<Option<Direction>>,
    steps: Grid<u32>,
}

impl<'a> Router<'a> {
    pub fn new(world: &'a World, range: &'a RangeMap) -> Self {
        let n = world.n();
        Router {
            world,
            range,
            signs: world.field.clone(),
            pass: Grid::new(n, None),
            steps: Grid::new(n, 0),
        }
    }

    /// Pre-seeds a straight line of pass entries walking `inward` along
    /// `line` back to the goal, and places the inward sign on the terminal
    /// cell. Used by the collector-line search phase.
    pub fn seed_collector(&mut self, line: &[Point], inward: Direction) {
        for (i, &p) in line.iter().enumerate() {
            if i + 1 < line.len() {
                self.pass[p] = Some(inward);
                self.steps[p] = (i + 1) as u32;
            }
        }
        if let Some(&terminal) = line.last() {
            self.put_sign(terminal, inward);
        }
    }

    pub fn route_all(&mut self, order: &[usize]) {
        for &i in order {
            self.route_robot(self.world.robots[i]);
        }
    }

    /// Every cell carrying a sign, in row-major order.
    pub fn commands(&self) -> Vec<Command> {
        self.signs
            .points()
            .filter_map(|p| match self.signs[p] {
                Panel::Sign(dir) => Some(Command { p, dir }),
                _ => None,
            })
            .collect()
    }

    fn put_sign(&mut self, p: Point, dir: Direction) {
        match self.signs[p] {
            Panel::Block | Panel::Goal => {}
            _ => self.signs[p] = Panel::Sign(dir),
        }
    }

    fn route_robot(&mut self, mut robot: Robot) {
        let n = self.world.n();
        let goal = self.world.goal;
        let mut walked: Vec<(Point, Direction)> = Vec::new();
        let limit = n * n * 4;
        let mut guard = 0;

        let base = loop {
            if robot.pos == goal {
                break 0;
            }
            guard += 1;
            if guard > limit {
                break 0;
            }

            // On an established path: either ride it, cross it if the own
            // facing re-enters it compatibly further ahead, or turn onto it.
            if let Some(path_dir) = self.pass[robot.pos] {
                if path_dir != robot.dir && !self.compatible_reentry(robot.pos, robot.dir) {
                    self.put_sign(robot.pos, path_dir);
                }
                break self.steps[robot.pos];
            }

            if let Some((target, _)) = self.merge_target(robot.pos, robot.dir) {
                self.advance(&mut robot, target, &mut walked);
                continue;
            }

            let mut best: Option<(Direction, Point, u32)> = None;
            for dir in Direction::ALL {
                if dir == robot.dir {
                    continue;
                }
                if let Some((target, r)) = self.merge_target(robot.pos, dir) {
                    if best.map_or(true, |(_, _, br)| r > br) {
                        best = Some((dir, target, r));
                    }
                }
            }
            if let Some((dir, target, _)) = best {
                self.put_sign(robot.pos, dir);
                robot.dir = dir;
                self.advance(&mut robot, target, &mut walked);
                continue;
            }

            match self.descend(robot.pos, robot.dir) {
                Some(dir) => {
                    if dir != robot.dir {
                        self.put_sign(robot.pos, dir);
                        robot.dir = dir;
                    }
                    walked.push((robot.pos, dir));
                    robot.pos = robot.pos.step(dir, n);
                }
                None => break 0, // stuck; scored as a miss, not an error
            }
        };

        self.commit(&walked, base);
    }

    /// Whether continuing straight from `from` re-enters the path network at
    /// a cell that already carries the robot's own facing. Scans to the first
    /// pass entry or the board edge.
    fn compatible_reentry(&self, from: Point, dir: Direction) -> bool {
        for p in from.ray(dir, self.world.n()) {
            if let Some(d) = self.pass[p] {
                return d == dir;
            }
        }
        false
    }

    /// Scans ahead of `from` to the first block or the board edge and picks
    /// the pass cell with the largest range value: the junction farthest from
    /// the goal on this ray wins, ties go to the smaller step index.
    fn merge_target(&self, from: Point, dir: Direction) -> Option<(Point, u32)> {
        let mut best: Option<(Point, u32)> = None;
        for p in from.ray(dir, self.world.n()) {
            if self.world.field[p] == Panel::Block {
                break;
            }
            if self.pass[p].is_none() {
                continue;
            }
            let r = self.range.get(p);
            let better = match best {
                Some((bp, br)) => r > br || (r == br && self.steps[p] < self.steps[bp]),
                None => true,
            };
            if better {
                best = Some((p, r));
            }
        }
        best
    }

    fn advance(&mut self, robot: &mut Robot, target: Point, walked: &mut Vec<(Point, Direction)>) {
        let n = self.world.n();
        while robot.pos != target && robot.pos != self.world.goal {
            walked.push((robot.pos, robot.dir));
            robot.pos = robot.pos.step(robot.dir, n);
        }
    }

    /// One-step fallback toward the anchor: a neighbor with strictly smaller
    /// range, the current facing first.
    fn descend(&self, from: Point, facing: Direction) -> Option<Direction> {
        let n = self.world.n();
        let here = self.range.get(from);
        if self.range.get(from.step(facing, n)) < here {
            return Some(facing);
        }
        Direction::ALL
            .into_iter()
            .find(|&dir| dir != facing && self.range.get(from.step(dir, n)) < here)
    }

    /// Commits the walked cells into the pass table, step indices counted
    /// backward from the merge point. Cells already present keep their
    /// original direction and index.
    fn commit(&mut self, walked: &[(Point, Direction)], base: u32) {
        let mut idx = base;
        for &(p, dir) in walked.iter().rev() {
            idx += 1;
            if self.pass[p].is_none() {
                self.pass[p] = Some(dir);
                self.steps[p] = idx;
            }
        }
    }
}
