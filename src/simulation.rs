use super::*;

/// Replay step cap per robot. The route construction never emits a sign
/// cycle that avoids both the goal and a block, but a capped replay turns
/// that hazard into a plain miss instead of a hang.
fn step_limit(n: usize) -> usize {
    n * n * 4
}

/// The board with a candidate marker set applied. Blocks and the goal are
/// never overwritten.
pub fn overlay(field: &Field, commands: &[Command]) -> Field {
    let mut field = field.clone();
    for cmd in commands {
        match field[cmd.p] {
            Panel::Block | Panel::Goal => {}
            _ => field[cmd.p] = Panel::Sign(cmd.dir),
        }
    }
    field
}

pub struct Trace {
    pub cells: Vec<Point>,
    pub reached: bool,
}

/// Replays a single robot on an already-overlaid field. Used by the visual
/// simulator; the scorer runs the same walk inline over a shared visit grid.
pub fn trace(field: &Field, goal: Point, robot: &Robot) -> Trace {
    let n = field.n();
    let limit = step_limit(n);
    let mut pos = robot.pos;
    let mut dir = robot.dir;
    let mut cells = Vec::new();
    let mut steps = 0;

    while pos != goal {
        cells.push(pos);
        match field[pos] {
            Panel::Block => return Trace {
                cells,
                reached: false,
            },
            Panel::Sign(d) => dir = d,
            _ => {}
        }
        pos = pos.step(dir, n);
        steps += 1;
        if steps > limit {
            return Trace {
                cells,
                reached: false,
            };
        }
    }
    cells.push(pos);
    Trace {
        cells,
        reached: true,
    }
}

/// Deterministic fitness of a candidate marker set:
/// `1000 * robots reaching the goal - 10 * markers + distinct cells visited`.
/// Coverage is shared across robots, so a cell counts once per call.
pub fn evaluate(world: &World, commands: &[Command]) -> i64 {
    let n = world.n();
    let field = overlay(&world.field, commands);
    let limit = step_limit(n);
    let mut visited = Grid::new(n, false);
    let mut reached = 0i64;

    for robot in &world.robots {
        let mut pos = robot.pos;
        let mut dir = robot.dir;
        let mut steps = 0;

        while pos != world.goal {
            visited[pos] = true;
            match field[pos] {
                Panel::Block => break,
                Panel::Sign(d) => dir = d,
                _ => {}
            }
            pos = pos.step(dir, n);
            steps += 1;
            if steps > limit {
                break;
            }
        }

        if pos == world.goal {
            visited[pos] = true;
            reached += 1;
        }
    }

    let coverage = visited.iter().filter(|&&v| v).count() as i64;
    1000 * reached - 10 * commands.len() as i64 + coverage
}
