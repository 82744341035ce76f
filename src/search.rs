use std::cmp::Reverse;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::*;

const ORDER_BUDGET_MS: u64 = 500;
const COLLECTOR_BUDGET_MS: u64 = 2400;

/// Anytime search over robot orderings and goal-capture geometries. Both
/// deadlines run from the start of `run`; they are polled at iteration
/// boundaries only, so an in-flight iteration always completes.
pub struct Searcher {
    pub order_budget: Duration,
    pub collector_budget: Duration,
    pub seed: u64,
}

impl Default for Searcher {
    fn default() -> Self {
        Searcher {
            order_budget: Duration::from_millis(ORDER_BUDGET_MS),
            collector_budget: Duration::from_millis(COLLECTOR_BUDGET_MS),
            seed: 0x9e3779b97f4a7c15,
        }
    }
}

impl Searcher {
    pub fn run(&self, world: &World) -> (Vec<Command>, i64) {
        let start = Instant::now();
        let mut rng = StdRng::seed_from_u64(self.seed);
        let range = RangeMap::build(&world.field, world.goal);
        let mut best: Option<(i64, Vec<Command>)> = None;

        // fixed orders: roster, farthest-first, nearest-first
        let mut order: Vec<usize> = (0..world.robots.len()).collect();
        try_order(world, &range, &order, &mut best);

        let mut sorted = order.clone();
        sorted.sort_by_key(|&i| Reverse(range.get(world.robots[i].pos)));
        try_order(world, &range, &sorted, &mut best);

        sorted.sort_by_key(|&i| range.get(world.robots[i].pos));
        try_order(world, &range, &sorted, &mut best);

        // random orderings
        while start.elapsed() < self.order_budget {
            order.shuffle(&mut rng);
            try_order(world, &range, &order, &mut best);
        }

        // random collector lines extending the goal's capture region
        while start.elapsed() < self.collector_budget {
            let dir = Direction::ALL[rng.gen_range(0..4)];
            let len = rng.gen_range(0..8) + rng.gen_range(0..8);
            let line = collector_line(world, dir, len);
            let Some(&terminal) = line.last() else {
                continue;
            };

            let collector_range = RangeMap::build(&world.field, terminal);
            order.shuffle(&mut rng);

            let mut router = Router::new(world, &collector_range);
            router.seed_collector(&line, dir.opposite());
            router.route_all(&order);

            let commands = router.commands();
            let score = evaluate(world, &commands);
            keep_best(&mut best, score, commands);
        }

        // phase one always runs, so this only fires on a degenerate instance
        best.map(|(score, commands)| (commands, score))
            .unwrap_or_else(|| {
                (
                    vec![Command {
                        p: Point::new(0, 0),
                        dir: Direction::Up,
                    }],
                    0,
                )
            })
    }
}

/// Straight run of cells leaving the goal along `dir`, cut short at the
/// first block. May be empty.
fn collector_line(world: &World, dir: Direction, len: u32) -> Vec<Point> {
    let n = world.n();
    let mut line = Vec::new();
    let mut p = world.goal;
    for _ in 0..len {
        let next = p.step(dir, n);
        if world.field[next] == Panel::Block || next == world.goal {
            break;
        }
        p = next;
        line.push(p);
    }
    line
}

fn try_order(
    world: &World,
    range: &RangeMap,
    order: &[usize],
    best: &mut Option<(i64, Vec<Command>)>,
) {
    let mut router = Router::new(world, range);
    router.route_all(order);
    let commands = router.commands();
    let score = evaluate(world, &commands);
    keep_best(best, score, commands);
}

fn keep_best(best: &mut Option<(i64, Vec<Command>)>, score: i64, commands: Vec<Command>) {
    if best.as_ref().map_or(true, |&(s, _)| score > s) {
        *best = Some((score, commands));
    }
}
