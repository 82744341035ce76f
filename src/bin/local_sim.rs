extern crate signbot;

use signbot::*;

use flo_canvas::*;
use flo_draw::*;

use futures::executor;
use futures::prelude::*;

use rand::Rng;

const CELL: f32 = 1000.0 / N as f32;

fn gen_random_world() -> World {
    let mut rng = rand::thread_rng();

    let mut field = Grid::new(N, Panel::Empty);

    let goal = Point::new(rng.gen_range(0..N), rng.gen_range(0..N));
    field[goal] = Panel::Goal;

    let mut placed = 0;
    while placed < 300 {
        let p = Point::new(rng.gen_range(0..N), rng.gen_range(0..N));
        if field[p] == Panel::Empty {
            field[p] = Panel::Block;
            placed += 1;
        }
    }

    let mut robots = Vec::with_capacity(M);
    while robots.len() < M {
        let p = Point::new(rng.gen_range(0..N), rng.gen_range(0..N));
        if field[p] != Panel::Empty {
            continue;
        }
        let dir = Direction::ALL[rng.gen_range(0..4)];
        robots.push(Robot { pos: p, dir });
    }

    World {
        goal,
        field,
        robots,
    }
}

fn cell_rect(gc: &mut CanvasGraphicsContext, p: Point, color: Color) {
    gc.new_path();
    gc.rect(
        CELL * p.x as f32,
        1000.0 - CELL * p.y as f32,
        CELL * (p.x + 1) as f32,
        1000.0 - CELL * (p.y + 1) as f32,
    );
    gc.fill_color(color);
    gc.fill();
}

fn cell_center(p: Point) -> (f32, f32) {
    (
        CELL * (p.x as f32 + 0.5),
        1000.0 - CELL * (p.y as f32 + 0.5),
    )
}

fn draw_lines(gc: &mut CanvasGraphicsContext) {
    for i in 0..=N {
        let at = CELL * i as f32;

        gc.new_path();
        gc.move_to(at, 0.0);
        gc.line_to(at, 1000.0);
        gc.move_to(0.0, at);
        gc.line_to(1000.0, at);
        gc.line_width(1.0);
        gc.stroke_color(Color::Rgba(0.0, 0.0, 0.0, 0.2));
        gc.stroke();
    }
}

fn draw_board(gc: &mut CanvasGraphicsContext, world: &World) {
    for p in world.field.points() {
        match world.field[p] {
            Panel::Block => cell_rect(gc, p, Color::Rgba(0.2, 0.2, 0.2, 1.0)),
            Panel::Goal => cell_rect(gc, p, Color::Rgba(0.0, 0.8, 0.0, 1.0)),
            _ => {}
        }
    }

    for robot in &world.robots {
        let (x, y) = cell_center(robot.pos);
        gc.new_path();
        gc.circle(x, y, CELL * 0.3);
        gc.fill_color(Color::Rgba(0.0, 0.0, 1.0, 0.8));
        gc.fill();
    }
}

fn draw_signs(gc: &mut CanvasGraphicsContext, commands: &[Command]) {
    for cmd in commands {
        cell_rect(gc, cmd.p, Color::Rgba(1.0, 0.5, 0.0, 0.8));

        // a tick from the cell center toward the commanded facing
        let (x, y) = cell_center(cmd.p);
        let (dx, dy) = match cmd.dir {
            Direction::Up => (0.0, CELL * 0.4),
            Direction::Down => (0.0, -CELL * 0.4),
            Direction::Left => (-CELL * 0.4, 0.0),
            Direction::Right => (CELL * 0.4, 0.0),
        };
        gc.new_path();
        gc.move_to(x, y);
        gc.line_to(x + dx, y + dy);
        gc.line_width(2.0);
        gc.stroke_color(Color::Rgba(0.0, 0.0, 0.0, 1.0));
        gc.stroke();
    }
}

fn draw_traces(gc: &mut CanvasGraphicsContext, world: &World, field: &Field) {
    for robot in &world.robots {
        let replay = trace(field, world.goal, robot);

        gc.new_path();
        let (x, y) = cell_center(robot.pos);
        gc.move_to(x, y);

        let mut prev = robot.pos;
        for &p in &replay.cells {
            let (x, y) = cell_center(p);
            let wrapped = prev.x.abs_diff(p.x) > 1 || prev.y.abs_diff(p.y) > 1;
            if wrapped {
                gc.move_to(x, y);
            } else {
                gc.line_to(x, y);
            }
            prev = p;
        }

        gc.line_width(1.0);
        let color = if replay.reached {
            Color::Rgba(0.0, 0.0, 1.0, 0.25)
        } else {
            Color::Rgba(1.0, 0.0, 0.0, 0.6)
        };
        gc.stroke_color(color);
        gc.stroke();
    }
}

fn draw_range(gc: &mut CanvasGraphicsContext, world: &World) {
    let range = RangeMap::build(&world.field, world.goal);

    let mut max = 1;
    for p in world.field.points() {
        let r = range.get(p);
        if r != UNREACHABLE && r > max {
            max = r;
        }
    }

    for p in world.field.points() {
        let r = range.get(p);
        if r == UNREACHABLE {
            continue;
        }
        let heat = r as f32 / max as f32;
        cell_rect(gc, p, Color::Rgba(heat, 1.0 - heat, 0.0, 0.3));
    }
}

struct App {
    world: World,
    commands: Vec<Command>,
    overlaid: Field,
    canvas: Canvas,

    draw_traces: bool,
    draw_range: bool,
}

impl App {
    fn new(canvas: Canvas) -> Self {
        let world = gen_random_world();
        let commands = Strategy::new().play(&world);
        let overlaid = overlay(&world.field, &commands);

        App {
            world,
            commands,
            overlaid,
            canvas,
            draw_traces: false,
            draw_range: false,
        }
    }

    fn redraw(&mut self) {
        self.canvas.draw(|gc| {
            gc.clear_all_layers();
            gc.canvas_height(1000.0);
            gc.center_region(0.0, 0.0, 1000.0, 1000.0);

            draw_lines(gc);
            draw_board(gc, &self.world);
            draw_signs(gc, &self.commands);

            if self.draw_range {
                draw_range(gc, &self.world);
            }

            if self.draw_traces {
                draw_traces(gc, &self.world, &self.overlaid);
            }
        });
    }

    fn regenerate_map(&mut self) {
        self.world = gen_random_world();
        self.commands = Strategy::new().play(&self.world);
        self.overlaid = overlay(&self.world.field, &self.commands);

        self.redraw();
    }
}

fn main() {
    with_2d_graphics(|| {
        executor::block_on(async {
            let (canvas, mut events) = create_canvas_window_with_events("SIGNBOT");

            let mut app = App::new(canvas);

            app.redraw();

            while let Some(event) = events.next().await {
                match event {
                    DrawEvent::KeyDown(_, Some(Key::KeySpace)) => {
                        app.regenerate_map();
                    }
                    DrawEvent::KeyDown(_, Some(Key::KeyEscape)) => {
                        std::process::exit(0);
                    }
                    DrawEvent::KeyDown(_, Some(Key::Key1)) => {
                        app.draw_traces = !app.draw_traces;
                        app.redraw();
                    }
                    DrawEvent::KeyDown(_, Some(Key::Key2)) => {
                        app.draw_range = !app.draw_range;
                        app.redraw();
                    }
                    _ => {}
                }
            }
        });
    });
}
