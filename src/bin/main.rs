extern crate signbot;

use std::io::Read;

use signbot::{read_world, strategy::Strategy};

fn main() {
    let mut buf = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
        eprintln!("failed to read input: {e}");
        std::process::exit(1);
    }

    let world = match read_world(&buf) {
        Ok(world) => world,
        Err(e) => {
            eprintln!("failed to parse input: {e}");
            std::process::exit(1);
        }
    };

    let mut strategy = Strategy::new();
    let commands = strategy.play(&world);

    println!("{}", commands.len());
    for cmd in &commands {
        println!("{cmd}");
    }
}
