use super::*;

pub struct Strategy {
    pub searcher: Searcher,
}

impl Strategy {
    pub fn new() -> Self {
        Strategy {
            searcher: Searcher::default(),
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::new()
    }
}

impl Strategy {
    pub fn play(&mut self, world: &World) -> Vec<Command> {
        let (commands, score) = self.searcher.run(world);

        eprintln!("Signs placed: {}", commands.len());
        eprintln!("Best score: {score}");

        commands
    }
}
