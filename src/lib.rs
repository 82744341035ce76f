pub mod grid;
pub mod input;
pub mod point;
pub mod range_map;
pub mod router;
pub mod search;
pub mod simulation;
pub mod strategy;
pub mod world;

pub use grid::*;
pub use input::*;
pub use point::*;
pub use range_map::*;
pub use router::*;
pub use search::*;
pub use simulation::*;
pub use strategy::*;
pub use world::*;
