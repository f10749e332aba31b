//! The game engine: configuration and the state machine.

pub mod builder;
pub mod game;

pub use builder::GameBuilder;
pub use game::{GameEngine, Phase, ResolutionRecord};
