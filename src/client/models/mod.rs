pub mod analysis;
pub mod analyzer_state;
pub mod effect;
pub mod messages;
pub mod roster_state;
pub mod student;
