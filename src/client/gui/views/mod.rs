pub mod analyzer;
pub mod logger;
pub mod roster;
