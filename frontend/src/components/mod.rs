pub mod data_sources;
pub mod roster;
