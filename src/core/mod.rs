pub mod repository;
pub mod sequencer;
pub mod timemath;
