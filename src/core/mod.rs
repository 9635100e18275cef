pub mod actions;
pub mod orchestrator;
