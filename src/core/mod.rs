pub mod aggregator;
pub mod bankroll;
pub mod coordinator;
pub mod log;
pub mod validation;

pub use coordinator::{MigrationReport, ModeCoordinator, SignUpOutcome};
