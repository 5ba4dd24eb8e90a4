pub mod app_state;
pub mod bankroll;
pub mod forms;
pub mod game_type;
pub mod identity;
pub mod session;
