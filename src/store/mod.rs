//! Device-local persistence.

pub mod guest;
pub mod mode;

pub use guest::GuestStore;
