pub mod activities;
pub mod system;

// Re-export all handlers for easier imports
pub use activities::*;
pub use system::*;
