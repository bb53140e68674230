//! Activity registry for the sign-up service
//!
//! Holds the seeded activities and their rosters in memory and enforces the
//! roster invariants on every sign-up and unregistration.

pub mod activity;
pub mod config;
pub mod error;
pub mod registry;

// Re-exports
pub use activity::{Activities, Activity, ActivityName, Email};
pub use config::{ActivitySeed, RegistryConfig};
pub use error::{ConfigError, ConfigResult, RegistryError, RegistryResult};
pub use registry::{ActivityRegistry, Enrollment, Withdrawal};
