//! Data models
//!
//! Shared between the domain store and presentation consumers.
//! All ids are opaque `String`s with an entity prefix (`att-`, `grv-`, `not-`).
//! Calendar days are `YYYY-MM-DD`, clock times `HH:MM`, instants ISO 8601.

pub mod attendance;
pub mod department;
pub mod grievance;
pub mod notification;
pub mod payroll;
pub mod user;
pub mod vacancy;

// Re-exports
pub use attendance::*;
pub use department::*;
pub use grievance::*;
pub use notification::*;
pub use payroll::*;
pub use user::*;
pub use vacancy::*;
