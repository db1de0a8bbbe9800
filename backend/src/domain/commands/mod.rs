//! Command and result types for the domain services. Keeping the inputs as
//! named structs keeps service signatures stable as fields grow.

pub mod assignments;
pub mod notifications;
