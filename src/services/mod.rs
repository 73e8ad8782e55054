//! Business logic services.
//!
//! Services contain the calls that leave the process: database procedure
//! invocations, payments API lookups, and notification deliveries. Handlers
//! stay thin and delegate here.

pub mod notification_service;
pub mod payments_client;
pub mod portal_service;
