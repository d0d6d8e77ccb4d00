//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business logic and persistence concerns so route
//! handlers can stay focused on request translation and auth plumbing.

pub mod dashboard;
pub mod email_auth;
pub mod plant;
pub mod planting;
pub mod plot;
pub mod profile;
pub mod schedule;
pub mod session;
pub mod task;
