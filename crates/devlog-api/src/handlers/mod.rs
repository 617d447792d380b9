//! HTTP handlers

pub mod devlogs;
pub mod health;
