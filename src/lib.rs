// Agenda Controls Library
// Framework-agnostic models for agenda and date-time picker controls:
// observable values, zoned/wall-clock date mirroring, and appointment data

pub mod convert;
pub mod mirror;
pub mod models;
pub mod observable;
pub mod utils;
