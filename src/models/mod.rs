// Module exports for models

pub mod agenda;
pub mod appointment;
pub mod picker;
