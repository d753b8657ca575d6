// Module exports for utilities

pub mod date;
pub mod format;
pub mod zoned_serde;
