// Study Calendar Library
// Projects study-group recurrence schedules onto calendar months

pub mod models;
pub mod services;
pub mod utils;
