pub mod entities;
pub mod progress;
