// Service exports
pub mod lrclib;

pub use lrclib::{LrclibClient, LrclibError};
