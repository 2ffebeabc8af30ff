pub mod logging;
pub mod person;

pub use person::*;
