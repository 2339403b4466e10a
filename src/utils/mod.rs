pub mod styling;

pub use styling::*;
