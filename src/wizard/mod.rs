//! Wizard core - typed answers, declarative steps and the step controller
//!
//! Nothing in here touches the terminal. The front-end in `cli::wizard`
//! renders whatever [`Wizard`] exposes and feeds edits back through
//! [`Wizard::patch`].

pub mod answers;
pub mod controller;
pub mod step;
pub mod summary;

pub use answers::*;
pub use controller::*;
pub use step::*;
pub use summary::*;
