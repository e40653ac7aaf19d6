//! Command routing and the explicit application state owned by the control
//! loop. The input layer (outside this crate) translates raw pointer and key
//! events into [`Command`] values; [`AppState::apply`] does the rest.

mod command;
mod state;

pub use command::*;
pub use state::*;
