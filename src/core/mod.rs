//! Core state machine types.
//!
//! This module contains the vocabulary shared by the rule table and the
//! engine:
//! - State and event identity via the `State` and `Event` traits
//! - `Trigger`, naming what caused a dispatch
//! - Bounded history of real state changes

mod history;
mod state;

pub use history::{StateHistory, StateTransition, Trigger};
pub use state::{Event, State};
