//! Todo list management
//!
//! This module contains the todo item model, the list filters and the
//! in-memory store that owns the collection and the form draft.

mod model;
mod store;

pub use model::*;
pub use store::*;
