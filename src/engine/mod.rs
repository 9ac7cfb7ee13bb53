//! Rules engine
//!
//! This module contains the move logic:
//! - Legality of a single from/to move
//! - Application of a validated move
//! - Enumeration of all accepted moves

pub mod apply;
pub mod legality;
pub mod movegen;

pub use apply::apply;
pub use legality::evaluate;
pub use movegen::{destinations, legal_moves, legal_moves_from};
