//! Command shell
//!
//! This module speaks a UCI-flavoured text protocol so the rules engine can
//! be driven from a terminal or a GUI that sends `position` commands.

pub mod protocol;

pub use protocol::Uci;
