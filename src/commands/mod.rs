//! Command implementations for the shroomcheck binary.
//!
//! - **diagnose**: classify one specimen given on the command line
//! - **interactive**: prompt for the four traits, then classify
//! - **list**: print trait choices or the knowledge base
//! - **init**: write a default configuration file

pub mod diagnose;
pub mod init;
pub mod interactive;
pub mod list;

pub use diagnose::{handle_diagnose, render_response};
pub use init::init_config;
pub use interactive::{handle_interactive, prompt_specimen};
pub use list::{list_rules, list_traits};
