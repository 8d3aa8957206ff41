//! Space Wars (workspace facade crate).
//!
//! Two ships, one terminal, one keyboard. The implementation lives in
//! dedicated crates under `crates/`; this package re-exports them as
//! `space_wars::{audio,core,engine,input,term,types}` and wires the terminal
//! pieces together in [`frontend`].

pub mod frontend;

pub use space_wars_audio as audio;
pub use space_wars_core as core;
pub use space_wars_engine as engine;
pub use space_wars_input as input;
pub use space_wars_term as term;
pub use space_wars_types as types;

pub use frontend::TerminalFrontend;
