//! Gridfall (workspace facade crate).
//!
//! A presentation-agnostic falling-block game engine. This package keeps
//! the public `gridfall::{core, types}` API stable while the
//! implementation lives in dedicated crates under `crates/`.
//!
//! The host is expected to call [`core::Game::tick`] once per frame with a
//! monotonic millisecond timestamp, forward discrete player commands, and
//! read state (or a [`core::GameSnapshot`]) purely for rendering.

pub use gridfall_core as core;
pub use gridfall_types as types;
