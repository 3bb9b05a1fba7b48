//! Falling blocks (workspace facade crate).
//!
//! Exposes `falling_blocks::{core,input,term,types}` while the implementation
//! lives in dedicated crates under `crates/`.

pub use falling_blocks_core as core;
pub use falling_blocks_input as input;
pub use falling_blocks_term as term;
pub use falling_blocks_types as types;
