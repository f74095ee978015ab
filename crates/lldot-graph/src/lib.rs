//! State-machine graph model for lldot.
//!
//! A parser compiles into a rooted, possibly cyclic graph of named nodes.
//! Each node carries an ordered list of keyed edges plus an optional
//! "otherwise" edge taken when no key matches.
//!
//! # Module Structure
//!
//! - [`edge`]: edge keys and the edge record shared by every graph type
//! - [`node`]: the [`StateNode`] capability trait and identity helpers
//! - [`arena`]: an arena-backed concrete graph with a chaining builder API

pub mod arena;
pub mod edge;
pub mod node;

pub use arena::{ArenaNode, GraphArena};
pub use edge::{Edge, EdgeKey};
pub use lldot_error::{Error, ErrorKind, Result};
pub use node::{NodeRef, StateNode};
