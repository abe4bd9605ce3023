#![deny(unsafe_code)]

// not concurrent
pub mod non_concurrent;

pub mod logging;

pub use non_concurrent::rbtree::{Color, InvariantViolation, NodeRef, RBTree};
