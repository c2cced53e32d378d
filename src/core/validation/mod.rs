//! Validation chains gating every create, update and delete
//!
//! A chain is an ordered list of pure checks over a [`Submission`]. Running
//! a chain stops at the first failing check and returns its [`Fault`]
//! unchanged, so the handler can short-circuit uniformly.
//!
//! [`Fault`]: crate::core::error::Fault

pub mod chain;
pub mod validators;

pub use chain::{Check, Submission, ValidationChain, check};
