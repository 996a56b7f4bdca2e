//! CLI infrastructure for the noughts analysis toolkit
//!
//! This module provides the command-line interface for searching positions,
//! comparing pruned and unpruned search, verifying optimality, and running
//! self-play sessions.

pub mod commands;
pub mod output;
