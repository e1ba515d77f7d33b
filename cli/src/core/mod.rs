//! # ChatRS Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure components that every
//! command relies on.
//!
//! ## Architecture
//!
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and error handling utilities
//! - `bot`: The resolved bot profile (name, delay, matcher) built from config
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chatrs::core::config; // For loading configuration
//! use chatrs::core::error::{ChatrsError, Result}; // For error handling
//! use chatrs::core::bot; // For resolving the bot profile
//! ```
//!
pub mod bot;
pub mod config;
pub mod error;
