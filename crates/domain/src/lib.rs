//! # lumen-domain
//!
//! Pure domain model for the lumen lighting control surface.
//!
//! ## Responsibilities
//! - Foundational types: error taxonomy, timestamps
//! - Define **Device records** (identity, address, credential, model) and the
//!   immutable **Roster** snapshot they live in
//! - Define **Semantic actions** (`toggle`, `set_brightness`,
//!   `set_color_temperature`) and the **Command results** they produce
//! - Define the **model matcher** that binds a model string to a protocol family
//! - Define the **wire value types** both protocol families exchange
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod action;
pub mod command;
pub mod device;
pub mod model;
pub mod protocol;
pub mod roster;
