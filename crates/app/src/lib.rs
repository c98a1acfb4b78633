//! # lumen-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `DiscoveryProvider` — query the account roster
//!   - `ActionTransport` — invoke a named action on a device
//!   - `PropertyTransport` — read and write `(siid, piid)` properties
//! - Hold the **device registry** (atomically swapped roster snapshots)
//! - Provide the **protocol controllers** that turn semantic actions into wire calls
//! - Define **driving/inbound** use-cases:
//!   - `CommandDispatcher` — resolve device and protocol, perform one action
//!   - `RosterService` — query discovery and replace the roster
//!   - `ControlSurface` — the text-rendering facade the UI talks to
//!
//! ## Dependency rule
//! Depends on `lumen-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod control_surface;
pub mod controller;
pub mod ports;
pub mod registry;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;
