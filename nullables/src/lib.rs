//! Nullable collaborators for deterministic testing.
//!
//! The plugin consumes its externals (voting power, authorization, event
//! transport) through traits. This crate provides controllable in-memory
//! implementations: deterministic, programmable mid-test through shared
//! handles, and never touching anything outside the process.
//!
//! Usage: clone a nullable before handing it to the plugin and keep the
//! clone — both share state, so the test can reconfigure weights or read
//! recorded events while the plugin owns its copy.

pub mod auth;
pub mod power;
pub mod sink;

pub use auth::NullAuthorizer;
pub use power::NullPowerSource;
pub use sink::RecordingSink;
