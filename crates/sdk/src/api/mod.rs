//! Daemon call-sites, grouped by area
//!
//! Each module adds methods to [`LbryClient`](crate::LbryClient).

mod channel;
mod claim;
mod daemon;
mod file;
mod publish;
mod stream;
mod wallet;

pub use channel::normalize_channel_name;
