//! # linksim common
//!
//! Shared building blocks for the link-layer simulator.
//!
//! * **[`network`]**: MAC, IPv4 and IPv6 address values with parsing, canonical formatting
//!   and random generation.
//! * **[`error`]**: [`FormatError`], returned whenever text or bytes fail to decode.
//! * **[`config`]**: Tunables consumed by the cable registry.
//! * **[`utils`]**: Small formatting helpers shared by the frame types.

pub mod config;
pub mod error;
pub mod network;
pub mod utils;

pub use error::FormatError;
pub use network::{Address, Ipv4Address, Ipv6Address, MacAddress};
