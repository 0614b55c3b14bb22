//! coop-orgs - organization management for a cooperative purchasing platform.
//!
//! This crate implements the district and school administration layer of a
//! bid management system: cooperatives own districts, districts own schools,
//! and both carry linked contact people and product catalogs. Handlers sit
//! behind port traits so storage and identity providers stay pluggable.

pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
