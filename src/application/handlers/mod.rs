//! Command handlers, one module per aggregate.

pub mod district;
pub mod school;

#[cfg(test)]
pub(crate) mod mocks;
