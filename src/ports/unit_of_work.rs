//! Unit-of-work port for atomic multi-record mutations.
//!
//! A handler opens a transaction with [`UnitOfWork::begin`], threads the
//! opaque [`TxContext`] through the `*_in_tx` repository methods, and then
//! either commits or rolls back. All writes issued against one context
//! become visible together or not at all; isolation beyond what the
//! underlying store provides (assume read-committed) is not promised.
//!
//! Reads never take a transaction context.

use crate::domain::foundation::DomainError;
use async_trait::async_trait;
use std::any::Any;

/// Opaque transactional context.
///
/// Concrete adapters downcast via [`TxContext::as_any`] to recover their
/// native transaction handle; the core never inspects it.
pub trait TxContext: Send + Sync {
    fn as_any(&self) -> &dyn Any;
}

/// An open transaction. Consumed by `commit` or `rollback`; there is no
/// timeout or external cancellation, the transaction runs to completion or
/// failure.
#[async_trait]
pub trait ActiveTransaction: Send + Sync {
    /// The context handed to transactional repository methods.
    fn context(&self) -> &dyn TxContext;

    /// Makes all writes issued against this context visible.
    async fn commit(self: Box<Self>) -> Result<(), DomainError>;

    /// Discards all writes issued against this context.
    async fn rollback(self: Box<Self>) -> Result<(), DomainError>;
}

/// Stateless coordinator handing out transactions. Safe to share across
/// concurrent calls.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    async fn begin(&self) -> Result<Box<dyn ActiveTransaction>, DomainError>;
}
