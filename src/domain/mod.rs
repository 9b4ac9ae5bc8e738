//! Domain types for the finboard dashboard.
//!
//! # Module Organization
//!
//! - [`error`] - Error types for fetching and decoding
//! - [`amount`] - Validated monetary amounts
//! - [`transaction`] - Raw and display transactions
//! - [`balance`] - Raw and display balance totals
//! - [`transform`] - Raw payload to display records

// ============================================================================
// Module Declarations
// ============================================================================

pub mod amount;
pub mod balance;
pub mod error;
pub mod transaction;
pub mod transform;

// ============================================================================
// Re-exports
// ============================================================================

pub use amount::{Amount, RawAmount};
pub use balance::{Balance, RawBalance};
pub use error::{DashboardError, ErrorKind};
pub use transaction::{CreatedAt, RawTransaction, Transaction, TransactionKind};
pub use transform::{Dashboard, DashboardResponse, format_dashboard};
