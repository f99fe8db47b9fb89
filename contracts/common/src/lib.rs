//! Shared utilities and error codes for the staking ledger contracts.
//!
//! This crate provides:
//! - [`CommonError`]: errors raised by the shared helpers.
//! - [`reentrancy`]: a per-account scoped lock for state-mutating entry points.
//!
//! Contracts map these into their own error enums via `From`.

#![no_std]

use soroban_sdk::contracterror;

// ── Modules ──────────────────────────────────────────────────────────────────

pub mod reentrancy;

pub use reentrancy::ReentrancyGuard;

// ── Shared error enum ────────────────────────────────────────────────────────

/// Error codes raised by the shared helpers.
#[contracterror]
#[derive(Clone, Debug, Eq, PartialEq, Copy)]
#[repr(u32)]
pub enum CommonError {
    /// The account already has a state-mutating call in flight.
    ReentrantCall = 40,
}
