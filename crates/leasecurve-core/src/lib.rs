//! # Leasecurve Core
//!
//! Core types for the Leasecurve lease discount rate service.
//!
//! This crate provides the foundational building blocks used throughout
//! Leasecurve:
//!
//! - **[`Date`]**: Calendar date of a yield-curve observation or lease query
//! - **[`Tenor`]**: The closed set of published maturity buckets
//! - **[`TenorCurve`]**: One observation's tenor-to-rate mapping
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Newtypes prevent mixing incompatible values
//! - **Absent is not zero**: a tenor the publisher omitted carries no rate,
//!   and no code path may coerce it to `0.0`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use types::{Date, Tenor, TenorCurve};
