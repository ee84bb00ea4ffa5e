//! Digest of the most recent public subsidy grants.
//!
//! This crate fetches grant records from the Brønnøysund register of public
//! support, picks the ten most recent by grant date and renders each as a
//! Norwegian sentence. The [`digest`] module holds the pure pipeline; the
//! [`source`], [`api`] and [`config`] modules are the service around it.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod digest;
pub mod error;
pub mod models;
pub mod source;
