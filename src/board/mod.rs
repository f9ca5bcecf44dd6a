//! Board API access (lists, boards, labels, cards)
//!
//! Every call is authenticated with the OAuth header built from
//! [`BoardCredentials`]. [`BoardClient::call`] never interprets status codes;
//! the typed helpers used for label lookups do.

mod client;
mod error;
mod models;

pub use client::{BoardClient, BoardCredentials};
pub use error::{BoardError, Result};
pub use models::{IdRef, RemoteLabel, RemoteResponse};
