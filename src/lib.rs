//! picalc - approximate π over HTTP
//!
//! A single pure estimator ([`series::estimate`]) summing the Gregory-Leibniz
//! series, exposed through a plain-text `GET /picalc?iterations=N` endpoint.

pub mod api;
pub mod config;
pub mod error;
pub mod series;

pub use error::{Error, Result};
