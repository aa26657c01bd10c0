//! # vendx API
//!
//! REST surface for the vendx recommendation engine.
//!
//! Exposes a single operation: `GET /recommend-vendors/{tenderId}`, which
//! fetches the tender and candidate pool from the stores, runs the hybrid
//! ranker, and returns the top matches with percentage-formatted scores.
//! Domain errors map to the JSON bodies the dashboard expects; anything
//! unexpected is logged and collapsed into an opaque 500.

pub mod rest;

pub use rest::RestApi;
