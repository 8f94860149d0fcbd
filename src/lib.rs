//! Client for a personal catalog of scenic viewpoints.
//!
//! The library holds the model, the list filters, form validation, the view
//! derivations, and a typed client for the remote catalog backend. The binary
//! serves the app's pages as JSON on top of it.

pub mod api;
pub mod config;
pub mod display;
pub mod handlers;
pub mod message;
pub mod models;
pub mod query;
pub mod routes;
pub mod state;
pub mod validation;

#[cfg(test)]
mod tests;
