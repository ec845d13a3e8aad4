//! # climategpt
//!
//! Query client for the ClimateGPT backend: a single input that forwards a
//! question to the remote endpoint and shows the returned reply.
//!
//! This crate contains the endpoint client, the query controller and its
//! state, the derived page view, and a terminal front-end that draws it.

pub mod api;
pub mod config;
pub mod controller;
pub mod state;
pub mod terminal;
