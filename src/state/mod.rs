//! Client-side state for the query page.
//!
//! DESIGN
//! ======
//! `query` holds what the controller owns and mutates; `view` is a pure
//! projection of it for whatever front-end draws the page.

pub mod query;
pub mod view;
