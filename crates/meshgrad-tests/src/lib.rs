//! Integration tests for the meshgrad crates.
//!
//! This crate contains end-to-end tests that verify the interaction
//! between the warp solver, the color field, and the render pipeline.
