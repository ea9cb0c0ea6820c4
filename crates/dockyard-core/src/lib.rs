//! Dockyard Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Dockyard
//! station blueprint tools. It includes:
//!
//! - **Geometry**: Integer vectors, cardinal directions and box overlap ([`geometry`] module)
//! - **Catalog**: Module sizes and attachment points ([`catalog::Catalog`])
//! - **Placement**: Positioned module records ([`placement::Placement`])
//! - **Mapping**: Calculator identifier and culture mapping ([`mapping`] module)

pub mod catalog;
pub mod geometry;
pub mod mapping;
pub mod placement;
