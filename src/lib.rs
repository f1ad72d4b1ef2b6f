//! `roomforge` - Asset and scaffolding toolkit for Room AI app templates
//!
//! This library provides the building blocks behind the `roomforge` CLI:
//! deterministic placeholder image synthesis (SVG and BMP), stock photo
//! fetching with source manifests, and bulk template renaming.

pub mod assets;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod manifest;
pub mod observability;
pub mod render;
pub mod rename;
