//! Core type definitions used across the EstateHub workspace.

pub mod id;

pub use id::*;
