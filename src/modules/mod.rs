//! Modules layer - Infrastructure components
//!
//! Contains the persistence adapters the features are built on.

pub mod storage;
