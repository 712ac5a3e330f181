//! File I/O operations for YAML documents.
//!
//! This module provides functionality to load YAML streams from disk or stdin.

pub mod loader;
