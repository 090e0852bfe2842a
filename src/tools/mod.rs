//! various utilities

/// degree statistics
pub mod degrees;
