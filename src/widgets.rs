//! Reusable rendering helpers

pub mod highlight;
