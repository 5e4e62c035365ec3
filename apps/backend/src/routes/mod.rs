//! HTTP route handlers

pub mod categories;
pub mod pairs;
