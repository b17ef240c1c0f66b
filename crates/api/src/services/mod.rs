//! Orchestration between HTTP handlers and the repository layer.

pub mod pages;
