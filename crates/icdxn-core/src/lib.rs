//! # icdxn-core
//!
//! Core types and error types for the ICD/XN curation service.
//!
//! This crate provides the foundational types shared across all crates:
//! - Plain records for diseases (ICD), lab tests (XN), and their associations
//! - Association status enum and the export file format
//! - The disease `Selector` (by chapter, group, or name)
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod selector;

pub use selector::{DiseaseAttribute, Selector};
