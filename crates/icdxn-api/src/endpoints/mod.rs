//! Endpoint handlers, one module per screen area.

pub mod catalog;
pub mod common;
pub mod curation;
pub mod export;
pub mod selection;
