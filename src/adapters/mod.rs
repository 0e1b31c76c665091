//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! infrastructure. Only one concern exists here: where the expense
//! document lives.
//!
//! Adapter categories:
//! - `persistence`: JSON document storage (file-backed and in-memory)

pub mod persistence;
