//! Core logic of the Planeación Didáctica system.
//!
//! Provides the document model, completion rules, and calendar layout
//! for institutional course plans ("planeaciones didácticas"). The
//! capture UI and the persistence service live elsewhere — this crate
//! holds the pure rules both sides must agree on.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Planeacion`, `UnidadTematica`,
//!   `Bloque`, `Referencia`, plus the flat wire shapes of the API
//! - **`progress`**: Per-section completion with capture-order captions
//! - **`congruencia`**: Save-time totals gate and the finalization
//!   reconciliation that keeps declared totals honest
//! - **`cronograma`**: Business-day axis, month segments, and per-unit
//!   Gantt spans
//! - **`editor`**: Single-owner editing container with deterministic
//!   unit/block renumbering and the percentage budget
//! - **`publico`**: Read-only search, statistics, and timeline helpers
//!   over stored records
//! - **`validation`**: Structural integrity checks on whole documents
//!
//! # Architecture
//!
//! Every computation here is pure and synchronous: functions take the
//! document (or stored records) and return values, never touching I/O.
//! Wire shapes in `models::wire` preserve the persistence API's field
//! names byte-for-byte so both ends serialize identically.

pub mod congruencia;
pub mod cronograma;
pub mod editor;
pub mod models;
pub mod progress;
pub mod publico;
pub mod validation;
