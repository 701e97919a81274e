//! Data layer: core types, loading, filtering, and range derivation.
//!
//! Architecture:
//! ```text
//!  .csv (path or dropped bytes)
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse rows → Dataset
//!   └──────────┘
//!        │
//!        ▼
//!   ┌─────────┐
//!   │ Dataset  │  Vec<Record>, file order
//!   └─────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  inclusive time window → Dataset subset
//!   └──────────┘
//! ```

pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
