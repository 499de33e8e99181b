//! Data layer: core types, loading, and filtering.
//!
//! Architecture:
//! ```text
//!  spacex_launch_dash.csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse CSV → LaunchDataset
//!   └──────────┘
//!        │
//!        ▼
//!   ┌───────────────┐
//!   │ LaunchDataset  │  Vec<LaunchRecord>, payload bounds, distinct sites
//!   └───────────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  site + payload-range predicates → filtered indices
//!   └──────────┘
//! ```

pub mod loader;
pub mod model;
pub mod filter;
