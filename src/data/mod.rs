/// Data layer: core types, loading, and the analysis pipeline.
///
/// Architecture:
/// ```text
///  .csv / .gz / .zip
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Vec<Listing>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply range criteria → filtered subset
///   └──────────┘
///        │
///        ├────────────────┐
///        ▼                ▼
///   ┌──────────┐    ┌──────────┐
///   │  stats    │    │ ranking   │
///   └──────────┘    └──────────┘
///        │                │
///        └───────┬────────┘
///                ▼
///          ┌──────────┐
///          │  export   │  bundle → JSON file
///          └──────────┘
/// ```
///
/// Every stage below the loader is a pure function of its inputs; the
/// orchestration in [`crate::state`] just sequences them and caches the
/// latest results.

pub mod coerce;
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod ranking;
pub mod stats;
