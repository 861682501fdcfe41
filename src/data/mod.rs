/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → PersonalityDataset
///   └──────────┘
///        │
///        ▼
///   ┌────────────────────┐
///   │ PersonalityDataset │  feature columns + label column,
///   └────────────────────┘  per-column numeric views
/// ```
///
/// The dataset is loaded once at start-up and read-only afterwards; the
/// chart builders in [`crate::chart`] consume it by reference.
pub mod loader;
pub mod model;
