//! Synthetic project record generation
//!
//! Pads a small list of hand-authored projects with plausible-looking
//! records for pagination and demos. Generation is a pure function of the
//! injected random source:
//!
//! 1. Pick a category uniformly, then a title, description and long-form
//!    template from that category's tables
//! 2. Resolve `{token}` placeholders from the category's candidate lists
//! 3. Sample technologies from 2-4 of the category's pools
//! 4. Flip weighted coins for URLs, featured, AI usage and impact metrics;
//!    draw repository stats from category ranges (all zero without a repo)
//!
//! ## Example
//!
//! ```rust
//! use folio_core::generator::ProjectGenerator;
//!
//! let report = ProjectGenerator::default().generate_seeded(20, 42).unwrap();
//! assert_eq!(report.records.len(), 20);
//! ```

mod engine;
pub mod resolver;
pub mod templates;
mod types;

pub use engine::{
    GenerationReport, ProjectGenerator, TemplateField, UnresolvedToken, batch_rng, generate,
};
pub use resolver::{ELLIPSIS, Resolved, resolve, slugify, truncate};
pub use templates::{CategoryTemplate, TEMPLATES, template_for};
pub use types::{Category, Impact, ProjectRecord, ProjectStats, ProjectStatus};
