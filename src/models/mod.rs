//! Values produced and consumed by the scaffolding pipeline.
//!
//! # Core Concepts
//!
//! - [`FeatureRequest`]: What the caller asked for: a description and an optional short name.
//! - [`FeatureWorkspace`]: What the run settled on: branch, feature directory, spec file,
//!   and how each was obtained.
//! - [`SessionVariable`]: The setting later workflow steps read to find the active feature.
//!   It is returned to the caller rather than written into the process environment.
//!
//! Only the feature directory and its `spec.md` outlive a run; everything else
//! is derived fresh each time.

mod feature;
mod workspace;

pub use feature::*;
pub use workspace::*;
