//! Render options
//!
//! Options are layered per render call:
//! engine defaults < registry options < page front matter < call overrides.

pub mod consts;
mod model;

pub use model::{LayoutOptions, MatchStrategy, Negatives, ResolvedOptions};
