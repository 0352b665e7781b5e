// Core modules
pub mod compose;
pub mod config;
pub mod document;
pub mod error;
pub mod matcher;
pub mod registry;
pub mod stack;

// Re-export commonly used types
pub use compose::{render, Compositor, Diagnostic, Rendered};
pub use config::{LayoutOptions, MatchStrategy};
pub use document::{Layout, Metadata, Page};
pub use error::{LayoutError, Result};
pub use registry::Registry;
pub use stack::Stack;
