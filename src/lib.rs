// src/lib.rs
pub mod classify;
pub mod colors;
pub mod error;
pub mod pipeline;
pub mod scope;

pub use error::*;

pub use classify::{classify, ClassifiedLine};
pub use colors::{Palette, Tag};
pub use pipeline::config::{ColorChoice, ColorizerConfig};
pub use pipeline::context::{ColorizeStats, StreamState};
pub use pipeline::stream::Colorizer;
pub use scope::{write_wrapped, ColorScope};
