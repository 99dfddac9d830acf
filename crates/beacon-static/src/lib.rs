//! Single-page assembler for the landing page.
//!
//! Inlines a compiled stylesheet and two Markdown documents into an HTML shell
//! and writes one self-contained HTML file.

pub mod assembler;
pub mod assets;
pub mod builder;

pub use assembler::{assemble, escape_html, Assembly, Target, Targets};
pub use assets::{AssetLoader, SourcePaths, Sources};
pub use builder::{size_kb, BuildConfig, BuildError, BuildResult, StaticBuilder};
