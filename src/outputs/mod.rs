//! Rendering and writing a [`Digest`](crate::models::Digest).
//!
//! # Submodules
//!
//! - [`text`]: plain listing for the terminal
//! - [`markdown`]: Markdown page mirroring the dashboard layout
//! - [`json`]: JSON serialization, to stdout or to a dated file
//!
//! # Output Structure
//!
//! ```text
//! json_output_dir/
//! └── 2024-09-20/
//!     ├── 08-00-00.json
//!     └── 14-30-12.json
//! ```

pub mod json;
pub mod markdown;
pub mod text;
