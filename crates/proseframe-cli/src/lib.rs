//! proseframe CLI - Command-line interface library
//!
//! This library provides the CLI functionality for proseframe:
//! - Structure: show how raw prose is classified into blocks
//! - Render: write HTML, markdown, paged text or PDF
//! - Check: report structural problems in a document
//!
//! # Library Usage
//!
//! ```ignore
//! use proseframe_cli::{render_command, RenderFormat, Settings};
//!
//! let written = render_command(&inputs, RenderFormat::Pdf, None, None, &Settings::default())?;
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Show the block structure of a generated post
//! proseframe structure post.txt
//!
//! # Render every response payload to PDF
//! proseframe render 'responses/*.json' --format pdf
//!
//! # Check a document for structural issues
//! proseframe check post.json --format json
//! ```

pub mod app;
pub mod config;

pub use app::{check_command, render_command, run_cli, structure_command};
pub use app::{OutputFormat, RenderFormat};
pub use config::{load_settings, Settings};
