//! A library for producing a site's icon assets: rasterizing an SVG monogram
//! into PNG files, and packing PNG images into multi-resolution ICO files.
//!
//! # Packing an ICO file
//!
//! ```
//! let entries = vec![
//!     favicon_kit::ImageEntry::new(16, vec![0u8; 10]),
//!     favicon_kit::ImageEntry::new(32, vec![0u8; 20]),
//! ];
//! let data = favicon_kit::encode(&entries).unwrap();
//! assert_eq!(data.len(), 6 + 2 * 16 + 10 + 20);
//! ```
//!
//! # Generating the icon set
//!
//! ```no_run
//! use favicon_kit::{monogram, SvgRenderer};
//! use std::path::Path;
//!
//! let out_dir = Path::new("public");
//! let renderer = SvgRenderer::from_data(monogram::FAVICON_SVG.as_bytes())
//!     .unwrap();
//! favicon_kit::generate_pngs(&renderer, monogram::PNG_TARGETS, out_dir)
//!     .unwrap();
//! let renderer = SvgRenderer::from_data(monogram::ICO_SVG.as_bytes())
//!     .unwrap();
//! favicon_kit::generate_ico(&renderer, monogram::ICO_SIZES, out_dir)
//!     .unwrap();
//! ```

#![warn(missing_docs)]

#[macro_use]
mod macros;

mod decoder;
mod encoder;
mod entry;
mod error;
pub mod format;
mod generate;
pub mod monogram;
mod render;

pub use crate::decoder::{DirectoryEntry, IconContainer};
pub use crate::encoder::{encode, write_container};
pub use crate::entry::ImageEntry;
pub use crate::error::{GenerateError, RenderError, ValidationError};
pub use crate::generate::{generate_ico, generate_pngs};
pub use crate::render::SvgRenderer;

//===========================================================================//
