#![warn(missing_docs)]
//! `kodr-playground` - the playground session.
//!
//! Composes [`kodr_editor`] (the overlay editor), [`kodr_explain`] (line explanations) and
//! [`kodr_lang`] (languages and samples) into one [`Playground`] that hosts drive with input
//! events and a clock.
//!
//! ```rust
//! use kodr_playground::{Playground, PlaygroundConfig};
//! use kodr_lang::Language;
//! use std::time::{Duration, Instant};
//!
//! let t0 = Instant::now();
//! let mut playground = Playground::new(PlaygroundConfig::default(), t0);
//! playground.select_language(Language::Python, t0);
//!
//! assert!(playground.tick(t0 + Duration::from_millis(1500)));
//! assert_eq!(playground.click_annotation(0), Some(1));
//! assert!(playground.rendered_lines()[0].highlighted);
//! ```

pub mod config;
pub mod notice;
pub mod session;

pub use config::{ConfigError, GeometryConfig, PlaygroundConfig};
pub use notice::{Notice, NoticeLevel};
pub use session::{EXPORT_SUCCESS_MESSAGE, ExportedFile, Playground};
