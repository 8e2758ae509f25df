#![warn(missing_docs)]
//! `kodr-explain` - heuristic line explanations for the playground.
//!
//! The explanation panel annotates "notable" source lines (function declarations, comments,
//! error handling, assignments, returns and output calls) with a fixed explanation, a
//! presentation type and a difficulty. Classification is a synchronous, total function; the
//! [`AnalysisScheduler`] adds the debounce and cancellation the panel needs, and
//! [`render_report`] produces the downloadable text report.
//!
//! ```rust
//! use kodr_explain::{Category, classify};
//!
//! let annotations = classify("def add(a, b):\n    # sum\n    return a + b");
//! let categories: Vec<Category> = annotations.iter().map(|a| a.category).collect();
//! assert_eq!(
//!     categories,
//!     vec![Category::FunctionDeclaration, Category::Comment, Category::ReturnStatement]
//! );
//! ```

pub mod classify;
pub mod presentation;
pub mod report;
pub mod schedule;

pub use classify::{Annotation, Category, Classifier, ClassifierOptions, classify};
pub use presentation::{Difficulty, ExplanationKind, Icon, Tone};
pub use report::{ATTRIBUTION, ExportError, RULE_WIDTH, ReportStamp, render_report};
pub use schedule::{
    AnalysisScheduler, CancellationToken, CompletedPass, PassId, PassTicket, ScheduledPass,
};
