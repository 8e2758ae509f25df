#![warn(missing_docs)]
//! `kodr-lang` - the closed set of languages the playground can display.
//!
//! Each language carries a stable id, a display label, the extension used when the buffer is
//! downloaded, and one fixed sample snippet. The snippet is both the initial editor content and
//! the "reset" target, so it never changes at runtime.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A display language supported by the playground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// JavaScript (`javascript`).
    #[default]
    JavaScript,
    /// Python (`python`).
    Python,
    /// Java (`java`).
    Java,
    /// C++ (`cpp`).
    Cpp,
}

impl Language {
    /// All supported languages, in picker order.
    pub const ALL: [Language; 4] = [
        Language::JavaScript,
        Language::Python,
        Language::Java,
        Language::Cpp,
    ];

    /// Stable lowercase identifier (e.g. `cpp`).
    pub fn id(self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::Python => "python",
            Language::Java => "java",
            Language::Cpp => "cpp",
        }
    }

    /// Human-readable label shown in the language picker.
    pub fn label(self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::Python => "Python",
            Language::Java => "Java",
            Language::Cpp => "C++",
        }
    }

    /// File extension used when the buffer is downloaded.
    pub fn file_extension(self) -> &'static str {
        match self {
            Language::JavaScript => "js",
            Language::Python => "py",
            Language::Java => "java",
            Language::Cpp => "cpp",
        }
    }

    /// The fixed sample snippet for this language.
    pub fn sample(self) -> &'static str {
        match self {
            Language::JavaScript => JAVASCRIPT_SAMPLE,
            Language::Python => PYTHON_SAMPLE,
            Language::Java => JAVA_SAMPLE,
            Language::Cpp => CPP_SAMPLE,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Returned by [`Language::from_str`] for ids outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language `{0}` (expected one of: javascript, python, java, cpp)")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

const JAVASCRIPT_SAMPLE: &str = include_str!("../samples/calculate_sum.js");
const PYTHON_SAMPLE: &str = include_str!("../samples/calculate_sum.py");
const JAVA_SAMPLE: &str = include_str!("../samples/calculate_sum.java");
const CPP_SAMPLE: &str = include_str!("../samples/calculate_sum.cpp");
