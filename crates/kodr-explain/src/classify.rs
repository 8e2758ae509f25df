//! Heuristic line classifier.
//!
//! Each line is trimmed and tested against a fixed, ordered rule table of substring checks. The
//! first rule that matches decides the [`Category`]; later rules are not consulted, so no line is
//! counted twice. This is intentionally not a parser: garbage input just produces few or no
//! annotations.

use crate::presentation::{Difficulty, ExplanationKind};
use std::fmt;

/// Semantic category assigned to a source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// A function or method declaration.
    FunctionDeclaration,
    /// A comment or docstring.
    Comment,
    /// A conditional, `throw` or `raise`.
    ErrorHandling,
    /// A plain `=` assignment.
    Assignment,
    /// A `return` statement.
    ReturnStatement,
    /// Console/stream output.
    OutputCall,
    /// A non-blank line matching no rule (only with [`ClassifierOptions::include_uncategorized`]).
    Uncategorized,
}

impl Category {
    /// Kebab-case label (`function-declaration`, ...).
    pub fn label(self) -> &'static str {
        match self {
            Category::FunctionDeclaration => "function-declaration",
            Category::Comment => "comment",
            Category::ErrorHandling => "error-handling",
            Category::Assignment => "assignment",
            Category::ReturnStatement => "return-statement",
            Category::OutputCall => "output-call",
            Category::Uncategorized => "uncategorized",
        }
    }

    /// Fixed explanation text.
    pub fn explanation(self) -> &'static str {
        match self {
            Category::FunctionDeclaration => {
                "This declares a function that takes parameters and returns a value. Functions are reusable blocks of code that perform specific tasks."
            }
            Category::Comment => {
                "This is a comment. Comments are ignored by the computer but help humans understand what the code does."
            }
            Category::ErrorHandling => {
                "This is error handling - checking if something might go wrong and dealing with it appropriately. This prevents the program from crashing."
            }
            Category::Assignment => {
                "This assigns a value to a variable. Variables are like containers that store data for later use."
            }
            Category::ReturnStatement => {
                "This returns a value from the function back to whoever called it. Think of it as the function's answer."
            }
            Category::OutputCall => {
                "This displays output to the console/terminal. It's useful for debugging and showing results."
            }
            Category::Uncategorized => "No notable construct was detected on this line.",
        }
    }

    /// Presentation type.
    pub fn kind(self) -> ExplanationKind {
        match self {
            Category::FunctionDeclaration | Category::Assignment | Category::ReturnStatement => {
                ExplanationKind::Concept
            }
            Category::Comment | Category::OutputCall => ExplanationKind::Syntax,
            Category::ErrorHandling => ExplanationKind::Logic,
            Category::Uncategorized => ExplanationKind::Tip,
        }
    }

    /// Difficulty badge.
    pub fn difficulty(self) -> Difficulty {
        match self {
            Category::ErrorHandling => Difficulty::Intermediate,
            _ => Difficulty::Beginner,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One classified source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// 1-based line number within the classified text.
    pub line_number: usize,
    /// The trimmed line text.
    pub code: String,
    /// Assigned category.
    pub category: Category,
}

impl Annotation {
    /// Explanation text for this annotation's category.
    pub fn explanation(&self) -> &'static str {
        self.category.explanation()
    }

    /// Presentation type.
    pub fn kind(&self) -> ExplanationKind {
        self.category.kind()
    }

    /// Difficulty badge.
    pub fn difficulty(&self) -> Difficulty {
        self.category.difficulty()
    }
}

/// A single substring rule.
#[derive(Debug, Clone, Copy)]
struct Rule {
    category: Category,
    /// The line must contain at least one of these.
    any_of: &'static [&'static str],
    /// ...and none of these.
    none_of: &'static [&'static str],
}

impl Rule {
    fn matches(&self, line: &str) -> bool {
        self.any_of.iter().any(|token| line.contains(token))
            && !self.none_of.iter().any(|token| line.contains(token))
    }
}

/// Priority order, highest first.
const RULES: [Rule; 6] = [
    Rule {
        category: Category::FunctionDeclaration,
        any_of: &["function", "def ", "public static"],
        none_of: &[],
    },
    Rule {
        category: Category::Comment,
        any_of: &["//", "#", "\"\"\""],
        none_of: &[],
    },
    Rule {
        category: Category::ErrorHandling,
        any_of: &["if", "throw", "raise"],
        none_of: &[],
    },
    Rule {
        category: Category::Assignment,
        any_of: &["="],
        none_of: &["==", "!="],
    },
    Rule {
        category: Category::ReturnStatement,
        any_of: &["return"],
        none_of: &[],
    },
    Rule {
        category: Category::OutputCall,
        any_of: &["console.log", "print", "cout"],
        none_of: &[],
    },
];

/// Tuning knobs for [`Classifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassifierOptions {
    /// Emit [`Category::Uncategorized`] for non-blank lines that match no rule.
    ///
    /// Off by default: only notable lines are annotated.
    pub include_uncategorized: bool,
}

/// The line classifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier {
    options: ClassifierOptions,
}

impl Classifier {
    /// Classifier with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifier with explicit options.
    pub fn with_options(options: ClassifierOptions) -> Self {
        Self { options }
    }

    /// Current options.
    pub fn options(&self) -> ClassifierOptions {
        self.options
    }

    /// Category of one already-trimmed line, if any rule matches.
    pub fn categorize(trimmed_line: &str) -> Option<Category> {
        RULES
            .iter()
            .find(|rule| rule.matches(trimmed_line))
            .map(|rule| rule.category)
    }

    /// Classify every `'\n'`-separated line of `source`, in line order.
    pub fn classify(&self, source: &str) -> Vec<Annotation> {
        source
            .split('\n')
            .enumerate()
            .filter_map(|(index, line)| {
                let trimmed = line.trim();
                let category = match Self::categorize(trimmed) {
                    Some(category) => category,
                    None if self.options.include_uncategorized && !trimmed.is_empty() => {
                        Category::Uncategorized
                    }
                    None => return None,
                };
                Some(Annotation {
                    line_number: index + 1,
                    code: trimmed.to_string(),
                    category,
                })
            })
            .collect()
    }
}

/// Classify `source` with default options.
pub fn classify(source: &str) -> Vec<Annotation> {
    Classifier::new().classify(source)
}
