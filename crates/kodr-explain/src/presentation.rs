//! Closed presentation vocabulary for annotations.
//!
//! Every lookup here is a `match` over a closed enum; the UI/theme layer maps [`Icon`] and
//! [`Tone`] to actual glyphs and colors.

use std::fmt;

/// How an explanation is presented (badge and icon family).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExplanationKind {
    /// Language syntax (comments, output calls).
    Syntax,
    /// Control flow and error handling.
    Logic,
    /// Programming concepts (functions, variables, returns).
    Concept,
    /// Something likely to go wrong.
    Warning,
    /// A general hint.
    Tip,
}

impl ExplanationKind {
    /// Lowercase label (`syntax`, `logic`, ...).
    pub fn label(self) -> &'static str {
        match self {
            ExplanationKind::Syntax => "syntax",
            ExplanationKind::Logic => "logic",
            ExplanationKind::Concept => "concept",
            ExplanationKind::Warning => "warning",
            ExplanationKind::Tip => "tip",
        }
    }

    /// Icon shown next to the annotation row.
    pub fn icon(self) -> Icon {
        match self {
            ExplanationKind::Syntax => Icon::CheckCircle,
            ExplanationKind::Logic => Icon::Brain,
            ExplanationKind::Concept | ExplanationKind::Tip => Icon::Lightbulb,
            ExplanationKind::Warning => Icon::AlertCircle,
        }
    }

    /// Accent tone of the icon badge.
    pub fn tone(self) -> Tone {
        match self {
            ExplanationKind::Syntax => Tone::Green,
            ExplanationKind::Logic => Tone::Blue,
            ExplanationKind::Concept => Tone::Yellow,
            ExplanationKind::Warning => Tone::Red,
            ExplanationKind::Tip => Tone::Purple,
        }
    }
}

impl fmt::Display for ExplanationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Difficulty badge of an explanation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Difficulty {
    /// Entry-level construct.
    Beginner,
    /// Needs some experience.
    Intermediate,
    /// Advanced construct.
    Advanced,
}

impl Difficulty {
    /// Lowercase label (`beginner`, ...).
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    /// Badge tone.
    pub fn tone(self) -> Tone {
        match self {
            Difficulty::Beginner => Tone::Green,
            Difficulty::Intermediate => Tone::Yellow,
            Difficulty::Advanced => Tone::Red,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Icon identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    /// A check mark in a circle.
    CheckCircle,
    /// A brain.
    Brain,
    /// A light bulb.
    Lightbulb,
    /// An exclamation mark in a circle.
    AlertCircle,
}

impl Icon {
    /// Kebab-case icon name.
    pub fn name(self) -> &'static str {
        match self {
            Icon::CheckCircle => "check-circle",
            Icon::Brain => "brain",
            Icon::Lightbulb => "lightbulb",
            Icon::AlertCircle => "alert-circle",
        }
    }
}

/// Accent color families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Green accent.
    Green,
    /// Blue accent.
    Blue,
    /// Yellow accent.
    Yellow,
    /// Red accent.
    Red,
    /// Purple accent.
    Purple,
}

impl Tone {
    /// Lowercase color family name.
    pub fn name(self) -> &'static str {
        match self {
            Tone::Green => "green",
            Tone::Blue => "blue",
            Tone::Yellow => "yellow",
            Tone::Red => "red",
            Tone::Purple => "purple",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_lookups() {
        assert_eq!(ExplanationKind::Syntax.icon(), Icon::CheckCircle);
        assert_eq!(ExplanationKind::Tip.icon(), Icon::Lightbulb);
        assert_eq!(ExplanationKind::Warning.tone(), Tone::Red);
        assert_eq!(ExplanationKind::Tip.tone().name(), "purple");
        assert_eq!(ExplanationKind::Logic.to_string(), "logic");
    }

    #[test]
    fn test_difficulty_lookups() {
        assert_eq!(Difficulty::Intermediate.tone(), Tone::Yellow);
        assert_eq!(Difficulty::Advanced.to_string(), "advanced");
        assert!(Difficulty::Beginner < Difficulty::Advanced);
        assert_eq!(Icon::AlertCircle.name(), "alert-circle");
    }
}
