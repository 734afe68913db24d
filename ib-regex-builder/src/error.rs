use thiserror::Error;

/// Errors of the fallible [`PatternBuilder`](crate::PatternBuilder) operations.
///
/// A failed operation never modifies the builder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// [`PatternBuilder::or`](crate::PatternBuilder::or) needs at least two alternatives.
    #[error("alternation needs at least 2 alternatives, got {count}")]
    TooFewAlternatives { count: usize },

    /// The pattern passed to [`PatternBuilder::parse`](crate::PatternBuilder::parse) has an anchor while [`AnchorMode::Reject`](crate::AnchorMode::Reject) is used.
    #[error("unexpected anchor `{anchor}` in pattern {pattern:?}")]
    UnexpectedAnchor { anchor: char, pattern: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message() {
        assert_eq!(
            Error::TooFewAlternatives { count: 1 }.to_string(),
            "alternation needs at least 2 alternatives, got 1"
        );
        assert_eq!(
            Error::UnexpectedAnchor {
                anchor: '^',
                pattern: "^ab".into()
            }
            .to_string(),
            r#"unexpected anchor `^` in pattern "^ab""#
        );
    }
}
