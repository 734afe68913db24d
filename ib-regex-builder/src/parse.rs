/*!
Continue building from an existing pattern string.

`PatternBuilder::from(&str)` keeps the string verbatim, including any `^` and `$` in it.
[`PatternBuilder::parse`] lets you choose what to do with them instead, see [`AnchorMode`].

## Example
```
use ib_regex_builder::{AnchorMode, PatternBuilder};

let mut re = PatternBuilder::parse(r"^\d+$")
    .anchors(AnchorMode::Strip)
    .call()?;
assert!(re.is_match_start() && re.is_match_end());

// The anchors stay at both ends
re.concat('x');
assert_eq!(re.regex(), r"^\d+x$");
# Ok::<(), ib_regex_builder::Error>(())
```
*/
use bon::bon;
use tracing::debug;

use crate::{token, Error, PatternBuilder};

/// What [`PatternBuilder::parse`] does with a leading `^` and a trailing `$`.
///
/// A trailing `$` preceded by an odd number of `\` is an escaped literal and never treated as an anchor.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorMode {
    /// Keep them in the pattern as is. Appending after a trailing `$` then yields a pattern that
    /// can only match at the end of a line in the middle, which is rarely wanted.
    #[default]
    Keep,
    /// Remove them and set [`match_start()`](PatternBuilder::match_start) /
    /// [`match_end()`](PatternBuilder::match_end) instead.
    Strip,
    /// Return [`Error::UnexpectedAnchor`].
    Reject,
}

struct Anchors<'p> {
    body: &'p str,
    start: bool,
    end: bool,
}

impl<'p> Anchors<'p> {
    fn split(pattern: &'p str) -> Self {
        let (body, start) = match pattern.strip_prefix(token::MATCH_START) {
            Some(body) => (body, true),
            None => (pattern, false),
        };
        let stripped = body
            .strip_suffix(token::MATCH_END)
            .filter(|body| !ends_with_escape(body));
        Self {
            body: stripped.unwrap_or(body),
            start,
            end: stripped.is_some(),
        }
    }
}

fn ends_with_escape(s: &str) -> bool {
    s.bytes().rev().take_while(|&b| b == b'\\').count() % 2 == 1
}

#[bon]
impl PatternBuilder {
    /// Create a builder from a pattern string.
    ///
    /// With the default [`AnchorMode::Keep`], this is the same as `PatternBuilder::from(pattern)`.
    ///
    /// ## Example
    /// ```
    /// use ib_regex_builder::{AnchorMode, Error, PatternBuilder};
    ///
    /// let re = PatternBuilder::parse("^ab$").call()?;
    /// assert_eq!(re.as_str(), "^ab$");
    ///
    /// let re = PatternBuilder::parse("^ab$").anchors(AnchorMode::Strip).call()?;
    /// assert_eq!(re.as_str(), "ab");
    /// assert_eq!(re.regex(), "^ab$");
    ///
    /// assert_eq!(
    ///     PatternBuilder::parse("ab$").anchors(AnchorMode::Reject).call(),
    ///     Err(Error::UnexpectedAnchor { anchor: '$', pattern: "ab$".into() })
    /// );
    /// # Ok::<(), Error>(())
    /// ```
    #[builder]
    pub fn parse(
        #[builder(start_fn)] pattern: &str,
        /// See [`AnchorMode`].
        #[builder(default)]
        anchors: AnchorMode,
    ) -> Result<Self, Error> {
        match anchors {
            AnchorMode::Keep => Ok(Self::from(pattern)),
            AnchorMode::Strip => {
                let split = Anchors::split(pattern);
                if split.start || split.end {
                    debug!(
                        pattern,
                        start = split.start,
                        end = split.end,
                        "stripped anchors"
                    );
                }
                Ok(Self::from_parts(
                    split.body.to_owned(),
                    split.start,
                    split.end,
                ))
            }
            AnchorMode::Reject => {
                let split = Anchors::split(pattern);
                let anchor = if split.start {
                    '^'
                } else if split.end {
                    '$'
                } else {
                    return Ok(Self::from(pattern));
                };
                debug!(pattern, %anchor, "rejected anchor");
                Err(Error::UnexpectedAnchor {
                    anchor,
                    pattern: pattern.to_owned(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(pattern: &str) -> PatternBuilder {
        PatternBuilder::parse(pattern)
            .anchors(AnchorMode::Strip)
            .call()
            .unwrap()
    }

    fn parts(re: &PatternBuilder) -> (&str, bool, bool) {
        (re.as_str(), re.is_match_start(), re.is_match_end())
    }

    #[test]
    fn keep() {
        let re = PatternBuilder::parse("^a$").call().unwrap();
        assert_eq!(re.as_str(), "^a$");
        assert!(!re.is_match_start() && !re.is_match_end());
        assert_eq!(re, PatternBuilder::from("^a$"));

        let re = PatternBuilder::parse("^a$")
            .anchors(AnchorMode::Keep)
            .call()
            .unwrap();
        assert_eq!(re.as_str(), "^a$");
    }

    #[test]
    fn strip_anchors() {
        let re = strip(r"^\d+$");
        assert_eq!(re.as_str(), r"\d+");
        assert!(re.is_match_start());
        assert!(re.is_match_end());
        assert_eq!(re.regex(), r"^\d+$");

        assert_eq!(parts(&strip("^a")), ("a", true, false));
        assert_eq!(parts(&strip("a$")), ("a", false, true));
        assert_eq!(parts(&strip("a")), ("a", false, false));
        assert_eq!(parts(&strip("^$")), ("", true, true));
        assert_eq!(parts(&strip("^")), ("", true, false));

        // Only one of each
        let re = strip("^^a$$");
        assert_eq!(re.as_str(), "^a$");
        assert_eq!(re.regex(), "^^a$$");
    }

    #[test]
    fn escaped_dollar() {
        let re = strip(r"a\$");
        assert_eq!(re.as_str(), r"a\$");
        assert!(!re.is_match_end());

        let re = strip(r"a\\$");
        assert_eq!(re.as_str(), r"a\\");
        assert!(re.is_match_end());

        let re = strip(r"a\\\$");
        assert_eq!(re.as_str(), r"a\\\$");
        assert!(!re.is_match_end());
    }

    #[test]
    fn strip_then_build() {
        let mut re = strip("^[a-z]");
        re.one_or_more(r"\w").match_end();
        assert_eq!(re.regex(), r"^[a-z]\w+$");
    }

    #[test]
    fn reject() {
        let reject = |pattern: &str| {
            PatternBuilder::parse(pattern)
                .anchors(AnchorMode::Reject)
                .call()
        };
        assert_eq!(
            reject("^a"),
            Err(Error::UnexpectedAnchor {
                anchor: '^',
                pattern: "^a".into()
            })
        );
        assert_eq!(
            reject("^a$"),
            Err(Error::UnexpectedAnchor {
                anchor: '^',
                pattern: "^a$".into()
            })
        );
        assert_eq!(
            reject("a$"),
            Err(Error::UnexpectedAnchor {
                anchor: '$',
                pattern: "a$".into()
            })
        );
        assert_eq!(reject(r"a\$"), Ok(PatternBuilder::from(r"a\$")));
        assert_eq!(reject("[^a]"), Ok(PatternBuilder::from("[^a]")));
    }
}
