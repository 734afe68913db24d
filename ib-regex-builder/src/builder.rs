use std::{
    borrow::Cow,
    fmt::{self, Write},
    hash::{Hash, Hasher},
};

use tracing::debug;

use crate::{
    fragment::{Fragment, Fragments, Joined},
    token, Error,
};

/// A chainable builder of regular expression pattern strings.
///
/// Every operation appends to an internal buffer and returns `&mut Self`, so calls can be chained.
/// [`regex()`](Self::regex) renders the buffer, with `^` and `$` anchors added if
/// [`match_start()`](Self::match_start) and [`match_end()`](Self::match_end) were called.
///
/// Nothing is validated: the builder only assembles text for a regex engine to consume.
///
/// ## Example
/// ```
/// use ib_regex_builder::PatternBuilder;
///
/// let mut re = PatternBuilder::new();
/// re.match_start()
///     .digit()
///     .exactly(4)
///     .concat('-')
///     .digit()
///     .exactly(2)
///     .match_end();
/// assert_eq!(re.regex(), r"^\d{4}-\d{2}$");
/// ```
///
/// ## Construction
/// - [`PatternBuilder::new()`] / [`Default`]: empty, not anchored.
/// - [`Clone`] / `From<&PatternBuilder>`: an independent copy of another builder, anchors included.
/// - `From<&str>` / `From<String>`: continue building a raw pattern. The string is kept verbatim,
///   see [`PatternBuilder::parse`] for handling anchors in it.
///
/// Other inputs are rejected at compile time:
/// ```compile_fail
/// use ib_regex_builder::PatternBuilder;
///
/// let re = PatternBuilder::from(42);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PatternBuilder {
    buffer: String,
    match_start: bool,
    match_end: bool,
}

impl PatternBuilder {
    pub const fn new() -> Self {
        Self {
            buffer: String::new(),
            match_start: false,
            match_end: false,
        }
    }

    pub(crate) fn from_parts(buffer: String, match_start: bool, match_end: bool) -> Self {
        Self {
            buffer,
            match_start,
            match_end,
        }
    }

    fn append(&mut self, args: fmt::Arguments<'_>) -> &mut Self {
        // Writing into a `String` can only fail if a `Fragment` impl breaks its contract
        let len = self.buffer.len();
        if self.buffer.write_fmt(args).is_err() {
            debug!(
                partial = &self.buffer[len..],
                "fragment failed, discarding partial write"
            );
            self.buffer.truncate(len);
        }
        self
    }

    fn wrap(&mut self, open: &str, fragments: impl Fragments, close: &str) -> &mut Self {
        self.append(format_args!(
            "{open}{}{close}",
            Joined::new(&fragments, "")
        ))
    }

    /// Append all `fragments` in order.
    ///
    /// All other operations are built on this one.
    ///
    /// ```
    /// use ib_regex_builder::PatternBuilder;
    ///
    /// let mut re = PatternBuilder::new();
    /// re.concat(("id", '=', 42)).concat(["a", "b"]);
    /// assert_eq!(re.regex(), "id=42ab");
    /// ```
    pub fn concat(&mut self, fragments: impl Fragments) -> &mut Self {
        self.append(format_args!("{}", Joined::new(&fragments, "")))
    }

    /// Render the pattern: `^` if [`match_start()`](Self::match_start) was called,
    /// then the buffer, then `$` if [`match_end()`](Self::match_end) was called.
    pub fn regex(&self) -> String {
        self.to_string()
    }

    /// Same as [`regex()`](Self::regex), but reuses the buffer.
    pub fn into_regex(mut self) -> String {
        if self.match_start {
            self.buffer.insert_str(0, token::MATCH_START);
        }
        if self.match_end {
            self.buffer.push_str(token::MATCH_END);
        }
        self.buffer
    }

    /// The pattern built so far, without anchors.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn is_match_start(&self) -> bool {
        self.match_start
    }

    pub fn is_match_end(&self) -> bool {
        self.match_end
    }

    /// Anchor the rendered pattern to the start, i.e. prefix `^`.
    ///
    /// Nothing is appended to the buffer, so this can be called at any point of the chain.
    pub fn match_start(&mut self) -> &mut Self {
        self.match_start = true;
        self
    }

    /// Anchor the rendered pattern to the end, i.e. suffix `$`.
    ///
    /// Nothing is appended to the buffer, so this can be called at any point of the chain.
    pub fn match_end(&mut self) -> &mut Self {
        self.match_end = true;
        self
    }
}

/// Primitives. Each appends one fixed [`token`].
impl PatternBuilder {
    /// `(`
    pub fn group_open(&mut self) -> &mut Self {
        self.concat(token::GROUP_OPEN)
    }

    /// `)`
    pub fn group_close(&mut self) -> &mut Self {
        self.concat(token::GROUP_CLOSE)
    }

    /// `.`
    pub fn any_char_except_newline(&mut self) -> &mut Self {
        self.concat(token::ANY_CHAR_EXCEPT_NEWLINE)
    }

    /// `\d`
    pub fn digit(&mut self) -> &mut Self {
        self.concat(token::DIGIT)
    }

    /// `\w`
    pub fn word(&mut self) -> &mut Self {
        self.concat(token::WORD)
    }

    /// `\s`
    pub fn space(&mut self) -> &mut Self {
        self.concat(token::SPACE)
    }

    /// `\t`
    pub fn tab(&mut self) -> &mut Self {
        self.concat(token::TAB)
    }

    /// `\n`
    pub fn new_line(&mut self) -> &mut Self {
        self.concat(token::NEW_LINE)
    }

    /// `\r`
    pub fn carriage_return(&mut self) -> &mut Self {
        self.concat(token::CARRIAGE_RETURN)
    }

    /// `\f`
    pub fn form_feed(&mut self) -> &mut Self {
        self.concat(token::FORM_FEED)
    }

    /// `\b`
    pub fn word_boundary(&mut self) -> &mut Self {
        self.concat(token::WORD_BOUNDARY)
    }

    /// `\e`
    pub fn escape(&mut self) -> &mut Self {
        self.concat(token::ESCAPE)
    }

    /// `\v`
    pub fn vertical_tab(&mut self) -> &mut Self {
        self.concat(token::VERTICAL_TAB)
    }

    /// `\D`
    pub fn not_digit(&mut self) -> &mut Self {
        self.concat(token::NOT_DIGIT)
    }

    /// `\W`
    pub fn not_word(&mut self) -> &mut Self {
        self.concat(token::NOT_WORD)
    }

    /// `\S`
    pub fn not_space(&mut self) -> &mut Self {
        self.concat(token::NOT_SPACE)
    }

    /// `\B`
    pub fn not_word_boundary(&mut self) -> &mut Self {
        self.concat(token::NOT_WORD_BOUNDARY)
    }
}

/// Composites. Each wraps or joins its fragments before appending them.
impl PatternBuilder {
    /// A character class: `[fragments]`.
    ///
    /// ```
    /// use ib_regex_builder::PatternBuilder;
    ///
    /// assert_eq!(PatternBuilder::new().any_of(("a-z", "0-9")).regex(), "[a-z0-9]");
    /// assert_eq!(PatternBuilder::new().any_of("a-z0-9").regex(), "[a-z0-9]");
    /// ```
    pub fn any_of(&mut self, fragments: impl Fragments) -> &mut Self {
        self.wrap(token::CLASS_OPEN, fragments, token::CLASS_CLOSE)
    }

    /// A negated character class: `[^fragments]`.
    pub fn not_any_of(&mut self, fragments: impl Fragments) -> &mut Self {
        self.wrap(token::NEGATED_CLASS_OPEN, fragments, token::CLASS_CLOSE)
    }

    /// `pattern?`
    pub fn zero_or_one(&mut self, pattern: impl Fragment) -> &mut Self {
        self.concat((pattern, token::ZERO_OR_ONE))
    }

    /// `pattern*`
    pub fn zero_or_more(&mut self, pattern: impl Fragment) -> &mut Self {
        self.concat((pattern, token::ZERO_OR_MORE))
    }

    /// `pattern+`
    pub fn one_or_more(&mut self, pattern: impl Fragment) -> &mut Self {
        self.concat((pattern, token::ONE_OR_MORE))
    }

    /// `{times}`, repeating what was appended before.
    pub fn exactly(&mut self, times: usize) -> &mut Self {
        self.concat(('{', times, '}'))
    }

    /// `{minimum,}`
    pub fn at_least(&mut self, minimum: usize) -> &mut Self {
        self.concat(('{', minimum, ",}"))
    }

    /// `{minimum,maximum}`
    ///
    /// The bounds are not checked, `{5,2}` is emitted as is.
    pub fn at_least_and_not_more(&mut self, minimum: usize, maximum: usize) -> &mut Self {
        self.concat(('{', minimum, ',', maximum, '}'))
    }

    /// An alternation: `a|b|c`.
    ///
    /// Returns [`Error::TooFewAlternatives`] if less than 2 fragments are given, in which case
    /// nothing is appended.
    ///
    /// The alternatives are not grouped, wrap them with [`non_capturing_group()`](Self::non_capturing_group)
    /// or [`capturing_group()`](Self::capturing_group) to limit the alternation's extent.
    ///
    /// ```
    /// use ib_regex_builder::{Error, PatternBuilder};
    ///
    /// let mut re = PatternBuilder::new();
    /// re.or(["a", "b", "c"])?;
    /// assert_eq!(re.regex(), "a|b|c");
    ///
    /// assert_eq!(re.or("d").unwrap_err(), Error::TooFewAlternatives { count: 1 });
    /// assert_eq!(re.regex(), "a|b|c");
    /// # Ok::<(), Error>(())
    /// ```
    pub fn or(&mut self, fragments: impl Fragments) -> Result<&mut Self, Error> {
        let count = fragments.count();
        if count < 2 {
            debug!(count, "alternation rejected");
            return Err(Error::TooFewAlternatives { count });
        }
        Ok(self.append(format_args!(
            "{}",
            Joined::new(&fragments, token::ALTERNATION)
        )))
    }

    /// `(fragments)`
    pub fn capturing_group(&mut self, fragments: impl Fragments) -> &mut Self {
        self.wrap(token::GROUP_OPEN, fragments, token::GROUP_CLOSE)
    }

    /// `(?:fragments)`
    pub fn non_capturing_group(&mut self, fragments: impl Fragments) -> &mut Self {
        self.wrap(token::NON_CAPTURING_GROUP_OPEN, fragments, token::GROUP_CLOSE)
    }

    /// `(?<=fragments)`
    pub fn positive_look_behind(&mut self, fragments: impl Fragments) -> &mut Self {
        self.wrap(token::POSITIVE_LOOK_BEHIND_OPEN, fragments, token::GROUP_CLOSE)
    }

    /// `(?<!fragments)`
    pub fn negative_look_behind(&mut self, fragments: impl Fragments) -> &mut Self {
        self.wrap(token::NEGATIVE_LOOK_BEHIND_OPEN, fragments, token::GROUP_CLOSE)
    }

    /// `(?=fragments)`
    pub fn positive_look_ahead(&mut self, fragments: impl Fragments) -> &mut Self {
        self.wrap(token::POSITIVE_LOOK_AHEAD_OPEN, fragments, token::GROUP_CLOSE)
    }

    /// `(?!fragments)`
    pub fn negative_look_ahead(&mut self, fragments: impl Fragments) -> &mut Self {
        self.wrap(token::NEGATIVE_LOOK_AHEAD_OPEN, fragments, token::GROUP_CLOSE)
    }
}

impl fmt::Display for PatternBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.match_start {
            f.write_str(token::MATCH_START)?;
        }
        f.write_str(&self.buffer)?;
        if self.match_end {
            f.write_str(token::MATCH_END)?;
        }
        Ok(())
    }
}

/// Builders are equal if their rendered patterns are equal.
///
/// A builder is only comparable to another builder, not to strings or numbers:
/// ```compile_fail
/// use ib_regex_builder::PatternBuilder;
///
/// let _ = PatternBuilder::from("a") == "a";
/// ```
/// ```compile_fail
/// use ib_regex_builder::PatternBuilder;
///
/// let _ = PatternBuilder::from("1") == 1;
/// ```
/// ```compile_fail
/// use ib_regex_builder::PatternBuilder;
///
/// let _ = PatternBuilder::from("a") == String::from("a");
/// ```
impl PartialEq for PatternBuilder {
    fn eq(&self, other: &Self) -> bool {
        self.regex() == other.regex()
    }
}

impl Eq for PatternBuilder {}

impl Hash for PatternBuilder {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.regex().hash(state)
    }
}

impl From<&PatternBuilder> for PatternBuilder {
    fn from(builder: &PatternBuilder) -> Self {
        builder.clone()
    }
}

impl From<&str> for PatternBuilder {
    fn from(pattern: &str) -> Self {
        Self::from_parts(pattern.to_owned(), false, false)
    }
}

impl From<String> for PatternBuilder {
    fn from(pattern: String) -> Self {
        Self::from_parts(pattern, false, false)
    }
}

impl From<Cow<'_, str>> for PatternBuilder {
    fn from(pattern: Cow<'_, str>) -> Self {
        Self::from_parts(pattern.into_owned(), false, false)
    }
}

impl From<PatternBuilder> for String {
    fn from(builder: PatternBuilder) -> Self {
        builder.into_regex()
    }
}
