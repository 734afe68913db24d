/*!
Fixed tokens appended by [`PatternBuilder`](crate::PatternBuilder).

See [`ib_regex_builder`](crate#syntax) for what each token matches.
*/

/// `^`, only added by [`regex()`](crate::PatternBuilder::regex) when [`match_start()`](crate::PatternBuilder::match_start) was called.
pub const MATCH_START: &str = "^";
/// `$`, only added by [`regex()`](crate::PatternBuilder::regex) when [`match_end()`](crate::PatternBuilder::match_end) was called.
pub const MATCH_END: &str = "$";

/// `(`, [`group_open()`](crate::PatternBuilder::group_open) and the start of [`capturing_group()`](crate::PatternBuilder::capturing_group).
pub const GROUP_OPEN: &str = "(";
/// `)`, closes every group and look-around.
pub const GROUP_CLOSE: &str = ")";
/// `.`, [`any_char_except_newline()`](crate::PatternBuilder::any_char_except_newline).
pub const ANY_CHAR_EXCEPT_NEWLINE: &str = ".";

/// `\d`, [`digit()`](crate::PatternBuilder::digit).
pub const DIGIT: &str = r"\d";
/// `\w`, [`word()`](crate::PatternBuilder::word).
pub const WORD: &str = r"\w";
/// `\s`, [`space()`](crate::PatternBuilder::space).
pub const SPACE: &str = r"\s";
/// `\t`, [`tab()`](crate::PatternBuilder::tab).
pub const TAB: &str = r"\t";
/// `\n`, [`new_line()`](crate::PatternBuilder::new_line).
pub const NEW_LINE: &str = r"\n";
/// `\r`, [`carriage_return()`](crate::PatternBuilder::carriage_return).
pub const CARRIAGE_RETURN: &str = r"\r";
/// `\f`, [`form_feed()`](crate::PatternBuilder::form_feed).
pub const FORM_FEED: &str = r"\f";
/// `\b`, [`word_boundary()`](crate::PatternBuilder::word_boundary).
pub const WORD_BOUNDARY: &str = r"\b";
/// `\e`, [`escape()`](crate::PatternBuilder::escape). Not supported by every engine, e.g. the `regex` crate rejects it.
pub const ESCAPE: &str = r"\e";
/// `\v`, [`vertical_tab()`](crate::PatternBuilder::vertical_tab).
pub const VERTICAL_TAB: &str = r"\v";

/// `\D`, [`not_digit()`](crate::PatternBuilder::not_digit).
pub const NOT_DIGIT: &str = r"\D";
/// `\W`, [`not_word()`](crate::PatternBuilder::not_word).
pub const NOT_WORD: &str = r"\W";
/// `\S`, [`not_space()`](crate::PatternBuilder::not_space).
pub const NOT_SPACE: &str = r"\S";
/// `\B`, [`not_word_boundary()`](crate::PatternBuilder::not_word_boundary).
pub const NOT_WORD_BOUNDARY: &str = r"\B";

/// `[`, [`any_of()`](crate::PatternBuilder::any_of).
pub const CLASS_OPEN: &str = "[";
/// `[^`, [`not_any_of()`](crate::PatternBuilder::not_any_of).
pub const NEGATED_CLASS_OPEN: &str = "[^";
/// `]`
pub const CLASS_CLOSE: &str = "]";

/// `?`, [`zero_or_one()`](crate::PatternBuilder::zero_or_one).
pub const ZERO_OR_ONE: &str = "?";
/// `*`, [`zero_or_more()`](crate::PatternBuilder::zero_or_more).
pub const ZERO_OR_MORE: &str = "*";
/// `+`, [`one_or_more()`](crate::PatternBuilder::one_or_more).
pub const ONE_OR_MORE: &str = "+";

/// `|`, the separator of [`or()`](crate::PatternBuilder::or).
pub const ALTERNATION: &str = "|";

/// `(?:`, [`non_capturing_group()`](crate::PatternBuilder::non_capturing_group).
pub const NON_CAPTURING_GROUP_OPEN: &str = "(?:";
/// `(?<=`, [`positive_look_behind()`](crate::PatternBuilder::positive_look_behind).
pub const POSITIVE_LOOK_BEHIND_OPEN: &str = "(?<=";
/// `(?<!`, [`negative_look_behind()`](crate::PatternBuilder::negative_look_behind).
pub const NEGATIVE_LOOK_BEHIND_OPEN: &str = "(?<!";
/// `(?=`, [`positive_look_ahead()`](crate::PatternBuilder::positive_look_ahead).
pub const POSITIVE_LOOK_AHEAD_OPEN: &str = "(?=";
/// `(?!`, [`negative_look_ahead()`](crate::PatternBuilder::negative_look_ahead).
pub const NEGATIVE_LOOK_AHEAD_OPEN: &str = "(?!";
