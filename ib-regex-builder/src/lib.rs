/*!
A fluent, chainable builder of regular expression pattern strings.

Compose patterns from named primitives (digits, words, boundaries, groups, repetitions, look-around, ...)
instead of writing raw pattern syntax. The builder only assembles text: nothing is parsed, validated or matched.
Feed the [rendered pattern](PatternBuilder::regex) to the regex engine of your choice.
*/
//! ## Usage
//! ```
//! use ib_regex_builder::PatternBuilder;
//!
//! let mut re = PatternBuilder::new();
//! re.match_start()
//!     .capturing_group(PatternBuilder::new().digit().exactly(4))
//!     .concat('-')
//!     .capturing_group(PatternBuilder::new().digit().exactly(2))
//!     .match_end();
//! assert_eq!(re.regex(), r"^(\d{4})-(\d{2})$");
//! ```
/*!
Operations take [`Fragments`], so strings, chars, integers and other builders can be mixed:
```
use ib_regex_builder::PatternBuilder;

let mut re = PatternBuilder::new();
re.any_of(("a-z", '_', 0, "-9"))
    .one_or_more(PatternBuilder::new().word())
    .or(["com", "org"])?;
assert_eq!(re.regex(), r"[a-z_0-9]\w+com|org");
# Ok::<(), ib_regex_builder::Error>(())
```

## Syntax
The rendered patterns use the conventional syntax, as supported by [`regex`](https://docs.rs/regex/) except for look-around and `\e`:

<pre class="rust">
(  )          group_open, group_close
.             any_char_except_newline
\d  \D        digit, not_digit
\w  \W        word, not_word
\s  \S        space, not_space
\b  \B        word_boundary, not_word_boundary
\t \n \r \f   tab, new_line, carriage_return, form_feed
\v  \e        vertical_tab, escape
[x]  [^x]     any_of, not_any_of
x?  x*  x+    zero_or_one, zero_or_more, one_or_more
{n}           exactly
{n,}          at_least
{n,m}         at_least_and_not_more
x|y           or
(x)  (?:x)    capturing_group, non_capturing_group
(?=x)  (?!x)  positive_look_ahead, negative_look_ahead
(?<=x) (?<!x) positive_look_behind, negative_look_behind
^  $          match_start, match_end (always at the ends of the rendered pattern)
</pre>

The tokens are also available as constants in [`token`].
*/
//! ## Crate features
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(feature = "doc", doc = document_features::document_features!())]

mod builder;
mod error;
pub mod fragment;
mod parse;
pub mod token;

pub use builder::PatternBuilder;
pub use error::Error;
pub use fragment::{Fragment, Fragments};
pub use parse::AnchorMode;

mod private {
    pub trait Sealed {}
}
use private::Sealed;

#[cfg(test)]
mod tests {
    use crate::{AnchorMode, PatternBuilder};

    #[test]
    fn date() {
        let digits = |n| {
            let mut re = PatternBuilder::new();
            re.digit().exactly(n);
            re
        };

        let mut re = PatternBuilder::new();
        re.match_start()
            .capturing_group(digits(4))
            .concat('-')
            .capturing_group(digits(2))
            .concat('-')
            .capturing_group(digits(2))
            .match_end();
        assert_eq!(re.regex(), r"^(\d{4})-(\d{2})-(\d{2})$");

        let parsed = PatternBuilder::parse(&re.regex())
            .anchors(AnchorMode::Strip)
            .call()
            .unwrap();
        assert_eq!(parsed, re);
    }

    #[test]
    fn password() {
        let mut re = PatternBuilder::new();
        re.match_start()
            .positive_look_ahead((".*", r"\d"))
            .positive_look_ahead(".*[a-z]")
            .negative_look_ahead(PatternBuilder::new().any_char_except_newline().zero_or_more(r"\s"))
            .any_char_except_newline()
            .at_least_and_not_more(8, 64)
            .match_end();
        assert_eq!(re.regex(), r"^(?=.*\d)(?=.*[a-z])(?!.\s*).{8,64}$");
    }
}
