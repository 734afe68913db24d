/*!
Pattern fragments: values that [`PatternBuilder`] operations accept and convert to text.

- [`Fragment`] is a single value:
  - `str`, [`String`] and [`Cow<str>`] are written verbatim.
  - [`char`] is written as itself.
  - Primitive integers are written as decimal digits.
  - [`PatternBuilder`] is written as its [rendered pattern](PatternBuilder::regex), anchors included.
  - `&T`, `&mut T` and `Box<T>` are written as `T`, so a chain like `PatternBuilder::new().digit()` can be passed directly.
- [`Fragments`] is an argument list:
  - Any single [`Fragment`].
  - Arrays, slices and [`Vec`]s of one fragment type.
  - Tuples of up to 8 fragments of different types.

## Example
```
use ib_regex_builder::PatternBuilder;

let inner = PatternBuilder::new().digit().clone();
let mut re = PatternBuilder::new();
re.concat("a")
    .concat(['b', 'c'])
    .concat(("d", 42, '_', &inner))
    .concat(vec![String::from("e"), String::from("f")]);
assert_eq!(re.regex(), r"abcd42_\def");
```
*/
use std::{borrow::Cow, fmt};

use itertools::Itertools;

use crate::{PatternBuilder, Sealed};

/// A single value that can be appended to a pattern.
///
/// Implementations must not fail unless the [`fmt::Formatter`] does, the same contract as [`fmt::Display`].
///
/// ## Example
/// ```
/// use std::fmt;
/// use ib_regex_builder::{Fragment, PatternBuilder};
///
/// struct Range(char, char);
///
/// impl Fragment for Range {
///     fn fmt_fragment(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{}-{}", self.0, self.1)
///     }
/// }
///
/// let mut re = PatternBuilder::new();
/// re.any_of((Range('a', 'z'), Range('0', '9')));
/// assert_eq!(re.regex(), "[a-z0-9]");
/// ```
pub trait Fragment {
    fn fmt_fragment(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl Fragment for str {
    fn fmt_fragment(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl Fragment for String {
    fn fmt_fragment(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl Fragment for Cow<'_, str> {
    fn fmt_fragment(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl Fragment for char {
    fn fmt_fragment(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Write::write_char(f, *self)
    }
}

macro_rules! impl_fragment_for_integer {
    ($($t:ty),*) => {
        $(
            impl Fragment for $t {
                fn fmt_fragment(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}

impl_fragment_for_integer!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Fragment for PatternBuilder {
    fn fmt_fragment(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<T: Fragment + ?Sized> Fragment for &T {
    fn fmt_fragment(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).fmt_fragment(f)
    }
}

impl<T: Fragment + ?Sized> Fragment for &mut T {
    fn fmt_fragment(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).fmt_fragment(f)
    }
}

impl<T: Fragment + ?Sized> Fragment for Box<T> {
    fn fmt_fragment(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).fmt_fragment(f)
    }
}

/// An ordered list of [`Fragment`]s, i.e. the variadic arguments of [`PatternBuilder`] operations.
///
/// This trait is sealed. See the [module docs](self) for the implementors.
pub trait Fragments: Sealed {
    /// The number of fragments in the list.
    fn count(&self) -> usize;

    /// Write all fragments in order, with `separator` between each two of them.
    fn fmt_joined(&self, separator: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl<T: Fragment> Sealed for T {}

impl<T: Fragment> Fragments for T {
    fn count(&self) -> usize {
        1
    }

    fn fmt_joined(&self, _separator: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_fragment(f)
    }
}

struct FragmentDisplay<'a, T: ?Sized>(&'a T);

impl<T: Fragment + ?Sized> fmt::Display for FragmentDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_fragment(f)
    }
}

fn fmt_slice<T: Fragment>(
    fragments: &[T],
    separator: &str,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    write!(
        f,
        "{}",
        fragments.iter().map(FragmentDisplay).format(separator)
    )
}

impl<T: Fragment, const N: usize> Sealed for [T; N] {}

impl<T: Fragment, const N: usize> Fragments for [T; N] {
    fn count(&self) -> usize {
        N
    }

    fn fmt_joined(&self, separator: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_slice(self, separator, f)
    }
}

impl<T: Fragment> Sealed for &[T] {}

impl<T: Fragment> Fragments for &[T] {
    fn count(&self) -> usize {
        self.len()
    }

    fn fmt_joined(&self, separator: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_slice(self, separator, f)
    }
}

impl<T: Fragment> Sealed for Vec<T> {}

impl<T: Fragment> Fragments for Vec<T> {
    fn count(&self) -> usize {
        self.len()
    }

    fn fmt_joined(&self, separator: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_slice(self, separator, f)
    }
}

macro_rules! impl_fragments_for_tuple {
    ($len:expr; $first:ident $(, $rest:ident)*) => {
        impl<$first: Fragment, $($rest: Fragment),*> Sealed for ($first, $($rest,)*) {}

        impl<$first: Fragment, $($rest: Fragment),*> Fragments for ($first, $($rest,)*) {
            fn count(&self) -> usize {
                $len
            }

            #[allow(non_snake_case)]
            fn fmt_joined(&self, separator: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let ($first, $($rest,)*) = self;
                $first.fmt_fragment(f)?;
                $(
                    f.write_str(separator)?;
                    $rest.fmt_fragment(f)?;
                )*
                Ok(())
            }
        }
    };
}

impl_fragments_for_tuple!(1; A);
impl_fragments_for_tuple!(2; A, B);
impl_fragments_for_tuple!(3; A, B, C);
impl_fragments_for_tuple!(4; A, B, C, D);
impl_fragments_for_tuple!(5; A, B, C, D, E);
impl_fragments_for_tuple!(6; A, B, C, D, E, F);
impl_fragments_for_tuple!(7; A, B, C, D, E, F, G);
impl_fragments_for_tuple!(8; A, B, C, D, E, F, G, H);

/// [`fmt::Display`] adapter writing `fragments` joined by `separator`.
pub(crate) struct Joined<'a, F: ?Sized> {
    fragments: &'a F,
    separator: &'a str,
}

impl<'a, F: Fragments + ?Sized> Joined<'a, F> {
    pub fn new(fragments: &'a F, separator: &'a str) -> Self {
        Self {
            fragments,
            separator,
        }
    }
}

impl<F: Fragments + ?Sized> fmt::Display for Joined<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fragments.fmt_joined(self.separator, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(fragments: impl Fragments, separator: &str) -> String {
        Joined::new(&fragments, separator).to_string()
    }

    #[test]
    fn single() {
        assert_eq!(render("a-z", "|"), "a-z");
        assert_eq!(render(String::from("a-z"), "|"), "a-z");
        assert_eq!(render(Cow::Borrowed("x"), "|"), "x");
        assert_eq!(render('_', "|"), "_");
        assert_eq!(render(&&"nested", "|"), "nested");
        assert_eq!(render(Box::new(7u8), "|"), "7");
        assert_eq!("a-z".count(), 1);
    }

    #[test]
    fn integers() {
        assert_eq!(render(0usize, ""), "0");
        assert_eq!(render(-12i32, ""), "-12");
        assert_eq!(render(u128::MAX, ""), u128::MAX.to_string());
    }

    #[test]
    fn builder() {
        let mut inner = PatternBuilder::new();
        inner.digit().match_start();
        assert_eq!(render(&inner, ""), r"^\d");
        assert_eq!(render(inner, ""), r"^\d");
    }

    #[test]
    fn sequences() {
        assert_eq!(render(["a", "b", "c"], "|"), "a|b|c");
        assert_eq!(render(&["a", "b"][..], ""), "ab");
        assert_eq!(render(vec![1, 2, 3], ","), "1,2,3");
        assert_eq!(render([] as [&str; 0], "|"), "");
        assert_eq!(["a", "b", "c"].count(), 3);
        assert_eq!(vec!["a"; 5].count(), 5);
        assert_eq!(Vec::<&str>::new().count(), 0);
    }

    #[test]
    fn tuples() {
        assert_eq!(render(("a",), "|"), "a");
        assert_eq!(render(("a", 1, 'c'), "|"), "a|1|c");
        assert_eq!(render(("a", 1, 'c'), ""), "a1c");
        assert_eq!(
            render((1, 2, 3, 4, 5, 6, 7, "eight"), "-"),
            "1-2-3-4-5-6-7-eight"
        );
        assert_eq!(("a", 1, 'c').count(), 3);
        assert_eq!(("a",).count(), 1);
    }
}
