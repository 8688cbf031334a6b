//! Type-directed conversion between values and text.
//!
//! This module provides the [`Convert`] trait and its implementations for
//! every supported [`Shape`]. Each implementation can:
//!
//! - derive the canonical [`Pattern`] for its type ([`Convert::to_pattern`])
//! - render a value with a given pattern ([`Convert::to_string_with`])
//! - parse text with a given pattern ([`Convert::to_value_with`])
//!
//! Containers pick their separators from the type's rank, render elements
//! with the inner pattern, and join them with `separator + " "`. Map entries
//! are written as `key<kv-separator> value`. Every rendered string is
//! validated against the pattern before it is returned, and every parsed
//! string is validated before it is split.
//!
//! ## Examples
//!
//! ```rust
//! use pattern_codec::{to_string, to_value};
//!
//! let nested = vec![vec![1, 2], vec![3]];
//! let text = to_string(&nested).unwrap();
//! assert_eq!(text, "1, 2; 3");
//!
//! let back: Vec<Vec<i32>> = to_value("1, 2 ; 3").unwrap();
//! assert_eq!(back, nested);
//! ```
//!
//! A pattern derived once can be reused for every conversion of the same type:
//!
//! ```rust
//! use pattern_codec::Convert;
//!
//! let pattern = <Vec<u16>>::to_pattern();
//! for text in ["1, 2", "3", ""] {
//!     let value = <Vec<u16>>::to_value_with(text, &pattern).unwrap();
//!     assert_eq!(value.to_string_with(&pattern).unwrap(), text);
//! }
//! ```

use crate::pattern::{split_list, Bool, Integer, List, Map};
use crate::{Anything, Error, Pattern, Result, Shape};
use indexmap::IndexMap;
use num_complex::Complex;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::{BuildHasher, Hash};
use tracing::debug;

/// String conversion for a classified shape.
///
/// The pattern passed to [`to_string_with`](Convert::to_string_with) and
/// [`to_value_with`](Convert::to_value_with) need not be the derived one;
/// any pattern of the right variant works, e.g. a [`List`] with tighter
/// length bounds.
pub trait Convert: Shape + Sized {
    /// Builds the canonical pattern for `Self`.
    fn to_pattern() -> Pattern;

    /// Renders `self` as text that matches `pattern`.
    ///
    /// # Errors
    ///
    /// Fails if `pattern` has the wrong variant for this shape, or if an
    /// element or the assembled text does not match its pattern.
    fn to_string_with(&self, pattern: &Pattern) -> Result<String>;

    /// Parses `text` after validating it against `pattern`.
    ///
    /// # Errors
    ///
    /// Fails if `text` does not match `pattern`, if a structural split has the
    /// wrong arity, or if a token does not fit its Rust type.
    fn to_value_with(text: &str, pattern: &Pattern) -> Result<Self>;
}

pub(crate) fn ensure_match(text: &str, pattern: &Pattern) -> Result<()> {
    if pattern.matches(text) {
        Ok(())
    } else {
        debug!(text, %pattern, "text does not match pattern");
        Err(Error::no_match(text, pattern))
    }
}

fn expect_list(pattern: &Pattern) -> Result<&List> {
    pattern
        .as_list()
        .ok_or_else(|| Error::pattern_kind("List", pattern))
}

fn expect_map(pattern: &Pattern) -> Result<&Map> {
    pattern
        .as_map()
        .ok_or_else(|| Error::pattern_kind("Map", pattern))
}

fn list_pattern<T: Convert>(min_elements: u32, max_elements: u32, separator: &str) -> Pattern {
    List::from_parts(T::to_pattern(), min_elements, max_elements, separator).into()
}

fn map_pattern<K: Convert, V: Convert>(
    min_elements: u32,
    max_elements: u32,
    separator: &str,
    key_value_separator: &str,
) -> Pattern {
    Map::from_parts(
        K::to_pattern(),
        V::to_pattern(),
        min_elements,
        max_elements,
        separator,
        key_value_separator,
    )
    .into()
}

fn join_list<'a, T, I>(items: I, pattern: &Pattern) -> Result<String>
where
    T: Convert + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let list = expect_list(pattern)?;
    let parts = items
        .into_iter()
        .map(|item| item.to_string_with(list.base_pattern()))
        .collect::<Result<Vec<_>>>()?;
    let text = parts.join(&format!("{} ", list.separator()));
    ensure_match(&text, pattern)?;
    Ok(text)
}

fn split_items<T, C>(text: &str, pattern: &Pattern) -> Result<C>
where
    T: Convert,
    C: FromIterator<T>,
{
    ensure_match(text, pattern)?;
    let list = expect_list(pattern)?;
    split_list(text, list.separator())
        .into_iter()
        .map(|token| T::to_value_with(token, list.base_pattern()))
        .collect()
}

/// Parses exactly `N` elements, for fixed-arity shapes.
fn split_exact<T: Convert, const N: usize>(text: &str, pattern: &Pattern) -> Result<[T; N]> {
    let items: Vec<T> = split_items(text, pattern)?;
    let found = items.len();
    <[T; N]>::try_from(items).map_err(|_| {
        Error::structure(text, pattern, format!("expected {N} elements, found {found}"))
    })
}

fn join_map<'a, K, V, I>(entries: I, pattern: &Pattern) -> Result<String>
where
    K: Convert + 'a,
    V: Convert + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    let map = expect_map(pattern)?;
    let parts = entries
        .into_iter()
        .map(|(key, value)| -> Result<String> {
            Ok(format!(
                "{}{} {}",
                key.to_string_with(map.key_pattern())?,
                map.key_value_separator(),
                value.to_string_with(map.value_pattern())?
            ))
        })
        .collect::<Result<Vec<_>>>()?;
    let text = parts.join(&format!("{} ", map.separator()));
    ensure_match(&text, pattern)?;
    Ok(text)
}

fn split_entries<K, V, C>(text: &str, pattern: &Pattern) -> Result<C>
where
    K: Convert,
    V: Convert,
    C: FromIterator<(K, V)>,
{
    ensure_match(text, pattern)?;
    let map = expect_map(pattern)?;
    split_list(text, map.separator())
        .into_iter()
        .map(|entry| -> Result<(K, V)> {
            match split_list(entry, map.key_value_separator()).as_slice() {
                [key, value] => Ok((
                    K::to_value_with(key, map.key_pattern())?,
                    V::to_value_with(value, map.value_pattern())?,
                )),
                parts => Err(Error::structure(
                    entry,
                    pattern,
                    format!(
                        "expected a key and a value separated by `{}`, found {} parts",
                        map.key_value_separator(),
                        parts.len()
                    ),
                )),
            }
        })
        .collect()
}

impl_integer_convert!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);
impl_float_convert!(f32, f64);

impl Convert for bool {
    fn to_pattern() -> Pattern {
        Bool::new().into()
    }

    fn to_string_with(&self, pattern: &Pattern) -> Result<String> {
        let text = if *self { "true" } else { "false" };
        ensure_match(text, pattern)?;
        Ok(text.to_string())
    }

    fn to_value_with(text: &str, pattern: &Pattern) -> Result<Self> {
        ensure_match(text, pattern)?;
        match text {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(Error::parse::<bool>(text)),
        }
    }
}

/// Characters travel as their code point, never as a literal glyph.
impl Convert for char {
    fn to_pattern() -> Pattern {
        Integer::new(0, i128::from(u32::from(char::MAX))).into()
    }

    fn to_string_with(&self, pattern: &Pattern) -> Result<String> {
        let text = u32::from(*self).to_string();
        ensure_match(&text, pattern)?;
        Ok(text)
    }

    fn to_value_with(text: &str, pattern: &Pattern) -> Result<Self> {
        ensure_match(text, pattern)?;
        text.trim()
            .parse::<u32>()
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| Error::parse::<char>(text))
    }
}

impl Convert for String {
    fn to_pattern() -> Pattern {
        Anything.into()
    }

    fn to_string_with(&self, pattern: &Pattern) -> Result<String> {
        ensure_match(self, pattern)?;
        Ok(self.clone())
    }

    fn to_value_with(text: &str, pattern: &Pattern) -> Result<Self> {
        ensure_match(text, pattern)?;
        Ok(text.to_string())
    }
}

impl<T: Convert> Convert for Vec<T> {
    fn to_pattern() -> Pattern {
        list_pattern::<T>(0, List::MAX_INT_VALUE, Self::LIST_SEPARATOR)
    }

    fn to_string_with(&self, pattern: &Pattern) -> Result<String> {
        join_list(self, pattern)
    }

    fn to_value_with(text: &str, pattern: &Pattern) -> Result<Self> {
        split_items(text, pattern)
    }
}

impl<T: Convert> Convert for VecDeque<T> {
    fn to_pattern() -> Pattern {
        list_pattern::<T>(0, List::MAX_INT_VALUE, Self::LIST_SEPARATOR)
    }

    fn to_string_with(&self, pattern: &Pattern) -> Result<String> {
        join_list(self, pattern)
    }

    fn to_value_with(text: &str, pattern: &Pattern) -> Result<Self> {
        split_items(text, pattern)
    }
}

impl<T: Convert> Convert for LinkedList<T> {
    fn to_pattern() -> Pattern {
        list_pattern::<T>(0, List::MAX_INT_VALUE, Self::LIST_SEPARATOR)
    }

    fn to_string_with(&self, pattern: &Pattern) -> Result<String> {
        join_list(self, pattern)
    }

    fn to_value_with(text: &str, pattern: &Pattern) -> Result<Self> {
        split_items(text, pattern)
    }
}

impl<T: Convert + Ord> Convert for BTreeSet<T> {
    fn to_pattern() -> Pattern {
        list_pattern::<T>(0, List::MAX_INT_VALUE, Self::LIST_SEPARATOR)
    }

    fn to_string_with(&self, pattern: &Pattern) -> Result<String> {
        join_list(self, pattern)
    }

    fn to_value_with(text: &str, pattern: &Pattern) -> Result<Self> {
        split_items(text, pattern)
    }
}

impl<T, S> Convert for HashSet<T, S>
where
    T: Convert + Eq + Hash,
    S: BuildHasher + Default,
{
    fn to_pattern() -> Pattern {
        list_pattern::<T>(0, List::MAX_INT_VALUE, Self::LIST_SEPARATOR)
    }

    fn to_string_with(&self, pattern: &Pattern) -> Result<String> {
        join_list(self, pattern)
    }

    fn to_value_with(text: &str, pattern: &Pattern) -> Result<Self> {
        split_items(text, pattern)
    }
}

/// Fixed-arity vectors: a list of exactly `N` elements.
impl<T: Convert, const N: usize> Convert for [T; N] {
    fn to_pattern() -> Pattern {
        let arity = u32::try_from(N).unwrap_or(u32::MAX);
        list_pattern::<T>(arity, arity, Self::LIST_SEPARATOR)
    }

    fn to_string_with(&self, pattern: &Pattern) -> Result<String> {
        join_list(self, pattern)
    }

    fn to_value_with(text: &str, pattern: &Pattern) -> Result<Self> {
        split_exact(text, pattern)
    }
}

/// Complex numbers: `re, im`.
impl<T: Convert> Convert for Complex<T> {
    fn to_pattern() -> Pattern {
        list_pattern::<T>(2, 2, Self::LIST_SEPARATOR)
    }

    fn to_string_with(&self, pattern: &Pattern) -> Result<String> {
        join_list([&self.re, &self.im], pattern)
    }

    fn to_value_with(text: &str, pattern: &Pattern) -> Result<Self> {
        let [re, im]: [T; 2] = split_exact(text, pattern)?;
        Ok(Complex::new(re, im))
    }
}

impl<K, V> Convert for BTreeMap<K, V>
where
    K: Convert + Ord,
    V: Convert,
{
    fn to_pattern() -> Pattern {
        map_pattern::<K, V>(
            0,
            Map::MAX_INT_VALUE,
            Self::LIST_SEPARATOR,
            Self::MAP_SEPARATOR,
        )
    }

    fn to_string_with(&self, pattern: &Pattern) -> Result<String> {
        join_map(self, pattern)
    }

    fn to_value_with(text: &str, pattern: &Pattern) -> Result<Self> {
        split_entries(text, pattern)
    }
}

impl<K, V, S> Convert for HashMap<K, V, S>
where
    K: Convert + Eq + Hash,
    V: Convert,
    S: BuildHasher + Default,
{
    fn to_pattern() -> Pattern {
        map_pattern::<K, V>(
            0,
            Map::MAX_INT_VALUE,
            Self::LIST_SEPARATOR,
            Self::MAP_SEPARATOR,
        )
    }

    fn to_string_with(&self, pattern: &Pattern) -> Result<String> {
        join_map(self, pattern)
    }

    fn to_value_with(text: &str, pattern: &Pattern) -> Result<Self> {
        split_entries(text, pattern)
    }
}

impl<K, V, S> Convert for IndexMap<K, V, S>
where
    K: Convert + Eq + Hash,
    V: Convert,
    S: BuildHasher + Default,
{
    fn to_pattern() -> Pattern {
        map_pattern::<K, V>(
            0,
            Map::MAX_INT_VALUE,
            Self::LIST_SEPARATOR,
            Self::MAP_SEPARATOR,
        )
    }

    fn to_string_with(&self, pattern: &Pattern) -> Result<String> {
        join_map(self, pattern)
    }

    fn to_value_with(text: &str, pattern: &Pattern) -> Result<Self> {
        split_entries(text, pattern)
    }
}

/// A single key/value pair: a map of exactly one entry.
impl<K: Convert, V: Convert> Convert for (K, V) {
    fn to_pattern() -> Pattern {
        map_pattern::<K, V>(1, 1, Self::LIST_SEPARATOR, Self::MAP_SEPARATOR)
    }

    fn to_string_with(&self, pattern: &Pattern) -> Result<String> {
        join_map([(&self.0, &self.1)], pattern)
    }

    fn to_value_with(text: &str, pattern: &Pattern) -> Result<Self> {
        let entries: Vec<(K, V)> = split_entries(text, pattern)?;
        let found = entries.len();
        let mut entries = entries.into_iter();
        match (entries.next(), entries.next()) {
            (Some(pair), None) => Ok(pair),
            _ => Err(Error::structure(
                text,
                pattern,
                format!("expected exactly one entry, found {found}"),
            )),
        }
    }
}
