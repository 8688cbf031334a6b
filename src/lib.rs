//! # pattern_codec
//!
//! Validated, round-trippable text for typed configuration values.
//!
//! ## What is it?
//!
//! A parameter file stores every value as a string next to a declared
//! *pattern*. This crate provides both halves of that contract:
//!
//! - **Patterns**: a closed family of validators ([`Integer`], [`Double`],
//!   [`Selection`], [`List`], [`Map`], [`MultipleSelection`], [`Bool`],
//!   [`Anything`], [`FileName`], [`DirectoryName`]) that check strings and
//!   describe themselves in a canonical text form
//! - **Factory**: [`pattern_factory`] rebuilds any pattern tree from that text
//! - **Codec**: [`Convert`] derives the pattern for a Rust type and converts
//!   values to and from text through it, for arbitrarily nested containers
//!
//! ## Quick Start
//!
//! ```rust
//! use pattern_codec::{to_pattern, to_string, to_value, OutputStyle};
//! use std::collections::BTreeMap;
//!
//! let weights: BTreeMap<String, Vec<f64>> =
//!     to_value("alpha: 0.5, 0.25 ; beta: 1").unwrap();
//! assert_eq!(weights["alpha"], vec![0.5, 0.25]);
//!
//! let text = to_string(&weights).unwrap();
//! assert_eq!(text, "alpha: 0.5, 0.25; beta: 1");
//!
//! let pattern = to_pattern::<BTreeMap<String, Vec<f64>>>();
//! assert!(pattern
//!     .description(OutputStyle::Machine)
//!     .starts_with("[Map of <[Anything]>:<[List of <[Double"));
//! ```
//!
//! ## Separators
//!
//! Nesting depth is resolved statically through [`Shape`]. A container whose
//! elements need `n` levels of separators uses the entry `n` of the tables
//! below, so inner levels never collide with outer ones:
//!
//! | rank | list | map |
//! |------|------|-----|
//! | 1 | `,` | `:` |
//! | 2 | `;` | `=` |
//! | 3 | `\|` | `@` |
//! | 4 | `%` | `#` |
//!
//! Four levels is a hard cap; deeper types do not compile.
//!
//! ## Patterns as data
//!
//! ```rust
//! use pattern_codec::{pattern_factory, Integer, List, OutputStyle, Pattern};
//!
//! let pattern = Pattern::from(List::new(Integer::new(1, 6).into(), 2, 2, ",").unwrap());
//! let description = pattern.description(OutputStyle::Machine);
//! assert_eq!(
//!     description,
//!     "[List of <[Integer range 1...6 (inclusive)]> of length 2...2 (inclusive)]"
//! );
//! assert_eq!(pattern_factory(&description).unwrap(), pattern);
//! ```
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Every failure is a [`Result`] carrying the offending text and the
//!   pattern's description; nothing is coerced or partially returned
//! - Patterns are immutable values; containers own deep copies of their
//!   sub-patterns
//!
//! See the [`grammar`] module for the description format.

#[macro_use]
mod macros;

pub mod convert;
pub mod error;
pub mod factory;
pub mod grammar;
pub mod options;
pub mod pattern;
pub mod rank;

pub use convert::Convert;
pub use error::{Error, Result};
pub use factory::pattern_factory;
pub use options::OutputStyle;
pub use pattern::{
    split_list, Anything, Bool, DirectoryName, Double, FileName, FileType, Integer, List, Map,
    MultipleSelection, Pattern, Selection,
};
pub use rank::Shape;

/// Derive the canonical pattern for `T`.
///
/// Derivation builds a fresh pattern tree on each call; callers converting
/// many values of the same type should derive once and use the `_with`
/// functions.
///
/// # Examples
///
/// ```rust
/// use pattern_codec::{to_pattern, OutputStyle};
///
/// let pattern = to_pattern::<Vec<u32>>();
/// assert_eq!(
///     pattern.description(OutputStyle::Machine),
///     "[List of <[Integer range 0...4294967295 (inclusive)]> of length 0...4294967295 (inclusive)]"
/// );
/// ```
#[must_use]
pub fn to_pattern<T: Convert>() -> Pattern {
    T::to_pattern()
}

/// Convert `value` to text using the canonical pattern of `T`.
///
/// # Examples
///
/// ```rust
/// use pattern_codec::to_string;
///
/// assert_eq!(to_string(&vec![1, 3, 5]).unwrap(), "1, 3, 5");
/// assert_eq!(to_string(&(7_u8, true)).unwrap(), "7: true");
/// ```
///
/// # Errors
///
/// Returns an error if a rendered element fails its pattern, e.g. a
/// non-finite float.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T: Convert>(value: &T) -> Result<String> {
    value.to_string_with(&T::to_pattern())
}

/// Convert `value` to text using an explicit pattern.
///
/// # Errors
///
/// Returns an error if `pattern` is the wrong variant for `T` or the rendered
/// text does not match it.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with<T: Convert>(value: &T, pattern: &Pattern) -> Result<String> {
    value.to_string_with(pattern)
}

/// Parse `text` into a `T` using the canonical pattern of `T`.
///
/// # Examples
///
/// ```rust
/// use pattern_codec::to_value;
///
/// let point: [f64; 2] = to_value("0.5, -1").unwrap();
/// assert_eq!(point, [0.5, -1.0]);
///
/// assert!(to_value::<[f64; 2]>("0.5").is_err());
/// ```
///
/// # Errors
///
/// Returns an error if `text` does not match the pattern or does not fit `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T: Convert>(text: &str) -> Result<T> {
    T::to_value_with(text, &T::to_pattern())
}

/// Parse `text` into a `T` using an explicit pattern.
///
/// # Examples
///
/// ```rust
/// use pattern_codec::{to_value_with, Integer, List, Pattern};
///
/// let dice = Pattern::from(List::new(Integer::new(1, 6).into(), 1, 5, ",").unwrap());
/// let roll: Vec<u8> = to_value_with("3, 6, 1", &dice).unwrap();
/// assert_eq!(roll, vec![3, 6, 1]);
/// assert!(to_value_with::<Vec<u8>>("3, 7", &dice).is_err());
/// ```
///
/// # Errors
///
/// Returns an error if `text` does not match `pattern`, `pattern` is the
/// wrong variant for `T`, or a token does not fit its type.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value_with<T: Convert>(text: &str, pattern: &Pattern) -> Result<T> {
    T::to_value_with(text, pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, BTreeSet, HashMap};

    #[test]
    fn test_vector_roundtrip() {
        let numbers = vec![1_u32, 3, 5];
        let text = to_string(&numbers).unwrap();
        assert_eq!(text, "1, 3, 5");
        assert_eq!(to_value::<Vec<u32>>("2,3,4,5").unwrap(), vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_map_of_vectors() {
        let map: BTreeMap<Vec<u32>, Vec<f64>> =
            to_value("1,2,3 : 5.0,6.0,7.0  ; 8,9,10 : 11.0,12.0,13.0").unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map[&vec![8, 9, 10]], vec![11.0, 12.0, 13.0]);
        assert_eq!(
            to_string(&map).unwrap(),
            "1, 2, 3: 5, 6, 7; 8, 9, 10: 11, 12, 13"
        );
    }

    #[test]
    fn test_set_and_hash_map() {
        let set: BTreeSet<i8> = to_value("3, 1, 3, 2").unwrap();
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);

        let map: HashMap<String, bool> = to_value("a: true, b: false").unwrap();
        assert_eq!(map.get("b"), Some(&false));
    }

    #[test]
    fn test_mismatch_reports_text_and_pattern() {
        let err = to_value::<Vec<u8>>("1, x").unwrap_err();
        match err {
            Error::NoMatch { text, pattern } => {
                assert_eq!(text, "1, x");
                assert!(pattern.starts_with("[List of <[Integer range 0...255"));
            }
            other => panic!("Expected NoMatch, got {other:?}"),
        }
    }

    #[test]
    fn test_explicit_pattern() {
        let pattern = Pattern::from(List::of(Selection::new("a|b").into()).with_separator(";"));
        let text = to_string_with(&vec!["a".to_string(), "b".to_string()], &pattern).unwrap();
        assert_eq!(text, "a; b");
        let back: Vec<String> = to_value_with("b;a", &pattern).unwrap();
        assert_eq!(back, vec!["b", "a"]);
    }
}
