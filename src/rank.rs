//! Static shape classification.
//!
//! [`Shape`] assigns every supported type a `(list_rank, map_rank)` pair: how
//! many nested levels of list and key/value separators are needed to write a
//! value of that type unambiguously. Ranks are associated constants, so they
//! are fixed per type and never computed from data.
//!
//! | Shape | `LIST_RANK` | `MAP_RANK` |
//! |-------|-------------|------------|
//! | scalar (`bool`, integers, floats, `char`, `String`) | 0 | 0 |
//! | list-like `C<T>`, `[T; N]`, `Complex<T>` | `T + 1` | `T` |
//! | map-like `M<K, V>` | `max(K, V) + 1` | `max(K, V) + 1` |
//! | pair `(K, V)` | `max(K, V)` | `max(K, V) + 1` |
//!
//! A type without an impl has no supported shape, and using it with the
//! codec is a compile error:
//!
//! ```compile_fail
//! use pattern_codec::to_pattern;
//!
//! let pattern = to_pattern::<std::rc::Rc<i32>>();
//! ```
//!
//! The separator tables stop at rank 4; deriving a pattern for anything
//! deeper fails to compile as well:
//!
//! ```compile_fail
//! use pattern_codec::to_pattern;
//!
//! let pattern = to_pattern::<Vec<Vec<Vec<Vec<Vec<i32>>>>>>();
//! ```
//!
//! ```rust
//! use pattern_codec::Shape;
//! use std::collections::BTreeMap;
//!
//! assert_eq!(<Vec<Vec<u32>> as Shape>::LIST_RANK, 2);
//! assert_eq!(<BTreeMap<Vec<u32>, f64> as Shape>::LIST_RANK, 2);
//! assert_eq!(<BTreeMap<Vec<u32>, f64> as Shape>::MAP_RANK, 1);
//! assert_eq!(<Vec<Vec<u32>> as Shape>::LIST_SEPARATOR, ";");
//! ```

use crate::options::{list_separator, map_separator};
use indexmap::IndexMap;
use num_complex::Complex;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};

/// Nesting ranks of a type and the separators they select.
pub trait Shape {
    const LIST_RANK: usize;
    const MAP_RANK: usize;

    /// Separator between elements or entries of this type.
    const LIST_SEPARATOR: &'static str = list_separator(Self::LIST_RANK);

    /// Separator between a key and its value.
    const MAP_SEPARATOR: &'static str = map_separator(Self::MAP_RANK);
}

const fn max_rank(a: usize, b: usize) -> usize {
    if a > b {
        a
    } else {
        b
    }
}

impl_scalar_shape!(
    bool, char, String, f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize
);

impl<T: Shape> Shape for Vec<T> {
    const LIST_RANK: usize = T::LIST_RANK + 1;
    const MAP_RANK: usize = T::MAP_RANK;
}

impl<T: Shape> Shape for VecDeque<T> {
    const LIST_RANK: usize = T::LIST_RANK + 1;
    const MAP_RANK: usize = T::MAP_RANK;
}

impl<T: Shape> Shape for LinkedList<T> {
    const LIST_RANK: usize = T::LIST_RANK + 1;
    const MAP_RANK: usize = T::MAP_RANK;
}

impl<T: Shape> Shape for BTreeSet<T> {
    const LIST_RANK: usize = T::LIST_RANK + 1;
    const MAP_RANK: usize = T::MAP_RANK;
}

impl<T: Shape, S> Shape for HashSet<T, S> {
    const LIST_RANK: usize = T::LIST_RANK + 1;
    const MAP_RANK: usize = T::MAP_RANK;
}

impl<T: Shape, const N: usize> Shape for [T; N] {
    const LIST_RANK: usize = T::LIST_RANK + 1;
    const MAP_RANK: usize = T::MAP_RANK;
}

impl<T: Shape> Shape for Complex<T> {
    const LIST_RANK: usize = T::LIST_RANK + 1;
    const MAP_RANK: usize = T::MAP_RANK;
}

impl<K: Shape, V: Shape> Shape for BTreeMap<K, V> {
    const LIST_RANK: usize = max_rank(K::LIST_RANK, V::LIST_RANK) + 1;
    const MAP_RANK: usize = max_rank(K::MAP_RANK, V::MAP_RANK) + 1;
}

impl<K: Shape, V: Shape, S> Shape for HashMap<K, V, S> {
    const LIST_RANK: usize = max_rank(K::LIST_RANK, V::LIST_RANK) + 1;
    const MAP_RANK: usize = max_rank(K::MAP_RANK, V::MAP_RANK) + 1;
}

impl<K: Shape, V: Shape, S> Shape for IndexMap<K, V, S> {
    const LIST_RANK: usize = max_rank(K::LIST_RANK, V::LIST_RANK) + 1;
    const MAP_RANK: usize = max_rank(K::MAP_RANK, V::MAP_RANK) + 1;
}

/// A single entry never needs splitting, so a pair reuses the list separator
/// one level above its own list rank.
impl<K: Shape, V: Shape> Shape for (K, V) {
    const LIST_RANK: usize = max_rank(K::LIST_RANK, V::LIST_RANK);
    const MAP_RANK: usize = max_rank(K::MAP_RANK, V::MAP_RANK) + 1;
    const LIST_SEPARATOR: &'static str = list_separator(Self::LIST_RANK + 1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalars_have_rank_zero() {
        assert_eq!((<i32 as Shape>::LIST_RANK, <i32 as Shape>::MAP_RANK), (0, 0));
        assert_eq!((<String as Shape>::LIST_RANK, <String as Shape>::MAP_RANK), (0, 0));
        assert_eq!((<char as Shape>::LIST_RANK, <char as Shape>::MAP_RANK), (0, 0));
    }

    #[test]
    fn test_list_like_ranks() {
        assert_eq!(<Vec<f64> as Shape>::LIST_RANK, 1);
        assert_eq!(<VecDeque<Vec<u8>> as Shape>::LIST_RANK, 2);
        assert_eq!(<[[f64; 3]; 3] as Shape>::LIST_RANK, 2);
        assert_eq!(<Complex<f64> as Shape>::LIST_RANK, 1);
        assert_eq!(<Vec<Complex<f64>> as Shape>::LIST_SEPARATOR, ";");
        assert_eq!(<HashSet<BTreeMap<u8, u8>> as Shape>::MAP_RANK, 1);
    }

    #[test]
    fn test_map_ranks_take_maximum() {
        type Nested = BTreeMap<Vec<u32>, Vec<Vec<f64>>>;
        assert_eq!(<Nested as Shape>::LIST_RANK, 3);
        assert_eq!(<Nested as Shape>::MAP_RANK, 1);
        assert_eq!(<Nested as Shape>::LIST_SEPARATOR, "|");
        assert_eq!(<Nested as Shape>::MAP_SEPARATOR, ":");

        type MapOfMaps = HashMap<u8, IndexMap<u8, u8>>;
        assert_eq!(<MapOfMaps as Shape>::LIST_RANK, 2);
        assert_eq!(<MapOfMaps as Shape>::MAP_RANK, 2);
        assert_eq!(<MapOfMaps as Shape>::MAP_SEPARATOR, "=");
    }

    #[test]
    fn test_pair_ranks() {
        assert_eq!(<(u8, f64) as Shape>::LIST_RANK, 0);
        assert_eq!(<(u8, f64) as Shape>::MAP_RANK, 1);
        assert_eq!(<(u8, f64) as Shape>::LIST_SEPARATOR, ",");
        assert_eq!(<(Vec<u8>, f64) as Shape>::LIST_SEPARATOR, ";");
        assert_eq!(<Vec<(u8, f64)> as Shape>::LIST_RANK, 1);
        assert_eq!(<Vec<(u8, f64)> as Shape>::MAP_RANK, 1);
    }
}
