//! Pattern Description and Value Text Grammar
//!
//! This module documents the two text formats handled by this library: the
//! machine description of a pattern, and the text of a converted value.
//!
//! # Overview
//!
//! A parameter is stored as two strings: its value and the description of the
//! pattern that value must satisfy. Both are plain text meant to live in input
//! files, so both are designed to be written by hand and read back exactly.
//!
//! ## Design Philosophy
//!
//! - **Self-describing**: a machine description alone rebuilds its pattern
//! - **Deterministic**: describing a rebuilt pattern yields the same text
//! - **Strict**: text either matches or is rejected with its pattern attached
//! - **Nesting by rank**: separators are chosen from a fixed table by depth
//!
//! # Machine Descriptions
//!
//! Every description opens with a tag unique to its variant and ends with `]`.
//!
//! | Variant | Description |
//! |---------|-------------|
//! | Integer | `[Integer range A...B (inclusive)]` or `[Integer]` |
//! | Double | `[Double range A...B (inclusive)]` or `[Double]` |
//! | Selection | `[Selection a\|b\|c ]` |
//! | List | `[List of <SUB> of length MIN...MAX (inclusive)]` |
//! | Map | `[Map of <KEY>KV<VALUE> of length MIN...MAX (inclusive)]` |
//! | MultipleSelection | `[MultipleSelection a\|b\|c ]` |
//! | Bool | `[Bool]` |
//! | Anything | `[Anything]` |
//! | FileName | `[FileName (Type: input)]` or `[FileName (Type: output)]` |
//! | DirectoryName | `[DirectoryName]` |
//!
//! ## Numeric Bounds
//!
//! Bounds are inclusive. The full integer range is written with the sentinels
//! `MIN_INT` and `MAX_INT`, the full double range with `-MAX_DOUBLE` and
//! `MAX_DOUBLE`:
//!
//! ```text
//! [Integer range MIN_INT...MAX_INT (inclusive)]
//! [Double range -MAX_DOUBLE...MAX_DOUBLE (inclusive)]
//! [Double range 0...1e-10 (inclusive)]
//! ```
//!
//! A pattern with inverted bounds (`upper < lower`) accepts every number and is
//! described by its bare tag, `[Integer]` or `[Double]`.
//!
//! ## Containers
//!
//! Sub-pattern descriptions are embedded between `<` and `>`. A separator other
//! than `,` is appended before the closing bracket:
//!
//! ```text
//! [List of <[Double]> of length 0...4294967295 (inclusive) separated by <;>]
//! [Map of <[Anything]>=<[Bool]> of length 1...1 (inclusive)]
//! ```
//!
//! The length clause may be omitted; the defaults are `0...4294967295`.
//!
//! # Value Text
//!
//! ## Scalars
//!
//! | Type | Text | Example |
//! |------|------|---------|
//! | `bool` | `true` or `false` | `true` |
//! | integers | decimal | `-42` |
//! | `f32`, `f64` | shortest round-trip decimal | `0.25`, `1e300` |
//! | `char` | Unicode code point | `955` |
//! | `String` | verbatim | `hello world` |
//!
//! Floats with magnitude in `[1e-5, 1e16)` (and zero) use positional notation;
//! everything else uses exponential notation. `NaN` and infinities are never
//! produced or accepted.
//!
//! ## Containers
//!
//! Elements are joined with the separator followed by a space. Map entries are
//! written as `key`, key/value separator, space, `value`. On input, tokens are
//! trimmed, trailing whitespace is dropped, and one trailing separator is
//! ignored:
//!
//! ```text
//! Vec<i32>                       1, 2, 3
//! Vec<Vec<i32>>                  1, 2; 3
//! BTreeMap<String, f64>          a: 0.5, b: 1
//! BTreeMap<Vec<u32>, Vec<f64>>   1, 2, 3: 5, 6; 8, 9: 11
//! (u8, bool)                     7: true
//! Complex<f64>                   1.5, -2
//! ```
//!
//! ## Separator Tables
//!
//! | Rank | List | Map |
//! |------|------|-----|
//! | 1 | `,` | `:` |
//! | 2 | `;` | `=` |
//! | 3 | `\|` | `@` |
//! | 4 | `%` | `#` |
//!
//! # Limitations
//!
//! - **Depth**: at most four levels of list or map nesting
//! - **Strings**: a string containing the active separator cannot be an element
//! - **Angle brackets**: not allowed in options or separators of nested patterns
//! - **Options**: `MultipleSelection` options may not contain commas
