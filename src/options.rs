//! Description styles and the separator escalation tables.
//!
//! This module provides the two knobs shared by every pattern:
//!
//! - [`OutputStyle`]: which rendering [`Pattern::description`](crate::Pattern::description) produces
//! - [`LIST_SEPARATORS`] / [`MAP_SEPARATORS`]: the fixed tables that pick a
//!   separator from the nesting rank of a type
//!
//! ## Examples
//!
//! ```rust
//! use pattern_codec::options::{list_separator, map_separator};
//!
//! assert_eq!(list_separator(1), ",");
//! assert_eq!(list_separator(2), ";");
//! assert_eq!(map_separator(1), ":");
//! ```

/// Rendering style for pattern descriptions.
///
/// - **Machine**: canonical text, invertible through [`pattern_factory`](crate::pattern_factory)
/// - **Text**: plain prose for documentation
/// - **LaTeX**: prose with LaTeX special characters escaped
///
/// # Examples
///
/// ```rust
/// use pattern_codec::{Bool, OutputStyle, Pattern};
///
/// let pattern = Pattern::from(Bool::new());
/// assert_eq!(pattern.description(OutputStyle::Machine), "[Bool]");
/// assert_eq!(pattern.description(OutputStyle::Text), "A boolean value (true or false)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum OutputStyle {
    #[default]
    Machine,
    Text,
    LaTeX,
}

impl OutputStyle {
    /// Returns the name of this style.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            OutputStyle::Machine => "machine",
            OutputStyle::Text => "text",
            OutputStyle::LaTeX => "latex",
        }
    }

    /// Escapes `input` for this style. Only LaTeX output is altered.
    #[must_use]
    pub fn escape(&self, input: &str) -> String {
        match self {
            OutputStyle::Machine | OutputStyle::Text => input.to_string(),
            OutputStyle::LaTeX => {
                let mut out = String::with_capacity(input.len());
                for ch in input.chars() {
                    match ch {
                        '_' | '#' | '%' | '&' | '$' | '{' | '}' => {
                            out.push('\\');
                            out.push(ch);
                        }
                        _ => out.push(ch),
                    }
                }
                out
            }
        }
    }
}

/// List separators, indexed by `list_rank - 1`.
pub const LIST_SEPARATORS: [&str; 4] = [",", ";", "|", "%"];

/// Map key/value separators, indexed by `map_rank - 1`.
pub const MAP_SEPARATORS: [&str; 4] = [":", "=", "@", "#"];

/// Deepest nesting the separator tables can express.
pub const MAX_RANK: usize = 4;

/// Returns the list separator for a container of the given list rank.
///
/// Ranks outside `1..=4` have no separator. When called while evaluating a
/// constant (as [`Shape`](crate::Shape) does), an out-of-range rank is a
/// compile error.
#[must_use]
pub const fn list_separator(rank: usize) -> &'static str {
    match rank {
        1..=MAX_RANK => LIST_SEPARATORS[rank - 1],
        _ => panic!("list nesting rank must be between 1 and 4"),
    }
}

/// Returns the key/value separator for a container of the given map rank.
///
/// Same range rules as [`list_separator`].
#[must_use]
pub const fn map_separator(rank: usize) -> &'static str {
    match rank {
        1..=MAX_RANK => MAP_SEPARATORS[rank - 1],
        _ => panic!("map nesting rank must be between 1 and 4"),
    }
}
