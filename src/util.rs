/// Numeric conversion and formatting helpers.
///
/// This module converts number literal text into runtime values and renders
/// runtime values back into the text emitted by `print`.
pub mod num;
