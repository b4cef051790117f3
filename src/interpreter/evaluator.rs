/// Core evaluation logic and context management.
///
/// Contains the runtime context that owns the variable environment, and the
/// statement and expression evaluation it drives.
pub mod core;

/// Binary operator evaluation logic.
///
/// Implements `+` and `-` on runtime values.
pub mod binary;

/// Output sinks for printed lines.
pub mod output;
