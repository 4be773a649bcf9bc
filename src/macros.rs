//! Utility macros for the translator.
//!
//! - `MK_ERROR!` - Creates an `Error` from an `ErrorImpl` variant and a position
//! - `MK_POSITION!` - Creates a `Position` from an offset and a shared file name

/// Creates an Error instance.
///
/// # Arguments
///
/// * `$variant` - The `ErrorImpl` variant name
/// * `$position` - The source position of the offending fragment
/// * fields - Optional `field: value` pairs for the variant
///
/// # Example
///
/// ```ignore
/// return Err(MK_ERROR!(VariableNotDeclared, position, variable: name.clone()));
/// ```
#[macro_export]
macro_rules! MK_ERROR {
    ($variant:ident, $position:expr) => {
        $crate::errors::errors::Error::new(
            $crate::errors::errors::ErrorImpl::$variant,
            $position,
        )
    };
    ($variant:ident, $position:expr, $($field:ident : $value:expr),+ $(,)?) => {
        $crate::errors::errors::Error::new(
            $crate::errors::errors::ErrorImpl::$variant { $($field: $value),+ },
            $position,
        )
    };
}

/// Creates a Position instance sharing the given file name.
#[macro_export]
macro_rules! MK_POSITION {
    ($offset:expr, $file:expr) => {
        $crate::Position(($offset) as u32, ::std::rc::Rc::clone(&$file))
    };
}
