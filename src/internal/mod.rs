pub(crate) mod utils;

/// Resolves a method-table entry, failing with [`Error::MissingMethod`] when the
/// native side left it null.
///
/// [`Error::MissingMethod`]: crate::error::Error::MissingMethod
macro_rules! method {
    ($table:expr, $name:ident) => {
        // SAFETY: callers pass table pointers validated non-null at construction.
        unsafe { (*$table).$name }
            .ok_or($crate::error::Error::MissingMethod(stringify!($name)))?
    };
}
