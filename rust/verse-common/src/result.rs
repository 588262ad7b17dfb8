pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Returns an `InvalidArgument` error from the enclosing function unless `$check`
/// holds. The error names `$name` and quotes the failed check.
#[macro_export]
macro_rules! verify_arg {
    ($name:ident, $check:expr) => {
        if !$check {
            return Err($crate::error::Error::invalid_arg(
                stringify!($name),
                concat!("expected ", stringify!($check)),
            ));
        }
    };
}
