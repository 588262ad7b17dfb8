/// Unwraps a `Result` inside a function returning `Option<Result<T, E>>`.
///
/// `Ok(t)` yields `t`; `Err(e)` makes the enclosing function return `Some(Err(e))`.
/// Meant for `Iterator::next` implementations whose items are results, such as the
/// payload fragment scanner, where a helper failure has to surface as the next item
/// instead of ending the iteration silently.
#[macro_export]
macro_rules! try_or_ret_some_err {
    ($expr:expr) => {
        match $expr {
            Ok(value) => value,
            Err(err) => {
                return Some(Err(err));
            }
        }
    };
}
