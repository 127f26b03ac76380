//! Converting failures into default values.
//!
//! Degrading to an empty value is an explicit policy: callers opt in with
//! [`Fallback::or_fallback`], which logs the error once and yields
//! `T::default()`.

use std::fmt;

pub trait Fallback<T> {
    /// Return the success value, or log `"{context}: {error}"` at error
    /// level and return `T::default()`.
    fn or_fallback(self, context: &str) -> T;
}

impl<T, E> Fallback<T> for Result<T, E>
where
    T: Default,
    E: fmt::Display,
{
    fn or_fallback(self, context: &str) -> T {
        match self {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("{}: {}", context, e);
                T::default()
            }
        }
    }
}
