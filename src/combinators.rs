//! Control-flow combinators: conditionals, fallbacks, and composition.
//!
//! Multi-argument functions come first; the closure-returning forms
//! ([`when`], [`defaulted`], [`constant`], [`flow`]) exist for the call
//! sites that feed `map` pipelines and want the remaining argument bound
//! later.

/// Return the argument unchanged.
pub fn identity<T>(value: T) -> T {
    value
}

/// A closure that yields clones of `value` on every call.
pub fn constant<T: Clone>(value: T) -> impl Fn() -> T {
    move || value.clone()
}

/// Left-to-right composition: `flow(f, g)(x)` is `g(f(x))`.
pub fn flow<A, B, C>(f: impl Fn(A) -> B, g: impl Fn(B) -> C) -> impl Fn(A) -> C {
    move |a| g(f(a))
}

/// Apply `primary` to `arg`; fall back to `fallback` when it yields nothing.
///
/// The fallback's result is returned as-is, so the whole call can still be
/// `None` when both functions come up empty.
pub fn or<A, B>(
    primary: impl FnOnce(&A) -> Option<B>,
    fallback: impl FnOnce(&A) -> Option<B>,
    arg: &A,
) -> Option<B> {
    primary(arg).or_else(|| fallback(arg))
}

/// If `predicate` holds for `value`, return `then(value)`; otherwise return
/// the value unchanged.
pub fn if_then<T>(predicate: impl FnOnce(&T) -> bool, then: impl FnOnce(T) -> T, value: T) -> T {
    if predicate(&value) {
        then(value)
    } else {
        value
    }
}

/// Closure form of [`if_then`] for `map` pipelines: transform the values
/// that satisfy `predicate`, pass the rest through.
pub fn when<T>(predicate: impl Fn(&T) -> bool, f: impl Fn(T) -> T) -> impl Fn(T) -> T {
    move |value| {
        if predicate(&value) {
            f(value)
        } else {
            value
        }
    }
}

/// `default` when the value is absent; the contained value otherwise.
///
/// A present zero or empty value is kept; only `None` triggers the default.
pub fn default_value<T>(default: T, value: Option<T>) -> T {
    value.unwrap_or(default)
}

/// Partial form of [`default_value`].
pub fn defaulted<T: Clone>(default: T) -> impl Fn(Option<T>) -> T {
    move |value| value.unwrap_or_else(|| default.clone())
}

/// Append `suffix` when `predicate` holds for `value`; `None` otherwise.
///
/// The failing branch drops the input rather than passing it through.
pub fn append_string_if(
    predicate: impl FnOnce(&str) -> bool,
    suffix: &str,
    value: &str,
) -> Option<String> {
    predicate(value).then(|| format!("{}{}", value, suffix))
}
