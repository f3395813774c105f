//! Free-function form of the optional value algebra.
//!
//! Every function here takes the optional value as its **last** argument,
//! so a transformation reads as "apply `f` to `m`". Each one is a thin
//! wrapper over the matching method on [`Optional`] or function in
//! [`lift`](crate::lift) / [`combine`](crate::combine).
//!
//! # Examples
//!
//! ```
//! use presence::ops::{bind, map, map2, none, some, with_default};
//!
//! let joined = map2(|a: &str, b: &str| format!("{}-{}", a, b), some("foo"), some("bar"));
//! assert_eq!(joined, some("foo-bar".to_string()));
//!
//! let non_empty = |v: &'static str| if v.is_empty() { none() } else { some(v) };
//! assert_eq!(bind(non_empty, some("")), none());
//!
//! let len = map(|s: &str| s.len(), none());
//! assert_eq!(with_default(0, len), 0);
//! ```

use crate::{EmptyValueError, Optional};

pub use crate::combine::combine;
pub use crate::lift::{of_nullable, of_undefinable, of_val};

/// Create a present value.
#[inline]
pub fn some<T>(value: T) -> Optional<T> {
    Optional::some(value)
}

/// Create an absent value.
#[inline]
pub fn none<T>() -> Optional<T> {
    Optional::none()
}

/// Convert to the std nullable representation, `Option<T>`.
///
/// ```
/// use presence::ops::{none, some, to_nullable};
///
/// assert_eq!(to_nullable(some(1)), Some(1));
/// assert_eq!(to_nullable(none::<i32>()), None);
/// ```
#[inline]
pub fn to_nullable<T>(m: Optional<T>) -> Option<T> {
    m.into_option()
}

/// `true` iff a value is present.
#[inline]
pub fn is_some<T>(m: &Optional<T>) -> bool {
    m.is_some()
}

/// `true` iff no value is present.
#[inline]
pub fn is_none<T>(m: &Optional<T>) -> bool {
    m.is_none()
}

/// Extract the value, or fail with [`EmptyValueError`].
///
/// ```
/// use presence::ops::{get, none, some};
/// use presence::EmptyValueError;
///
/// assert_eq!(get(some("v")), Ok("v"));
/// assert_eq!(get(none::<&str>()), Err(EmptyValueError));
/// ```
#[inline]
pub fn get<T>(m: Optional<T>) -> Result<T, EmptyValueError> {
    m.get()
}

/// The value, or `default` when absent.
#[inline]
pub fn with_default<T>(default: T, m: Optional<T>) -> T {
    m.with_default(default)
}

/// Apply `f` to a present value.
#[inline]
pub fn map<A, B, F>(f: F, m: Optional<A>) -> Optional<B>
where
    F: FnOnce(A) -> B,
{
    m.map(f)
}

/// Apply `f` to two values if both are present.
///
/// `m1` is tested before `m2`; `f` runs at most once.
///
/// ```
/// use presence::ops::{map2, none, some};
///
/// assert_eq!(map2(|a: i32, b: i32| a + b, some(1), some(2)), some(3));
/// assert_eq!(map2(|a: i32, b: i32| a + b, some(1), none()), none());
/// ```
#[inline]
pub fn map2<A, B, R, F>(f: F, m1: Optional<A>, m2: Optional<B>) -> Optional<R>
where
    F: FnOnce(A, B) -> R,
{
    m1.zip(m2).map(|(a, b)| f(a, b))
}

/// Apply `f` to three values if all are present, tested in argument order.
#[inline]
pub fn map3<A, B, C, R, F>(f: F, m1: Optional<A>, m2: Optional<B>, m3: Optional<C>) -> Optional<R>
where
    F: FnOnce(A, B, C) -> R,
{
    m1.zip(m2).zip(m3).map(|((a, b), c)| f(a, b, c))
}

/// Chain a step that may produce no value.
///
/// `bind(|x| some(f(x)), m)` equals `map(f, m)`.
#[inline]
pub fn bind<A, B, F>(f: F, m: Optional<A>) -> Optional<B>
where
    F: FnOnce(A) -> Optional<B>,
{
    m.and_then(f)
}

/// Chain a two-input step that may produce no value.
///
/// The result of `f` is returned as-is.
///
/// ```
/// use presence::ops::{bind2, none, some};
///
/// let checked_div = |a: i32, b: i32| if b == 0 { none() } else { some(a / b) };
/// assert_eq!(bind2(checked_div, some(6), some(3)), some(2));
/// assert_eq!(bind2(checked_div, some(6), some(0)), none());
/// assert_eq!(bind2(checked_div, none(), some(3)), none());
/// ```
#[inline]
pub fn bind2<A, B, R, F>(f: F, m1: Optional<A>, m2: Optional<B>) -> Optional<R>
where
    F: FnOnce(A, B) -> Optional<R>,
{
    m1.zip(m2).and_then(|(a, b)| f(a, b))
}

/// Run `action` on a present value, for its side effects only.
///
/// Whatever `action` returns is discarded.
///
/// ```
/// use presence::ops::{iter, none, some};
///
/// let mut log = Vec::new();
/// iter(|v| log.push(v), some("seen"));
/// iter(|v| log.push(v), none());
/// assert_eq!(log, vec!["seen"]);
/// ```
#[inline]
pub fn iter<T, R, F>(action: F, m: Optional<T>)
where
    F: FnOnce(T) -> R,
{
    m.for_each(|value| {
        let _ = action(value);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashSet;

    #[test]
    fn test_constructors_and_inspection() {
        let present = some(0);
        let absent = none::<i32>();

        assert!(is_some(&present));
        assert!(!is_none(&present));
        assert!(is_none(&absent));
        assert!(!is_some(&absent));
    }

    #[test]
    fn test_extraction() {
        assert_eq!(to_nullable(some("a")), Some("a"));
        assert_eq!(to_nullable(none::<&str>()), None);
        assert_eq!(get(some(1)), Ok(1));
        assert_eq!(get(none::<i32>()), Err(EmptyValueError));
        assert_eq!(with_default(9, some(1)), 1);
        assert_eq!(with_default(9, none()), 9);
    }

    #[test]
    fn test_map_family() {
        assert_eq!(map(|x: i32| x * 3, some(2)), some(6));
        assert_eq!(
            map2(|a: &str, b: &str| format!("{}-{}", a, b), some("foo"), some("bar")),
            some("foo-bar".to_string())
        );
        assert_eq!(
            map3(|a: i32, b: i32, c: i32| a * b + c, some(2), some(3), some(4)),
            some(10)
        );
    }

    #[test]
    fn test_map_family_short_circuits() {
        let calls = Cell::new(0);
        let count2 = |a: i32, b: i32| {
            calls.set(calls.get() + 1);
            a + b
        };
        let count3 = |a: i32, b: i32, c: i32| {
            calls.set(calls.get() + 1);
            a + b + c
        };

        assert_eq!(map2(count2, none(), some(1)), none());
        assert_eq!(map2(count2, some(1), none()), none());
        assert_eq!(map3(count3, none(), some(1), some(1)), none());
        assert_eq!(map3(count3, some(1), none(), some(1)), none());
        assert_eq!(map3(count3, some(1), some(1), none()), none());
        assert_eq!(calls.get(), 0);

        assert_eq!(map2(count2, some(1), some(1)), some(2));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_bind_family() {
        let non_empty = |v: &'static str| if v.is_empty() { none() } else { some(v) };
        assert_eq!(bind(non_empty, some("")), none());
        assert_eq!(bind(non_empty, some("x")), some("x"));

        let calls = Cell::new(0);
        let pair = |a: i32, b: i32| {
            calls.set(calls.get() + 1);
            some((a, b))
        };
        assert_eq!(bind2(pair, none(), some(1)), none());
        assert_eq!(bind2(pair, some(1), none()), none());
        assert_eq!(calls.get(), 0);
        assert_eq!(bind2(pair, some(1), some(2)), some((1, 2)));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_bind2_returns_binder_result_unchanged() {
        let always_none = |_: i32, _: i32| none::<i32>();
        assert_eq!(bind2(always_none, some(1), some(2)), none());
    }

    #[test]
    fn test_iter() {
        let calls = Cell::new(0);
        iter(|n: i32| calls.set(calls.get() + n), some(4));
        iter(|n: i32| calls.set(calls.get() + n), none());
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn test_iter_discards_action_result() {
        let mut seen = HashSet::new();
        iter(|v| seen.insert(v), some(3));
        iter(|v| seen.insert(v), some(3));
        iter(|v| seen.insert(v), none());
        assert_eq!(seen, HashSet::from([3]));
    }

    #[test]
    fn test_reexported_lifting_and_combine() {
        assert_eq!(of_val(0, true), none());
        assert_eq!(of_nullable(Some(1)), some(1));
        assert_eq!(of_undefinable(Some(None::<i32>)), none());
        assert_eq!(combine(vec![some(1), some(2)]), some(vec![1, 2]));
    }
}
