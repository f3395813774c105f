//! Combining many optional values into one.
//!
//! - **`combine`**: a sequence of optionals becomes an optional sequence
//!   - `Vec<Optional<T>>` → `Optional<Vec<T>>`
//! - **`CombineAll`**: a tuple of optionals becomes an optional tuple
//!   - `(Optional<A>, Optional<B>)` → `Optional<(A, B)>`
//!
//! Both are all-or-nothing: one absent input makes the whole result
//! absent, and the position of the absent input is not reported.
//!
//! # Examples
//!
//! ```
//! use presence::{combine::combine, Optional};
//!
//! let all = vec![Optional::some(1), Optional::some(2)];
//! assert_eq!(combine(all), Optional::some(vec![1, 2]));
//!
//! let gap = vec![Optional::some(1), Optional::none(), Optional::some(3)];
//! assert_eq!(combine(gap), Optional::none());
//!
//! // Heterogeneous tuples
//! let both = Optional::all((Optional::some("id"), Optional::some(7)));
//! assert_eq!(both, Optional::some(("id", 7)));
//! ```

use crate::Optional;

/// Combine a sequence of optionals into an optional `Vec`.
///
/// Returns `Some` of all values, in input order, if every element is
/// present; `None` as soon as an absent element is found. Elements after
/// the first absent one are not consumed. An empty input gives
/// `Some(vec![])`.
///
/// # Examples
///
/// ```
/// use presence::{combine::combine, Optional};
///
/// assert_eq!(combine(Vec::<Optional<i32>>::new()), Optional::some(vec![]));
/// assert_eq!(
///     combine([Optional::some('a'), Optional::some('b')]),
///     Optional::some(vec!['a', 'b'])
/// );
/// ```
pub fn combine<T, I>(items: I) -> Optional<Vec<T>>
where
    I: IntoIterator<Item = Optional<T>>,
{
    items.into_iter().collect()
}

/// Collect an iterator of optionals into an optional collection.
///
/// Same semantics as [`combine`], for any target collection.
///
/// ```
/// use presence::Optional;
/// use std::collections::BTreeSet;
///
/// let set: Optional<BTreeSet<i32>> = vec![Optional::some(2), Optional::some(1)]
///     .into_iter()
///     .collect();
/// assert_eq!(set, Optional::some(BTreeSet::from([1, 2])));
/// ```
impl<A, V> FromIterator<Optional<A>> for Optional<V>
where
    V: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Optional<A>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Optional::into_option)
            .collect::<Option<V>>()
            .into()
    }
}

impl<T> Optional<T> {
    /// Combine a tuple of optionals into an optional tuple.
    ///
    /// Delegates to [`CombineAll`]. Works with tuples of size 1 through 12.
    ///
    /// # Examples
    ///
    /// ```
    /// use presence::Optional;
    ///
    /// let result = Optional::all((
    ///     Optional::some(1),
    ///     Optional::some("two"),
    ///     Optional::some(3.0),
    /// ));
    /// assert_eq!(result, Optional::some((1, "two", 3.0)));
    ///
    /// let result = Optional::all((Optional::some(1), Optional::<&str>::none()));
    /// assert_eq!(result, Optional::none());
    /// ```
    pub fn all<C>(items: C) -> Self
    where
        C: CombineAll<Output = T>,
    {
        items.combine_all()
    }
}

/// Trait for combining a tuple of optionals.
///
/// Implemented for tuples of `Optional`s of size 1 through 12, so
/// heterogeneous values combine without boxing.
pub trait CombineAll {
    /// The tuple of values when every element is present
    type Output;

    /// Combine all elements, testing them left to right.
    fn combine_all(self) -> Optional<Self::Output>;
}

// Macro to implement CombineAll for tuples of different sizes
macro_rules! impl_combine_all {
    ($($T:ident),+) => {
        impl<$($T),+> CombineAll for ($(Optional<$T>,)+) {
            type Output = ($($T,)+);

            #[allow(non_snake_case)]
            fn combine_all(self) -> Optional<Self::Output> {
                let ($($T,)+) = self;
                $(
                    let $T = match $T {
                        Optional::Some(value) => value,
                        Optional::None => return Optional::None,
                    };
                )+
                Optional::Some(($($T,)+))
            }
        }
    };
}

impl_combine_all!(T1);
impl_combine_all!(T1, T2);
impl_combine_all!(T1, T2, T3);
impl_combine_all!(T1, T2, T3, T4);
impl_combine_all!(T1, T2, T3, T4, T5);
impl_combine_all!(T1, T2, T3, T4, T5, T6);
impl_combine_all!(T1, T2, T3, T4, T5, T6, T7);
impl_combine_all!(T1, T2, T3, T4, T5, T6, T7, T8);
impl_combine_all!(T1, T2, T3, T4, T5, T6, T7, T8, T9);
impl_combine_all!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10);
impl_combine_all!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11);
impl_combine_all!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12);

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_combine_empty() {
        let items: Vec<Optional<i32>> = vec![];
        assert_eq!(combine(items), Optional::some(vec![]));
    }

    #[test]
    fn test_combine_all_present_keeps_order() {
        let items = vec![Optional::some(3), Optional::some(1), Optional::some(2)];
        assert_eq!(combine(items), Optional::some(vec![3, 1, 2]));
    }

    #[test]
    fn test_combine_none_at_any_position() {
        let first = vec![Optional::none(), Optional::some(2), Optional::some(3)];
        let middle = vec![Optional::some(1), Optional::none(), Optional::some(3)];
        let last = vec![Optional::some(1), Optional::some(2), Optional::none()];

        assert_eq!(combine(first), Optional::none());
        assert_eq!(combine(middle), Optional::none());
        assert_eq!(combine(last), Optional::none());
    }

    #[test]
    fn test_combine_stops_at_first_none() {
        let pulled = Cell::new(0);
        let items = [Optional::some(1), Optional::none(), Optional::some(3)]
            .into_iter()
            .inspect(|_| pulled.set(pulled.get() + 1));

        assert_eq!(combine(items), Optional::none());
        assert_eq!(pulled.get(), 2);
    }

    #[test]
    fn test_collect_into_string() {
        let s: Optional<String> = "abc".chars().map(Optional::some).collect();
        assert_eq!(s, Optional::some("abc".to_string()));
    }

    #[test]
    fn test_all_tuples() {
        assert_eq!(Optional::all((Optional::some(1),)), Optional::some((1,)));
        assert_eq!(
            Optional::all((Optional::some(1), Optional::some('b'), Optional::some("c"))),
            Optional::some((1, 'b', "c"))
        );
        assert_eq!(
            Optional::all((Optional::some(1), Optional::<char>::none(), Optional::some("c"))),
            Optional::none()
        );
    }

    #[test]
    fn test_combine_all_twelve() {
        let t = (
            Optional::some(1),
            Optional::some(2),
            Optional::some(3),
            Optional::some(4),
            Optional::some(5),
            Optional::some(6),
            Optional::some(7),
            Optional::some(8),
            Optional::some(9),
            Optional::some(10),
            Optional::some(11),
            Optional::some(12),
        );
        assert_eq!(
            t.combine_all(),
            Optional::some((1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12))
        );

        let t = (
            Optional::some(1),
            Optional::some(2),
            Optional::some(3),
            Optional::some(4),
            Optional::some(5),
            Optional::some(6),
            Optional::some(7),
            Optional::some(8),
            Optional::some(9),
            Optional::some(10),
            Optional::some(11),
            Optional::<i32>::none(),
        );
        assert_eq!(t.combine_all(), Optional::none());
    }
}
