//! Testing utilities for code built on [`Optional`](crate::Optional).
//!
//! Assertion macros that report the unexpected payload, and (behind the
//! `proptest` feature) an `Arbitrary` implementation so property tests
//! can generate optional values directly.
//!
//! # Examples
//!
//! ```rust
//! use presence::{assert_none, assert_some, assert_some_eq, Optional};
//!
//! assert_some!(Optional::some(42));
//! assert_none!(Optional::<i32>::none());
//! assert_some_eq!(Optional::some("a"), "a");
//! ```

/// Assert that an optional value is present.
///
/// # Example
///
/// ```rust
/// use presence::{assert_some, Optional};
///
/// assert_some!(Optional::some(0));
/// ```
#[macro_export]
macro_rules! assert_some {
    ($optional:expr) => {
        match $optional {
            $crate::Optional::Some(_) => {}
            $crate::Optional::None => {
                panic!("Expected Some, got None");
            }
        }
    };
}

/// Assert that an optional value is absent.
///
/// # Example
///
/// ```rust
/// use presence::{assert_none, Optional};
///
/// assert_none!(Optional::<&str>::none());
/// ```
#[macro_export]
macro_rules! assert_none {
    ($optional:expr) => {
        match $optional {
            $crate::Optional::None => {}
            $crate::Optional::Some(v) => {
                panic!("Expected None, got Some: {:?}", v);
            }
        }
    };
}

/// Assert that an optional value is present and equal to `expected`.
///
/// # Example
///
/// ```rust
/// use presence::{assert_some_eq, Optional};
///
/// assert_some_eq!(Optional::some(vec![1, 2]), vec![1, 2]);
/// ```
#[macro_export]
macro_rules! assert_some_eq {
    ($optional:expr, $expected:expr) => {
        match $optional {
            $crate::Optional::Some(v) => {
                assert_eq!(v, $expected);
            }
            $crate::Optional::None => {
                panic!("Expected Some({:?}), got None", $expected);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<T> Arbitrary for crate::Optional<T>
where
    T: Arbitrary,
{
    type Parameters = T::Parameters;
    type Strategy = proptest::strategy::Map<
        proptest::option::OptionStrategy<T::Strategy>,
        fn(Option<T>) -> Self,
    >;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        proptest::option::of(any_with::<T>(args))
            .prop_map(crate::Optional::from as fn(Option<T>) -> Self)
    }
}
