//! Lifting raw, possibly-absent values into [`Optional`].
//!
//! Host code produces "no value" at its boundaries in two different senses:
//!
//! - **Structural absence**: the value is not there at all. In Rust this is
//!   `Option::None` (and [`Optional::None`]). This is the absence class, and
//!   nothing else belongs to it.
//! - **Semantic emptiness**: the value is there but "falsy", such as `0` or
//!   `""`. Rust has no implicit truthiness, so the predicate is spelled out
//!   by the [`Falsy`] trait.
//!
//! [`of_val`] lets the caller pick which of the two counts as absence.
//!
//! # Examples
//!
//! ```rust
//! use presence::lift::{of_nullable, of_undefinable, of_val};
//! use presence::Optional;
//!
//! assert_eq!(of_val(0, false), Optional::some(0));
//! assert_eq!(of_val(0, true), Optional::none());
//! assert_eq!(of_val(None::<i32>, false), Optional::none());
//!
//! assert_eq!(of_nullable(Some("a")), Optional::some("a"));
//!
//! // Missing field and explicit null are both absent
//! assert_eq!(of_undefinable::<i32>(None), Optional::none());
//! assert_eq!(of_undefinable::<i32>(Some(None)), Optional::none());
//! ```

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

use crate::Optional;

/// A raw value that may carry the absence sentinel.
///
/// `into_option` returns `None` exactly when the value belongs to the
/// absence class. Types without a sentinel are always present and use
/// `Value = Self`: primitives, `String`, `Cow<str>`, `Vec<T>`, `[T; N]`,
/// `Box<T>`, `Rc<T>`, `Arc<T>` and every reference `&T`. A reference is
/// never looked through, so `&None::<i32>` is a present `&Option<i32>`.
///
/// # Implementing for your own types
///
/// ```rust
/// use presence::lift::{of_val, Falsy, Nullable};
/// use presence::Optional;
///
/// #[derive(Debug, PartialEq)]
/// struct UserId(u64);
///
/// impl Nullable for UserId {
///     type Value = UserId;
///
///     fn into_option(self) -> Option<UserId> {
///         Some(self)
///     }
/// }
///
/// impl Falsy for UserId {
///     fn is_falsy(&self) -> bool {
///         self.0 == 0
///     }
/// }
///
/// assert_eq!(of_val(UserId(7), true), Optional::some(UserId(7)));
/// assert_eq!(of_val(UserId(0), true), Optional::none());
/// ```
pub trait Nullable {
    /// The type of the value once the sentinel is ruled out
    type Value;

    /// Return `None` for the absence sentinel, the value otherwise.
    fn into_option(self) -> Option<Self::Value>;
}

impl<T> Nullable for Option<T> {
    type Value = T;

    #[inline]
    fn into_option(self) -> Option<T> {
        self
    }
}

impl<T> Nullable for Optional<T> {
    type Value = T;

    #[inline]
    fn into_option(self) -> Option<T> {
        Optional::into_option(self)
    }
}

macro_rules! impl_always_present {
    ($($t:ty),* $(,)?) => {
        $(
            impl Nullable for $t {
                type Value = $t;

                #[inline]
                fn into_option(self) -> Option<$t> {
                    Some(self)
                }
            }
        )*
    };
}

impl_always_present!(
    (), bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    String,
);

impl<'a, T: ?Sized> Nullable for &'a T {
    type Value = &'a T;

    #[inline]
    fn into_option(self) -> Option<&'a T> {
        Some(self)
    }
}

impl<'a> Nullable for Cow<'a, str> {
    type Value = Cow<'a, str>;

    #[inline]
    fn into_option(self) -> Option<Cow<'a, str>> {
        Some(self)
    }
}

macro_rules! impl_always_present_generic {
    ($($t:ty),* $(,)?) => {
        $(
            impl<T: ?Sized> Nullable for $t {
                type Value = $t;

                #[inline]
                fn into_option(self) -> Option<$t> {
                    Some(self)
                }
            }
        )*
    };
}

impl_always_present_generic!(Box<T>, Rc<T>, Arc<T>);

impl<T> Nullable for Vec<T> {
    type Value = Vec<T>;

    #[inline]
    fn into_option(self) -> Option<Vec<T>> {
        Some(self)
    }
}

impl<T, const N: usize> Nullable for [T; N] {
    type Value = [T; N];

    #[inline]
    fn into_option(self) -> Option<[T; N]> {
        Some(self)
    }
}

/// The explicit "falsy" predicate used by `of_val(v, true)`.
///
/// | value                                   | falsy when                  |
/// |-----------------------------------------|-----------------------------|
/// | `bool`                                  | `false`                     |
/// | integers (all widths)                   | `0`                         |
/// | `f32`, `f64`                            | `0.0`, `-0.0` or `NaN`      |
/// | `char`                                  | `'\0'`                      |
/// | `str`, `String`, `Cow<str>`             | empty                       |
/// | `[T]`, `[T; N]`, `Vec<T>`               | empty                       |
/// | `()`                                    | always                      |
/// | `Option<T>`, `Optional<T>`              | absent, or the value is falsy |
/// | `&T`, `&mut T`, `Box<T>`, `Rc<T>`, `Arc<T>` | the target is falsy     |
pub trait Falsy {
    /// Returns `true` if the value counts as empty.
    fn is_falsy(&self) -> bool;
}

impl Falsy for bool {
    #[inline]
    fn is_falsy(&self) -> bool {
        !*self
    }
}

macro_rules! impl_falsy_int {
    ($($t:ty),*) => {
        $(
            impl Falsy for $t {
                #[inline]
                fn is_falsy(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

impl_falsy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_falsy_float {
    ($($t:ty),*) => {
        $(
            impl Falsy for $t {
                #[inline]
                fn is_falsy(&self) -> bool {
                    *self == 0.0 || self.is_nan()
                }
            }
        )*
    };
}

impl_falsy_float!(f32, f64);

impl Falsy for char {
    #[inline]
    fn is_falsy(&self) -> bool {
        *self == '\0'
    }
}

impl Falsy for () {
    #[inline]
    fn is_falsy(&self) -> bool {
        true
    }
}

impl Falsy for str {
    #[inline]
    fn is_falsy(&self) -> bool {
        self.is_empty()
    }
}

impl Falsy for String {
    #[inline]
    fn is_falsy(&self) -> bool {
        self.is_empty()
    }
}

impl Falsy for Cow<'_, str> {
    #[inline]
    fn is_falsy(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Falsy for [T] {
    #[inline]
    fn is_falsy(&self) -> bool {
        self.is_empty()
    }
}

impl<T, const N: usize> Falsy for [T; N] {
    #[inline]
    fn is_falsy(&self) -> bool {
        N == 0
    }
}

impl<T> Falsy for Vec<T> {
    #[inline]
    fn is_falsy(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Falsy> Falsy for Option<T> {
    #[inline]
    fn is_falsy(&self) -> bool {
        self.as_ref().is_none_or(|v| v.is_falsy())
    }
}

impl<T: Falsy> Falsy for Optional<T> {
    #[inline]
    fn is_falsy(&self) -> bool {
        self.as_ref().fold(|| true, |v| v.is_falsy())
    }
}

macro_rules! impl_falsy_deref {
    ($($ptr:ty),*) => {
        $(
            impl<T: Falsy + ?Sized> Falsy for $ptr {
                #[inline]
                fn is_falsy(&self) -> bool {
                    (**self).is_falsy()
                }
            }
        )*
    };
}

impl_falsy_deref!(Box<T>, Rc<T>, Arc<T>);

impl<T: Falsy + ?Sized> Falsy for &T {
    #[inline]
    fn is_falsy(&self) -> bool {
        (**self).is_falsy()
    }
}

impl<T: Falsy + ?Sized> Falsy for &mut T {
    #[inline]
    fn is_falsy(&self) -> bool {
        (**self).is_falsy()
    }
}

/// Lift a raw value, choosing what counts as absence.
///
/// - `use_truthy_check == false`: absent iff `value` is the absence
///   sentinel (`Option::None` / `Optional::None`).
/// - `use_truthy_check == true`: also absent when the present value is
///   [`Falsy`].
///
/// One layer of `Option`/`Optional` is removed, so the result holds the
/// plain value.
///
/// # Examples
///
/// ```rust
/// use presence::lift::of_val;
/// use presence::Optional;
///
/// assert_eq!(of_val("", false), Optional::some(""));
/// assert_eq!(of_val("", true), Optional::none());
/// assert_eq!(of_val("x", true), Optional::some("x"));
/// assert_eq!(of_val(Some(0), false), Optional::some(0));
/// assert_eq!(of_val(Some(0), true), Optional::none());
/// ```
pub fn of_val<V>(value: V, use_truthy_check: bool) -> Optional<V::Value>
where
    V: Nullable,
    V::Value: Falsy,
{
    let lifted = Optional::from(value.into_option());
    if use_truthy_check {
        lifted.filter(|v| !v.is_falsy())
    } else {
        lifted
    }
}

/// Lift a nullable value: `None` becomes absent, anything else present.
///
/// The value itself is never inspected.
///
/// # Example
///
/// ```rust
/// use presence::lift::of_nullable;
/// use presence::Optional;
///
/// assert_eq!(of_nullable(None::<&str>), Optional::none());
/// assert_eq!(of_nullable(Some("")), Optional::some(""));
/// ```
#[inline]
pub fn of_nullable<T>(value: Option<T>) -> Optional<T> {
    Optional::from(value)
}

/// Lift a value that may be missing (outer `None`) or explicitly null
/// (inner `None`). Both are absence.
///
/// This is the usual shape of a field that distinguishes "not sent" from
/// "sent as null".
///
/// # Example
///
/// ```rust
/// use presence::lift::of_undefinable;
/// use presence::Optional;
///
/// assert_eq!(of_undefinable(Some(Some(3))), Optional::some(3));
/// assert_eq!(of_undefinable(Some(None::<i32>)), Optional::none());
/// assert_eq!(of_undefinable(None::<Option<i32>>), Optional::none());
/// ```
#[inline]
pub fn of_undefinable<T>(value: Option<Option<T>>) -> Optional<T> {
    of_nullable(value.flatten())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_structural_lift_never_drops_values(x: i64) {
            prop_assert_eq!(of_val(x, false), Optional::some(x));
        }

        #[test]
        fn prop_truthy_lift_drops_only_zero(x: i64) {
            prop_assert_eq!(of_val(x, true).is_none(), x == 0);
        }

        #[test]
        fn prop_truthy_lift_drops_only_empty_strings(s in ".{0,8}") {
            prop_assert_eq!(of_val(s.clone(), true).is_none(), s.is_empty());
        }

        #[test]
        fn prop_of_nullable_matches_option(o in proptest::option::of(any::<i32>())) {
            prop_assert_eq!(of_nullable(o).into_option(), o);
        }

        #[test]
        fn prop_of_undefinable_flattens(
            o in proptest::option::of(proptest::option::of(any::<i32>()))
        ) {
            prop_assert_eq!(of_undefinable(o).into_option(), o.flatten());
        }
    }
}
