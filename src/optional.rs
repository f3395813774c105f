//! A closed sum type for a value that may or may not be present.
//!
//! # Optional vs sentinels
//!
//! `Optional<T>` decides presence by its variant tag alone. A present `0`,
//! `""` or `false` is still present; nothing about the payload can make it
//! look absent. Raw inputs that use a sentinel for "no value" are lifted at
//! the boundary with the functions in [`lift`](crate::lift) and stay
//! `Optional` until an explicit unwrap is chosen.
//!
//! # Short-circuiting
//!
//! Every combinator that takes a closure (`map`, `and_then`, `zip_with`,
//! `filter`, ...) invokes it only when all of its inputs are present, and
//! tests inputs left to right.
//!
//! # Examples
//!
//! ```rust
//! use presence::Optional;
//!
//! fn find_port(name: &str) -> Optional<u16> {
//!     match name {
//!         "http" => Optional::some(80),
//!         "https" => Optional::some(443),
//!         _ => Optional::none(),
//!     }
//! }
//!
//! let label = find_port("https")
//!     .map(|port| format!("port {}", port))
//!     .with_default("unknown".to_string());
//! assert_eq!(label, "port 443");
//!
//! assert!(find_port("gopher").is_none());
//! ```

use crate::EmptyValueError;

/// A value that is either present (`Some(T)`) or absent (`None`).
///
/// There is no third state, and no payload value is ever treated as a
/// discriminator. Ordering places `None` before every `Some`.
///
/// # Example
///
/// ```rust
/// use presence::Optional;
///
/// let present: Optional<i32> = Optional::some(0);
/// let absent: Optional<i32> = Optional::none();
///
/// // Zero is a value, not an absence
/// assert!(present.is_some());
/// assert!(absent.is_none());
///
/// match present {
///     Optional::Some(n) => assert_eq!(n, 0),
///     Optional::None => unreachable!(),
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Optional<T> {
    /// No value
    None,
    /// A present value
    Some(T),
}

impl<T> Optional<T> {
    // ========== Constructors ==========

    /// Create a present value.
    ///
    /// Always returns `Some`, whatever the value is.
    ///
    /// # Example
    ///
    /// ```rust
    /// use presence::Optional;
    ///
    /// assert!(Optional::some("").is_some());
    /// assert!(Optional::some(false).is_some());
    /// ```
    #[inline]
    pub fn some(value: T) -> Self {
        Optional::Some(value)
    }

    /// Create an absent value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use presence::Optional;
    ///
    /// let o: Optional<String> = Optional::none();
    /// assert!(o.is_none());
    /// ```
    #[inline]
    pub fn none() -> Self {
        Optional::None
    }

    // ========== Predicates ==========

    /// Returns `true` if a value is present.
    ///
    /// # Example
    ///
    /// ```rust
    /// use presence::Optional;
    ///
    /// assert!(Optional::some(1).is_some());
    /// assert!(!Optional::<i32>::none().is_some());
    /// ```
    #[inline]
    pub fn is_some(&self) -> bool {
        matches!(self, Optional::Some(_))
    }

    /// Returns `true` if no value is present.
    ///
    /// Always the negation of [`is_some`](Self::is_some).
    #[inline]
    pub fn is_none(&self) -> bool {
        !self.is_some()
    }

    // ========== Borrowing ==========

    /// Convert `&Optional<T>` to `Optional<&T>`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use presence::Optional;
    ///
    /// let name = Optional::some("ferris".to_string());
    /// let len = name.as_ref().map(|s| s.len());
    /// assert_eq!(len, Optional::some(6));
    /// assert_eq!(name, Optional::some("ferris".to_string()));
    /// ```
    #[inline]
    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Some(value) => Optional::Some(value),
            Optional::None => Optional::None,
        }
    }

    /// Convert `&mut Optional<T>` to `Optional<&mut T>`.
    #[inline]
    pub fn as_mut(&mut self) -> Optional<&mut T> {
        match self {
            Optional::Some(value) => Optional::Some(value),
            Optional::None => Optional::None,
        }
    }

    // ========== Extractors ==========

    /// Return the value, or [`EmptyValueError`] if absent.
    ///
    /// This is the single fallible operation of the library. Guard it
    /// with [`is_some`](Self::is_some), or prefer
    /// [`with_default`](Self::with_default) when absence is expected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use presence::{EmptyValueError, Optional};
    ///
    /// assert_eq!(Optional::some(3).get(), Ok(3));
    /// assert_eq!(Optional::<i32>::none().get(), Err(EmptyValueError));
    /// ```
    pub fn get(self) -> Result<T, EmptyValueError> {
        match self {
            Optional::Some(value) => Ok(value),
            Optional::None => {
                #[cfg(feature = "tracing")]
                tracing::debug!("get on absent value: {}", EmptyValueError);
                Err(EmptyValueError)
            }
        }
    }

    /// Return the value, panicking if absent.
    ///
    /// # Panics
    ///
    /// Panics with the [`EmptyValueError`] message if the value is `None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use presence::Optional;
    ///
    /// assert_eq!(Optional::some("x").unwrap(), "x");
    /// ```
    pub fn unwrap(self) -> T {
        match self {
            Optional::Some(value) => value,
            Optional::None => {
                #[cfg(feature = "tracing")]
                tracing::debug!("unwrap on absent value: {}", EmptyValueError);
                panic!("called `Optional::unwrap()` on a `None` value: {}", EmptyValueError)
            }
        }
    }

    /// Return the value, panicking with `msg` if absent.
    ///
    /// # Panics
    ///
    /// Panics with the provided message if the value is `None`.
    pub fn expect(self, msg: &str) -> T {
        match self {
            Optional::Some(value) => value,
            Optional::None => {
                #[cfg(feature = "tracing")]
                tracing::debug!("expect on absent value: {}", msg);
                panic!("{}", msg)
            }
        }
    }

    /// Return the value or `default`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use presence::Optional;
    ///
    /// assert_eq!(Optional::some(0).with_default(7), 0);
    /// assert_eq!(Optional::none().with_default(7), 7);
    /// ```
    #[inline]
    pub fn with_default(self, default: T) -> T {
        match self {
            Optional::Some(value) => value,
            Optional::None => default,
        }
    }

    /// Return the value, or compute one with `f` when absent.
    ///
    /// `f` is only called for `None`.
    #[inline]
    pub fn with_default_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Optional::Some(value) => value,
            Optional::None => f(),
        }
    }

    /// Convert into the std `Option`, the host's nullable representation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use presence::Optional;
    ///
    /// assert_eq!(Optional::some(5).into_option(), Some(5));
    /// assert_eq!(Optional::<i32>::none().into_option(), None);
    /// ```
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Optional::Some(value) => Some(value),
            Optional::None => None,
        }
    }

    /// Convert into a `Result`, using `err` for the absent case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use presence::Optional;
    ///
    /// assert_eq!(Optional::some(1).ok_or("missing"), Ok(1));
    /// assert_eq!(Optional::<i32>::none().ok_or("missing"), Err("missing"));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, err: E) -> Result<T, E> {
        match self {
            Optional::Some(value) => Ok(value),
            Optional::None => Err(err),
        }
    }

    // ========== Transformations ==========

    /// Transform a present value; absent values pass through.
    ///
    /// `f` is never called on `None`, so it does not need to handle absence.
    /// If `f` itself may produce no value, use [`and_then`](Self::and_then).
    ///
    /// # Example
    ///
    /// ```rust
    /// use presence::Optional;
    ///
    /// assert_eq!(Optional::some(21).map(|x| x * 2), Optional::some(42));
    /// assert_eq!(Optional::<i32>::none().map(|x| x * 2), Optional::none());
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Optional::Some(value) => Optional::Some(f(value)),
            Optional::None => Optional::None,
        }
    }

    /// Chain a step that may itself produce no value (monadic bind).
    ///
    /// The result of `f` is returned unchanged, so `and_then(|x| Optional::some(f(x)))`
    /// is the same as `map(f)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use presence::Optional;
    ///
    /// fn non_empty(s: &str) -> Optional<&str> {
    ///     if s.is_empty() { Optional::none() } else { Optional::some(s) }
    /// }
    ///
    /// assert_eq!(Optional::some("a").and_then(non_empty), Optional::some("a"));
    /// assert_eq!(Optional::some("").and_then(non_empty), Optional::none());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Optional::Some(value) => f(value),
            Optional::None => Optional::None,
        }
    }

    /// Pair this value with another; `None` if either is absent.
    ///
    /// Built from `and_then` followed by `map`. `self` is tested first.
    ///
    /// # Example
    ///
    /// ```rust
    /// use presence::Optional;
    ///
    /// assert_eq!(Optional::some(1).zip(Optional::some("a")), Optional::some((1, "a")));
    /// assert_eq!(Optional::some(1).zip(Optional::<&str>::none()), Optional::none());
    /// ```
    #[inline]
    pub fn zip<U>(self, other: Optional<U>) -> Optional<(T, U)> {
        self.and_then(|a| other.map(|b| (a, b)))
    }

    /// Combine this value with another using `f`, if both are present.
    #[inline]
    pub fn zip_with<U, R, F>(self, other: Optional<U>, f: F) -> Optional<R>
    where
        F: FnOnce(T, U) -> R,
    {
        self.zip(other).map(|(a, b)| f(a, b))
    }

    /// Keep the value only if `predicate` holds for it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use presence::Optional;
    ///
    /// let even = |n: &i32| n % 2 == 0;
    /// assert_eq!(Optional::some(4).filter(even), Optional::some(4));
    /// assert_eq!(Optional::some(3).filter(even), Optional::none());
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Optional::Some(value) if predicate(&value) => Optional::Some(value),
            _ => Optional::None,
        }
    }

    /// Return `self` if present, otherwise `other`.
    #[inline]
    pub fn or(self, other: Optional<T>) -> Self {
        match self {
            Optional::Some(value) => Optional::Some(value),
            Optional::None => other,
        }
    }

    /// Return `self` if present, otherwise the result of `f`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use presence::Optional;
    ///
    /// let from_env: Optional<&str> = Optional::none();
    /// let host = from_env.or_else(|| Optional::some("localhost"));
    /// assert_eq!(host, Optional::some("localhost"));
    /// ```
    #[inline]
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Optional<T>,
    {
        match self {
            Optional::Some(value) => Optional::Some(value),
            Optional::None => f(),
        }
    }

    // ========== Folding ==========

    /// Eliminate both variants into a single value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use presence::Optional;
    ///
    /// let describe = |o: Optional<i32>| o.fold(|| "nothing".to_string(), |n| n.to_string());
    /// assert_eq!(describe(Optional::some(9)), "9");
    /// assert_eq!(describe(Optional::none()), "nothing");
    /// ```
    #[inline]
    pub fn fold<R, N, S>(self, on_none: N, on_some: S) -> R
    where
        N: FnOnce() -> R,
        S: FnOnce(T) -> R,
    {
        match self {
            Optional::Some(value) => on_some(value),
            Optional::None => on_none(),
        }
    }

    // ========== Side effects ==========

    /// Run `action` on the value if present; do nothing otherwise.
    ///
    /// This is the only place the library hands a value to side-effecting
    /// caller code. The action runs at most once.
    ///
    /// # Example
    ///
    /// ```rust
    /// use presence::Optional;
    ///
    /// let mut seen = Vec::new();
    /// Optional::some(1).for_each(|n| seen.push(n));
    /// Optional::<i32>::none().for_each(|n| seen.push(n));
    /// assert_eq!(seen, vec![1]);
    /// ```
    #[inline]
    pub fn for_each<F>(self, action: F)
    where
        F: FnOnce(T),
    {
        if let Optional::Some(value) = self {
            action(value);
        }
    }

    // ========== Iteration ==========

    /// Iterate over a reference to the value (zero or one item).
    ///
    /// # Example
    ///
    /// ```rust
    /// use presence::Optional;
    ///
    /// let o = Optional::some(42);
    /// assert_eq!(o.iter().collect::<Vec<_>>(), vec![&42]);
    /// ```
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.as_ref().into_option().into_iter()
    }

    /// Iterate over a mutable reference to the value (zero or one item).
    #[inline]
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.as_mut().into_option().into_iter()
    }
}

// Flatten for nested Optional
impl<T> Optional<Optional<T>> {
    /// Remove one level of nesting.
    ///
    /// # Example
    ///
    /// ```rust
    /// use presence::Optional;
    ///
    /// assert_eq!(Optional::some(Optional::some(1)).flatten(), Optional::some(1));
    /// assert_eq!(Optional::some(Optional::<i32>::none()).flatten(), Optional::none());
    /// assert_eq!(Optional::<Optional<i32>>::none().flatten(), Optional::none());
    /// ```
    #[inline]
    pub fn flatten(self) -> Optional<T> {
        self.and_then(|inner| inner)
    }
}

// ========== Trait Implementations ==========

impl<T> Default for Optional<T> {
    /// Returns `Optional::None`.
    fn default() -> Self {
        Optional::None
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Optional::Some(value),
            None => Optional::None,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.into_option()
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_ref().into_option().into_iter()
    }
}
