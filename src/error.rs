//! Error type for extracting a value that is not there.

/// Error returned when a value is requested from an absent [`Optional`].
///
/// This is the only failure the library produces. It is returned by
/// [`Optional::get`] and [`ops::get`](crate::ops::get); the panicking
/// accessors [`Optional::unwrap`] use its message.
///
/// # Examples
///
/// ```rust
/// use presence::{EmptyValueError, Optional};
///
/// let absent: Optional<i32> = Optional::none();
/// assert_eq!(absent.get(), Err(EmptyValueError));
/// assert_eq!(
///     EmptyValueError.to_string(),
///     "expected a present value but found none"
/// );
/// ```
///
/// [`Optional`]: crate::Optional
/// [`Optional::get`]: crate::Optional::get
/// [`Optional::unwrap`]: crate::Optional::unwrap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EmptyValueError;

impl EmptyValueError {
    pub(crate) const MESSAGE: &'static str = "expected a present value but found none";
}

impl std::fmt::Display for EmptyValueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(Self::MESSAGE)
    }
}

impl std::error::Error for EmptyValueError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            EmptyValueError.to_string(),
            "expected a present value but found none"
        );
    }

    #[test]
    fn test_is_std_error() {
        fn boxed() -> Box<dyn std::error::Error> {
            Box::new(EmptyValueError)
        }

        let err = boxed();
        assert!(std::error::Error::source(&*err).is_none());
        assert_eq!(err.to_string(), EmptyValueError::MESSAGE);
    }

    #[test]
    fn test_question_mark_into_boxed_error() {
        fn first_char(s: &str) -> Result<char, Box<dyn std::error::Error>> {
            let c = crate::Optional::from(s.chars().next()).get()?;
            Ok(c)
        }

        assert_eq!(first_char("abc").ok(), Some('a'));
        assert!(first_char("").is_err());
    }
}
