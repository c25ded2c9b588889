//! The [`Error`] type shared by every fallible operation of this crate.

use crate::kind::ContainerKind;

/// Errors returned by pipelines, registries, and kind-backed collectors.
///
/// Every error is final for the chain that produced it: nothing in this crate
/// retries or returns a partial result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The container kind has no strategy in the registry, so it cannot be rebuilt.
    #[error("container kind `{0}` has no registered accumulator")]
    UnsupportedKind(ContainerKind),

    /// An argument is out of its domain, e.g. a negative count given to
    /// [`limit()`](crate::Pipeline::limit).
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending argument.
        name: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// A strategy was handed (or its supplier produced) a container of another kind.
    #[error("expected a `{expected}` container, found `{found}`")]
    KindMismatch {
        /// The kind the strategy works on.
        expected: ContainerKind,
        /// The kind it actually got.
        found: ContainerKind,
    },
}

impl Error {
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    pub(crate) fn mismatch(expected: ContainerKind, found: ContainerKind) -> Self {
        Self::KindMismatch { expected, found }
    }
}

/// Result type alias for this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::KindId;

    #[test]
    fn messages() {
        assert_eq!(
            Error::UnsupportedKind(ContainerKind::Chain).to_string(),
            "container kind `chain` has no registered accumulator",
        );
        assert_eq!(
            Error::invalid_argument("n", "must not be negative, got -1").to_string(),
            "invalid argument `n`: must not be negative, got -1",
        );
        assert_eq!(
            Error::mismatch(
                ContainerKind::Custom(KindId::new("priority_queue")),
                ContainerKind::Sequence,
            )
            .to_string(),
            "expected a `priority_queue` container, found `sequence`",
        );
    }
}
