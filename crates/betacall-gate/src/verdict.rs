//! The gate's output type.

/// The outcome of evaluating one request.
///
/// Exactly one verdict is produced per evaluation. The hosting runtime
/// translates `Redirect` and `StripQuery` into 307-class responses with a
/// `Location` header; `Proceed` leaves the request untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteVerdict {
    /// Let the request continue to normal resolution.
    Proceed,

    /// Redirect the client to a different path.
    Redirect {
        /// Same-origin path to redirect to.
        target: String,
    },

    /// Redirect to the same path with the query string removed.
    ///
    /// Used to canonicalize a URL once a one-time query signal has been
    /// consumed.
    StripQuery {
        /// The request path, queryless.
        target: String,
    },
}

impl RouteVerdict {
    /// The `Location` value this verdict asks for, if any.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        match self {
            Self::Proceed => None,
            Self::Redirect { target } | Self::StripQuery { target } => Some(target),
        }
    }

    /// Whether the request passes through unmodified.
    #[must_use]
    pub const fn is_proceed(&self) -> bool {
        matches!(self, Self::Proceed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proceed_has_no_location() {
        assert_eq!(RouteVerdict::Proceed.location(), None);
        assert!(RouteVerdict::Proceed.is_proceed());
    }

    #[test]
    fn redirect_exposes_target() {
        let verdict = RouteVerdict::Redirect {
            target: "/signIn".to_string(),
        };
        assert_eq!(verdict.location(), Some("/signIn"));
        assert!(!verdict.is_proceed());
    }

    #[test]
    fn strip_query_exposes_canonical_path() {
        let verdict = RouteVerdict::StripQuery {
            target: "/signUp".to_string(),
        };
        assert_eq!(verdict.location(), Some("/signUp"));
    }
}
