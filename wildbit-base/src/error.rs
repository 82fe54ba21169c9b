// We want a few things here:
// 1. A way to create a new error with a backtrace
// 2. A way to centralize setting a breakpoint to trap any error in the system fairly soon
//    after it's created (or at least when it's propagated from a library we use back to us)
// 3. Same but for logging / emitting error messages into the tracing/logging system

use std::borrow::Cow;
use backtrace_error::DynBacktraceError;
use tracing::error;

#[cfg(test)]
use test_log::test;

/// The small closed taxonomy of failure modes a caller might want to react
/// to differently. Most callers just propagate `Error` with `?`; `kind()`
/// exists for the few call sites (the host's `NotBuilt` warning path, retry
/// logic around `IngestFailure`) that need to distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// The source iterator passed to `build` yielded an error.
    IngestFailure,
    /// An allocation failed while building or querying.
    ResourceExhausted,
    /// A query was issued against a handle that was never successfully built.
    NotBuilt,
    /// An internal invariant was violated (offset out of range, planner/index
    /// corruption). This should never reach user code; it panics rather than
    /// returning a `PreconditionViolated` value, but the variant exists so
    /// `Error::kind()` has a name for diagnostics captured before the panic.
    PreconditionViolated,
}

#[derive(Debug)]
#[allow(dead_code)]
pub struct Error {
    inner: DynBacktraceError,
    kind: Option<Kind>,
}
pub type Result<T> = std::result::Result<T, Error>;

struct SimpleErr(Cow<'static, str>);
impl std::fmt::Debug for SimpleErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for SimpleErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::error::Error for SimpleErr {
    fn description(&self) -> &str {
        &self.0
    }
}

impl<E: std::error::Error + Send + Sync + 'static> From<E> for Error {
    fn from(err: E) -> Error {
        Error::new(err)
    }
}

impl Error {
    pub fn new<E: std::error::Error + Send + Sync + 'static>(err: E) -> Error {
        error!(target: "wildbit", "{:?}", err);
        let inner = DynBacktraceError::from(err);
        Error { inner, kind: None }
    }

    pub fn with_kind(mut self, kind: Kind) -> Error {
        self.kind = Some(kind);
        self
    }

    pub fn kind(&self) -> Option<Kind> {
        self.kind
    }
}

pub fn err(msg: impl Into<Cow<'static, str>>) -> Error {
    let err = SimpleErr(msg.into());
    Error::new(err)
}

pub fn err_kind(msg: impl Into<Cow<'static, str>>, kind: Kind) -> Error {
    err(msg).with_kind(kind)
}

#[test]
fn test_error() {
    let err = err("test error");
    assert!(err.kind().is_none());
}

#[test]
fn test_error_kind() {
    let err = err_kind("source failed", Kind::IngestFailure);
    assert_eq!(err.kind(), Some(Kind::IngestFailure));
}
