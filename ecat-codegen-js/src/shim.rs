//! The request shim contract.
//!
//! A generated module receives its HTTP client from the host at install
//! time. The emitted `utils/request.js` enforces the same two-state contract
//! modelled here, and its error messages come from [`ShimError`].

use thiserror::Error;

/// Misuse of the request shim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShimError {
    #[error("Request instance has not been initialized yet")]
    NotInitialized,

    #[error("Request instance has already been initialized")]
    AlreadyInitialized,

    #[error("The provided request must be a function")]
    NotCallable,
}

/// State of the shim.
#[derive(Debug)]
enum State<F> {
    Uninitialized,
    Initialized(F),
}

/// A request function that must be installed exactly once before use.
///
/// ```
/// use ecat_codegen_js::{RequestShim, ShimError};
///
/// let mut shim: RequestShim<fn(i32) -> i32> = RequestShim::new();
/// assert_eq!(shim.call(1).unwrap_err(), ShimError::NotInitialized);
///
/// shim.init(|x: i32| x * 2).unwrap();
/// assert_eq!(shim.call(21).unwrap(), 42);
/// ```
#[derive(Debug)]
pub struct RequestShim<F> {
    state: State<F>,
}

impl<F> Default for RequestShim<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> RequestShim<F> {
    pub fn new() -> Self {
        Self {
            state: State::Uninitialized,
        }
    }

    /// Install the request function. Fails when one is already installed.
    pub fn init(&mut self, request: F) -> Result<(), ShimError> {
        match self.state {
            State::Initialized(_) => Err(ShimError::AlreadyInitialized),
            State::Uninitialized => {
                self.state = State::Initialized(request);
                Ok(())
            }
        }
    }

    /// The installed request function.
    pub fn get(&self) -> Result<&F, ShimError> {
        match &self.state {
            State::Initialized(request) => Ok(request),
            State::Uninitialized => Err(ShimError::NotInitialized),
        }
    }

    /// Delegate to the installed request function.
    pub fn call<A, R>(&self, args: A) -> Result<R, ShimError>
    where
        F: Fn(A) -> R,
    {
        self.get().map(|request| request(args))
    }
}
