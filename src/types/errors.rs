use std::fmt;

// === ApiError ===

/// Errors from the HTTP client, classified for callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Non-2xx HTTP response with the parsed server error message.
    Http { status: u16, message: String },
    /// Transport failure: no response at all (connect, DNS, timeout).
    Network(String),
    /// The response body could not be parsed as the expected JSON shape.
    Parse(String),
    /// The request was cancelled by the caller. Never wrapped, so callers
    /// can distinguish user-cancelled requests from real failures.
    Cancelled,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http { status, message } => {
                write!(f, "API error {}: {}", status, message)
            }
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Parse(msg) => write!(f, "Response parse error: {}", msg),
            ApiError::Cancelled => write!(f, "Request cancelled"),
        }
    }
}

impl std::error::Error for ApiError {}

// === StoreError ===

/// Errors from the persisted local state store.
#[derive(Debug)]
pub enum StoreError {
    /// An I/O error occurred while reading or writing the state file.
    Io(String),
    /// Failed to serialize or deserialize the state file.
    Serialization(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(msg) => write!(f, "Local store I/O error: {}", msg),
            StoreError::Serialization(msg) => {
                write!(f, "Local store serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StoreError {}

// === AuthError ===

/// Errors related to authentication and session bootstrap.
#[derive(Debug)]
pub enum AuthError {
    /// No token is persisted; the user must log in.
    NotAuthenticated,
    /// The auth API call failed.
    Api(ApiError),
    /// Persisting or clearing the token failed.
    Store(StoreError),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::NotAuthenticated => write!(f, "Not authenticated"),
            AuthError::Api(err) => write!(f, "Auth API error: {}", err),
            AuthError::Store(err) => write!(f, "Auth store error: {}", err),
        }
    }
}

impl std::error::Error for AuthError {}

impl From<ApiError> for AuthError {
    fn from(err: ApiError) -> Self {
        AuthError::Api(err)
    }
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        AuthError::Store(err)
    }
}

// === WizardError ===

/// Errors related to the generation wizard.
#[derive(Debug)]
pub enum WizardError {
    /// The requested action is not valid in the current step.
    InvalidStep(&'static str),
    /// The resolved hook text is empty; the transition is blocked.
    EmptyHook,
    /// A generation call for this step is already in flight.
    Busy,
    /// The generation API call failed.
    Api(ApiError),
    /// The generation endpoint returned an empty result set.
    EmptyResult,
}

impl fmt::Display for WizardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizardError::InvalidStep(action) => {
                write!(f, "Action not valid in current step: {}", action)
            }
            WizardError::EmptyHook => write!(f, "Hook text is empty"),
            WizardError::Busy => write!(f, "Generation already in progress"),
            WizardError::Api(err) => write!(f, "Generation API error: {}", err),
            WizardError::EmptyResult => write!(f, "Generation returned no content"),
        }
    }
}

impl std::error::Error for WizardError {}

impl From<ApiError> for WizardError {
    fn from(err: ApiError) -> Self {
        WizardError::Api(err)
    }
}
