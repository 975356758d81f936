/// Simplified error system - no over-engineering!
///
/// Persistence failures are recovered inside the store (degrade to defaults);
/// service failures are returned to the UI region that issued the call.
/// Nothing here is fatal to the process.
#[derive(Debug, Clone)]
pub enum StoreError {
    Serialize(String),
    Deserialize(String),
    Backend(String),
}

/// Errors from the external data/compute service.
#[derive(Debug, Clone)]
pub enum ServiceError {
    Network(String),
    Status(u16),
    Decode(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Serialize(msg) => write!(f, "serialize failed: {}", msg),
            StoreError::Deserialize(msg) => write!(f, "deserialize failed: {}", msg),
            StoreError::Backend(msg) => write!(f, "storage backend unavailable: {}", msg),
        }
    }
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::Network(msg) => write!(f, "network failure: {}", msg),
            ServiceError::Status(code) => write!(f, "unexpected HTTP status: {}", code),
            ServiceError::Decode(msg) => write!(f, "response decode failed: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}
impl std::error::Error for ServiceError {}

// Simple convenience type alias
pub type ServiceResult<T> = Result<T, ServiceError>;
