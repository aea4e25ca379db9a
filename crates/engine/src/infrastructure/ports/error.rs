//! Error types for port operations.

/// Failure of a single remote catalog call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Transport or connectivity failure, including non-404 error statuses.
    #[error("Network error fetching {resource}: {message}")]
    Network { resource: String, message: String },

    /// The provider has no such resource.
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// The response was missing required fields or had an unexpected shape.
    #[error("Unexpected response from {resource}: {message}")]
    Schema { resource: String, message: String },

    /// The call did not settle within the configured bound.
    #[error("Timed out after {timeout_ms}ms fetching {resource}")]
    Timeout { resource: String, timeout_ms: u64 },
}

impl CatalogError {
    pub fn network(resource: impl ToString, message: impl ToString) -> Self {
        Self::Network {
            resource: resource.to_string(),
            message: message.to_string(),
        }
    }

    pub fn not_found(resource: impl ToString) -> Self {
        Self::NotFound {
            resource: resource.to_string(),
        }
    }

    pub fn schema(resource: impl ToString, message: impl ToString) -> Self {
        Self::Schema {
            resource: resource.to_string(),
            message: message.to_string(),
        }
    }

    pub fn timeout(resource: impl ToString, timeout_ms: u64) -> Self {
        Self::Timeout {
            resource: resource.to_string(),
            timeout_ms,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Transport-class failures (timeouts count as network failures).
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Timeout { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_is_network_class() {
        assert!(CatalogError::timeout("pokemon/1", 500).is_network());
        assert!(CatalogError::network("pokemon/1", "refused").is_network());
        assert!(!CatalogError::schema("pokemon/1", "missing name").is_network());
    }

    #[test]
    fn messages_name_the_resource() {
        let err = CatalogError::not_found("pokemon/9999");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "pokemon/9999 not found");
        assert_eq!(
            CatalogError::timeout("type/10", 250).to_string(),
            "Timed out after 250ms fetching type/10"
        );
    }
}
