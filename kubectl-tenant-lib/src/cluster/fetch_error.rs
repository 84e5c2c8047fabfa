use super::ResourceKind;
use core::fmt;
use ohno::app_err;

/// Why a cluster read failed.
#[derive(Debug)]
pub enum FetchError {
    /// The object does not exist.
    NotFound,

    /// The caller is not authenticated or not authorized (401/403).
    Forbidden(String),

    /// The request did not complete within the request timeout.
    Timeout,

    /// Anything else: transport failures, unexpected API errors, undecodable bodies.
    Other(Box<dyn core::error::Error + Send + Sync>),
}

impl FetchError {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Turn into an application error naming what was being read.
    #[must_use]
    pub fn into_app_err_for(self, kind: &ResourceKind, name: &str) -> ohno::AppError {
        match self {
            Self::NotFound => app_err!("{kind} \"{name}\" not found"),
            Self::Forbidden(message) => app_err!("access to {kind} \"{name}\" denied: {message}"),
            Self::Timeout => app_err!("timed out reading {kind} \"{name}\""),
            Self::Other(e) => app_err!("unable to read {kind} \"{name}\": {e}"),
        }
    }

    /// Turn a failed list call into an application error naming the kind.
    #[must_use]
    pub fn into_app_err_for_list(self, kind: &ResourceKind) -> ohno::AppError {
        match self {
            Self::NotFound => app_err!("{} are not served by this cluster", kind.qualified_plural()),
            Self::Forbidden(message) => app_err!("listing {} denied: {message}", kind.qualified_plural()),
            Self::Timeout => app_err!("timed out listing {}", kind.qualified_plural()),
            Self::Other(e) => app_err!("unable to list {}: {e}", kind.qualified_plural()),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => f.write_str("not found"),
            Self::Forbidden(message) => write!(f, "forbidden: {message}"),
            Self::Timeout => f.write_str("request timed out"),
            Self::Other(e) => write!(f, "{e}"),
        }
    }
}

impl core::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Other(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_resource() {
        let msg = FetchError::NotFound.into_app_err_for(&ResourceKind::TENANT, "ghost").to_string();
        assert!(msg.contains("Tenant"), "{msg}");
        assert!(msg.contains("ghost"), "{msg}");

        let msg = FetchError::Forbidden("user cannot get".into())
            .into_app_err_for(&ResourceKind::STORAGE_CLASS, "gp2")
            .to_string();
        assert!(msg.contains("StorageClass"), "{msg}");
        assert!(msg.contains("gp2"), "{msg}");
        assert!(msg.contains("denied"), "{msg}");

        let msg = FetchError::Timeout.into_app_err_for(&ResourceKind::QUOTA, "small").to_string();
        assert!(msg.contains("timed out"), "{msg}");
        assert!(msg.contains("small"), "{msg}");
    }

    #[test]
    fn test_list_messages_name_the_kind() {
        let msg = FetchError::Timeout.into_app_err_for_list(&ResourceKind::TENANT).to_string();
        assert!(msg.contains("tenants.tenantoperator.stakater.com"), "{msg}");
    }

    #[test]
    fn test_is_not_found() {
        assert!(FetchError::NotFound.is_not_found());
        assert!(!FetchError::Timeout.is_not_found());
        assert!(!FetchError::Forbidden(String::new()).is_not_found());
    }
}
