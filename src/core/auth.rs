use crate::error::ProxyError;
use std::collections::HashSet;

/// Immutable allow-list of API keys
///
/// Built once from configuration at startup and shared read-only by every
/// request.
#[derive(Debug, Clone)]
pub struct ApiKeys {
    keys: HashSet<String>,
}

impl ApiKeys {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Check a request-supplied key. An empty key counts as missing.
    pub fn validate(&self, key: Option<&str>) -> Result<(), ProxyError> {
        match key {
            None | Some("") => Err(ProxyError::Unauthorized),
            Some(key) if self.keys.contains(key) => Ok(()),
            Some(_) => Err(ProxyError::Forbidden),
        }
    }

    /// Check every `apikey` value of a request. A repeated key is never a
    /// member of the allow-list.
    pub fn validate_param(&self, values: &[String]) -> Result<(), ProxyError> {
        match values {
            [] => self.validate(None),
            [key] => self.validate(Some(key.as_str())),
            _ => Err(ProxyError::Forbidden),
        }
    }
}
