/// Error types for Tab Grouper
use std::fmt;
use thiserror::Error;

/// The browser host call that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCall {
    QueryTabs,
    ActivateTab,
    FocusWindow,
    GroupTabs,
    UpdateGroup,
}

impl fmt::Display for HostCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HostCall::QueryTabs => "chrome.tabs.query",
            HostCall::ActivateTab => "chrome.tabs.update",
            HostCall::FocusWindow => "chrome.windows.update",
            HostCall::GroupTabs => "chrome.tabs.group",
            HostCall::UpdateGroup => "chrome.tabGroups.update",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TabError {
    /// A tab URL that is not a valid absolute URL
    #[error("malformed URL {url:?}: {source}")]
    MalformedUrl {
        url: String,
        source: url::ParseError,
    },

    /// The browser rejected a host call
    #[error("{operation} failed: {message}")]
    HostOperation { operation: HostCall, message: String },

    /// A host response did not have the expected shape
    #[error("unexpected host response: {0}")]
    Decode(String),
}

impl TabError {
    pub fn malformed_url(url: &str, source: url::ParseError) -> TabError {
        TabError::MalformedUrl {
            url: url.to_string(),
            source,
        }
    }

    pub fn host(operation: HostCall, message: impl Into<String>) -> TabError {
        TabError::HostOperation {
            operation,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_url_message() {
        let err = TabError::malformed_url("not a url", url::ParseError::RelativeUrlWithoutBase);

        assert_eq!(
            err.to_string(),
            "malformed URL \"not a url\": relative URL without a base"
        );
    }

    #[test]
    fn test_host_operation_message() {
        let err = TabError::host(HostCall::GroupTabs, "No tab with id: 12.");

        assert_eq!(err.to_string(), "chrome.tabs.group failed: No tab with id: 12.");
    }
}
