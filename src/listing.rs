/// Text shown for each tab in the popup list
use log::warn;
use url::Url;

use crate::error::TabError;
use crate::grouping::MalformedUrlPolicy;
use crate::tab_data::{TabEntry, TabRecord};

/// Path prefix hidden from the pathname line
const DOCS_PATH_PREFIX: &str = "/docs";

/// Title text before the first "-" ("Fetch API - MDN" → "Fetch API")
pub fn short_title(title: &str) -> String {
    title.split('-').next().unwrap_or(title).trim().to_string()
}

/// URL path with a leading "/docs" prefix cut off
///
/// The prefix is matched as text, not as a path segment: "/docsify/a" → "ify/a".
pub fn pathname_suffix(url: &str) -> Result<String, TabError> {
    let parsed = Url::parse(url).map_err(|e| TabError::malformed_url(url, e))?;
    let path = parsed.path();
    Ok(path.strip_prefix(DOCS_PATH_PREFIX).unwrap_or(path).to_string())
}

pub fn list_entry(tab: &TabRecord) -> Result<TabEntry, TabError> {
    Ok(TabEntry {
        tab: tab.clone(),
        short_title: short_title(&tab.title),
        pathname: pathname_suffix(&tab.url)?,
    })
}

/// Build list entries in input order
///
/// With [`MalformedUrlPolicy::Skip`] tabs whose URL does not parse are returned
/// as errors next to the entries; with [`MalformedUrlPolicy::Abort`] the first
/// one fails the call.
pub fn list_entries(
    tabs: &[TabRecord],
    policy: MalformedUrlPolicy,
) -> Result<(Vec<TabEntry>, Vec<TabError>), TabError> {
    let mut entries = Vec::with_capacity(tabs.len());
    let mut skipped = Vec::new();

    for tab in tabs {
        match list_entry(tab) {
            Ok(entry) => entries.push(entry),
            Err(e) if policy == MalformedUrlPolicy::Skip => {
                warn!("Leaving tab {} out of the list: {}", tab.id, e);
                skipped.push(e);
            }
            Err(e) => return Err(e),
        }
    }

    Ok((entries, skipped))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_tab(id: i32, title: &str, url: &str) -> TabRecord {
        TabRecord::new(id, title.to_string(), url.to_string(), 1)
    }

    #[test]
    fn test_short_title() {
        assert_eq!(short_title("Fetch API - MDN"), "Fetch API");
        assert_eq!(short_title("Array.prototype.map() - JavaScript | MDN"), "Array.prototype.map()");
    }

    #[test]
    fn test_short_title_without_delimiter() {
        assert_eq!(short_title("No delimiter here"), "No delimiter here");
        assert_eq!(short_title(""), "");
    }

    #[test]
    fn test_short_title_splits_on_first_delimiter() {
        assert_eq!(short_title("rust-lang/rust - GitHub"), "rust");
        assert_eq!(short_title("- leading"), "");
    }

    #[test]
    fn test_pathname_suffix() {
        assert_eq!(
            pathname_suffix("https://developer.mozilla.org/docs/Web/API/fetch").unwrap(),
            "/Web/API/fetch"
        );
        assert_eq!(pathname_suffix("https://example.com/blog/post").unwrap(), "/blog/post");
        assert_eq!(pathname_suffix("https://example.com").unwrap(), "/");
    }

    #[test]
    fn test_pathname_suffix_strips_text_prefix() {
        assert_eq!(pathname_suffix("https://x.com/docsify/a").unwrap(), "ify/a");
        assert_eq!(pathname_suffix("https://x.com/docs").unwrap(), "");
    }

    #[test]
    fn test_pathname_suffix_ignores_query_and_fragment() {
        assert_eq!(
            pathname_suffix("https://developer.chrome.com/docs/extensions?hl=en#top").unwrap(),
            "/extensions"
        );
    }

    #[test]
    fn test_pathname_suffix_malformed() {
        assert!(matches!(
            pathname_suffix("developer.mozilla.org/docs"),
            Err(TabError::MalformedUrl { .. })
        ));
    }

    #[test]
    fn test_list_entries() {
        let tabs = vec![
            create_test_tab(1, "Fetch API - MDN", "https://developer.mozilla.org/docs/Web/API/fetch"),
            create_test_tab(2, "tabs - Chrome Developers", "https://developer.chrome.com/docs/extensions/reference/tabs"),
        ];

        let (entries, skipped) = list_entries(&tabs, MalformedUrlPolicy::Abort).unwrap();

        assert!(skipped.is_empty());
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].short_title, "Fetch API");
        assert_eq!(entries[0].pathname, "/Web/API/fetch");
        assert_eq!(entries[1].short_title, "tabs");
        assert_eq!(entries[1].pathname, "/extensions/reference/tabs");
        assert_eq!(entries[1].tab.id, 2);
    }

    #[test]
    fn test_list_entries_skip_policy() {
        let tabs = vec![
            create_test_tab(1, "Broken", "no scheme"),
            create_test_tab(2, "Fine", "https://example.com/docs/a"),
        ];

        let (entries, skipped) = list_entries(&tabs, MalformedUrlPolicy::Skip).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].tab.id, 2);
        assert_eq!(skipped.len(), 1);
    }

    #[test]
    fn test_list_entries_abort_policy() {
        let tabs = vec![
            create_test_tab(1, "Fine", "https://example.com"),
            create_test_tab(2, "Broken", "no scheme"),
        ];

        assert!(list_entries(&tabs, MalformedUrlPolicy::Abort).is_err());
    }
}
