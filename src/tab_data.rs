/// Data structures for Tab Grouper
use serde::{Deserialize, Serialize};

/// Chrome's integer handle for a tab
pub type TabId = i32;

/// Chrome's integer handle for a browser window
pub type WindowId = i32;

/// Chrome's integer handle for a tab group
pub type GroupId = i32;

/// Snapshot of an open browser tab, as returned by `chrome.tabs.query`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabRecord {
    pub id: TabId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    pub window_id: WindowId,
}

impl TabRecord {
    pub fn new(id: TabId, title: String, url: String, window_id: WindowId) -> TabRecord {
        TabRecord {
            id,
            title,
            url,
            window_id,
        }
    }
}

/// One row of the popup's tab list
#[derive(Debug, Clone, PartialEq)]
pub struct TabEntry {
    pub tab: TabRecord,
    pub short_title: String,
    pub pathname: String,
}

/// Display properties passed to `chrome.tabGroups.update`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupUpdate {
    pub title: String,
    pub collapsed: bool,
}

/// A tab group created for one hostname bucket
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedGroup {
    pub group_id: GroupId,
    pub label: String,
    pub tab_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_record_creation() {
        let tab = TabRecord::new(
            1,
            "Fetch API - MDN".to_string(),
            "https://developer.mozilla.org/docs/Web/API/fetch".to_string(),
            7,
        );

        assert_eq!(tab.id, 1);
        assert_eq!(tab.title, "Fetch API - MDN");
        assert_eq!(tab.url, "https://developer.mozilla.org/docs/Web/API/fetch");
        assert_eq!(tab.window_id, 7);
    }

    #[test]
    fn test_deserialize_chrome_tab() {
        // Chrome sends many more fields than we read
        let json = r#"{
            "active": true,
            "id": 42,
            "index": 3,
            "pinned": false,
            "title": "Rust",
            "url": "https://www.rust-lang.org/",
            "windowId": 9
        }"#;

        let tab: TabRecord = serde_json::from_str(json).unwrap();

        assert_eq!(tab.id, 42);
        assert_eq!(tab.title, "Rust");
        assert_eq!(tab.url, "https://www.rust-lang.org/");
        assert_eq!(tab.window_id, 9);
    }

    #[test]
    fn test_deserialize_tab_without_title_or_url() {
        let tab: TabRecord = serde_json::from_str(r#"{"id": 1, "windowId": 2}"#).unwrap();

        assert_eq!(tab.title, "");
        assert_eq!(tab.url, "");
    }

    #[test]
    fn test_group_update_serialization() {
        let update = GroupUpdate {
            title: "developer.mozilla".to_string(),
            collapsed: true,
        };

        let json = serde_json::to_value(&update).unwrap();

        assert_eq!(json["title"], "developer.mozilla");
        assert_eq!(json["collapsed"], true);
    }
}
