/// Hostname grouping and group label derivation for Tab Grouper
use std::collections::HashMap;

use log::warn;
use url::Url;

use crate::error::TabError;
use crate::tab_data::{TabId, TabRecord};

/// Labels that carry no meaning in a group title
const INSIGNIFICANT_LABELS: [&str; 3] = ["www", "com", "org"];

/// What to do with a tab whose URL does not parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedUrlPolicy {
    /// Leave the tab out and keep going
    #[default]
    Skip,
    /// Fail the whole operation on the first malformed URL
    Abort,
}

/// Derive a group title from a hostname
///
/// Algorithm:
/// 1. Drop one trailing "." (fully qualified form), then split by "."
/// 2. Drop the insignificant labels ("www", "com", "org")
/// 3. If fewer than 2 labels remain, there is no secondary-level domain:
///    → Return the last label of the unfiltered hostname (the TLD)
/// 4. Else:
///    → Return the remaining labels joined by "."
///
/// Examples:
/// - developer.mozilla.org → developer.mozilla
/// - www.com → com
/// - localhost → localhost
/// - a.b.c.co.uk → a.b.c.co.uk
pub fn hostname_to_label(hostname: &str) -> String {
    let hostname = hostname.strip_suffix('.').unwrap_or(hostname);
    let labels: Vec<&str> = hostname.split('.').collect();
    let significant: Vec<&str> = labels
        .iter()
        .copied()
        .filter(|label| !INSIGNIFICANT_LABELS.contains(label))
        .collect();

    if significant.len() < 2 {
        // split always yields at least one element
        labels.last().copied().unwrap_or_default().to_string()
    } else {
        significant.join(".")
    }
}

/// Extract the hostname of a tab URL
///
/// URLs without a host (about:blank, data: URLs) map to the empty hostname.
pub fn tab_hostname(url: &str) -> Result<String, TabError> {
    let parsed = Url::parse(url).map_err(|e| TabError::malformed_url(url, e))?;
    Ok(parsed.host_str().unwrap_or_default().to_string())
}

/// Tabs that share one hostname, in the order they were seen
#[derive(Debug, Clone, PartialEq)]
pub struct DomainGroup {
    pub hostname: String,
    pub tabs: Vec<TabRecord>,
}

impl DomainGroup {
    pub fn label(&self) -> String {
        hostname_to_label(&self.hostname)
    }

    pub fn tab_ids(&self) -> Vec<TabId> {
        self.tabs.iter().map(|tab| tab.id).collect()
    }
}

/// Hostname buckets kept in first-seen order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DomainGroups {
    groups: Vec<DomainGroup>,
    index: HashMap<String, usize>,
}

impl DomainGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tab to its hostname bucket, creating the bucket on first use
    pub fn insert(&mut self, hostname: String, tab: TabRecord) {
        match self.index.get(&hostname) {
            Some(&position) => self.groups[position].tabs.push(tab),
            None => {
                self.index.insert(hostname.clone(), self.groups.len());
                self.groups.push(DomainGroup {
                    hostname,
                    tabs: vec![tab],
                });
            }
        }
    }

    pub fn get(&self, hostname: &str) -> Option<&DomainGroup> {
        self.index.get(hostname).map(|&position| &self.groups[position])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DomainGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn hostnames(&self) -> Vec<&str> {
        self.groups.iter().map(|group| group.hostname.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a DomainGroups {
    type Item = &'a DomainGroup;
    type IntoIter = std::slice::Iter<'a, DomainGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Partition tabs into hostname buckets, preserving input order
pub fn group_by_hostname(
    tabs: &[TabRecord],
    policy: MalformedUrlPolicy,
) -> Result<DomainGroups, TabError> {
    let mut groups = DomainGroups::new();

    for tab in tabs {
        match tab_hostname(&tab.url) {
            Ok(hostname) => groups.insert(hostname, tab.clone()),
            Err(e) if policy == MalformedUrlPolicy::Skip => {
                warn!("Leaving tab {} out of grouping: {}", tab.id, e);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(groups)
}
