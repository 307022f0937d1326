/// Popup workflow: load, activate, group
use std::cell::Cell;

use log::{debug, error, info};

use crate::error::TabError;
use crate::grouping::{DomainGroups, MalformedUrlPolicy, group_by_hostname};
use crate::host::TabHost;
use crate::listing::list_entries;
use crate::sorting::{TitleCollator, sort_tabs_by_title};
use crate::tab_data::{CreatedGroup, GroupUpdate, TabEntry, TabRecord};

/// New groups start collapsed
pub const COLLAPSE_NEW_GROUPS: bool = true;

/// Malformed URLs never take the whole popup down
const POPUP_URL_POLICY: MalformedUrlPolicy = MalformedUrlPolicy::Skip;

/// Marks a grouping run as in flight so a second click cannot start another
#[derive(Debug, Default)]
pub struct RunLatch {
    running: Cell<bool>,
}

impl RunLatch {
    /// Claim the latch; false when a run already holds it
    pub fn try_start(&self) -> bool {
        !self.running.replace(true)
    }

    pub fn finish(&self) {
        self.running.set(false);
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

/// Everything the popup renders for one invocation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PopupModel {
    pub entries: Vec<TabEntry>,
    pub groups: DomainGroups,
    pub skipped: Vec<TabError>,
}

/// Sort the tabs, then derive the list entries and hostname groups
pub fn build_popup<C: TitleCollator>(tabs: &[TabRecord], collator: &C) -> PopupModel {
    let sorted = sort_tabs_by_title(tabs, collator);

    // Skip policy never returns Err
    let (entries, skipped) = list_entries(&sorted, POPUP_URL_POLICY).unwrap_or_default();
    let groups = group_by_hostname(&sorted, POPUP_URL_POLICY).unwrap_or_default();

    debug!(
        "Built popup: {} entries, {} groups, {} skipped",
        entries.len(),
        groups.len(),
        skipped.len()
    );

    PopupModel {
        entries,
        groups,
        skipped,
    }
}

pub async fn load_popup<H: TabHost, C: TitleCollator>(
    host: &H,
    collator: &C,
) -> Result<PopupModel, TabError> {
    let tabs = host.query_current_window().await?;
    debug!("Fetched {} tabs", tabs.len());
    Ok(build_popup(&tabs, collator))
}

/// Make the tab active, then bring its window to the front
pub async fn activate_tab<H: TabHost>(host: &H, tab: &TabRecord) -> Result<(), TabError> {
    host.activate_tab(tab.id).await?;
    host.focus_window(tab.window_id).await?;
    debug!("Activated tab {} in window {}", tab.id, tab.window_id);
    Ok(())
}

/// Create one tab group per hostname, in group order
///
/// Each group is created and titled before the next one starts. The first
/// host failure ends the run; groups created before it stay in place.
pub async fn create_tab_groups<H: TabHost>(
    host: &H,
    groups: &DomainGroups,
) -> Result<Vec<CreatedGroup>, TabError> {
    let mut created = Vec::with_capacity(groups.len());

    for group in groups {
        if group.tabs.is_empty() {
            continue;
        }

        let tab_ids = group.tab_ids();
        let label = group.label();

        let group_id = host.group_tabs(&tab_ids).await.inspect_err(|e| {
            error!("Grouping {} failed: {}", group.hostname, e);
        })?;

        let update = GroupUpdate {
            title: label.clone(),
            collapsed: COLLAPSE_NEW_GROUPS,
        };
        host.update_group(group_id, &update).await.inspect_err(|e| {
            error!("Titling group {} failed: {}", group_id, e);
        })?;

        debug!("Group {} '{}' holds {} tabs", group_id, label, tab_ids.len());
        created.push(CreatedGroup {
            group_id,
            label,
            tab_count: tab_ids.len(),
        });
    }

    info!("Created {} tab groups", created.len());
    Ok(created)
}
