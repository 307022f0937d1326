/// The browser calls the popup depends on
use crate::error::TabError;
use crate::tab_data::{GroupId, GroupUpdate, TabId, TabRecord, WindowId};

/// Tab listing, activation and grouping provided by the extension host
///
/// The popup runs on the single-threaded WASM event loop, so the returned
/// futures are not `Send`.
#[allow(async_fn_in_trait)]
pub trait TabHost {
    /// Tabs of the window the popup was opened from
    async fn query_current_window(&self) -> Result<Vec<TabRecord>, TabError>;

    async fn activate_tab(&self, tab_id: TabId) -> Result<(), TabError>;

    async fn focus_window(&self, window_id: WindowId) -> Result<(), TabError>;

    /// Put the tabs into a new group and return its handle
    async fn group_tabs(&self, tab_ids: &[TabId]) -> Result<GroupId, TabError>;

    async fn update_group(&self, group_id: GroupId, update: &GroupUpdate) -> Result<(), TabError>;
}
