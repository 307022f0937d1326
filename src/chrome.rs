/// `TabHost` backed by the chrome.* extension APIs
use wasm_bindgen::prelude::*;

use crate::error::{HostCall, TabError};
use crate::host::TabHost;
use crate::tab_data::{GroupId, GroupUpdate, TabId, TabRecord, WindowId};

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getCurrentWindowTabs() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn activateTab(tab_id: i32) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn focusWindow(window_id: i32) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn groupTabs(tab_ids: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn updateTabGroup(group_id: i32, properties: JsValue) -> Result<(), JsValue>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ChromeHost;

/// Turn a rejected promise into a host error, keeping the browser's message
fn host_error(operation: HostCall, error: JsValue) -> TabError {
    let message = error
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(&error, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", error));
    TabError::host(operation, message)
}

/// Group ids are JS numbers; only exact i32 values are accepted
fn group_id_from_number(id: f64) -> Result<GroupId, TabError> {
    let in_range = (GroupId::MIN as f64..=GroupId::MAX as f64).contains(&id);
    if id.fract() == 0.0 && in_range {
        Ok(id as GroupId)
    } else {
        Err(TabError::Decode(format!("Expected an integer group id, got {}", id)))
    }
}

impl TabHost for ChromeHost {
    async fn query_current_window(&self) -> Result<Vec<TabRecord>, TabError> {
        let tabs_js = getCurrentWindowTabs()
            .await
            .map_err(|e| host_error(HostCall::QueryTabs, e))?;
        serde_wasm_bindgen::from_value(tabs_js)
            .map_err(|e| TabError::Decode(format!("Failed to parse tabs: {}", e)))
    }

    async fn activate_tab(&self, tab_id: TabId) -> Result<(), TabError> {
        activateTab(tab_id)
            .await
            .map_err(|e| host_error(HostCall::ActivateTab, e))
    }

    async fn focus_window(&self, window_id: WindowId) -> Result<(), TabError> {
        focusWindow(window_id)
            .await
            .map_err(|e| host_error(HostCall::FocusWindow, e))
    }

    async fn group_tabs(&self, tab_ids: &[TabId]) -> Result<GroupId, TabError> {
        let tab_ids_js = serde_wasm_bindgen::to_value(tab_ids)
            .map_err(|e| TabError::Decode(format!("Failed to serialize tab ids: {}", e)))?;

        let group_js = groupTabs(tab_ids_js)
            .await
            .map_err(|e| host_error(HostCall::GroupTabs, e))?;

        let id = group_js
            .as_f64()
            .ok_or_else(|| TabError::Decode(format!("Expected a group id, got {:?}", group_js)))?;
        group_id_from_number(id)
    }

    async fn update_group(&self, group_id: GroupId, update: &GroupUpdate) -> Result<(), TabError> {
        let properties = serde_wasm_bindgen::to_value(update)
            .map_err(|e| TabError::Decode(format!("Failed to serialize group update: {}", e)))?;

        updateTabGroup(group_id, properties)
            .await
            .map_err(|e| host_error(HostCall::UpdateGroup, e))
    }
}
