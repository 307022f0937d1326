/// Reusable UI components

use yew::prelude::*;
use crate::tab_data::{TabEntry, TabRecord};

#[derive(Properties, PartialEq)]
pub struct TabListItemProps {
    pub entry: TabEntry,
    pub onactivate: Callback<TabRecord>,
}

/// One tab in the list: short title over its pathname, click to switch to it
#[function_component(TabListItem)]
pub fn tab_list_item(props: &TabListItemProps) -> Html {
    let onclick = {
        let tab = props.entry.tab.clone();
        let onactivate = props.onactivate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            onactivate.emit(tab.clone());
        })
    };

    html! {
        <li class="tab-item">
            <a href="#" {onclick}>
                <h3 class="title">{&props.entry.short_title}</h3>
                <p class="pathname">{&props.entry.pathname}</p>
            </a>
        </li>
    }
}

#[derive(Properties, PartialEq)]
pub struct TabListProps {
    pub entries: Vec<TabEntry>,
    pub onactivate: Callback<TabRecord>,
}

#[function_component(TabList)]
pub fn tab_list(props: &TabListProps) -> Html {
    if props.entries.is_empty() {
        return html! {
            <p class="empty-text">{"No tabs to show"}</p>
        };
    }

    html! {
        <ul class="tab-list">
            {for props.entries.iter().map(|entry| html! {
                <TabListItem
                    key={entry.tab.id}
                    entry={entry.clone()}
                    onactivate={props.onactivate.clone()}
                />
            })}
        </ul>
    }
}
