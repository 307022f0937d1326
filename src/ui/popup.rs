/// Popup UI for Tab Grouper extension

use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use patternfly_yew::prelude::*;
use crate::chrome::ChromeHost;
use crate::sorting::LocaleCollator;
use crate::tab_data::TabRecord;
use crate::ui::components::TabList;
use crate::workflow::{PopupModel, RunLatch, activate_tab, create_tab_groups, load_popup};

#[derive(Clone, PartialEq)]
enum AppState {
    Idle,
    Loading(String),
    Error(String),
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_state(|| AppState::Loading("Reading tabs...".to_string()));
    let model = use_state(PopupModel::default);
    let notice = use_state(|| None::<String>);
    let latch = use_mut_ref(RunLatch::default);

    // Load tabs on mount
    {
        let state = state.clone();
        let model = model.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                let collator = LocaleCollator::new();
                match load_popup(&ChromeHost, &collator).await {
                    Ok(loaded) => {
                        model.set(loaded);
                        state.set(AppState::Idle);
                    }
                    Err(e) => {
                        state.set(AppState::Error(format!("Failed to read tabs: {}", e)));
                    }
                }
            });
            || ()
        });
    }

    // Switch to a tab
    let on_activate = {
        let state = state.clone();

        Callback::from(move |tab: TabRecord| {
            let state = state.clone();

            spawn_local(async move {
                if let Err(e) = activate_tab(&ChromeHost, &tab).await {
                    state.set(AppState::Error(format!("Failed to switch tab: {}", e)));
                }
            });
        })
    };

    // Group tabs handler
    let on_group = {
        let state = state.clone();
        let model = model.clone();
        let notice = notice.clone();
        let latch = latch.clone();

        Callback::from(move |_| {
            // Clicks queued before the button re-renders as disabled land here
            if !latch.borrow().try_start() {
                return;
            }

            let state = state.clone();
            let notice = notice.clone();
            let latch = latch.clone();
            let groups = model.groups.clone();

            state.set(AppState::Loading("Grouping tabs...".to_string()));
            notice.set(None);

            spawn_local(async move {
                let result = create_tab_groups(&ChromeHost, &groups).await;
                latch.borrow().finish();

                match result {
                    Ok(created) => {
                        notice.set(Some(format!("Created {} tab groups", created.len())));
                        state.set(AppState::Idle);
                    }
                    Err(e) => {
                        state.set(AppState::Error(format!("Grouping failed: {}", e)));
                    }
                }
            });
        })
    };

    let is_busy = matches!(*state, AppState::Loading(_));
    let skipped = model.skipped.len();

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Tab Grouper"}</h1>

            // Tabs left out because their URL did not parse
            if skipped > 0 {
                <Alert
                    r#type={AlertType::Warning}
                    title={format!("{} tabs with unreadable URLs are not listed", skipped)}
                    inline={true}
                >
                </Alert>
            }

            // Status display
            {match &*state {
                AppState::Loading(msg) => html! {
                    <div class="loading-text-center">
                        <Spinner />
                        <p class="loading-text">{msg}</p>
                    </div>
                },
                AppState::Error(err) => html! {
                    <div class="message-top-margin">
                        <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                            {err.clone()}
                        </Alert>
                    </div>
                },
                AppState::Idle => html! {}
            }}

            if let Some(text) = (*notice).clone() {
                <p class="message-text">{text}</p>
            }

            <Button
                onclick={on_group}
                disabled={is_busy || model.groups.is_empty()}
                variant={ButtonVariant::Primary}
                block={true}
            >
                {"Group tabs"}
            </Button>

            <TabList entries={model.entries.clone()} onactivate={on_activate} />
        </div>
    }
}
