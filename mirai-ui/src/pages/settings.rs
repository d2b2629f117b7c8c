//! Settings Page
//!
//! Tab strip plus one panel per tab. Selection is exclusive and lives in
//! the core's settings tab controller.

use leptos::*;

use mirai::view::{SettingsTab, SETTINGS_TABS};
use mirai::Input;

use crate::components::SectionView;
use crate::state::global::GlobalState;

/// Settings page component
#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <SectionView id="settings">
            <h1 class="section-title">"Settings"</h1>

            <div class="settings-tabs">
                {SETTINGS_TABS.into_iter().map(|tab| view! { <TabButton tab=tab /> }).collect_view()}
            </div>

            <TabPanel id="general">
                <GeneralSettings />
            </TabPanel>
            <TabPanel id="appearance">
                <AppearanceSettings />
            </TabPanel>
            <TabPanel id="notifications">
                <NotificationSettings />
            </TabPanel>
            <TabPanel id="privacy">
                <PrivacySettings />
            </TabPanel>
        </SectionView>
    }
}

#[component]
fn TabButton(tab: SettingsTab) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_class = state.clone();
    let active = move || state_for_class.with(|d| d.tabs().is_active(tab.id));

    view! {
        <button
            class="tab-btn"
            class:active=active
            data-tab=tab.id
            on:click=move |_| {
                state.dispatch(Input::SelectTab(tab.id.to_string()));
            }
        >
            {tab.label}
        </button>
    }
}

#[component]
fn TabPanel(id: &'static str, children: Children) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let active = move || state.with(|d| d.tabs().is_active(id));

    view! {
        <div class="tab-panel" class:active=active id=format!("{}-panel", id)>
            {children()}
        </div>
    }
}

#[component]
fn GeneralSettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_name = state.clone();
    let name = move || state_for_name.with(|d| d.session().user().name.clone());
    let start_section = move || state.with(|d| d.config().dashboard.default_section.clone());

    view! {
        <div class="settings-group">
            <div class="setting-item">
                <label>"Username"</label>
                <input type="text" class="setting-input" prop:value=name readonly=true />
            </div>
            <div class="setting-item">
                <label>"Start section"</label>
                <span class="setting-value">{start_section}</span>
            </div>
        </div>
    }
}

#[component]
fn AppearanceSettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_label = state.clone();
    let current = move || {
        state_for_label.with(|d| {
            let theme = d.theme();
            format!("{} {}", theme.icon(), theme)
        })
    };

    view! {
        <div class="settings-group">
            <div class="setting-item">
                <label>"Theme"</label>
                <button
                    class="setting-btn"
                    on:click=move |_| {
                        state.dispatch(Input::ToggleTheme);
                    }
                >
                    {current}
                </button>
            </div>
        </div>
    }
}

/// Notification switches; kept for the session only
#[component]
fn NotificationSettings() -> impl IntoView {
    let options = [
        ("Task completion", true),
        ("System warnings", true),
        ("Chat replies", false),
    ];

    view! {
        <div class="settings-group">
            {options.into_iter().map(|(label, initial)| {
                let (enabled, set_enabled) = create_signal(initial);
                view! {
                    <div class="setting-item">
                        <label>{label}</label>
                        <input
                            type="checkbox"
                            prop:checked=move || enabled.get()
                            on:change=move |ev| set_enabled.set(event_target_checked(&ev))
                        />
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[component]
fn PrivacySettings() -> impl IntoView {
    view! {
        <div class="settings-group">
            <p class="setting-note">
                "Conversations and activity logs live only in this browser tab and are gone on reload."
            </p>
            <p class="setting-note">"Mirai sends nothing to a server."</p>
        </div>
    }
}
