use dioxus::prelude::*;

use crate::core::data;
use crate::core::selection::SelectionState;
use crate::t;

/// "All" plus one button per platform. Exactly one carries the selected
/// modifier at any time, derived from the state rather than toggled ad hoc.
#[component]
pub fn PlatformControls(mut state: Signal<SelectionState>) -> Element {
    let snapshot = state();

    rsx! {
        div { id: "platformControl", class: "viz-controls",
            span { class: "viz-controls__caption", {t!("controls-platform-heading")} }
            div { class: "viz-controls__buttons", role: "group",
                button {
                    r#type: "button",
                    class: control_class(snapshot.all_platforms_active()),
                    onclick: move |_| state.with_mut(|s| s.select_all_platforms()),
                    {t!("controls-all-platforms")}
                }
                for platform in data::PLATFORMS.iter().copied() {
                    button {
                        key: "{platform}",
                        r#type: "button",
                        class: control_class(snapshot.platform_active(platform)),
                        onclick: move |_| state.with_mut(|s| s.select_platform(platform)),
                        "{platform}"
                    }
                }
            }
        }
    }
}

/// One button per category group.
#[component]
pub fn CategoryControls(mut state: Signal<SelectionState>) -> Element {
    let snapshot = state();

    rsx! {
        div { id: "categoryControl", class: "viz-controls",
            span { class: "viz-controls__caption", {t!("controls-category-heading")} }
            div { class: "viz-controls__buttons", role: "group",
                for group in data::CATEGORY_GROUPS.iter() {
                    button {
                        key: "{group.name}",
                        r#type: "button",
                        class: control_class(snapshot.group_active(group.name)),
                        onclick: move |_| state.with_mut(|s| s.select_group(group)),
                        "{group.name}"
                    }
                }
            }
        }
    }
}

fn control_class(selected: bool) -> &'static str {
    if selected {
        "viz-controls__button viz-controls__button--selected"
    } else {
        "viz-controls__button"
    }
}
