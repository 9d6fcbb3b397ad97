use dioxus::prelude::*;

use crate::charts::geometry;
use crate::charts::scene::{ChartItem, ChartScene, PlatformGroup};
use crate::core::{data, format};
use crate::t;

/// Renders the reconciled scene. All add/remove decisions were already taken
/// by [`ChartScene::sync`]; this component just mirrors the scene, node for
/// node, with stable keys.
#[component]
pub fn ChartBoard(scene: Signal<ChartScene>) -> Element {
    let snapshot = scene();

    rsx! {
        div { id: "visualizer", class: "chart-board",
            for group in snapshot.groups.iter() {
                {render_group(group)}
            }
        }
    }
}

fn render_group(group: &PlatformGroup) -> Element {
    rsx! {
        section {
            key: "{group.platform}",
            id: "platform-group-{group.platform}",
            class: "chart-group",

            h3 { class: "chart-group__title", "{group.platform}" }

            if group.items.is_empty() {
                p { class: "chart-group__empty", {t!("explorer-empty-group")} }
            } else {
                div { class: "chart-group__items",
                    for item in group.items.iter() {
                        {render_item(item)}
                    }
                }
            }
        }
    }
}

fn render_item(item: &ChartItem) -> Element {
    let record = &item.record;
    let label = format::segment_label(&record.category, record.value);
    let icon_slug = data::platform_icon_slug(&record.platform);

    let bound_px = format!("{:.1}", geometry::bound_diameter_px());
    let disc_px = format!("{:.1}", geometry::indicator_diameter_px(record.value));

    rsx! {
        div { key: "{item.key}", class: "chart-item",
            div { class: "chart-item__label", "{label}" }
            div {
                class: "chart-item__bound",
                style: "width: {bound_px}px; height: {bound_px}px;",
                div {
                    class: "chart-item__disc",
                    style: "width: {disc_px}px; height: {disc_px}px;",
                    i { class: "icon icon--{icon_slug}", aria_hidden: "true" }
                }
            }
        }
    }
}
