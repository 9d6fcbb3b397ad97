use std::rc::Rc;

use dioxus::prelude::*;

use crate::charts::scene::{ChartScene, ScenePatch};
use crate::charts::{CategoryControls, ChartBoard, ExportPanel, PlatformControls};
use crate::core::data::{self, Record};
use crate::core::selection::SelectionState;
use crate::t;

/// The explorer page owns the whole pipeline: the loaded dataset, the
/// selection state the controls mutate, and the reconciled scene the board
/// mirrors. The effect below is the only place `sync` runs; every control
/// click flows through it before the next event is handled.
#[component]
pub fn Explorer() -> Element {
    let dataset: Rc<Result<Vec<Record>, String>> = use_hook(|| Rc::new(data::load_dataset()));
    let state = use_signal(SelectionState::initial);
    let mut scene = use_signal(ChartScene::default);
    let mut last_patch = use_signal(|| Option::<ScenePatch>::None);

    {
        let dataset = dataset.clone();
        use_effect(move || {
            let selection = state.read().selection().clone();
            if let Ok(records) = dataset.as_ref() {
                let patch = scene.write().sync(records, &selection);
                #[cfg(debug_assertions)]
                println!(
                    "[charts] sync: groups +{}/-{}, items +{}/-{}",
                    patch.groups_added.len(),
                    patch.groups_removed.len(),
                    patch.items_added,
                    patch.items_removed
                );
                last_patch.set(Some(patch));
            }
        });
    }

    let load_error = dataset.as_ref().as_ref().err().cloned();

    let scene_snapshot = scene();
    let group_count = scene_snapshot.groups.len() as u64;
    let segment_count = scene_snapshot.item_count() as u64;
    let selection = state.read().selection().clone();

    let churn = last_patch().filter(|patch| !patch.is_noop()).map(|patch| {
        format!(
            "+{} / −{}",
            patch.items_added + patch.groups_added.len(),
            patch.items_removed + patch.groups_removed.len()
        )
    });

    rsx! {
        section { class: "page page-explorer",
            h1 { {t!("explorer-title")} }
            p { {t!("explorer-intro")} }

            if let Some(err) = load_error {
                div { class: "explorer__error", "⚠️ {err}" }
            } else {
                div { class: "explorer__controls",
                    PlatformControls { state: state }
                    CategoryControls { state: state }
                }

                p { class: "explorer__meta",
                    {t!("explorer-meta", segments = segment_count, platforms = group_count)}
                    if let Some(churn_label) = churn {
                        span { class: "explorer__meta-churn", " {churn_label}" }
                    }
                }

                ChartBoard { scene: scene }

                ExportPanel {
                    records: scene_snapshot.records(),
                    selection: selection,
                }
            }
        }
    }
}
