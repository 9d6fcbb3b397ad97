//! Keyed reconciliation between the current selection and the chart scene.
//!
//! The scene is a two-level hierarchy: platform groups keyed by platform
//! name, each holding items keyed by record identity. `sync` diffs the scene
//! against the target derived from a selection, removing stale nodes and
//! appending new ones while leaving survivors untouched, and reports what it
//! changed as a [`ScenePatch`]. Running `sync` twice with the same selection
//! is a no-op. Nothing here knows about the renderer.

use crate::core::data::{self, Record};
use crate::core::filter::filter_records;
use crate::core::selection::{Selection, Selector};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartScene {
    pub groups: Vec<PlatformGroup>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlatformGroup {
    pub platform: String,
    pub items: Vec<ChartItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartItem {
    pub key: String,
    pub record: Record,
}

/// What one `sync` pass added and removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScenePatch {
    pub groups_added: Vec<String>,
    pub groups_removed: Vec<String>,
    pub items_added: usize,
    pub items_removed: usize,
}

impl ScenePatch {
    pub fn is_noop(&self) -> bool {
        self.groups_added.is_empty()
            && self.groups_removed.is_empty()
            && self.items_added == 0
            && self.items_removed == 0
    }
}

impl ChartScene {
    /// Reconcile the scene with `selection` over `records`.
    pub fn sync(&mut self, records: &[Record], selection: &Selection) -> ScenePatch {
        let mut patch = ScenePatch::default();

        // Group pass: rebuild in target order, reusing surviving groups.
        let targets = selection.platform.expand(data::PLATFORMS);
        let mut previous_groups = std::mem::take(&mut self.groups);
        for platform in targets {
            match previous_groups
                .iter()
                .position(|group| group.platform == platform)
            {
                Some(pos) => self.groups.push(previous_groups.remove(pos)),
                None => {
                    patch.groups_added.push(platform.clone());
                    self.groups.push(PlatformGroup {
                        platform,
                        items: Vec::new(),
                    });
                }
            }
        }
        // A removed group takes its items with it.
        for group in previous_groups {
            patch.items_removed += group.items.len();
            patch.groups_removed.push(group.platform);
        }

        // Item pass: per group, diff against the filtered record set.
        for group in &mut self.groups {
            let wanted = filter_records(
                records,
                &Selection {
                    platform: Selector::One(group.platform.clone()),
                    category: selection.category.clone(),
                },
            );

            let mut previous_items = std::mem::take(&mut group.items);
            for record in wanted {
                let key = record.identity_key();
                match previous_items.iter().position(|item| item.key == key) {
                    Some(pos) => group.items.push(previous_items.remove(pos)),
                    None => {
                        patch.items_added += 1;
                        group.items.push(ChartItem { key, record });
                    }
                }
            }
            patch.items_removed += previous_items.len();
        }

        patch
    }

    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|group| group.items.len()).sum()
    }

    /// Flat copy of the displayed records, in display order.
    pub fn records(&self) -> Vec<Record> {
        self.groups
            .iter()
            .flat_map(|group| group.items.iter().map(|item| item.record.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::group_by_name;
    use crate::core::selection::SelectionState;

    fn dataset() -> Vec<Record> {
        data::load_dataset().expect("embedded dataset is valid")
    }

    fn item_keys(scene: &ChartScene) -> Vec<String> {
        scene
            .groups
            .iter()
            .flat_map(|g| g.items.iter().map(|i| i.key.clone()))
            .collect()
    }

    #[test]
    fn initial_sync_builds_one_group_per_platform() {
        let records = dataset();
        let mut scene = ChartScene::default();
        let patch = scene.sync(&records, SelectionState::initial().selection());

        assert_eq!(scene.groups.len(), data::PLATFORMS.len());
        assert_eq!(patch.groups_added.len(), data::PLATFORMS.len());
        // Total group: exactly one item per platform.
        assert!(scene.groups.iter().all(|g| g.items.len() == 1));
        assert_eq!(patch.items_added, data::PLATFORMS.len());
        assert_eq!(patch.items_removed, 0);
    }

    #[test]
    fn resync_with_same_selection_is_a_noop() {
        let records = dataset();
        let mut scene = ChartScene::default();
        let selection = SelectionState::initial().selection().clone();

        scene.sync(&records, &selection);
        let before = scene.clone();
        let patch = scene.sync(&records, &selection);

        assert!(patch.is_noop(), "second sync changed the scene: {patch:?}");
        assert_eq!(scene, before);
    }

    #[test]
    fn single_platform_total_shows_one_labelled_item() {
        let records = dataset();
        let mut scene = ChartScene::default();

        let mut state = SelectionState::initial();
        state.select_platform("Twitter");
        scene.sync(&records, state.selection());

        assert_eq!(scene.groups.len(), 1);
        assert_eq!(scene.groups[0].platform, "Twitter");
        assert_eq!(scene.groups[0].items.len(), 1);

        let expected = records
            .iter()
            .find(|r| r.platform == "Twitter" && r.category == "Total")
            .unwrap();
        assert_eq!(scene.groups[0].items[0].record, *expected);
    }

    #[test]
    fn age_group_across_all_platforms_caps_at_four_items_each() {
        let records = dataset();
        let mut scene = ChartScene::default();

        let mut state = SelectionState::initial();
        state.select_group(group_by_name("Age").unwrap());
        scene.sync(&records, state.selection());

        assert_eq!(scene.groups.len(), data::PLATFORMS.len());
        for group in &scene.groups {
            assert!(group.items.len() <= 4, "{} has too many items", group.platform);
            assert!(group
                .items
                .iter()
                .all(|item| item.record.platform == group.platform));
        }
    }

    #[test]
    fn narrowing_platforms_removes_stale_groups_and_items() {
        let records = dataset();
        let mut scene = ChartScene::default();

        let mut state = SelectionState::initial();
        scene.sync(&records, state.selection());

        state.select_platform("LinkedIn");
        let patch = scene.sync(&records, state.selection());

        assert_eq!(scene.groups.len(), 1);
        assert_eq!(patch.groups_removed.len(), data::PLATFORMS.len() - 1);
        assert!(patch.groups_added.is_empty());
        assert_eq!(patch.items_added, 0);
        assert_eq!(patch.items_removed, data::PLATFORMS.len() - 1);
    }

    #[test]
    fn switching_groups_and_back_restores_the_original_item_set() {
        let records = dataset();
        let mut scene = ChartScene::default();
        let mut state = SelectionState::initial();

        state.select_group(group_by_name("Age").unwrap());
        scene.sync(&records, state.selection());
        let age_keys = item_keys(&scene);

        state.select_group(group_by_name("Income").unwrap());
        scene.sync(&records, state.selection());
        assert_ne!(item_keys(&scene), age_keys);

        state.select_group(group_by_name("Age").unwrap());
        scene.sync(&records, state.selection());
        assert_eq!(item_keys(&scene), age_keys);
    }

    #[test]
    fn unmatched_filter_keeps_the_group_but_empties_it() {
        // A category selector that matches nothing must render an empty,
        // structurally valid group rather than fail.
        let records = dataset();
        let mut scene = ChartScene::default();

        let selection = Selection {
            platform: Selector::One("Twitter".into()),
            category: Selector::Many(vec!["Left-handed".into()]),
        };
        let patch = scene.sync(&records, &selection);

        assert_eq!(scene.groups.len(), 1);
        assert!(scene.groups[0].items.is_empty());
        assert_eq!(patch.items_added, 0);
    }

    #[test]
    fn surviving_items_are_reused_not_rebuilt() {
        let records = dataset();
        let mut scene = ChartScene::default();
        let mut state = SelectionState::initial();

        scene.sync(&records, state.selection());
        let twitter_total_key = scene
            .groups
            .iter()
            .find(|g| g.platform == "Twitter")
            .unwrap()
            .items[0]
            .key
            .clone();

        // Narrow to Twitter: its Total item survives the diff untouched.
        state.select_platform("Twitter");
        let patch = scene.sync(&records, state.selection());
        assert_eq!(patch.items_added, 0);
        assert_eq!(scene.groups[0].items[0].key, twitter_total_key);
    }
}
