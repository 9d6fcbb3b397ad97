//! Filter selectors and the selection state owned by the explorer view.

use serde::{Deserialize, Serialize};

use super::data::{self, CategoryGroup};

/// A filter criterion for one record field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Selector {
    /// No filter; every value passes.
    All,
    /// Exact, case-sensitive match on a single value.
    One(String),
    /// Membership in a set of values.
    Many(Vec<String>),
}

impl Selector {
    pub fn admits(&self, value: &str) -> bool {
        match self {
            Selector::All => true,
            Selector::One(wanted) => wanted == value,
            Selector::Many(wanted) => wanted.iter().any(|w| w == value),
        }
    }

    /// The ordered list of names this selector denotes within a universe.
    /// `Many` keeps its own ordering; `All` yields the whole universe.
    pub fn expand(&self, universe: &[&str]) -> Vec<String> {
        match self {
            Selector::All => universe.iter().map(|name| name.to_string()).collect(),
            Selector::One(name) => vec![name.clone()],
            Selector::Many(names) => names.clone(),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selector::All)
    }
}

/// The pair of selectors the filter and renderer consume. Passed by value;
/// nothing reads filter criteria out of ambient state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub platform: Selector,
    pub category: Selector,
}

impl Selection {
    pub fn everything() -> Self {
        Self {
            platform: Selector::All,
            category: Selector::All,
        }
    }
}

/// State holder for the explorer's control surface. Mutated only through the
/// setters below, one click handler at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    selection: Selection,
    active_group: &'static str,
}

impl SelectionState {
    /// Startup selection: all platforms, the "Total" category group.
    pub fn initial() -> Self {
        let total = data::group_by_name("Total").expect("Total group is in the table");
        Self {
            selection: Selection {
                platform: Selector::All,
                category: group_selector(total),
            },
            active_group: total.name,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn select_all_platforms(&mut self) {
        self.selection.platform = Selector::All;
    }

    pub fn select_platform(&mut self, name: &str) {
        self.selection.platform = Selector::One(name.to_string());
    }

    pub fn select_group(&mut self, group: &'static CategoryGroup) {
        self.selection.category = group_selector(group);
        self.active_group = group.name;
    }

    pub fn all_platforms_active(&self) -> bool {
        self.selection.platform.is_all()
    }

    pub fn platform_active(&self, name: &str) -> bool {
        matches!(&self.selection.platform, Selector::One(active) if active == name)
    }

    pub fn group_active(&self, name: &str) -> bool {
        self.active_group == name
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::initial()
    }
}

fn group_selector(group: &CategoryGroup) -> Selector {
    Selector::Many(
        group
            .categories
            .iter()
            .map(|category| category.to_string())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_admits_anything() {
        assert!(Selector::All.admits("Facebook"));
        assert!(Selector::All.admits(""));
    }

    #[test]
    fn one_matches_exactly_and_case_sensitively() {
        let sel = Selector::One("Twitter".into());
        assert!(sel.admits("Twitter"));
        assert!(!sel.admits("twitter"));
        assert!(!sel.admits("Twitter "));
    }

    #[test]
    fn many_matches_by_membership() {
        let sel = Selector::Many(vec!["Men".into(), "Women".into()]);
        assert!(sel.admits("Women"));
        assert!(!sel.admits("Total"));
    }

    #[test]
    fn expand_covers_the_universe_for_all() {
        let universe = ["a", "b", "c"];
        assert_eq!(Selector::All.expand(&universe), vec!["a", "b", "c"]);
        assert_eq!(Selector::One("b".into()).expand(&universe), vec!["b"]);
    }

    #[test]
    fn initial_state_is_all_platforms_total_group() {
        let state = SelectionState::initial();
        assert!(state.all_platforms_active());
        assert!(state.group_active("Total"));
        assert_eq!(
            state.selection().category,
            Selector::Many(vec!["Total".into()])
        );
    }

    #[test]
    fn setters_keep_one_group_active_at_a_time() {
        let mut state = SelectionState::initial();

        let age = data::group_by_name("Age").unwrap();
        state.select_group(age);
        assert!(state.group_active("Age"));
        assert!(!state.group_active("Total"));

        state.select_platform("Pinterest");
        assert!(state.platform_active("Pinterest"));
        assert!(!state.all_platforms_active());

        state.select_all_platforms();
        assert!(state.all_platforms_active());
        // Category selection survives platform changes.
        assert!(state.group_active("Age"));
    }
}
