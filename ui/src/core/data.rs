//! Dataset model and the fixed platform/category taxonomy.
//!
//! The observations ship with the binary as an embedded JSON asset; they are
//! loaded once, validated, and never mutated afterwards. Validation is strict
//! on purpose: the renderer sizes its indicator circles against a fixed 100 %
//! bound, so a record outside the 0–100 scale must fail the load rather than
//! draw nonsense.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One observation: the share of a demographic segment using a platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub platform: String,
    pub category: String,
    /// Percentage of the segment, always within [0, 100].
    pub value: f64,
}

impl Record {
    /// Reconciliation key: the serialized record tuple, so equivalent records
    /// collapse to the same scene node.
    pub fn identity_key(&self) -> String {
        serde_json::to_string(self).expect("plain record serializes")
    }
}

/// Platforms present in the dataset, in display order.
pub const PLATFORMS: &[&str] = &[
    "Tumblr",
    "Facebook",
    "Pinterest",
    "Instagram",
    "LinkedIn",
    "Twitter",
];

/// A named set of related demographic category labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryGroup {
    pub name: &'static str,
    pub categories: &'static [&'static str],
}

/// Category groupings offered as filters, in display order.
pub const CATEGORY_GROUPS: &[CategoryGroup] = &[
    CategoryGroup {
        name: "Total",
        categories: &["Total"],
    },
    CategoryGroup {
        name: "Age",
        categories: &["18-29", "30-49", "50-64", "65+"],
    },
    CategoryGroup {
        name: "Gender",
        categories: &["Men", "Women"],
    },
    CategoryGroup {
        name: "Education",
        categories: &["High School", "Some College", "College"],
    },
    CategoryGroup {
        name: "Race",
        categories: &["White, Non-Hispanic", "Black, Non-Hispanic", "Hispanic"],
    },
    CategoryGroup {
        name: "Income",
        categories: &[
            "Less than 30000",
            "30000-49999",
            "50000-74999",
            "More than 75000",
        ],
    },
    CategoryGroup {
        name: "Community",
        categories: &["Urban", "Suburban", "Rural"],
    },
];

pub fn group_by_name(name: &str) -> Option<&'static CategoryGroup> {
    CATEGORY_GROUPS.iter().find(|group| group.name == name)
}

/// CSS icon slug for a platform ("Facebook" → "facebook").
pub fn platform_icon_slug(platform: &str) -> String {
    platform.to_lowercase()
}

const DATA_JSON: &str = include_str!("../../assets/data/platforms.json");

/// Load and validate the embedded dataset.
///
/// Errors name the first offending record so a bad data drop is caught at
/// startup instead of surfacing as a mis-sized circle.
pub fn load_dataset() -> Result<Vec<Record>, String> {
    let records: Vec<Record> =
        serde_json::from_str(DATA_JSON).map_err(|err| format!("dataset parse failed: {err}"))?;

    let mut seen: HashSet<(String, String)> = HashSet::new();

    for record in &records {
        if !(0.0..=100.0).contains(&record.value) {
            return Err(format!(
                "dataset value out of range: {} / {} = {}",
                record.platform, record.category, record.value
            ));
        }
        if !PLATFORMS.contains(&record.platform.as_str()) {
            return Err(format!("unknown platform in dataset: {}", record.platform));
        }
        if !known_category(&record.category) {
            return Err(format!("unknown category in dataset: {}", record.category));
        }
        if !seen.insert((record.platform.clone(), record.category.clone())) {
            return Err(format!(
                "duplicate observation: {} / {}",
                record.platform, record.category
            ));
        }
    }

    Ok(records)
}

fn known_category(category: &str) -> bool {
    CATEGORY_GROUPS
        .iter()
        .any(|group| group.categories.contains(&category))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_loads_and_validates() {
        let records = load_dataset().expect("embedded dataset is valid");
        assert!(!records.is_empty());

        // Every platform must at least carry its Total observation.
        for platform in PLATFORMS {
            assert!(
                records
                    .iter()
                    .any(|r| r.platform == *platform && r.category == "Total"),
                "missing Total row for {platform}"
            );
        }
    }

    #[test]
    fn dataset_covers_every_group_for_every_platform() {
        let records = load_dataset().unwrap();
        for platform in PLATFORMS {
            for group in CATEGORY_GROUPS {
                for category in group.categories {
                    assert!(
                        records
                            .iter()
                            .any(|r| r.platform == *platform && r.category == *category),
                        "missing {platform} / {category}"
                    );
                }
            }
        }
    }

    #[test]
    fn group_table_is_consistent() {
        let mut names = HashSet::new();
        for group in CATEGORY_GROUPS {
            assert!(!group.categories.is_empty());
            assert!(names.insert(group.name), "duplicate group {}", group.name);
        }
        assert_eq!(group_by_name("Age").unwrap().categories.len(), 4);
        assert!(group_by_name("Shoe Size").is_none());
    }

    #[test]
    fn identity_key_collapses_equal_records() {
        let a = Record {
            platform: "Twitter".into(),
            category: "Total".into(),
            value: 24.0,
        };
        let b = a.clone();
        assert_eq!(a.identity_key(), b.identity_key());

        let c = Record { value: 25.0, ..a };
        assert_ne!(b.identity_key(), c.identity_key());
    }

    #[test]
    fn icon_slug_is_lowercased() {
        assert_eq!(platform_icon_slug("LinkedIn"), "linkedin");
    }
}
