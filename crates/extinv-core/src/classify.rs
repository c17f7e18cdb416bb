//! Keyword classification and duplicate detection
//!
//! Categories are heuristic and overlap: one extension can count as both a
//! theme and a language pack. The residual count is the total minus every
//! category size, so overlaps push it down and it can go negative.

use std::collections::HashMap;
use std::fmt;

use crate::record::ExtensionRecord;

/// Keyword-matched extension category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Language,
    Theme,
    Git,
    Debug,
    Format,
}

impl Category {
    /// All categories in report order.
    pub const ALL: [Category; 5] = [
        Category::Language,
        Category::Theme,
        Category::Git,
        Category::Debug,
        Category::Format,
    ];

    /// Check whether a record falls in this category.
    ///
    /// Matching is a case-insensitive substring test. Format is decided by
    /// the id alone.
    pub fn matches(&self, record: &ExtensionRecord) -> bool {
        let id = record.id.to_lowercase();
        let name = record.name.to_lowercase();

        match self {
            Category::Language => {
                id.contains("language") || name.contains("language") || id.contains("syntax")
            }
            Category::Theme => id.contains("theme") || name.contains("theme"),
            Category::Git => id.contains("git") || name.contains("git"),
            Category::Debug => id.contains("debug") || name.contains("debug"),
            Category::Format => ["formatter", "linter", "prettier", "eslint"]
                .iter()
                .any(|keyword| id.contains(keyword)),
        }
    }

    /// Label used in report sections.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Language => "Language",
            Category::Theme => "Theme",
            Category::Git => "Git",
            Category::Debug => "Debugging",
            Category::Format => "Formatting/Linting",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Per-category views over a record list.
#[derive(Debug, Clone)]
pub struct CategoryBreakdown<'a> {
    total: usize,
    members: HashMap<Category, Vec<&'a ExtensionRecord>>,
}

impl<'a> CategoryBreakdown<'a> {
    /// Classify every record into each category it matches.
    ///
    /// Members keep the order of `records`.
    pub fn classify(records: &'a [ExtensionRecord]) -> Self {
        let members = Category::ALL
            .iter()
            .map(|category| {
                let matched: Vec<&ExtensionRecord> =
                    records.iter().filter(|r| category.matches(r)).collect();
                (*category, matched)
            })
            .collect();

        Self {
            total: records.len(),
            members,
        }
    }

    /// Records in a category.
    pub fn members(&self, category: Category) -> &[&'a ExtensionRecord] {
        self.members
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn count(&self, category: Category) -> usize {
        self.members(category).len()
    }

    /// Total minus the sum of all category counts.
    ///
    /// Records in several categories are subtracted once per category.
    pub fn residual(&self) -> i64 {
        let categorized: usize = Category::ALL.iter().map(|c| self.count(*c)).sum();
        self.total as i64 - categorized as i64
    }
}

/// Records whose normalized names collide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup<'a> {
    /// Normalized name shared by every member.
    pub key: String,
    pub members: Vec<&'a ExtensionRecord>,
}

impl DuplicateGroup<'_> {
    /// Display name of the first member.
    pub fn display_name(&self) -> &str {
        self.members.first().map(|r| r.name.as_str()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// How many members would go if only one were kept.
    pub fn surplus(&self) -> usize {
        self.members.len().saturating_sub(1)
    }
}

/// Group records by normalized name and keep groups with several members.
///
/// Groups appear in order of first encounter in `records`.
pub fn find_duplicates(records: &[ExtensionRecord]) -> Vec<DuplicateGroup<'_>> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<DuplicateGroup<'_>> = Vec::new();

    for record in records {
        let key = record.duplicate_key();
        match index.get(&key) {
            Some(&slot) => groups[slot].members.push(record),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(DuplicateGroup {
                    key,
                    members: vec![record],
                });
            }
        }
    }

    groups.retain(|g| g.len() > 1);
    groups
}
