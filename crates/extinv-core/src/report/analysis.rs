//! Cleanup analysis: which extensions are likely safe to remove
//!
//! The removal tally counts every disabled extension plus all but one member
//! of each duplicate group. A disabled extension that is also a duplicate is
//! counted twice, so the kept figure can drop below zero.

use std::fmt::Write as _;

use super::table::rule;
use crate::classify::{Category, CategoryBreakdown, DuplicateGroup};
use crate::config::{ReportLabels, Thresholds};
use crate::inventory::Inventory;
use crate::record::ExtensionRecord;

/// Findings computed from an inventory.
#[derive(Debug, Clone)]
pub struct Analysis<'a> {
    total: usize,
    disabled: Vec<&'a ExtensionRecord>,
    duplicates: Vec<DuplicateGroup<'a>>,
    categories: CategoryBreakdown<'a>,
    thresholds: Thresholds,
}

impl<'a> Analysis<'a> {
    pub fn compute(inventory: &'a Inventory, thresholds: Thresholds) -> Self {
        let analysis = Self {
            total: inventory.len(),
            disabled: inventory.disabled(),
            duplicates: inventory.duplicates(),
            categories: inventory.categories(),
            thresholds,
        };

        tracing::debug!(
            total = analysis.total,
            disabled = analysis.disabled.len(),
            duplicate_groups = analysis.duplicates.len(),
            residual = analysis.categories.residual(),
            "computed analysis"
        );

        analysis
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn disabled(&self) -> &[&'a ExtensionRecord] {
        &self.disabled
    }

    pub fn duplicates(&self) -> &[DuplicateGroup<'a>] {
        &self.duplicates
    }

    pub fn categories(&self) -> &CategoryBreakdown<'a> {
        &self.categories
    }

    /// Disabled count plus the surplus of every duplicate group.
    pub fn recommended_removals(&self) -> usize {
        let surplus: usize = self.duplicates.iter().map(DuplicateGroup::surplus).sum();
        self.disabled.len() + surplus
    }

    /// Extensions left after the recommended removals.
    pub fn kept(&self) -> i64 {
        self.total as i64 - self.recommended_removals() as i64
    }

    /// Render the analysis document.
    pub fn render(&self, labels: &ReportLabels) -> String {
        let mut out = String::new();

        out.push_str("\n\n");
        section_header(&mut out, "Extension Cleanup Analysis");

        self.write_disabled(&mut out);
        self.write_duplicates(&mut out, labels);
        self.write_themes(&mut out);
        self.write_languages(&mut out);
        self.write_formatters(&mut out);
        self.write_git(&mut out);

        let _ = writeln!(
            out,
            "\n7. Debugging: {}",
            self.categories.count(Category::Debug)
        );

        out.push('\n');
        section_header(&mut out, "Cleanup Recommendations");
        self.write_summary(&mut out);

        out
    }

    fn write_disabled(&self, out: &mut String) {
        let _ = writeln!(out, "\n1. Disabled extensions: {}", self.disabled.len());
        if self.disabled.is_empty() {
            out.push_str("   → All extensions are enabled.\n");
            return;
        }

        write_numbered(out, &self.disabled);
        out.push_str("   → Recommended: disabled extensions can be removed.\n");
    }

    fn write_duplicates(&self, out: &mut String, labels: &ReportLabels) {
        let _ = writeln!(
            out,
            "\n2. Possible duplicate extensions: {} group(s)",
            self.duplicates.len()
        );
        if self.duplicates.is_empty() {
            out.push_str("   → No duplicate extensions found.\n");
            return;
        }

        for (idx, group) in self.duplicates.iter().enumerate() {
            let _ = writeln!(
                out,
                "   Group {}: {} ({} versions)",
                idx + 1,
                group.display_name(),
                group.len()
            );
            for ext in &group.members {
                let status = if ext.enabled {
                    &labels.enabled
                } else {
                    &labels.disabled
                };
                let _ = writeln!(
                    out,
                    "     - {} ({}, v{}) [{}]",
                    ext.id, ext.publisher, ext.version, status
                );
            }
            out.push_str("   → Keep one and remove the rest.\n");
        }
    }

    fn write_themes(&self, out: &mut String) {
        let themes = self.categories.members(Category::Theme);
        let _ = writeln!(out, "\n3. Theme extensions: {}", themes.len());
        if themes.len() > self.thresholds.theme {
            out.push_str(
                "   → Many themes installed. Consider removing the ones you rarely use.\n",
            );
            write_numbered(out, themes);
        } else {
            out.push_str("   → Reasonable amount.\n");
        }
    }

    fn write_languages(&self, out: &mut String) {
        let count = self.categories.count(Category::Language);
        let _ = writeln!(out, "\n4. Language extensions: {}", count);
        if count > self.thresholds.language {
            out.push_str(
                "   → Many language extensions installed. Consider removing languages you do not use.\n",
            );
        } else {
            out.push_str("   → Reasonable amount.\n");
        }
    }

    fn write_formatters(&self, out: &mut String) {
        let formatters = self.categories.members(Category::Format);
        let _ = writeln!(out, "\n5. Formatting/Linting: {}", formatters.len());
        if formatters.len() > self.thresholds.format {
            out.push_str(
                "   → Many formatters/linters installed. Check for overlapping functionality.\n",
            );
            write_numbered(out, formatters);
        }
    }

    fn write_git(&self, out: &mut String) {
        let count = self.categories.count(Category::Git);
        let _ = writeln!(out, "\n6. Git: {}", count);
        if count > self.thresholds.git {
            out.push_str(
                "   → Many Git extensions installed. Check for overlapping functionality.\n",
            );
        }
    }

    fn write_summary(&self, out: &mut String) {
        let removals = self.recommended_removals();

        if !self.disabled.is_empty() {
            let _ = writeln!(
                out,
                "- Remove the {} disabled extension(s)",
                self.disabled.len()
            );
        }

        if removals > 0 {
            let _ = writeln!(
                out,
                "- Consider removing about {} extension(s) in total.",
                removals
            );
        } else {
            out.push_str("- Installed extensions are well managed.\n");
        }

        let _ = writeln!(
            out,
            "\nKeep {} of the {} installed extensions",
            self.kept(),
            self.total
        );
    }
}

fn section_header(out: &mut String, title: &str) {
    let _ = writeln!(out, "{}\n{}\n{}", rule(), title, rule());
}

fn write_numbered(out: &mut String, records: &[&ExtensionRecord]) {
    for (idx, ext) in records.iter().enumerate() {
        let _ = writeln!(out, "   {}. {} ({})", idx + 1, ext.name, ext.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn record(id: &str, name: &str, enabled: bool) -> ExtensionRecord {
        ExtensionRecord {
            id: id.to_string(),
            name: name.to_string(),
            publisher: "pub".to_string(),
            version: "1.0".to_string(),
            enabled,
        }
    }

    #[test]
    fn test_disabled_duplicate_is_counted_twice() {
        let inventory = Inventory::from_records(vec![
            record("a.one", "Tool", false),
            record("b.two", "Tool", false),
            record("c.three", "Other", true),
        ]);

        let analysis = Analysis::compute(&inventory, Thresholds::default());

        assert_eq!(analysis.disabled().len(), 2);
        assert_eq!(analysis.duplicates().len(), 1);
        assert_eq!(analysis.recommended_removals(), 3);
        assert_eq!(analysis.kept(), 0);
    }

    #[test]
    fn test_kept_can_go_negative() {
        let inventory = Inventory::from_records(vec![
            record("a", "X", false),
            record("b", "X", false),
        ]);

        let analysis = Analysis::compute(&inventory, Thresholds::default());

        assert_eq!(analysis.recommended_removals(), 3);
        assert_eq!(analysis.kept(), -1);
    }

    #[test]
    fn test_clean_inventory() {
        let inventory = Inventory::from_records(vec![record("a", "A", true)]);

        let text = Analysis::compute(&inventory, Thresholds::default())
            .render(&ReportLabels::default());

        assert!(text.contains("   → All extensions are enabled.\n"));
        assert!(text.contains("   → No duplicate extensions found.\n"));
        assert!(text.contains("- Installed extensions are well managed.\n"));
        assert!(!text.contains("- Remove the"));
        assert!(text.ends_with("\nKeep 1 of the 1 installed extensions\n"));
    }

    #[test]
    fn test_threshold_is_strictly_greater() {
        let themes: Vec<ExtensionRecord> = (0..3)
            .map(|i| record(&format!("t.theme{i}"), &format!("Theme {i}"), true))
            .collect();
        let inventory = Inventory::from_records(themes);

        let text = Analysis::compute(&inventory, Thresholds::default())
            .render(&ReportLabels::default());

        assert!(text.contains("3. Theme extensions: 3\n   → Reasonable amount.\n"));
    }

    #[test]
    fn test_custom_thresholds() {
        let inventory = Inventory::from_records(vec![
            record("x.git-a", "A", true),
            record("x.git-b", "B", true),
        ]);
        let thresholds = Thresholds {
            git: 1,
            ..Thresholds::default()
        };

        let text = Analysis::compute(&inventory, thresholds).render(&ReportLabels::default());

        assert!(text.contains(
            "6. Git: 2\n   → Many Git extensions installed. Check for overlapping functionality.\n"
        ));
    }

    #[rstest]
    #[case::themes(
        "t.theme",
        "Theme",
        4,
        "\n3. Theme extensions: 4\n   → Many themes installed. Consider removing the ones you rarely use.\n",
        true
    )]
    #[case::languages(
        "x.language-pack-",
        "Pack",
        11,
        "\n4. Language extensions: 11\n   → Many language extensions installed. Consider removing languages you do not use.\n",
        false
    )]
    #[case::formatters(
        "x.eslint",
        "Fmt",
        6,
        "\n5. Formatting/Linting: 6\n   → Many formatters/linters installed. Check for overlapping functionality.\n",
        true
    )]
    #[case::git(
        "x.git",
        "Source",
        4,
        "\n6. Git: 4\n   → Many Git extensions installed. Check for overlapping functionality.\n",
        false
    )]
    fn test_default_threshold_exceeded(
        #[case] id_prefix: &str,
        #[case] name_prefix: &str,
        #[case] count: usize,
        #[case] note: &str,
        #[case] listed: bool,
    ) {
        let records: Vec<ExtensionRecord> = (0..count)
            .map(|i| record(&format!("{id_prefix}{i}"), &format!("{name_prefix} {i}"), true))
            .collect();
        let inventory = Inventory::from_records(records);

        let text = Analysis::compute(&inventory, Thresholds::default())
            .render(&ReportLabels::default());

        assert!(text.contains(note), "missing note in:\n{text}");
        let first_entry = format!("   1. {name_prefix} 0 ({id_prefix}0)\n");
        assert_eq!(text.contains(&first_entry), listed, "listing mismatch in:\n{text}");
        if listed {
            let last_entry = format!("   {count}. ");
            assert!(text.contains(&last_entry));
        } else {
            assert!(!text.contains("   1. "));
        }
    }
}
