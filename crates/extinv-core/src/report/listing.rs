//! Full inventory listing with category breakdown

use chrono::NaiveDateTime;

use super::table::{ID_KEEP, ID_LIMIT, NAME_KEEP, NAME_LIMIT, rule, table_line, truncate_cell};
use crate::classify::Category;
use crate::config::ReportLabels;
use crate::inventory::Inventory;

/// Timestamp layout used in the listing header.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render the listing document.
///
/// Contains a header, one table row per record in inventory order, then the
/// five category counts and the residual.
pub fn render_listing(
    inventory: &Inventory,
    labels: &ReportLabels,
    generated_at: NaiveDateTime,
) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", labels.title));
    out.push_str(&format!(
        "Generated: {}\n",
        generated_at.format(TIMESTAMP_FORMAT)
    ));
    out.push_str(&format!("Total extensions: {}\n\n", inventory.len()));

    out.push_str(&rule());
    out.push('\n');
    out.push_str(&table_line(
        "No.",
        "ID",
        "Name",
        "Publisher",
        "Version",
        "Status",
    ));
    out.push_str(&rule());
    out.push('\n');

    for (idx, ext) in inventory.records().iter().enumerate() {
        let status = if ext.enabled {
            &labels.enabled
        } else {
            &labels.disabled
        };
        out.push_str(&table_line(
            &(idx + 1).to_string(),
            &truncate_cell(&ext.id, ID_LIMIT, ID_KEEP),
            &truncate_cell(&ext.name, NAME_LIMIT, NAME_KEEP),
            &ext.publisher,
            &ext.version,
            status,
        ));
    }

    let categories = inventory.categories();

    out.push_str("\n\n");
    out.push_str(&rule());
    out.push_str("\nCategory Breakdown\n");
    out.push_str(&rule());
    out.push_str("\n\n");

    for category in Category::ALL {
        out.push_str(&format!(
            "{}: {}\n",
            category.label(),
            categories.count(category)
        ));
    }
    out.push_str(&format!("Other: {}\n", categories.residual()));

    out
}
