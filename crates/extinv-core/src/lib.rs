//! Editor extension inventory reporter
//!
//! Reads the editor's `extensions.json`, normalizes its entries into sorted
//! records, classifies them by keyword, and renders a listing and a cleanup
//! analysis as plain text.

pub mod classify;
pub mod config;
pub mod error;
pub mod inventory;
pub mod io;
pub mod loader;
pub mod logging;
pub mod record;
pub mod report;

pub use classify::{Category, CategoryBreakdown, DuplicateGroup, find_duplicates};
pub use config::{InventoryConfig, PathsConfig, ReportLabels, ResolvedPaths, Thresholds};
pub use error::{Error, Result};
pub use inventory::Inventory;
pub use loader::{LoadedInventory, load_inventory};
pub use record::{ExtensionRecord, NOT_AVAILABLE};
pub use report::{Analysis, render_analysis, render_listing};
