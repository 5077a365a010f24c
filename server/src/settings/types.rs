//! Structured settings view returned by the read API

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use vendora_types::settings_adapter::CategoryRecord;
use vendora_types::types::VendorId;

/// All categories of a vendor: keyed access by `category_key` plus the raw
/// list ordered by `display_order` (the map is keyed access only; display
/// ordering is carried by `settings_array`).
#[derive(Debug, Deserialize, Serialize)]
pub struct SettingsView {
	pub vendor_id: VendorId,
	pub categories: BTreeMap<String, CategoryRecord>,
	pub total_categories: usize,
	pub settings_array: Vec<CategoryRecord>,
}

impl SettingsView {
	pub fn build(vendor_id: VendorId, rows: Vec<CategoryRecord>) -> Self {
		let categories =
			rows.iter().map(|row| (row.category_key.to_string(), row.clone())).collect();
		SettingsView { vendor_id, categories, total_categories: rows.len(), settings_array: rows }
	}
}

// vim: ts=4
