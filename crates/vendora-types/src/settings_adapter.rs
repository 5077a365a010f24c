//! Settings adapter trait and the category records it trades in.
//!
//! A settings store holds one row per (vendor, category). Rows are created
//! together by the seeding batch, mutated in place, and only removed by the
//! bulk per-vendor delete. The `settings_data` payload is an opaque JSON
//! document; its schema varies per category and is not validated here.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::error::VndResult;
use crate::types::{Timestamp, VendorId};

/// One stored configuration category of a vendor.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CategoryRecord {
	pub id: i64,
	pub vendor_id: VendorId,
	pub category_key: Box<str>,
	pub category_name: Box<str>,
	pub description: Box<str>,
	pub icon: Box<str>,
	pub is_enabled: bool,
	pub settings_data: serde_json::Value,
	pub display_order: i64,
	pub created_at: Timestamp,
	pub updated_at: Timestamp,
}

/// Full-replacement payload for one category in a batch update.
#[derive(Clone, Debug, Deserialize)]
pub struct CategoryUpdate {
	pub category_key: Box<str>,
	pub settings_data: serde_json::Value,
}

/// Template entry used when seeding a vendor's default category set.
#[derive(Clone, Debug)]
pub struct CategorySeed {
	pub category_name: Box<str>,
	pub category_key: Box<str>,
	pub description: Box<str>,
	pub icon: Box<str>,
	pub display_order: i64,
	pub settings_data: serde_json::Value,
}

#[async_trait]
pub trait SettingsAdapter: Debug + Send + Sync {
	/// All category rows of a vendor, ordered by `display_order`.
	/// An unseeded vendor yields an empty list, not an error.
	async fn list_categories(&self, vendor_id: &VendorId) -> VndResult<Vec<CategoryRecord>>;

	async fn read_category(
		&self,
		vendor_id: &VendorId,
		category_key: &str,
	) -> VndResult<CategoryRecord>;

	/// Replaces `settings_data` for exactly the named category. No merge:
	/// the stored payload is fully replaced by the supplied one.
	async fn update_category(
		&self,
		vendor_id: &VendorId,
		category_key: &str,
		settings_data: &serde_json::Value,
	) -> VndResult<CategoryRecord>;

	/// Applies each update as a full replacement inside one transaction.
	/// Updates naming a category with no matching row are silently
	/// skipped; a storage failure rolls the whole batch back. Returns the
	/// updated rows in the order the updates were supplied.
	async fn update_categories(
		&self,
		vendor_id: &VendorId,
		updates: &[CategoryUpdate],
	) -> VndResult<Vec<CategoryRecord>>;

	async fn toggle_category(
		&self,
		vendor_id: &VendorId,
		category_key: &str,
		is_enabled: bool,
	) -> VndResult<CategoryRecord>;

	/// Inserts the whole seed batch in one transaction; either every
	/// category is created or none are.
	async fn create_categories(
		&self,
		vendor_id: &VendorId,
		seeds: &[CategorySeed],
	) -> VndResult<Vec<CategoryRecord>>;

	/// True iff at least one category row exists for the vendor.
	async fn categories_exist(&self, vendor_id: &VendorId) -> VndResult<bool>;

	/// Removes every category row for the vendor, returning the removed
	/// rows. Used for vendor offboarding.
	async fn delete_categories(&self, vendor_id: &VendorId) -> VndResult<Vec<CategoryRecord>>;
}

// vim: ts=4
