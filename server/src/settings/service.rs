//! Settings service: view building, lazy seeding, and partial-update
//! routing on top of the injected settings adapter.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::prelude::*;
use crate::settings::sanitize;
use crate::settings::seed::{SeedOverrides, default_categories};
use crate::settings::types::SettingsView;
use vendora_types::settings_adapter::{CategoryRecord, CategoryUpdate, SettingsAdapter};

pub struct SettingsService {
	adapter: Arc<dyn SettingsAdapter>,
}

impl SettingsService {
	pub fn new(adapter: Arc<dyn SettingsAdapter>) -> Self {
		Self { adapter }
	}

	/// Structured settings view for a vendor. The first request for a
	/// vendor with no rows seeds the default catalog, so a vendor is never
	/// observable in a partially-seeded state.
	pub async fn get_settings(&self, vendor_id: &VendorId) -> VndResult<SettingsView> {
		let mut rows = self.adapter.list_categories(vendor_id).await?;
		if rows.is_empty() {
			info!("Seeding default settings for vendor {}", vendor_id);
			rows = self.seed(vendor_id, &SeedOverrides::default()).await?;
		}
		Ok(SettingsView::build(vendor_id.clone(), rows))
	}

	pub async fn get_category(
		&self,
		vendor_id: &VendorId,
		category_key: &str,
	) -> VndResult<CategoryRecord> {
		self.adapter.read_category(vendor_id, category_key).await
	}

	/// Creates the full default catalog for a vendor. A no-op when rows
	/// already exist: the existing rows are returned unchanged.
	pub async fn seed(
		&self,
		vendor_id: &VendorId,
		overrides: &SeedOverrides,
	) -> VndResult<Vec<CategoryRecord>> {
		if self.adapter.categories_exist(vendor_id).await? {
			return self.adapter.list_categories(vendor_id).await;
		}
		match self.adapter.create_categories(vendor_id, &default_categories(overrides)).await {
			Ok(rows) => Ok(rows),
			// Lost a concurrent seeding race; the winner's rows are the result
			Err(Error::Conflict(_)) => self.adapter.list_categories(vendor_id).await,
			Err(err) => Err(err),
		}
	}

	/// Applies a flat partial settings object across any recognized field.
	/// Returns the updated rows; empty when nothing matched a seeded
	/// category.
	pub async fn update_settings(
		&self,
		vendor_id: &VendorId,
		fields: &Map<String, Value>,
	) -> VndResult<Vec<CategoryRecord>> {
		self.apply_fields(vendor_id, fields, None).await
	}

	pub async fn update_basic_settings(
		&self,
		vendor_id: &VendorId,
		fields: &Map<String, Value>,
	) -> VndResult<Vec<CategoryRecord>> {
		self.apply_fields(vendor_id, fields, Some(sanitize::BASIC_FIELDS)).await
	}

	pub async fn update_shipping_settings(
		&self,
		vendor_id: &VendorId,
		fields: &Map<String, Value>,
	) -> VndResult<Vec<CategoryRecord>> {
		self.apply_fields(vendor_id, fields, Some(sanitize::SHIPPING_FIELDS)).await
	}

	pub async fn update_payment_settings(
		&self,
		vendor_id: &VendorId,
		fields: &Map<String, Value>,
	) -> VndResult<Vec<CategoryRecord>> {
		self.apply_fields(vendor_id, fields, Some(sanitize::PAYMENT_FIELDS)).await
	}

	/// Full replacement of one category's payload.
	pub async fn update_category(
		&self,
		vendor_id: &VendorId,
		category_key: &str,
		settings_data: &Value,
	) -> VndResult<CategoryRecord> {
		self.adapter.update_category(vendor_id, category_key, settings_data).await
	}

	pub async fn toggle_category(
		&self,
		vendor_id: &VendorId,
		category_key: &str,
		is_enabled: bool,
	) -> VndResult<CategoryRecord> {
		self.adapter.toggle_category(vendor_id, category_key, is_enabled).await
	}

	pub async fn exists(&self, vendor_id: &VendorId) -> VndResult<bool> {
		self.adapter.categories_exist(vendor_id).await
	}

	/// Vendor offboarding: drops and returns every category row.
	pub async fn delete_all(&self, vendor_id: &VendorId) -> VndResult<Vec<CategoryRecord>> {
		self.adapter.delete_categories(vendor_id).await
	}

	/// Sanitizes and routes the fields per category, merges each patch
	/// into the category's current payload, and applies the batch as
	/// full replacements in one transaction. Categories without a seeded
	/// row are silently skipped, like a batch update that matches no row.
	async fn apply_fields(
		&self,
		vendor_id: &VendorId,
		fields: &Map<String, Value>,
		allow: Option<&[&str]>,
	) -> VndResult<Vec<CategoryRecord>> {
		let routed = sanitize::route_fields(fields, allow)?;
		if routed.is_empty() {
			return Ok(Vec::new());
		}

		let current = self.adapter.list_categories(vendor_id).await?;

		let mut updates = Vec::new();
		for (category_key, patch) in routed {
			let Some(row) = current.iter().find(|c| &*c.category_key == category_key) else {
				debug!("No '{}' category for vendor {}, skipping", category_key, vendor_id);
				continue;
			};
			let mut payload = match &row.settings_data {
				Value::Object(map) => map.clone(),
				_ => Map::new(),
			};
			for (key, value) in patch {
				payload.insert(key, value);
			}
			updates.push(CategoryUpdate {
				category_key: category_key.into(),
				settings_data: Value::Object(payload),
			});
		}

		if updates.is_empty() {
			return Ok(Vec::new());
		}
		self.adapter.update_categories(vendor_id, &updates).await
	}
}

// vim: ts=4
