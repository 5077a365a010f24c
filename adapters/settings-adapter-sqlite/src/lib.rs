//! SQLite-backed implementation of the Vendora settings adapter.
//!
//! One table holds the per-vendor category rows; `settings_data` is stored
//! as a JSON text column. Seeding and batch updates run inside a single
//! transaction on one pooled connection; the transaction guard rolls back
//! on every early exit path.

use std::path::Path;

use async_trait::async_trait;
use sqlx::sqlite::{self, SqlitePool};

use vendora::prelude::*;
use vendora::settings_adapter::{
	CategoryRecord, CategorySeed, CategoryUpdate, SettingsAdapter,
};

mod category;
mod schema;

pub(crate) fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

pub(crate) fn collect_res<T>(
	iter: impl Iterator<Item = Result<T, sqlx::Error>>,
) -> VndResult<Vec<T>> {
	let mut items = Vec::new();
	for item in iter {
		items.push(item.inspect_err(inspect).map_err(|_| Error::DbError)?);
	}
	Ok(items)
}

#[derive(Debug)]
pub struct SettingsAdapterSqlite {
	db: SqlitePool,
}

impl SettingsAdapterSqlite {
	pub async fn new(path: impl AsRef<Path>) -> VndResult<Self> {
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(inspect)
			.map_err(|_| Error::DbError)?;

		schema::init_db(&db).await.inspect_err(inspect).map_err(|_| Error::DbError)?;

		Ok(Self { db })
	}
}

#[async_trait]
impl SettingsAdapter for SettingsAdapterSqlite {
	async fn list_categories(&self, vendor_id: &VendorId) -> VndResult<Vec<CategoryRecord>> {
		category::list(&self.db, vendor_id).await
	}

	async fn read_category(
		&self,
		vendor_id: &VendorId,
		category_key: &str,
	) -> VndResult<CategoryRecord> {
		category::read(&self.db, vendor_id, category_key).await
	}

	async fn update_category(
		&self,
		vendor_id: &VendorId,
		category_key: &str,
		settings_data: &serde_json::Value,
	) -> VndResult<CategoryRecord> {
		category::update(&self.db, vendor_id, category_key, settings_data).await
	}

	async fn update_categories(
		&self,
		vendor_id: &VendorId,
		updates: &[CategoryUpdate],
	) -> VndResult<Vec<CategoryRecord>> {
		category::update_many(&self.db, vendor_id, updates).await
	}

	async fn toggle_category(
		&self,
		vendor_id: &VendorId,
		category_key: &str,
		is_enabled: bool,
	) -> VndResult<CategoryRecord> {
		category::toggle(&self.db, vendor_id, category_key, is_enabled).await
	}

	async fn create_categories(
		&self,
		vendor_id: &VendorId,
		seeds: &[CategorySeed],
	) -> VndResult<Vec<CategoryRecord>> {
		category::create_all(&self.db, vendor_id, seeds).await
	}

	async fn categories_exist(&self, vendor_id: &VendorId) -> VndResult<bool> {
		category::exists(&self.db, vendor_id).await
	}

	async fn delete_categories(&self, vendor_id: &VendorId) -> VndResult<Vec<CategoryRecord>> {
		category::delete_all(&self.db, vendor_id).await
	}
}

// vim: ts=4
