//! Vendor settings category storage
//!
//! Free functions per operation, all issuing parameterized statements.
//! Single-row operations rely on statement atomicity; `update_many` and
//! `create_all` hold one transaction each.

use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use vendora::prelude::*;
use vendora::settings_adapter::{CategoryRecord, CategorySeed, CategoryUpdate};

use crate::{collect_res, inspect};

fn category_from_row(row: &SqliteRow) -> Result<CategoryRecord, sqlx::Error> {
	let settings_data: Option<String> = row.try_get("settings_data")?;
	Ok(CategoryRecord {
		id: row.try_get("id")?,
		vendor_id: VendorId(row.try_get("vendor_id")?),
		category_key: row.try_get("category_key")?,
		category_name: row.try_get("category_name")?,
		description: row.try_get("description")?,
		icon: row.try_get("icon")?,
		is_enabled: row.try_get("is_enabled")?,
		settings_data: settings_data
			.and_then(|v| serde_json::from_str(&v).ok())
			.unwrap_or(serde_json::Value::Null),
		display_order: row.try_get("display_order")?,
		created_at: Timestamp(row.try_get("created_at")?),
		updated_at: Timestamp(row.try_get("updated_at")?),
	})
}

pub(crate) async fn list(db: &SqlitePool, vendor_id: &VendorId) -> VndResult<Vec<CategoryRecord>> {
	let rows = sqlx::query(
		"SELECT id, vendor_id, category_name, category_key, description, icon,
			is_enabled, settings_data, display_order, created_at, updated_at
		FROM vendor_settings WHERE vendor_id = ? ORDER BY display_order",
	)
	.bind(vendor_id.as_str())
	.fetch_all(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	collect_res(rows.iter().map(category_from_row))
}

pub(crate) async fn read(
	db: &SqlitePool,
	vendor_id: &VendorId,
	category_key: &str,
) -> VndResult<CategoryRecord> {
	let row = sqlx::query(
		"SELECT id, vendor_id, category_name, category_key, description, icon,
			is_enabled, settings_data, display_order, created_at, updated_at
		FROM vendor_settings WHERE vendor_id = ? AND category_key = ?",
	)
	.bind(vendor_id.as_str())
	.bind(category_key)
	.fetch_optional(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	match row {
		Some(row) => category_from_row(&row).inspect_err(inspect).map_err(|_| Error::DbError),
		None => Err(Error::NotFound),
	}
}

pub(crate) async fn update(
	db: &SqlitePool,
	vendor_id: &VendorId,
	category_key: &str,
	settings_data: &serde_json::Value,
) -> VndResult<CategoryRecord> {
	let row = sqlx::query(
		"UPDATE vendor_settings
		SET settings_data = ?, updated_at = unixepoch()
		WHERE vendor_id = ? AND category_key = ?
		RETURNING id, vendor_id, category_name, category_key, description, icon,
			is_enabled, settings_data, display_order, created_at, updated_at",
	)
	.bind(settings_data.to_string())
	.bind(vendor_id.as_str())
	.bind(category_key)
	.fetch_optional(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	match row {
		Some(row) => category_from_row(&row).inspect_err(inspect).map_err(|_| Error::DbError),
		None => Err(Error::NotFound),
	}
}

/// Applies every update inside one transaction. An update matching no row
/// is skipped; the remaining updates still commit.
pub(crate) async fn update_many(
	db: &SqlitePool,
	vendor_id: &VendorId,
	updates: &[CategoryUpdate],
) -> VndResult<Vec<CategoryRecord>> {
	let mut tx = db.begin().await.inspect_err(inspect).map_err(|_| Error::DbError)?;

	let mut updated = Vec::new();
	for update in updates {
		let row = sqlx::query(
			"UPDATE vendor_settings
			SET settings_data = ?, updated_at = unixepoch()
			WHERE vendor_id = ? AND category_key = ?
			RETURNING id, vendor_id, category_name, category_key, description, icon,
				is_enabled, settings_data, display_order, created_at, updated_at",
		)
		.bind(update.settings_data.to_string())
		.bind(vendor_id.as_str())
		.bind(&*update.category_key)
		.fetch_optional(&mut *tx)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

		if let Some(row) = row {
			updated
				.push(category_from_row(&row).inspect_err(inspect).map_err(|_| Error::DbError)?);
		}
	}

	tx.commit().await.inspect_err(inspect).map_err(|_| Error::DbError)?;
	Ok(updated)
}

pub(crate) async fn toggle(
	db: &SqlitePool,
	vendor_id: &VendorId,
	category_key: &str,
	is_enabled: bool,
) -> VndResult<CategoryRecord> {
	let row = sqlx::query(
		"UPDATE vendor_settings
		SET is_enabled = ?, updated_at = unixepoch()
		WHERE vendor_id = ? AND category_key = ?
		RETURNING id, vendor_id, category_name, category_key, description, icon,
			is_enabled, settings_data, display_order, created_at, updated_at",
	)
	.bind(is_enabled)
	.bind(vendor_id.as_str())
	.bind(category_key)
	.fetch_optional(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	match row {
		Some(row) => category_from_row(&row).inspect_err(inspect).map_err(|_| Error::DbError),
		None => Err(Error::NotFound),
	}
}

/// Inserts the whole seed batch in one transaction. Any failure, including
/// a duplicate `(vendor_id, category_key)`, rolls back every insert.
pub(crate) async fn create_all(
	db: &SqlitePool,
	vendor_id: &VendorId,
	seeds: &[CategorySeed],
) -> VndResult<Vec<CategoryRecord>> {
	let mut tx = db.begin().await.inspect_err(inspect).map_err(|_| Error::DbError)?;

	let mut created = Vec::new();
	for seed in seeds {
		let res = sqlx::query(
			"INSERT INTO vendor_settings (vendor_id, category_name, category_key,
				description, icon, settings_data, display_order, is_enabled)
			VALUES (?, ?, ?, ?, ?, ?, ?, ?)
			RETURNING id, vendor_id, category_name, category_key, description, icon,
				is_enabled, settings_data, display_order, created_at, updated_at",
		)
		.bind(vendor_id.as_str())
		.bind(&*seed.category_name)
		.bind(&*seed.category_key)
		.bind(&*seed.description)
		.bind(&*seed.icon)
		.bind(seed.settings_data.to_string())
		.bind(seed.display_order)
		.bind(true)
		.fetch_one(&mut *tx)
		.await;

		match res {
			Ok(row) => created
				.push(category_from_row(&row).inspect_err(inspect).map_err(|_| Error::DbError)?),
			Err(err) => {
				if err.as_database_error().is_some_and(|e| e.is_unique_violation()) {
					return Err(Error::Conflict(format!(
						"category '{}' already exists for vendor {}",
						seed.category_key, vendor_id
					)));
				}
				inspect(&err);
				return Err(Error::DbError);
			}
		}
	}

	tx.commit().await.inspect_err(inspect).map_err(|_| Error::DbError)?;
	Ok(created)
}

pub(crate) async fn exists(db: &SqlitePool, vendor_id: &VendorId) -> VndResult<bool> {
	let row = sqlx::query("SELECT id FROM vendor_settings WHERE vendor_id = ? LIMIT 1")
		.bind(vendor_id.as_str())
		.fetch_optional(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(row.is_some())
}

pub(crate) async fn delete_all(
	db: &SqlitePool,
	vendor_id: &VendorId,
) -> VndResult<Vec<CategoryRecord>> {
	let rows = sqlx::query(
		"DELETE FROM vendor_settings WHERE vendor_id = ?
		RETURNING id, vendor_id, category_name, category_key, description, icon,
			is_enabled, settings_data, display_order, created_at, updated_at",
	)
	.bind(vendor_id.as_str())
	.fetch_all(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	collect_res(rows.iter().map(category_from_row))
}

// vim: ts=4
