//! Database schema initialization
//!
//! Creates the vendor settings table and its indexes on startup.

use sqlx::SqlitePool;

/// Initialize the database schema
pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	// Vendor settings
	//*****************
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS vendor_settings (
		id integer PRIMARY KEY AUTOINCREMENT,
		vendor_id text NOT NULL,
		category_key text NOT NULL,
		category_name text NOT NULL,
		description text NOT NULL,
		icon text NOT NULL,
		is_enabled boolean NOT NULL DEFAULT true,
		settings_data json,
		display_order integer NOT NULL,
		created_at datetime NOT NULL DEFAULT (unixepoch()),
		updated_at datetime NOT NULL DEFAULT (unixepoch())
	)",
	)
	.execute(&mut *tx)
	.await?;

	// One row per (vendor, category); a double seed loses the race and
	// rolls back instead of duplicating rows.
	sqlx::query(
		"CREATE UNIQUE INDEX IF NOT EXISTS idx_vendor_settings_vendor_key
			ON vendor_settings(vendor_id, category_key)",
	)
	.execute(&mut *tx)
	.await?;

	tx.commit().await?;

	Ok(())
}

// vim: ts=4
