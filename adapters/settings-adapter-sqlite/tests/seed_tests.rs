//! Seeding batch tests
//!
//! The seed batch is all-or-nothing: an interrupted batch must leave zero
//! rows, and a duplicate category rolls the whole batch back.

use serde_json::json;
use tempfile::TempDir;

use vendora::error::Error;
use vendora::settings_adapter::{CategorySeed, SettingsAdapter};
use vendora::types::VendorId;
use vendora_settings_adapter_sqlite::SettingsAdapterSqlite;

async fn create_test_adapter() -> (SettingsAdapterSqlite, TempDir) {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");

	let adapter = SettingsAdapterSqlite::new(temp_dir.path().join("settings.db"))
		.await
		.expect("Failed to create adapter");

	(adapter, temp_dir)
}

fn seed(key: &str, order: i64) -> CategorySeed {
	CategorySeed {
		category_name: key.replace('_', " ").into(),
		category_key: key.into(),
		description: format!("{} configuration", key).into(),
		icon: "settings".into(),
		display_order: order,
		settings_data: json!({ "order": order }),
	}
}

#[tokio::test]
async fn test_seed_batch_is_complete() {
	let (adapter, _temp) = create_test_adapter().await;
	let vendor = VendorId::new("VENDOR001");

	let seeds: Vec<_> = (1..=16).map(|i| seed(&format!("category_{:02}", i), i)).collect();
	let created = adapter.create_categories(&vendor, &seeds).await.expect("Should seed");
	assert_eq!(created.len(), 16);

	let rows = adapter.list_categories(&vendor).await.expect("Should list");
	assert_eq!(rows.len(), 16);
	for (i, row) in rows.iter().enumerate() {
		assert_eq!(row.display_order, i as i64 + 1);
		assert!(row.is_enabled);
	}
}

#[tokio::test]
async fn test_interrupted_seed_leaves_zero_rows() {
	let (adapter, _temp) = create_test_adapter().await;
	let vendor = VendorId::new("VENDOR001");

	// Duplicate key in the middle of the batch makes the fourth insert fail
	let seeds =
		vec![seed("alpha", 1), seed("beta", 2), seed("gamma", 3), seed("beta", 4), seed("delta", 5)];

	let result = adapter.create_categories(&vendor, &seeds).await;
	assert!(matches!(result, Err(Error::Conflict(_))), "duplicate key should conflict");

	// All-or-nothing: the rows inserted before the failure are rolled back
	assert!(!adapter.categories_exist(&vendor).await.expect("Should check"));
	assert!(adapter.list_categories(&vendor).await.expect("Should list").is_empty());
}

#[tokio::test]
async fn test_double_seed_rolls_back() {
	let (adapter, _temp) = create_test_adapter().await;
	let vendor = VendorId::new("VENDOR001");

	let seeds = vec![seed("alpha", 1), seed("beta", 2)];
	adapter.create_categories(&vendor, &seeds).await.expect("Should seed");

	let before = adapter.list_categories(&vendor).await.expect("Should list");

	let result = adapter.create_categories(&vendor, &seeds).await;
	assert!(matches!(result, Err(Error::Conflict(_))));

	// Row count and content unchanged
	let after = adapter.list_categories(&vendor).await.expect("Should list");
	assert_eq!(before.len(), after.len());
	for (b, a) in before.iter().zip(after.iter()) {
		assert_eq!(b.id, a.id);
		assert_eq!(b.settings_data, a.settings_data);
	}
}

#[tokio::test]
async fn test_list_orders_by_display_order() {
	let (adapter, _temp) = create_test_adapter().await;
	let vendor = VendorId::new("VENDOR001");

	// Insertion order deliberately differs from display order
	let seeds = vec![seed("third", 3), seed("first", 1), seed("second", 2)];
	adapter.create_categories(&vendor, &seeds).await.expect("Should seed");

	let rows = adapter.list_categories(&vendor).await.expect("Should list");
	let keys: Vec<_> = rows.iter().map(|r| &*r.category_key).collect();
	assert_eq!(keys, ["first", "second", "third"]);
}

// vim: ts=4
