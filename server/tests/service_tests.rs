//! Settings service tests against the SQLite adapter
//!
//! Covers lazy seeding, seeding idempotence, and partial-update routing.

use std::sync::Arc;

use serde_json::{Map, Value, json};
use tempfile::TempDir;

use vendora::settings::seed::{DEFAULT_CATEGORY_COUNT, SeedOverrides};
use vendora::settings::service::SettingsService;
use vendora_settings_adapter_sqlite::SettingsAdapterSqlite;
use vendora_types::types::VendorId;

async fn create_test_service() -> (SettingsService, TempDir) {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");

	let adapter = Arc::new(
		SettingsAdapterSqlite::new(temp_dir.path().join("settings.db"))
			.await
			.expect("Failed to create adapter"),
	);

	(SettingsService::new(adapter), temp_dir)
}

fn fields(value: Value) -> Map<String, Value> {
	match value {
		Value::Object(map) => map,
		_ => Map::new(),
	}
}

#[tokio::test]
async fn test_get_settings_seeds_lazily() {
	let (service, _temp) = create_test_service().await;
	let vendor = VendorId::new("VENDOR001");

	assert!(!service.exists(&vendor).await.expect("Should check"));

	let view = service.get_settings(&vendor).await.expect("Should get settings");
	assert_eq!(view.total_categories, DEFAULT_CATEGORY_COUNT);
	assert_eq!(view.settings_array.len(), DEFAULT_CATEGORY_COUNT);
	assert_eq!(view.categories.len(), DEFAULT_CATEGORY_COUNT);
	assert!(view.categories.contains_key("basic_settings"));
	assert!(view.categories.contains_key("payment_restrictions"));

	// Raw list comes back ordered 1..16
	for (i, row) in view.settings_array.iter().enumerate() {
		assert_eq!(row.display_order, i as i64 + 1);
		assert!(row.is_enabled);
	}

	assert!(service.exists(&vendor).await.expect("Should check"));
}

#[tokio::test]
async fn test_repeated_get_does_not_reseed() {
	let (service, _temp) = create_test_service().await;
	let vendor = VendorId::new("VENDOR001");

	let first = service.get_settings(&vendor).await.expect("Should get settings");
	let second = service.get_settings(&vendor).await.expect("Should get settings");

	assert_eq!(second.total_categories, DEFAULT_CATEGORY_COUNT);
	let first_ids: Vec<_> = first.settings_array.iter().map(|r| r.id).collect();
	let second_ids: Vec<_> = second.settings_array.iter().map(|r| r.id).collect();
	assert_eq!(first_ids, second_ids, "rows must not be recreated");
}

#[tokio::test]
async fn test_seed_is_idempotent() {
	let (service, _temp) = create_test_service().await;
	let vendor = VendorId::new("VENDOR001");

	let seeded = service
		.seed(&vendor, &SeedOverrides { store_name: Some("Acme".into()), store_email: None })
		.await
		.expect("Should seed");
	assert_eq!(seeded.len(), DEFAULT_CATEGORY_COUNT);
	assert_eq!(seeded[0].settings_data["store_name"], "Acme");

	// A second seed leaves row count and content unchanged, even with
	// different overrides
	let reseeded = service
		.seed(&vendor, &SeedOverrides { store_name: Some("Other".into()), store_email: None })
		.await
		.expect("Should be a no-op");
	assert_eq!(reseeded.len(), DEFAULT_CATEGORY_COUNT);
	assert_eq!(reseeded[0].settings_data["store_name"], "Acme");
}

#[tokio::test]
async fn test_update_settings_merges_into_payload() {
	let (service, _temp) = create_test_service().await;
	let vendor = VendorId::new("VENDOR001");
	service.get_settings(&vendor).await.expect("Should seed");

	let updated = service
		.update_settings(
			&vendor,
			&fields(json!({
				"store_name": "  Acme Outfitters  ",
				"default_currency": "usd"
			})),
		)
		.await
		.expect("Should update");

	assert_eq!(updated.len(), 2);
	assert_eq!(&*updated[0].category_key, "basic_settings");
	assert_eq!(&*updated[1].category_key, "currencies");

	let basic = service.get_category(&vendor, "basic_settings").await.expect("Should read");
	assert_eq!(basic.settings_data["store_name"], "Acme Outfitters");
	// Merge keeps the seeded fields that were not updated
	assert_eq!(basic.settings_data["store_phone"], "");

	let currencies = service.get_category(&vendor, "currencies").await.expect("Should read");
	assert_eq!(currencies.settings_data["default_currency"], "USD");
	assert_eq!(currencies.settings_data["supported_currencies"], json!(["USD", "EUR", "GBP"]));
}

#[tokio::test]
async fn test_update_settings_unseeded_vendor_is_empty() {
	let (service, _temp) = create_test_service().await;
	let vendor = VendorId::new("NEVER_SEEN");

	let updated = service
		.update_settings(&vendor, &fields(json!({ "store_name": "Acme" })))
		.await
		.expect("Should not error");
	assert!(updated.is_empty());
	assert!(!service.exists(&vendor).await.expect("Should check"));
}

#[tokio::test]
async fn test_section_update_ignores_foreign_fields() {
	let (service, _temp) = create_test_service().await;
	let vendor = VendorId::new("VENDOR001");
	service.get_settings(&vendor).await.expect("Should seed");

	let updated = service
		.update_payment_settings(
			&vendor,
			&fields(json!({
				"cash_on_delivery": true,
				"store_name": "Should Not Apply"
			})),
		)
		.await
		.expect("Should update");

	assert_eq!(updated.len(), 1);
	assert_eq!(&*updated[0].category_key, "payment_methods");
	assert_eq!(updated[0].settings_data["cash_on_delivery"], true);

	let basic = service.get_category(&vendor, "basic_settings").await.expect("Should read");
	assert_eq!(basic.settings_data["store_name"], "My Store");
}

#[tokio::test]
async fn test_maintenance_flag_routes_to_enabled_key() {
	let (service, _temp) = create_test_service().await;
	let vendor = VendorId::new("VENDOR001");
	service.get_settings(&vendor).await.expect("Should seed");

	service
		.update_settings(&vendor, &fields(json!({ "maintenance_mode": true })))
		.await
		.expect("Should update");

	let maintenance =
		service.get_category(&vendor, "maintenance_mode").await.expect("Should read");
	assert_eq!(maintenance.settings_data["maintenance_enabled"], true);
	assert_eq!(maintenance.settings_data["maintenance_message"], "");
}

#[tokio::test]
async fn test_toggle_and_delete_all() {
	let (service, _temp) = create_test_service().await;
	let vendor = VendorId::new("VENDOR001");
	service.get_settings(&vendor).await.expect("Should seed");

	let toggled = service
		.toggle_category(&vendor, "wallet", false)
		.await
		.expect("Should toggle");
	assert!(!toggled.is_enabled);
	assert_eq!(toggled.settings_data["wallet_enabled"], true);

	let removed = service.delete_all(&vendor).await.expect("Should delete");
	assert_eq!(removed.len(), DEFAULT_CATEGORY_COUNT);
	assert!(!service.exists(&vendor).await.expect("Should check"));
}

// vim: ts=4
