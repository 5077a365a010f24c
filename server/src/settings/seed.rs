//! Default catalog seeder
//!
//! Produces the canonical 16-category starter set for a new vendor. The
//! template is fixed: names, keys, icons and default payloads never vary,
//! `display_order` runs 1..16 in template order, and every category starts
//! enabled. Only `store_name` and `store_email` in `basic_settings` accept
//! caller-supplied overrides.

use serde_json::json;

use vendora_types::settings_adapter::CategorySeed;

/// Number of categories in the default catalog.
pub const DEFAULT_CATEGORY_COUNT: usize = 16;

/// Caller-supplied values for the `basic_settings` category.
#[derive(Clone, Debug, Default)]
pub struct SeedOverrides {
	pub store_name: Option<Box<str>>,
	pub store_email: Option<Box<str>>,
}

/// The fixed, ordered default category template.
pub fn default_categories(overrides: &SeedOverrides) -> Vec<CategorySeed> {
	vec![
		CategorySeed {
			category_name: "Basic Settings".into(),
			category_key: "basic_settings".into(),
			description: "Store name, description, contact information and basic store configuration".into(),
			icon: "settings".into(),
			display_order: 1,
			settings_data: json!({
				"store_name": overrides.store_name.as_deref().unwrap_or("My Store"),
				"store_email": overrides.store_email.as_deref().unwrap_or(""),
				"store_phone": "",
				"store_address": "",
				"store_description": ""
			}),
		},
		CategorySeed {
			category_name: "Shipping & Delivery Options".into(),
			category_key: "shipping_delivery".into(),
			description: "Configure shipping methods, rates, and delivery options".into(),
			icon: "truck".into(),
			display_order: 2,
			settings_data: json!({
				"free_shipping_threshold": 0,
				"shipping_methods": [],
				"delivery_zones": [],
				"packaging_options": []
			}),
		},
		CategorySeed {
			category_name: "Payment Methods".into(),
			category_key: "payment_methods".into(),
			description: "Set up accepted payment methods and gateway configurations".into(),
			icon: "credit-card".into(),
			display_order: 3,
			settings_data: json!({
				"accepted_methods": ["credit_card", "debit_card"],
				"payment_gateways": {},
				"payment_terms": ""
			}),
		},
		CategorySeed {
			category_name: "Wallet".into(),
			category_key: "wallet".into(),
			description: "Configure wallet settings and transaction limits".into(),
			icon: "wallet".into(),
			display_order: 4,
			settings_data: json!({
				"wallet_enabled": true,
				"minimum_balance": 0,
				"withdrawal_limit": 10000,
				"auto_reload": false
			}),
		},
		CategorySeed {
			category_name: "Rating Settings".into(),
			category_key: "rating_settings".into(),
			description: "Manage product and store rating configurations".into(),
			icon: "star".into(),
			display_order: 5,
			settings_data: json!({
				"min_rating_threshold": 1,
				"rating_display": true,
				"review_moderation": false,
				"rating_notifications": true
			}),
		},
		CategorySeed {
			category_name: "Currencies".into(),
			category_key: "currencies".into(),
			description: "Set default currency and supported currency options".into(),
			icon: "dollar-sign".into(),
			display_order: 6,
			settings_data: json!({
				"default_currency": "USD",
				"supported_currencies": ["USD", "EUR", "GBP"],
				"auto_conversion": false
			}),
		},
		CategorySeed {
			category_name: "Languages".into(),
			category_key: "languages".into(),
			description: "Configure store language settings and translations".into(),
			icon: "globe".into(),
			display_order: 7,
			settings_data: json!({
				"default_language": "en",
				"supported_languages": ["en", "es", "fr"],
				"auto_detect": false
			}),
		},
		CategorySeed {
			category_name: "Store Options".into(),
			category_key: "store_options".into(),
			description: "General store configuration and display options".into(),
			icon: "sliders".into(),
			display_order: 8,
			settings_data: json!({
				"store_visibility": "public",
				"catalog_mode": false,
				"inventory_tracking": true,
				"stock_notifications": true
			}),
		},
		CategorySeed {
			category_name: "Shipping Company Restrictions".into(),
			category_key: "shipping_restrictions".into(),
			description: "Manage allowed and restricted shipping companies".into(),
			icon: "shield".into(),
			display_order: 9,
			settings_data: json!({
				"allowed_companies": [],
				"restricted_companies": [],
				"restrictions_enabled": false
			}),
		},
		CategorySeed {
			category_name: "Maintenance Mode".into(),
			category_key: "maintenance_mode".into(),
			description: "Configure store maintenance mode and schedules".into(),
			icon: "clock".into(),
			display_order: 10,
			settings_data: json!({
				"maintenance_enabled": false,
				"maintenance_message": "",
				"scheduled_maintenance": null
			}),
		},
		CategorySeed {
			category_name: "Domain Settings".into(),
			category_key: "domain_settings".into(),
			description: "Custom domain configuration and SSL settings".into(),
			icon: "globe".into(),
			display_order: 11,
			settings_data: json!({
				"custom_domain": "",
				"domain_verified": false,
				"ssl_enabled": true,
				"redirect_settings": {}
			}),
		},
		CategorySeed {
			category_name: "Order Options".into(),
			category_key: "order_options".into(),
			description: "Configure order processing and management options".into(),
			icon: "shopping-cart".into(),
			display_order: 12,
			settings_data: json!({
				"order_prefix": "ORD",
				"numbering_format": "sequential",
				"auto_confirmation": true,
				"cancellation_window": 24
			}),
		},
		CategorySeed {
			category_name: "Custom Fields".into(),
			category_key: "custom_fields".into(),
			description: "Create and manage custom fields for products and orders".into(),
			icon: "edit".into(),
			display_order: 13,
			settings_data: json!({
				"product_fields": [],
				"order_fields": [],
				"customer_fields": []
			}),
		},
		CategorySeed {
			category_name: "Store Invoice Settings".into(),
			category_key: "invoice_settings".into(),
			description: "Configure invoice templates and numbering".into(),
			icon: "receipt".into(),
			display_order: 14,
			settings_data: json!({
				"template": "default",
				"numbering_format": "sequential",
				"invoice_prefix": "INV",
				"tax_calculation": true
			}),
		},
		CategorySeed {
			category_name: "Notifications".into(),
			category_key: "notifications".into(),
			description: "Manage notification preferences and settings".into(),
			icon: "bell".into(),
			display_order: 15,
			settings_data: json!({
				"email_notifications": true,
				"sms_notifications": false,
				"push_notifications": true,
				"notification_types": {}
			}),
		},
		CategorySeed {
			category_name: "Payment Restrictions".into(),
			category_key: "payment_restrictions".into(),
			description: "Set payment method restrictions and limits".into(),
			icon: "ban".into(),
			display_order: 16,
			settings_data: json!({
				"restricted_methods": [],
				"country_restrictions": [],
				"amount_limits": { "min": 0, "max": 999999 }
			}),
		},
	]
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashSet;

	#[test]
	fn test_template_is_complete_and_ordered() {
		let seeds = default_categories(&SeedOverrides::default());
		assert_eq!(seeds.len(), DEFAULT_CATEGORY_COUNT);

		let keys: HashSet<_> = seeds.iter().map(|s| s.category_key.clone()).collect();
		assert_eq!(keys.len(), DEFAULT_CATEGORY_COUNT, "category keys must be distinct");

		for (i, seed) in seeds.iter().enumerate() {
			assert_eq!(seed.display_order, i as i64 + 1);
			assert!(seed.settings_data.is_object() , "{} payload must be an object", seed.category_key);
		}
	}

	#[test]
	fn test_basic_settings_defaults() {
		let seeds = default_categories(&SeedOverrides::default());
		let basic = &seeds[0];
		assert_eq!(&*basic.category_key, "basic_settings");
		assert_eq!(basic.settings_data["store_name"], "My Store");
		assert_eq!(basic.settings_data["store_email"], "");
	}

	#[test]
	fn test_basic_settings_overrides() {
		let overrides = SeedOverrides {
			store_name: Some("Acme Outfitters".into()),
			store_email: Some("shop@acme.test".into()),
		};
		let seeds = default_categories(&overrides);
		assert_eq!(seeds[0].settings_data["store_name"], "Acme Outfitters");
		assert_eq!(seeds[0].settings_data["store_email"], "shop@acme.test");
		// overrides never touch other categories
		assert_eq!(seeds[5].settings_data["default_currency"], "USD");
	}
}

// vim: ts=4
