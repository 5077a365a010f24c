//! Field-level sanitization and validation at the API boundary
//!
//! Incoming updates arrive as a flat partial object. Every recognized
//! field lives in the allow-list below, which maps it to the category
//! payload it belongs to; no caller-supplied string ever reaches the
//! store as anything but a bound parameter value. Unrecognized fields
//! are ignored.
//!
//! Sanitization: strings are trimmed, email/language/domain fields
//! lowercased, currency codes uppercased; null, empty-string and
//! empty-array values are dropped before merge.

use regex::Regex;
use serde_json::{Map, Value};

use crate::prelude::*;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldKind {
	/// Trimmed free-form text
	Text,
	/// Trimmed and lowercased (emails, language codes, domains)
	LowerText,
	/// Trimmed and uppercased (currency codes)
	UpperCode,
	Bool,
	Number,
	Array,
	/// Nested object, passed through untouched
	Object,
	/// Passed through untouched if non-empty
	Raw,
}

pub struct FieldSpec {
	pub name: &'static str,
	/// Key the value is stored under inside the category payload
	pub stored_as: &'static str,
	pub category_key: &'static str,
	pub kind: FieldKind,
}

macro_rules! field {
	($name:literal, $category:literal, $kind:ident) => {
		FieldSpec { name: $name, stored_as: $name, category_key: $category, kind: FieldKind::$kind }
	};
	($name:literal => $stored_as:literal, $category:literal, $kind:ident) => {
		FieldSpec {
			name: $name,
			stored_as: $stored_as,
			category_key: $category,
			kind: FieldKind::$kind,
		}
	};
}

/// Allow-listed update fields and the category each one belongs to.
pub const UPDATE_FIELDS: &[FieldSpec] = &[
	// Basic settings
	field!("store_name", "basic_settings", Text),
	field!("store_description", "basic_settings", Text),
	field!("store_logo_url", "basic_settings", Text),
	field!("store_banner_url", "basic_settings", Text),
	field!("business_type", "basic_settings", Text),
	field!("store_phone", "basic_settings", Text),
	field!("store_email", "basic_settings", LowerText),
	field!("store_address", "basic_settings", Text),
	// Shipping & delivery options
	field!("shipping_enabled", "shipping_delivery", Bool),
	field!("free_shipping_enabled", "shipping_delivery", Bool),
	field!("free_shipping_threshold", "shipping_delivery", Number),
	field!("shipping_zones", "shipping_delivery", Array),
	field!("delivery_methods", "shipping_delivery", Array),
	field!("processing_time", "shipping_delivery", Text),
	// Payment methods
	field!("cash_on_delivery", "payment_methods", Bool),
	field!("online_payments", "payment_methods", Bool),
	field!("payment_gateways", "payment_methods", Object),
	field!("accept_credit_cards", "payment_methods", Bool),
	field!("accept_digital_wallets", "payment_methods", Bool),
	// Currencies & languages
	field!("default_currency", "currencies", UpperCode),
	field!("supported_currencies", "currencies", Array),
	field!("default_language", "languages", LowerText),
	field!("supported_languages", "languages", Array),
	// Store options
	field!("store_status", "store_options", Text),
	field!("auto_approve_orders", "store_options", Bool),
	field!("inventory_tracking", "store_options", Bool),
	field!("low_stock_threshold", "store_options", Number),
	field!("allow_backorders", "store_options", Bool),
	field!("show_stock_quantity", "store_options", Bool),
	field!("timezone", "store_options", Text),
	field!("date_format", "store_options", Text),
	field!("time_format", "store_options", Text),
	// Rating settings
	field!("enable_reviews", "rating_settings", Bool),
	field!("require_purchase_for_review", "rating_settings", Bool),
	field!("auto_approve_reviews", "rating_settings", Bool),
	field!("min_rating_threshold", "rating_settings", Number),
	field!("show_vendor_rating", "rating_settings", Bool),
	// Maintenance mode
	field!("maintenance_mode" => "maintenance_enabled", "maintenance_mode", Bool),
	field!("maintenance_message", "maintenance_mode", Text),
	field!("maintenance_start_time", "maintenance_mode", Raw),
	field!("maintenance_end_time", "maintenance_mode", Raw),
	// Domain settings
	field!("custom_domain", "domain_settings", LowerText),
	field!("subdomain", "domain_settings", LowerText),
	field!("seo_title", "domain_settings", Text),
	field!("seo_description", "domain_settings", Text),
	field!("seo_keywords", "domain_settings", Text),
	field!("social_media_links", "domain_settings", Object),
];

/// Field subsets for the per-section endpoints
pub const BASIC_FIELDS: &[&str] = &[
	"store_name",
	"store_description",
	"store_logo_url",
	"store_banner_url",
	"business_type",
	"store_phone",
	"store_email",
	"store_address",
];

pub const SHIPPING_FIELDS: &[&str] = &[
	"shipping_enabled",
	"free_shipping_enabled",
	"free_shipping_threshold",
	"shipping_zones",
	"delivery_methods",
	"processing_time",
];

pub const PAYMENT_FIELDS: &[&str] = &[
	"cash_on_delivery",
	"online_payments",
	"payment_gateways",
	"accept_credit_cards",
	"accept_digital_wallets",
];

fn invalid_field(name: &str) -> Error {
	Error::ValidationError(format!("Invalid value for field '{}'", name))
}

/// Sanitize one value according to its field kind. `Ok(None)` means the
/// field is dropped (null, empty string, empty array).
fn sanitize_value(spec: &FieldSpec, value: &Value) -> VndResult<Option<Value>> {
	if value.is_null() {
		return Ok(None);
	}
	match spec.kind {
		FieldKind::Text | FieldKind::LowerText | FieldKind::UpperCode => {
			let Some(s) = value.as_str() else {
				return Err(invalid_field(spec.name));
			};
			let trimmed = s.trim();
			if trimmed.is_empty() {
				return Ok(None);
			}
			let normalized = match spec.kind {
				FieldKind::LowerText => trimmed.to_lowercase(),
				FieldKind::UpperCode => trimmed.to_uppercase(),
				_ => trimmed.to_string(),
			};
			Ok(Some(Value::String(normalized)))
		}
		FieldKind::Bool => {
			if value.is_boolean() {
				Ok(Some(value.clone()))
			} else {
				Err(invalid_field(spec.name))
			}
		}
		FieldKind::Number => {
			if value.is_number() {
				Ok(Some(value.clone()))
			} else {
				Err(invalid_field(spec.name))
			}
		}
		FieldKind::Array => match value.as_array() {
			Some(arr) if arr.is_empty() => Ok(None),
			Some(_) => Ok(Some(value.clone())),
			None => Err(invalid_field(spec.name)),
		},
		FieldKind::Object => {
			if value.is_object() {
				Ok(Some(value.clone()))
			} else {
				Err(invalid_field(spec.name))
			}
		}
		FieldKind::Raw => match value {
			Value::String(s) if s.trim().is_empty() => Ok(None),
			Value::Array(arr) if arr.is_empty() => Ok(None),
			_ => Ok(Some(value.clone())),
		},
	}
}

/// Routes a flat partial update through the allow-list, grouping the
/// sanitized values per category. The result preserves the table's
/// category order. `allow` restricts the recognized fields for the
/// per-section endpoints; unrecognized fields are ignored either way.
pub fn route_fields(
	fields: &Map<String, Value>,
	allow: Option<&[&str]>,
) -> VndResult<Vec<(&'static str, Map<String, Value>)>> {
	let mut routed: Vec<(&'static str, Map<String, Value>)> = Vec::new();

	for spec in UPDATE_FIELDS {
		if let Some(allow) = allow {
			if !allow.contains(&spec.name) {
				continue;
			}
		}
		let Some(value) = fields.get(spec.name) else { continue };
		let Some(sanitized) = sanitize_value(spec, value)? else { continue };

		match routed.iter_mut().find(|(key, _)| *key == spec.category_key) {
			Some((_, patch)) => {
				patch.insert(spec.stored_as.to_string(), sanitized);
			}
			None => {
				let mut patch = Map::new();
				patch.insert(spec.stored_as.to_string(), sanitized);
				routed.push((spec.category_key, patch));
			}
		}
	}

	Ok(routed)
}

// Boundary validation. Each check mirrors one rule of the HTTP API and
// fails with its field-specific message.

pub fn check_store_name(fields: &Map<String, Value>) -> VndResult<()> {
	if let Some(value) = fields.get("store_name") {
		let valid = value.as_str().is_some_and(|s| !s.trim().is_empty());
		if !valid {
			return Err(Error::ValidationError("Store name cannot be empty".to_string()));
		}
	}
	Ok(())
}

pub fn check_store_email(fields: &Map<String, Value>) -> VndResult<()> {
	let Some(value) = fields.get("store_email") else { return Ok(()) };
	if value.is_null() {
		return Ok(());
	}
	if let Some(email) = value.as_str() {
		if email.is_empty() {
			return Ok(());
		}
		let email_regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
			.map_err(|_| Error::Internal("invalid email pattern".to_string()))?;
		if email_regex.is_match(email.trim()) {
			return Ok(());
		}
	}
	Err(Error::ValidationError("Invalid email format".to_string()))
}

pub fn check_store_status(fields: &Map<String, Value>) -> VndResult<()> {
	let valid_statuses = ["active", "inactive", "suspended", "pending"];
	if let Some(status) = fields.get("store_status").and_then(Value::as_str) {
		if !status.is_empty() && !valid_statuses.contains(&status) {
			return Err(Error::ValidationError(
				"Invalid store status. Must be one of: active, inactive, suspended, pending"
					.to_string(),
			));
		}
	}
	Ok(())
}

pub fn check_default_currency(fields: &Map<String, Value>) -> VndResult<()> {
	if let Some(currency) = fields.get("default_currency").and_then(Value::as_str) {
		if !currency.is_empty() && currency.chars().count() != 3 {
			return Err(Error::ValidationError(
				"Currency code must be 3 characters (e.g., USD, EUR)".to_string(),
			));
		}
	}
	Ok(())
}

pub fn check_free_shipping_threshold(fields: &Map<String, Value>) -> VndResult<()> {
	if let Some(threshold) = fields.get("free_shipping_threshold").and_then(Value::as_f64) {
		if threshold < 0.0 {
			return Err(Error::ValidationError(
				"Free shipping threshold cannot be negative".to_string(),
			));
		}
	}
	Ok(())
}

pub fn check_min_rating_threshold(fields: &Map<String, Value>) -> VndResult<()> {
	if let Some(threshold) = fields.get("min_rating_threshold").and_then(Value::as_f64) {
		if !(1.0..=5.0).contains(&threshold) {
			return Err(Error::ValidationError(
				"Rating threshold must be between 1 and 5".to_string(),
			));
		}
	}
	Ok(())
}

pub fn check_custom_domain(fields: &Map<String, Value>) -> VndResult<()> {
	let Some(domain) = fields.get("custom_domain").and_then(Value::as_str) else {
		return Ok(());
	};
	if domain.is_empty() {
		return Ok(());
	}
	let domain_regex = Regex::new(
		r"^[a-zA-Z0-9][a-zA-Z0-9-]{0,61}[a-zA-Z0-9](\.[a-zA-Z0-9][a-zA-Z0-9-]{0,61}[a-zA-Z0-9])*$",
	)
	.map_err(|_| Error::Internal("invalid domain pattern".to_string()))?;
	if !domain_regex.is_match(domain.trim()) {
		return Err(Error::ValidationError("Invalid domain format".to_string()));
	}
	Ok(())
}

/// Full rule set for PUT /settings
pub fn validate_update(fields: &Map<String, Value>) -> VndResult<()> {
	check_store_name(fields)?;
	check_store_email(fields)?;
	check_store_status(fields)?;
	check_default_currency(fields)?;
	check_free_shipping_threshold(fields)?;
	check_min_rating_threshold(fields)?;
	check_custom_domain(fields)?;
	Ok(())
}

/// Rules for PUT /settings/basic
pub fn validate_basic(fields: &Map<String, Value>) -> VndResult<()> {
	check_store_name(fields)?;
	check_store_email(fields)?;
	Ok(())
}

/// Rules for PUT /settings/shipping
pub fn validate_shipping(fields: &Map<String, Value>) -> VndResult<()> {
	check_free_shipping_threshold(fields)?;
	Ok(())
}


// vim: ts=4
