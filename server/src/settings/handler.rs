//! Vendor settings HTTP handlers

use axum::{
	Json,
	extract::{Path, State},
	http::StatusCode,
};
use serde_json::{Map, Value};

use crate::prelude::*;
use crate::settings::sanitize;
use crate::settings::types::SettingsView;
use vendora_types::settings_adapter::CategoryRecord;
use vendora_types::types::ApiResponse;

fn parse_vendor_id(vendor_id: &str) -> VndResult<VendorId> {
	if vendor_id.trim().is_empty() {
		return Err(Error::ValidationError("Vendor ID is required".to_string()));
	}
	Ok(VendorId::new(vendor_id))
}

/// GET /api/vendors/{vendor_id}/settings
pub async fn get_vendor_settings(
	State(app): State<App>,
	Path(vendor_id): Path<String>,
) -> VndResult<(StatusCode, Json<ApiResponse<SettingsView>>)> {
	let vendor_id = parse_vendor_id(&vendor_id)?;

	match app.settings.get_settings(&vendor_id).await {
		Ok(view) => Ok((
			StatusCode::OK,
			Json(ApiResponse::new(view).with_message("Vendor settings retrieved successfully")),
		)),
		Err(Error::NotFound) => Ok((
			StatusCode::NOT_FOUND,
			Json(ApiResponse::failure("Vendor settings not found")),
		)),
		Err(err) => Err(err),
	}
}

/// PUT /api/vendors/{vendor_id}/settings
pub async fn update_vendor_settings(
	State(app): State<App>,
	Path(vendor_id): Path<String>,
	Json(fields): Json<Map<String, Value>>,
) -> VndResult<(StatusCode, Json<ApiResponse<Vec<CategoryRecord>>>)> {
	let vendor_id = parse_vendor_id(&vendor_id)?;
	if fields.is_empty() {
		return Err(Error::ValidationError("Settings data is required".to_string()));
	}
	sanitize::validate_update(&fields)?;

	let updated = app.settings.update_settings(&vendor_id, &fields).await?;
	if updated.is_empty() {
		return Ok((
			StatusCode::NOT_FOUND,
			Json(ApiResponse::failure("Vendor not found or no changes made")),
		));
	}

	Ok((
		StatusCode::OK,
		Json(ApiResponse::new(updated).with_message("Vendor settings updated successfully")),
	))
}

/// PUT /api/vendors/{vendor_id}/settings/basic
pub async fn update_basic_settings(
	State(app): State<App>,
	Path(vendor_id): Path<String>,
	Json(fields): Json<Map<String, Value>>,
) -> VndResult<(StatusCode, Json<ApiResponse<Vec<CategoryRecord>>>)> {
	let vendor_id = parse_vendor_id(&vendor_id)?;
	sanitize::validate_basic(&fields)?;

	let updated = app.settings.update_basic_settings(&vendor_id, &fields).await?;
	if updated.is_empty() {
		return Ok((StatusCode::NOT_FOUND, Json(ApiResponse::failure("Vendor not found"))));
	}

	Ok((
		StatusCode::OK,
		Json(ApiResponse::new(updated).with_message("Basic settings updated successfully")),
	))
}

/// PUT /api/vendors/{vendor_id}/settings/shipping
pub async fn update_shipping_settings(
	State(app): State<App>,
	Path(vendor_id): Path<String>,
	Json(fields): Json<Map<String, Value>>,
) -> VndResult<(StatusCode, Json<ApiResponse<Vec<CategoryRecord>>>)> {
	let vendor_id = parse_vendor_id(&vendor_id)?;
	sanitize::validate_shipping(&fields)?;

	let updated = app.settings.update_shipping_settings(&vendor_id, &fields).await?;
	if updated.is_empty() {
		return Ok((StatusCode::NOT_FOUND, Json(ApiResponse::failure("Vendor not found"))));
	}

	Ok((
		StatusCode::OK,
		Json(ApiResponse::new(updated).with_message("Shipping settings updated successfully")),
	))
}

/// PUT /api/vendors/{vendor_id}/settings/payment
pub async fn update_payment_settings(
	State(app): State<App>,
	Path(vendor_id): Path<String>,
	Json(fields): Json<Map<String, Value>>,
) -> VndResult<(StatusCode, Json<ApiResponse<Vec<CategoryRecord>>>)> {
	let vendor_id = parse_vendor_id(&vendor_id)?;

	let updated = app.settings.update_payment_settings(&vendor_id, &fields).await?;
	if updated.is_empty() {
		return Ok((StatusCode::NOT_FOUND, Json(ApiResponse::failure("Vendor not found"))));
	}

	Ok((
		StatusCode::OK,
		Json(ApiResponse::new(updated).with_message("Payment settings updated successfully")),
	))
}

// vim: ts=4
