use axum::{
	Router,
	routing::{get, put},
};
use tower_http::trace::TraceLayer;

use crate::App;
use crate::settings;

pub fn init(state: App) -> Router {
	Router::new()
		.route(
			"/api/vendors/{vendor_id}/settings",
			get(settings::handler::get_vendor_settings)
				.put(settings::handler::update_vendor_settings),
		)
		.route(
			"/api/vendors/{vendor_id}/settings/basic",
			put(settings::handler::update_basic_settings),
		)
		.route(
			"/api/vendors/{vendor_id}/settings/shipping",
			put(settings::handler::update_shipping_settings),
		)
		.route(
			"/api/vendors/{vendor_id}/settings/payment",
			put(settings::handler::update_payment_settings),
		)
		.layer(TraceLayer::new_for_http())
		.with_state(state)
}

// vim: ts=4
