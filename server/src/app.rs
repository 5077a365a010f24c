//! App builder - constructs and runs the Vendora settings service

use std::sync::Arc;

use vendora_types::settings_adapter::SettingsAdapter;

use crate::prelude::*;
use crate::routes;
use crate::settings::service::SettingsService;

pub struct AppBuilderOpts {
	pub listen: Box<str>,
}

pub struct AppState {
	pub opts: AppBuilderOpts,
	pub settings: SettingsService,
}

pub type App = Arc<AppState>;

pub struct AppBuilder {
	opts: AppBuilderOpts,
	settings_adapter: Option<Arc<dyn SettingsAdapter>>,
}

impl AppBuilder {
	pub fn new() -> Self {
		let _ = tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.with_target(false)
			.try_init();
		AppBuilder {
			opts: AppBuilderOpts { listen: "127.0.0.1:5001".into() },
			settings_adapter: None,
		}
	}

	// Opts
	pub fn listen(&mut self, listen: impl Into<Box<str>>) -> &mut Self {
		self.opts.listen = listen.into();
		self
	}

	// Adapters
	pub fn settings_adapter(&mut self, settings_adapter: Arc<dyn SettingsAdapter>) -> &mut Self {
		self.settings_adapter = Some(settings_adapter);
		self
	}

	pub fn build(self) -> VndResult<App> {
		let Some(settings_adapter) = self.settings_adapter else {
			error!("FATAL: No settings adapter configured");
			return Err(Error::Internal("No settings adapter configured".to_string()));
		};

		Ok(Arc::new(AppState {
			opts: self.opts,
			settings: SettingsService::new(settings_adapter),
		}))
	}

	pub async fn run(self) -> VndResult<()> {
		let app = self.build()?;
		let router = routes::init(app.clone());

		let listener = tokio::net::TcpListener::bind(app.opts.listen.as_ref()).await?;
		info!("Listening on {}", app.opts.listen);
		axum::serve(listener, router).await?;

		Ok(())
	}
}

impl Default for AppBuilder {
	fn default() -> Self {
		Self::new()
	}
}

// vim: ts=4
