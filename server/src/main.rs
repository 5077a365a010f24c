use std::{env, path::PathBuf, sync::Arc};

use vendora::AppBuilder;
use vendora_settings_adapter_sqlite::SettingsAdapterSqlite;
use vendora_types::error::VndResult;

struct Config {
	db_dir: PathBuf,
	listen: String,
}

async fn run(config: Config) -> VndResult<()> {
	tokio::fs::create_dir_all(&config.db_dir).await?;

	let settings_adapter =
		Arc::new(SettingsAdapterSqlite::new(config.db_dir.join("settings.db")).await?);

	let mut builder = AppBuilder::new();
	builder.listen(config.listen).settings_adapter(settings_adapter);
	builder.run().await
}

#[tokio::main]
async fn main() {
	let config = Config {
		db_dir: PathBuf::from(env::var("DB_DIR").unwrap_or("./data".to_string())),
		listen: env::var("LISTEN").unwrap_or("127.0.0.1:5001".to_string()),
	};

	if let Err(err) = run(config).await {
		eprintln!("FATAL: {}", err);
		std::process::exit(1);
	}
}

// vim: ts=4
