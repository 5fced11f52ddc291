use std::path::Path;

use crate::models::{ConfigLoader, Network};

use super::error::ConfigError;

/// Expands `${VAR}` placeholders in RPC URLs from the process environment,
/// so endpoint credentials stay out of config files.
fn expand_env_placeholders(url: &str) -> Result<String, ConfigError> {
	let mut expanded = String::with_capacity(url.len());
	let mut rest = url;
	while let Some(start) = rest.find("${") {
		let Some(end) = rest[start..].find('}') else {
			return Err(ConfigError::validation_error(format!(
				"Unterminated environment placeholder in URL: {}",
				url
			)));
		};
		expanded.push_str(&rest[..start]);
		let name = &rest[start + 2..start + end];
		match std::env::var(name) {
			Ok(value) => expanded.push_str(&value),
			Err(_) => {
				return Err(ConfigError::validation_error(format!(
					"Environment variable {} referenced by RPC URL is not set",
					name
				)))
			}
		}
		rest = &rest[start + end + 1..];
	}
	expanded.push_str(rest);
	Ok(expanded)
}

impl ConfigLoader for Network {
	fn load_all<T>(path: Option<&Path>) -> Result<T, ConfigError>
	where
		T: FromIterator<(String, Self)>,
	{
		// Pick up a .env before URLs are expanded
		dotenvy::dotenv().ok();

		let network_dir = path.unwrap_or(Path::new("config/networks"));
		let mut pairs = Vec::new();

		if !network_dir.exists() {
			return Err(ConfigError::file_error("networks directory not found"));
		}

		for entry in std::fs::read_dir(network_dir)? {
			let entry = entry?;
			let path = entry.path();

			if !Self::is_json_file(&path) {
				continue;
			}

			let name = path
				.file_stem()
				.and_then(|s| s.to_str())
				.unwrap_or("unknown")
				.to_string();

			let network = Self::load_from_path(&path)?;
			pairs.push((name, network));
		}

		Ok(T::from_iter(pairs))
	}

	fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
		let file = std::fs::File::open(path)?;
		let mut config: Network = serde_json::from_reader(file)?;

		for rpc_url in &mut config.rpc_urls {
			rpc_url.url = expand_env_placeholders(&rpc_url.url)?;
		}

		// Validate the config after loading
		if let Err(validation_error) = config.validate() {
			return Err(ConfigError::validation_error(validation_error));
		}

		Ok(config)
	}

	fn validate(&self) -> Result<(), String> {
		// Validate slug
		if !self
			.slug
			.chars()
			.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
		{
			return Err(
				"Slug must contain only lowercase letters, numbers, and underscores".to_string(),
			);
		}

		let supported_types = ["rpc"];
		if !self
			.rpc_urls
			.iter()
			.all(|rpc_url| supported_types.contains(&rpc_url.type_.as_str()))
		{
			return Err(format!(
				"RPC URL type must be one of: {}",
				supported_types.join(", ")
			));
		}

		if self.rpc_urls.is_empty() {
			return Err("At least one RPC URL is required".to_string());
		}

		// Validate RPC URLs format
		if !self.rpc_urls.iter().all(|rpc_url| {
			rpc_url.url.starts_with("http://") || rpc_url.url.starts_with("https://")
		}) {
			return Err("All RPC URLs must start with http:// or https://".to_string());
		}

		// Validate RPC URL weights
		if !self.rpc_urls.iter().all(|rpc_url| rpc_url.weight <= 100) {
			return Err("All RPC URL weights must be between 0 and 100".to_string());
		}

		// A zero timeout would turn every request into an rpc error
		if self.rpc_timeout_ms.is_some_and(|timeout| timeout == 0) {
			return Err("rpc_timeout_ms must be greater than 0".to_string());
		}

		Ok(())
	}
}
