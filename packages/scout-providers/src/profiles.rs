// std
use std::{collections::HashMap, time::Duration as StdDuration};

// crates.io
use color_eyre::{Result, eyre};
use reqwest::Client;
use serde_json::Value;
use uuid::Uuid;
// self
use scout_domain::ProfileRecord;

/// Batch existence check. An id absent from the returned map means the
/// profile does not exist or was deleted.
pub async fn get_profiles_batch(
	cfg: &scout_config::ProviderConfig,
	ids: &[Uuid],
) -> Result<HashMap<Uuid, ProfileRecord>> {
	let client = Client::builder().timeout(StdDuration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}{}", cfg.api_base, cfg.path);
	let body = serde_json::json!({ "ids": ids });
	let res = client
		.post(url)
		.headers(crate::auth_headers(&cfg.api_key, &cfg.default_headers)?)
		.json(&body)
		.send()
		.await?;
	let json: Value = res.error_for_status()?.json().await?;
	parse_profiles_response(json)
}

fn parse_profiles_response(json: Value) -> Result<HashMap<Uuid, ProfileRecord>> {
	let items = json
		.get("profiles")
		.or_else(|| json.get("data"))
		.and_then(|v| v.as_array())
		.ok_or_else(|| eyre::eyre!("Profile batch response is missing profiles array."))?;
	let mut profiles = HashMap::with_capacity(items.len());

	for item in items {
		let profile = serde_json::from_value::<ProfileRecord>(item.clone())?;

		profiles.insert(profile.id, profile);
	}

	Ok(profiles)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn keys_profiles_by_their_id() {
		let json = serde_json::json!({
			"profiles": [
				{ "id": "5f2b7d1e-9c34-4b7e-9d6a-0f8b1c2d3e4f", "name": "Ada" },
				{ "id": "0e1d2c3b-4a59-4687-8d9e-afb0c1d2e3f4", "name": "Grace" }
			]
		});
		let profiles = parse_profiles_response(json).expect("parse failed");
		let ada: Uuid = "5f2b7d1e-9c34-4b7e-9d6a-0f8b1c2d3e4f".parse().unwrap();
		assert_eq!(profiles.len(), 2);
		assert_eq!(profiles[&ada].name, "Ada");
	}

	#[test]
	fn deleted_ids_are_simply_absent() {
		let json = serde_json::json!({ "profiles": [] });
		let profiles = parse_profiles_response(json).expect("parse failed");
		assert!(profiles.is_empty());
	}
}
