// std
use std::{collections::HashMap, time::Duration as StdDuration};

// crates.io
use color_eyre::{Result, eyre};
use reqwest::Client;
use serde_json::Value;
use uuid::Uuid;
// self
use scout_domain::BadgeStatus;

/// Batch Pro/verification lookup. Callers treat a failure here as
/// non-fatal; ranking proceeds with unknown statuses.
pub async fn get_badges_batch(
	cfg: &scout_config::ProviderConfig,
	ids: &[Uuid],
) -> Result<HashMap<Uuid, BadgeStatus>> {
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
	parse_badges_response(json)
}

fn parse_badges_response(json: Value) -> Result<HashMap<Uuid, BadgeStatus>> {
	let items = json
		.get("badges")
		.or_else(|| json.get("data"))
		.and_then(|v| v.as_array())
		.ok_or_else(|| eyre::eyre!("Badge batch response is missing badges array."))?;
	let mut badges = HashMap::with_capacity(items.len());

	for item in items {
		let id = item
			.get("id")
			.and_then(|v| v.as_str())
			.ok_or_else(|| eyre::eyre!("Badge entry missing id."))?
			.parse::<Uuid>()?;
		let status = BadgeStatus {
			pro: item.get("pro").and_then(|v| v.as_bool()),
			verified: item.get("verified").and_then(|v| v.as_bool()),
		};

		badges.insert(id, status);
	}

	Ok(badges)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_statuses_and_leaves_gaps_unknown() {
		let json = serde_json::json!({
			"badges": [
				{ "id": "5f2b7d1e-9c34-4b7e-9d6a-0f8b1c2d3e4f", "pro": true, "verified": false },
				{ "id": "0e1d2c3b-4a59-4687-8d9e-afb0c1d2e3f4", "verified": true }
			]
		});
		let badges = parse_badges_response(json).expect("parse failed");
		let first: Uuid = "5f2b7d1e-9c34-4b7e-9d6a-0f8b1c2d3e4f".parse().unwrap();
		let second: Uuid = "0e1d2c3b-4a59-4687-8d9e-afb0c1d2e3f4".parse().unwrap();
		assert_eq!(badges[&first], BadgeStatus { pro: Some(true), verified: Some(false) });
		assert_eq!(badges[&second], BadgeStatus { pro: None, verified: Some(true) });
	}
}
