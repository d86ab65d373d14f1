// std
use std::time::Duration as StdDuration;

// crates.io
use color_eyre::{Result, eyre};
use reqwest::Client;
use serde_json::Value;
use uuid::Uuid;
// self
use scout_domain::Candidate;

/// Fetch the baseline candidate pool for a user. The collaborator already
/// excludes users the requester has interacted with.
pub async fn get_recommendations(
	cfg: &scout_config::ProviderConfig,
	user_id: Uuid,
	limit: u32,
	force_refresh: bool,
) -> Result<Vec<Candidate>> {
	let client = Client::builder().timeout(StdDuration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}{}", cfg.api_base, cfg.path);
	let body = serde_json::json!({
		"userId": user_id,
		"limit": limit,
		"forceRefresh": force_refresh,
	});
	let res = client
		.post(url)
		.headers(crate::auth_headers(&cfg.api_key, &cfg.default_headers)?)
		.json(&body)
		.send()
		.await?;
	let json: Value = res.error_for_status()?.json().await?;
	parse_recommendations_response(json)
}

fn parse_recommendations_response(json: Value) -> Result<Vec<Candidate>> {
	let items = json
		.get("recommendations")
		.or_else(|| json.get("data"))
		.and_then(|v| v.as_array())
		.ok_or_else(|| eyre::eyre!("Recommendation response is missing recommendations array."))?;
	let mut candidates = Vec::with_capacity(items.len());

	for item in items {
		candidates.push(serde_json::from_value::<Candidate>(item.clone())?);
	}

	Ok(candidates)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_candidates_in_pool_order() {
		let json = serde_json::json!({
			"recommendations": [
				{
					"id": "5f2b7d1e-9c34-4b7e-9d6a-0f8b1c2d3e4f",
					"score": 0.9,
					"profile": { "name": "Ada", "currentCompany": "Google" }
				},
				{
					"id": "0e1d2c3b-4a59-4687-8d9e-afb0c1d2e3f4",
					"score": 0.4,
					"profile": { "name": "Grace" }
				}
			]
		});
		let candidates = parse_recommendations_response(json).expect("parse failed");
		assert_eq!(candidates.len(), 2);
		assert_eq!(candidates[0].profile.name, "Ada");
		assert_eq!(candidates[0].score, 0.9);
		assert_eq!(candidates[1].profile.name, "Grace");
	}

	#[test]
	fn missing_array_is_an_error() {
		let json = serde_json::json!({ "status": "ok" });
		assert!(parse_recommendations_response(json).is_err());
	}
}
