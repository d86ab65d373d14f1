//! The ranking pipeline: parse, fetch pool, validate existence, score,
//! blend, sort, truncate, re-validate, decorate with badges.

pub(crate) mod ranking;

use std::collections::HashMap;

use tracing::{debug, warn};
use uuid::Uuid;

pub use ranking::ScoreBreakdown;

use crate::{ScoutService, ServiceError, ServiceResult};
use scout_domain::{BadgeStatus, ProfileRecord};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SearchRequest {
	pub user_id: Uuid,
	pub query: String,
	pub top_k: Option<u32>,
	pub force_refresh: Option<bool>,
}

/// Distinguishes "nothing matched" from a failed search. An empty pool or a
/// pool entirely filtered away by validation is a valid outcome, not an
/// error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
	Ok,
	NoCandidates,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SearchItem {
	pub id: Uuid,
	pub profile: ProfileRecord,
	pub badge: BadgeStatus,
	pub recommendation_score: f32,
	pub blended_score: f32,
	pub recommendation_weight: f32,
	pub text_weight: f32,
	pub breakdown: ScoreBreakdown,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SearchResponse {
	pub status: SearchStatus,
	pub items: Vec<SearchItem>,
}

/// Blend weights for one parsed query. Deterministic and pure, so the same
/// query against the same pool always ranks identically.
pub fn adjust_weights(
	weights: &scout_config::Weights,
	parsed: &scout_domain::ParsedQuery,
) -> (f32, f32) {
	ranking::weights::adjust_weights(weights, parsed)
}

struct ScoredCandidate {
	id: Uuid,
	profile: ProfileRecord,
	recommendation_score: f32,
	breakdown: ScoreBreakdown,
	blended_score: f32,
}

impl ScoutService {
	pub async fn search(&self, request: SearchRequest) -> ServiceResult<SearchResponse> {
		if request.top_k == Some(0) {
			return Err(ServiceError::InvalidRequest {
				message: "top_k must be greater than zero.".to_string(),
			});
		}

		let top_k = request.top_k.unwrap_or(self.cfg.search.top_k) as usize;
		let parsed = self.parser.parse(&request.query);

		debug!(
			tokens = parsed.tokens.len(),
			entities = parsed.entities.total(),
			concepts = parsed.concept_tags.len(),
			"Parsed search query.",
		);

		let pool = self
			.providers
			.recommendation
			.get_recommendations(
				&self.cfg.providers.recommendation,
				request.user_id,
				self.cfg.search.pool_size,
				request.force_refresh.unwrap_or(false),
			)
			.await
			.map_err(|err| ServiceError::CollaboratorUnavailable {
				collaborator: "recommendation",
				message: err.to_string(),
			})?;

		if pool.is_empty() {
			return Ok(SearchResponse { status: SearchStatus::NoCandidates, items: Vec::new() });
		}

		// One batch covers both the candidate existence check and the
		// searcher's own profile, which alumni scoring wants.
		let mut ids: Vec<Uuid> = pool.iter().map(|candidate| candidate.id).collect();

		ids.push(request.user_id);

		let mut profiles = self.fetch_profiles(&ids).await?;
		let searcher = profiles.remove(&request.user_id);
		let (w_rec, w_text) = ranking::weights::adjust_weights(&self.cfg.weights, &parsed);
		let mut scored: Vec<ScoredCandidate> = Vec::with_capacity(pool.len());

		for candidate in &pool {
			// Absent from the store means deleted since the pool was built.
			let Some(profile) = profiles.remove(&candidate.id) else {
				continue;
			};
			let breakdown = ranking::score_candidate(
				&self.cfg,
				self.parser.lexicon(),
				&parsed,
				&profile,
				searcher.as_ref(),
			);
			let blended_score = candidate.score * w_rec + breakdown.match_score * w_text;

			scored.push(ScoredCandidate {
				id: candidate.id,
				profile,
				recommendation_score: candidate.score,
				breakdown,
				blended_score,
			});
		}

		// Stable sort keeps pool order for ties, so equal blends fall back
		// to the upstream recommendation ordering.
		scored.sort_by(|a, b| {
			b.blended_score.partial_cmp(&a.blended_score).unwrap_or(std::cmp::Ordering::Equal)
		});
		scored.truncate(top_k);

		// Second existence pass over the final short-list. The pool was
		// fetched before the first store query; a candidate deleted in
		// between both passes must still never reach the caller. Badge
		// lookups are independent per id, so both batches go out together.
		let final_ids: Vec<Uuid> = scored.iter().map(|candidate| candidate.id).collect();
		let (surviving, badges) =
			tokio::join!(self.fetch_profiles(&final_ids), self.fetch_badges(&final_ids));
		let surviving = surviving?;

		scored.retain(|candidate| surviving.contains_key(&candidate.id));

		let items: Vec<SearchItem> = scored
			.into_iter()
			.map(|candidate| SearchItem {
				badge: badges.get(&candidate.id).copied().unwrap_or_default(),
				id: candidate.id,
				profile: candidate.profile,
				recommendation_score: candidate.recommendation_score,
				blended_score: candidate.blended_score,
				recommendation_weight: w_rec,
				text_weight: w_text,
				breakdown: candidate.breakdown,
			})
			.collect();
		let status =
			if items.is_empty() { SearchStatus::NoCandidates } else { SearchStatus::Ok };

		Ok(SearchResponse { status, items })
	}

	async fn fetch_profiles(&self, ids: &[Uuid]) -> ServiceResult<HashMap<Uuid, ProfileRecord>> {
		self.providers
			.profiles
			.get_profiles_batch(&self.cfg.providers.profiles, ids)
			.await
			.map_err(|err| ServiceError::CollaboratorUnavailable {
				collaborator: "profiles",
				message: err.to_string(),
			})
	}

	/// Badge lookups degrade instead of failing the search; missing ids
	/// surface as unknown statuses.
	async fn fetch_badges(&self, ids: &[Uuid]) -> HashMap<Uuid, BadgeStatus> {
		if ids.is_empty() {
			return HashMap::new();
		}

		match self.providers.badges.get_badges_batch(&self.cfg.providers.badges, ids).await {
			Ok(badges) => badges,
			Err(err) => {
				warn!(error = %err, "Badge lookup failed; continuing with unknown statuses.");

				HashMap::new()
			},
		}
	}
}
