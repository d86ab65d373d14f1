use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub providers: Providers,
	pub search: Search,
	#[serde(default)]
	pub scoring: Scoring,
	#[serde(default)]
	pub weights: Weights,
	pub lexicon: Option<LexiconSource>,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Providers {
	pub recommendation: ProviderConfig,
	pub profiles: ProviderConfig,
	pub badges: ProviderConfig,
}

#[derive(Debug, Deserialize)]
pub struct ProviderConfig {
	pub api_base: String,
	pub api_key: String,
	pub path: String,
	pub timeout_ms: u64,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct Search {
	/// Candidate pool requested from the recommendation service. Larger than
	/// any sensible top-K so re-ranking has room to reorder.
	pub pool_size: u32,
	/// Default result count when the caller does not pass one.
	pub top_k: u32,
	#[serde(default = "default_fuzzy_word_threshold")]
	pub fuzzy_word_threshold: f32,
	#[serde(default = "default_school_similarity_threshold")]
	pub school_similarity_threshold: f32,
}

/// Score contributions per evidence kind. All additive; the match score is
/// floored at zero after the negation penalty.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Scoring {
	pub identity_weight: f32,
	pub professional_weight: f32,
	pub interests_weight: f32,
	pub entity_bonus: f32,
	pub concept_bonus: f32,
	pub experience_sigma_years: f32,
	/// Sigma used instead when the query carries fuzzy-range modifiers
	/// ("around", "~"). Wider, so approximate asks decay more gently.
	pub fuzzy_experience_sigma_years: f32,
	pub experience_weight: f32,
	pub intent_bonus: f32,
	pub alumni_exact_bonus: f32,
	pub alumni_fuzzy_bonus: f32,
	pub alumni_query_bonus: f32,
	pub negation_penalty: f32,
}
impl Default for Scoring {
	fn default() -> Self {
		Self {
			identity_weight: 1.0,
			professional_weight: 2.0,
			interests_weight: 1.5,
			entity_bonus: 3.0,
			concept_bonus: 2.0,
			experience_sigma_years: 2.0,
			fuzzy_experience_sigma_years: 3.0,
			experience_weight: 2.0,
			intent_bonus: 2.0,
			alumni_exact_bonus: 4.0,
			alumni_fuzzy_bonus: 2.5,
			alumni_query_bonus: 1.5,
			negation_penalty: 2.0,
		}
	}
}

/// Blend weights between the upstream recommendation score and the text
/// match score. Chosen per query by the dynamic weighting rule.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Weights {
	pub base_recommendation: f32,
	pub base_text: f32,
	pub entity_recommendation: f32,
	pub entity_text: f32,
	/// Entity count at which a query is considered structured enough to
	/// shift weight onto the text match.
	pub min_entities: u32,
	/// Added to the text weight when emphasis modifiers are present.
	pub emphasis_text_boost: f32,
}
impl Default for Weights {
	fn default() -> Self {
		Self {
			base_recommendation: 0.6,
			base_text: 0.4,
			entity_recommendation: 0.35,
			entity_text: 0.65,
			min_entities: 2,
			emphasis_text_boost: 0.1,
		}
	}
}

#[derive(Debug, Deserialize)]
pub struct LexiconSource {
	pub path: Option<String>,
}

fn default_fuzzy_word_threshold() -> f32 {
	0.85
}

fn default_school_similarity_threshold() -> f32 {
	0.8
}
