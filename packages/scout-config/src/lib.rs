mod error;
mod types;

pub use error::{Error, Result};
pub use types::{
	Config, LexiconSource, ProviderConfig, Providers, Scoring, Search, Service, Weights,
};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}

	for (label, provider) in [
		("recommendation", &cfg.providers.recommendation),
		("profiles", &cfg.providers.profiles),
		("badges", &cfg.providers.badges),
	] {
		if provider.api_base.trim().is_empty() {
			return Err(Error::Validation {
				message: format!("providers.{label}.api_base must be non-empty."),
			});
		}
		if provider.timeout_ms == 0 {
			return Err(Error::Validation {
				message: format!("providers.{label}.timeout_ms must be greater than zero."),
			});
		}
	}

	if cfg.search.pool_size == 0 {
		return Err(Error::Validation {
			message: "search.pool_size must be greater than zero.".to_string(),
		});
	}
	if cfg.search.top_k == 0 {
		return Err(Error::Validation {
			message: "search.top_k must be greater than zero.".to_string(),
		});
	}
	if cfg.search.pool_size < cfg.search.top_k {
		return Err(Error::Validation {
			message: "search.pool_size must be at least search.top_k.".to_string(),
		});
	}

	for (label, threshold) in [
		("search.fuzzy_word_threshold", cfg.search.fuzzy_word_threshold),
		("search.school_similarity_threshold", cfg.search.school_similarity_threshold),
	] {
		if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
			return Err(Error::Validation {
				message: format!("{label} must be in the range 0.0-1.0."),
			});
		}
	}

	for (label, value) in [
		("scoring.identity_weight", cfg.scoring.identity_weight),
		("scoring.professional_weight", cfg.scoring.professional_weight),
		("scoring.interests_weight", cfg.scoring.interests_weight),
		("scoring.entity_bonus", cfg.scoring.entity_bonus),
		("scoring.concept_bonus", cfg.scoring.concept_bonus),
		("scoring.experience_weight", cfg.scoring.experience_weight),
		("scoring.intent_bonus", cfg.scoring.intent_bonus),
		("scoring.alumni_exact_bonus", cfg.scoring.alumni_exact_bonus),
		("scoring.alumni_fuzzy_bonus", cfg.scoring.alumni_fuzzy_bonus),
		("scoring.alumni_query_bonus", cfg.scoring.alumni_query_bonus),
		("scoring.negation_penalty", cfg.scoring.negation_penalty),
		("weights.base_recommendation", cfg.weights.base_recommendation),
		("weights.base_text", cfg.weights.base_text),
		("weights.entity_recommendation", cfg.weights.entity_recommendation),
		("weights.entity_text", cfg.weights.entity_text),
		("weights.emphasis_text_boost", cfg.weights.emphasis_text_boost),
	] {
		if !value.is_finite() {
			return Err(Error::Validation { message: format!("{label} must be a finite number.") });
		}
		if value < 0.0 {
			return Err(Error::Validation { message: format!("{label} must be zero or greater.") });
		}
	}

	for (label, sigma) in [
		("scoring.experience_sigma_years", cfg.scoring.experience_sigma_years),
		("scoring.fuzzy_experience_sigma_years", cfg.scoring.fuzzy_experience_sigma_years),
	] {
		if !sigma.is_finite() || sigma <= 0.0 {
			return Err(Error::Validation {
				message: format!("{label} must be greater than zero."),
			});
		}
	}

	if cfg.weights.min_entities == 0 {
		return Err(Error::Validation {
			message: "weights.min_entities must be greater than zero.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	let empty_lexicon_path = cfg
		.lexicon
		.as_ref()
		.map(|lexicon| lexicon.path.as_deref().map(str::trim).unwrap_or("").is_empty())
		.unwrap_or(false);

	if empty_lexicon_path {
		cfg.lexicon = None;
	}
}
