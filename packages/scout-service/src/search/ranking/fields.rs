//! Zone-weighted token containment over the profile's searchable text.

use std::collections::BTreeSet;

use scout_config::Scoring;
use scout_domain::ProfileRecord;

/// Each token scores once per zone it appears in. A profile that mentions
/// "rust" in both its title and its skills earns credit twice, which favors
/// consistently on-topic profiles over single lucky keyword hits.
pub(crate) fn score_fields(
	profile: &ProfileRecord,
	tokens: &BTreeSet<String>,
	scoring: &Scoring,
) -> f32 {
	let zones = [
		(profile.identity_zone(), scoring.identity_weight),
		(profile.professional_zone(), scoring.professional_weight),
		(profile.interests_zone(), scoring.interests_weight),
	];
	let mut score = 0.0;

	for token in tokens {
		if token.chars().count() < 2 {
			continue;
		}

		for (zone, weight) in &zones {
			if zone.contains(token.as_str()) {
				score += weight;
			}
		}
	}

	score
}

#[cfg(test)]
mod tests {
	use super::*;

	fn tokens(words: &[&str]) -> BTreeSet<String> {
		words.iter().map(|word| word.to_string()).collect()
	}

	fn profile() -> ProfileRecord {
		ProfileRecord {
			name: "Ada".to_string(),
			bio: "Rust and compilers".to_string(),
			job_title: "Software Engineer".to_string(),
			skills: vec!["Rust".to_string()],
			..ProfileRecord::default()
		}
	}

	#[test]
	fn professional_matches_outweigh_identity_matches() {
		let scoring = Scoring::default();
		let identity_only = score_fields(&profile(), &tokens(&["compilers"]), &scoring);
		let professional_only = score_fields(&profile(), &tokens(&["software"]), &scoring);

		assert_eq!(identity_only, scoring.identity_weight);
		assert_eq!(professional_only, scoring.professional_weight);
		assert!(professional_only > identity_only);
	}

	#[test]
	fn a_token_scores_in_every_zone_it_appears_in() {
		let scoring = Scoring::default();
		let score = score_fields(&profile(), &tokens(&["rust"]), &scoring);

		// Bio (identity) and skills (interests) both mention rust.
		assert_eq!(score, scoring.identity_weight + scoring.interests_weight);
	}

	#[test]
	fn no_tokens_means_zero() {
		assert_eq!(score_fields(&profile(), &BTreeSet::new(), &Scoring::default()), 0.0);
	}
}
