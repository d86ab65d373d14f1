//! Soft matching: Gaussian-decayed numeric proximity for years of
//! experience, and fuzzy school-name similarity for alumni overlap.

use scout_config::Scoring;
use scout_domain::{ParsedQuery, ProfileRecord, fuzzy, tokenize::normalize_text};

/// Best Gaussian proximity between any query number and the profile's years
/// of experience: `exp(-((years - target)^2) / (2 * sigma^2))`. A 3-year ask
/// still gives a 4-year profile most of the credit instead of cliff-dropping
/// at a hard cutoff. Fuzzy-range modifiers widen sigma.
pub(crate) fn experience_score(
	parsed: &ParsedQuery,
	profile: &ProfileRecord,
	scoring: &Scoring,
) -> f32 {
	if parsed.entities.numbers.is_empty() {
		return 0.0;
	}

	let sigma = if parsed.modifiers.fuzzy.is_empty() {
		scoring.experience_sigma_years
	} else {
		scoring.fuzzy_experience_sigma_years
	};
	let years = profile.years_of_experience;
	let best = parsed
		.entities
		.numbers
		.iter()
		.map(|target| {
			let delta = years - target;

			(-(delta * delta) / (2.0 * sigma * sigma)).exp()
		})
		.fold(0.0_f32, f32::max);

	best * scoring.experience_weight
}

/// Alumni overlap. The largest single bonus in the model goes to an exact
/// same-school match between the searcher and the candidate; a fuzzy match
/// ("Stanford" vs "Stanford University") pays less; a candidate school named
/// explicitly in the query pays a modest bonus regardless of the searcher's
/// own history. The searcher bonuses do not stack, the query bonus does.
pub(crate) fn alumni_score(
	searcher: Option<&ProfileRecord>,
	profile: &ProfileRecord,
	parsed: &ParsedQuery,
	school_similarity_threshold: f32,
	scoring: &Scoring,
) -> f32 {
	let candidate_schools: Vec<String> = profile
		.educations
		.iter()
		.map(|education| normalize_text(&education.school_name))
		.filter(|name| !name.is_empty())
		.collect();

	if candidate_schools.is_empty() {
		return 0.0;
	}

	let mut score = 0.0;

	if let Some(searcher) = searcher {
		let searcher_schools: Vec<String> = searcher
			.educations
			.iter()
			.map(|education| normalize_text(&education.school_name))
			.filter(|name| !name.is_empty())
			.collect();
		let exact = searcher_schools
			.iter()
			.any(|own| candidate_schools.iter().any(|theirs| own == theirs));

		if exact {
			score += scoring.alumni_exact_bonus;
		} else {
			let close = searcher_schools.iter().any(|own| {
				candidate_schools
					.iter()
					.any(|theirs| schools_match(own, theirs, school_similarity_threshold))
			});

			if close {
				score += scoring.alumni_fuzzy_bonus;
			}
		}
	}

	let named_in_query = parsed.entities.schools.iter().any(|school| {
		candidate_schools
			.iter()
			.any(|theirs| schools_match(theirs, school, school_similarity_threshold))
	});

	if named_in_query {
		score += scoring.alumni_query_bonus;
	}

	score
}

/// Variant-tolerant school comparison. "stanford" and "stanford university"
/// are the same institution, so containment counts alongside edit-distance
/// similarity for genuine misspellings.
fn schools_match(a: &str, b: &str, threshold: f32) -> bool {
	a == b || a.contains(b) || b.contains(a) || fuzzy::similarity(a, b) > threshold
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::sync::Arc;

	use scout_domain::{Education, Parser};
	use scout_lexicon::Lexicon;

	fn parse(query: &str) -> ParsedQuery {
		Parser::new(Arc::new(Lexicon::builtin())).parse(query)
	}

	fn with_school(name: &str) -> ProfileRecord {
		ProfileRecord {
			educations: vec![Education {
				school_name: name.to_string(),
				..Education::default()
			}],
			..ProfileRecord::default()
		}
	}

	fn with_years(years: f32) -> ProfileRecord {
		ProfileRecord { years_of_experience: years, ..ProfileRecord::default() }
	}

	#[test]
	fn experience_decays_smoothly_around_the_target() {
		let scoring = Scoring::default();
		let parsed = parse("pm with 3 years");
		let exact = experience_score(&parsed, &with_years(3.0), &scoring);
		let near = experience_score(&parsed, &with_years(4.0), &scoring);
		let far = experience_score(&parsed, &with_years(15.0), &scoring);

		assert_eq!(exact, scoring.experience_weight);
		assert!(near > 0.8 * scoring.experience_weight);
		assert!(near < exact);
		assert!(far < 0.01);
	}

	#[test]
	fn fuzzy_modifiers_widen_the_bandwidth() {
		let scoring = Scoring::default();
		let strict = experience_score(&parse("pm with 3 years"), &with_years(7.0), &scoring);
		let relaxed = experience_score(&parse("pm around 3 years"), &with_years(7.0), &scoring);

		assert!(relaxed > strict);
	}

	#[test]
	fn no_numbers_means_no_experience_credit() {
		assert_eq!(
			experience_score(&parse("rust engineer"), &with_years(3.0), &Scoring::default()),
			0.0
		);
	}

	#[test]
	fn exact_same_school_beats_fuzzy_beats_query_only() {
		let scoring = Scoring::default();
		let searcher = with_school("Stanford University");
		let candidate = with_school("Stanford University");
		let fuzzy_candidate = with_school("Stanford");
		let parsed = parse("alumni from stanford university");
		let exact = alumni_score(Some(&searcher), &candidate, &parsed, 0.8, &scoring);
		let close = alumni_score(Some(&searcher), &fuzzy_candidate, &parsed, 0.8, &scoring);
		let query_only = alumni_score(None, &candidate, &parsed, 0.8, &scoring);

		assert_eq!(exact, scoring.alumni_exact_bonus + scoring.alumni_query_bonus);
		assert!(close < exact);
		assert_eq!(query_only, scoring.alumni_query_bonus);
	}

	#[test]
	fn school_variants_match_by_containment_or_similarity() {
		assert!(schools_match("stanford", "stanford university", 0.8));
		assert!(schools_match("stanford university", "stanford universty", 0.8));
		assert!(!schools_match("mit", "stanford", 0.8));
	}

	#[test]
	fn no_shared_education_earns_only_the_query_bonus() {
		let scoring = Scoring::default();
		let searcher = with_school("MIT");
		let candidate = with_school("Stanford University");
		let parsed = parse("alumni from stanford university");
		let score = alumni_score(Some(&searcher), &candidate, &parsed, 0.8, &scoring);

		assert_eq!(score, scoring.alumni_query_bonus);
	}
}
