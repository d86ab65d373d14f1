//! Structured-field entity matching. Higher-precision evidence than the
//! bag-of-words zone scoring, so each hit pays a larger fixed bonus.

use scout_config::Scoring;
use scout_domain::{ProfileRecord, QueryEntities, tokenize::normalize_text};
use scout_lexicon::Lexicon;

pub(crate) fn score_entities(
	profile: &ProfileRecord,
	entities: &QueryEntities,
	lexicon: &Lexicon,
	scoring: &Scoring,
) -> f32 {
	let current_company = normalize_text(&profile.current_company);
	let past_companies: Vec<String> =
		profile.work_experiences.iter().map(|work| normalize_text(&work.company)).collect();
	let job_title = normalize_text(&profile.job_title);
	let title_words: Vec<&str> = job_title.split_whitespace().collect();
	let schools: Vec<String> = profile
		.educations
		.iter()
		.map(|education| normalize_text(&education.school_name))
		.collect();
	let skills: Vec<String> = profile.skills.iter().map(|skill| normalize_text(skill)).collect();
	let mut score = 0.0;

	for company in &entities.companies {
		if current_company == *company || past_companies.iter().any(|past| past == company) {
			score += scoring.entity_bonus;
		}
	}
	for role in &entities.roles {
		// Word-level rather than whole-title equality: "Senior Product
		// Manager" should satisfy the role "product manager". Abbreviated
		// roles ("pm") match through their synonym expansions; matching whole
		// words keeps "pm" out of "equipment".
		let expansions = lexicon.synonyms_of(role).unwrap_or_default();

		if title_has_role(&title_words, role)
			|| expansions.iter().any(|expansion| title_has_role(&title_words, expansion))
		{
			score += scoring.entity_bonus;
		}
	}
	for school in &entities.schools {
		if schools.iter().any(|name| name == school) {
			score += scoring.entity_bonus;
		}
	}
	for skill in &entities.skills {
		if skills.iter().any(|name| name == skill) {
			score += scoring.entity_bonus;
		}
	}

	score
}

/// The role's words must appear as a contiguous word run in the title.
fn title_has_role(title_words: &[&str], role: &str) -> bool {
	let role_words: Vec<&str> = role.split(' ').collect();

	title_words.windows(role_words.len()).any(|window| window == role_words)
}

#[cfg(test)]
mod tests {
	use super::*;
	use scout_domain::{Education, WorkExperience};

	fn lexicon() -> Lexicon {
		Lexicon::builtin()
	}

	fn entities_with_company(company: &str) -> QueryEntities {
		QueryEntities {
			companies: [company.to_string()].into_iter().collect(),
			..QueryEntities::default()
		}
	}

	#[test]
	fn exact_company_match_pays_the_bonus() {
		let scoring = Scoring::default();
		let profile =
			ProfileRecord { current_company: "Google".to_string(), ..ProfileRecord::default() };

		assert_eq!(
			score_entities(&profile, &entities_with_company("google"), &lexicon(), &scoring),
			scoring.entity_bonus
		);
	}

	#[test]
	fn past_employers_also_count() {
		let scoring = Scoring::default();
		let profile = ProfileRecord {
			current_company: "Stripe".to_string(),
			work_experiences: vec![WorkExperience {
				company: "Google".to_string(),
				..WorkExperience::default()
			}],
			..ProfileRecord::default()
		};

		assert_eq!(
			score_entities(&profile, &entities_with_company("google"), &lexicon(), &scoring),
			scoring.entity_bonus
		);
	}

	#[test]
	fn role_matches_by_title_containment() {
		let scoring = Scoring::default();
		let profile = ProfileRecord {
			job_title: "Senior Product Manager".to_string(),
			..ProfileRecord::default()
		};
		let entities = QueryEntities {
			roles: ["product manager".to_string()].into_iter().collect(),
			..QueryEntities::default()
		};

		assert_eq!(score_entities(&profile, &entities, &lexicon(), &scoring), scoring.entity_bonus);
	}

	#[test]
	fn abbreviated_roles_match_through_synonyms() {
		let scoring = Scoring::default();
		let profile = ProfileRecord {
			job_title: "Product Manager".to_string(),
			..ProfileRecord::default()
		};
		let entities = QueryEntities {
			roles: ["pm".to_string()].into_iter().collect(),
			..QueryEntities::default()
		};

		assert_eq!(score_entities(&profile, &entities, &lexicon(), &scoring), scoring.entity_bonus);
	}

	#[test]
	fn short_abbreviations_never_match_inside_longer_words() {
		let scoring = Scoring::default();
		let operator = ProfileRecord {
			job_title: "Equipment Operator".to_string(),
			..ProfileRecord::default()
		};
		let dev_manager = ProfileRecord {
			job_title: "Development Manager".to_string(),
			..ProfileRecord::default()
		};
		let pm = QueryEntities {
			roles: ["pm".to_string()].into_iter().collect(),
			..QueryEntities::default()
		};
		let em = QueryEntities {
			roles: ["em".to_string()].into_iter().collect(),
			..QueryEntities::default()
		};

		// "pm" must not hit "equipment", nor "em" hit "development".
		assert_eq!(score_entities(&operator, &pm, &lexicon(), &scoring), 0.0);
		assert_eq!(score_entities(&dev_manager, &em, &lexicon(), &scoring), 0.0);
	}

	#[test]
	fn school_and_skill_hits_accumulate() {
		let scoring = Scoring::default();
		let profile = ProfileRecord {
			educations: vec![Education {
				school_name: "Stanford University".to_string(),
				..Education::default()
			}],
			skills: vec!["Rust".to_string()],
			..ProfileRecord::default()
		};
		let entities = QueryEntities {
			schools: ["stanford university".to_string()].into_iter().collect(),
			skills: ["rust".to_string()].into_iter().collect(),
			..QueryEntities::default()
		};

		assert_eq!(
			score_entities(&profile, &entities, &lexicon(), &scoring),
			2.0 * scoring.entity_bonus
		);
	}

	#[test]
	fn unrelated_profile_scores_zero() {
		let profile =
			ProfileRecord { current_company: "Stripe".to_string(), ..ProfileRecord::default() };

		assert_eq!(
			score_entities(&profile, &entities_with_company("google"), &lexicon(), &Scoring::default()),
			0.0
		);
	}
}
