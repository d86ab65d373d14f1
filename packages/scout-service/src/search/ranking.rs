//! Per-candidate match scoring. All sub-scores are additive; the negation
//! penalty is applied last and the total is floored at zero, so negations
//! offset positive evidence but never rank a candidate below "no evidence".

pub(crate) mod entity;
pub(crate) mod fields;
pub(crate) mod soft;
pub(crate) mod weights;

use scout_config::Config;
use scout_domain::{Intention, ParsedQuery, ProfileRecord};
use scout_lexicon::Lexicon;

const MENTOR_KEYWORDS: &[&str] = &["mentor", "mentoring", "mentorship"];
const FOUNDER_KEYWORDS: &[&str] = &["founder", "cofounder", "founding"];

/// Additive components of one candidate's match score, kept for caller-side
/// explainability. `match_score` is the floored total; `blended_score` in
/// the search item folds in the recommendation baseline.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ScoreBreakdown {
	pub field_score: f32,
	pub entity_score: f32,
	pub concept_score: f32,
	pub experience_score: f32,
	pub intent_score: f32,
	pub alumni_score: f32,
	pub negation_penalty: f32,
	pub match_score: f32,
}

pub(crate) fn score_candidate(
	cfg: &Config,
	lexicon: &Lexicon,
	parsed: &ParsedQuery,
	profile: &ProfileRecord,
	searcher: Option<&ProfileRecord>,
) -> ScoreBreakdown {
	let scoring = &cfg.scoring;
	let searchable = profile.searchable_text();
	let field_score = fields::score_fields(profile, &parsed.tokens, scoring);
	let entity_score = entity::score_entities(profile, &parsed.entities, lexicon, scoring);
	let concept_score = concept_score(lexicon, parsed, &searchable, scoring.concept_bonus);
	let experience_score = soft::experience_score(parsed, profile, scoring);
	let intent_score = intent_score(parsed, profile, scoring.intent_bonus);
	let alumni_score = soft::alumni_score(
		searcher,
		profile,
		parsed,
		cfg.search.school_similarity_threshold,
		scoring,
	);
	let negation_penalty =
		negation_penalty(lexicon, parsed, &searchable, scoring.negation_penalty);
	let total = field_score
		+ entity_score
		+ concept_score
		+ experience_score
		+ intent_score
		+ alumni_score;
	let match_score = (total - negation_penalty).max(0.0);

	ScoreBreakdown {
		field_score,
		entity_score,
		concept_score,
		experience_score,
		intent_score,
		alumni_score,
		negation_penalty,
		match_score,
	}
}

/// One bonus per fired concept whose expansion actually lands on the
/// profile, so "faang" pays off only for candidates at a faang company.
fn concept_score(
	lexicon: &Lexicon,
	parsed: &ParsedQuery,
	searchable: &str,
	bonus: f32,
) -> f32 {
	let mut score = 0.0;

	for (key, terms) in lexicon.concepts() {
		if !parsed.concept_tags.contains(key) {
			continue;
		}
		if terms.iter().any(|term| searchable.contains(term.as_str())) {
			score += bonus;
		}
	}

	score
}

fn intent_score(parsed: &ParsedQuery, profile: &ProfileRecord, bonus: f32) -> f32 {
	let mut score = 0.0;
	let has_any =
		|keywords: &[&str]| keywords.iter().any(|keyword| parsed.tokens.contains(*keyword));

	if profile.intention == Intention::Mentoring && has_any(MENTOR_KEYWORDS) {
		score += bonus;
	}
	if profile.intention == Intention::Cofounding && has_any(FOUNDER_KEYWORDS) {
		score += bonus;
	}

	score
}

/// A negated operand found anywhere in the profile costs one penalty.
/// Stop-word operands are skipped; the capture is a single raw word and
/// "not a founder" would otherwise penalize every profile containing "a".
fn negation_penalty(
	lexicon: &Lexicon,
	parsed: &ParsedQuery,
	searchable: &str,
	penalty: f32,
) -> f32 {
	let mut total = 0.0;

	for operand in &parsed.modifiers.negations {
		if operand.chars().count() < 2 || lexicon.is_stop_word(operand) {
			continue;
		}
		if searchable.contains(operand.as_str()) {
			total += penalty;
		}
	}

	total
}
