//! Per-query blend weights between the recommendation score and the text
//! match score. A pure function of the parsed query; nothing here may read
//! clocks or random state, or determinism of the ranking breaks.

use scout_config::Weights;
use scout_domain::ParsedQuery;

pub fn adjust_weights(weights: &Weights, parsed: &ParsedQuery) -> (f32, f32) {
	if parsed.tokens.is_empty() {
		// Nothing to text-match against; rank purely on the baseline.
		return (1.0, 0.0);
	}

	let structured = parsed.entities.total() >= weights.min_entities as usize;
	let (w_rec, mut w_text) = if structured {
		(weights.entity_recommendation, weights.entity_text)
	} else {
		(weights.base_recommendation, weights.base_text)
	};

	if !parsed.modifiers.emphasis.is_empty() {
		w_text += weights.emphasis_text_boost;
	}

	(w_rec, w_text)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::sync::Arc;

	use scout_domain::Parser;
	use scout_lexicon::Lexicon;

	fn parse(query: &str) -> ParsedQuery {
		Parser::new(Arc::new(Lexicon::builtin())).parse(query)
	}

	#[test]
	fn empty_query_ranks_on_recommendation_alone() {
		assert_eq!(adjust_weights(&Weights::default(), &parse("")), (1.0, 0.0));
	}

	#[test]
	fn vague_queries_keep_the_base_split() {
		let weights = Weights::default();
		let (w_rec, w_text) = adjust_weights(&weights, &parse("someone interesting to talk to"));

		assert_eq!((w_rec, w_text), (weights.base_recommendation, weights.base_text));
	}

	#[test]
	fn entity_dense_queries_shift_weight_to_text() {
		let weights = Weights::default();
		let (w_rec, w_text) = adjust_weights(&weights, &parse("swe at google"));

		assert_eq!((w_rec, w_text), (weights.entity_recommendation, weights.entity_text));
		assert!(w_text > w_rec);
	}

	#[test]
	fn emphasis_boosts_the_text_weight() {
		let weights = Weights::default();
		let plain = adjust_weights(&weights, &parse("python engineer"));
		let emphatic = adjust_weights(&weights, &parse("must python engineer"));

		assert_eq!(emphatic.0, plain.0);
		assert!((emphatic.1 - plain.1 - weights.emphasis_text_boost).abs() < 1e-6);
	}

	#[test]
	fn weights_are_deterministic() {
		let weights = Weights::default();
		let parsed = parse("pm at google, 3 years");

		assert_eq!(adjust_weights(&weights, &parsed), adjust_weights(&weights, &parsed));
	}
}
