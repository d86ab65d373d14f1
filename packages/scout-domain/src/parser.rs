//! Query parser: composes the tokenizer, gazetteer extraction, modifier
//! scan, and the two expansion stages into one [`ParsedQuery`].

// std
use std::{collections::BTreeSet, sync::Arc};
// crates.io
use serde::Serialize;
// self
use crate::{
	entities::{self, QueryEntities},
	modifiers::{self, QueryModifiers},
	tokenize,
};
use scout_lexicon::{EntityKind, Lexicon};

/// Value-list fan-out cap for reverse synonym expansion. Heavily connected
/// synonym groups would otherwise inject every sibling variant.
const REVERSE_EXPANSION_CAP: usize = 3;

/// Structured form of one query string. Built once per search, read-only
/// afterward; every field derives from `raw_text` alone, so re-parsing
/// `raw_text` reproduces the same value.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ParsedQuery {
	/// Trimmed, lower-cased input.
	pub raw_text: String,
	/// Basic tokens plus matched entity phrases, synonym expansions, and
	/// concept expansions.
	pub tokens: BTreeSet<String>,
	pub entities: QueryEntities,
	pub modifiers: QueryModifiers,
	/// Concept keys whose expansion fired, e.g. "faang".
	pub concept_tags: BTreeSet<String>,
}
impl ParsedQuery {
	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}
}

pub struct Parser {
	lexicon: Arc<Lexicon>,
	fuzzy_word_threshold: f32,
}
impl Parser {
	pub fn new(lexicon: Arc<Lexicon>) -> Self {
		Self { lexicon, fuzzy_word_threshold: 0.85 }
	}

	pub fn with_fuzzy_threshold(lexicon: Arc<Lexicon>, fuzzy_word_threshold: f32) -> Self {
		Self { lexicon, fuzzy_word_threshold }
	}

	pub fn lexicon(&self) -> &Lexicon {
		&self.lexicon
	}

	/// Parsing never fails; malformed or empty input yields an empty or
	/// partial [`ParsedQuery`].
	pub fn parse(&self, text: &str) -> ParsedQuery {
		let raw_text = text.trim().to_lowercase();
		let words = tokenize::split_words(&raw_text);
		let entities =
			entities::extract_entities(&raw_text, &words, &self.lexicon, self.fuzzy_word_threshold);
		let modifiers = modifiers::extract_modifiers(&words);
		let mut tokens: BTreeSet<String> =
			tokenize::tokenize(&raw_text, &self.lexicon).into_iter().collect();

		// Matched phrases become searchable tokens themselves, so a profile
		// whose title contains "product manager" matches the whole phrase.
		for kind in EntityKind::ALL {
			tokens.extend(entities.set(kind).iter().cloned());
		}

		let tokens = self.expand_synonyms(&tokens);
		let (tokens, concept_tags) = self.expand_concepts(&tokens, &raw_text);

		ParsedQuery { raw_text, tokens, entities, modifiers, concept_tags }
	}

	/// Bidirectional synonym expansion. Forward: every term a token maps to.
	/// Reverse: every key whose value list contains the token, plus up to
	/// [`REVERSE_EXPANSION_CAP`] of that key's other values. Monotonic; the
	/// input tokens are always retained.
	pub fn expand_synonyms(&self, tokens: &BTreeSet<String>) -> BTreeSet<String> {
		let mut expanded = tokens.clone();

		for token in tokens {
			if let Some(values) = self.lexicon.synonyms_of(token) {
				expanded.extend(values.iter().cloned());
			}
			if let Some(keys) = self.lexicon.synonym_keys_for(token) {
				for key in keys {
					expanded.insert(key.clone());

					let siblings = self
						.lexicon
						.synonyms_of(key)
						.unwrap_or_default()
						.iter()
						.filter(|value| *value != token)
						.take(REVERSE_EXPANSION_CAP)
						.cloned();

					expanded.extend(siblings);
				}
			}
		}

		expanded
	}

	/// Concept expansion keyed on raw-text substring containment, so
	/// multi-word keys like "ivy league" fire without surviving
	/// tokenization. Returns the widened token set and the fired keys.
	pub fn expand_concepts(
		&self,
		tokens: &BTreeSet<String>,
		raw_text: &str,
	) -> (BTreeSet<String>, BTreeSet<String>) {
		let mut expanded = tokens.clone();
		let mut tags = BTreeSet::new();

		for (key, terms) in self.lexicon.concepts() {
			if raw_text.contains(key.as_str()) {
				expanded.extend(terms.iter().cloned());
				tags.insert(key.clone());
			}
		}

		(expanded, tags)
	}
}
