//! Gazetteer matching: phrase-first with a fuzzy per-word fallback, then
//! exact single-token membership for whatever the phrases left behind.

// std
use std::collections::{BTreeSet, HashSet};
// crates.io
use serde::Serialize;
// self
use crate::fuzzy;
use scout_lexicon::{EntityKind, Lexicon};

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct QueryEntities {
	pub companies: BTreeSet<String>,
	pub roles: BTreeSet<String>,
	pub schools: BTreeSet<String>,
	pub skills: BTreeSet<String>,
	/// Decimal values in appearance order; duplicates allowed.
	pub numbers: Vec<f32>,
}
impl QueryEntities {
	pub fn set(&self, kind: EntityKind) -> &BTreeSet<String> {
		match kind {
			EntityKind::Company => &self.companies,
			EntityKind::Role => &self.roles,
			EntityKind::School => &self.schools,
			EntityKind::Skill => &self.skills,
		}
	}

	fn set_mut(&mut self, kind: EntityKind) -> &mut BTreeSet<String> {
		match kind {
			EntityKind::Company => &mut self.companies,
			EntityKind::Role => &mut self.roles,
			EntityKind::School => &mut self.schools,
			EntityKind::Skill => &mut self.skills,
		}
	}

	/// Count of extracted entity strings, numbers excluded. Drives the
	/// dynamic weighting decision.
	pub fn total(&self) -> usize {
		EntityKind::ALL.iter().map(|&kind| self.set(kind).len()).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.total() == 0 && self.numbers.is_empty()
	}
}

/// Match the query against all four gazetteers.
///
/// Multi-word dictionary entries are tried first, by substring containment
/// and then by fuzzy per-word alignment. Words consumed by a phrase match are
/// excluded from the single-token pass so "product manager" does not also
/// count "manager" on its own.
pub fn extract_entities(
	normalized_text: &str,
	words: &[String],
	lexicon: &Lexicon,
	fuzzy_threshold: f32,
) -> QueryEntities {
	let mut entities = QueryEntities::default();
	let mut consumed: HashSet<String> = HashSet::new();

	for kind in EntityKind::ALL {
		let dictionary = lexicon.dictionary(kind);

		for phrase in dictionary.phrases() {
			let phrase_words: Vec<&str> = phrase.split(' ').collect();

			if normalized_text.contains(phrase.as_str()) {
				entities.set_mut(kind).insert(phrase.clone());
				consumed.extend(phrase_words.iter().map(|word| word.to_string()));
			} else if let Some(matched) = fuzzy_phrase_words(words, &phrase_words, fuzzy_threshold)
			{
				entities.set_mut(kind).insert(phrase.clone());
				consumed.extend(matched);
			}
		}
	}

	for kind in EntityKind::ALL {
		let dictionary = lexicon.dictionary(kind);

		for word in words {
			if word.chars().count() < 2
				|| lexicon.is_stop_word(word)
				|| consumed.contains(word.as_str())
			{
				continue;
			}
			if dictionary.contains(word) {
				entities.set_mut(kind).insert(word.clone());
			}
		}
	}

	entities.numbers = extract_numbers(normalized_text);

	entities
}

/// A phrase fuzzy-matches when every phrase word has a query word that is
/// identical or similar beyond the threshold. Returns the query words that
/// lined up, so the caller can mark them consumed.
fn fuzzy_phrase_words(
	words: &[String],
	phrase_words: &[&str],
	threshold: f32,
) -> Option<Vec<String>> {
	let mut matched = Vec::with_capacity(phrase_words.len());

	for phrase_word in phrase_words {
		let hit = words.iter().find(|word| fuzzy::words_match(word, phrase_word, threshold))?;

		matched.push(hit.clone());
	}

	Some(matched)
}

/// Split on non-digit runs and parse what remains. "3.5" therefore yields
/// two numbers, 3 and 5; the experience matcher treats each independently.
fn extract_numbers(text: &str) -> Vec<f32> {
	text.split(|ch: char| !ch.is_ascii_digit())
		.filter(|run| !run.is_empty())
		.filter_map(|run| run.parse::<f32>().ok())
		.collect()
}
