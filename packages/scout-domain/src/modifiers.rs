//! Trigger-word scan over the raw word stream. Runs before stop-word
//! filtering because "about" and friends double as stop words.

// crates.io
use serde::Serialize;

const NEGATION_TRIGGERS: &[&str] = &["not", "no", "except", "without"];
const EMPHASIS_TRIGGERS: &[&str] = &["must", "only", "require", "need"];
const FUZZY_TRIGGERS: &[&str] = &["around", "about", "approximately", "~"];

/// Operands captured after trigger words, in appearance order. Each trigger
/// captures the single following word; multi-word operands are out of scope.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct QueryModifiers {
	pub negations: Vec<String>,
	pub emphasis: Vec<String>,
	pub fuzzy: Vec<String>,
}
impl QueryModifiers {
	pub fn is_empty(&self) -> bool {
		self.negations.is_empty() && self.emphasis.is_empty() && self.fuzzy.is_empty()
	}
}

pub fn extract_modifiers(words: &[String]) -> QueryModifiers {
	let mut modifiers = QueryModifiers::default();

	for (index, word) in words.iter().enumerate() {
		let Some(operand) = words.get(index + 1) else {
			// A trailing trigger has nothing to capture.
			break;
		};

		if NEGATION_TRIGGERS.contains(&word.as_str()) {
			modifiers.negations.push(operand.clone());
		} else if EMPHASIS_TRIGGERS.contains(&word.as_str()) {
			modifiers.emphasis.push(operand.clone());
		} else if FUZZY_TRIGGERS.contains(&word.as_str()) {
			modifiers.fuzzy.push(operand.clone());
		}
	}

	modifiers
}

#[cfg(test)]
mod tests {
	use super::*;

	fn extract(query: &str) -> QueryModifiers {
		extract_modifiers(&crate::tokenize::split_words(query))
	}

	#[test]
	fn negation_captures_the_following_word() {
		let modifiers = extract("engineer, not founder");

		assert_eq!(modifiers.negations, ["founder"]);
	}

	#[test]
	fn all_three_trigger_families_capture() {
		let modifiers = extract("must python, around 5 years, no consulting");

		assert_eq!(modifiers.emphasis, ["python"]);
		assert_eq!(modifiers.fuzzy, ["5"]);
		assert_eq!(modifiers.negations, ["consulting"]);
	}

	#[test]
	fn tilde_splits_into_a_trigger_and_its_operand() {
		let modifiers = extract("swe ~5 yrs");

		assert_eq!(modifiers.fuzzy, ["5"]);
	}

	#[test]
	fn trailing_trigger_captures_nothing() {
		let modifiers = extract("anything but not");

		assert!(modifiers.negations.is_empty());
	}

	#[test]
	fn each_trigger_captures_one_word_only() {
		let modifiers = extract("not an engineer");

		// Single-operand capture: "engineer" is not negated.
		assert_eq!(modifiers.negations, ["an"]);
	}
}
