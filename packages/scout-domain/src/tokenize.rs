//! Lower-casing word splitter shared by the parser stages. Entity and
//! modifier extraction work on the raw word stream; scoring works on the
//! filtered token stream.

// crates.io
use unicode_normalization::UnicodeNormalization;
// self
use scout_lexicon::Lexicon;

/// Split text into lowercase words on any non-`[A-Za-z0-9]` boundary.
/// Non-ASCII letters act as separators since the dictionaries are ASCII.
/// `~` survives as its own word because it triggers fuzzy-range capture.
pub fn split_words(text: &str) -> Vec<String> {
	let mut words = Vec::new();
	let mut current = String::new();

	for ch in text.chars() {
		if ch.is_ascii_alphanumeric() {
			current.extend(ch.to_lowercase());

			continue;
		}
		if !current.is_empty() {
			words.push(std::mem::take(&mut current));
		}
		if ch == '~' {
			words.push("~".to_string());
		}
	}

	if !current.is_empty() {
		words.push(current);
	}

	words
}

/// Filtered token stream: words of length >= 2 that are not stop words,
/// first occurrence kept in appearance order.
pub fn tokenize(text: &str, lexicon: &Lexicon) -> Vec<String> {
	let mut seen = std::collections::HashSet::new();
	let mut tokens = Vec::new();

	for word in split_words(text) {
		if word.chars().count() < 2 || lexicon.is_stop_word(&word) {
			continue;
		}
		if seen.insert(word.clone()) {
			tokens.push(word);
		}
	}

	tokens
}

/// NFKC-fold and lowercase a display string before dictionary or similarity
/// comparison. Profile fields arrive with arbitrary casing and the odd
/// compatibility character (ligatures, fullwidth forms).
pub fn normalize_text(text: &str) -> String {
	text.nfkc().collect::<String>().trim().to_lowercase()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn splits_on_punctuation_and_keeps_tilde() {
		assert_eq!(split_words("PM, ~5 yrs @Google"), ["pm", "~", "5", "yrs", "google"]);
	}

	#[test]
	fn empty_input_yields_no_words() {
		assert!(split_words("").is_empty());
		assert!(split_words("  ,,  ").is_empty());
	}

	#[test]
	fn tokenize_drops_stop_words_and_short_tokens() {
		let lexicon = Lexicon::builtin();
		let tokens = tokenize("looking for a rust engineer in SF", &lexicon);

		assert_eq!(tokens, ["rust", "engineer", "sf"]);
	}

	#[test]
	fn tokenize_deduplicates_preserving_order() {
		let lexicon = Lexicon::builtin();
		let tokens = tokenize("rust rust python rust", &lexicon);

		assert_eq!(tokens, ["rust", "python"]);
	}

	#[test]
	fn normalize_text_folds_compatibility_forms() {
		assert_eq!(normalize_text("Ｓｔａｎｆｏｒｄ "), "stanford");
		assert_eq!(normalize_text("  Goldman Sachs"), "goldman sachs");
	}
}
