//! Edit-distance similarity used for misspelled entity phrases and
//! school-name variant matching.

/// Edit distance with adjacent transpositions counted as a single edit
/// (optimal string alignment). Transposition typos ("stanfrod") are the most
/// common kind in fast-typed queries, and plain Levenshtein would charge them
/// double and push them below the match threshold.
pub fn edit_distance(a: &str, b: &str) -> usize {
	let a: Vec<char> = a.chars().collect();
	let b: Vec<char> = b.chars().collect();

	if a.is_empty() {
		return b.len();
	}
	if b.is_empty() {
		return a.len();
	}

	let mut two_back: Vec<usize> = vec![0; b.len() + 1];
	let mut previous: Vec<usize> = (0..=b.len()).collect();
	let mut current = vec![0; b.len() + 1];

	for (i, &ca) in a.iter().enumerate() {
		current[0] = i + 1;

		for (j, &cb) in b.iter().enumerate() {
			let substitution = previous[j] + usize::from(ca != cb);
			let mut best = substitution.min(previous[j + 1] + 1).min(current[j] + 1);

			if i > 0 && j > 0 && ca == b[j - 1] && a[i - 1] == cb {
				best = best.min(two_back[j - 1] + 1);
			}

			current[j + 1] = best;
		}

		std::mem::swap(&mut two_back, &mut previous);
		std::mem::swap(&mut previous, &mut current);
	}

	previous[b.len()]
}

/// Normalized similarity in `[0, 1]`: `(max_len - distance) / max_len`.
/// Two empty strings are identical, hence `1.0`.
pub fn similarity(a: &str, b: &str) -> f32 {
	let max_len = a.chars().count().max(b.chars().count());

	if max_len == 0 {
		return 1.;
	}

	(max_len - edit_distance(a, b)) as f32 / max_len as f32
}

/// Word-level match used during fuzzy phrase extraction: identical, or
/// similar beyond the configured threshold.
pub fn words_match(query_word: &str, phrase_word: &str, threshold: f32) -> bool {
	query_word == phrase_word || similarity(query_word, phrase_word) > threshold
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn distance_counts_single_edits() {
		assert_eq!(edit_distance("google", "google"), 0);
		assert_eq!(edit_distance("stanford", "stanfod"), 1);
		assert_eq!(edit_distance("", "abc"), 3);
	}

	#[test]
	fn transpositions_cost_one_edit() {
		assert_eq!(edit_distance("stanford", "stanfrod"), 1);
		assert_eq!(edit_distance("google", "googel"), 1);
	}

	#[test]
	fn similarity_is_normalized() {
		assert_eq!(similarity("", ""), 1.);
		assert_eq!(similarity("abcd", "abcd"), 1.);
		assert_eq!(similarity("abcd", "wxyz"), 0.);
	}

	#[test]
	fn one_character_typos_clear_the_phrase_threshold() {
		assert!(words_match("stanfrod", "stanford", 0.85));
		assert!(words_match("pennsylvannia", "pennsylvania", 0.85));
		assert!(!words_match("harvard", "stanford", 0.85));
	}
}
