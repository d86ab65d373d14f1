mod defaults;
mod error;

pub use error::{Error, Result};

use std::{
	collections::{BTreeMap, HashMap, HashSet},
	fs,
	path::Path,
};

use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
	Company,
	Role,
	School,
	Skill,
}
impl EntityKind {
	pub const ALL: [Self; 4] = [Self::Company, Self::Role, Self::School, Self::Skill];

	pub fn label(self) -> &'static str {
		match self {
			Self::Company => "company",
			Self::Role => "role",
			Self::School => "school",
			Self::Skill => "skill",
		}
	}
}

/// Raw dictionary tables as they appear in a lexicon TOML file. All sections
/// are optional; omitted sections fall back to empty, not to the built-ins.
#[derive(Debug, Default, Deserialize)]
pub struct LexiconTables {
	#[serde(default)]
	pub companies: Vec<String>,
	#[serde(default)]
	pub roles: Vec<String>,
	#[serde(default)]
	pub schools: Vec<String>,
	#[serde(default)]
	pub skills: Vec<String>,
	#[serde(default)]
	pub stop_words: Vec<String>,
	#[serde(default)]
	pub synonyms: BTreeMap<String, Vec<String>>,
	#[serde(default)]
	pub concepts: BTreeMap<String, Vec<String>>,
}

/// One gazetteer: exact single-token membership plus the multi-word entries
/// used for phrase-first matching.
#[derive(Debug)]
pub struct Dictionary {
	terms: HashSet<String>,
	phrases: Vec<String>,
}
impl Dictionary {
	fn build(entries: &[String]) -> Self {
		let mut terms = HashSet::new();
		let mut phrases = Vec::new();

		for entry in entries {
			let normalized = normalize_entry(entry);

			if normalized.is_empty() {
				continue;
			}
			if normalized.contains(' ') && !phrases.contains(&normalized) {
				phrases.push(normalized.clone());
			}

			terms.insert(normalized);
		}

		// Longest first so "senior product manager" consumes its words before
		// "product manager" is considered.
		phrases.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

		Self { terms, phrases }
	}

	pub fn contains(&self, term: &str) -> bool {
		self.terms.contains(term)
	}

	pub fn phrases(&self) -> &[String] {
		&self.phrases
	}

	pub fn len(&self) -> usize {
		self.terms.len()
	}

	pub fn is_empty(&self) -> bool {
		self.terms.is_empty()
	}
}

/// Immutable reference data for the parser: four entity gazetteers, the
/// stop-word set, the synonym graph (with a reverse index prebuilt at
/// construction), and the concept-tag table. Shared freely across concurrent
/// searches; nothing here mutates after construction.
#[derive(Debug)]
pub struct Lexicon {
	companies: Dictionary,
	roles: Dictionary,
	schools: Dictionary,
	skills: Dictionary,
	stop_words: HashSet<String>,
	synonyms: BTreeMap<String, Vec<String>>,
	synonym_reverse: HashMap<String, Vec<String>>,
	concepts: Vec<(String, Vec<String>)>,
}
impl Lexicon {
	pub fn builtin() -> Self {
		let owned = |entries: &[&str]| entries.iter().map(|s| s.to_string()).collect::<Vec<_>>();
		let tables = LexiconTables {
			companies: owned(defaults::COMPANIES),
			roles: owned(defaults::ROLES),
			schools: owned(defaults::SCHOOLS),
			skills: owned(defaults::SKILLS),
			stop_words: owned(defaults::STOP_WORDS),
			synonyms: defaults::SYNONYMS
				.iter()
				.map(|(key, values)| (key.to_string(), owned(values)))
				.collect(),
			concepts: defaults::CONCEPTS
				.iter()
				.map(|(key, values)| (key.to_string(), owned(values)))
				.collect(),
		};

		Self::from_tables(tables)
	}

	pub fn from_tables(tables: LexiconTables) -> Self {
		let synonyms: BTreeMap<String, Vec<String>> = tables
			.synonyms
			.into_iter()
			.map(|(key, values)| {
				(normalize_entry(&key), values.iter().map(|v| normalize_entry(v)).collect())
			})
			.collect();
		let synonym_reverse = build_reverse_index(&synonyms);
		let concepts = tables
			.concepts
			.into_iter()
			.map(|(key, values)| {
				(normalize_entry(&key), values.iter().map(|v| normalize_entry(v)).collect())
			})
			.collect();

		Self {
			companies: Dictionary::build(&tables.companies),
			roles: Dictionary::build(&tables.roles),
			schools: Dictionary::build(&tables.schools),
			skills: Dictionary::build(&tables.skills),
			stop_words: tables.stop_words.iter().map(|word| normalize_entry(word)).collect(),
			synonyms,
			synonym_reverse,
			concepts,
		}
	}

	pub fn dictionary(&self, kind: EntityKind) -> &Dictionary {
		match kind {
			EntityKind::Company => &self.companies,
			EntityKind::Role => &self.roles,
			EntityKind::School => &self.schools,
			EntityKind::Skill => &self.skills,
		}
	}

	pub fn is_stop_word(&self, token: &str) -> bool {
		self.stop_words.contains(token)
	}

	/// Forward synonym lookup: terms the given abbreviation/variant maps to.
	pub fn synonyms_of(&self, term: &str) -> Option<&[String]> {
		self.synonyms.get(term).map(Vec::as_slice)
	}

	/// Reverse synonym lookup: keys whose value list contains the given term.
	/// Prebuilt at construction, so expansion is a map hit rather than a scan
	/// over the whole table.
	pub fn synonym_keys_for(&self, term: &str) -> Option<&[String]> {
		self.synonym_reverse.get(term).map(Vec::as_slice)
	}

	/// Concept table in deterministic (key-sorted) order.
	pub fn concepts(&self) -> &[(String, Vec<String>)] {
		&self.concepts
	}
}

/// Load a lexicon from a TOML file. The file replaces the built-in tables
/// wholesale; it is not merged with them.
pub fn load(path: &Path) -> Result<Lexicon> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadLexicon { path: path.to_path_buf(), source: err })?;
	let tables: LexiconTables = toml::from_str(&raw)
		.map_err(|err| Error::ParseLexicon { path: path.to_path_buf(), source: err })?;

	validate(&tables)?;

	Ok(Lexicon::from_tables(tables))
}

pub fn validate(tables: &LexiconTables) -> Result<()> {
	for (label, entries) in [
		("companies", &tables.companies),
		("roles", &tables.roles),
		("schools", &tables.schools),
		("skills", &tables.skills),
	] {
		if entries.is_empty() {
			return Err(Error::Validation { message: format!("{label} must be non-empty.") });
		}
	}

	for (key, values) in &tables.synonyms {
		if values.is_empty() {
			return Err(Error::Validation {
				message: format!("synonyms.{key} must map to at least one term."),
			});
		}
	}
	for (key, values) in &tables.concepts {
		if values.is_empty() {
			return Err(Error::Validation {
				message: format!("concepts.{key} must expand to at least one term."),
			});
		}
	}

	Ok(())
}

fn normalize_entry(entry: &str) -> String {
	entry.trim().to_lowercase()
}

fn build_reverse_index(synonyms: &BTreeMap<String, Vec<String>>) -> HashMap<String, Vec<String>> {
	let mut reverse: HashMap<String, Vec<String>> = HashMap::new();

	for (key, values) in synonyms {
		for value in values {
			let keys = reverse.entry(value.clone()).or_default();

			if !keys.contains(key) {
				keys.push(key.clone());
			}
		}
	}

	// BTreeMap iteration already yields keys in order, so each entry's key
	// list is sorted without a second pass.
	reverse
}
