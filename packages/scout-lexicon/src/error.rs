pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read lexicon file at {path:?}.")]
	ReadLexicon { path: std::path::PathBuf, source: std::io::Error },
	#[error("Failed to parse lexicon file at {path:?}.")]
	ParseLexicon { path: std::path::PathBuf, source: toml::de::Error },
	#[error("{message}")]
	Validation { message: String },
}
