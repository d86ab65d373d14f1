//! People-search orchestration. One [`ScoutService::search`] call runs the
//! whole pipeline: parse the query, fetch the recommendation pool, validate
//! candidates against the profile store, score, blend, and truncate.
//!
//! Collaborators are injected as trait objects so tests can swap in static
//! mocks; [`Providers::default`] wires the HTTP clients.

pub mod search;

use std::{collections::HashMap, future::Future, path::Path, pin::Pin, sync::Arc};

use uuid::Uuid;

pub use search::{
	ScoreBreakdown, SearchItem, SearchRequest, SearchResponse, SearchStatus, adjust_weights,
};

use scout_config::{Config, ProviderConfig};
use scout_domain::{BadgeStatus, Candidate, Parser, ProfileRecord};
use scout_lexicon::Lexicon;
use scout_providers::{badges, profiles, recommendation};

pub type ServiceResult<T> = Result<T, ServiceError>;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub trait RecommendationProvider
where
	Self: Send + Sync,
{
	fn get_recommendations<'a>(
		&'a self,
		cfg: &'a ProviderConfig,
		user_id: Uuid,
		limit: u32,
		force_refresh: bool,
	) -> BoxFuture<'a, color_eyre::Result<Vec<Candidate>>>;
}

pub trait ProfileProvider
where
	Self: Send + Sync,
{
	fn get_profiles_batch<'a>(
		&'a self,
		cfg: &'a ProviderConfig,
		ids: &'a [Uuid],
	) -> BoxFuture<'a, color_eyre::Result<HashMap<Uuid, ProfileRecord>>>;
}

pub trait BadgeProvider
where
	Self: Send + Sync,
{
	fn get_badges_batch<'a>(
		&'a self,
		cfg: &'a ProviderConfig,
		ids: &'a [Uuid],
	) -> BoxFuture<'a, color_eyre::Result<HashMap<Uuid, BadgeStatus>>>;
}

#[derive(Debug)]
pub enum ServiceError {
	InvalidRequest { message: String },
	/// Recommendation or profile-store failure. Terminal; never degraded
	/// into partial results.
	CollaboratorUnavailable { collaborator: &'static str, message: String },
	Lexicon { message: String },
}

struct DefaultProviders;

impl std::fmt::Display for ServiceError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::InvalidRequest { message } => write!(f, "Invalid request: {message}"),
			Self::CollaboratorUnavailable { collaborator, message } => {
				write!(f, "Collaborator {collaborator} unavailable: {message}")
			},
			Self::Lexicon { message } => write!(f, "Lexicon error: {message}"),
		}
	}
}

impl std::error::Error for ServiceError {}

impl RecommendationProvider for DefaultProviders {
	fn get_recommendations<'a>(
		&'a self,
		cfg: &'a ProviderConfig,
		user_id: Uuid,
		limit: u32,
		force_refresh: bool,
	) -> BoxFuture<'a, color_eyre::Result<Vec<Candidate>>> {
		Box::pin(recommendation::get_recommendations(cfg, user_id, limit, force_refresh))
	}
}

impl ProfileProvider for DefaultProviders {
	fn get_profiles_batch<'a>(
		&'a self,
		cfg: &'a ProviderConfig,
		ids: &'a [Uuid],
	) -> BoxFuture<'a, color_eyre::Result<HashMap<Uuid, ProfileRecord>>> {
		Box::pin(profiles::get_profiles_batch(cfg, ids))
	}
}

impl BadgeProvider for DefaultProviders {
	fn get_badges_batch<'a>(
		&'a self,
		cfg: &'a ProviderConfig,
		ids: &'a [Uuid],
	) -> BoxFuture<'a, color_eyre::Result<HashMap<Uuid, BadgeStatus>>> {
		Box::pin(badges::get_badges_batch(cfg, ids))
	}
}

#[derive(Clone)]
pub struct Providers {
	pub recommendation: Arc<dyn RecommendationProvider>,
	pub profiles: Arc<dyn ProfileProvider>,
	pub badges: Arc<dyn BadgeProvider>,
}
impl Providers {
	pub fn new(
		recommendation: Arc<dyn RecommendationProvider>,
		profiles: Arc<dyn ProfileProvider>,
		badges: Arc<dyn BadgeProvider>,
	) -> Self {
		Self { recommendation, profiles, badges }
	}
}

impl Default for Providers {
	fn default() -> Self {
		let provider = Arc::new(DefaultProviders);
		Self { recommendation: provider.clone(), profiles: provider.clone(), badges: provider }
	}
}

pub struct ScoutService {
	pub cfg: Config,
	pub parser: Parser,
	pub providers: Providers,
}
impl ScoutService {
	pub fn new(cfg: Config) -> ServiceResult<Self> {
		Self::with_providers(cfg, Providers::default())
	}

	pub fn with_providers(cfg: Config, providers: Providers) -> ServiceResult<Self> {
		let lexicon = match cfg.lexicon.as_ref().and_then(|lexicon| lexicon.path.as_deref()) {
			Some(path) => scout_lexicon::load(Path::new(path))
				.map_err(|err| ServiceError::Lexicon { message: err.to_string() })?,
			None => Lexicon::builtin(),
		};
		let parser =
			Parser::with_fuzzy_threshold(Arc::new(lexicon), cfg.search.fuzzy_word_threshold);

		Ok(Self { cfg, parser, providers })
	}
}
