//! Collaborator doubles for exercising the search pipeline without HTTP.
//! Static providers return canned data; failing providers simulate outages.

use std::{
	collections::HashMap,
	sync::atomic::{AtomicUsize, Ordering},
};

use uuid::Uuid;

use scout_config::{Config, ProviderConfig, Providers, Search, Service};
use scout_domain::{BadgeStatus, Candidate, ProfileRecord};
use scout_service::{BadgeProvider, BoxFuture, ProfileProvider, RecommendationProvider};

/// A config wired to unreachable endpoints; fine for tests that inject
/// static providers and never touch the network.
pub fn sample_config() -> Config {
	let provider = |path: &str| ProviderConfig {
		api_base: "http://localhost:0".to_string(),
		api_key: "test-key".to_string(),
		path: path.to_string(),
		timeout_ms: 1_000,
		default_headers: serde_json::Map::new(),
	};

	Config {
		service: Service { log_level: "info".to_string() },
		providers: Providers {
			recommendation: provider("/v1/recommendations"),
			profiles: provider("/v1/profiles/batch"),
			badges: provider("/v1/badges/batch"),
		},
		search: Search {
			pool_size: 25,
			top_k: 5,
			fuzzy_word_threshold: 0.85,
			school_similarity_threshold: 0.8,
		},
		scoring: Default::default(),
		weights: Default::default(),
		lexicon: None,
	}
}

pub struct StaticRecommendations {
	pub pool: Vec<Candidate>,
}
impl RecommendationProvider for StaticRecommendations {
	fn get_recommendations<'a>(
		&'a self,
		_cfg: &'a ProviderConfig,
		_user_id: Uuid,
		_limit: u32,
		_force_refresh: bool,
	) -> BoxFuture<'a, color_eyre::Result<Vec<Candidate>>> {
		Box::pin(async move { Ok(self.pool.clone()) })
	}
}

pub struct StaticProfiles {
	pub profiles: HashMap<Uuid, ProfileRecord>,
}
impl StaticProfiles {
	pub fn of(profiles: impl IntoIterator<Item = ProfileRecord>) -> Self {
		Self { profiles: profiles.into_iter().map(|profile| (profile.id, profile)).collect() }
	}
}
impl ProfileProvider for StaticProfiles {
	fn get_profiles_batch<'a>(
		&'a self,
		_cfg: &'a ProviderConfig,
		ids: &'a [Uuid],
	) -> BoxFuture<'a, color_eyre::Result<HashMap<Uuid, ProfileRecord>>> {
		Box::pin(async move {
			Ok(ids
				.iter()
				.filter_map(|id| self.profiles.get(id).map(|profile| (*id, profile.clone())))
				.collect())
		})
	}
}

pub struct StaticBadges {
	pub badges: HashMap<Uuid, BadgeStatus>,
}
impl BadgeProvider for StaticBadges {
	fn get_badges_batch<'a>(
		&'a self,
		_cfg: &'a ProviderConfig,
		ids: &'a [Uuid],
	) -> BoxFuture<'a, color_eyre::Result<HashMap<Uuid, BadgeStatus>>> {
		Box::pin(async move {
			Ok(ids
				.iter()
				.filter_map(|id| self.badges.get(id).map(|status| (*id, *status)))
				.collect())
		})
	}
}

/// Profiles that resolve on the first batch call and are gone from every
/// later one, simulating deletion while a search is in flight.
pub struct VanishingProfiles {
	profiles: HashMap<Uuid, ProfileRecord>,
	vanishing: Vec<Uuid>,
	calls: AtomicUsize,
}
impl VanishingProfiles {
	pub fn of(profiles: impl IntoIterator<Item = ProfileRecord>, vanishing: Vec<Uuid>) -> Self {
		Self {
			profiles: profiles.into_iter().map(|profile| (profile.id, profile)).collect(),
			vanishing,
			calls: AtomicUsize::new(0),
		}
	}
}
impl ProfileProvider for VanishingProfiles {
	fn get_profiles_batch<'a>(
		&'a self,
		_cfg: &'a ProviderConfig,
		ids: &'a [Uuid],
	) -> BoxFuture<'a, color_eyre::Result<HashMap<Uuid, ProfileRecord>>> {
		let call = self.calls.fetch_add(1, Ordering::SeqCst);

		Box::pin(async move {
			Ok(ids
				.iter()
				.filter(|id| call == 0 || !self.vanishing.contains(id))
				.filter_map(|id| self.profiles.get(id).map(|profile| (*id, profile.clone())))
				.collect())
		})
	}
}

pub struct FailingRecommendations;
impl RecommendationProvider for FailingRecommendations {
	fn get_recommendations<'a>(
		&'a self,
		_cfg: &'a ProviderConfig,
		_user_id: Uuid,
		_limit: u32,
		_force_refresh: bool,
	) -> BoxFuture<'a, color_eyre::Result<Vec<Candidate>>> {
		Box::pin(async { Err(color_eyre::eyre::eyre!("recommendation backend down")) })
	}
}

pub struct FailingBadges;
impl BadgeProvider for FailingBadges {
	fn get_badges_batch<'a>(
		&'a self,
		_cfg: &'a ProviderConfig,
		_ids: &'a [Uuid],
	) -> BoxFuture<'a, color_eyre::Result<HashMap<Uuid, BadgeStatus>>> {
		Box::pin(async { Err(color_eyre::eyre::eyre!("badge backend down")) })
	}
}

pub fn profile(name: &str) -> ProfileRecord {
	ProfileRecord { id: Uuid::new_v4(), name: name.to_string(), ..ProfileRecord::default() }
}

pub fn candidate(profile: ProfileRecord, score: f32) -> Candidate {
	Candidate { id: profile.id, score, profile }
}
