//! Query understanding and the candidate profile model.
//!
//! The parser turns one free-text query into a [`ParsedQuery`]: filtered
//! tokens, gazetteer entities with fuzzy fallback, trigger-word modifiers,
//! and synonym/concept expansions. Everything here is pure and infallible;
//! ranking and collaborator I/O live in `scout-service`.

pub mod entities;
pub mod fuzzy;
pub mod modifiers;
pub mod parser;
pub mod profile;
pub mod tokenize;

pub use entities::QueryEntities;
pub use modifiers::QueryModifiers;
pub use parser::{ParsedQuery, Parser};
pub use profile::{BadgeStatus, Candidate, Education, Intention, ProfileRecord, WorkExperience};
