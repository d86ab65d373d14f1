//! Read-side profile model. The profile store owns the canonical shape;
//! ranking only needs the searchable zones and a few structured fields.

// crates.io
use serde::{Deserialize, Serialize};
use uuid::Uuid;
// self
use crate::tokenize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Intention {
	Mentoring,
	SeekingMentor,
	Networking,
	Cofounding,
	Hiring,
	JobSeeking,
	#[default]
	Unspecified,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
	pub school_name: String,
	pub degree: String,
	pub field_of_study: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkExperience {
	pub company: String,
	pub title: String,
	pub highlights: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileRecord {
	pub id: Uuid,
	pub name: String,
	pub bio: String,
	pub location: String,
	pub current_company: String,
	pub job_title: String,
	pub industry: String,
	pub career_stage: String,
	pub intention: Intention,
	pub years_of_experience: f32,
	pub educations: Vec<Education>,
	pub work_experiences: Vec<WorkExperience>,
	pub skills: Vec<String>,
	pub certifications: Vec<String>,
	pub languages: Vec<String>,
	pub hobbies: Vec<String>,
	pub values: Vec<String>,
	pub self_introduction: String,
}
impl ProfileRecord {
	/// Name, bio, and location. Matches here are weak relevance evidence.
	pub fn identity_zone(&self) -> String {
		tokenize::normalize_text(&join(&[&self.name, &self.bio, &self.location]))
	}

	/// Company, title, industry, career stage, and an education summary.
	/// The strongest zone for recruiting-style queries.
	pub fn professional_zone(&self) -> String {
		let mut parts: Vec<&str> =
			vec![&self.current_company, &self.job_title, &self.industry, &self.career_stage];

		for education in &self.educations {
			parts.extend([
				education.school_name.as_str(),
				education.degree.as_str(),
				education.field_of_study.as_str(),
			]);
		}
		for work in &self.work_experiences {
			parts.extend([work.company.as_str(), work.title.as_str()]);
		}

		tokenize::normalize_text(&join(&parts))
	}

	/// Skills, certifications, languages, hobbies, values, the
	/// self-introduction, and work highlights.
	pub fn interests_zone(&self) -> String {
		let mut parts: Vec<&str> = Vec::new();

		for list in
			[&self.skills, &self.certifications, &self.languages, &self.hobbies, &self.values]
		{
			parts.extend(list.iter().map(String::as_str));
		}

		parts.push(self.self_introduction.as_str());

		for work in &self.work_experiences {
			parts.extend(work.highlights.iter().map(String::as_str));
		}

		tokenize::normalize_text(&join(&parts))
	}

	/// All zones concatenated; used for negation scanning, where any mention
	/// anywhere counts.
	pub fn searchable_text(&self) -> String {
		join(&[&self.identity_zone(), &self.professional_zone(), &self.interests_zone()])
	}
}

/// Pro/verification flags from the badge service. `None` means the lookup
/// failed or never ran; callers render it as "status unknown".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BadgeStatus {
	pub pro: Option<bool>,
	pub verified: Option<bool>,
}

/// One candidate from the recommendation pool: the profile plus its
/// upstream baseline affinity score.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
	pub id: Uuid,
	pub score: f32,
	pub profile: ProfileRecord,
}

fn join(parts: &[&str]) -> String {
	parts.iter().filter(|part| !part.is_empty()).copied().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
	use super::*;

	fn profile() -> ProfileRecord {
		ProfileRecord {
			name: "Ada".to_string(),
			bio: "Compilers nerd".to_string(),
			location: "Zurich".to_string(),
			current_company: "Google".to_string(),
			job_title: "Software Engineer".to_string(),
			educations: vec![Education {
				school_name: "Stanford University".to_string(),
				..Education::default()
			}],
			skills: vec!["Rust".to_string(), "Distributed Systems".to_string()],
			..ProfileRecord::default()
		}
	}

	#[test]
	fn zones_are_lowercased_and_disjoint_by_field() {
		let profile = profile();

		assert!(profile.identity_zone().contains("compilers nerd"));
		assert!(!profile.identity_zone().contains("google"));
		assert!(profile.professional_zone().contains("google"));
		assert!(profile.professional_zone().contains("stanford university"));
		assert!(profile.interests_zone().contains("rust"));
	}

	#[test]
	fn searchable_text_spans_all_zones() {
		let text = profile().searchable_text();

		assert!(text.contains("zurich"));
		assert!(text.contains("software engineer"));
		assert!(text.contains("distributed systems"));
	}

	#[test]
	fn profile_deserializes_from_camel_case_with_defaults() {
		let profile: ProfileRecord = serde_json::from_str(
			r#"{"name":"Ada","currentCompany":"Google","yearsOfExperience":3.5,"intention":"mentoring"}"#,
		)
		.unwrap();

		assert_eq!(profile.current_company, "Google");
		assert_eq!(profile.years_of_experience, 3.5);
		assert_eq!(profile.intention, Intention::Mentoring);
		assert!(profile.educations.is_empty());
	}
}
