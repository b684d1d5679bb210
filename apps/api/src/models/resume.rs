use serde::{Deserialize, Serialize};

/// Year sentinel for an ongoing position. Only valid as a work `endYear`.
pub const PRESENT: &str = "Present";

/// Labels of the fixed profile links offered on a fresh resume.
pub const DEFAULT_LINK_NAMES: &[&str] = &["LinkedIn", "Stack Overflow"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalDetails {
    pub name: String,
    /// Optional professional title, at most 200 characters.
    #[serde(default)]
    pub title: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    /// Fixed label shown next to the input, e.g. "LinkedIn".
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl Link {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            url: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_month: String,
    pub start_year: String,
    /// Always empty while `end_year` is [`PRESENT`].
    pub end_month: String,
    pub end_year: String,
    /// Rich-text markup, one entry per bullet.
    pub responsibilities: Vec<String>,
}

impl WorkExperience {
    /// A placeholder row as the form creates it: one empty responsibility.
    pub fn blank() -> Self {
        Self {
            responsibilities: vec![String::new()],
            ..Self::default()
        }
    }

    pub fn is_current(&self) -> bool {
        self.end_year == PRESENT
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub location: String,
    pub year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl Education {
    pub fn blank() -> Self {
        Self {
            details: Some(vec![String::new()]),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Award {
    pub title: String,
    pub month: String,
    /// Calendar year; [`PRESENT`] is never a valid award year.
    pub year: String,
    pub company: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PastOrganization {
    pub company: String,
    pub position: String,
    pub duration: String,
}

/// Full snapshot of the builder form. Lives only in memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    pub personal_details: PersonalDetails,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub work_experience: Vec<WorkExperience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub awards: Vec<Award>,
    #[serde(default)]
    pub past_organizations: Vec<PastOrganization>,
}

impl Default for ResumeData {
    /// The state a fresh form starts in: one empty row per repeatable section.
    fn default() -> Self {
        Self {
            personal_details: PersonalDetails::default(),
            links: DEFAULT_LINK_NAMES.iter().map(|n| Link::named(n)).collect(),
            skills: vec![String::new()],
            languages: vec![String::new()],
            work_experience: vec![WorkExperience::blank()],
            education: vec![Education::blank()],
            awards: vec![Award::default()],
            past_organizations: vec![PastOrganization::default()],
        }
    }
}
