//! Resume validation engine: a pure transform from a `ResumeData` snapshot
//! to a map of field keys to user-facing messages.
//!
//! Every rule runs on every call and reports independently, so the caller can
//! surface all problems at once. An empty map means the resume may be exported.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::resume::{Award, Link, PersonalDetails, ResumeData, WorkExperience, PRESENT};
use crate::resume::markup::is_blank_markup;

pub const NAME_MIN_CHARS: usize = 2;
pub const ADDRESS_MIN_CHARS: usize = 5;
pub const TITLE_MAX_CHARS: usize = 200;

pub const WORK_KEY_PREFIX: &str = "work_";
pub const AWARD_KEY_PREFIX: &str = "award_";

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("name pattern must compile"));
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern must compile"));
// Counts '-', '(' and ')' toward the 10-character minimum, not only digits.
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+]?[-0-9()]{10,}$").expect("phone pattern must compile"));
static URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://.+\..+").expect("url pattern must compile"));

/// Which family of rule a violation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    Required,
    Format,
    Length,
    IncompleteDate,
    AllBlank,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub key: String,
    pub message: String,
    pub kind: ViolationKind,
}

/// Field key -> message. Serializes as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<String, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.0.insert(key.into(), message.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Drops one key. Returns whether it was present.
    pub fn clear(&mut self, key: &str) -> bool {
        self.0.remove(key).is_some()
    }

    /// Drops every key starting with `prefix`.
    pub fn clear_prefix(&mut self, prefix: &str) {
        self.0.retain(|key, _| !key.starts_with(prefix));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<Violation> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = Violation>>(iter: I) -> Self {
        Self(iter.into_iter().map(|v| (v.key, v.message)).collect())
    }
}

/// Per-entry work experience keys: `work_{field}_{index}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkField {
    Company,
    Position,
    Location,
    StartDate,
    EndDate,
    Responsibilities,
}

impl WorkField {
    pub fn as_str(self) -> &'static str {
        match self {
            WorkField::Company => "company",
            WorkField::Position => "position",
            WorkField::Location => "location",
            WorkField::StartDate => "startDate",
            WorkField::EndDate => "endDate",
            WorkField::Responsibilities => "responsibilities",
        }
    }

    pub fn key(self, index: usize) -> String {
        format!("{WORK_KEY_PREFIX}{}_{index}", self.as_str())
    }
}

/// Per-entry award keys: `award_{field}_{index}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AwardField {
    Title,
    Date,
    Company,
}

impl AwardField {
    pub fn as_str(self) -> &'static str {
        match self {
            AwardField::Title => "title",
            AwardField::Date => "date",
            AwardField::Company => "company",
        }
    }

    pub fn key(self, index: usize) -> String {
        format!("{AWARD_KEY_PREFIX}{}_{index}", self.as_str())
    }
}

pub fn link_key(index: usize) -> String {
    format!("link_{index}")
}

/// Outcome of one full validation run, shaped for the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// True exactly when `errors` is empty; gates export.
    pub is_valid: bool,
    pub errors: ErrorMap,
    /// Rule family of each key in `errors`.
    pub kinds: BTreeMap<String, ViolationKind>,
}

impl From<Vec<Violation>> for ValidationReport {
    fn from(violations: Vec<Violation>) -> Self {
        let kinds = violations
            .iter()
            .map(|v| (v.key.clone(), v.kind))
            .collect();
        let errors: ErrorMap = violations.into_iter().collect();
        Self {
            is_valid: errors.is_empty(),
            errors,
            kinds,
        }
    }
}

/// Runs every rule and keeps both the messages and their rule families.
pub fn report(data: &ResumeData) -> ValidationReport {
    violations(data).into()
}

/// Runs every rule against the snapshot. Never fails.
pub fn validate(data: &ResumeData) -> ErrorMap {
    report(data).errors
}

/// Export gate used by the print collaborator.
pub fn is_valid(data: &ResumeData) -> bool {
    report(data).is_valid
}

/// Same result as [`validate`], with each entry tagged by rule family.
pub fn violations(data: &ResumeData) -> Vec<Violation> {
    let mut out = Vec::new();

    check_personal_details(&data.personal_details, &mut out);
    check_links(&data.links, &mut out);
    check_not_all_blank(
        &data.skills,
        "skills",
        "Please add at least one skill or remove empty skill fields",
        &mut out,
    );
    check_not_all_blank(
        &data.languages,
        "languages",
        "Please add at least one language or remove empty language fields",
        &mut out,
    );
    for (index, exp) in data.work_experience.iter().enumerate() {
        check_work_experience(index, exp, &mut out);
    }
    for (index, award) in data.awards.iter().enumerate() {
        check_award(index, award, &mut out);
    }

    out
}

fn push(out: &mut Vec<Violation>, key: impl Into<String>, kind: ViolationKind, message: &str) {
    out.push(Violation {
        key: key.into(),
        message: message.to_string(),
        kind,
    });
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn check_personal_details(details: &PersonalDetails, out: &mut Vec<Violation>) {
    // Format checks only run once the required check passes.
    let name = details.name.trim();
    if name.is_empty() {
        push(out, "name", ViolationKind::Required, "Name is required");
    } else if name.chars().count() < NAME_MIN_CHARS {
        push(
            out,
            "name",
            ViolationKind::Length,
            "Name must be at least 2 characters",
        );
    } else if !NAME_REGEX.is_match(&details.name) {
        push(
            out,
            "name",
            ViolationKind::Format,
            "Name can only contain letters and spaces",
        );
    }

    if is_blank(&details.email) {
        push(out, "email", ViolationKind::Required, "Email is required");
    } else if !EMAIL_REGEX.is_match(&details.email) {
        push(
            out,
            "email",
            ViolationKind::Format,
            "Please enter a valid email address",
        );
    }

    if is_blank(&details.phone) {
        push(out, "phone", ViolationKind::Required, "Phone number is required");
    } else {
        let compact: String = details.phone.chars().filter(|c| !c.is_whitespace()).collect();
        if !PHONE_REGEX.is_match(&compact) {
            push(
                out,
                "phone",
                ViolationKind::Format,
                "Please enter a valid phone number (minimum 10 digits)",
            );
        }
    }

    let address = details.address.trim();
    if address.is_empty() {
        push(out, "address", ViolationKind::Required, "Address is required");
    } else if address.chars().count() < ADDRESS_MIN_CHARS {
        push(
            out,
            "address",
            ViolationKind::Length,
            "Please enter a complete address",
        );
    }

    // Counted in Unicode scalar values, so a character outside the BMP counts
    // once here where a UTF-16 length would count it twice.
    if !details.title.is_empty() && details.title.chars().count() > TITLE_MAX_CHARS {
        push(
            out,
            "title",
            ViolationKind::Length,
            "Professional title should not exceed 200 characters",
        );
    }
}

fn check_links(links: &[Link], out: &mut Vec<Violation>) {
    for (index, link) in links.iter().enumerate() {
        if !link.url.is_empty() && !URL_REGEX.is_match(&link.url) {
            out.push(Violation {
                key: link_key(index),
                message: format!("Please enter a valid URL for {}", link.name),
                kind: ViolationKind::Format,
            });
        }
    }
}

/// An empty list is fine; a list made only of blank rows is not.
fn check_not_all_blank(items: &[String], key: &str, message: &str, out: &mut Vec<Violation>) {
    if !items.is_empty() && items.iter().all(|item| is_blank(item)) {
        push(out, key, ViolationKind::AllBlank, message);
    }
}

fn work_is_untouched(exp: &WorkExperience) -> bool {
    [
        &exp.company,
        &exp.position,
        &exp.location,
        &exp.start_month,
        &exp.start_year,
        &exp.end_month,
        &exp.end_year,
    ]
    .iter()
    .all(|field| is_blank(field))
        && exp.responsibilities.iter().all(|r| is_blank_markup(r))
}

fn check_work_experience(index: usize, exp: &WorkExperience, out: &mut Vec<Violation>) {
    if work_is_untouched(exp) {
        return;
    }

    if is_blank(&exp.company) {
        push(
            out,
            WorkField::Company.key(index),
            ViolationKind::Required,
            "Company name is required for this work experience",
        );
    }
    if is_blank(&exp.position) {
        push(
            out,
            WorkField::Position.key(index),
            ViolationKind::Required,
            "Position is required for this work experience",
        );
    }
    if is_blank(&exp.location) {
        push(
            out,
            WorkField::Location.key(index),
            ViolationKind::Required,
            "Location is required for this work experience",
        );
    }
    if is_blank(&exp.start_month) || is_blank(&exp.start_year) {
        push(
            out,
            WorkField::StartDate.key(index),
            ViolationKind::IncompleteDate,
            "Start date is required for this work experience",
        );
    }
    // "Present" stands in for the whole end date; its month is forced empty.
    let end_complete = exp.is_current() || (!is_blank(&exp.end_month) && !is_blank(&exp.end_year));
    if !end_complete {
        push(
            out,
            WorkField::EndDate.key(index),
            ViolationKind::IncompleteDate,
            "End date is required for this work experience",
        );
    }
    if exp.responsibilities.iter().all(|r| is_blank_markup(r)) {
        push(
            out,
            WorkField::Responsibilities.key(index),
            ViolationKind::Required,
            "At least one responsibility is required for this work experience",
        );
    }
}

fn check_award(index: usize, award: &Award, out: &mut Vec<Violation>) {
    if [&award.title, &award.month, &award.year, &award.company]
        .iter()
        .all(|field| is_blank(field))
    {
        return;
    }

    if is_blank(&award.title) {
        push(
            out,
            AwardField::Title.key(index),
            ViolationKind::Required,
            "Award title is required",
        );
    }
    let year = award.year.trim();
    if is_blank(&award.month) || year.is_empty() || year == PRESENT {
        push(
            out,
            AwardField::Date.key(index),
            ViolationKind::IncompleteDate,
            "Award date is required",
        );
    }
    if is_blank(&award.company) {
        push(
            out,
            AwardField::Company.key(index),
            ViolationKind::Required,
            "Company/Organization name is required",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Education, PastOrganization};

    fn valid_resume() -> ResumeData {
        ResumeData {
            personal_details: PersonalDetails {
                name: "Jane Smith".to_string(),
                title: "Senior Software Engineer".to_string(),
                address: "42 Main Street, Springfield".to_string(),
                phone: "+1 (555) 123-4567".to_string(),
                email: "jane.smith@example.com".to_string(),
            },
            links: vec![
                Link {
                    name: "LinkedIn".to_string(),
                    url: "https://linkedin.com/in/janesmith".to_string(),
                },
                Link::named("Stack Overflow"),
            ],
            skills: vec!["Rust".to_string(), "".to_string()],
            languages: vec!["English".to_string()],
            work_experience: vec![WorkExperience {
                company: "Acme Corp".to_string(),
                position: "Backend Engineer".to_string(),
                location: "Berlin".to_string(),
                start_month: "Mar".to_string(),
                start_year: "2019".to_string(),
                end_month: "Jun".to_string(),
                end_year: "2023".to_string(),
                responsibilities: vec!["<p>Owned the billing pipeline</p>".to_string()],
            }],
            education: vec![Education::blank()],
            awards: vec![Award {
                title: "Engineer of the Year".to_string(),
                month: "Dec".to_string(),
                year: "2022".to_string(),
                company: "Acme Corp".to_string(),
            }],
            past_organizations: vec![PastOrganization::default()],
        }
    }

    #[test]
    fn test_valid_resume_has_no_errors() {
        let errors = validate(&valid_resume());
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
        assert!(is_valid(&valid_resume()));
    }

    #[test]
    fn test_fresh_form_only_reports_personal_and_lists() {
        let errors = validate(&ResumeData::default());
        let keys: Vec<&str> = errors.iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec!["address", "email", "languages", "name", "phone", "skills"]
        );
    }

    #[test]
    fn test_empty_name_is_required() {
        let mut data = valid_resume();
        data.personal_details.name = String::new();
        assert_eq!(validate(&data).get("name"), Some("Name is required"));
    }

    #[test]
    fn test_whitespace_name_is_required_not_format() {
        let mut data = valid_resume();
        data.personal_details.name = "   ".to_string();
        assert_eq!(validate(&data).get("name"), Some("Name is required"));
    }

    #[test]
    fn test_short_name() {
        let mut data = valid_resume();
        data.personal_details.name = " A ".to_string();
        assert_eq!(
            validate(&data).get("name"),
            Some("Name must be at least 2 characters")
        );
    }

    #[test]
    fn test_name_charset() {
        for bad in ["John123", "John@Doe", "O'Connor"] {
            let mut data = valid_resume();
            data.personal_details.name = bad.to_string();
            assert_eq!(
                validate(&data).get("name"),
                Some("Name can only contain letters and spaces"),
                "{bad}"
            );
        }
        for good in ["John Doe", "Mary Jane Watson", "O Connor"] {
            let mut data = valid_resume();
            data.personal_details.name = good.to_string();
            assert!(!validate(&data).contains_key("name"), "{good}");
        }
    }

    #[test]
    fn test_invalid_email() {
        let mut data = valid_resume();
        data.personal_details.email = "invalid-email".to_string();
        assert_eq!(
            validate(&data).get("email"),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn test_email_patterns() {
        for bad in ["test@", "@example.com", "test@example", "a b@c.de"] {
            let mut data = valid_resume();
            data.personal_details.email = bad.to_string();
            assert!(validate(&data).contains_key("email"), "{bad}");
        }
        for good in ["user.name@domain.co.uk", "test+tag@example.org"] {
            let mut data = valid_resume();
            data.personal_details.email = good.to_string();
            assert!(!validate(&data).contains_key("email"), "{good}");
        }
    }

    #[test]
    fn test_empty_email_reports_only_required() {
        let mut data = valid_resume();
        data.personal_details.email = String::new();
        let errors = validate(&data);
        assert_eq!(errors.get("email"), Some("Email is required"));
    }

    #[test]
    fn test_phone_patterns() {
        for good in [
            "1234567890",
            "+1234567890",
            "123-456-7890",
            "(123) 456-7890",
            "123 456 7890",
            "+1 (123) 456-7890",
        ] {
            let mut data = valid_resume();
            data.personal_details.phone = good.to_string();
            assert!(!validate(&data).contains_key("phone"), "{good}");
        }
        for bad in ["123", "12345", "abc1234567", "123456789+"] {
            let mut data = valid_resume();
            data.personal_details.phone = bad.to_string();
            assert_eq!(
                validate(&data).get("phone"),
                Some("Please enter a valid phone number (minimum 10 digits)"),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_phone_counts_punctuation_toward_minimum() {
        // Known looseness: ten symbol characters pass although only six are digits.
        let mut data = valid_resume();
        data.personal_details.phone = "(111)(111)".to_string();
        assert!(!validate(&data).contains_key("phone"));
    }

    #[test]
    fn test_empty_phone_is_required() {
        let mut data = valid_resume();
        data.personal_details.phone = "  ".to_string();
        assert_eq!(validate(&data).get("phone"), Some("Phone number is required"));
    }

    #[test]
    fn test_address_rules() {
        let mut data = valid_resume();
        data.personal_details.address = String::new();
        assert_eq!(validate(&data).get("address"), Some("Address is required"));

        data.personal_details.address = "  123 ".to_string();
        assert_eq!(
            validate(&data).get("address"),
            Some("Please enter a complete address")
        );

        data.personal_details.address = "456 Oak Avenue".to_string();
        assert!(!validate(&data).contains_key("address"));
    }

    #[test]
    fn test_title_length_boundary() {
        let mut data = valid_resume();
        data.personal_details.title = "A".repeat(200);
        assert!(!validate(&data).contains_key("title"));

        data.personal_details.title = "A".repeat(201);
        assert_eq!(
            validate(&data).get("title"),
            Some("Professional title should not exceed 200 characters")
        );

        data.personal_details.title = String::new();
        assert!(!validate(&data).contains_key("title"));
    }

    #[test]
    fn test_title_counts_scalar_values_not_utf16_units() {
        // 150 emoji are 300 UTF-16 units but only 150 chars.
        let mut data = valid_resume();
        data.personal_details.title = "\u{1F680}".repeat(150);
        assert!(!validate(&data).contains_key("title"));

        data.personal_details.title = "\u{1F680}".repeat(201);
        assert!(validate(&data).contains_key("title"));
    }

    #[test]
    fn test_report_agrees_with_validate_and_is_valid() {
        let good = valid_resume();
        let outcome = report(&good);
        assert!(outcome.is_valid);
        assert!(outcome.kinds.is_empty());
        assert_eq!(outcome.is_valid, is_valid(&good));

        let mut bad = valid_resume();
        bad.personal_details.phone = "123".to_string();
        let outcome = report(&bad);
        assert!(!outcome.is_valid);
        assert!(!is_valid(&bad));
        assert_eq!(outcome.errors, validate(&bad));
        assert_eq!(outcome.kinds["phone"], ViolationKind::Format);
    }

    #[test]
    fn test_report_serializes_kinds() {
        let mut data = valid_resume();
        data.skills = vec![String::new()];
        let json = serde_json::to_value(report(&data)).unwrap();
        assert_eq!(json["isValid"], false);
        assert_eq!(json["kinds"]["skills"], "all_blank");
    }

    #[test]
    fn test_link_urls() {
        let mut data = valid_resume();
        data.links[1].url = "www.example.com".to_string();
        assert_eq!(
            validate(&data).get("link_1"),
            Some("Please enter a valid URL for Stack Overflow")
        );

        for bad in ["example.com", "ftp://example.com", "https://"] {
            data.links[0].url = bad.to_string();
            assert!(validate(&data).contains_key("link_0"), "{bad}");
        }
        for good in ["http://example.com", "https://subdomain.example.com/path"] {
            data.links[0].url = good.to_string();
            assert!(!validate(&data).contains_key("link_0"), "{good}");
        }
    }

    #[test]
    fn test_skills_all_blank() {
        let mut data = valid_resume();
        data.skills = vec!["".to_string(), "".to_string()];
        assert_eq!(
            validate(&data).get("skills"),
            Some("Please add at least one skill or remove empty skill fields")
        );

        data.skills = vec!["".to_string(), "Go".to_string()];
        assert!(!validate(&data).contains_key("skills"));

        data.skills.clear();
        assert!(!validate(&data).contains_key("skills"));
    }

    #[test]
    fn test_languages_all_blank() {
        let mut data = valid_resume();
        data.languages = vec!["  ".to_string()];
        assert_eq!(
            validate(&data).get("languages"),
            Some("Please add at least one language or remove empty language fields")
        );
    }

    #[test]
    fn test_blank_work_entry_is_skipped() {
        let mut data = valid_resume();
        data.work_experience.push(WorkExperience::blank());
        let errors = validate(&data);
        assert!(errors.iter().all(|(k, _)| !k.ends_with("_1")), "{errors:?}");
        assert!(errors.is_empty());
    }

    #[test]
    fn test_empty_editor_markup_counts_as_blank_entry() {
        let mut data = valid_resume();
        data.work_experience[0] = WorkExperience {
            responsibilities: vec!["<p><br></p>".to_string()],
            ..WorkExperience::default()
        };
        assert!(validate(&data).is_empty());
    }

    #[test]
    fn test_partial_work_entry_reports_every_missing_field() {
        let mut data = valid_resume();
        data.work_experience[0] = WorkExperience {
            company: "Acme".to_string(),
            ..WorkExperience::blank()
        };
        let errors = validate(&data);
        assert!(!errors.contains_key("work_company_0"));
        assert_eq!(
            errors.get("work_position_0"),
            Some("Position is required for this work experience")
        );
        assert_eq!(
            errors.get("work_location_0"),
            Some("Location is required for this work experience")
        );
        assert_eq!(
            errors.get("work_startDate_0"),
            Some("Start date is required for this work experience")
        );
        assert_eq!(
            errors.get("work_endDate_0"),
            Some("End date is required for this work experience")
        );
        assert_eq!(
            errors.get("work_responsibilities_0"),
            Some("At least one responsibility is required for this work experience")
        );
    }

    #[test]
    fn test_present_end_year_passes_without_month() {
        let mut data = valid_resume();
        data.work_experience[0].end_year = PRESENT.to_string();
        data.work_experience[0].end_month = String::new();
        assert!(!validate(&data).contains_key("work_endDate_0"));
    }

    #[test]
    fn test_end_date_needs_both_parts() {
        let mut data = valid_resume();
        data.work_experience[0].end_month = String::new();
        assert!(validate(&data).contains_key("work_endDate_0"));
    }

    #[test]
    fn test_markup_only_responsibility_is_missing() {
        let mut data = valid_resume();
        data.work_experience[0].responsibilities =
            vec!["<p><br></p>".to_string(), "<ul><li> </li></ul>".to_string()];
        assert!(validate(&data).contains_key("work_responsibilities_0"));
    }

    #[test]
    fn test_work_keys_use_entry_index() {
        let mut data = valid_resume();
        data.work_experience.push(WorkExperience {
            position: "Intern".to_string(),
            ..WorkExperience::blank()
        });
        let errors = validate(&data);
        assert!(errors.contains_key("work_company_1"));
        assert!(!errors.contains_key("work_company_0"));
    }

    #[test]
    fn test_blank_award_is_skipped() {
        let mut data = valid_resume();
        data.awards.push(Award::default());
        assert!(validate(&data).is_empty());
    }

    #[test]
    fn test_partial_award() {
        let mut data = valid_resume();
        data.awards[0] = Award {
            month: "Jan".to_string(),
            ..Award::default()
        };
        let errors = validate(&data);
        assert_eq!(errors.get("award_title_0"), Some("Award title is required"));
        assert_eq!(errors.get("award_date_0"), Some("Award date is required"));
        assert_eq!(
            errors.get("award_company_0"),
            Some("Company/Organization name is required")
        );
    }

    #[test]
    fn test_award_rejects_present_year() {
        let mut data = valid_resume();
        data.awards[0].year = PRESENT.to_string();
        assert!(validate(&data).contains_key("award_date_0"));
    }

    #[test]
    fn test_validate_is_idempotent() {
        let mut data = valid_resume();
        data.personal_details.email = "nope".to_string();
        data.skills = vec![String::new()];
        assert_eq!(validate(&data), validate(&data));
    }

    #[test]
    fn test_violation_kinds() {
        let mut data = valid_resume();
        data.personal_details.name = String::new();
        data.personal_details.email = "bad".to_string();
        data.personal_details.address = "abc".to_string();
        data.skills = vec![String::new()];
        data.work_experience[0].start_year = String::new();

        let outcome = report(&data);
        let kinds = &outcome.kinds;
        assert!(!outcome.is_valid);
        assert_eq!(kinds.len(), outcome.errors.len());
        assert_eq!(kinds["name"], ViolationKind::Required);
        assert_eq!(kinds["email"], ViolationKind::Format);
        assert_eq!(kinds["address"], ViolationKind::Length);
        assert_eq!(kinds["skills"], ViolationKind::AllBlank);
        assert_eq!(kinds["work_startDate_0"], ViolationKind::IncompleteDate);
    }

    #[test]
    fn test_error_map_serializes_flat() {
        let mut errors = ErrorMap::new();
        errors.insert("name", "Name is required");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Name is required" }));
    }

    #[test]
    fn test_error_map_clear_prefix() {
        let mut errors = ErrorMap::new();
        errors.insert(WorkField::Company.key(0), "x");
        errors.insert(WorkField::EndDate.key(2), "x");
        errors.insert("name", "x");
        errors.clear_prefix(WORK_KEY_PREFIX);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key("name"));
    }
}
