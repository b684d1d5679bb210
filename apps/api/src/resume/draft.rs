//! Explicit state container for one resume being edited.
//!
//! The form's data and its last validation result live together here and are
//! changed only through [`DraftEdit`]s. Each edit clears the inline error of
//! the field it touched; a full [`ResumeDraft::revalidate`] is still required
//! before export.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::resume::{Award, Education, PastOrganization, ResumeData, WorkExperience, PRESENT};
use crate::resume::validation::{
    link_key, report, AwardField, ErrorMap, ValidationReport, WorkField, AWARD_KEY_PREFIX,
    WORK_KEY_PREFIX,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("{section} has no entry at index {index} (length {len})")]
    IndexOutOfRange {
        section: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Award year cannot be \"Present\"")]
    PresentNotAllowed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PersonalField {
    Name,
    Title,
    Address,
    Phone,
    Email,
}

impl PersonalField {
    /// Error key shared with the validation engine.
    pub fn key(self) -> &'static str {
        match self {
            PersonalField::Name => "name",
            PersonalField::Title => "title",
            PersonalField::Address => "address",
            PersonalField::Phone => "phone",
            PersonalField::Email => "email",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WorkEntryField {
    Company,
    Position,
    Location,
    StartMonth,
    StartYear,
    EndMonth,
    EndYear,
}

impl WorkEntryField {
    fn error_field(self) -> WorkField {
        match self {
            WorkEntryField::Company => WorkField::Company,
            WorkEntryField::Position => WorkField::Position,
            WorkEntryField::Location => WorkField::Location,
            WorkEntryField::StartMonth | WorkEntryField::StartYear => WorkField::StartDate,
            WorkEntryField::EndMonth | WorkEntryField::EndYear => WorkField::EndDate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EducationEntryField {
    Institution,
    Degree,
    Location,
    Year,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AwardEntryField {
    Title,
    Month,
    Year,
    Company,
}

impl AwardEntryField {
    fn error_field(self) -> AwardField {
        match self {
            AwardEntryField::Title => AwardField::Title,
            AwardEntryField::Month | AwardEntryField::Year => AwardField::Date,
            AwardEntryField::Company => AwardField::Company,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PastOrganizationField {
    Company,
    Position,
    Duration,
}

/// One user action on the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum DraftEdit {
    UpdatePersonal { field: PersonalField, value: String },
    UpdateLink { index: usize, url: String },

    AddSkill,
    UpdateSkill { index: usize, value: String },
    RemoveSkill { index: usize },

    AddLanguage,
    UpdateLanguage { index: usize, value: String },
    RemoveLanguage { index: usize },

    AddWork,
    RemoveWork { index: usize },
    UpdateWork { index: usize, field: WorkEntryField, value: String },
    AddResponsibility { entry: usize },
    UpdateResponsibility { entry: usize, index: usize, value: String },
    RemoveResponsibility { entry: usize, index: usize },

    AddEducation,
    RemoveEducation { index: usize },
    UpdateEducation { index: usize, field: EducationEntryField, value: String },

    AddAward,
    RemoveAward { index: usize },
    UpdateAward { index: usize, field: AwardEntryField, value: String },

    AddPastOrganization,
    RemovePastOrganization { index: usize },
    UpdatePastOrganization { index: usize, field: PastOrganizationField, value: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeDraft {
    pub data: ResumeData,
    pub errors: ErrorMap,
}

fn slot<'a, T>(items: &'a mut [T], section: &'static str, index: usize) -> Result<&'a mut T, DraftError> {
    let len = items.len();
    items
        .get_mut(index)
        .ok_or(DraftError::IndexOutOfRange { section, index, len })
}

fn remove_at<T>(items: &mut Vec<T>, section: &'static str, index: usize) -> Result<T, DraftError> {
    if index >= items.len() {
        return Err(DraftError::IndexOutOfRange {
            section,
            index,
            len: items.len(),
        });
    }
    Ok(items.remove(index))
}

impl ResumeDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swaps in a whole snapshot. Previous errors no longer apply.
    pub fn replace(&mut self, data: ResumeData) {
        self.data = data;
        self.errors = ErrorMap::new();
    }

    /// Full validation; the result replaces any stale inline errors.
    pub fn revalidate(&mut self) -> ValidationReport {
        let outcome = report(&self.data);
        self.errors = outcome.errors.clone();
        outcome
    }

    pub fn apply(&mut self, edit: DraftEdit) -> Result<(), DraftError> {
        let data = &mut self.data;
        let errors = &mut self.errors;

        match edit {
            DraftEdit::UpdatePersonal { field, value } => {
                let details = &mut data.personal_details;
                let target = match field {
                    PersonalField::Name => &mut details.name,
                    PersonalField::Title => &mut details.title,
                    PersonalField::Address => &mut details.address,
                    PersonalField::Phone => &mut details.phone,
                    PersonalField::Email => &mut details.email,
                };
                *target = value;
                errors.clear(field.key());
            }
            DraftEdit::UpdateLink { index, url } => {
                slot(&mut data.links, "links", index)?.url = url;
                errors.clear(&link_key(index));
            }

            DraftEdit::AddSkill => data.skills.push(String::new()),
            DraftEdit::UpdateSkill { index, value } => {
                *slot(&mut data.skills, "skills", index)? = value;
                errors.clear("skills");
            }
            DraftEdit::RemoveSkill { index } => {
                remove_at(&mut data.skills, "skills", index)?;
                errors.clear("skills");
            }

            DraftEdit::AddLanguage => data.languages.push(String::new()),
            DraftEdit::UpdateLanguage { index, value } => {
                *slot(&mut data.languages, "languages", index)? = value;
                errors.clear("languages");
            }
            DraftEdit::RemoveLanguage { index } => {
                remove_at(&mut data.languages, "languages", index)?;
                errors.clear("languages");
            }

            DraftEdit::AddWork => data.work_experience.push(WorkExperience::blank()),
            DraftEdit::RemoveWork { index } => {
                remove_at(&mut data.work_experience, "work_experience", index)?;
                // Later entries shift down, so their keys no longer line up.
                errors.clear_prefix(WORK_KEY_PREFIX);
            }
            DraftEdit::UpdateWork { index, field, value } => {
                let exp = slot(&mut data.work_experience, "work_experience", index)?;
                set_work_field(exp, field, value);
                errors.clear(&field.error_field().key(index));
            }
            DraftEdit::AddResponsibility { entry } => {
                slot(&mut data.work_experience, "work_experience", entry)?
                    .responsibilities
                    .push(String::new());
            }
            DraftEdit::UpdateResponsibility {
                entry,
                index,
                value,
            } => {
                let exp = slot(&mut data.work_experience, "work_experience", entry)?;
                *slot(&mut exp.responsibilities, "responsibilities", index)? = value;
                errors.clear(&WorkField::Responsibilities.key(entry));
            }
            DraftEdit::RemoveResponsibility { entry, index } => {
                let exp = slot(&mut data.work_experience, "work_experience", entry)?;
                remove_at(&mut exp.responsibilities, "responsibilities", index)?;
                errors.clear(&WorkField::Responsibilities.key(entry));
            }

            DraftEdit::AddEducation => data.education.push(Education::blank()),
            DraftEdit::RemoveEducation { index } => {
                remove_at(&mut data.education, "education", index)?;
            }
            DraftEdit::UpdateEducation { index, field, value } => {
                let edu = slot(&mut data.education, "education", index)?;
                let target = match field {
                    EducationEntryField::Institution => &mut edu.institution,
                    EducationEntryField::Degree => &mut edu.degree,
                    EducationEntryField::Location => &mut edu.location,
                    EducationEntryField::Year => &mut edu.year,
                };
                *target = value;
            }

            DraftEdit::AddAward => data.awards.push(Award::default()),
            DraftEdit::RemoveAward { index } => {
                remove_at(&mut data.awards, "awards", index)?;
                errors.clear_prefix(AWARD_KEY_PREFIX);
            }
            DraftEdit::UpdateAward { index, field, value } => {
                if field == AwardEntryField::Year && value.trim() == PRESENT {
                    return Err(DraftError::PresentNotAllowed);
                }
                let award = slot(&mut data.awards, "awards", index)?;
                let target = match field {
                    AwardEntryField::Title => &mut award.title,
                    AwardEntryField::Month => &mut award.month,
                    AwardEntryField::Year => &mut award.year,
                    AwardEntryField::Company => &mut award.company,
                };
                *target = value;
                errors.clear(&field.error_field().key(index));
            }

            DraftEdit::AddPastOrganization => {
                data.past_organizations.push(PastOrganization::default())
            }
            DraftEdit::RemovePastOrganization { index } => {
                remove_at(&mut data.past_organizations, "past_organizations", index)?;
            }
            DraftEdit::UpdatePastOrganization { index, field, value } => {
                let org = slot(&mut data.past_organizations, "past_organizations", index)?;
                let target = match field {
                    PastOrganizationField::Company => &mut org.company,
                    PastOrganizationField::Position => &mut org.position,
                    PastOrganizationField::Duration => &mut org.duration,
                };
                *target = value;
            }
        }

        Ok(())
    }
}

/// Keeps `end_month` empty whenever the entry ends at `Present`.
fn set_work_field(exp: &mut WorkExperience, field: WorkEntryField, value: String) {
    match field {
        WorkEntryField::Company => exp.company = value,
        WorkEntryField::Position => exp.position = value,
        WorkEntryField::Location => exp.location = value,
        WorkEntryField::StartMonth => exp.start_month = value,
        WorkEntryField::StartYear => exp.start_year = value,
        WorkEntryField::EndMonth => {
            if !exp.is_current() {
                exp.end_month = value;
            }
        }
        WorkEntryField::EndYear => {
            exp.end_year = value;
            if exp.is_current() {
                exp.end_month.clear();
            }
        }
    }
}
