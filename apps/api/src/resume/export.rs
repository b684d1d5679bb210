use serde::Serialize;
use thiserror::Error;

use crate::models::resume::ResumeData;
use crate::resume::validation::{report, ErrorMap};

pub const EXPORT_BLOCKED_MESSAGE: &str = "Please fill in all required fields before downloading PDF";

const FALLBACK_DOCUMENT_TITLE: &str = "Resume";

/// Handed to the print collaborator once the resume passes validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportReady {
    pub document_title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", EXPORT_BLOCKED_MESSAGE)]
pub struct ExportBlocked {
    pub errors: ErrorMap,
}

/// Runs a full validation; no partial export is allowed while any error remains.
pub fn check_export(data: &ResumeData) -> Result<ExportReady, ExportBlocked> {
    let outcome = report(data);
    if !outcome.is_valid {
        return Err(ExportBlocked {
            errors: outcome.errors,
        });
    }
    Ok(ExportReady {
        document_title: document_title(data),
    })
}

pub fn document_title(data: &ResumeData) -> String {
    let name = data.personal_details.name.trim();
    if name.is_empty() {
        FALLBACK_DOCUMENT_TITLE.to_string()
    } else {
        name.to_string()
    }
}
