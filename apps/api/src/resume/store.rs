use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::resume::ResumeData;
use crate::resume::draft::{DraftEdit, DraftError, ResumeDraft};
use crate::resume::export::{check_export, ExportBlocked, ExportReady};
use crate::resume::validation::ValidationReport;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Draft {0} not found")]
    NotFound(Uuid),

    #[error(transparent)]
    Edit(#[from] DraftError),

    #[error(transparent)]
    ExportBlocked(#[from] ExportBlocked),
}

struct Entry {
    draft: ResumeDraft,
    touched: Instant,
}

/// In-memory drafts keyed by id. Nothing survives a restart.
///
/// Drafts untouched for `idle_timeout` are dropped on the next create. When
/// the store is still full after that, the least recently touched draft makes
/// room for the new one, so creating a draft never fails.
#[derive(Clone)]
pub struct DraftStore {
    drafts: Arc<RwLock<HashMap<Uuid, Entry>>>,
    max_drafts: usize,
    idle_timeout: Duration,
}

impl DraftStore {
    pub fn new(max_drafts: usize, idle_timeout: Duration) -> Self {
        Self {
            drafts: Arc::new(RwLock::new(HashMap::new())),
            max_drafts,
            idle_timeout,
        }
    }

    pub async fn create(&self) -> Result<(Uuid, ResumeDraft), StoreError> {
        let mut drafts = self.drafts.write().await;
        let now = Instant::now();

        let before = drafts.len();
        drafts.retain(|_, entry| now.duration_since(entry.touched) < self.idle_timeout);
        if drafts.len() < before {
            info!(expired = before - drafts.len(), "Dropped idle drafts");
        }

        while !drafts.is_empty() && drafts.len() >= self.max_drafts {
            let Some(oldest) = drafts
                .iter()
                .min_by_key(|(_, entry)| entry.touched)
                .map(|(id, _)| *id)
            else {
                break;
            };
            drafts.remove(&oldest);
            info!(draft_id = %oldest, "Evicted least recently used draft");
        }

        let id = Uuid::new_v4();
        let draft = ResumeDraft::new();
        drafts.insert(
            id,
            Entry {
                draft: draft.clone(),
                touched: now,
            },
        );
        info!(draft_id = %id, total = drafts.len(), "Draft created");
        Ok((id, draft))
    }

    pub async fn get(&self, id: Uuid) -> Result<ResumeDraft, StoreError> {
        self.with_draft(id, |draft| Ok(draft.clone())).await
    }

    pub async fn replace(&self, id: Uuid, data: ResumeData) -> Result<ResumeDraft, StoreError> {
        self.with_draft(id, |draft| {
            draft.replace(data);
            Ok(draft.clone())
        })
        .await
    }

    pub async fn apply(&self, id: Uuid, edit: DraftEdit) -> Result<ResumeDraft, StoreError> {
        debug!(draft_id = %id, ?edit, "Applying draft edit");
        self.with_draft(id, |draft| {
            draft.apply(edit)?;
            Ok(draft.clone())
        })
        .await
    }

    pub async fn validate(&self, id: Uuid) -> Result<ValidationReport, StoreError> {
        self.with_draft(id, |draft| Ok(draft.revalidate())).await
    }

    /// Revalidates before the gate so the draft shows every blocking error inline.
    pub async fn export(&self, id: Uuid) -> Result<ExportReady, StoreError> {
        self.with_draft(id, |draft| {
            draft.revalidate();
            Ok(check_export(&draft.data)?)
        })
        .await
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), StoreError> {
        let mut drafts = self.drafts.write().await;
        drafts.remove(&id).ok_or(StoreError::NotFound(id))?;
        info!(draft_id = %id, total = drafts.len(), "Draft discarded");
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.drafts.read().await.len()
    }

    /// Every access counts as activity and pushes back idle expiry.
    async fn with_draft<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut ResumeDraft) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut drafts = self.drafts.write().await;
        let entry = drafts.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        entry.touched = Instant::now();
        f(&mut entry.draft)
    }
}
