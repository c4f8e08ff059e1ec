use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::domain::policies::Action;

/// Where a job record sits in its soft-delete lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum JobState {
    Active,
    Trashed,
    /// Physically removed. Never stored, only reported after a purge.
    Purged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleAction {
    Update,
    SoftDelete,
    Restore,
    Purge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LifecycleViolation {
    /// The record is hidden from the caller's view of active jobs.
    #[error("Job not found")]
    NotVisible,

    #[error("Job is not in the trash")]
    NotTrashed,
}

impl JobState {
    pub fn from_deleted_flag(is_deleted: bool) -> Self {
        if is_deleted {
            JobState::Trashed
        } else {
            JobState::Active
        }
    }

    /// Normal listings and lookups only ever show active records.
    pub fn is_visible(self) -> bool {
        self == JobState::Active
    }

    pub fn transition(self, action: LifecycleAction) -> Result<JobState, LifecycleViolation> {
        use JobState::*;
        use LifecycleAction::*;

        match (self, action) {
            (Active, Update) => Ok(Active),
            (Active, SoftDelete) => Ok(Trashed),
            (Active, Restore | Purge) => Err(LifecycleViolation::NotTrashed),

            (Trashed, Restore) => Ok(Active),
            (Trashed, Purge) => Ok(Purged),
            (Trashed, Update | SoftDelete) => Err(LifecycleViolation::NotVisible),

            (Purged, _) => Err(LifecycleViolation::NotVisible),
        }
    }
}

impl LifecycleAction {
    pub fn policy_action(self) -> Action {
        match self {
            LifecycleAction::Update => Action::Update,
            LifecycleAction::SoftDelete => Action::SoftDelete,
            LifecycleAction::Restore => Action::Restore,
            LifecycleAction::Purge => Action::Purge,
        }
    }

    /// Permitted to admins regardless of who owns the job.
    pub fn is_admin_only(self) -> bool {
        matches!(self, LifecycleAction::Restore | LifecycleAction::Purge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_record_can_be_edited_and_trashed() {
        assert_eq!(
            JobState::Active.transition(LifecycleAction::Update),
            Ok(JobState::Active)
        );
        assert_eq!(
            JobState::Active.transition(LifecycleAction::SoftDelete),
            Ok(JobState::Trashed)
        );
    }

    #[test]
    fn restore_and_purge_require_trash() {
        for action in [LifecycleAction::Restore, LifecycleAction::Purge] {
            assert_eq!(
                JobState::Active.transition(action),
                Err(LifecycleViolation::NotTrashed)
            );
        }
        assert_eq!(
            JobState::Trashed.transition(LifecycleAction::Restore),
            Ok(JobState::Active)
        );
        assert_eq!(
            JobState::Trashed.transition(LifecycleAction::Purge),
            Ok(JobState::Purged)
        );
    }

    #[test]
    fn trashed_record_is_invisible_to_edits() {
        for action in [LifecycleAction::Update, LifecycleAction::SoftDelete] {
            assert_eq!(
                JobState::Trashed.transition(action),
                Err(LifecycleViolation::NotVisible)
            );
        }
    }

    #[test]
    fn purged_is_terminal() {
        for action in [
            LifecycleAction::Update,
            LifecycleAction::SoftDelete,
            LifecycleAction::Restore,
            LifecycleAction::Purge,
        ] {
            assert_eq!(
                JobState::Purged.transition(action),
                Err(LifecycleViolation::NotVisible)
            );
        }
    }

    #[test]
    fn second_soft_delete_is_rejected() {
        let trashed = JobState::Active
            .transition(LifecycleAction::SoftDelete)
            .unwrap();
        assert!(trashed.transition(LifecycleAction::SoftDelete).is_err());
    }

    #[test]
    fn only_active_is_visible() {
        assert!(JobState::Active.is_visible());
        assert!(!JobState::Trashed.is_visible());
        assert!(!JobState::Purged.is_visible());
        assert_eq!(JobState::from_deleted_flag(true), JobState::Trashed);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&JobState::Trashed).unwrap(),
            "\"trashed\""
        );
    }
}
