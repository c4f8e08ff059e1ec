use crate::auth::application::domain::entities::{CallerIdentity, Role, UserId};

/// Everything a caller can attempt against a guarded resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Read,
    Create,
    Update,
    SoftDelete,
    Restore,
    Purge,
    ViewTrash,
    ViewAggregate,
    ListByAlumni,
    Upload,
    Delete,
}

/// A guarded resource together with the account that owns it.
///
/// Job ownership is resolved by the caller of the policy through
/// `alumni_id -> Alumni.user_id`. An orphaned record carries `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Alumni,
    Job { owner: Option<UserId> },
    JobsOfAlumni { owner: Option<UserId> },
    File { owner: UserId },
    UserFiles { owner: UserId },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{role} is not allowed to {action:?} this resource")]
pub struct PolicyViolation {
    pub role: Role,
    pub action: Action,
}

/// Which slice of a collection a caller may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    All,
    OwnedBy(UserId),
}

/// Single source of truth for role and ownership checks. Stateless; every
/// handler asks the same question instead of branching on role itself.
pub struct AccessPolicy;

impl AccessPolicy {
    pub fn can(caller: &CallerIdentity, action: Action, resource: &Resource) -> bool {
        if caller.role == Role::Admin {
            return true;
        }

        let owns = |owner: Option<UserId>| owner == Some(caller.user_id);

        match (resource, action) {
            (Resource::Alumni, Action::Read) => true,
            (Resource::Alumni, _) => false,

            (Resource::Job { .. }, Action::Read) => true,
            (Resource::Job { owner }, Action::Create | Action::Update | Action::SoftDelete) => {
                owns(*owner)
            }
            (Resource::Job { .. }, _) => false,

            (Resource::JobsOfAlumni { owner }, Action::ViewAggregate | Action::ViewTrash) => {
                owns(*owner)
            }
            (Resource::JobsOfAlumni { .. }, _) => false,

            (
                Resource::File { owner } | Resource::UserFiles { owner },
                Action::Read | Action::Upload | Action::Delete,
            ) => owns(Some(*owner)),
            (Resource::File { .. } | Resource::UserFiles { .. }, _) => false,
        }
    }

    pub fn authorize(
        caller: &CallerIdentity,
        action: Action,
        resource: &Resource,
    ) -> Result<(), PolicyViolation> {
        if Self::can(caller, action, resource) {
            Ok(())
        } else {
            tracing::warn!(
                user_id = %caller.user_id,
                role = %caller.role,
                ?action,
                ?resource,
                "Policy rejected request"
            );
            Err(PolicyViolation {
                role: caller.role,
                action,
            })
        }
    }

    /// Trash, per-role job listings and file listings are narrowed to the
    /// caller's own records unless the caller is an admin.
    pub fn scope(caller: &CallerIdentity) -> Scope {
        match caller.role {
            Role::Admin => Scope::All,
            Role::Alumni => Scope::OwnedBy(caller.user_id),
        }
    }
}
