use uuid::Uuid;

use crate::auth::application::domain::entities::{CallerIdentity, UserId};
use crate::auth::application::domain::policies::{AccessPolicy, Resource};
use crate::modules::alumni::application::domain::Alumni;
use crate::modules::alumni::application::ports::outgoing::{
    AlumniRepository, AlumniRepositoryError,
};
use crate::modules::job::application::domain::{Job, LifecycleAction};
use crate::modules::job::application::ports::incoming::use_cases::JobCommandError;
use crate::modules::job::application::ports::outgoing::JobRepository;
use crate::shared::persistence::{bounded, SINGLE_RECORD};

pub(crate) async fn find_alumni<A>(
    alumni: &A,
    alumni_id: Uuid,
) -> Result<Option<Alumni>, AlumniRepositoryError>
where
    A: AlumniRepository,
{
    bounded(SINGLE_RECORD, alumni.find_by_id(alumni_id)).await
}

/// Alumni profile linked to the caller's account, if any.
pub(crate) async fn caller_alumni<A>(
    alumni: &A,
    user_id: UserId,
) -> Result<Option<Alumni>, AlumniRepositoryError>
where
    A: AlumniRepository,
{
    bounded(SINGLE_RECORD, alumni.find_by_user_id(user_id.value())).await
}

pub(crate) fn owner_of(profile: Option<&Alumni>) -> Option<UserId> {
    profile.and_then(|a| a.user_id).map(UserId::from)
}

/// Loads a job and checks that `caller` may apply `action` to it right now.
///
/// Order: absent, then role for admin-only actions, then wrong state, then
/// ownership. Restore and purge never reveal a job's state to a caller who
/// may not perform them.
pub(crate) async fn authorize_transition<J, A>(
    jobs: &J,
    alumni: &A,
    caller: &CallerIdentity,
    job_id: Uuid,
    action: LifecycleAction,
) -> Result<Job, JobCommandError>
where
    J: JobRepository,
    A: AlumniRepository,
{
    let job = bounded(SINGLE_RECORD, jobs.find_by_id(job_id))
        .await?
        .ok_or(JobCommandError::NotFound)?;

    if action.is_admin_only() {
        AccessPolicy::authorize(caller, action.policy_action(), &Resource::Job { owner: None })?;
    }

    job.state().transition(action)?;

    let profile = find_alumni(alumni, job.alumni_id).await?;
    let owner = owner_of(profile.as_ref());

    AccessPolicy::authorize(caller, action.policy_action(), &Resource::Job { owner })?;
    Ok(job)
}
