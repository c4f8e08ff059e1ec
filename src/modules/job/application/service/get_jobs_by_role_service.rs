use async_trait::async_trait;

use crate::auth::application::domain::entities::CallerIdentity;
use crate::auth::application::domain::policies::{AccessPolicy, Scope};
use crate::modules::alumni::application::ports::outgoing::AlumniRepository;
use crate::modules::job::application::domain::Job;
use crate::modules::job::application::ports::incoming::use_cases::{
    GetJobsByRoleUseCase, JobQueryError,
};
use crate::modules::job::application::ports::outgoing::{JobListQuery, JobRepository};
use crate::shared::pagination::{ListQuery, PageResult};
use crate::shared::persistence::{bounded, COLLECTION};

use super::job_access::caller_alumni;

pub struct GetJobsByRoleService<J, A>
where
    J: JobRepository,
    A: AlumniRepository,
{
    jobs: J,
    alumni: A,
}

impl<J, A> GetJobsByRoleService<J, A>
where
    J: JobRepository,
    A: AlumniRepository,
{
    pub fn new(jobs: J, alumni: A) -> Self {
        Self { jobs, alumni }
    }
}

#[async_trait]
impl<J, A> GetJobsByRoleUseCase for GetJobsByRoleService<J, A>
where
    J: JobRepository + Send + Sync,
    A: AlumniRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller: CallerIdentity,
        query: ListQuery,
    ) -> Result<PageResult<Job>, JobQueryError> {
        let filter = match AccessPolicy::scope(&caller) {
            Scope::All => JobListQuery::active(query),
            Scope::OwnedBy(user_id) => match caller_alumni(&self.alumni, user_id).await? {
                Some(profile) => JobListQuery::active(query).of_alumni(profile.id),
                // Account without a profile owns nothing
                None => return Ok(PageResult::new(Vec::new(), 0, &query)),
            },
        };

        Ok(bounded(COLLECTION, self.jobs.list(&filter)).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::Role;
    use crate::modules::alumni::application::ports::outgoing::MockAlumniRepo;
    use crate::modules::job::application::ports::outgoing::MockJobRepo;
    use crate::tests::support::fixtures::{alumni_fixture, job_fixture};
    use uuid::Uuid;

    #[tokio::test]
    async fn admin_sees_every_active_job() {
        let mut jobs = MockJobRepo::new();
        jobs.expect_list()
            .withf(|q| q.alumni_id.is_none())
            .returning(|q| Ok(PageResult::new(vec![job_fixture(Uuid::new_v4())], 1, &q.page)));
        let mut alumni = MockAlumniRepo::new();
        alumni.expect_find_by_user_id().never();

        let service = GetJobsByRoleService::new(jobs, alumni);
        let admin = CallerIdentity::new(Uuid::new_v4(), Role::Admin);

        let page = service
            .execute(admin, ListQuery::first_page("created_at"))
            .await
            .unwrap();
        assert_eq!(page.items.len(), 1);
    }

    #[tokio::test]
    async fn alumni_sees_own_jobs() {
        let user = Uuid::new_v4();
        let profile = alumni_fixture(Some(user));
        let profile_id = profile.id;

        let mut alumni = MockAlumniRepo::new();
        alumni
            .expect_find_by_user_id()
            .withf(move |id| *id == user)
            .returning(move |_| Ok(Some(profile.clone())));
        let mut jobs = MockJobRepo::new();
        jobs.expect_list()
            .withf(move |q| q.alumni_id == Some(profile_id))
            .returning(|q| Ok(PageResult::new(vec![], 0, &q.page)));

        let service = GetJobsByRoleService::new(jobs, alumni);
        let caller = CallerIdentity::new(user, Role::Alumni);

        assert!(service
            .execute(caller, ListQuery::first_page("created_at"))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn account_without_profile_gets_empty_page() {
        let mut alumni = MockAlumniRepo::new();
        alumni.expect_find_by_user_id().returning(|_| Ok(None));
        let mut jobs = MockJobRepo::new();
        jobs.expect_list().never();

        let service = GetJobsByRoleService::new(jobs, alumni);
        let caller = CallerIdentity::new(Uuid::new_v4(), Role::Alumni);

        let page = service
            .execute(caller, ListQuery::first_page("created_at"))
            .await
            .unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.meta.total, 0);
    }
}
