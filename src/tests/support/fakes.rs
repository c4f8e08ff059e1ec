//! In-memory stand-ins for every persistence port. All fakes built from one
//! `InMemoryStore` share its tables, so cross-aggregate rules (job needs an
//! alumni, deleting an alumni drops its jobs) hold like in the real stores.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

use crate::auth::application::domain::entities::{NewUser, User};
use crate::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};
use crate::modules::alumni::application::domain::{Alumni, AlumniChanges, NewAlumni};
use crate::modules::alumni::application::ports::outgoing::{
    AlumniRepository, AlumniRepositoryError,
};
use crate::modules::file::application::domain::{NewStoredFile, StoredFile};
use crate::modules::file::application::ports::outgoing::{
    FileRepository, FileRepositoryError, FileStorage, FileStorageError,
};
use crate::modules::job::application::domain::{
    AlumniJobCount, Job, JobChanges, TrashEntry,
};
use crate::modules::job::application::ports::outgoing::{
    JobListQuery, JobRepository, JobRepositoryError,
};
use crate::shared::pagination::{ListQuery, PageResult, SortOrder};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    alumni: Vec<Alumni>,
    jobs: Vec<Job>,
    files: Vec<StoredFile>,
    blobs: HashMap<String, Vec<u8>>,
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().expect("store poisoned")
    }

    pub fn users(&self) -> FakeUsers {
        FakeUsers(self.clone())
    }

    pub fn alumni(&self) -> FakeAlumni {
        FakeAlumni(self.clone())
    }

    pub fn jobs(&self) -> FakeJobs {
        FakeJobs(self.clone())
    }

    pub fn files(&self) -> FakeFiles {
        FakeFiles(self.clone())
    }

    pub fn storage(&self) -> FakeStorage {
        FakeStorage(self.clone())
    }

    pub fn alumni_count(&self) -> usize {
        self.lock().alumni.len()
    }

    pub fn job_count(&self) -> usize {
        self.lock().jobs.len()
    }

    pub fn blob_count(&self) -> usize {
        self.lock().blobs.len()
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Orders by creation time in the requested direction, then pages.
fn paginate<T: Clone>(
    mut rows: Vec<T>,
    query: &ListQuery,
    created: impl Fn(&T) -> chrono::DateTime<Utc>,
) -> PageResult<T> {
    rows.sort_by_key(|row| created(row));
    if query.order == SortOrder::Desc {
        rows.reverse();
    }
    let total = rows.len() as u64;
    let items = rows
        .into_iter()
        .skip(query.offset() as usize)
        .take(query.limit as usize)
        .collect();
    PageResult::new(items, total, query)
}

//
// ──────────────────────────────────────────────────────────
// Users
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct FakeUsers(InMemoryStore);

#[async_trait]
impl UserRepository for FakeUsers {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let mut tables = self.0.lock();
        let taken = tables.users.iter().any(|u| {
            u.username == user.username || u.email.eq_ignore_ascii_case(&user.email)
        });
        if taken {
            return Err(UserRepositoryError::UserAlreadyExists);
        }

        let created = User {
            id: Uuid::new_v4(),
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            role: user.role,
            created_at: Utc::now(),
        };
        tables.users.push(created.clone());
        Ok(created)
    }

    async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<User>, UserRepositoryError> {
        let tables = self.0.lock();
        let found = if identifier.contains('@') {
            tables
                .users
                .iter()
                .find(|u| u.email.eq_ignore_ascii_case(identifier))
        } else {
            tables.users.iter().find(|u| u.username == identifier)
        };
        Ok(found.cloned())
    }

    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.0.lock().users.iter().find(|u| u.id == user_id).cloned())
    }
}

//
// ──────────────────────────────────────────────────────────
// Alumni
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct FakeAlumni(InMemoryStore);

fn check_alumni_keys(
    tables: &Tables,
    skip: Option<Uuid>,
    nim: &str,
    user_id: Option<Uuid>,
) -> Result<(), AlumniRepositoryError> {
    let others = tables.alumni.iter().filter(|a| Some(a.id) != skip);
    for other in others {
        if other.nim == nim {
            return Err(AlumniRepositoryError::DuplicateNim);
        }
        if user_id.is_some() && other.user_id == user_id {
            return Err(AlumniRepositoryError::DuplicateUser);
        }
    }
    if let Some(user) = user_id {
        if !tables.users.iter().any(|u| u.id == user) {
            return Err(AlumniRepositoryError::UnknownUser);
        }
    }
    Ok(())
}

#[async_trait]
impl AlumniRepository for FakeAlumni {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Alumni>, AlumniRepositoryError> {
        Ok(self.0.lock().alumni.iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<Alumni>, AlumniRepositoryError> {
        Ok(self
            .0
            .lock()
            .alumni
            .iter()
            .find(|a| a.user_id == Some(user_id))
            .cloned())
    }

    async fn find_by_nim(&self, nim: &str) -> Result<Option<Alumni>, AlumniRepositoryError> {
        Ok(self.0.lock().alumni.iter().find(|a| a.nim == nim).cloned())
    }

    async fn list(&self, query: &ListQuery) -> Result<PageResult<Alumni>, AlumniRepositoryError> {
        let rows: Vec<Alumni> = self
            .0
            .lock()
            .alumni
            .iter()
            .filter(|a| match &query.search {
                Some(term) => {
                    contains_ci(&a.name, term) || contains_ci(&a.nim, term) || contains_ci(&a.major, term)
                }
                None => true,
            })
            .cloned()
            .collect();
        Ok(paginate(rows, query, |a| a.created_at))
    }

    async fn insert(&self, alumni: NewAlumni) -> Result<Alumni, AlumniRepositoryError> {
        let mut tables = self.0.lock();
        check_alumni_keys(&tables, None, &alumni.fields.nim, alumni.user_id)?;

        let now = Utc::now();
        let fields = alumni.fields;
        let created = Alumni {
            id: Uuid::new_v4(),
            user_id: alumni.user_id,
            nim: fields.nim,
            name: fields.name,
            major: fields.major,
            cohort_year: fields.cohort_year,
            graduation_year: fields.graduation_year,
            email: fields.email,
            phone: fields.phone,
            address: fields.address,
            created_at: now,
            updated_at: now,
        };
        tables.alumni.push(created.clone());
        Ok(created)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: AlumniChanges,
    ) -> Result<Alumni, AlumniRepositoryError> {
        let mut tables = self.0.lock();
        check_alumni_keys(&tables, Some(id), &changes.nim, None)?;

        let row = tables
            .alumni
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(AlumniRepositoryError::NotFound)?;
        row.nim = changes.nim;
        row.name = changes.name;
        row.major = changes.major;
        row.cohort_year = changes.cohort_year;
        row.graduation_year = changes.graduation_year;
        row.email = changes.email;
        row.phone = changes.phone;
        row.address = changes.address;
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AlumniRepositoryError> {
        let mut tables = self.0.lock();
        let before = tables.alumni.len();
        tables.alumni.retain(|a| a.id != id);
        if tables.alumni.len() == before {
            return Err(AlumniRepositoryError::NotFound);
        }
        tables.jobs.retain(|j| j.alumni_id != id);
        Ok(())
    }
}

//
// ──────────────────────────────────────────────────────────
// Jobs
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct FakeJobs(InMemoryStore);

impl FakeJobs {
    /// Flips the flag only when the record is currently in `from_deleted`.
    fn flip(&self, id: Uuid, from_deleted: bool) -> Result<Job, JobRepositoryError> {
        let mut tables = self.0.lock();
        let row = tables
            .jobs
            .iter_mut()
            .find(|j| j.id == id && j.is_deleted == from_deleted)
            .ok_or(JobRepositoryError::NotFound)?;
        row.is_deleted = !from_deleted;
        row.updated_at = Utc::now();
        Ok(row.clone())
    }
}

fn alumni_name(tables: &Tables, alumni_id: Uuid) -> Option<String> {
    tables
        .alumni
        .iter()
        .find(|a| a.id == alumni_id)
        .map(|a| a.name.clone())
}

#[async_trait]
impl JobRepository for FakeJobs {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, JobRepositoryError> {
        Ok(self.0.lock().jobs.iter().find(|j| j.id == id).cloned())
    }

    async fn list(&self, query: &JobListQuery) -> Result<PageResult<Job>, JobRepositoryError> {
        let wants_deleted = query.wants_deleted();
        let rows: Vec<Job> = self
            .0
            .lock()
            .jobs
            .iter()
            .filter(|j| j.is_deleted == wants_deleted)
            .filter(|j| query.alumni_id.map_or(true, |id| j.alumni_id == id))
            .filter(|j| match &query.page.search {
                Some(term) => [&j.company_name, &j.position, &j.industry, &j.work_location]
                    .iter()
                    .any(|field| contains_ci(field, term)),
                None => true,
            })
            .cloned()
            .collect();
        Ok(paginate(rows, &query.page, |j| j.created_at))
    }

    async fn insert(&self, alumni_id: Uuid, job: JobChanges) -> Result<Job, JobRepositoryError> {
        let mut tables = self.0.lock();
        if !tables.alumni.iter().any(|a| a.id == alumni_id) {
            return Err(JobRepositoryError::UnknownAlumni);
        }

        let now = Utc::now();
        let created = Job {
            id: Uuid::new_v4(),
            alumni_id,
            company_name: job.company_name,
            position: job.position,
            industry: job.industry,
            work_location: job.work_location,
            salary_range: job.salary_range,
            start_date: job.start_date,
            end_date: job.end_date,
            employment_status: job.employment_status,
            description: job.description,
            created_at: now,
            updated_at: now,
            is_deleted: false,
        };
        tables.jobs.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: Uuid, changes: JobChanges) -> Result<Job, JobRepositoryError> {
        let mut tables = self.0.lock();
        let row = tables
            .jobs
            .iter_mut()
            .find(|j| j.id == id && !j.is_deleted)
            .ok_or(JobRepositoryError::NotFound)?;
        row.company_name = changes.company_name;
        row.position = changes.position;
        row.industry = changes.industry;
        row.work_location = changes.work_location;
        row.salary_range = changes.salary_range;
        row.start_date = changes.start_date;
        row.end_date = changes.end_date;
        row.employment_status = changes.employment_status;
        row.description = changes.description;
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn mark_deleted(&self, id: Uuid) -> Result<Job, JobRepositoryError> {
        self.flip(id, false)
    }

    async fn restore(&self, id: Uuid) -> Result<Job, JobRepositoryError> {
        self.flip(id, true)
    }

    async fn delete_permanently(&self, id: Uuid) -> Result<(), JobRepositoryError> {
        let mut tables = self.0.lock();
        let before = tables.jobs.len();
        tables.jobs.retain(|j| !(j.id == id && j.is_deleted));
        if tables.jobs.len() == before {
            return Err(JobRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn active_job_counts(
        &self,
        alumni_id: Option<Uuid>,
        min_count: u64,
    ) -> Result<Vec<AlumniJobCount>, JobRepositoryError> {
        let tables = self.0.lock();
        let mut counts: HashMap<Uuid, u64> = HashMap::new();
        for job in tables.jobs.iter().filter(|j| !j.is_deleted) {
            if alumni_id.map_or(true, |id| job.alumni_id == id) {
                *counts.entry(job.alumni_id).or_default() += 1;
            }
        }

        let mut rows: Vec<AlumniJobCount> = counts
            .into_iter()
            .filter(|(_, count)| *count >= min_count)
            .filter_map(|(id, count)| {
                alumni_name(&tables, id).map(|name| AlumniJobCount {
                    alumni_id: id,
                    alumni_name: name,
                    count,
                })
            })
            .collect();
        rows.sort_by(|a, b| b.count.cmp(&a.count).then(a.alumni_name.cmp(&b.alumni_name)));
        Ok(rows)
    }

    async fn trash(&self, alumni_id: Option<Uuid>) -> Result<Vec<TrashEntry>, JobRepositoryError> {
        let tables = self.0.lock();
        let mut trashed: Vec<&Job> = tables
            .jobs
            .iter()
            .filter(|j| j.is_deleted)
            .filter(|j| alumni_id.map_or(true, |id| j.alumni_id == id))
            .collect();
        trashed.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

        Ok(trashed
            .into_iter()
            .filter_map(|j| {
                alumni_name(&tables, j.alumni_id).map(|name| TrashEntry {
                    id: j.id,
                    alumni_id: j.alumni_id,
                    alumni_name: name,
                    company_name: j.company_name.clone(),
                    is_deleted: j.is_deleted,
                })
            })
            .collect())
    }
}

//
// ──────────────────────────────────────────────────────────
// Files
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct FakeFiles(InMemoryStore);

#[async_trait]
impl FileRepository for FakeFiles {
    async fn insert(&self, file: NewStoredFile) -> Result<StoredFile, FileRepositoryError> {
        let mut tables = self.0.lock();
        if !tables.users.iter().any(|u| u.id == file.user_id) {
            return Err(FileRepositoryError::UnknownOwner);
        }

        let stored = StoredFile {
            id: Uuid::new_v4(),
            user_id: file.user_id,
            file_name: file.file_name,
            original_name: file.original_name,
            file_path: file.file_path,
            file_size: file.file_size,
            file_type: file.file_type,
            uploaded_at: Utc::now(),
        };
        tables.files.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<StoredFile>, FileRepositoryError> {
        Ok(self.0.lock().files.iter().find(|f| f.id == id).cloned())
    }

    async fn list(&self, owner: Option<Uuid>) -> Result<Vec<StoredFile>, FileRepositoryError> {
        let mut rows: Vec<StoredFile> = self
            .0
            .lock()
            .files
            .iter()
            .filter(|f| owner.map_or(true, |id| f.user_id == id))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        Ok(rows)
    }

    async fn delete(&self, id: Uuid) -> Result<(), FileRepositoryError> {
        let mut tables = self.0.lock();
        let before = tables.files.len();
        tables.files.retain(|f| f.id != id);
        if tables.files.len() == before {
            return Err(FileRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct FakeStorage(InMemoryStore);

#[async_trait]
impl FileStorage for FakeStorage {
    async fn save(&self, file_name: &str, bytes: Vec<u8>) -> Result<String, FileStorageError> {
        let path = format!("memory://{file_name}");
        self.0.lock().blobs.insert(path.clone(), bytes);
        Ok(path)
    }

    async fn remove(&self, path: &str) -> Result<(), FileStorageError> {
        self.0
            .lock()
            .blobs
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| FileStorageError::Io(format!("{path} does not exist")))
    }
}
