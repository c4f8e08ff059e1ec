use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::modules::alumni::application::domain::{Alumni, AlumniChanges};
use crate::modules::file::application::domain::StoredFile;
use crate::modules::job::application::domain::{Job, JobChanges};

pub fn alumni_changes() -> AlumniChanges {
    AlumniChanges {
        nim: "434221001".into(),
        name: "Siti Aminah".into(),
        major: "Teknik Informatika".into(),
        cohort_year: 2019,
        graduation_year: 2023,
        email: "siti@example.com".into(),
        phone: Some("081234567890".into()),
        address: None,
    }
}

pub fn alumni_fixture(user_id: Option<Uuid>) -> Alumni {
    let fields = alumni_changes();
    let now = Utc::now();
    Alumni {
        id: Uuid::new_v4(),
        user_id,
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
    }
}

fn first_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 8, 1).expect("valid date")
}

pub fn job_changes() -> JobChanges {
    JobChanges {
        company_name: "PT Telkom Indonesia".into(),
        position: "Backend Engineer".into(),
        industry: "Telekomunikasi".into(),
        work_location: "Surabaya".into(),
        salary_range: Some("8-12 juta".into()),
        start_date: first_day(),
        end_date: None,
        employment_status: "Full-time".into(),
        description: None,
    }
}

/// An active job of `alumni_id`.
pub fn job_fixture(alumni_id: Uuid) -> Job {
    let details = job_changes();
    let now = Utc::now();
    Job {
        id: Uuid::new_v4(),
        alumni_id,
        company_name: details.company_name,
        position: details.position,
        industry: details.industry,
        work_location: details.work_location,
        salary_range: details.salary_range,
        start_date: details.start_date,
        end_date: details.end_date,
        employment_status: details.employment_status,
        description: details.description,
        created_at: now,
        updated_at: now,
        is_deleted: false,
    }
}

pub fn file_fixture(owner: Uuid) -> StoredFile {
    let id = Uuid::new_v4();
    let file_name = format!("{id}.pdf");
    StoredFile {
        id,
        user_id: owner,
        file_path: format!("./uploads/{file_name}"),
        file_name,
        original_name: "ijazah.pdf".into(),
        file_size: 2048,
        file_type: "application/pdf".into(),
        uploaded_at: Utc::now(),
    }
}
