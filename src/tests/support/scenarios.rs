//! Whole-stack flows: every route, real services, in-memory stores.

use actix_web::http::{header, StatusCode};
use actix_web::test::{self, TestRequest};
use actix_web::{web, App};
use serde_json::{json, Value};

use crate::auth::application::domain::entities::Role;
use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config};
use crate::tests::support::app_state_builder::state_over;
use crate::tests::support::auth_helper::{bearer_for, token_provider_data};
use crate::tests::support::fakes::InMemoryStore;
use crate::tests::support::http::multipart_body;

/// Serves one request with every route mounted. State lives in `store`, so
/// consecutive calls see each other's writes.
async fn call(store: &InMemoryStore, request: TestRequest) -> (StatusCode, Value) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state_over(store)))
            .app_data(token_provider_data())
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(custom_path_config())
            .configure(crate::init_routes),
    )
    .await;

    let resp = test::call_service(&app, request.to_request()).await;
    let status = resp.status();
    let bytes = test::read_body(resp).await;
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn authed(request: TestRequest, auth: &str) -> TestRequest {
    request.insert_header(("Authorization", auth.to_string()))
}

/// Registers an alumni account, logs in and returns its bearer header and
/// linked alumni id.
async fn signed_up_alumni(store: &InMemoryStore, username: &str) -> (String, String) {
    let (status, body) = call(
        store,
        TestRequest::post().uri("/api/register").set_json(json!({
            "username": username,
            "email": format!("{username}@example.com"),
            "password": "rahasia123",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    let alumni_id = body["data"]["alumni_id"]
        .as_str()
        .expect("alumni id")
        .to_string();

    let (status, body) = call(
        store,
        TestRequest::post()
            .uri("/api/login")
            .set_json(json!({ "identifier": username, "password": "rahasia123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    let token = body["data"]["token"].as_str().expect("token");

    (format!("Bearer {token}"), alumni_id)
}

fn job_body(alumni_id: &str, company: &str) -> Value {
    json!({
        "alumni_id": alumni_id,
        "company_name": company,
        "position": "Backend Engineer",
        "industry": "Telekomunikasi",
        "work_location": "Surabaya",
        "start_date": "2023-08-01",
        "employment_status": "Full-time",
    })
}

async fn create_job(store: &InMemoryStore, auth: &str, alumni_id: &str, company: &str) -> String {
    let (status, body) = call(
        store,
        authed(
            TestRequest::post()
                .uri("/pekerjaan")
                .set_json(job_body(alumni_id, company)),
            auth,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["data"]["id"].as_str().expect("job id").to_string()
}

#[actix_web::test]
async fn job_walks_through_trash_and_purge() {
    let store = InMemoryStore::default();
    let (_, admin) = bearer_for(Role::Admin);
    let (me, alumni_id) = signed_up_alumni(&store, "siti.aminah").await;

    let job_id = create_job(&store, &me, &alumni_id, "PT Telkom Indonesia").await;
    let job_uri = format!("/pekerjaan/{job_id}");

    // Owner trashes it; it drops out of the active views
    let (status, body) = call(&store, authed(TestRequest::delete().uri(&job_uri), &me)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["state"], "trashed");

    let (status, _) = call(&store, authed(TestRequest::get().uri(&job_uri), &me)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = call(
        &store,
        authed(TestRequest::get().uri("/pekerjaan/filter/trash"), &me),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["id"], job_id.as_str());

    // Only an admin brings it back
    let restore_uri = format!("/pekerjaan/filter/restore/{job_id}");
    let (status, _) = call(&store, authed(TestRequest::put().uri(&restore_uri), &me)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = call(&store, authed(TestRequest::put().uri(&restore_uri), &admin)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["is_deleted"], false);

    // Purging an active record is refused
    let purge_uri = format!("/pekerjaan/filter/delete/{job_id}");
    let (status, body) = call(&store, authed(TestRequest::delete().uri(&purge_uri), &admin)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "JOB_NOT_TRASHED");

    call(&store, authed(TestRequest::delete().uri(&job_uri), &admin)).await;
    let (status, body) = call(&store, authed(TestRequest::delete().uri(&purge_uri), &admin)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["state"], "purged");
    assert_eq!(store.job_count(), 0);
}

#[actix_web::test]
async fn alumni_only_see_their_own_trash() {
    let store = InMemoryStore::default();
    let (_, admin) = bearer_for(Role::Admin);
    let (siti, siti_alumni) = signed_up_alumni(&store, "siti.aminah").await;
    let (budi, budi_alumni) = signed_up_alumni(&store, "budi.santoso").await;

    for (auth, alumni_id, company) in [
        (&siti, &siti_alumni, "PT Telkom Indonesia"),
        (&budi, &budi_alumni, "PT Pertamina"),
    ] {
        let job_id = create_job(&store, auth, alumni_id, company).await;
        let uri = format!("/pekerjaan/{job_id}");
        let (status, _) = call(&store, authed(TestRequest::delete().uri(&uri), auth)).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, body) = call(
        &store,
        authed(TestRequest::get().uri("/pekerjaan/filter/trash"), &siti),
    )
    .await;
    let entries = body["data"].as_array().expect("trash list");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["company_name"], "PT Telkom Indonesia");

    let (_, body) = call(
        &store,
        authed(TestRequest::get().uri("/pekerjaan/filter/trash"), &admin),
    )
    .await;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(2));
}

#[actix_web::test]
async fn alumni_cannot_touch_someone_elses_job() {
    let store = InMemoryStore::default();
    let (siti, siti_alumni) = signed_up_alumni(&store, "siti.aminah").await;
    let (budi, _) = signed_up_alumni(&store, "budi.santoso").await;

    let job_id = create_job(&store, &siti, &siti_alumni, "PT Telkom Indonesia").await;

    let (status, body) = call(
        &store,
        authed(
            TestRequest::post()
                .uri("/pekerjaan")
                .set_json(job_body(&siti_alumni, "PT Pertamina")),
            &budi,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"]["code"], "FORBIDDEN");

    let uri = format!("/pekerjaan/{job_id}");
    let (status, _) = call(&store, authed(TestRequest::delete().uri(&uri), &budi)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(store.job_count(), 1);
}

#[actix_web::test]
async fn uploaded_file_can_be_listed_and_removed() {
    let store = InMemoryStore::default();
    let (me, _) = signed_up_alumni(&store, "siti.aminah").await;

    let (content_type, payload) =
        multipart_body("file", "ijazah.pdf", "application/pdf", b"%PDF-1.7 test");
    let (status, body) = call(
        &store,
        authed(
            TestRequest::post()
                .uri("/api/files/upload")
                .insert_header((header::CONTENT_TYPE, content_type))
                .set_payload(payload),
            &me,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    let file_id = body["data"]["id"].as_str().expect("file id").to_string();
    assert_eq!(store.blob_count(), 1);

    let (_, body) = call(&store, authed(TestRequest::get().uri("/api/files"), &me)).await;
    assert_eq!(body["data"][0]["original_name"], "ijazah.pdf");

    let (status, body) = call(
        &store,
        authed(TestRequest::delete().uri(&format!("/api/files/{file_id}")), &me),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["storage_removed"], true);
    assert_eq!(store.blob_count(), 0);
}

#[actix_web::test]
async fn admin_registration_provisions_no_alumni() {
    let store = InMemoryStore::default();

    let (status, body) = call(
        &store,
        TestRequest::post().uri("/api/register").set_json(json!({
            "username": "operator",
            "email": "operator@example.com",
            "password": "rahasia123",
            "role": "admin",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert!(body["data"].get("alumni_id").map_or(true, Value::is_null));
    assert_eq!(store.alumni_count(), 0);

    signed_up_alumni(&store, "siti.aminah").await;
    assert_eq!(store.alumni_count(), 1);
}

#[actix_web::test]
async fn restore_cycle_between_owner_stranger_and_admin() {
    let store = InMemoryStore::default();
    let (_, admin) = bearer_for(Role::Admin);
    let (owner, owner_alumni) = signed_up_alumni(&store, "siti.aminah").await;
    let (stranger, _) = signed_up_alumni(&store, "budi.santoso").await;

    let job_id = create_job(&store, &owner, &owner_alumni, "PT Telkom Indonesia").await;
    let job_uri = format!("/pekerjaan/{job_id}");
    let restore_uri = format!("/pekerjaan/filter/restore/{job_id}");

    let (status, _) = call(
        &store,
        authed(
            TestRequest::put()
                .uri(&job_uri)
                .set_json(job_body(&owner_alumni, "PT Pertamina")),
            &stranger,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = call(&store, authed(TestRequest::put().uri(&restore_uri), &admin)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "JOB_NOT_TRASHED");

    call(&store, authed(TestRequest::delete().uri(&job_uri), &admin)).await;
    let (_, body) = call(&store, authed(TestRequest::get().uri("/pekerjaan"), &admin)).await;
    assert_eq!(body["data"]["meta"]["total"], 0);

    // A second soft delete finds nothing to trash
    let (status, _) = call(&store, authed(TestRequest::delete().uri(&job_uri), &admin)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call(&store, authed(TestRequest::put().uri(&restore_uri), &admin)).await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = call(&store, authed(TestRequest::get().uri("/pekerjaan"), &admin)).await;
    assert_eq!(body["data"]["items"][0]["company_name"], "PT Telkom Indonesia");
}

#[actix_web::test]
async fn alumni_never_restore_or_purge_even_their_own_active_job() {
    let store = InMemoryStore::default();
    let (owner, owner_alumni) = signed_up_alumni(&store, "siti.aminah").await;
    let (stranger, _) = signed_up_alumni(&store, "budi.santoso").await;
    let job_id = create_job(&store, &owner, &owner_alumni, "PT Telkom Indonesia").await;

    for auth in [&owner, &stranger] {
        let (status, body) = call(
            &store,
            authed(
                TestRequest::put().uri(&format!("/pekerjaan/filter/restore/{job_id}")),
                auth,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN, "{body}");
        assert_eq!(body["error"]["code"], "FORBIDDEN");

        let (status, body) = call(
            &store,
            authed(
                TestRequest::delete().uri(&format!("/pekerjaan/filter/delete/{job_id}")),
                auth,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN, "{body}");
        assert_eq!(body["error"]["code"], "FORBIDDEN");
    }
    assert_eq!(store.job_count(), 1);
}

#[actix_web::test]
async fn restore_brings_back_the_same_job_with_a_newer_timestamp() {
    let store = InMemoryStore::default();
    let (_, admin) = bearer_for(Role::Admin);
    let (owner, owner_alumni) = signed_up_alumni(&store, "siti.aminah").await;
    let job_id = create_job(&store, &owner, &owner_alumni, "PT Telkom Indonesia").await;
    let job_uri = format!("/pekerjaan/{job_id}");

    let (_, before) = call(&store, authed(TestRequest::get().uri(&job_uri), &admin)).await;
    let before = before["data"].clone();

    call(&store, authed(TestRequest::delete().uri(&job_uri), &admin)).await;
    let (status, after) = call(
        &store,
        authed(
            TestRequest::put().uri(&format!("/pekerjaan/filter/restore/{job_id}")),
            &admin,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let after = after["data"].clone();

    let stamp = |job: &Value| {
        job["updated_at"]
            .as_str()
            .and_then(|s| chrono::DateTime::parse_from_rfc3339(s).ok())
            .expect("updated_at timestamp")
    };
    assert!(stamp(&after) > stamp(&before));

    let without_stamp = |job: &Value| {
        let mut job = job.clone();
        job.as_object_mut().expect("job object").remove("updated_at");
        job
    };
    assert_eq!(without_stamp(&after), without_stamp(&before));
}

#[actix_web::test]
async fn trashed_jobs_drop_out_of_the_multi_job_report() {
    let store = InMemoryStore::default();
    let (owner, owner_alumni) = signed_up_alumni(&store, "siti.aminah").await;
    let report_uri = format!("/pekerjaan/filter/jobmoretwo/{owner_alumni}");

    create_job(&store, &owner, &owner_alumni, "PT Telkom Indonesia").await;
    let second = create_job(&store, &owner, &owner_alumni, "PT Pertamina").await;

    let (status, body) = call(&store, authed(TestRequest::get().uri(&report_uri), &owner)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["count"], 2);

    let (status, _) = call(
        &store,
        authed(TestRequest::delete().uri(&format!("/pekerjaan/{second}")), &owner),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call(&store, authed(TestRequest::get().uri(&report_uri), &owner)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(0));
}
