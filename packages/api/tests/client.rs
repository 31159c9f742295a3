//! Accessor behaviour against an in-process backend.

use api::{ApiClient, ApiError, SearchFilters, StudentPayload, TeachingMode, TutorPayload};
use axum::extract::{Path, RawQuery};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};

/// Serve `router` under `/api` on an ephemeral port and return the API base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().nest("/api", router);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api")
}

/// Echo the raw query string back as the name of a single tutor.
async fn echo_query(RawQuery(query): RawQuery) -> Json<Value> {
    Json(json!([{"id": 1, "name": query.unwrap_or_default(), "subjects": []}]))
}

#[tokio::test]
async fn test_search_without_filters_sends_no_query() {
    let base = serve(Router::new().route("/tutors/search", get(echo_query))).await;
    let client = ApiClient::new(base);

    let tutors = client.search_tutors(&SearchFilters::default()).await.unwrap();
    assert_eq!(tutors.len(), 1);
    assert_eq!(tutors[0].name, "");
}

#[tokio::test]
async fn test_search_sends_only_set_filters() {
    let base = serve(Router::new().route("/tutors/search", get(echo_query))).await;
    let client = ApiClient::new(base);

    let filters = SearchFilters {
        subject: "Math".into(),
        min_rating: "4".into(),
        teaching_mode: TeachingMode::Online.as_str().into(),
        ..Default::default()
    };
    let tutors = client.search_tutors(&filters).await.unwrap();
    assert_eq!(tutors[0].name, "subject=Math&min_rating=4&teaching_mode=online");
}

#[tokio::test]
async fn test_detail_error_carries_status_and_message() {
    let router = Router::new().route(
        "/tutors/{id}",
        get(|Path(id): Path<i64>| async move {
            if id == 1 {
                Json(json!({"id": 1, "name": "Ada", "reviews": []})).into_response()
            } else {
                (StatusCode::NOT_FOUND, Json(json!({"detail": "Not found"}))).into_response()
            }
        }),
    );
    let client = ApiClient::new(serve(router).await);

    let tutor = client.get_tutor(1).await.unwrap();
    assert_eq!(tutor.name, "Ada");
    assert_eq!(tutor.reviews, Some(vec![]));

    let err = client.get_tutor(2).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert!(err.to_string().contains("Not found"));
    assert_eq!(err.body(), Some(&json!({"detail": "Not found"})));
}

#[tokio::test]
async fn test_text_error_body() {
    let router = Router::new().route(
        "/subjects",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database is down") }),
    );
    let client = ApiClient::new(serve(router).await);

    let err = client.list_subjects().await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 500, .. }));
    assert_eq!(err.to_string(), "Request failed: 500 - database is down");
}

#[tokio::test]
async fn test_students_envelopes() {
    let router = Router::new()
        .route(
            "/students",
            get(|| async {
                Json(json!({
                    "value": [
                        {"id": 1, "name": "Sam", "city": "Berlin", "preferred_subjects": "Math"},
                        {"id": 2, "name": "Kim", "preferred_subjects": [{"name": "Art"}]}
                    ],
                    "Count": 2
                }))
            }),
        )
        .route(
            "/cities",
            get(|| async { Json(json!(["Berlin", "Munich", 3])) }),
        );
    let client = ApiClient::new(serve(router).await);

    let students = client.list_students().await.unwrap();
    assert_eq!(students.len(), 2);
    assert_eq!(students[1].preferred_subjects.as_ref().unwrap().display(), "Art");

    // Non-string entries are skipped rather than failing the list.
    let cities = client.list_cities().await.unwrap();
    assert_eq!(cities, vec!["Berlin", "Munich"]);
}

#[tokio::test]
async fn test_recommendations_flag_and_wrapper() {
    let router = Router::new().route(
        "/students/{id}/recommendations",
        get(|Path(id): Path<i64>, RawQuery(query): RawQuery| async move {
            let tutors = json!([{
                "id": id,
                "name": "Ada",
                "explanation": query.unwrap_or_default()
            }]);
            if id == 1 {
                Json(tutors)
            } else {
                Json(json!({"recommended_tutors": tutors}))
            }
        }),
    );
    let client = ApiClient::new(serve(router).await);

    let bare = client.recommendations(1, true).await.unwrap();
    assert_eq!(bare[0].explanation.as_deref(), Some("use_ai=true"));

    let wrapped = client.recommendations(2, false).await.unwrap();
    assert_eq!(wrapped[0].id, 2);
    assert_eq!(wrapped[0].explanation.as_deref(), Some("use_ai=false"));
}

#[tokio::test]
async fn test_writes_send_json() {
    // `Json` rejects requests without `Content-Type: application/json`.
    let router = Router::new()
        .route(
            "/tutors",
            post(|Json(body): Json<Value>| async move {
                (
                    StatusCode::CREATED,
                    Json(json!({"id": 10, "name": body["name"], "subjects": body["subjects"]})),
                )
            }),
        )
        .route(
            "/tutors/{id}",
            put(|Path(id): Path<i64>, Json(body): Json<Value>| async move {
                Json(json!({"id": id, "name": body["name"], "hourly_rate": body["hourly_rate"]}))
            })
            .delete(|| async { Json(json!({"deleted": true})) }),
        )
        .route(
            "/students",
            post(|Json(body): Json<Value>| async move {
                Json(json!({
                    "id": 20,
                    "name": body["name"],
                    "preferred_subjects": body["preferred_subjects"],
                    "max_hourly_rate": body["max_hourly_rate"]
                }))
            }),
        )
        .route(
            "/students/{id}",
            put(|Path(id): Path<i64>| async move {
                (StatusCode::NOT_FOUND, Json(json!({"detail": format!("Student {id} not found")})))
            })
            .delete(|| async { StatusCode::NO_CONTENT }),
        );
    let client = ApiClient::new(serve(router).await);

    let payload = TutorPayload {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        subjects: vec!["Math".into(), "Physics".into()],
        ..Default::default()
    };
    let created = client.create_tutor(&payload).await.unwrap();
    assert_eq!(created.id, 10);
    assert_eq!(created.subjects.names(), vec!["Math", "Physics"]);

    let updated = client
        .update_tutor(10, &TutorPayload { hourly_rate: Some(42.5), ..payload })
        .await
        .unwrap();
    assert_eq!(updated.hourly_rate, Some(42.5));
    client.delete_tutor(10).await.unwrap();

    let student = client
        .create_student(&StudentPayload {
            name: "Sam".into(),
            email: "sam@example.com".into(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(student.id, 20);
    assert_eq!(student.preferred_subjects, None);
    assert_eq!(student.max_hourly_rate, None);

    let err = client
        .update_student(99, &StudentPayload::default())
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert!(err.to_string().contains("Student 99 not found"));

    // An empty 204 body is fine for deletes.
    client.delete_student(20).await.unwrap();
}

#[tokio::test]
async fn test_chat() {
    let router = Router::new().route(
        "/chat",
        post(|Json(body): Json<Value>| async move {
            Json(json!({
                "reply": format!("Hi {}! {}", body["student_id"], body["message"].as_str().unwrap_or("")),
                "tutors": [{"id": 3, "name": "Grace", "explanation": "Close by"}]
            }))
        }),
    );
    let client = ApiClient::new(serve(router).await);

    let reply = client.chat(7, "cheaper please", true).await.unwrap();
    assert_eq!(reply.reply, "Hi 7! cheaper please");
    assert_eq!(reply.tutors.len(), 1);
    assert_eq!(reply.tutors[0].explanation.as_deref(), Some("Close by"));
}

#[tokio::test]
async fn test_transport_error_has_no_status() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(format!("http://{addr}/api"));
    let err = client.list_subjects().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(err.status(), None);
}
