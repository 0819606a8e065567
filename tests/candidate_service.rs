use std::sync::{Arc, Mutex};

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use candidate_service::{
    CandidateRecord, CandidateService, ClientConfig, CvDescriptor, CvFile, EducationEntry,
};
use serde_json::{json, Value};

const MAX_CV_BYTES: usize = 10 * 1024 * 1024;
const ALLOWED_TYPES: [&str; 3] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

type Received = Arc<Mutex<Vec<Value>>>;

async fn upload(
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<Json<Value>, (StatusCode, String)> {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if !content_type.starts_with("multipart/form-data; boundary=") {
        return Err((StatusCode::BAD_REQUEST, "Expected multipart/form-data".to_string()));
    }

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let file_type = field.content_type().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

        if !ALLOWED_TYPES.contains(&file_type.as_str()) {
            return Err((
                StatusCode::BAD_REQUEST,
                "Invalid file type. Only PDF, DOC, and DOCX files are allowed.".to_string(),
            ));
        }
        if bytes.len() > MAX_CV_BYTES {
            return Err((
                StatusCode::PAYLOAD_TOO_LARGE,
                "File size exceeds the 10MB limit.".to_string(),
            ));
        }

        return Ok(Json(json!({
            "filePath": format!("uploads/1234567890-{}", file_name),
            "fileType": file_type
        })));
    }

    Err((StatusCode::BAD_REQUEST, "No file uploaded".to_string()))
}

async fn candidates(
    State(received): State<Received>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    received.lock().unwrap().push(body.clone());

    let too_long = body
        .as_object()
        .into_iter()
        .flat_map(|object| object.values())
        .filter_map(Value::as_str)
        .any(|text| text.chars().count() > 1000);
    if too_long {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Input exceeds maximum length." })),
        ));
    }

    let mut stored = body;
    stored["id"] = json!("1");
    stored["createdAt"] = json!("2023-05-15T10:30:00Z");
    Ok((StatusCode::CREATED, Json(stored)))
}

async fn spawn_backend() -> (CandidateService, Received) {
    let received: Received = Arc::new(Mutex::new(Vec::new()));

    let app = Router::new()
        .route("/upload", post(upload))
        .route("/candidates", post(candidates))
        .layer(DefaultBodyLimit::max(32 * 1024 * 1024))
        .with_state(received.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let config = ClientConfig::new(format!("http://{}/", addr)).with_timeout_seconds(10);
    (CandidateService::new(config).unwrap(), received)
}

fn candidate_json(first_name: &str) -> Value {
    json!({
        "firstName": first_name,
        "lastName": "O'Connor",
        "email": "maria.jose@example.com",
        "phone": "+34 (123) 456-789",
        "address": "Calle 123 #45-67, 2º B",
        "educations": [{
            "institution": "École Polytechnique",
            "title": "Ingénierie & Science",
            "startDate": "2015-09-01",
            "endDate": "2019-06-30"
        }],
        "workExperiences": [],
        "cv": {
            "filePath": "uploads/1234567890-resume.pdf",
            "fileType": "application/pdf"
        }
    })
}

#[tokio::test]
async fn test_upload_then_submit_round_trip() {
    let (service, received) = spawn_backend().await;

    let file = CvFile::new("resume.pdf", "application/pdf", b"dummy content".to_vec());
    let cv = service.upload_cv(file).await.unwrap();
    assert_eq!(
        cv,
        CvDescriptor {
            file_path: "uploads/1234567890-resume.pdf".to_string(),
            file_type: "application/pdf".to_string(),
        }
    );

    let record = CandidateRecord {
        first_name: "María-José".to_string(),
        last_name: "O'Connor".to_string(),
        email: "maria.jose@example.com".to_string(),
        phone: "+34 (123) 456-789".to_string(),
        address: "Calle 123 #45-67, 2º B".to_string(),
        educations: vec![EducationEntry {
            institution: "École Polytechnique".to_string(),
            title: "Ingénierie & Science".to_string(),
            start_date: "2015-09-01".to_string(),
            end_date: "2019-06-30".to_string(),
        }],
        work_experiences: vec![],
        cv,
    };

    let stored = service.send_candidate_data(&record).await.unwrap();

    assert_eq!(stored.id(), Some(&json!("1")));
    assert_eq!(stored.as_value()["firstName"], json!("María-José"));
    assert_eq!(
        received.lock().unwrap().as_slice(),
        &[candidate_json("María-José")]
    );
}

#[tokio::test]
async fn test_submit_purges_extra_fields_on_the_wire() {
    let (service, received) = spawn_backend().await;

    let mut input = candidate_json("John");
    input["extraField"] = json!("This should be removed");
    input["internalNotes"] = json!({ "score": 9 });

    let stored = service.send_candidate_data(&input).await.unwrap();

    let sent = received.lock().unwrap()[0].clone();
    assert_eq!(sent, candidate_json("John"));
    assert!(stored.as_value().get("extraField").is_none());
    assert_eq!(stored.created_at(), Some("2023-05-15T10:30:00Z"));
}

#[tokio::test]
async fn test_submit_backend_rejection_is_translated() {
    let (service, _) = spawn_backend().await;

    let err = service
        .send_candidate_data(&candidate_json(&"a".repeat(1001)))
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Error al enviar datos del candidato: Input exceeds maximum length."
    );
    assert_eq!(err.status(), Some(400));
}

#[tokio::test]
async fn test_upload_invalid_type_is_translated() {
    let (service, _) = spawn_backend().await;

    let file = CvFile::new("image.exe", "application/x-msdownload", b"MZ".to_vec());
    let err = service.upload_cv(file).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "Error al subir el archivo: Invalid file type. Only PDF, DOC, and DOCX files are allowed."
    );
}

#[tokio::test]
async fn test_upload_oversized_file_is_translated() {
    let (service, _) = spawn_backend().await;

    let file = CvFile::new(
        "large_resume.pdf",
        "application/pdf",
        vec![b'a'; 11 * 1024 * 1024],
    );
    let err = service.upload_cv(file).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "Error al subir el archivo: File size exceeds the 10MB limit."
    );
    assert_eq!(err.status(), Some(413));
}

#[tokio::test]
async fn test_unreachable_backend_is_upload_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let service = CandidateService::new(ClientConfig::new(format!("http://{}", addr))).unwrap();
    let file = CvFile::new("resume.pdf", "application/pdf", b"dummy content".to_vec());
    let err = service.upload_cv(file).await.unwrap_err();

    assert!(err.to_string().starts_with("Error al subir el archivo: "));
    assert_eq!(err.status(), None);
}
