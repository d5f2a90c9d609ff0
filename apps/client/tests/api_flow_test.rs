mod common;

use std::sync::Arc;

use bytes::Bytes;
use common::{client_with, StubTransport};
use reqwest::header::AUTHORIZATION;
use serde_json::json;

use client::api::{artists, auth, recommendations, songs};
use client::auth::now_unix;
use client::models::{Credentials, FileUpload, RegisterArtist};
use client::nav::{logout, role_router};
use client::{Body, Navigator, Notifier, Route, Session, ToastKind};
use client_test_support::envelope::success_body;
use client_test_support::tokens;

fn song_json(id: i64, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "titulo": title,
        "generoMusical": "ROCK",
        "fechaLanzamiento": "2020-01-01",
        "urlCancion": format!("http://cdn.test/songs/{id}.mp3"),
        "urlPortada": format!("http://cdn.test/covers/{id}.jpg"),
        "duracion": "03:05",
        "idArtista": 1
    })
}

#[tokio::test]
async fn test_login_routes_admin_to_admin_area() {
    let stub = StubTransport::new();
    let minted = tokens::mint("root", "ROLE_ADMIN", now_unix() + 900);
    stub.push_response(200, success_body(&json!({ "token": minted })));

    let session = Arc::new(Session::in_memory());
    let client = client_with(&stub, Arc::clone(&session), Notifier::new());

    let credentials = Credentials {
        username: "root".to_string(),
        password: "hunter2".to_string(),
    };
    let token = auth::login(&client, &credentials).await.unwrap();

    assert_eq!(role_router::land(&session, &token), Route::Admin);
    assert_eq!(session.token().unwrap(), token);
    assert_eq!(session.cached_role().as_deref(), Some("ROLE_ADMIN"));

    // The fresh session now passes the admission guard.
    let navigator = Navigator::new(Arc::clone(&session));
    assert_eq!(navigator.navigate(Route::Admin), Route::Admin);
}

#[tokio::test]
async fn test_login_with_unknown_role_lands_on_root() {
    let stub = StubTransport::new();
    let minted = tokens::mint("guest", "ROLE_GUEST", now_unix() + 900);
    stub.push_response(200, success_body(&json!({ "token": minted })));

    let session = Arc::new(Session::in_memory());
    let client = client_with(&stub, Arc::clone(&session), Notifier::new());

    let credentials = Credentials {
        username: "guest".to_string(),
        password: "guest".to_string(),
    };
    let token = auth::login(&client, &credentials).await.unwrap();

    assert_eq!(role_router::land(&session, &token), Route::Root);
}

#[tokio::test]
async fn test_logout_revokes_admission() {
    let session = Arc::new(Session::in_memory());
    let token = tokens::mint("maria", "ROLE_USUARIO", now_unix() + 900);
    assert_eq!(
        role_router::land(&session, &client::RawToken::new(token)),
        Route::User
    );

    let navigator = Navigator::new(Arc::clone(&session));
    assert_eq!(navigator.navigate(Route::User), Route::User);

    let notifier = Notifier::new();
    assert_eq!(logout(&session, &notifier, &navigator), Route::Root);

    assert!(session.token().is_none());
    assert_eq!(navigator.navigate(Route::User), Route::Root);
    assert_eq!(notifier.active()[0].kind, ToastKind::Success);
}

#[tokio::test]
async fn test_authenticated_song_listing_unwraps_envelope() {
    let stub = StubTransport::new();
    stub.push_response(
        200,
        success_body(&json!([song_json(1, "Aguacero"), song_json(2, "Rebelión")])),
    );

    let session = Arc::new(Session::in_memory());
    session
        .save(&client::RawToken::new(tokens::mint(
            "maria",
            "ROLE_USUARIO",
            now_unix() + 900,
        )))
        .unwrap();
    let client = client_with(&stub, Arc::clone(&session), Notifier::new());

    let listed = songs::list(&client).await.unwrap();

    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].title, "Aguacero");
    assert_eq!(listed[1].title, "Rebelión");

    // The call went out authenticated.
    let seen = stub.requests();
    assert!(seen[0].headers.get(AUTHORIZATION).is_some());
}

#[tokio::test]
async fn test_metrics_parses_loose_map() {
    let stub = StubTransport::new();
    stub.push_response(
        200,
        json!({
            "totalCanciones": 42,
            "artistaTop": "Joe Arroyo",
            "cancionesPorGenero": {"SALSA": 20, "ROCK": 22}
        })
        .to_string()
        .into_bytes(),
    );
    let client = client_with(&stub, Arc::new(Session::in_memory()), Notifier::new());

    let metrics = songs::metrics(&client).await.unwrap();

    assert_eq!(metrics.total_songs, 42);
    assert_eq!(metrics.top_artist.as_deref(), Some("Joe Arroyo"));
    assert_eq!(metrics.songs_per_genre.get("SALSA"), Some(&20));
}

#[tokio::test]
async fn test_artist_registration_builds_multipart_form() {
    let stub = StubTransport::new();
    stub.push_response(200, success_body(&"Artist registered"));

    let session = Arc::new(Session::in_memory());
    session
        .save(&client::RawToken::new(tokens::mint(
            "root",
            "ROLE_ADMIN",
            now_unix() + 900,
        )))
        .unwrap();
    let client = client_with(&stub, Arc::clone(&session), Notifier::new());

    let artist = RegisterArtist {
        stage_name: "La Sonora".to_string(),
        description: Some("Big band".to_string()),
        members: vec!["Ana".to_string(), "Luis".to_string()],
        cover: Some(FileUpload {
            filename: "cover.jpg".to_string(),
            content_type: "image/jpeg".to_string(),
            data: Bytes::from_static(b"\xff\xd8fakejpeg"),
        }),
    };

    let message = artists::register(&client, &artist).await.unwrap();
    assert_eq!(message, "Artist registered");

    let seen = stub.requests();
    assert!(seen[0].headers.get(AUTHORIZATION).is_some());
    match &seen[0].body {
        Body::Multipart(parts) => {
            let names: Vec<_> = parts.iter().map(|p| p.name.as_str()).collect();
            assert_eq!(
                names,
                vec![
                    "nombreArtistico",
                    "descripcion",
                    "miembros",
                    "miembros",
                    "imagenPortada"
                ]
            );
            let cover = parts.last().unwrap();
            assert_eq!(cover.filename.as_deref(), Some("cover.jpg"));
            assert_eq!(cover.content_type.as_deref(), Some("image/jpeg"));
        }
        other => panic!("expected multipart body, got {other:?}"),
    }
}

#[tokio::test]
async fn test_radio_recommendation_unwraps_queue() {
    let stub = StubTransport::new();
    stub.push_response(
        200,
        success_body(&json!({
            "idCancionBase": 7,
            "colaReproduccion": [song_json(8, "Siguiente"), song_json(9, "Después")]
        })),
    );
    let client = client_with(&stub, Arc::new(Session::in_memory()), Notifier::new());

    let radio = recommendations::radio(&client, 7).await.unwrap();

    assert_eq!(radio.seed_song_id, 7);
    assert_eq!(radio.queue.len(), 2);
}

#[tokio::test]
async fn test_file_backed_session_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let storage_dir = dir.path().join("session");
    let token = client::RawToken::new(tokens::mint("maria", "ROLE_USUARIO", now_unix() + 900));

    {
        let session = Session::new(Box::new(client::FileStorage::new(storage_dir.clone())));
        assert_eq!(role_router::land(&session, &token), Route::User);
    }

    // A new session over the same directory sees the persisted state.
    let reopened = Session::new(Box::new(client::FileStorage::new(storage_dir)));
    assert_eq!(reopened.token().unwrap(), token);
    assert_eq!(reopened.cached_role().as_deref(), Some("ROLE_USUARIO"));

    let navigator = Navigator::new(Arc::new(reopened));
    assert_eq!(navigator.navigate(Route::User), Route::User);
}
