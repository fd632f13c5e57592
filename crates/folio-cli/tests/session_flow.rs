use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// `folio` with config and session directories inside `home`
fn folio(home: &Path, server: &MockServer) -> Command {
    let mut cmd = cargo_bin_cmd!("folio");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_DATA_HOME", home.join("data"))
        .env("FOLIO_API_URL", format!("{}/api", server.uri()))
        .env_remove("FOLIO_EMAIL")
        .env_remove("FOLIO_PASSWORD")
        .env_remove("RUST_LOG");
    cmd
}

fn session_file(home: &Path) -> PathBuf {
    home.join("data").join("folio").join("session.json")
}

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "abc"})))
        .mount(server)
        .await;
}

fn log_in(home: &Path, server: &MockServer) {
    folio(home, server)
        .args(["login", "--email", "admin@example.com"])
        .env("FOLIO_PASSWORD", "secret")
        .assert()
        .success()
        .stdout(predicate::str::contains("Login successful!"));
}

#[tokio::test]
async fn test_login_persists_token_and_logout_clears_it() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start().await;
    mount_login(&server).await;

    log_in(home.path(), &server);
    let saved = std::fs::read_to_string(session_file(home.path())).unwrap();
    assert!(saved.contains("\"abc\""));

    folio(home.path(), &server)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("/login"));
    assert!(!session_file(home.path()).exists());

    // Logging out again is harmless
    folio(home.path(), &server).arg("logout").assert().success();
}

#[tokio::test]
async fn test_failed_login_shows_server_message() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid credentials"})),
        )
        .mount(&server)
        .await;

    folio(home.path(), &server)
        .args(["login", "--email", "admin@example.com"])
        .env("FOLIO_PASSWORD", "wrong")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid credentials"));
    assert!(!session_file(home.path()).exists());
}

#[tokio::test]
async fn test_admin_command_sends_bearer_token() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/messages"))
        .and(header("authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "messages": [{"id": 9, "name": "Ann", "email": "ann@example.com", "subject": "Hire"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    log_in(home.path(), &server);
    folio(home.path(), &server)
        .args(["admin", "messages", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ann"))
        .stdout(predicate::str::contains("Hire"));
}

#[tokio::test]
async fn test_rejected_token_is_cleared() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/skills"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "jwt expired"})))
        .mount(&server)
        .await;

    log_in(home.path(), &server);
    folio(home.path(), &server)
        .args(["admin", "skills", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Log in again"));
    assert!(!session_file(home.path()).exists());
}

#[tokio::test]
async fn test_open_protected_route_logs_in_then_returns() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/profile/me"))
        .and(header("authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"profile": {"name": "Sam"}})))
        .mount(&server)
        .await;

    folio(home.path(), &server)
        .args(["open", "/admin/profile"])
        .env("FOLIO_EMAIL", "admin@example.com")
        .env("FOLIO_PASSWORD", "secret")
        .assert()
        .success()
        .stdout(predicate::str::contains("redirecting to /login"))
        .stdout(predicate::str::contains("Returning to /admin/profile"))
        .stdout(predicate::str::contains("Sam"));
}

#[tokio::test]
async fn test_public_projects_need_no_login() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 1, "title": "Folio", "status": "published"}]
        })))
        .mount(&server)
        .await;

    folio(home.path(), &server)
        .args(["public", "projects"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Folio"))
        .stdout(predicate::str::contains("published"));
}
