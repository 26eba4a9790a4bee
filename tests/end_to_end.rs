#![allow(clippy::unwrap_used)]
//! Runs the `clearmail` binary against mock provider and translation servers.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const NATIVE: &str = "Je suis vraiment désolé, le paiement du loyer a été retardé à cause \
                      d'une erreur de ma banque. Je vais payer la semaine prochaine.";

const EMAIL: &str = "Dear Ms Byrne,\n\n\
                     I am sorry that my rent payment is late. My bank made an error.\n\n\
                     I will pay next week.\n\n\
                     Kind regards,\nAmélie";

/// Writes a config.toml pointing both services at the mock server.
fn write_config(home: &TempDir, server: &MockServer) {
    let dir = home.path().join("clearmail");
    std::fs::create_dir_all(&dir).unwrap();
    let config = format!(
        r#"[clearmail]
provider = "mock"

[providers.mock]
endpoint = "{uri}"
api_key = "test-key"
models = ["mock-model"]

[translation]
backend = "google"
endpoint = "{uri}"
"#,
        uri = server.uri()
    );
    std::fs::write(dir.join("config.toml"), config).unwrap();
}

#[allow(deprecated)]
fn clearmail(home: &TempDir, work: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("clearmail").unwrap();
    cmd.env("XDG_CONFIG_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("GROQ_API_KEY")
        .current_dir(work.path());
    cmd
}

async fn mount_translation(server: &MockServer, target: &str, output: &str) {
    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .and(query_param("tl", target))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([[[output, "source", null]], null, "fr"])),
        )
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_french_input_produces_email_preview_and_download() {
    let server = MockServer::start().await;
    mount_translation(
        &server,
        "en",
        "I am really sorry, the rent payment was delayed because of an error by my bank. \
         I will pay next week.",
    )
    .await;
    mount_translation(
        &server,
        "fr",
        "Chère Madame Byrne, je suis désolée que mon loyer soit en retard.",
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": EMAIL}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    write_config(&home, &server);

    let mut cmd = clearmail(&home, &work);
    cmd.args([
        "--native",
        NATIVE,
        "--details",
        "Apartment 4, 12 Main Street",
        "--tone",
        "apologetic",
        "--no-prompt",
    ]);
    tokio::task::spawn_blocking(move || {
        cmd.assert()
            .success()
            .stdout(predicate::str::contains("Dear Ms Byrne,"))
            .stdout(predicate::str::contains("Preview in your language (French)"))
            .stdout(predicate::str::contains("Chère Madame Byrne"))
            .stdout(predicate::str::contains("Saved email to email.txt"))
            .stdout(predicate::str::contains("Review the preview carefully"));
    })
    .await
    .unwrap();

    let saved = std::fs::read_to_string(work.path().join("email.txt")).unwrap();
    assert_eq!(saved, EMAIL);

    let requests = server.received_requests().await.unwrap();
    let completion = requests
        .iter()
        .find(|request| request.url.path() == "/v1/chat/completions")
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&completion.body).unwrap();
    assert_eq!(body["model"], "mock-model");
    assert_eq!(body["temperature"], 0.5);
    let user = body["messages"][1]["content"].as_str().unwrap();
    assert!(user.contains("because of an error by my bank"));
    assert!(user.contains("Apartment 4, 12 Main Street"));
    let system = body["messages"][0]["content"].as_str().unwrap();
    assert!(system.contains("Apologetic & solution-oriented"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_provider_failure_halts_without_download() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("over capacity"))
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    write_config(&home, &server);

    let mut cmd = clearmail(&home, &work);
    cmd.args(["--notes", "ask to move the meeting", "--no-prompt"]);
    tokio::task::spawn_blocking(move || {
        cmd.assert()
            .code(exitcode::UNAVAILABLE)
            .stderr(predicate::str::contains("LLM provider error"))
            .stderr(predicate::str::contains("over capacity"))
            .stdout(predicate::str::contains("Dear").not());
    })
    .await
    .unwrap();

    assert!(!work.path().join("email.txt").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_translation_outage_still_drafts_email() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": EMAIL}}]
        })))
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    write_config(&home, &server);

    let mut cmd = clearmail(&home, &work);
    cmd.args(["--native", NATIVE, "--no-prompt"]);
    tokio::task::spawn_blocking(move || {
        cmd.assert()
            .success()
            .stdout(predicate::str::contains(
                "(Could not translate preview. Showing English.)",
            ))
            .stdout(predicate::str::contains("Dear Ms Byrne,"));
    })
    .await
    .unwrap();

    let requests = server.received_requests().await.unwrap();
    let completion = requests
        .iter()
        .find(|request| request.url.path() == "/v1/chat/completions")
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&completion.body).unwrap();
    // Untranslated native text is still passed through to the draft
    let user = body["messages"][1]["content"].as_str().unwrap();
    assert!(user.contains("paiement du loyer"));
}
