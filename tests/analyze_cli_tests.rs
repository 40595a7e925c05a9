mod common;

use common::TestEnv;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COMPLETION: &str = include_str!("fixtures/well_formed.txt");

fn configure(env: &TestEnv, server: &MockServer) {
    env.write_config(&format!(
        "[llm]\napi_key = \"sk-test\"\nendpoint = \"{}\"\n",
        server.uri()
    ));
}

async fn run_blocking(env: TestEnv, args: Vec<String>) -> (TestEnv, std::process::Output) {
    tokio::task::spawn_blocking(move || {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        let output = env.run(&args);
        (env, output)
    })
    .await
    .expect("blocking task panicked")
}

#[test]
fn analyze_subcommand_is_available() {
    let output = TestEnv::new().run(&["analyze", "--help"]);

    assert!(
        output.status.success(),
        "analyze --help should succeed\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn analyze_rejects_empty_transcript() {
    let env = TestEnv::new();
    let output = env.run(&["analyze"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(
        stderr.contains("Transcript is empty"),
        "expected empty transcript error, got:\n{}",
        stderr
    );
}

#[test]
fn analyze_requires_api_key() {
    let env = TestEnv::new();
    let transcript = env.write_file("meeting.txt", "Sarah: Let's ship on Friday.");

    let output = env.run(&["analyze", &transcript.to_string_lossy()]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(
        stderr.contains("API key is missing"),
        "expected missing key error, got:\n{}",
        stderr
    );
}

#[tokio::test]
async fn analyze_renders_report_from_provider() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{ "message": { "content": COMPLETION } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let env = TestEnv::new();
    configure(&env, &server);
    let transcript = env.write_file("meeting.txt", debrief::analysis::SAMPLE_TRANSCRIPT);

    let args = vec![
        "analyze".to_string(),
        transcript.to_string_lossy().into_owned(),
        "--name".to_string(),
        "Q3 Product Planning".to_string(),
        "--format".to_string(),
        "txt".to_string(),
    ];
    let (_env, output) = run_blocking(env, args).await;
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "analyze should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("Meeting   : Q3 Product Planning"));
    assert!(stdout.contains("• Prepare demo environment | John | Thursday | High"));
    assert!(stdout.contains("Sentiment : Productive"));
}

#[tokio::test]
async fn analyze_explains_rate_limit() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("Too Many Requests"))
        .mount(&server)
        .await;

    let env = TestEnv::new();
    configure(&env, &server);
    let transcript = env.write_file("meeting.txt", "Mike: Any blockers?");

    let args = vec!["analyze".to_string(), transcript.to_string_lossy().into_owned()];
    let (_env, output) = run_blocking(env, args).await;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(
        stderr.contains("Model busy!"),
        "expected rate limit guidance, got:\n{}",
        stderr
    );
}
