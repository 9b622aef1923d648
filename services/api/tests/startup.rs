//! Startup behaviour of the `interviewer-api` binary.

use std::net::TcpListener;
use std::process::Command;

/// Find an available port for testing
fn find_available_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

#[test]
fn test_missing_api_key_exits_before_binding() {
    let port = find_available_port();
    // Run from an empty directory so no `.env` file supplies the key.
    let workdir = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_interviewer-api"))
        .current_dir(workdir.path())
        .env_remove("OPENAI_API_KEY")
        .env("PORT", port.to_string())
        .env("BIND_HOST", "127.0.0.1")
        .env("RUST_LOG", "error")
        .output()
        .expect("failed to run interviewer-api");

    assert!(!output.status.success(), "status: {:?}", output.status);
    assert_eq!(output.status.code(), Some(1));

    let logs = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(logs.contains("OPENAI_API_KEY"), "logs: {logs}");

    // The port was never taken, so it can still be bound here.
    assert!(TcpListener::bind(("127.0.0.1", port)).is_ok());
}
