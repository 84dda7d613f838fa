//! Integration tests for the resolution utilities
//!
//! The module resolver is driven by small shell helpers that speak the
//! framed reply protocol, so these tests need neither Node nor npm.

use lsp_wire::resolve::files::{is_parent, normalize_drive_letter, uri_to_file_path};
use lsp_wire::resolve::{HelperCommand, ModuleResolver, ResolveError};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// A helper that prints one framed reply and then drains its input.
#[cfg(unix)]
fn replying_helper(reply: &str) -> HelperCommand {
    let script = format!(
        "printf 'Content-Length: {}\\r\\n\\r\\n%s' '{}'; cat >/dev/null",
        reply.len(),
        reply
    );
    HelperCommand::new("sh").arg("-c").arg(script)
}

#[cfg(unix)]
#[tokio::test]
async fn test_resolved_path_is_returned() {
    let resolver = ModuleResolver::new()
        .with_helper(replying_helper(r#"{"c":"r","s":true,"r":"/lib/typescript/index.js"}"#));
    let path = resolver.resolve("typescript").await.unwrap();
    assert_eq!(path, PathBuf::from("/lib/typescript/index.js"));
}

#[cfg(unix)]
#[tokio::test]
async fn test_resolution_miss_is_not_found() {
    let resolver = ModuleResolver::new().with_helper(replying_helper(r#"{"c":"r","s":false}"#));
    match resolver.resolve("left-pad").await {
        Err(ResolveError::NotFound(module)) => assert_eq!(module, "left-pad"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[cfg(unix)]
#[tokio::test]
async fn test_garbage_reply_is_an_ipc_error() {
    let helper = HelperCommand::new("sh")
        .arg("-c")
        .arg("printf 'hello\\r\\n\\r\\n'; cat >/dev/null");
    let resolver = ModuleResolver::new().with_helper(helper);
    assert!(matches!(
        resolver.resolve("eslint").await,
        Err(ResolveError::Ipc(_))
    ));
}

#[cfg(unix)]
#[tokio::test]
async fn test_wrong_reply_kind_is_an_ipc_error() {
    let resolver = ModuleResolver::new().with_helper(replying_helper(r#"{"c":"x","s":true}"#));
    assert!(matches!(
        resolver.resolve("eslint").await,
        Err(ResolveError::Ipc(_))
    ));
}

#[cfg(unix)]
#[tokio::test]
async fn test_helper_exiting_early_is_an_ipc_error() {
    let resolver = ModuleResolver::new().with_helper(HelperCommand::new("true"));
    assert!(matches!(
        resolver.resolve("eslint").await,
        Err(ResolveError::Ipc(_))
    ));
}

#[cfg(unix)]
#[tokio::test]
async fn test_silent_helper_times_out() {
    let resolver = ModuleResolver::new()
        .with_helper(HelperCommand::new("sh").arg("-c").arg("cat >/dev/null"))
        .with_timeout(Duration::from_millis(200));
    match resolver.resolve("eslint").await {
        Err(ResolveError::Ipc(message)) => assert!(message.contains("did not answer")),
        other => panic!("expected a timeout, got {:?}", other),
    }
}

#[cfg(unix)]
#[tokio::test]
async fn test_unterminated_output_is_an_ipc_error() {
    let helper = HelperCommand::new("sh")
        .arg("-c")
        .arg("head -c 65536 /dev/zero | tr '\\0' 'x'; cat >/dev/null");
    let resolver = ModuleResolver::new().with_helper(helper);
    assert!(matches!(
        resolver.resolve("eslint").await,
        Err(ResolveError::Ipc(_))
    ));
}

#[tokio::test]
async fn test_missing_helper_is_a_spawn_error() {
    let resolver =
        ModuleResolver::new().with_helper(HelperCommand::new("lsp-wire-missing-helper"));
    assert!(matches!(
        resolver.resolve("eslint").await,
        Err(ResolveError::Spawn(_))
    ));
}

#[cfg(unix)]
#[tokio::test]
async fn test_helper_sees_node_path_and_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    let node_path = dir.path().join("global");

    // Echo $NODE_PATH and $PWD back as the resolved path.
    let script = r#"
        body=$(printf '{"c":"r","s":true,"r":"%s|%s"}' "$NODE_PATH" "$(pwd -P)")
        printf 'Content-Length: %s\r\n\r\n%s' "${#body}" "$body"
        cat >/dev/null
    "#;
    let resolver = ModuleResolver::new()
        .with_helper(HelperCommand::new("sh").arg("-c").arg(script))
        .with_node_path(&node_path)
        .with_working_directory(dir.path());

    let resolved = resolver.resolve("anything").await.unwrap();
    let resolved = resolved.to_string_lossy().into_owned();
    let (reported_node_path, reported_cwd) = resolved.split_once('|').unwrap();
    assert_eq!(reported_node_path, node_path.to_string_lossy());
    assert_eq!(
        PathBuf::from(reported_cwd),
        dir.path().canonicalize().unwrap()
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ResolveError::NotFound("vscode-languageserver".to_string()).to_string(),
        "cannot find module 'vscode-languageserver'"
    );
    let error: lsp_wire::Error = ResolveError::Ipc("bad frame".to_string()).into();
    assert!(error.to_string().contains("bad frame"));
}

#[test]
fn test_path_helpers() {
    let dir = tempfile::tempdir().unwrap();
    let child = dir.path().join("src").join("main.rs");
    assert!(is_parent(dir.path(), &child));
    assert!(!is_parent(&child, dir.path()));

    assert_eq!(normalize_drive_letter("e:\\work"), "E:\\work");

    let uri = Url::from_file_path(&child).unwrap();
    assert_eq!(uri_to_file_path(&uri), Some(child));
}
