use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn blogql_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("blogql"));
    cmd.env_remove("BLOGQL_DATABASE").env_remove("RUST_LOG");
    cmd
}

fn setup_test_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();

    blogql_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .success();

    temp_dir
}

fn stdout_json(temp_dir: &TempDir, args: &[&str]) -> serde_json::Value {
    let output = blogql_cmd()
        .args(args)
        .current_dir(temp_dir.path())
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    blogql_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GraphQL blog API"));
}

#[test]
fn test_version() {
    blogql_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("blogql"));
}

#[test]
fn test_not_initialized_error() {
    let temp_dir = TempDir::new().unwrap();

    blogql_cmd()
        .args(["user", "list"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("not initialized")
                .or(predicate::str::contains("Failed to load")),
        );
}

#[test]
fn test_schema_needs_no_project() {
    let temp_dir = TempDir::new().unwrap();

    blogql_cmd()
        .arg("schema")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("type Query"))
        .stdout(predicate::str::contains("addComment"));
}

// =============================================================================
// Initialization
// =============================================================================

#[test]
fn test_init_creates_config_and_database() {
    let temp_dir = TempDir::new().unwrap();

    blogql_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized"));

    assert!(temp_dir.path().join(".blogql.toml").exists());
    assert!(temp_dir.path().join("blog.db").exists());
}

#[test]
fn test_init_with_custom_database() {
    let temp_dir = TempDir::new().unwrap();

    blogql_cmd()
        .args(["init", "--database", "data/site.db"])
        .current_dir(temp_dir.path())
        .assert()
        .success();

    let config = std::fs::read_to_string(temp_dir.path().join(".blogql.toml")).unwrap();
    assert!(config.contains("data/site.db"));
    assert!(temp_dir.path().join("data/site.db").exists());
}

#[test]
fn test_init_twice_fails() {
    let temp_dir = setup_test_project();

    blogql_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn test_migrate_on_existing_project() {
    let temp_dir = setup_test_project();

    blogql_cmd()
        .arg("migrate")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Migrated"));
}

#[test]
fn test_migrate_in_memory_database() {
    let temp_dir = TempDir::new().unwrap();

    blogql_cmd()
        .args(["--database", ":memory:", "migrate"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Migrated"))
        .stdout(predicate::str::contains(":memory:"))
        .stdout(predicate::str::contains("/:memory:").not());
}

// =============================================================================
// Users, posts, comments
// =============================================================================

#[test]
fn test_add_and_list_users() {
    let temp_dir = setup_test_project();

    blogql_cmd()
        .args(["user", "add", "a@x.com", "Alice"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    blogql_cmd()
        .args(["user", "list"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice"))
        .stdout(predicate::str::contains("a@x.com"));
}

#[test]
fn test_add_user_json_returns_generated_id() {
    let temp_dir = setup_test_project();

    let user = stdout_json(&temp_dir, &["user", "add", "a@x.com", "Alice", "--json"]);
    assert_eq!(user["userId"], 1);
    assert_eq!(user["name"], "Alice");

    let user = stdout_json(&temp_dir, &["user", "add", "b@x.com", "Bob", "--json"]);
    assert_eq!(user["userId"], 2);
}

#[test]
fn test_show_user_with_posts() {
    let temp_dir = setup_test_project();
    stdout_json(&temp_dir, &["user", "add", "a@x.com", "Alice", "--json"]);
    stdout_json(&temp_dir, &["post", "add", "1", "Hi", "Body", "--json"]);

    let shown = stdout_json(&temp_dir, &["user", "show", "1", "--json"]);
    assert_eq!(shown["user"]["email"], "a@x.com");
    assert_eq!(shown["posts"][0]["title"], "Hi");
}

#[test]
fn test_show_missing_user_fails() {
    let temp_dir = setup_test_project();

    blogql_cmd()
        .args(["user", "show", "999999"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("User not found: 999999"));
}

#[test]
fn test_post_show_with_comments() {
    let temp_dir = setup_test_project();
    stdout_json(&temp_dir, &["user", "add", "a@x.com", "Alice", "--json"]);
    stdout_json(&temp_dir, &["post", "add", "1", "Hi", "Body", "--json"]);
    let comment = stdout_json(&temp_dir, &["comment", "add", "1", "1", "Nice", "--json"]);
    assert_eq!(comment["commentId"], 1);

    blogql_cmd()
        .args(["post", "show", "1"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Hi"))
        .stdout(predicate::str::contains("Alice"))
        .stdout(predicate::str::contains("Nice"));
}

#[test]
fn test_post_for_unknown_user_is_accepted() {
    let temp_dir = setup_test_project();

    let post = stdout_json(&temp_dir, &["post", "add", "42", "Orphan", "x", "--json"]);
    assert_eq!(post["userId"], 42);

    blogql_cmd()
        .args(["post", "show", "1"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown user"));
}

#[test]
fn test_list_filters() {
    let temp_dir = setup_test_project();
    stdout_json(&temp_dir, &["post", "add", "1", "First", "x", "--json"]);
    stdout_json(&temp_dir, &["post", "add", "2", "Second", "x", "--json"]);
    stdout_json(&temp_dir, &["comment", "add", "1", "2", "On second", "--json"]);

    let posts = stdout_json(&temp_dir, &["post", "list", "--user", "2", "--json"]);
    assert_eq!(posts.as_array().unwrap().len(), 1);
    assert_eq!(posts[0]["title"], "Second");

    let comments = stdout_json(&temp_dir, &["comment", "list", "--post", "1", "--json"]);
    assert!(comments.as_array().unwrap().is_empty());
}

// =============================================================================
// GraphQL from the CLI
// =============================================================================

#[test]
fn test_mutate_then_query() {
    let temp_dir = setup_test_project();

    let response = stdout_json(
        &temp_dir,
        &["mutate", r#"addUser(email: "a@x.com", name: "Alice")"#],
    );
    assert_eq!(response["data"]["addUser"], 1);

    let response = stdout_json(
        &temp_dir,
        &["mutate", r#"addPost(userId: 1, title: "Hi", content: "Body")"#],
    );
    assert_eq!(response["data"]["addPost"], 1);

    let response = stdout_json(&temp_dir, &["query", "{ post(postId: 1) { user { name } } }"]);
    assert_eq!(response["data"]["post"]["user"]["name"], "Alice");
}

#[test]
fn test_query_with_variables() {
    let temp_dir = setup_test_project();
    stdout_json(&temp_dir, &["user", "add", "a@x.com", "Alice", "--json"]);

    let response = stdout_json(
        &temp_dir,
        &[
            "query",
            "query Get($id: Int!) { user(userId: $id) { email } }",
            "--variables",
            r#"{"id": 1}"#,
        ],
    );
    assert_eq!(response["data"]["user"]["email"], "a@x.com");
}

#[test]
fn test_query_in_memory_database_without_project() {
    let temp_dir = TempDir::new().unwrap();

    let response = stdout_json(
        &temp_dir,
        &["--database", ":memory:", "query", "{ users { userId } }"],
    );
    assert_eq!(response["data"]["users"], serde_json::json!([]));
    assert!(!temp_dir.path().join(".blogql.toml").exists());
}
