//! End-to-end runs of the inventory-and-sync workflow against a temporary
//! home directory and a recording remote

mod common;

use common::{make_checkout, read_snapshot, write_snapshot, RecordingRemote, OWNER};
use pretty_assertions::assert_eq;
use repo_roster::application::use_cases::{
    SyncOperation, SyncWorkstationConfig, SyncWorkstationUseCase,
};
use repo_roster::domain::value_objects::AliasStyle;
use repo_roster::RosterError;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Workstation {
    _temp: TempDir,
    root: PathBuf,
    snapshot: PathBuf,
    aliases: PathBuf,
}

impl Workstation {
    fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("home");
        std::fs::create_dir(&root).unwrap();
        Self {
            snapshot: temp.path().join("repo_list.json"),
            aliases: temp.path().join("repo_aliases"),
            root,
            _temp: temp,
        }
    }

    fn config(&self) -> SyncWorkstationConfig {
        SyncWorkstationConfig::default()
            .with_scan_root(&self.root)
            .with_snapshot_path(&self.snapshot)
            .with_alias_path(&self.aliases)
            .with_identity(OWNER)
    }

    fn aliases_text(&self) -> String {
        std::fs::read_to_string(&self.aliases).unwrap()
    }
}

fn names(records: &[(String, PathBuf)]) -> Vec<&str> {
    records.iter().map(|(n, _)| n.as_str()).collect()
}

#[tokio::test]
async fn test_empty_home_writes_empty_artifacts() {
    let ws = Workstation::new();

    let use_case = SyncWorkstationUseCase::new(ws.config(), RecordingRemote::new());
    let report = use_case.execute().await.unwrap();

    assert!(report.outcome.inventory.is_empty());
    assert!(use_case.remote().calls().is_empty());
    assert_eq!(std::fs::read_to_string(&ws.snapshot).unwrap(), "[]\n");
    assert_eq!(ws.aliases_text(), "");
}

#[tokio::test]
async fn test_owned_checkouts_are_recorded_pulled_and_aliased() {
    let ws = Workstation::new();
    let mine = make_checkout(&ws.root, "my-repo.tools", OWNER);
    make_checkout(&ws.root, "vendored", "someoneelse");
    std::fs::create_dir(ws.root.join("notes")).unwrap();

    let use_case = SyncWorkstationUseCase::new(ws.config(), RecordingRemote::new());
    let report = use_case.execute().await.unwrap();

    assert_eq!(report.discovered_count, 1);
    assert_eq!(use_case.remote().calls(), vec!["pull my-repo.tools"]);
    assert_eq!(
        read_snapshot(&ws.snapshot),
        vec![("my-repo.tools".to_string(), mine.clone())]
    );

    let aliases = ws.aliases_text();
    assert!(aliases.contains(&format!(
        "abbr --add my-repo.tools 'cd {} && ls && cat README.md && git pull'",
        mine.display()
    )));
    assert!(aliases.contains(&format!("export MY_REPO_TOOLS=\"{}\"", mine.display())));
}

#[tokio::test]
async fn test_nested_owned_checkout_is_hidden_by_its_owned_parent() {
    let ws = Workstation::new();
    let outer = make_checkout(&ws.root, "outer", OWNER);
    make_checkout(&outer, "inner", OWNER);

    let foreign = make_checkout(&ws.root, "fork", "upstream");
    let nested = make_checkout(&foreign, "patches", OWNER);

    let use_case = SyncWorkstationUseCase::new(ws.config(), RecordingRemote::new());
    use_case.execute().await.unwrap();

    assert_eq!(
        read_snapshot(&ws.snapshot),
        vec![
            ("outer".to_string(), outer),
            ("patches".to_string(), nested),
        ]
    );
}

#[tokio::test]
async fn test_remembered_repository_missing_on_disk_is_cloned() {
    let ws = Workstation::new();
    let gone = ws.root.join("archive").join("gone");
    let kept = make_checkout(&ws.root, "kept", OWNER);
    write_snapshot(&ws.snapshot, &[("gone", gone.as_path()), ("kept", kept.as_path())]);

    let use_case = SyncWorkstationUseCase::new(ws.config(), RecordingRemote::new());
    let report = use_case.execute().await.unwrap();

    assert_eq!(use_case.remote().calls(), vec!["clone gone", "pull kept"]);
    assert_eq!(report.outcome.cloned, vec!["gone"]);
    assert_eq!(report.outcome.pulled, vec!["kept"]);
    assert!(gone.join(".git").is_dir());
    assert_eq!(names(&read_snapshot(&ws.snapshot)), vec!["gone", "kept"]);
}

#[tokio::test]
async fn test_location_conflict_stops_before_any_side_effect() {
    let ws = Workstation::new();
    make_checkout(&ws.root, "foo", OWNER);
    let elsewhere = Path::new("/a/foo");
    let missing = ws.root.join("missing");
    write_snapshot(&ws.snapshot, &[("foo", elsewhere), ("missing", missing.as_path())]);
    std::fs::write(&ws.aliases, "# previous aliases\n").unwrap();
    let snapshot_before = std::fs::read_to_string(&ws.snapshot).unwrap();

    let use_case = SyncWorkstationUseCase::new(ws.config(), RecordingRemote::new());
    let error = use_case.execute().await.unwrap_err();

    assert!(error.is_conflict());
    match &error {
        RosterError::ConflictError { names, .. } => assert_eq!(names, &vec!["foo".to_string()]),
        other => panic!("Expected ConflictError, got {:?}", other),
    }
    assert!(use_case.remote().calls().is_empty());
    assert!(!missing.exists());
    assert_eq!(std::fs::read_to_string(&ws.snapshot).unwrap(), snapshot_before);
    assert_eq!(ws.aliases_text(), "# previous aliases\n");
}

#[tokio::test]
async fn test_remote_failures_do_not_stop_the_run() {
    let ws = Workstation::new();
    make_checkout(&ws.root, "broken", OWNER);
    make_checkout(&ws.root, "fine", OWNER);

    let remote = RecordingRemote::new().failing_for("broken");
    let use_case = SyncWorkstationUseCase::new(ws.config(), remote);
    let report = use_case.execute().await.unwrap();

    assert_eq!(use_case.remote().calls(), vec!["pull broken", "pull fine"]);
    assert_eq!(report.outcome.failures.len(), 1);
    assert_eq!(report.outcome.failures[0].name, "broken");
    assert_eq!(report.outcome.failures[0].operation, SyncOperation::Pull);
    assert_eq!(names(&read_snapshot(&ws.snapshot)), vec!["broken", "fine"]);
}

#[tokio::test]
async fn test_failed_clone_keeps_the_repository_remembered() {
    let ws = Workstation::new();
    let gone = ws.root.join("gone");
    write_snapshot(&ws.snapshot, &[("gone", gone.as_path())]);

    let remote = RecordingRemote::new().failing_for("gone");
    let use_case = SyncWorkstationUseCase::new(ws.config(), remote);
    let report = use_case.execute().await.unwrap();

    assert_eq!(report.outcome.failures[0].operation, SyncOperation::Clone);
    assert_eq!(read_snapshot(&ws.snapshot), vec![("gone".to_string(), gone)]);
    assert!(ws.aliases_text().contains("export GONE="));
}

#[tokio::test]
async fn test_legacy_snapshot_with_path_key_is_upgraded() {
    let ws = Workstation::new();
    let kept = make_checkout(&ws.root, "kept", OWNER);
    std::fs::write(
        &ws.snapshot,
        format!(r#"[{{"name": "kept", "path": "{}"}}]"#, kept.display()),
    )
    .unwrap();

    let use_case = SyncWorkstationUseCase::new(ws.config(), RecordingRemote::new());
    use_case.execute().await.unwrap();

    let text = std::fs::read_to_string(&ws.snapshot).unwrap();
    assert!(text.contains("\"location\""));
    assert!(!text.contains("\"path\""));
}

#[tokio::test]
async fn test_bash_alias_style() {
    let ws = Workstation::new();
    let api = make_checkout(&ws.root, "api", OWNER);

    let config = ws.config().with_alias_style(AliasStyle::Alias);
    SyncWorkstationUseCase::new(config, RecordingRemote::new())
        .execute()
        .await
        .unwrap();

    assert_eq!(
        ws.aliases_text(),
        format!(
            "alias api='cd {0} && ls && cat README.md && git pull'\nexport API=\"{0}\"\n",
            api.display()
        )
    );
}

#[tokio::test]
async fn test_missing_scan_root_is_fatal_and_writes_nothing() {
    let ws = Workstation::new();
    let config = ws.config().with_scan_root(ws.root.join("does-not-exist"));

    let result = SyncWorkstationUseCase::new(config, RecordingRemote::new())
        .execute()
        .await;

    assert!(matches!(result, Err(RosterError::FileSystemError { .. })));
    assert!(!ws.snapshot.exists());
    assert!(!ws.aliases.exists());
}
