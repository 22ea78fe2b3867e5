//! End-to-end login-edge migration tests: a real local store on disk, the
//! real router on an ephemeral port, and the real client in between.

use jiff::Timestamp;
use tempfile::TempDir;

use snipvault_core::models::session::{Session, User};
use snipvault_core::models::snippet::{CreateSnippetDto, Snippet, SnippetLanguage};
use snipvault_storage::facade::SnippetFacade;
use snipvault_storage::local::LocalStore;
use snipvault_storage::remote::RemoteStore;
use snipvault_sync::controller::{SyncController, SyncOutcome, SyncState};
use snipvault_sync::error::SyncError;

use snipvault_server::router;
use snipvault_server::state::AppState;

async fn spawn_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(AppState::new());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn session(id: &str) -> Session {
    Session {
        access_token: id.to_string(),
        user: User {
            id: id.to_string(),
            name: id.to_string(),
            email: format!("{id}@example.com"),
            image: None,
        },
    }
}

fn local_snippet(title: &str) -> Snippet {
    let now = Timestamp::now();
    Snippet {
        id: format!("local-{title}"),
        title: title.to_string(),
        description: None,
        code: "code".to_string(),
        language: SnippetLanguage::Markdown,
        tags: vec![],
        is_favorite: false,
        owner_id: None,
        created_at: now,
        updated_at: now,
    }
}

#[tokio::test]
async fn login_edge_migrates_everything_then_clears_local() {
    let base = spawn_server().await;
    let dir = TempDir::new().unwrap();
    let facade = SnippetFacade::new(dir.path(), &base);

    facade
        .local()
        .write(&[local_snippet("A"), local_snippet("B")])
        .unwrap();

    let user = session("alice");
    let remote = facade.remote_for(&user);
    let mut controller = SyncController::new(facade.local().clone());

    let outcome = controller.observe(Some(&user), &remote).await.unwrap();
    assert_eq!(outcome, SyncOutcome::Migrated { count: 2 });
    assert_eq!(controller.state(), SyncState::Idle);

    // Local slot is now explicitly empty, not back to the seed set.
    assert!(facade.local().read().is_empty());

    // The records live remotely with server ids and the session owner.
    let migrated = facade.get_all(Some(&user)).await.unwrap();
    assert_eq!(migrated.len(), 2);
    for s in &migrated {
        assert!(!s.id.starts_with("local-"), "server must mint fresh ids");
        assert_eq!(s.owner_id.as_deref(), Some("alice"));
    }
    let mut titles: Vec<&str> = migrated.iter().map(|s| s.title.as_str()).collect();
    titles.sort_unstable();
    assert_eq!(titles, vec!["A", "B"]);
}

#[tokio::test]
async fn repeated_observations_of_one_login_trigger_at_most_one_migration() {
    let base = spawn_server().await;
    let dir = TempDir::new().unwrap();
    let facade = SnippetFacade::new(dir.path(), &base);

    facade.local().write(&[local_snippet("A")]).unwrap();

    let user = session("alice");
    let remote = facade.remote_for(&user);
    let mut controller = SyncController::new(facade.local().clone());

    let first = controller.observe(Some(&user), &remote).await.unwrap();
    assert_eq!(first, SyncOutcome::Migrated { count: 1 });

    // A page reload while logged in re-observes the same session.
    let second = controller.observe(Some(&user), &remote).await.unwrap();
    assert_eq!(second, SyncOutcome::AlreadyObserved);

    let remote_rows = facade.get_all(Some(&user)).await.unwrap();
    assert_eq!(remote_rows.len(), 1, "nothing was migrated twice");
}

#[tokio::test]
async fn empty_local_store_syncs_as_a_no_op_without_remote_calls() {
    let base = spawn_server().await;
    let dir = TempDir::new().unwrap();
    let facade = SnippetFacade::new(dir.path(), &base);
    facade.local().write(&[]).unwrap();

    let user = session("alice");
    let remote = facade.remote_for(&user);
    let mut controller = SyncController::new(facade.local().clone());

    let outcome = controller.observe(Some(&user), &remote).await.unwrap();
    assert_eq!(outcome, SyncOutcome::NothingToMigrate);
    assert_eq!(controller.state(), SyncState::Idle);

    assert!(facade.get_all(Some(&user)).await.unwrap().is_empty());
}

#[tokio::test]
async fn failed_migration_keeps_local_data_and_stays_retryable() {
    let base = spawn_server().await;
    let dir = TempDir::new().unwrap();
    let local = LocalStore::new(dir.path());

    // One record the server will reject: blank title never passes
    // validation, so the whole batch is refused.
    let mut bad = local_snippet("ok");
    bad.title = String::new();
    let originals = vec![
        local_snippet("A"),
        local_snippet("B"),
        local_snippet("C"),
        bad,
        local_snippet("E"),
    ];
    local.write(&originals).unwrap();

    let user = session("alice");
    let remote = RemoteStore::connect(&base, &user);
    let mut controller = SyncController::new(local.clone());

    let err = controller.observe(Some(&user), &remote).await.unwrap_err();
    assert!(matches!(err, SyncError::Migration(_)));
    assert_eq!(controller.state(), SyncState::Idle);

    // Nothing committed remotely, all five records still local.
    assert!(remote_list_len(&remote).await == 0);
    assert_eq!(local.read().len(), 5);
    assert_eq!(controller.observed_identity(), None);

    // Repair the bad record; the next observed edge retries and succeeds.
    let mut repaired = local.read();
    for s in repaired.iter_mut() {
        if s.title.is_empty() {
            s.title = "D".to_string();
        }
    }
    local.write(&repaired).unwrap();

    let outcome = controller.observe(Some(&user), &remote).await.unwrap();
    assert_eq!(outcome, SyncOutcome::Migrated { count: 5 });
    assert!(local.read().is_empty());
    assert_eq!(remote_list_len(&remote).await, 5);
}

#[tokio::test]
async fn logout_resets_the_marker_so_a_new_login_is_a_fresh_edge() {
    let base = spawn_server().await;
    let dir = TempDir::new().unwrap();
    let local = LocalStore::new(dir.path());
    local.write(&[]).unwrap();

    let user = session("alice");
    let remote = RemoteStore::connect(&base, &user);
    let mut controller = SyncController::new(local.clone());

    assert_eq!(
        controller.observe(Some(&user), &remote).await.unwrap(),
        SyncOutcome::NothingToMigrate
    );
    assert_eq!(controller.observed_identity(), Some("alice"));

    assert_eq!(
        controller.observe(None, &remote).await.unwrap(),
        SyncOutcome::NoSession
    );
    assert_eq!(controller.observed_identity(), None);

    // New local work while logged out, then a fresh login edge.
    local.write(&[local_snippet("offline")]).unwrap();
    let outcome = controller.observe(Some(&user), &remote).await.unwrap();
    assert_eq!(outcome, SyncOutcome::Migrated { count: 1 });
}

async fn remote_list_len(remote: &RemoteStore) -> usize {
    use snipvault_storage::store::SnippetStore;
    remote.list().await.unwrap().len()
}
