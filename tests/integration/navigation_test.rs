//! Integration tests for sharing a folder link and following it.

mod helpers;

use std::sync::atomic::Ordering;

use foldernav_core::error::ErrorKind;
use foldernav_core::types::id::{FolderId, folder_chain};
use foldernav_service::{ExpansionFailure, ExpansionState, NavigationParams};

use helpers::{InMemorySource, PROJECT_ID, RENDER_DELAY, TestApp, fragment, reorganized_tree, sample_tree};

#[tokio::test(start_paused = true)]
async fn test_follow_shared_link_through_lazy_tree() {
    let app = TestApp::new(InMemorySource::new(sample_tree()));

    let url = app.navigator.share_link(&app.host(), FolderId(3)).await.unwrap();
    assert!(url.starts_with("https://example.atlassian.net/projects/PRJ?selectedItem="));
    assert!(url.contains("#uiExtensionsFolderId=3&p="));

    let report = app
        .navigator
        .follow(fragment(&url), app.page.as_ref())
        .await
        .unwrap()
        .expect("link carries navigation params");

    assert!(report.is_done(), "states: {:?}", report.states);
    assert_eq!(app.page.expand_clicks(), folder_chain(&[1, 2]));
    assert_eq!(app.page.selected(), folder_chain(&[3]));
    assert!(app.page.elapsed() >= RENDER_DELAY * 2);
}

#[tokio::test(start_paused = true)]
async fn test_stale_link_aborts_at_missing_folder() {
    let mut app = TestApp::new(InMemorySource::new(sample_tree()));
    let url = app.navigator.share_link(&app.host(), FolderId(3)).await.unwrap();

    // The folder moved after the link was shared.
    app.source.replace_tree(reorganized_tree());
    app.rerender(&reorganized_tree());

    let report = app
        .navigator
        .follow(fragment(&url), app.page.as_ref())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(
        report.outcome(),
        ExpansionState::Failed(ExpansionFailure::NotFound {
            folder_id: FolderId(2),
            at_index: 1,
        })
    );
    assert!(!report.visited(ExpansionState::Locating(2)));
    assert!(app.page.selected().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_link_without_path_only_reaches_rendered_folders() {
    let app = TestApp::new(InMemorySource::new(sample_tree()));
    let mut host = app.host();
    host.project_id = None;

    let nested = app.navigator.share_link(&host, FolderId(3)).await.unwrap();
    let root = app.navigator.share_link(&host, FolderId(10)).await.unwrap();
    assert!(!nested.contains("&p="));
    assert_eq!(app.source.tree_fetches.load(Ordering::SeqCst), 0);

    let report = app
        .navigator
        .follow(fragment(&nested), app.page.as_ref())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        report.into_result(),
        Err(ExpansionFailure::NotFound {
            folder_id: FolderId(3),
            at_index: 0,
        })
    );

    let report = app
        .navigator
        .follow(fragment(&root), app.page.as_ref())
        .await
        .unwrap()
        .unwrap();
    assert!(report.is_done());
    assert_eq!(app.page.selected(), folder_chain(&[10]));
}

#[tokio::test(start_paused = true)]
async fn test_go_to_folder_after_refresh() {
    let app = TestApp::new(InMemorySource::new(sample_tree()));
    app.navigator.refresh(PROJECT_ID).await.unwrap();

    let report = app
        .navigator
        .go_to_folder(PROJECT_ID, FolderId(4), app.page.as_ref())
        .await;

    assert!(report.is_done());
    assert_eq!(app.page.selected(), folder_chain(&[4]));
}

#[tokio::test]
async fn test_shared_link_round_trips_through_params() {
    let app = TestApp::new(InMemorySource::new(sample_tree()));
    let url = app.navigator.share_link(&app.host(), FolderId(5)).await.unwrap();

    let request = NavigationParams::parse(fragment(&url))
        .unwrap()
        .unwrap()
        .into_request();
    assert_eq!(request.target_id, FolderId(5));
    assert_eq!(request.chain(), Some(&folder_chain(&[1, 5])[..]));
}

#[tokio::test]
async fn test_follow_rejects_bad_folder_id() {
    let app = TestApp::new(InMemorySource::new(sample_tree()));
    let err = app
        .navigator
        .follow("#!/v2/testCases#uiExtensionsFolderId=abc", app.page.as_ref())
        .await
        .unwrap_err();
    assert!(err.is(ErrorKind::Validation));
}

#[tokio::test(start_paused = true)]
async fn test_follow_with_undecodable_token_opens_folder_directly() {
    let app = TestApp::new(InMemorySource::new(sample_tree()));

    let report = app
        .navigator
        .follow("#!/v2/testCases#uiExtensionsFolderId=10&p=%FF", app.page.as_ref())
        .await
        .unwrap()
        .expect("folder id is present");

    assert!(report.is_done(), "states: {:?}", report.states);
    assert!(app.page.expand_clicks().is_empty());
    assert_eq!(app.page.selected(), folder_chain(&[10]));
}

#[tokio::test]
async fn test_follow_rejects_signed_folder_id() {
    let app = TestApp::new(InMemorySource::new(sample_tree()));
    let err = app
        .navigator
        .follow("#!/v2/testCases#uiExtensionsFolderId=+10", app.page.as_ref())
        .await
        .unwrap_err();
    assert!(err.is(ErrorKind::Validation));
    assert!(app.page.selected().is_empty());
}
