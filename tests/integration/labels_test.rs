//! Integration tests for folder path labels and link buttons.

mod helpers;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use foldernav_core::traits::surface::TreeSurface;
use foldernav_core::types::id::{FolderId, TestRunItemId};
use foldernav_service::{
    AnnotationPass, FolderLinkButtons, PageKind, TestCycleInfo, UiChangeNotifier,
};

use helpers::{InMemorySource, PROJECT_ID, RENDER_DELAY, TestApp, sample_tree};

#[tokio::test(start_paused = true)]
async fn test_path_labels_follow_rendered_rows() {
    let app = TestApp::new(
        InMemorySource::new(sample_tree()).with_items(&[(500, Some(3)), (501, Some(5)), (502, None)]),
    );
    let hash = format!("#!/v2/testCycle/PRJ-R2/addTestCases?projectId={PROJECT_ID}");
    let info = TestCycleInfo::from_hash(&hash).unwrap();
    assert_eq!(PageKind::detect(&hash), PageKind::TestCycleAddTestCases);

    app.page.render_rows(&[500]);
    let pass = app
        .navigator
        .prepare_path_labels(
            info.project_id.as_deref().unwrap(),
            &info.run_key,
            app.page.clone(),
        )
        .await
        .unwrap();

    let location = Arc::new(Mutex::new(hash));
    let current = Arc::clone(&location);
    let notifier = UiChangeNotifier::new();
    let watcher = notifier
        .subscribe()
        .with_guard(move || PageKind::detect(&current.lock().unwrap()) == PageKind::TestCycleAddTestCases);

    let page = Arc::clone(&app.page);
    let drive = async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        page.render_rows(&[501, 502]);
        notifier.notify();
        tokio::time::sleep(Duration::from_millis(50)).await;

        // Navigating away stops labeling.
        *location.lock().unwrap() = "#!/v2/testCases".to_string();
        page.render_rows(&[503]);
        notifier.notify();
        tokio::time::sleep(Duration::from_millis(50)).await;
    };

    let (labeled, ()) = tokio::join!(watcher.run(&pass), drive);

    assert_eq!(labeled, 2);
    let labels = app.page.labels.lock().unwrap();
    assert_eq!(labels[&TestRunItemId(500)], "(Regression/Login/SSO)");
    assert_eq!(labels[&TestRunItemId(501)], "(Regression/Checkout)");
    assert!(!labels.contains_key(&TestRunItemId(502)));
}

#[tokio::test(start_paused = true)]
async fn test_link_buttons_cover_newly_rendered_folders() {
    let app = TestApp::new(InMemorySource::new(sample_tree()));
    let pass = FolderLinkButtons::new(app.page.clone());

    assert_eq!(pass.run(), 2);
    assert_eq!(pass.run(), 0);

    assert!(app.page.trigger_expand(FolderId(1)));
    tokio::time::sleep(RENDER_DELAY).await;

    assert_eq!(pass.run(), 2);
    let buttons = app.page.buttons.lock().unwrap();
    for id in [1, 2, 5, 10] {
        assert!(buttons.contains(&FolderId(id)), "missing button on {id}");
    }
    assert!(!buttons.contains(&FolderId(3)));
}
