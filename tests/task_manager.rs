use timedock::ui::core::{Action, TaskManager};
use tokio::time::{timeout, Duration};

#[tokio::test]
async fn test_delayed_action_arrives() {
    let (mut manager, mut rx) = TaskManager::new();
    manager.spawn_delayed_action(Duration::from_millis(10), Action::Quit);

    let action = timeout(Duration::from_secs(1), rx.recv())
        .await
        .expect("deferred action should arrive")
        .unwrap();
    assert_eq!(action, Action::Quit);
}

#[tokio::test]
async fn test_height_reasserts_fire_three_times() {
    let (mut manager, mut rx) = TaskManager::new();
    manager.spawn_height_reasserts();
    assert_eq!(manager.task_count(), 3);

    for _ in 0..3 {
        let action = timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("re-assertion should arrive")
            .unwrap();
        assert_eq!(action, Action::ReassertFrameHeight);
    }
}

#[tokio::test]
async fn test_cleanup_drops_finished_tasks() {
    let (mut manager, mut rx) = TaskManager::new();
    manager.spawn_delayed_action(Duration::from_millis(5), Action::ReassertFrameHeight);

    let _ = timeout(Duration::from_secs(1), rx.recv()).await;
    // The task has sent its action; give the runtime a beat to finish it
    tokio::time::sleep(Duration::from_millis(10)).await;

    manager.cleanup_finished_tasks();
    assert_eq!(manager.task_count(), 0);
}

#[tokio::test]
async fn test_cancel_all_tasks() {
    let (mut manager, mut rx) = TaskManager::new();
    manager.spawn_delayed_action(Duration::from_secs(60), Action::Quit);
    manager.cancel_all_tasks();
    assert_eq!(manager.task_count(), 0);

    // Nothing should ever arrive from the aborted task
    let result = timeout(Duration::from_millis(50), rx.recv()).await;
    assert!(result.is_err() || result.unwrap().is_none());
}
