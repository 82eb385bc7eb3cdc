use super::actions::Action;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Duration;

use crate::constants::REASSERT_DELAYS_MS;

pub type TaskId = u64;

/// Spawns deferred actions and feeds them back to the UI loop.
///
/// Deferred tasks are not cancelled when the state that scheduled them
/// changes; the action handler must guard against stale firings.
pub struct TaskManager {
    tasks: HashMap<TaskId, JoinHandle<()>>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Send `action` to the UI loop after `delay`.
    pub fn spawn_delayed_action(&mut self, delay: Duration, action: Action) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let action_sender = self.action_sender.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = action_sender.send(action);
        });

        self.tasks.insert(task_id, handle);
        task_id
    }

    /// Schedule the expanded-height corrections that follow a popup open.
    pub fn spawn_height_reasserts(&mut self) {
        for ms in REASSERT_DELAYS_MS {
            self.spawn_delayed_action(Duration::from_millis(ms), Action::ReassertFrameHeight);
        }
    }

    /// Drop bookkeeping for tasks that already fired.
    pub fn cleanup_finished_tasks(&mut self) {
        self.tasks.retain(|_, handle| !handle.is_finished());
    }

    /// Get the number of pending deferred tasks.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Cancel all pending tasks.
    pub fn cancel_all_tasks(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        self.cancel_all_tasks();
    }
}
