//! Demo host application embedding the time entry widget
//!
//! Plays the host-frame role: hands the widget its argument payload,
//! grants it a frame region sized from the last reported height, and
//! displays the reported component value in a status bar.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};
use tokio::sync::mpsc;

use crate::config::HostConfig;
use crate::host::height::FrameHeightSync;
use crate::host::{HostBridge, HostEvent};
use crate::ui::components::TimeEntryComponent;
use crate::ui::core::{Action, Component, EventType, TaskManager};
use crate::ui::layout::LayoutManager;

/// What the host frame currently knows about the widget.
#[derive(Debug, Clone, Default)]
pub struct HostView {
    pub component_value: Option<String>,
    pub frame_height: Option<u16>,
}

pub struct HostApp {
    widget: TimeEntryComponent,
    height_sync: FrameHeightSync,
    bridge: HostBridge,
    host_rx: mpsc::UnboundedReceiver<HostEvent>,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    view: HostView,
    cell_height: u16,
    should_quit: bool,
}

impl HostApp {
    pub fn new(config: &HostConfig) -> Self {
        let args = config.widget_args();
        let (bridge, host_rx) = HostBridge::new();
        let (task_manager, background_action_rx) = TaskManager::new();

        Self {
            widget: TimeEntryComponent::new(&args),
            height_sync: FrameHeightSync::new(config.frame.cell_height),
            bridge,
            host_rx,
            task_manager,
            background_action_rx,
            view: HostView::default(),
            cell_height: config.frame.cell_height,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    #[must_use]
    pub fn view(&self) -> &HostView {
        &self.view
    }

    pub fn on_mount(&mut self) -> anyhow::Result<()> {
        self.widget.on_mount()
    }

    pub fn handle_event(&mut self, event: EventType) {
        if let EventType::Key(key) = event {
            if is_quit_key(&key, self.widget.is_picker_open()) {
                self.should_quit = true;
                return;
            }
            let action = self.widget.handle_key_events(key);
            self.dispatch(action);
        }
    }

    /// Route an action through the widget, then apply its host-side
    /// effects: value reports, frame-height transitions, deferred
    /// re-assertions.
    fn dispatch(&mut self, action: Action) {
        if action == Action::None {
            return;
        }
        let picker_was_open = self.widget.is_picker_open();
        let action = self.widget.update(action);
        match action {
            Action::OpenPicker => {
                self.height_sync.on_popup_opened(&self.bridge);
                self.task_manager.spawn_height_reasserts();
            }
            Action::ClosePicker => {
                self.height_sync
                    .on_popup_closed(self.widget.required_rows(), &self.bridge);
            }
            Action::ValueChanged(value) => {
                self.bridge.set_component_value(value);
                if picker_was_open {
                    self.height_sync
                        .on_popup_closed(self.widget.required_rows(), &self.bridge);
                }
            }
            Action::ReassertFrameHeight => self.height_sync.reassert_expanded(&self.bridge),
            Action::Quit => self.should_quit = true,
            Action::None => {}
        }
    }

    /// Called after every render commit; collapsed renders drive the
    /// reported frame height.
    pub fn after_render(&mut self) {
        self.height_sync
            .on_rendered(self.widget.required_rows(), &self.bridge);
    }

    /// Drain deferred actions and host events queued since the last tick.
    /// Returns whether anything changed and a re-render is due.
    pub fn process_background(&mut self) -> bool {
        let mut changed = false;
        while let Ok(action) = self.background_action_rx.try_recv() {
            self.dispatch(action);
            changed = true;
        }
        while let Ok(event) = self.host_rx.try_recv() {
            match event {
                HostEvent::ComponentValue(value) => {
                    log::info!("host received value: {:?}", value);
                    self.view.component_value = value;
                }
                HostEvent::FrameHeight(px) => {
                    log::info!("host received frame height: {}px", px);
                    self.view.frame_height = Some(px);
                }
            }
            changed = true;
        }
        self.task_manager.cleanup_finished_tasks();
        changed
    }

    pub fn render(&mut self, f: &mut Frame) {
        let frame_px = self
            .view
            .frame_height
            .unwrap_or_else(|| self.height_sync.collapsed_height(self.widget.required_rows()));
        let frame_rows = LayoutManager::frame_rows(frame_px, self.cell_height, f.area());
        let areas = LayoutManager::host_layout(f.area(), frame_rows);

        self.widget.render(f, areas[0]);

        let value = self.view.component_value.as_deref().unwrap_or("(none)");
        let status = format!(
            " value: {}  ·  frame: {}px  ·  q to quit",
            value,
            self.view
                .frame_height
                .map_or_else(|| "-".to_string(), |px| px.to_string())
        );
        let status_bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
        f.render_widget(status_bar, areas[2]);
    }
}

/// Global quit keys for the demo host. Esc is a quit only while the popup
/// is closed; otherwise it belongs to the picker.
fn is_quit_key(key: &KeyEvent, picker_open: bool) -> bool {
    match key.code {
        KeyCode::Char('q') => true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
        KeyCode::Esc => !picker_open,
        _ => false,
    }
}
