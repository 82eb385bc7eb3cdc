use super::actions::Action;
use crate::host::WidgetArgs;
use crossterm::event::{Event, KeyEvent};
use ratatui::{layout::Rect, Frame};

/// Lifecycle trait for embeddable components.
///
/// Mounting and argument delivery are explicit callbacks rather than a
/// base-class chain: the host calls [`Component::on_mount`] once and
/// [`Component::on_args_changed`] whenever it has a fresh payload.
pub trait Component {
    /// Called once after the component is first mounted.
    fn on_mount(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Called when the host delivers a fresh argument payload.
    fn on_args_changed(&mut self, _args: &WidgetArgs) {}

    fn handle_events(&mut self, event: Option<Event>) -> Action {
        if let Some(Event::Key(key)) = event {
            self.handle_key_events(key)
        } else {
            Action::None
        }
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    /// Apply an action to component state, passing it through for the
    /// embedding loop to act on.
    fn update(&mut self, action: Action) -> Action {
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect);
}
