//! Time entry widget
//!
//! A labelled entry field bound to a popup time picker. The selected value
//! lives here; the popup only edits a candidate until it is confirmed.

use chrono::NaiveTime;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::constants::TIME_PLACEHOLDER;
use crate::host::WidgetArgs;
use crate::theme::{self, ResolvedTheme};
use crate::ui::components::picker_popup::PickerPopup;
use crate::ui::core::{Action, Component};
use crate::utils::datetime;

/// Rows the collapsed widget occupies: one label line plus the bordered
/// entry field.
const LABEL_ROWS: u16 = 1;
const FIELD_ROWS: u16 = 3;

pub struct TimeEntryComponent {
    label: String,
    disabled: bool,
    value: Option<NaiveTime>,
    theme: ResolvedTheme,
    picker: Option<PickerPopup>,
}

impl TimeEntryComponent {
    /// Build the widget from a host argument payload.
    ///
    /// The default value is parsed here, once: strict "hh:mm am/pm" first,
    /// relaxed fallback second, no selection when both fail. Later argument
    /// updates leave the value alone.
    #[must_use]
    pub fn new(args: &WidgetArgs) -> Self {
        let value = args.default.as_deref().and_then(datetime::parse_default);
        Self {
            label: args.label_or_default().to_string(),
            disabled: args.disabled,
            value,
            theme: theme::resolve(args.theme.as_ref()),
            picker: None,
        }
    }

    #[must_use]
    pub fn value(&self) -> Option<NaiveTime> {
        self.value
    }

    #[must_use]
    pub fn is_picker_open(&self) -> bool {
        self.picker.is_some()
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn theme(&self) -> &ResolvedTheme {
        &self.theme
    }

    /// Terminal rows the collapsed widget occupies.
    #[must_use]
    pub fn required_rows(&self) -> u16 {
        LABEL_ROWS + FIELD_ROWS
    }

    fn field_text(&self) -> String {
        match self.value {
            Some(time) => datetime::format_time(time),
            None => TIME_PLACEHOLDER.to_string(),
        }
    }
}

impl Component for TimeEntryComponent {
    fn on_args_changed(&mut self, args: &WidgetArgs) {
        self.label = args.label_or_default().to_string();
        self.disabled = args.disabled;
        self.theme = theme::resolve(args.theme.as_ref());
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.disabled {
            return Action::None;
        }
        if let Some(picker) = self.picker.as_mut() {
            return picker.handle_key_events(key);
        }
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Action::OpenPicker,
            KeyCode::Backspace | KeyCode::Delete if self.value.is_some() => {
                Action::ValueChanged(None)
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::OpenPicker => self.picker = Some(PickerPopup::open_at(self.value)),
            Action::ClosePicker => self.picker = None,
            Action::ValueChanged(value) => {
                self.value = value;
                self.picker = None;
            }
            _ => {}
        }
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(LABEL_ROWS),
                Constraint::Length(FIELD_ROWS),
                Constraint::Min(0),
            ])
            .split(rect);

        let dim = if self.disabled {
            Modifier::DIM
        } else {
            Modifier::empty()
        };

        let label = Paragraph::new(self.label.clone()).style(
            Style::default()
                .fg(self.theme.text)
                .add_modifier(Modifier::BOLD | dim),
        );
        f.render_widget(label, areas[0]);

        let border_color = if self.is_picker_open() {
            self.theme.primary
        } else {
            self.theme.text
        };
        let field_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color).add_modifier(dim));

        let value_style = if self.value.is_some() {
            Style::default().fg(self.theme.text).add_modifier(dim)
        } else {
            Style::default()
                .fg(self.theme.text)
                .add_modifier(Modifier::DIM | Modifier::ITALIC)
        };
        let field = Paragraph::new(self.field_text())
            .block(field_block)
            .style(value_style.bg(self.theme.paper));
        f.render_widget(field, areas[1]);

        if let Some(picker) = self.picker {
            picker.render(f, &self.theme);
        }
    }
}
