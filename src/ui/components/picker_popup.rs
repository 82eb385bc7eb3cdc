//! Floating time-picker surface
//!
//! Shown over the widget while a time is being chosen and dismissed on
//! confirm or cancel. The clock face is edited segment by segment: hour,
//! minute, then am/pm.

use chrono::{NaiveTime, Timelike};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::ResolvedTheme;
use crate::ui::core::Action;
use crate::ui::layout::LayoutManager;

const POPUP_HEIGHT_LINES: u16 = 5;
const POPUP_WIDTH_PERCENT: u16 = 50;

/// Segment of the clock face that arrow keys currently adjust.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Hour,
    Minute,
    Period,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Am,
    Pm,
}

/// Picker popup state: a 12-hour clock face plus the active segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerPopup {
    hour: u8,   // 1..=12
    minute: u8, // 0..=59
    period: Period,
    segment: Segment,
}

impl PickerPopup {
    /// Open the picker seeded from the current value, or midnight.
    #[must_use]
    pub fn open_at(value: Option<NaiveTime>) -> Self {
        let value = value.unwrap_or(NaiveTime::MIN);
        let (is_pm, hour12) = value.hour12();
        Self {
            hour: hour12 as u8,
            minute: value.minute() as u8,
            period: if is_pm { Period::Pm } else { Period::Am },
            segment: Segment::Hour,
        }
    }

    /// The time currently shown on the clock face.
    #[must_use]
    pub fn selected_time(&self) -> NaiveTime {
        let hour24 = u32::from(self.hour % 12)
            + match self.period {
                Period::Am => 0,
                Period::Pm => 12,
            };
        NaiveTime::from_hms_opt(hour24, u32::from(self.minute), 0).unwrap_or(NaiveTime::MIN)
    }

    pub fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::ClosePicker,
            KeyCode::Enter => Action::ValueChanged(Some(self.selected_time())),
            KeyCode::Tab | KeyCode::Right => {
                self.segment = match self.segment {
                    Segment::Hour => Segment::Minute,
                    Segment::Minute => Segment::Period,
                    Segment::Period => Segment::Hour,
                };
                Action::None
            }
            KeyCode::BackTab | KeyCode::Left => {
                self.segment = match self.segment {
                    Segment::Hour => Segment::Period,
                    Segment::Minute => Segment::Hour,
                    Segment::Period => Segment::Minute,
                };
                Action::None
            }
            KeyCode::Up => {
                self.step(1);
                Action::None
            }
            KeyCode::Down => {
                self.step(-1);
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Step the active segment, wrapping at its bounds.
    fn step(&mut self, delta: i8) {
        match self.segment {
            Segment::Hour => {
                // 1..=12 with wrap-around
                let zero_based = i16::from(self.hour) - 1 + i16::from(delta);
                self.hour = (zero_based.rem_euclid(12) + 1) as u8;
            }
            Segment::Minute => {
                let stepped = i16::from(self.minute) + i16::from(delta);
                self.minute = stepped.rem_euclid(60) as u8;
            }
            Segment::Period => {
                self.period = match self.period {
                    Period::Am => Period::Pm,
                    Period::Pm => Period::Am,
                };
            }
        }
    }

    pub fn render(&self, f: &mut Frame, theme: &ResolvedTheme) {
        let popup_area =
            LayoutManager::centered_rect_lines(POPUP_WIDTH_PERCENT, POPUP_HEIGHT_LINES, f.area());
        f.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Select time ")
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.paper));

        let inactive = Style::default().fg(theme.text);
        let active = Style::default().fg(theme.primary).add_modifier(Modifier::BOLD);
        let style_for = |segment| if self.segment == segment { active } else { inactive };

        let period_label = match self.period {
            Period::Am => "am",
            Period::Pm => "pm",
        };
        let face = Line::from(vec![
            Span::styled(format!("{:02}", self.hour), style_for(Segment::Hour)),
            Span::styled(":", inactive),
            Span::styled(format!("{:02}", self.minute), style_for(Segment::Minute)),
            Span::styled(" ", inactive),
            Span::styled(period_label, style_for(Segment::Period)),
        ]);
        let instructions = Line::from(vec![
            Span::styled("↑↓", active),
            Span::styled(" adjust  ", inactive),
            Span::styled("Tab", active),
            Span::styled(" segment  ", inactive),
            Span::styled("Enter", active),
            Span::styled(" confirm  ", inactive),
            Span::styled("Esc", active),
            Span::styled(" cancel", inactive),
        ]);

        let body = Paragraph::new(vec![face, Line::default(), instructions])
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(body, popup_area);
    }
}
