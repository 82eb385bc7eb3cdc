//! Host-frame protocol: inbound arguments and outbound events
//!
//! The widget lives inside a frame the host controls. The host hands it an
//! argument payload and receives fire-and-forget events in return: the
//! formatted component value, and the pixel height the frame should adopt.

pub mod height;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::constants::DEFAULT_LABEL;
use crate::theme::ThemeTokens;
use crate::utils::datetime;

/// Arguments delivered by the host frame.
///
/// Absent fields take their documented defaults; only a payload that is
/// not valid JSON is surfaced as an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    pub disabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeTokens>,
}

impl WidgetArgs {
    /// Deserialize an argument payload from the host's JSON message.
    pub fn from_json(payload: &str) -> Result<Self, HostError> {
        Ok(serde_json::from_str(payload)?)
    }

    /// The label to render, defaulting when the host omits it or sends "".
    #[must_use]
    pub fn label_or_default(&self) -> &str {
        match self.label.as_deref() {
            Some(label) if !label.is_empty() => label,
            _ => DEFAULT_LABEL,
        }
    }
}

/// Events reported back to the host frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// The selected time as "hh:mm am/pm", or `None` when cleared.
    ComponentValue(Option<String>),
    /// The pixel height the embedding frame should adopt.
    FrameHeight(u16),
}

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("malformed widget arguments: {0}")]
    MalformedArgs(#[from] serde_json::Error),
}

/// Outbound channel to the host frame.
///
/// Sends are fire-and-forget: no acknowledgment is awaited and a host that
/// went away is ignored.
#[derive(Debug, Clone)]
pub struct HostBridge {
    tx: mpsc::UnboundedSender<HostEvent>,
}

impl HostBridge {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<HostEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Report the selected time, or its absence, to the host.
    pub fn set_component_value(&self, value: Option<NaiveTime>) {
        let formatted = value.map(datetime::format_time);
        log::debug!("component value -> {:?}", formatted);
        let _ = self.tx.send(HostEvent::ComponentValue(formatted));
    }

    /// Ask the host to resize the embedding frame.
    pub fn set_frame_height(&self, px: u16) {
        log::debug!("frame height -> {}px", px);
        let _ = self.tx.send(HostEvent::FrameHeight(px));
    }
}
