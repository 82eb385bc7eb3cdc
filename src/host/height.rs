//! Frame height synchronization
//!
//! The widget cannot size its own embedding frame; it can only tell the
//! host what height it needs. While the picker popup is closed the frame
//! tracks the measured content height plus a padding allowance. The moment
//! the popup opens the frame jumps to a fixed expanded height large enough
//! to contain it, and that height is re-asserted at a few delays while the
//! popup settles its layout. Closing the popup re-measures immediately.

use crate::constants::{EXPANDED_FRAME_HEIGHT, FRAME_HEIGHT_PADDING, FRAME_HEIGHT_TOLERANCE};
use crate::host::HostBridge;

/// Frame-height state machine.
///
/// The only states are popup closed and popup open, starting closed. Once
/// the popup opens, no height below the expanded constant is reported
/// until it closes again.
#[derive(Debug)]
pub struct FrameHeightSync {
    cell_height: u16,
    popup_open: bool,
    last_reported: Option<u16>,
}

impl FrameHeightSync {
    #[must_use]
    pub fn new(cell_height: u16) -> Self {
        Self {
            cell_height,
            popup_open: false,
            last_reported: None,
        }
    }

    #[must_use]
    pub fn is_popup_open(&self) -> bool {
        self.popup_open
    }

    /// Height last notified to the host, if any.
    #[must_use]
    pub fn last_reported(&self) -> Option<u16> {
        self.last_reported
    }

    /// Collapsed frame height for a widget spanning `rows` terminal rows.
    #[must_use]
    pub fn collapsed_height(&self, rows: u16) -> u16 {
        rows.saturating_mul(self.cell_height)
            .saturating_add(FRAME_HEIGHT_PADDING)
    }

    /// Called after every render commit. Only collapsed renders drive the
    /// frame height; while the popup is open the expanded height holds.
    pub fn on_rendered(&mut self, rows: u16, bridge: &HostBridge) {
        if !self.popup_open {
            self.request(self.collapsed_height(rows), bridge);
        }
    }

    /// The popup just opened: reserve the expanded height immediately.
    pub fn on_popup_opened(&mut self, bridge: &HostBridge) {
        self.popup_open = true;
        self.request(EXPANDED_FRAME_HEIGHT, bridge);
    }

    /// The popup just closed: fall back to the measured collapsed height.
    pub fn on_popup_closed(&mut self, rows: u16, bridge: &HostBridge) {
        self.popup_open = false;
        self.request(self.collapsed_height(rows), bridge);
    }

    /// Deferred correction scheduled when the popup opened. No-ops once
    /// the popup has closed; stale firings are expected and harmless.
    pub fn reassert_expanded(&mut self, bridge: &HostBridge) {
        if self.popup_open {
            self.request(EXPANDED_FRAME_HEIGHT, bridge);
        }
    }

    /// Notify the host of a new frame height. Growth is always reported;
    /// a shrink within the tolerance is not.
    fn request(&mut self, px: u16, bridge: &HostBridge) {
        let report = match self.last_reported {
            None => true,
            Some(last) => px > last || px.abs_diff(last) > FRAME_HEIGHT_TOLERANCE,
        };
        if report {
            self.last_reported = Some(px);
            bridge.set_frame_height(px);
        }
    }
}
