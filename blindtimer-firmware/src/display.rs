//! Round display panel link
//!
//! Widget updates are encoded here and queued for the display TX task.

use defmt::*;

use blindtimer_core::traits::{DisplaySurface, WidgetId};
use blindtimer_protocol::PanelMessage;

use crate::channels::PANEL_CHANNEL;

/// [`DisplaySurface`] backed by the panel UART
pub struct PanelDisplay {
    dropped: u32,
}

impl PanelDisplay {
    /// Create the surface and blank the panel
    pub fn new() -> Self {
        let mut display = Self { dropped: 0 };
        display.send(&PanelMessage::Clear);
        display
    }

    fn send(&mut self, message: &PanelMessage<'_>) {
        let bytes = match message.to_frame().and_then(|frame| frame.to_bytes()) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Failed to encode {:?}: {:?}", message, e);
                return;
            }
        };

        if PANEL_CHANNEL.try_send(bytes).is_err() {
            self.dropped = self.dropped.wrapping_add(1);
            warn!("Panel queue full, dropped update ({} total)", self.dropped);
        }
    }
}

impl DisplaySurface for PanelDisplay {
    fn set_text(&mut self, widget: WidgetId, text: &str) {
        trace!("{:?} = {}", widget, text);
        self.send(&PanelMessage::SetText { widget, text });
    }

    fn set_visible(&mut self, widget: WidgetId, visible: bool) {
        self.send(&PanelMessage::SetVisible { widget, visible });
    }
}
