//! Help overlay on the setup screens

use crate::config::tones;
use crate::traits::{AudioExt, DisplayExt, WidgetId};

use super::ScreenContext;

/// Whether a screen's overlay is capturing input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Modal {
    #[default]
    Normal,
    ShowingInfo,
}

/// A help text the info key toggles over a screen
pub struct InfoOverlay {
    text: &'static str,
    modal: Modal,
}

impl InfoOverlay {
    pub const fn new(text: &'static str) -> Self {
        Self {
            text,
            modal: Modal::Normal,
        }
    }

    pub fn is_open(&self) -> bool {
        self.modal == Modal::ShowingInfo
    }

    /// Show the overlay with the open chirp
    pub fn open(&mut self, ctx: &mut ScreenContext<'_>) {
        if self.is_open() {
            return;
        }
        self.modal = Modal::ShowingInfo;
        ctx.display.show_text(WidgetId::InfoText, self.text);
        ctx.display.set_visible(WidgetId::InfoOverlay, true);
        ctx.audio.play_all(&tones::OVERLAY_SHOW);
        debug!("Info overlay shown");
    }

    /// Hide the overlay with the close chirp
    pub fn close(&mut self, ctx: &mut ScreenContext<'_>) {
        if !self.is_open() {
            return;
        }
        self.dismiss(ctx);
        ctx.audio.play_all(&tones::OVERLAY_HIDE);
    }

    /// Open if closed, close if open
    pub fn toggle(&mut self, ctx: &mut ScreenContext<'_>) {
        if self.is_open() {
            self.close(ctx);
        } else {
            self.open(ctx);
        }
    }

    /// Hide silently and return to `Normal`
    pub fn dismiss(&mut self, ctx: &mut ScreenContext<'_>) {
        self.modal = Modal::Normal;
        ctx.display
            .hide_all(&[WidgetId::InfoOverlay, WidgetId::InfoText]);
    }
}
