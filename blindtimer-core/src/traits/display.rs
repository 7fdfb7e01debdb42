//! Display surface trait for the round display

pub use blindtimer_protocol::WidgetId;

/// Trait for the display collaborator
///
/// Widgets are built once by the display side. The core only changes
/// their text and visibility and never computes geometry. Calls must not
/// block; a display that cannot keep up drops updates and logs them.
pub trait DisplaySurface {
    /// Replace the text of a widget
    fn set_text(&mut self, widget: WidgetId, text: &str);

    /// Show or hide a widget
    fn set_visible(&mut self, widget: WidgetId, visible: bool);
}

/// Helper trait for common display sequences
pub trait DisplayExt: DisplaySurface {
    /// Set text and make the widget visible
    fn show_text(&mut self, widget: WidgetId, text: &str) {
        self.set_text(widget, text);
        self.set_visible(widget, true);
    }

    /// Hide every widget in `widgets`
    fn hide_all(&mut self, widgets: &[WidgetId]) {
        for &widget in widgets {
            self.set_visible(widget, false);
        }
    }
}

// Blanket implementation for all DisplaySurface types
impl<T: DisplaySurface + ?Sized> DisplayExt for T {}
