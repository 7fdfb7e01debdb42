//! Message types for the panel link
//!
//! Only the board talks; the panel renders and never answers.

use crate::frame::{Frame, FrameError, MAX_PAYLOAD_SIZE};
use crate::widgets::WidgetId;
use heapless::Vec;

// Message type IDs: board → panel
pub const MSG_CLEAR: u8 = 0x30;
pub const MSG_SET_TEXT: u8 = 0x31;
pub const MSG_SET_VISIBLE: u8 = 0x32;

/// Longest text a single widget accepts; longer text is truncated
pub const MAX_TEXT_LEN: usize = 32;

/// Commands from the board to the panel
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelMessage<'a> {
    /// Hide every widget
    Clear,
    /// Replace a widget's text
    SetText { widget: WidgetId, text: &'a str },
    /// Show or hide a widget
    SetVisible { widget: WidgetId, visible: bool },
}

/// Cut `text` to at most `MAX_TEXT_LEN` bytes on a char boundary
fn truncate(text: &str) -> &str {
    if text.len() <= MAX_TEXT_LEN {
        return text;
    }
    let mut end = MAX_TEXT_LEN;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

impl<'a> PanelMessage<'a> {
    /// Encode this message into a frame
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        match self {
            PanelMessage::Clear => Ok(Frame::empty(MSG_CLEAR)),
            PanelMessage::SetText { widget, text } => {
                // Payload: [widget][chars...]
                let mut payload = Vec::<u8, MAX_PAYLOAD_SIZE>::new();
                payload
                    .push(widget.to_byte())
                    .map_err(|_| FrameError::PayloadTooLarge)?;
                payload
                    .extend_from_slice(truncate(text).as_bytes())
                    .map_err(|_| FrameError::PayloadTooLarge)?;
                Frame::new(MSG_SET_TEXT, &payload)
            }
            PanelMessage::SetVisible { widget, visible } => {
                Frame::new(MSG_SET_VISIBLE, &[widget.to_byte(), *visible as u8])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_has_no_payload() {
        let frame = PanelMessage::Clear.to_frame().unwrap();
        assert_eq!(frame.msg_type, MSG_CLEAR);
        assert!(frame.payload.is_empty());
    }

    #[test]
    fn test_set_text_payload() {
        let msg = PanelMessage::SetText {
            widget: WidgetId::SmallBlind,
            text: "150",
        };
        let frame = msg.to_frame().unwrap();
        assert_eq!(frame.msg_type, MSG_SET_TEXT);
        assert_eq!(frame.payload.as_slice(), &[0x10, b'1', b'5', b'0']);
    }

    #[test]
    fn test_long_text_is_truncated() {
        let msg = PanelMessage::SetText {
            widget: WidgetId::LogRow(0),
            text: "#12: 1:02:03 / 0:04:05 R12 and some more",
        };
        let frame = msg.to_frame().unwrap();
        assert_eq!(frame.payload.len(), 1 + MAX_TEXT_LEN);
    }

    #[test]
    fn test_truncate_respects_char_boundary() {
        // 31 ASCII bytes followed by a 2-byte character
        let text = "0123456789012345678901234567890é";
        assert_eq!(truncate(text).len(), 31);
    }

    #[test]
    fn test_set_visible_payload() {
        let msg = PanelMessage::SetVisible {
            widget: WidgetId::MenuOverlay,
            visible: true,
        };
        let frame = msg.to_frame().unwrap();
        assert_eq!(frame.payload.as_slice(), &[0x18, 1]);
    }
}
