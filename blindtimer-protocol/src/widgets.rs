//! Widget identifiers shared by the board and the panel

/// A pre-built widget on the round display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WidgetId {
    /// Page title ("Small Blind", "Round 3", ...)
    Title,
    /// Large centre value on setup screens
    Value,
    /// Line under the value (mode description, blinds hint)
    Caption,
    /// Secondary grey line (game length estimate)
    Detail,
    /// "Push" prompt at the bottom edge
    Prompt,
    /// Live small blind
    SmallBlind,
    /// Live big blind
    BigBlind,
    /// Countdown minutes
    TimerMinutes,
    /// Countdown seconds
    TimerSeconds,
    /// Pause menu backdrop
    MenuOverlay,
    /// Pause menu entry by position
    MenuItem(u8),
    /// "Paused M:SS" note inside the menu
    PausedNote,
    /// Help overlay on setup screens
    InfoOverlay,
    /// Help text inside the overlay
    InfoText,
    /// Session log row by position
    LogRow(u8),
}

/// Number of slots reserved for indexed widgets
pub const MAX_INDEXED: u8 = 16;

const BASE_MENU_ITEM: u8 = 0x20;
const BASE_LOG_ROW: u8 = 0x40;

impl WidgetId {
    /// Wire format byte
    pub fn to_byte(self) -> u8 {
        match self {
            WidgetId::Title => 0x01,
            WidgetId::Value => 0x02,
            WidgetId::Caption => 0x03,
            WidgetId::Detail => 0x04,
            WidgetId::Prompt => 0x05,
            WidgetId::SmallBlind => 0x10,
            WidgetId::BigBlind => 0x11,
            WidgetId::TimerMinutes => 0x12,
            WidgetId::TimerSeconds => 0x13,
            WidgetId::MenuOverlay => 0x18,
            WidgetId::PausedNote => 0x19,
            WidgetId::InfoOverlay => 0x1A,
            WidgetId::InfoText => 0x1B,
            WidgetId::MenuItem(i) => BASE_MENU_ITEM + i.min(MAX_INDEXED - 1),
            WidgetId::LogRow(i) => BASE_LOG_ROW + i.min(MAX_INDEXED - 1),
        }
    }
}
