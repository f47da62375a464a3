//! Lobby palette
//!
//! Cool slate surfaces; amber is reserved for the dialog button.

use ratatui::style::Color;

// Frame
pub const BORDER: Color = Color::Rgb(88, 98, 120);
pub const SURFACE_HIGHLIGHT: Color = Color::Rgb(44, 50, 66);

// Text
pub const TEXT_PRIMARY: Color = Color::Rgb(228, 228, 236);
pub const TEXT_DIM: Color = Color::Rgb(138, 144, 160);
pub const TEXT_MUTED: Color = Color::Rgb(96, 102, 118);

// Agent rows
pub const SELECTED: Color = Color::Rgb(120, 196, 210);
pub const ICON: Color = Color::Rgb(240, 236, 220);

// Dialog
pub const MODAL_BG: Color = Color::Rgb(22, 24, 32);
pub const INPUT_BG: Color = Color::Rgb(38, 44, 58);
pub const BUTTON: Color = Color::Rgb(232, 156, 64);

// Notices
pub const NOTICE_INFO: Color = Color::Rgb(110, 150, 214);
pub const NOTICE_SUCCESS: Color = Color::Rgb(124, 188, 128);
pub const NOTICE_WARNING: Color = Color::Rgb(214, 170, 84);
pub const NOTICE_ERROR: Color = Color::Rgb(214, 104, 104);
