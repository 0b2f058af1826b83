//! Frontend Models
//!
//! UI-only data structures. Records and schemas live in `list_manager`.

/// Severity of an operator-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Message shown in the notice list until dismissed or expired
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u32,
    /// Schema key of the view that raised it
    pub source: &'static str,
    pub level: NoticeLevel,
    pub message: String,
}
