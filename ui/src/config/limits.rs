/// Smallest popup size, as a percentage of the terminal
pub const MIN_POPUP_PERCENT: u16 = 20;

/// Largest popup size, as a percentage of the terminal
pub const MAX_POPUP_PERCENT: u16 = 100;

/// Shortest DNS timeout accepted for deliverability checks
pub const MIN_EMAIL_TIMEOUT_SECS: u64 = 1;

/// Longest DNS timeout accepted for deliverability checks
pub const MAX_EMAIL_TIMEOUT_SECS: u64 = 60;
