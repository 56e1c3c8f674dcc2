//! Shared dialog and notification components

pub mod alert_dialog;
pub mod confirm_dialog;
pub mod notification;

pub use alert_dialog::AlertDialog;
pub use confirm_dialog::ConfirmDialog;
pub use notification::NotificationBanner;
