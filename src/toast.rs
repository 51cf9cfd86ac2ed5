use notify_rust::Notification;
use tracing::warn;

/// Application identity used for toast notifications.
pub const APP_ID: &str = "QuickBin";

/// Show a transient notification.
///
/// Failures are logged and swallowed; a missed toast must never take down
/// the event loop.
pub fn show(title: &str, body: &str) {
    let result = Notification::new()
        .appname(APP_ID)
        .summary(title)
        .body(body)
        .show();
    if let Err(e) = result {
        warn!("failed to show notification: {e}");
    }
}
