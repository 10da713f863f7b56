/// Cross-platform notification support
/// Currently only implements macOS notifications

#[cfg(target_os = "macos")]
use std::process::Command;

/// Send a notification when a focus countdown reaches 0:00
pub fn notify_focus_complete() {
    #[cfg(target_os = "macos")]
    {
        let script =
            r#"display notification "Your focus session is over." with title "Nook - Focus Complete""#;

        let _ = Command::new("osascript")
            .arg("-e")
            .arg(script)
            .output();
    }
}
