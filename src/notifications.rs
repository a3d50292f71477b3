/// Cross-platform notification support
/// Currently only implements macOS notifications

#[cfg(target_os = "macos")]
use std::process::Command;

#[cfg(target_os = "macos")]
fn send(title: &str, body: &str) {
    let script = format!(
        r#"display notification "{}" with title "{}""#,
        body.replace('"', "\\\""),
        title.replace('"', "\\\"")
    );

    let _ = Command::new("osascript")
        .arg("-e")
        .arg(&script)
        .output();
}

/// Send a notification when a work interval completes
pub fn notify_interval_complete(task_title: Option<&str>) {
    #[cfg(target_os = "macos")]
    {
        let body = match task_title {
            Some(title) => format!("🍅 Interval done — {}", title),
            None => "🍅 Interval done — time for a break".to_string(),
        };
        send("Tomate - Work Interval Complete", &body);
    }

    #[cfg(not(target_os = "macos"))]
    {
        // No-op on other platforms
        let _ = task_title;
    }
}

/// Send a notification when a break completes
pub fn notify_break_complete() {
    #[cfg(target_os = "macos")]
    {
        send("Tomate - Break Over", "Back to work when you're ready");
    }
}

/// Send a notification when a task is marked done
pub fn notify_task_done(task_title: &str) {
    #[cfg(target_os = "macos")]
    {
        send("Tomate - Task Completed", task_title);
    }

    #[cfg(not(target_os = "macos"))]
    {
        // No-op on other platforms
        let _ = task_title;
    }
}
