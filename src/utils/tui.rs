use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// A ticking spinner that reads "<message> <frame>".
pub fn create_spinner(message: impl Into<String>) -> ProgressBar {
    let style = ProgressStyle::default_spinner()
        .tick_strings(&["-", "\\", "|", "/"])
        .template("{msg} {spinner}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());

    let spinner = ProgressBar::new_spinner()
        .with_style(style)
        .with_message(message.into());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
