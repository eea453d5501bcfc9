use std::io::Write;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

/// Print a buildpack-style step header: `-----> Installing nginx 1.19.10`.
pub fn step(message: &str) {
    let bold = Style::new().for_stderr().bold();
    let _ = writeln!(std::io::stderr(), "{} {message}", bold.apply_to("----->"));
}

/// Print an indented detail line under the current step.
pub fn detail(message: &str) {
    let _ = writeln!(std::io::stderr(), "       {message}");
}

/// Create an animated spinner with the given message for indeterminate progress.
///
/// Hidden when stderr is not a terminal so build logs stay clean.
pub fn spinner(message: &str) -> ProgressBar {
    if !console::Term::stderr().is_term() {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("       {spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
