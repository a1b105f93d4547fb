//! Progress bar for `bundle`.

use console::Term;
use indicatif::ProgressBar;
use indicatif::ProgressState;
use indicatif::ProgressStyle;
use satchel_core::ProgressCallback;
use std::fmt::Write;

/// Progress bar implementing `ProgressCallback`.
///
/// The bar tracks input bytes copied into the archive; the message shows the
/// entry being written. It is cleared on completion or drop.
pub struct CliProgress {
    bar: ProgressBar,
    bytes_written: u64,
}

impl CliProgress {
    /// Creates a bar for `total_bytes` of input.
    #[must_use]
    pub fn new(total_bytes: u64) -> Self {
        let bar = ProgressBar::new(total_bytes);

        // "[2/5] photo.png [████████░░░░] 1.2 MB/3.4 MB (5.1 MB/s, 2s)"
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{msg} [{bar:40.cyan/blue}] {done}/{total} ({rate}, {eta})")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .with_key("done", |state: &ProgressState, w: &mut dyn Write| {
                    write!(w, "{}", humanize_bytes(state.pos())).unwrap_or(());
                })
                .with_key("total", |state: &ProgressState, w: &mut dyn Write| {
                    write!(w, "{}", humanize_bytes(state.len().unwrap_or(0))).unwrap_or(());
                })
                .with_key("rate", |state: &ProgressState, w: &mut dyn Write| {
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    let bytes_per_sec = state.per_sec() as u64;
                    write!(w, "{}/s", humanize_bytes(bytes_per_sec)).unwrap_or(());
                })
                .with_key("eta", |state: &ProgressState, w: &mut dyn Write| {
                    write!(w, "{}s", state.eta().as_secs()).unwrap_or(());
                })
                .progress_chars("█▓░"),
        );

        Self {
            bar,
            bytes_written: 0,
        }
    }

    /// Progress is only drawn on an interactive stderr.
    #[must_use]
    pub fn should_show() -> bool {
        Term::stderr().is_term()
    }
}

impl Drop for CliProgress {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressCallback for CliProgress {
    fn on_entry_start(&mut self, name: &str, total: usize, current: usize) {
        self.bar.set_message(format!("[{current}/{total}] {name}"));
    }

    fn on_bytes_written(&mut self, bytes: u64) {
        self.bytes_written += bytes;
        self.bar.set_position(self.bytes_written);
    }

    fn on_entry_complete(&mut self, _name: &str) {}

    fn on_complete(&mut self) {
        self.bar.finish_and_clear();
    }
}

/// Converts bytes to a short human-readable string.
#[allow(clippy::cast_precision_loss)]
fn humanize_bytes(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;

    let b = bytes as f64;
    if b >= GB {
        format!("{:.1} GB", b / GB)
    } else if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{bytes} B")
    }
}
