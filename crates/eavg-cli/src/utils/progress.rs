use eavg::engine::progress::{Progress, ProgressCallback};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressState, ProgressStyle};

#[derive(Clone)]
pub struct CliProgressHandler {
    pb: ProgressBar,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stderr())
    }

    /// A handler that renders nowhere, for quiet runs.
    pub fn hidden() -> Self {
        Self::with_draw_target(ProgressDrawTarget::hidden())
    }

    fn with_draw_target(target: ProgressDrawTarget) -> Self {
        let pb = ProgressBar::with_draw_target(Some(0), target)
            .with_style(Self::bar_style())
            .with_message("Initializing...");
        Self { pb }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb = self.pb.clone();

        Box::new(move |progress: Progress| match progress {
            Progress::RunStart { total_files } => {
                pb.reset();
                pb.set_length(total_files);
                pb.set_position(0);
                pb.set_message("Snapshots");
            }
            Progress::FileStart { path } => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                pb.set_message(name);
            }
            Progress::FileFinish => {
                pb.inc(1);
            }
            Progress::RunFinish => {
                let len = pb.length().unwrap_or(0);
                if pb.position() < len {
                    pb.set_position(len);
                }
                pb.finish_with_message("✓ Done");
            }
            Progress::Message(msg) => {
                if pb.is_finished() {
                    pb.set_message(msg);
                } else {
                    pb.println(format!("  {}", msg));
                }
            }
        })
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{msg:<20} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .with_key(
                "eta",
                |state: &ProgressState, w: &mut dyn std::fmt::Write| {
                    let _ = write!(w, "{:.1}s", state.eta().as_secs_f64());
                },
            )
            .progress_chars("##-")
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}
