use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Progress {
    RunStart { total_files: u64 },
    FileStart { path: PathBuf },
    FileFinish,
    RunFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn reporter_without_callback_ignores_events() {
        ProgressReporter::new().report(Progress::RunFinish);
    }

    #[test]
    fn callback_receives_events_in_order() {
        let seen = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            seen.lock().unwrap().push(format!("{event:?}"));
        }));

        reporter.report(Progress::RunStart { total_files: 2 });
        reporter.report(Progress::Message("hello".to_string()));
        drop(reporter);

        let seen = seen.into_inner().unwrap();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].contains("total_files: 2"));
        assert!(seen[1].contains("hello"));
    }
}
