use license_catalog::prelude::*;
use std::sync::{Arc, Mutex};

/// One captured report, tagged by the port method that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Info(String),
    Progress { current: usize, total: usize },
    Warning(String),
    Done(String),
}

/// Mock ProgressReporter recording every report in order
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    pub reports: Arc<Mutex<Vec<Report>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<Report> {
        self.reports.lock().unwrap().clone()
    }

    /// Warnings sent through `report_error`
    pub fn warnings(&self) -> Vec<String> {
        self.reports()
            .into_iter()
            .filter_map(|report| match report {
                Report::Warning(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    fn push(&self, report: Report) {
        self.reports.lock().unwrap().push(report);
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.push(Report::Info(message.to_string()));
    }

    fn report_progress(&self, current: usize, total: usize, _message: Option<&str>) {
        self.push(Report::Progress { current, total });
    }

    fn report_error(&self, message: &str) {
        self.push(Report::Warning(message.to_string()));
    }

    fn report_completion(&self, message: &str) {
        self.push(Report::Done(message.to_string()));
    }
}
