use std::path::PathBuf;
use std::time::Duration;

use crate::records::Student;
use crate::widgets::DeleteRequest;

pub struct AppConfig {
    pub store_path: PathBuf,
    pub log_path: PathBuf,
    pub message_timeout: Duration,
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("formdesk");

        Self {
            store_path: data_dir.join("formdesk.db"),
            log_path: data_dir.join("formdesk.log"),
            message_timeout: Duration::from_secs(5),
            debug: false,
        }
    }
}

#[derive(Debug, Clone)]
pub enum PendingAction {
    DeleteStudent(DeleteRequest<Student>),
}

impl PendingAction {
    pub fn confirm_message(&self) -> &'static str {
        match self {
            Self::DeleteStudent(request) => request.prompt(),
        }
    }
}
