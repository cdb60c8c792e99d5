use serde::Deserialize;

/// Key holding the ordered list of work items in a status response.
pub const HOMEWORKS_KEY: &str = "homeworks";

/// Key holding the server-side timestamp to use as the next poll cursor.
pub const CURRENT_DATE_KEY: &str = "current_date";

/// Wire name of a work item's identifier.
pub const HOMEWORK_NAME_KEY: &str = "homework_name";

/// Wire name of a work item's status code.
pub const STATUS_KEY: &str = "status";

/// Review statuses documented by the status API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// Parse a raw status code. Returns `None` for undocumented codes.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "approved" => Some(HomeworkStatus::Approved),
            "reviewing" => Some(HomeworkStatus::Reviewing),
            "rejected" => Some(HomeworkStatus::Rejected),
            _ => None,
        }
    }

    /// Human-readable verdict sent to the chat.
    pub fn verdict(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Reviewed: the reviewer liked everything. Hooray!",
            HomeworkStatus::Reviewing => "Taken for review by the reviewer.",
            HomeworkStatus::Rejected => "Reviewed: the reviewer has remarks.",
        }
    }
}

impl std::fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HomeworkStatus::Approved => write!(f, "approved"),
            HomeworkStatus::Reviewing => write!(f, "reviewing"),
            HomeworkStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// A single validated work item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub name: String,
    pub status: HomeworkStatus,
}
