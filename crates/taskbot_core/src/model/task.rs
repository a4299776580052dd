use crate::error::AppError;
use std::fmt;
use time::Date;
use time::macros::format_description;

/// Field separator of the save-file grammar. Descriptions and payload
/// fields must never contain it, or a reloaded record desynchronizes.
pub const SAVE_DELIMITER: &str = " | ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Deadline { due_by: String },
    Event { from: String, to: String },
}

impl TaskKind {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Todo => "T",
            Self::Deadline { .. } => "D",
            Self::Event { .. } => "E",
        }
    }

    fn empty_description_message(&self) -> &'static str {
        match self {
            Self::Todo => "a todo needs a description, try: todo <description>",
            Self::Deadline { .. } => {
                "a deadline needs a description, try: deadline <description> /by <time>"
            }
            Self::Event { .. } => {
                "an event needs a description, try: event <description> /from <start> /to <end>"
            }
        }
    }

    fn check_payload(&self) -> Result<(), AppError> {
        match self {
            Self::Todo => Ok(()),
            Self::Deadline { due_by } => check_field(due_by),
            Self::Event { from, to } => {
                check_field(from)?;
                check_field(to)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    done: bool,
    kind: TaskKind,
}

impl Task {
    pub fn todo(description: &str) -> Result<Self, AppError> {
        Self::build(description, TaskKind::Todo)
    }

    pub fn deadline(description: &str, due_by: &str) -> Result<Self, AppError> {
        Self::build(
            description,
            TaskKind::Deadline {
                due_by: due_by.to_string(),
            },
        )
    }

    pub fn event(description: &str, from: &str, to: &str) -> Result<Self, AppError> {
        Self::build(
            description,
            TaskKind::Event {
                from: from.to_string(),
                to: to.to_string(),
            },
        )
    }

    fn build(description: &str, kind: TaskKind) -> Result<Self, AppError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(AppError::empty_description(kind.empty_description_message()));
        }
        check_field(description)?;
        kind.check_payload()?;

        Ok(Self {
            description: description.to_string(),
            done: false,
            kind,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn mark_done(&mut self) {
        self.done = true;
    }

    pub fn mark_undone(&mut self) {
        self.done = false;
    }

    // Initialization hook for the save-record parser only; runtime
    // transitions go through mark_done/mark_undone.
    pub(crate) fn set_done(&mut self, done: bool) {
        self.done = done;
    }

    pub fn status_icon(&self) -> &'static str {
        if self.done { "X" } else { " " }
    }

    pub fn save_record(&self) -> String {
        let flag = if self.done { 1 } else { 0 };
        let base = format!(
            "{}{SAVE_DELIMITER}{}{SAVE_DELIMITER}{}",
            self.kind.tag(),
            flag,
            self.description
        );
        match &self.kind {
            TaskKind::Todo => base,
            TaskKind::Deadline { due_by } => format!("{base}{SAVE_DELIMITER}{due_by}"),
            TaskKind::Event { from, to } => {
                format!("{base}{SAVE_DELIMITER}{from}{SAVE_DELIMITER}{to}")
            }
        }
    }

    pub fn matches_keyword(&self, keyword: &str) -> bool {
        self.description.contains(keyword)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}][{}] {}",
            self.kind.tag(),
            self.status_icon(),
            self.description
        )?;
        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { due_by } => write!(f, " (by: {})", friendly_timestamp(due_by)),
            TaskKind::Event { from, to } => write!(
                f,
                " (from: {} to: {})",
                friendly_timestamp(from),
                friendly_timestamp(to)
            ),
        }
    }
}

fn check_field(text: &str) -> Result<(), AppError> {
    if text.contains(SAVE_DELIMITER) {
        return Err(AppError::invalid_data(format!(
            "task fields cannot contain '{SAVE_DELIMITER}'"
        )));
    }
    Ok(())
}

// Payloads are free text; an ISO calendar date gets a friendlier
// rendering, anything else is shown verbatim.
fn friendly_timestamp(raw: &str) -> String {
    let input = format_description!("[year]-[month]-[day]");
    let output = format_description!("[month repr:short] [day padding:none] [year]");
    match Date::parse(raw.trim(), input) {
        Ok(date) => date.format(output).unwrap_or_else(|_| raw.to_string()),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::Task;

    #[test]
    fn todo_renders_description_verbatim() {
        let task = Task::todo("buy milk").unwrap();
        assert_eq!(task.description(), "buy milk");
        assert!(task.to_string().contains("buy milk"));
        assert_eq!(task.to_string(), "[T][ ] buy milk");
    }

    #[test]
    fn empty_description_messages_differ_per_kind() {
        let todo_err = Task::todo("").unwrap_err();
        let deadline_err = Task::deadline("  ", "Sunday").unwrap_err();
        let event_err = Task::event("", "Mon", "Tue").unwrap_err();

        assert_eq!(todo_err.code(), "empty_description");
        assert_eq!(deadline_err.code(), "empty_description");
        assert_eq!(event_err.code(), "empty_description");

        assert_ne!(todo_err.message(), deadline_err.message());
        assert_ne!(deadline_err.message(), event_err.message());
        assert_ne!(todo_err.message(), event_err.message());
    }

    #[test]
    fn rejects_delimiter_in_description() {
        let err = Task::todo("a | b").unwrap_err();
        assert_eq!(err.code(), "invalid_data");
    }

    #[test]
    fn rejects_delimiter_in_payload_fields() {
        assert_eq!(
            Task::deadline("report", "Mon | Tue").unwrap_err().code(),
            "invalid_data"
        );
        assert_eq!(
            Task::event("meeting", "2pm", "4 | pm").unwrap_err().code(),
            "invalid_data"
        );
    }

    #[test]
    fn pipe_without_surrounding_spaces_is_allowed() {
        let task = Task::todo("fix a|b split").unwrap();
        assert_eq!(task.description(), "fix a|b split");
    }

    #[test]
    fn mark_done_is_idempotent() {
        let mut task = Task::todo("read book").unwrap();
        assert!(!task.is_done());

        task.mark_done();
        task.mark_done();
        assert!(task.is_done());

        task.mark_undone();
        assert!(!task.is_done());
    }

    #[test]
    fn status_icon_tracks_done_flag() {
        let mut task = Task::todo("read book").unwrap();
        assert_eq!(task.status_icon(), " ");
        task.mark_done();
        assert_eq!(task.status_icon(), "X");
    }

    #[test]
    fn save_record_formats_per_kind() {
        let todo = Task::todo("read book").unwrap();
        assert_eq!(todo.save_record(), "T | 0 | read book");

        let mut deadline = Task::deadline("return book", "June 6th").unwrap();
        deadline.mark_done();
        assert_eq!(deadline.save_record(), "D | 1 | return book | June 6th");

        let event = Task::event("project meeting", "Mon 2pm", "4pm").unwrap();
        assert_eq!(
            event.save_record(),
            "E | 0 | project meeting | Mon 2pm | 4pm"
        );
    }

    #[test]
    fn matches_keyword_is_case_sensitive_substring() {
        let task = Task::todo("Buy Milk").unwrap();
        assert!(task.matches_keyword("Milk"));
        assert!(task.matches_keyword("uy M"));
        assert!(!task.matches_keyword("milk"));
    }

    #[test]
    fn deadline_renders_iso_dates_in_friendly_form() {
        let task = Task::deadline("submit report", "2024-05-01").unwrap();
        assert_eq!(task.to_string(), "[D][ ] submit report (by: May 1 2024)");
    }

    #[test]
    fn free_text_timestamps_render_verbatim() {
        let task = Task::event("project meeting", "Mon 2pm", "4pm").unwrap();
        assert_eq!(
            task.to_string(),
            "[E][ ] project meeting (from: Mon 2pm to: 4pm)"
        );
    }

    #[test]
    fn display_keeps_base_render_shape() {
        let mut task = Task::todo("buy milk").unwrap();
        task.mark_done();
        assert!(task.to_string().contains("[X] buy milk"));
    }
}
