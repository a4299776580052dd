use crate::error::AppError;
use crate::model::{SAVE_DELIMITER, Task};
use crate::report::Reporter;

/// Turns one persisted line into a task. A line that does not parse is
/// reported through `reporter` and dropped; loading never aborts for a
/// single bad record.
pub fn parse_save_record(line: &str, reporter: &dyn Reporter) -> Option<Task> {
    match parse_record(line) {
        Ok(task) => Some(task),
        Err(_) => {
            reporter.report(&format!(
                "warning: dropping malformed save record {{ {} }}",
                line.trim()
            ));
            None
        }
    }
}

fn parse_record(line: &str) -> Result<Task, AppError> {
    let line = line.trim();
    let fields: Vec<&str> = line.split(SAVE_DELIMITER).collect();

    // Exact arity per tag: a surplus field means the record is
    // desynchronized, not that it has ignorable extras.
    let (flag, mut task) = match fields.as_slice() {
        ["T", flag, description] => (*flag, Task::todo(description)?),
        ["D", flag, description, due_by] => (*flag, Task::deadline(description, due_by)?),
        ["E", flag, description, from, to] => (*flag, Task::event(description, from, to)?),
        _ => {
            return Err(AppError::invalid_data(
                "unrecognized record tag or field count",
            ));
        }
    };

    task.set_done(flag == "1");
    Ok(task)
}
