use crate::error::AppError;
use crate::model::Task;
use crate::parse::save_record;
use crate::report::Reporter;
use std::path::{Path, PathBuf};

const STORE_FILE_NAME: &str = "tasks.txt";
const STORE_ENV_VAR: &str = "TASKBOT_STORE_PATH";

pub fn store_path() -> Result<PathBuf, AppError> {
    if let Ok(path) = std::env::var(STORE_ENV_VAR)
        && !path.trim().is_empty()
    {
        return Ok(PathBuf::from(path));
    }

    if cfg!(windows) {
        let appdata =
            std::env::var("APPDATA").map_err(|_| AppError::invalid_data("APPDATA is not set"))?;
        Ok(PathBuf::from(appdata).join("taskbot").join(STORE_FILE_NAME))
    } else {
        let home = std::env::var("HOME").map_err(|_| AppError::invalid_data("HOME is not set"))?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join("taskbot")
            .join(STORE_FILE_NAME))
    }
}

/// Loads every record the file holds, one per line. Malformed lines are
/// reported and skipped; only the file itself failing to read is an error.
pub fn load_tasks(path: &Path, reporter: &dyn Reporter) -> Result<Vec<Task>, AppError> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(path).map_err(|err| AppError::io(err.to_string()))?;
    let mut tasks = Vec::new();
    for line in content.lines() {
        if line.trim().is_empty() {
            continue;
        }
        if let Some(task) = save_record::parse_save_record(line, reporter) {
            tasks.push(task);
        }
    }

    Ok(tasks)
}

pub fn save_tasks(path: &Path, tasks: &[Task]) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|err| AppError::io(err.to_string()))?;
    }

    let mut content = String::new();
    for task in tasks {
        content.push_str(&task.save_record());
        content.push('\n');
    }
    std::fs::write(path, content).map_err(|err| AppError::io(err.to_string()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let permissions = std::fs::Permissions::from_mode(0o600);
        std::fs::set_permissions(path, permissions).map_err(|err| AppError::io(err.to_string()))?;
    }

    Ok(())
}
