use crate::error::AppError;
use crate::model::Task;
use crate::parse::command;
use std::collections::HashMap;

// Task numbers are 1-based, matching what `list` shows the user.

pub fn add_task(
    tasks: &mut Vec<Task>,
    tokens: &HashMap<String, String>,
) -> Result<Task, AppError> {
    let task = command::task_from_tokens(tokens)?;
    tasks.push(task.clone());
    Ok(task)
}

pub fn mark_task(tasks: &mut [Task], number: usize) -> Result<Task, AppError> {
    let task = task_at_mut(tasks, number)?;
    task.mark_done();
    Ok(task.clone())
}

pub fn unmark_task(tasks: &mut [Task], number: usize) -> Result<Task, AppError> {
    let task = task_at_mut(tasks, number)?;
    task.mark_undone();
    Ok(task.clone())
}

pub fn delete_task(tasks: &mut Vec<Task>, number: usize) -> Result<Task, AppError> {
    if number == 0 || number > tasks.len() {
        return Err(no_such_task(number));
    }
    Ok(tasks.remove(number - 1))
}

pub fn find_tasks(tasks: &[Task], keyword: &str) -> Vec<(usize, Task)> {
    tasks
        .iter()
        .enumerate()
        .filter(|(_, task)| task.matches_keyword(keyword))
        .map(|(index, task)| (index + 1, task.clone()))
        .collect()
}

pub fn parse_task_number(raw: &str) -> Result<usize, AppError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::invalid_input("a task number is required"));
    }
    trimmed
        .parse()
        .map_err(|_| AppError::invalid_input(format!("'{trimmed}' is not a task number")))
}

fn task_at_mut(tasks: &mut [Task], number: usize) -> Result<&mut Task, AppError> {
    if number == 0 || number > tasks.len() {
        return Err(no_such_task(number));
    }
    Ok(&mut tasks[number - 1])
}

fn no_such_task(number: usize) -> AppError {
    AppError::invalid_input(format!("no task numbered {number}"))
}

#[cfg(test)]
mod tests {
    use super::{add_task, delete_task, find_tasks, mark_task, parse_task_number, unmark_task};
    use crate::model::Task;
    use std::collections::HashMap;

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task::todo("Buy Milk").unwrap(),
            Task::deadline("return book", "June 6th").unwrap(),
            Task::todo("buy stamps").unwrap(),
        ]
    }

    fn add_tokens(command: &str, argument: &str) -> HashMap<String, String> {
        [("command", command), ("argument", argument)]
            .into_iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn add_task_appends_and_returns_task() {
        let mut tasks = Vec::new();
        let task = add_task(&mut tasks, &add_tokens("todo", "buy milk")).unwrap();

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0], task);
        assert_eq!(task.description(), "buy milk");
    }

    #[test]
    fn add_task_rejects_unknown_command_without_mutating() {
        let mut tasks = Vec::new();
        let err = add_task(&mut tasks, &add_tokens("frobnicate", "x")).unwrap_err();

        assert_eq!(err.code(), "unrecognized_task_type");
        assert!(tasks.is_empty());
    }

    #[test]
    fn mark_and_unmark_use_one_based_numbers() {
        let mut tasks = sample_tasks();

        let marked = mark_task(&mut tasks, 2).unwrap();
        assert!(marked.is_done());
        assert!(tasks[1].is_done());
        assert!(!tasks[0].is_done());

        let unmarked = unmark_task(&mut tasks, 2).unwrap();
        assert!(!unmarked.is_done());
        assert!(!tasks[1].is_done());
    }

    #[test]
    fn mark_task_rejects_out_of_range_numbers() {
        let mut tasks = sample_tasks();

        assert_eq!(mark_task(&mut tasks, 0).unwrap_err().code(), "invalid_input");
        assert_eq!(mark_task(&mut tasks, 4).unwrap_err().code(), "invalid_input");
    }

    #[test]
    fn delete_task_removes_and_returns_task() {
        let mut tasks = sample_tasks();
        let removed = delete_task(&mut tasks, 1).unwrap();

        assert_eq!(removed.description(), "Buy Milk");
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].description(), "return book");
    }

    #[test]
    fn delete_task_rejects_unknown_number() {
        let mut tasks = sample_tasks();
        let err = delete_task(&mut tasks, 9).unwrap_err();

        assert_eq!(err.code(), "invalid_input");
        assert_eq!(tasks.len(), 3);
    }

    #[test]
    fn find_tasks_preserves_original_numbers() {
        let tasks = sample_tasks();
        let matches = find_tasks(&tasks, "buy");

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].0, 3);
        assert_eq!(matches[0].1.description(), "buy stamps");
    }

    #[test]
    fn find_tasks_is_case_sensitive() {
        let tasks = sample_tasks();
        assert_eq!(find_tasks(&tasks, "Buy").len(), 1);
        assert_eq!(find_tasks(&tasks, "book").len(), 1);
        assert!(find_tasks(&tasks, "BOOK").is_empty());
    }

    #[test]
    fn parse_task_number_accepts_digits_only() {
        assert_eq!(parse_task_number(" 2 ").unwrap(), 2);
        assert_eq!(parse_task_number("").unwrap_err().code(), "invalid_input");
        assert_eq!(
            parse_task_number("two").unwrap_err().code(),
            "invalid_input"
        );
    }
}
