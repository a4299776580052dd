use crate::error::AppError;
use crate::model::Task;
use std::collections::HashMap;

pub const COMMAND_KEY: &str = "command";
pub const ARGUMENT_KEY: &str = "argument";
pub const BY_KEY: &str = "/by";
pub const FROM_KEY: &str = "/from";
pub const TO_KEY: &str = "/to";

/// Turns a tokenized command into a task. Unlike save-record parsing,
/// this boundary is strict: a bad command is the user's mistake to see
/// and correct, so every failure propagates.
pub fn task_from_tokens(tokens: &HashMap<String, String>) -> Result<Task, AppError> {
    let command = required(tokens, COMMAND_KEY)?.to_lowercase();
    let argument = required(tokens, ARGUMENT_KEY)?;

    match command.as_str() {
        "todo" => Task::todo(argument),
        "deadline" => Task::deadline(argument, required(tokens, BY_KEY)?),
        "event" => Task::event(
            argument,
            required(tokens, FROM_KEY)?,
            required(tokens, TO_KEY)?,
        ),
        other => Err(AppError::unrecognized_task_type(format!(
            "'{other}' is not a task type I know, expected todo, deadline, or event"
        ))),
    }
}

fn required<'a>(tokens: &'a HashMap<String, String>, key: &str) -> Result<&'a str, AppError> {
    tokens
        .get(key)
        .map(String::as_str)
        .ok_or_else(|| AppError::invalid_input(format!("missing '{key}'")))
}
