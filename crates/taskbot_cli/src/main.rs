use clap::Parser;
use std::collections::HashMap;
use std::io::{self, BufRead};
use std::path::PathBuf;
use taskbot_cli::cli::Cli;
use taskbot_cli::tokenizer::tokenize;
use taskbot_cli::ui;
use taskbot_core::config;
use taskbot_core::error::AppError;
use taskbot_core::model::Task;
use taskbot_core::parse::command::{ARGUMENT_KEY, COMMAND_KEY};
use taskbot_core::report::StderrReporter;
use taskbot_core::storage::line_store;
use taskbot_core::task_api;

struct Session {
    tasks: Vec<Task>,
    store_path: PathBuf,
    aliases: HashMap<String, String>,
}

impl Session {
    fn save(&self) -> Result<(), AppError> {
        line_store::save_tasks(&self.store_path, &self.tasks)
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let store_path = match cli.store_path {
        Some(path) => path,
        None => line_store::store_path()?,
    };

    let config_load = config::load_config_with_fallback();
    if let Some(err) = &config_load.error {
        eprintln!("ERROR: {err}");
    }

    let tasks = line_store::load_tasks(&store_path, &StderrReporter)?;
    let mut session = Session {
        tasks,
        store_path,
        aliases: config_load.config.aliases,
    };

    if !cli.no_banner {
        ui::greet();
    }

    let stdin = io::stdin();
    let mut stdin_lock = stdin.lock();
    let mut input = String::new();

    loop {
        input.clear();
        let bytes = stdin_lock
            .read_line(&mut input)
            .map_err(|err| AppError::io(err.to_string()))?;

        if bytes == 0 {
            break;
        }

        let line = input.trim();
        if line.is_empty() {
            continue;
        }

        if line.eq_ignore_ascii_case("bye") || line.eq_ignore_ascii_case("exit") {
            break;
        }

        if let Err(err) = handle_line(&mut session, line) {
            eprintln!("ERROR: {err}");
        }
    }

    if !cli.no_banner {
        ui::goodbye();
    }

    Ok(())
}

fn handle_line(session: &mut Session, line: &str) -> Result<(), AppError> {
    let tokens = tokenize(line, &session.aliases);
    let command = tokens
        .get(COMMAND_KEY)
        .map(String::as_str)
        .unwrap_or("")
        .to_lowercase();
    let argument = tokens.get(ARGUMENT_KEY).map(String::as_str).unwrap_or("");

    match command.as_str() {
        "list" => {
            ui::print_tasks(&session.tasks);
        }
        "mark" => {
            let number = task_api::parse_task_number(argument)?;
            let task = task_api::mark_task(&mut session.tasks, number)?;
            session.save()?;
            ui::marked(&task);
        }
        "unmark" => {
            let number = task_api::parse_task_number(argument)?;
            let task = task_api::unmark_task(&mut session.tasks, number)?;
            session.save()?;
            ui::unmarked(&task);
        }
        "delete" => {
            let number = task_api::parse_task_number(argument)?;
            let task = task_api::delete_task(&mut session.tasks, number)?;
            session.save()?;
            ui::removed(&task, session.tasks.len());
        }
        "find" => {
            if argument.is_empty() {
                return Err(AppError::invalid_input(
                    "a keyword is required, try: find <keyword>",
                ));
            }
            let matches = task_api::find_tasks(&session.tasks, argument);
            ui::print_matches(argument, &matches);
        }
        "help" | "?" => {
            ui::help();
        }
        _ => {
            let task = task_api::add_task(&mut session.tasks, &tokens)?;
            session.save()?;
            ui::added(&task, session.tasks.len());
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("ERROR: {err}");
        std::process::exit(1);
    }
}
