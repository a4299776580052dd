use std::collections::HashMap;
use taskbot_core::parse::command::{ARGUMENT_KEY, COMMAND_KEY};

/// Splits one raw input line into the token mapping the core parsers
/// consume: the first word is the command (alias-expanded), the words up
/// to the first `/keyword` are the argument, and each `/keyword` opens a
/// key collecting the words that follow it. Later duplicates win.
pub fn tokenize(line: &str, aliases: &HashMap<String, String>) -> HashMap<String, String> {
    let mut tokens = HashMap::new();
    let mut words = line.split_whitespace();

    let command = words.next().unwrap_or("");
    let command = aliases.get(command).map(String::as_str).unwrap_or(command);
    tokens.insert(COMMAND_KEY.to_string(), command.to_string());

    let mut key = ARGUMENT_KEY.to_string();
    let mut value: Vec<&str> = Vec::new();
    for word in words {
        if word.starts_with('/') && word.len() > 1 {
            tokens.insert(std::mem::replace(&mut key, word.to_string()), value.join(" "));
            value.clear();
        } else {
            value.push(word);
        }
    }
    tokens.insert(key, value.join(" "));

    tokens
}
