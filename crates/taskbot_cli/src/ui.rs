use taskbot_core::model::Task;

const RULE: &str = "____________________________________________________________";
const INDENT: &str = "  ";

fn rule() {
    println!("{INDENT}{RULE}");
}

fn say(message: &str) {
    for line in message.lines() {
        println!("{INDENT}{line}");
    }
}

pub fn greet() {
    rule();
    say("Heyo! taskbot here, ready to keep score.\nWhat can I do for you?");
    rule();
}

pub fn goodbye() {
    say("All wrapped up. See you next time!");
    rule();
}

pub fn help() {
    say(concat!(
        "Here is what I understand:\n",
        "  todo <description>\n",
        "  deadline <description> /by <time>\n",
        "  event <description> /from <start> /to <end>\n",
        "  list\n",
        "  mark <number> | unmark <number> | delete <number>\n",
        "  find <keyword>\n",
        "  bye",
    ));
    rule();
}

pub fn added(task: &Task, total: usize) {
    say(&format!(
        "Got it, I added:\n  {task}\nThat makes {} on the list.",
        count_noun(total)
    ));
    rule();
}

pub fn removed(task: &Task, total: usize) {
    say(&format!(
        "Removed:\n  {task}\nThat leaves {} on the list.",
        count_noun(total)
    ));
    rule();
}

pub fn marked(task: &Task) {
    say(&format!("Nice, marked as done:\n  {task}"));
    rule();
}

pub fn unmarked(task: &Task) {
    say(&format!("Okay, marked as not done yet:\n  {task}"));
    rule();
}

pub fn print_tasks(tasks: &[Task]) {
    if tasks.is_empty() {
        say("The list is empty. Add something with todo, deadline, or event.");
    } else {
        say("Here is everything on the list:");
        for (index, task) in tasks.iter().enumerate() {
            say(&format!("{}. {task}", index + 1));
        }
    }
    rule();
}

pub fn print_matches(keyword: &str, matches: &[(usize, Task)]) {
    if matches.is_empty() {
        say(&format!("Nothing on the list matches '{keyword}'."));
    } else {
        say(&format!("Tasks matching '{keyword}':"));
        for (number, task) in matches {
            say(&format!("{number}. {task}"));
        }
    }
    rule();
}

fn count_noun(count: usize) -> String {
    if count == 1 {
        "1 task".to_string()
    } else {
        format!("{count} tasks")
    }
}
