use std::io::{BufRead, Write};
use serde_json::json;
use tracing::debug;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::show_books_cmd::{ShowBooksCommand, ShowBooksCommandRequest};
use crate::catalog::manager::LibraryManager;
use crate::core::command::{Command, CommandError, CommandResult};
use crate::core::events::DomainEvent;
use crate::gateway::events::EventPublisher;

pub const COMMAND_PROMPT: &str = "Enter command (add, remove, show, exit): ";
pub const TITLE_PROMPT: &str = "Enter book title: ";
pub const AUTHOR_PROMPT: &str = "Enter book author: ";
pub const YEAR_PROMPT: &str = "Enter book year: ";
pub const REMOVE_PROMPT: &str = "Enter book title to remove: ";
pub const INVALID_COMMAND: &str = "Invalid command. Please try again.";

#[derive(Debug, PartialEq, Clone)]
pub enum ConsoleCommand {
    Add,
    Remove,
    Show,
    Exit,
    Invalid(String),
}

impl From<&str> for ConsoleCommand {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "add" => ConsoleCommand::Add,
            "remove" => ConsoleCommand::Remove,
            "show" => ConsoleCommand::Show,
            "exit" => ConsoleCommand::Exit,
            _ => ConsoleCommand::Invalid(s.to_string()),
        }
    }
}

// Console drives the library from line-oriented text input until `exit`.
// A year that does not parse, end of input and I/O failures end the session
// with an error; unknown commands are reported and the loop continues.
pub struct Console<R, W> {
    input: R,
    output: W,
    prompts: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, prompts: bool) -> Self {
        Self {
            input,
            output,
            prompts,
        }
    }

    pub fn run(&mut self, manager: &LibraryManager, events: &dyn EventPublisher) -> CommandResult<()> {
        loop {
            let line = self.read_line(COMMAND_PROMPT)?;
            let command = ConsoleCommand::from(line.as_str());
            debug!(?command, "dispatching");
            match command {
                ConsoleCommand::Add => {
                    let title = self.read_line(TITLE_PROMPT)?;
                    let author = self.read_line(AUTHOR_PROMPT)?;
                    let year = self.read_line(YEAR_PROMPT)?;
                    let _ = AddBookCommand::new(manager)
                        .execute(AddBookCommandRequest::new(title.as_str(), author.as_str(), year.as_str()))?;
                }
                ConsoleCommand::Remove => {
                    let title = self.read_line(REMOVE_PROMPT)?;
                    let _ = RemoveBookCommand::new(manager)
                        .execute(RemoveBookCommandRequest::new(title.as_str()))?;
                }
                ConsoleCommand::Show => {
                    let _ = ShowBooksCommand::new(manager).execute(ShowBooksCommandRequest::new())?;
                }
                ConsoleCommand::Exit => {
                    return Ok(());
                }
                ConsoleCommand::Invalid(input) => {
                    events.publish(DomainEvent::rejected(
                        "console", input.as_str(), INVALID_COMMAND.to_string(), json!({"input": input})));
                }
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self, prompt: &str) -> CommandResult<String> {
        if self.prompts {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;
        }
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CommandError::end_of_input(
                format!("input closed while waiting for {:?}", prompt.trim()).as_str()));
        }
        Ok(line.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::rc::Rc;
    use crate::catalog::controller::{Console, ConsoleCommand, COMMAND_PROMPT, INVALID_COMMAND, TITLE_PROMPT};
    use crate::catalog::factory;
    use crate::core::command::{CommandError, CommandResult};
    use crate::core::events::DomainEventType;
    use crate::gateway::memory::MemoryPublisher;

    fn run_session(script: &str, events: &Rc<MemoryPublisher>) -> CommandResult<()> {
        let manager = factory::create_library_manager(events.clone());
        let mut console = Console::new(Cursor::new(script.to_string()), Vec::new(), false);
        console.run(&manager, events.as_ref())
    }

    #[test]
    fn test_should_parse_console_commands() {
        assert_eq!(ConsoleCommand::Add, ConsoleCommand::from("add"));
        assert_eq!(ConsoleCommand::Remove, ConsoleCommand::from("  REMOVE "));
        assert_eq!(ConsoleCommand::Show, ConsoleCommand::from("Show\n"));
        assert_eq!(ConsoleCommand::Exit, ConsoleCommand::from("exit"));
        assert_eq!(ConsoleCommand::Invalid("adds".to_string()), ConsoleCommand::from("adds"));
        assert_eq!(ConsoleCommand::Invalid("".to_string()), ConsoleCommand::from(""));
    }

    #[test]
    fn test_should_report_invalid_command_and_exit() {
        let events = Rc::new(MemoryPublisher::new());
        run_session("bogus\nexit\n", &events).expect("should exit cleanly");

        assert_eq!(vec![INVALID_COMMAND.to_string()], events.messages());
        assert_eq!(DomainEventType::Rejected, events.events()[0].kind);
        assert_eq!("bogus", events.events()[0].key);
    }

    #[test]
    fn test_should_add_and_show_books() {
        let events = Rc::new(MemoryPublisher::new());
        run_session("add\nDune\nHerbert\n1965\nadd\n1984\nOrwell\n1949\n  SHOW \nexit\n", &events)
            .expect("should exit cleanly");

        assert_eq!(vec![
            "Book added: Title: Dune, Author: Herbert, Year: 1965".to_string(),
            "Book added: Title: 1984, Author: Orwell, Year: 1949".to_string(),
            "Title: Dune, Author: Herbert, Year: 1965".to_string(),
            "Title: 1984, Author: Orwell, Year: 1949".to_string(),
        ], events.messages());
    }

    #[test]
    fn test_should_remove_books_by_title() {
        let events = Rc::new(MemoryPublisher::new());
        run_session("add\nEcho\nFirst\n2001\nadd\nEcho\nSecond\n2002\nremove\nEcho\nremove\nMissing\nshow\nexit\n", &events)
            .expect("should exit cleanly");

        let messages = events.messages();
        assert_eq!(4, messages.len());
        assert_eq!("Book removed: Echo", messages[2]);
        assert_eq!("Book removed: Missing", messages[3]);
    }

    #[test]
    fn test_should_trim_answers() {
        let events = Rc::new(MemoryPublisher::new());
        run_session("add\n  Dune  \n Herbert\n 1965 \nexit\n", &events).expect("should exit cleanly");
        assert_eq!(vec!["Book added: Title: Dune, Author: Herbert, Year: 1965".to_string()], events.messages());
    }

    #[test]
    fn test_should_terminate_on_non_integer_year() {
        let events = Rc::new(MemoryPublisher::new());
        let res = run_session("add\nDune\nHerbert\nsoon\nshow\nexit\n", &events);

        assert!(matches!(res, Err(CommandError::Validation { .. })));
        assert!(events.messages().is_empty());
    }

    #[test]
    fn test_should_keep_session_open_after_large_year() {
        let events = Rc::new(MemoryPublisher::new());
        run_session("add\nT\nA\n10000000000\nshow\nexit\n", &events).expect("should exit cleanly");
        assert_eq!(vec![
            "Book added: Title: T, Author: A, Year: 10000000000".to_string(),
            "Title: T, Author: A, Year: 10000000000".to_string(),
        ], events.messages());
    }

    #[test]
    fn test_should_terminate_on_end_of_input() {
        let events = Rc::new(MemoryPublisher::new());
        let res = run_session("bogus\n", &events);

        assert!(matches!(res, Err(CommandError::EndOfInput { .. })));
        assert_eq!(vec![INVALID_COMMAND.to_string()], events.messages());
    }

    #[test]
    fn test_should_write_prompts() {
        let events = Rc::new(MemoryPublisher::new());
        let manager = factory::create_library_manager(events.clone());
        let mut console = Console::new(Cursor::new("remove\nDune\nexit\n"), Vec::new(), true);
        console.run(&manager, events.as_ref()).expect("should exit cleanly");

        let output = String::from_utf8(console.into_output()).expect("should be utf8");
        assert!(output.starts_with(COMMAND_PROMPT));
        assert!(output.contains("Enter book title to remove: "));
        assert!(!output.contains(TITLE_PROMPT));
        assert_eq!(2, output.matches(COMMAND_PROMPT).count());
    }
}
