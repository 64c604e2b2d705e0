use crate::catalog::manager::LibraryManager;
use crate::core::command::{Command, CommandResult};

pub struct AddBookCommand<'a> {
    manager: &'a LibraryManager,
}

impl<'a> AddBookCommand<'a> {
    pub fn new(manager: &'a LibraryManager) -> Self {
        Self {
            manager,
        }
    }
}

// Raw console answers; the year is still text until the command runs.
#[derive(Debug)]
pub struct AddBookCommandRequest {
    pub title: String,
    pub author: String,
    pub year: String,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, year: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            year: year.to_string(),
        }
    }

    pub fn parse_year(&self) -> CommandResult<i64> {
        Ok(self.year.trim().parse::<i64>()?)
    }
}

#[derive(Debug, PartialEq)]
pub struct AddBookCommandResponse {
    pub title: String,
    pub year: i64,
}

impl AddBookCommandResponse {
    pub fn new(title: &str, year: i64) -> Self {
        Self {
            title: title.to_string(),
            year,
        }
    }
}

impl<'a> Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand<'a> {
    fn execute(&self, req: AddBookCommandRequest) -> CommandResult<AddBookCommandResponse> {
        let year = req.parse_year()?;
        self.manager.add_book(req.title.as_str(), req.author.as_str(), year);
        Ok(AddBookCommandResponse::new(req.title.as_str(), year))
    }
}
