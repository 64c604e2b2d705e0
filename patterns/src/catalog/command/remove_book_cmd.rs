use crate::catalog::manager::LibraryManager;
use crate::core::command::{Command, CommandResult};

pub struct RemoveBookCommand<'a> {
    manager: &'a LibraryManager,
}

impl<'a> RemoveBookCommand<'a> {
    pub fn new(manager: &'a LibraryManager) -> Self {
        Self {
            manager,
        }
    }
}

#[derive(Debug)]
pub struct RemoveBookCommandRequest {
    pub title: String,
}

impl RemoveBookCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct RemoveBookCommandResponse {}

impl RemoveBookCommandResponse {
    pub fn new() -> Self {
        Self {}
    }
}

impl<'a> Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand<'a> {
    fn execute(&self, req: RemoveBookCommandRequest) -> CommandResult<RemoveBookCommandResponse> {
        self.manager.remove_book(req.title.as_str());
        Ok(RemoveBookCommandResponse::new())
    }
}
