use crate::catalog::manager::LibraryManager;
use crate::core::command::{Command, CommandResult};

pub struct ShowBooksCommand<'a> {
    manager: &'a LibraryManager,
}

impl<'a> ShowBooksCommand<'a> {
    pub fn new(manager: &'a LibraryManager) -> Self {
        Self {
            manager,
        }
    }
}

#[derive(Debug)]
pub struct ShowBooksCommandRequest {}

impl ShowBooksCommandRequest {
    pub fn new() -> Self {
        Self {}
    }
}

#[derive(Debug, PartialEq)]
pub struct ShowBooksCommandResponse {}

impl ShowBooksCommandResponse {
    pub fn new() -> Self {
        Self {}
    }
}

impl<'a> Command<ShowBooksCommandRequest, ShowBooksCommandResponse> for ShowBooksCommand<'a> {
    fn execute(&self, _req: ShowBooksCommandRequest) -> CommandResult<ShowBooksCommandResponse> {
        self.manager.show_books();
        Ok(ShowBooksCommandResponse::new())
    }
}
