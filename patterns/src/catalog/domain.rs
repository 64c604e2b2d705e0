pub mod service;

use crate::books::domain::Book;

// LibraryInterface is the capability the manager depends on. Any type
// implementing it can stand in for the in-memory Library.
pub trait LibraryInterface {
    fn add_book(&mut self, book: Book);
    // Removes every book whose title matches exactly.
    fn remove_book(&mut self, title: &str);
    fn show_books(&self);
}
