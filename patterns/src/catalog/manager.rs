use std::cell::RefCell;
use std::rc::Rc;
use crate::books::domain::Book;
use crate::catalog::domain::LibraryInterface;

// LibraryManager builds books from raw fields and hands them to whatever
// library it was given. The library handle is shared, not owned.
pub struct LibraryManager {
    library: Rc<RefCell<dyn LibraryInterface>>,
}

impl LibraryManager {
    pub fn new(library: Rc<RefCell<dyn LibraryInterface>>) -> Self {
        Self {
            library,
        }
    }

    pub fn add_book(&self, title: &str, author: &str, year: i64) {
        let book = Book::new(title, author, year);
        self.library.borrow_mut().add_book(book);
    }

    pub fn remove_book(&self, title: &str) {
        self.library.borrow_mut().remove_book(title);
    }

    pub fn show_books(&self) {
        self.library.borrow().show_books();
    }
}
