use std::rc::Rc;
use serde_json::json;
use crate::books::domain::Book;
use crate::catalog::domain::LibraryInterface;
use crate::core::events::DomainEvent;
use crate::gateway::events::EventPublisher;

pub(crate) const BOOKS: &str = "books";

// Library keeps books in insertion order; duplicate titles are allowed.
pub struct Library {
    books: Vec<Book>,
    events_publisher: Rc<dyn EventPublisher>,
}

impl Library {
    pub fn new(events_publisher: Rc<dyn EventPublisher>) -> Self {
        Self {
            books: vec![],
            events_publisher,
        }
    }

    pub fn books(&self) -> &[Book] {
        self.books.as_slice()
    }
}

impl LibraryInterface for Library {
    fn add_book(&mut self, book: Book) {
        let event = DomainEvent::added(
            BOOKS, book.title(), format!("Book added: {}", book), book.to_json());
        self.books.push(book);
        self.events_publisher.publish(event);
    }

    fn remove_book(&mut self, title: &str) {
        self.books.retain(|book| book.title() != title);
        // published whether or not anything matched
        self.events_publisher.publish(DomainEvent::deleted(
            BOOKS, title, format!("Book removed: {}", title), json!({"title": title})));
    }

    fn show_books(&self) {
        for book in &self.books {
            self.events_publisher.publish(DomainEvent::listed(
                BOOKS, book.title(), book.to_string(), book.to_json()));
        }
    }
}
