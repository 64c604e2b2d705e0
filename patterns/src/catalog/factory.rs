use std::cell::RefCell;
use std::rc::Rc;
use crate::catalog::domain::service::Library;
use crate::catalog::manager::LibraryManager;
use crate::gateway::events::EventPublisher;

pub fn create_library(events_publisher: Rc<dyn EventPublisher>) -> Rc<RefCell<Library>> {
    Rc::new(RefCell::new(Library::new(events_publisher)))
}

pub fn create_library_manager(events_publisher: Rc<dyn EventPublisher>) -> LibraryManager {
    LibraryManager::new(create_library(events_publisher))
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;
    use crate::catalog::factory::create_library_manager;
    use crate::gateway::memory::MemoryPublisher;

    #[test]
    fn test_should_create_library_manager() {
        let events = Rc::new(MemoryPublisher::new());
        let manager = create_library_manager(events.clone());
        manager.add_book("Dune", "Herbert", 1965);
        manager.show_books();
        assert_eq!(2, events.messages().len());
    }
}
