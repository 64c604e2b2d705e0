pub mod books {
    pub mod domain;
}

pub mod catalog {
    pub mod command {
        pub mod add_book_cmd;
        pub mod remove_book_cmd;
        pub mod show_books_cmd;
    }
    pub mod controller;
    pub mod domain;
    pub mod factory;
    pub mod manager;
}

pub mod core {
    pub mod command;
    pub mod domain;
    pub mod events;
}

pub mod gateway;

pub mod vehicles {
    pub mod domain;
    pub mod factory;
}
