pub mod books;
pub mod users;

pub use books::BookService;
pub use users::UserService;
