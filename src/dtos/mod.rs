pub mod books;

pub use books::{
    BookListResponse, BookResponse, CreateBookRequest, MessageResponse, UpdateBookRequest,
};
