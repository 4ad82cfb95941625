pub mod birthday;
pub mod book;
pub mod phone;
pub mod record;

pub use birthday::{Birthday, BIRTHDAY_FORMAT};
pub use book::AddressBook;
pub use phone::PhoneNumber;
pub use record::Record;
