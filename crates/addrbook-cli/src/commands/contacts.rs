use crate::commands::{ContactLine, Reply};
use addrbook_core::domain::{AddressBook, PhoneNumber};
use addrbook_core::CoreError;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Args)]
pub struct ChangeArgs {
    pub name: String,
    pub old_phone: String,
    pub new_phone: String,
}

#[derive(Debug, Args)]
pub struct NameArgs {
    pub name: String,
}

#[derive(Debug, Args)]
pub struct RemovePhoneArgs {
    pub name: String,
    pub phone: String,
}

pub fn add(book: &mut AddressBook, name: &str, phone: &str) -> Result<Reply, CoreError> {
    // Validate first so a bad number never leaves an empty contact behind.
    PhoneNumber::new(phone)?;
    let existed = book.contains(name);
    book.get_or_create(name)?.add_phone(phone)?;
    Ok(Reply::message(if existed {
        "Contact updated."
    } else {
        "Contact added."
    }))
}

pub fn change(
    book: &mut AddressBook,
    name: &str,
    old_phone: &str,
    new_phone: &str,
) -> Result<Reply, CoreError> {
    book.find_mut(name)?.edit_phone(old_phone, new_phone)?;
    Ok(Reply::message("Contact updated."))
}

pub fn phone(book: &AddressBook, name: &str) -> Result<Reply, CoreError> {
    let record = book.find(name)?;
    Ok(Reply::Phones {
        name: record.name().to_string(),
        phones: record
            .phones()
            .iter()
            .map(|phone| phone.as_str().to_string())
            .collect(),
    })
}

pub fn remove_phone(book: &mut AddressBook, name: &str, phone: &str) -> Result<Reply, CoreError> {
    book.find_mut(name)?.remove_phone(phone)?;
    Ok(Reply::message("Phone removed."))
}

pub fn delete(book: &mut AddressBook, name: &str) -> Result<Reply, CoreError> {
    book.delete(name)?;
    Ok(Reply::message("Contact deleted."))
}

pub fn all(book: &AddressBook) -> Reply {
    Reply::Contacts(book.iter().map(ContactLine::from).collect())
}
