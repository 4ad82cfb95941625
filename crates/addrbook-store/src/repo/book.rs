use crate::error::{Result, StoreError};
use addrbook_core::domain::{AddressBook, Birthday, PhoneNumber, Record};
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use std::collections::HashMap;

const BIRTHDAY_COLUMN_FORMAT: &str = "%Y-%m-%d";

/// Whole-book snapshot persistence: `save` replaces what `load` returns.
pub struct BookRepo<'a> {
    conn: &'a Connection,
}

impl<'a> BookRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn load(&self) -> Result<AddressBook> {
        let mut phones = self.load_phones()?;

        let mut stmt = self.conn.prepare(
            "SELECT name, birthday
             FROM contacts
             ORDER BY position ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            let (name, birthday) = contact_from_row(row)?;
            let record_phones = phones.remove(&name).unwrap_or_default();
            records.push(Record::from_parts(name, record_phones, birthday)?);
        }
        Ok(records.into_iter().collect())
    }

    pub fn save(&self, book: &AddressBook) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute("DELETE FROM phones;", [])?;
        tx.execute("DELETE FROM contacts;", [])?;

        {
            let mut insert_contact = tx.prepare(
                "INSERT INTO contacts (name, position, birthday) VALUES (?1, ?2, ?3);",
            )?;
            let mut insert_phone = tx.prepare(
                "INSERT INTO phones (contact_name, position, value) VALUES (?1, ?2, ?3);",
            )?;

            for (position, record) in book.iter().enumerate() {
                let birthday = record
                    .birthday()
                    .map(|value| value.date().format(BIRTHDAY_COLUMN_FORMAT).to_string());
                insert_contact.execute(params![record.name(), position as i64, birthday])?;
                for (phone_position, phone) in record.phones().iter().enumerate() {
                    insert_phone.execute(params![
                        record.name(),
                        phone_position as i64,
                        phone.as_str()
                    ])?;
                }
            }
        }

        tx.commit()?;
        Ok(())
    }

    fn load_phones(&self) -> Result<HashMap<String, Vec<PhoneNumber>>> {
        let mut stmt = self.conn.prepare(
            "SELECT contact_name, value
             FROM phones
             ORDER BY contact_name ASC, position ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut map: HashMap<String, Vec<PhoneNumber>> = HashMap::new();
        while let Some(row) = rows.next()? {
            let name: String = row.get(0)?;
            let value: String = row.get(1)?;
            let phone = PhoneNumber::new(&value)
                .map_err(|_| StoreError::Corrupt(format!("phone {value:?} for {name}")))?;
            map.entry(name).or_default().push(phone);
        }
        Ok(map)
    }
}

fn contact_from_row(row: &Row<'_>) -> Result<(String, Option<Birthday>)> {
    let name: String = row.get(0)?;
    let birthday: Option<String> = row.get(1)?;
    let birthday = match birthday {
        Some(raw) => {
            let date = NaiveDate::parse_from_str(&raw, BIRTHDAY_COLUMN_FORMAT)
                .map_err(|_| StoreError::Corrupt(format!("birthday {raw:?} for {name}")))?;
            Some(Birthday::from_date(date))
        }
        None => None,
    };
    Ok((name, birthday))
}
