use crate::domain::record::Record;
use crate::error::CoreError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name()) {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }

    pub fn find(&self, name: &str) -> Result<&Record, CoreError> {
        self.position(name)
            .map(|index| &self.records[index])
            .ok_or_else(|| CoreError::ContactNotFound(name.to_string()))
    }

    pub fn find_mut(&mut self, name: &str) -> Result<&mut Record, CoreError> {
        match self.position(name) {
            Some(index) => Ok(&mut self.records[index]),
            None => Err(CoreError::ContactNotFound(name.to_string())),
        }
    }

    pub fn delete(&mut self, name: &str) -> Result<Record, CoreError> {
        let index = self
            .position(name)
            .ok_or_else(|| CoreError::ContactNotFound(name.to_string()))?;
        Ok(self.records.remove(index))
    }

    pub fn get_or_create(&mut self, name: &str) -> Result<&mut Record, CoreError> {
        let index = match self.position(name) {
            Some(index) => index,
            None => {
                self.records.push(Record::new(name)?);
                self.records.len() - 1
            }
        };
        Ok(&mut self.records[index])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|record| record.name() == name)
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::AddressBook;
    use crate::domain::Record;
    use crate::error::CoreErrorKind;

    fn names(book: &AddressBook) -> Vec<&str> {
        book.iter().map(Record::name).collect()
    }

    #[test]
    fn add_record_upserts_without_merge() {
        let mut book = AddressBook::new();
        let mut first = Record::new("Ada").unwrap();
        first.add_phone("1111111111").unwrap();
        book.add_record(first);
        book.add_record(Record::new("Bob").unwrap());
        book.add_record(Record::new("Ada").unwrap());

        assert_eq!(names(&book), vec!["Ada", "Bob"]);
        assert!(book.find("Ada").unwrap().phones().is_empty());
    }

    #[test]
    fn find_missing_is_not_found() {
        let book = AddressBook::new();
        let err = book.find("Ada").unwrap_err();
        assert_eq!(err.kind(), CoreErrorKind::NotFound);
    }

    #[test]
    fn delete_removes_and_later_find_fails() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("Ada").unwrap());
        book.add_record(Record::new("Bob").unwrap());
        book.add_record(Record::new("Cy").unwrap());

        let removed = book.delete("Bob").unwrap();
        assert_eq!(removed.name(), "Bob");
        assert_eq!(book.find("Bob").unwrap_err().kind(), CoreErrorKind::NotFound);
        assert_eq!(names(&book), vec!["Ada", "Cy"]);
    }

    #[test]
    fn delete_missing_is_not_found() {
        let mut book = AddressBook::new();
        let err = book.delete("Ghost").unwrap_err();
        assert_eq!(err.kind(), CoreErrorKind::NotFound);
    }

    #[test]
    fn get_or_create_creates_once() {
        let mut book = AddressBook::new();
        book.get_or_create("Ada")
            .unwrap()
            .add_phone("1111111111")
            .unwrap();
        let again = book.get_or_create("Ada").unwrap();
        assert_eq!(again.phones().len(), 1);
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn get_or_create_rejects_blank_name() {
        let mut book = AddressBook::new();
        assert!(book.get_or_create(" ").is_err());
        assert!(book.is_empty());
    }

    #[test]
    fn keys_match_record_names() {
        let book: AddressBook = ["Ada", "Bob", "Ada"]
            .into_iter()
            .map(|name| Record::new(name).unwrap())
            .collect();
        assert_eq!(book.len(), 2);
        for record in &book {
            assert_eq!(book.find(record.name()).unwrap(), record);
        }
    }
}
