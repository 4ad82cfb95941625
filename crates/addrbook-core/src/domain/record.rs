use crate::domain::birthday::Birthday;
use crate::domain::phone::PhoneNumber;
use crate::error::CoreError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: String,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Result<Self, CoreError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CoreError::EmptyName);
        }
        Ok(Self {
            name,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn from_parts(
        name: impl Into<String>,
        phones: Vec<PhoneNumber>,
        birthday: Option<Birthday>,
    ) -> Result<Self, CoreError> {
        let mut record = Self::new(name)?;
        record.phones = phones;
        record.birthday = birthday;
        Ok(record)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn add_phone(&mut self, raw: &str) -> Result<(), CoreError> {
        let phone = PhoneNumber::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    pub fn remove_phone(&mut self, value: &str) -> Result<(), CoreError> {
        let index = self.phone_index(value)?;
        self.phones.remove(index);
        Ok(())
    }

    pub fn edit_phone(&mut self, old_value: &str, new_value: &str) -> Result<(), CoreError> {
        let index = self.phone_index(old_value)?;
        self.phones[index] = PhoneNumber::new(new_value)?;
        Ok(())
    }

    pub fn find_phone(&self, value: &str) -> Result<&PhoneNumber, CoreError> {
        let index = self.phone_index(value)?;
        Ok(&self.phones[index])
    }

    pub fn add_birthday(&mut self, raw: &str) -> Result<(), CoreError> {
        self.birthday = Some(Birthday::parse(raw)?);
        Ok(())
    }

    fn phone_index(&self, value: &str) -> Result<usize, CoreError> {
        self.phones
            .iter()
            .position(|phone| phone.as_str() == value)
            .ok_or_else(|| CoreError::PhoneNotFound {
                name: self.name.clone(),
                phone: value.to_string(),
            })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)
    }
}

#[cfg(test)]
mod tests {
    use super::Record;
    use crate::error::{CoreError, CoreErrorKind};

    fn phones(record: &Record) -> Vec<&str> {
        record.phones().iter().map(|p| p.as_str()).collect()
    }

    #[test]
    fn record_requires_name() {
        assert_eq!(Record::new("  ").unwrap_err(), CoreError::EmptyName);
    }

    #[test]
    fn add_phone_keeps_duplicates() {
        let mut record = Record::new("Ada").unwrap();
        record.add_phone("1111111111").unwrap();
        record.add_phone("1111111111").unwrap();
        assert_eq!(phones(&record), vec!["1111111111", "1111111111"]);
    }

    #[test]
    fn add_phone_rejects_invalid_and_leaves_list() {
        let mut record = Record::new("Ada").unwrap();
        let err = record.add_phone("123").unwrap_err();
        assert_eq!(err.kind(), CoreErrorKind::Validation);
        assert!(record.phones().is_empty());
    }

    #[test]
    fn edit_phone_replaces_in_place() {
        let mut record = Record::new("Ada").unwrap();
        record.add_phone("1111111111").unwrap();
        record.edit_phone("1111111111", "2222222222").unwrap();
        assert_eq!(phones(&record), vec!["2222222222"]);
        assert!(record.find_phone("1111111111").is_err());
    }

    #[test]
    fn edit_phone_only_touches_first_match() {
        let mut record = Record::new("Ada").unwrap();
        record.add_phone("3333333333").unwrap();
        record.add_phone("1111111111").unwrap();
        record.add_phone("1111111111").unwrap();
        record.edit_phone("1111111111", "2222222222").unwrap();
        assert_eq!(
            phones(&record),
            vec!["3333333333", "2222222222", "1111111111"]
        );
    }

    #[test]
    fn edit_phone_reports_missing_before_validation() {
        let mut record = Record::new("Ada").unwrap();
        record.add_phone("1111111111").unwrap();
        let err = record.edit_phone("9999999999", "bad").unwrap_err();
        assert_eq!(err.kind(), CoreErrorKind::NotFound);
        let err = record.edit_phone("1111111111", "bad").unwrap_err();
        assert_eq!(err.kind(), CoreErrorKind::Validation);
        assert_eq!(phones(&record), vec!["1111111111"]);
    }

    #[test]
    fn remove_phone_missing_leaves_list_unchanged() {
        let mut record = Record::new("Ada").unwrap();
        record.add_phone("1111111111").unwrap();
        let err = record.remove_phone("2222222222").unwrap_err();
        assert_eq!(
            err,
            CoreError::PhoneNotFound {
                name: "Ada".to_string(),
                phone: "2222222222".to_string(),
            }
        );
        assert_eq!(phones(&record), vec!["1111111111"]);
    }

    #[test]
    fn remove_phone_drops_first_match() {
        let mut record = Record::new("Ada").unwrap();
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_phone("1111111111").unwrap();
        record.remove_phone("1111111111").unwrap();
        assert_eq!(phones(&record), vec!["2222222222", "1111111111"]);
    }

    #[test]
    fn find_phone_returns_stored_value() {
        let mut record = Record::new("Ada").unwrap();
        record.add_phone("1234567890").unwrap();
        assert_eq!(record.find_phone("1234567890").unwrap().as_str(), "1234567890");
    }

    #[test]
    fn add_birthday_overwrites() {
        let mut record = Record::new("Ada").unwrap();
        record.add_birthday("10.12.1815").unwrap();
        record.add_birthday("11.12.1815").unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "11.12.1815");
        assert!(record.add_birthday("31.02.1815").is_err());
        assert_eq!(record.birthday().unwrap().to_string(), "11.12.1815");
    }

    #[test]
    fn display_joins_phones() {
        let mut record = Record::new("Ada").unwrap();
        assert_eq!(record.to_string(), "Contact name: Ada, phones: ");
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: Ada, phones: 1111111111; 2222222222"
        );
    }
}
