use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    #[error("option '{0}' is not open for editing")]
    NotLocked(String),

    #[error("'{value}' is not an allowed value for option '{id}'")]
    UnknownValue { id: String, value: String },
}

/// A committed value plus the edit in progress, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Transactional<T> {
    committed: T,
    pending: Option<T>,
}

impl<T: Clone + PartialEq> Transactional<T> {
    fn new(value: T) -> Self {
        Self { committed: value, pending: None }
    }

    fn current(&self) -> &T {
        self.pending.as_ref().unwrap_or(&self.committed)
    }

    fn is_locked(&self) -> bool {
        self.pending.is_some()
    }

    fn lock(&mut self) {
        if self.pending.is_none() {
            self.pending = Some(self.committed.clone());
        }
    }

    fn set(&mut self, value: T) -> bool {
        match self.pending.as_mut() {
            Some(pending) => {
                *pending = value;
                true
            }
            None => false,
        }
    }

    fn commit(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.committed = pending;
        }
    }

    fn rollback(&mut self) {
        self.pending = None;
    }

    fn is_changed(&self) -> bool {
        self.pending.as_ref().is_some_and(|pending| *pending != self.committed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringOption {
    id: String,
    value: Transactional<String>,
}

impl StringOption {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            value: Transactional::new(String::new()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn value(&self) -> &str {
        self.value.current()
    }

    pub fn set_value(&mut self, value: &str) -> Result<(), OptionError> {
        if self.value.set(value.to_string()) {
            Ok(())
        } else {
            Err(OptionError::NotLocked(self.id.clone()))
        }
    }
}

/// A string option restricted to a fixed list of values. Starts out unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumerationOption {
    id: String,
    available_values: Vec<String>,
    value: Transactional<Option<String>>,
}

impl EnumerationOption {
    pub fn new(id: &str, available_values: Vec<String>) -> Self {
        Self {
            id: id.to_string(),
            available_values,
            value: Transactional::new(None),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn available_values(&self) -> &[String] {
        &self.available_values
    }

    pub fn value(&self) -> Option<&str> {
        self.value.current().as_deref()
    }

    pub fn set_value(&mut self, value: &str) -> Result<(), OptionError> {
        if !self.available_values.iter().any(|v| v == value) {
            return Err(OptionError::UnknownValue {
                id: self.id.clone(),
                value: value.to_string(),
            });
        }
        if self.value.set(Some(value.to_string())) {
            Ok(())
        } else {
            Err(OptionError::NotLocked(self.id.clone()))
        }
    }
}

/// The general properties of a person, edited together.
///
/// `lock` opens an edit on every field, `commit` keeps the edits and
/// `rollback` throws them away. Both close the edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionGroup {
    pub name: StringOption,
    pub phone: StringOption,
    pub mail: StringOption,
    pub role: EnumerationOption,
}

impl OptionGroup {
    pub fn new(role_names: Vec<String>) -> Self {
        Self {
            name: StringOption::new("name"),
            phone: StringOption::new("phone"),
            mail: StringOption::new("mail"),
            role: EnumerationOption::new("role", role_names),
        }
    }

    pub fn lock(&mut self) {
        self.name.value.lock();
        self.phone.value.lock();
        self.mail.value.lock();
        self.role.value.lock();
    }

    pub fn is_locked(&self) -> bool {
        self.name.value.is_locked()
    }

    pub fn commit(&mut self) {
        self.name.value.commit();
        self.phone.value.commit();
        self.mail.value.commit();
        self.role.value.commit();
    }

    pub fn rollback(&mut self) {
        self.name.value.rollback();
        self.phone.value.rollback();
        self.mail.value.rollback();
        self.role.value.rollback();
    }

    pub fn is_changed(&self) -> bool {
        self.name.value.is_changed()
            || self.phone.value.is_changed()
            || self.mail.value.is_changed()
            || self.role.value.is_changed()
    }
}
