use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::interval_set::IntervalError;

pub type ResourceId = u64;
pub type RoleId = u64;
pub type RoleName = String;

/// A contiguous, inclusive range of dates.
///
/// Serializes as a `DaysOff` record; deserializing rejects reversed ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "DaysOff", into = "DaysOff")]
pub struct DateInterval {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateInterval {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, IntervalError> {
        if start > end {
            return Err(IntervalError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn single_day(date: NaiveDate) -> Self {
        Self { start: date, end: date }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Distance between the first and last day, zero for a single day.
    pub fn length(&self) -> i64 {
        self.end.signed_duration_since(self.start).num_days()
    }

    pub fn num_days(&self) -> i64 {
        self.length() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// True when the two ranges share a day or one ends the day before the other starts.
    pub fn touches(&self, other: &Self) -> bool {
        fn reaches(end: NaiveDate, start: NaiveDate) -> bool {
            match end.checked_add_signed(Duration::days(1)) {
                Some(next_day) => start <= next_day,
                None => true,
            }
        }
        reaches(self.end, other.start) && reaches(other.end, self.start)
    }

    pub fn span(&self, other: &Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl std::fmt::Display for DateInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

impl TryFrom<DaysOff> for DateInterval {
    type Error = IntervalError;

    fn try_from(days_off: DaysOff) -> Result<Self, Self::Error> {
        DateInterval::new(days_off.start, days_off.finish)
    }
}

impl TryFrom<&DaysOff> for DateInterval {
    type Error = IntervalError;

    fn try_from(days_off: &DaysOff) -> Result<Self, Self::Error> {
        DateInterval::try_from(*days_off)
    }
}

/// One persisted days-off record of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaysOff {
    pub start: NaiveDate,
    pub finish: NaiveDate,
}

impl DaysOff {
    pub fn new(start: NaiveDate, finish: NaiveDate) -> Self {
        Self { start, finish }
    }
}

impl From<DateInterval> for DaysOff {
    fn from(interval: DateInterval) -> Self {
        Self { start: interval.start(), finish: interval.end() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub name: RoleName,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HumanResource {
    /// `None` until the resource has been added to the project.
    pub id: Option<ResourceId>,
    pub name: String,
    pub phone: String,
    pub mail: String,
    pub role: Option<Role>,
    days_off: Vec<DaysOff>,
}

impl HumanResource {
    pub fn new(id: Option<ResourceId>, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            phone: String::new(),
            mail: String::new(),
            role: None,
            days_off: Vec::new(),
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    pub fn days_off(&self) -> &[DaysOff] {
        &self.days_off
    }

    pub fn clear_days_off(&mut self) {
        self.days_off.clear();
    }

    pub fn add_days_off(&mut self, days_off: DaysOff) {
        self.days_off.push(days_off);
    }

    pub fn is_day_off(&self, date: NaiveDate) -> bool {
        self.days_off.iter().any(|d| d.start <= date && date <= d.finish)
    }
}

/// The roles a resource may currently be given, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleRegistry {
    enabled_roles: Vec<Role>,
    next_role_id: RoleId,
}

impl RoleRegistry {
    pub fn new() -> Self {
        Self {
            enabled_roles: Vec::new(),
            next_role_id: 1,
        }
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<RoleName>,
    {
        let mut registry = Self::new();
        for name in names {
            registry.enable_role(name);
        }
        registry
    }

    /// Enables a role by name, returning the existing entry if one is already enabled.
    pub fn enable_role(&mut self, name: impl Into<RoleName>) -> &Role {
        let name = name.into();
        if let Some(pos) = self.enabled_roles.iter().position(|r| r.name == name) {
            return &self.enabled_roles[pos];
        }
        let id = self.next_role_id;
        self.next_role_id = id + 1;
        self.enabled_roles.push(Role { id, name });
        &self.enabled_roles[self.enabled_roles.len() - 1]
    }

    pub fn enabled_roles(&self) -> &[Role] {
        &self.enabled_roles
    }

    pub fn role_names(&self) -> Vec<RoleName> {
        self.enabled_roles.iter().map(|r| r.name.clone()).collect()
    }

    pub fn find_role(&self, name: &str) -> Option<&Role> {
        self.enabled_roles.iter().find(|r| r.name == name)
    }
}

impl Default for RoleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
