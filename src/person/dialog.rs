use thiserror::Error;
use tracing::{debug, info, warn};

use super::config::EditorConfig;
use super::commands::UndoManager;
use super::interval_set::{IntervalError, IntervalSetModel};
use super::options::{OptionError, OptionGroup};
use super::types::{DateInterval, DaysOff, HumanResource, Role, RoleRegistry};

pub const RESOURCE_EDIT_DESCRIPTION: &str = "Resource properties changed";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DialogError {
    #[error(transparent)]
    Interval(#[from] IntervalError),

    #[error(transparent)]
    Option(#[from] OptionError),

    #[error("The person dialog has already been closed")]
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DialogState {
    Open,
    Confirmed,
    Cancelled,
}

/// Everything the dialog writes back into the resource on Ok.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ResourceChanges {
    name: String,
    phone: String,
    mail: String,
    role: Option<Role>,
    days_off: Vec<DaysOff>,
}

impl ResourceChanges {
    fn apply_to(&self, person: &mut HumanResource) {
        person.name = self.name.clone();
        person.mail = self.mail.clone();
        person.phone = self.phone.clone();
        if let Some(role) = &self.role {
            person.role = Some(role.clone());
        }
        person.clear_days_off();
        for days_off in &self.days_off {
            person.add_days_off(*days_off);
        }
    }
}

/// One editing session over a person's properties and days off.
///
/// Nothing touches the resource until `ok`; `cancel` throws the session's
/// edits away. Either call closes the session.
#[derive(Debug, Clone)]
pub struct PersonDialog {
    fields: OptionGroup,
    days_off: IntervalSetModel,
    loaded_days_off: IntervalSetModel,
    roles: RoleRegistry,
    state: DialogState,
}

impl PersonDialog {
    /// Opens a session on `person`. The enabled roles come from `config`.
    pub fn open(person: &HumanResource, config: &EditorConfig) -> Result<Self, DialogError> {
        let roles = config.role_registry();
        let mut fields = OptionGroup::new(roles.role_names());
        fields.lock();
        fields.name.set_value(&person.name)?;
        fields.phone.set_value(&person.phone)?;
        fields.mail.set_value(&person.mail)?;
        if let Some(role) = &person.role {
            // A role that has since been disabled just shows as unset.
            if let Err(e) = fields.role.set_value(&role.name) {
                warn!("{e}");
            }
        }
        fields.commit();
        fields.lock();

        let days_off = IntervalSetModel::from_days_off(person.days_off(), config.max_interval_length)?;
        info!(person = %person.name, days_off = days_off.len(), "opened person dialog");

        Ok(Self {
            fields,
            loaded_days_off: days_off.clone(),
            days_off,
            roles,
            state: DialogState::Open,
        })
    }

    pub fn is_open(&self) -> bool {
        self.state == DialogState::Open
    }

    /// Whether the session ended with its changes applied.
    pub fn result(&self) -> bool {
        self.state == DialogState::Confirmed
    }

    /// Compares the form and the days off against what was loaded, so an
    /// edit that is later undone within the session, or an added interval
    /// that was already covered, does not count as a change.
    pub fn has_unsaved_changes(&self) -> bool {
        self.is_open() && (self.fields.is_changed() || self.days_off != self.loaded_days_off)
    }

    pub fn fields(&self) -> &OptionGroup {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> Result<&mut OptionGroup, DialogError> {
        self.ensure_open()?;
        Ok(&mut self.fields)
    }

    pub fn days_off(&self) -> &IntervalSetModel {
        &self.days_off
    }

    pub fn add_days_off(&mut self, interval: DateInterval) -> Result<(), DialogError> {
        self.ensure_open()?;
        Ok(self.days_off.add(interval)?)
    }

    pub fn remove_days_off(&mut self, interval: &DateInterval) -> Result<(), DialogError> {
        self.ensure_open()?;
        Ok(self.days_off.remove(interval)?)
    }

    /// Commits the form and writes it into `person`.
    ///
    /// Resources already in the project are changed through `undo_manager`
    /// so the whole edit can be reverted in one step.
    pub fn ok(&mut self, person: &mut HumanResource, undo_manager: &mut dyn UndoManager) -> Result<(), DialogError> {
        self.ensure_open()?;
        self.fields.commit();

        let role = self.fields.role.value().and_then(|name| self.roles.find_role(name)).cloned();
        let changes = ResourceChanges {
            name: self.fields.name.value().to_string(),
            phone: self.fields.phone.value().to_string(),
            mail: self.fields.mail.value().to_string(),
            role,
            days_off: self.days_off.to_days_off(),
        };
        debug!(?changes, "applying person changes");

        let mut apply = |p: &mut HumanResource| changes.apply_to(p);
        if person.is_new() {
            apply(person);
        } else {
            undo_manager.undoable_edit(RESOURCE_EDIT_DESCRIPTION, person, &mut apply);
        }

        self.loaded_days_off = self.days_off.clone();
        self.state = DialogState::Confirmed;
        info!(person = %person.name, "person dialog confirmed");
        Ok(())
    }

    pub fn cancel(&mut self) -> Result<(), DialogError> {
        self.ensure_open()?;
        self.fields.rollback();
        self.days_off = self.loaded_days_off.clone();
        self.state = DialogState::Cancelled;
        info!("person dialog cancelled");
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), DialogError> {
        if self.is_open() {
            Ok(())
        } else {
            Err(DialogError::Closed)
        }
    }
}
