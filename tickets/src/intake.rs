//! New-device intake: form validation, tracking-code generation, and store insert.
//!
//! DESIGN
//! ======
//! The dialog edits an `IntakeDraft` in place; nothing touches the store
//! until `submit`, which validates, assigns the next free tracking code for
//! the day, and appends the ticket. A failed submit leaves the store as-is.

use time::{Date, Duration, PrimitiveDateTime};

use crate::status;
use crate::store::{StoreError, TicketStore};
use crate::ticket::Ticket;

#[cfg(test)]
#[path = "intake_test.rs"]
mod tests;

/// Days added to the intake date for the first completion estimate.
pub const DEFAULT_ETA_DAYS: i64 = 3;

const ID_PREFIX: &str = "TRK";

/// Required intake fields, in form order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntakeField {
    Customer,
    Phone,
    Brand,
    Model,
}

impl IntakeField {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Customer => "Müşteri Adı",
            Self::Phone => "Telefon",
            Self::Brand => "Marka",
            Self::Model => "Model",
        }
    }
}

/// Error returned by [`IntakeDraft::validate`] and [`submit`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    /// One or more required fields are blank.
    #[error("missing required fields: {}", field_labels(.0))]
    MissingFields(Vec<IntakeField>),
    /// The generated ticket could not be stored.
    #[error(transparent)]
    Store(#[from] StoreError),
}

fn field_labels(fields: &[IntakeField]) -> String {
    fields.iter().map(|f| f.label()).collect::<Vec<_>>().join(", ")
}

/// Transient values of the intake form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IntakeDraft {
    pub customer: String,
    pub phone: String,
    pub brand: String,
    pub model: String,
    pub serial: String,
    pub issue: String,
    pub technician: Option<String>,
    /// Starting stage; `None` means the registry's first stage.
    pub status: Option<String>,
}

impl IntakeDraft {
    /// Required fields that are blank after trimming, in form order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<IntakeField> {
        [
            (IntakeField::Customer, &self.customer),
            (IntakeField::Phone, &self.phone),
            (IntakeField::Brand, &self.brand),
            (IntakeField::Model, &self.model),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// # Errors
    ///
    /// Returns [`IntakeError::MissingFields`] listing every blank required field.
    pub fn validate(&self) -> Result<(), IntakeError> {
        let missing = self.missing_fields();
        if missing.is_empty() { Ok(()) } else { Err(IntakeError::MissingFields(missing)) }
    }

    fn into_ticket(self, id: String, now: PrimitiveDateTime) -> Ticket {
        Ticket {
            id,
            customer: self.customer.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            brand: self.brand.trim().to_owned(),
            model: self.model.trim().to_owned(),
            serial: self.serial.trim().to_owned(),
            issue: self.issue.trim().to_owned(),
            status: self.status.unwrap_or_else(|| status::initial().key.to_owned()),
            assigned: self.technician.unwrap_or_default(),
            eta: now.date().saturating_add(Duration::days(DEFAULT_ETA_DAYS)),
            created_at: now,
            cost: 0,
        }
    }
}

/// Next unused tracking code for `day`, formatted `TRK-YYMMDD-NNN`.
///
/// The counter continues after the highest one already issued for that day.
/// A saturated counter yields the same code again, which `submit` then
/// rejects as a duplicate.
#[must_use]
pub fn next_tracking_id(store: &TicketStore, day: Date) -> String {
    let prefix = format!(
        "{ID_PREFIX}-{:02}{:02}{:02}-",
        day.year().rem_euclid(100),
        u8::from(day.month()),
        day.day()
    );
    let last = store
        .list()
        .iter()
        .filter_map(|t| t.id.strip_prefix(&prefix))
        .filter_map(|seq| seq.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    format!("{prefix}{:03}", last.saturating_add(1))
}

/// Validate `draft`, turn it into a ticket, and append it to `store`.
///
/// Returns the new tracking code.
///
/// # Errors
///
/// Returns [`IntakeError::MissingFields`] when required fields are blank, or
/// [`IntakeError::Store`] if the generated id collides.
pub fn submit(store: &mut TicketStore, draft: IntakeDraft, now: PrimitiveDateTime) -> Result<String, IntakeError> {
    draft.validate()?;
    let id = next_tracking_id(store, now.date());
    store.insert(draft.into_ticket(id.clone(), now))?;
    Ok(id)
}
