use core::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use billpad_core::{DomainError, InvoiceNumber};

use crate::profile::CompanyProfile;

/// Header field a user may edit. Nothing else in the header is editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderField {
    CustomerName,
    CustomerPhone,
}

impl FromStr for HeaderField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customerName" | "customer_name" | "name" => Ok(HeaderField::CustomerName),
            "customerPhone" | "customer_phone" | "phone" => Ok(HeaderField::CustomerPhone),
            other => Err(DomainError::validation(format!(
                "not an editable header field: {other}"
            ))),
        }
    }
}

/// Invoice header: customer details, stamped identity and shop constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceHeader {
    customer_name: String,
    customer_phone: String,
    invoice_number: InvoiceNumber,
    date: NaiveDate,
    notes: String,
    company: CompanyProfile,
}

impl InvoiceHeader {
    pub(crate) fn new(company: CompanyProfile, invoice_number: InvoiceNumber, date: NaiveDate) -> Self {
        Self {
            customer_name: String::new(),
            customer_phone: String::new(),
            invoice_number,
            date,
            notes: company.notes.clone(),
            company,
        }
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn customer_phone(&self) -> &str {
        &self.customer_phone
    }

    pub fn invoice_number(&self) -> &InvoiceNumber {
        &self.invoice_number
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// `YYYY-MM-DD`.
    pub fn date_iso(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn company(&self) -> &CompanyProfile {
        &self.company
    }

    pub(crate) fn with_field(&self, field: HeaderField, value: String) -> Self {
        let mut next = self.clone();
        match field {
            HeaderField::CustomerName => next.customer_name = value,
            HeaderField::CustomerPhone => next.customer_phone = value,
        }
        next
    }
}
