//! 发布行程表单

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

/// 表单字段（按焦点顺序）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferField {
    From,
    To,
    Date,
    Time,
    Flexible,
    Seats,
    Notes,
    Submit,
}

impl OfferField {
    pub const ALL: [OfferField; 8] = [
        OfferField::From,
        OfferField::To,
        OfferField::Date,
        OfferField::Time,
        OfferField::Flexible,
        OfferField::Seats,
        OfferField::Notes,
        OfferField::Submit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            OfferField::From => "From",
            OfferField::To => "To",
            OfferField::Date => "Date (YYYY-MM-DD)",
            OfferField::Time => "Time (HH:MM)",
            OfferField::Flexible => "Flexible with time?",
            OfferField::Seats => "Available Seats",
            OfferField::Notes => "Notes",
            OfferField::Submit => "Submit Offer",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            OfferField::From => "e.g., Apartment Building",
            OfferField::To => "e.g., G Train Greenpoint, Trader Joe's",
            OfferField::Notes => "Add notes for the ride offer message, if needed.",
            _ => "",
        }
    }

    /// 可直接输入文本的字段
    pub fn is_text(self) -> bool {
        matches!(
            self,
            OfferField::From
                | OfferField::To
                | OfferField::Date
                | OfferField::Time
                | OfferField::Notes
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OfferError {
    #[error("'{0}' is required")]
    Missing(&'static str),
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    BadDate(String),
    #[error("invalid time '{0}', expected HH:MM")]
    BadTime(String),
}

/// 校验通过的行程
#[derive(Debug, Clone, PartialEq)]
pub struct RideOffer {
    pub from: String,
    pub to: String,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub flexible: bool,
    pub seats: u32,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OfferForm {
    pub from: String,
    pub to: String,
    pub date: String,
    pub time: String,
    pub flexible: bool,
    pub seats: u32,
    pub notes: String,
}

impl Default for OfferForm {
    fn default() -> Self {
        Self {
            from: String::new(),
            to: String::new(),
            date: String::new(),
            time: String::new(),
            flexible: false,
            seats: 1,
            notes: String::new(),
        }
    }
}

impl OfferForm {
    pub fn text(&self, field: OfferField) -> &str {
        match field {
            OfferField::From => &self.from,
            OfferField::To => &self.to,
            OfferField::Date => &self.date,
            OfferField::Time => &self.time,
            OfferField::Notes => &self.notes,
            _ => "",
        }
    }

    pub fn set_text(&mut self, field: OfferField, value: String) {
        match field {
            OfferField::From => self.from = value,
            OfferField::To => self.to = value,
            OfferField::Date => self.date = value,
            OfferField::Time => self.time = value,
            OfferField::Notes => self.notes = value,
            _ => {}
        }
    }

    pub fn toggle_flexible(&mut self) {
        self.flexible = !self.flexible;
    }

    pub fn add_seat(&mut self) {
        self.seats = self.seats.saturating_add(1);
    }

    /// 座位数最少为 1
    pub fn remove_seat(&mut self) {
        if self.seats > 1 {
            self.seats -= 1;
        }
    }

    pub fn validate(&self) -> Result<RideOffer, OfferError> {
        let from = self.from.trim();
        if from.is_empty() {
            return Err(OfferError::Missing("From"));
        }
        let to = self.to.trim();
        if to.is_empty() {
            return Err(OfferError::Missing("To"));
        }

        let date = match self.date.trim() {
            "" => None,
            s => Some(
                NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .map_err(|_| OfferError::BadDate(s.to_string()))?,
            ),
        };
        let time = match self.time.trim() {
            "" => None,
            s => Some(
                NaiveTime::parse_from_str(s, "%H:%M")
                    .map_err(|_| OfferError::BadTime(s.to_string()))?,
            ),
        };

        Ok(RideOffer {
            from: from.to_string(),
            to: to.to_string(),
            date,
            time,
            flexible: self.flexible,
            seats: self.seats,
            notes: self.notes.trim().to_string(),
        })
    }
}
