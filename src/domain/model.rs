use crate::utils::error::{Result, SubmitError};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Raw field values as captured from the form, before any normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub order_id: String,
    pub store_id: String,
    pub date: String,
    pub amount: String,
}

/// The wire payload. Serializes to exactly these four keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderData {
    pub order_id: String,
    pub store_id: String,
    pub date: String,
    pub amount: String,
}

impl OrderData {
    /// Build the payload from raw form fields, normalizing the date.
    /// Fails before any network activity if the date is unrecognizable.
    pub fn from_form(fields: FormFields) -> Result<Self> {
        let date = normalize_date(&fields.date)?;
        Ok(Self {
            order_id: fields.order_id,
            store_id: fields.store_id,
            date,
            amount: fields.amount,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    InProgress,
    Success,
    Failure,
}

impl StatusLevel {
    /// ANSI color for the console status line: blue / green / red.
    pub fn color(&self) -> &'static str {
        match self {
            StatusLevel::InProgress => "\x1b[34m",
            StatusLevel::Success => "\x1b[32m",
            StatusLevel::Failure => "\x1b[31m",
        }
    }
}

/// Reformat a raw date value to the calendar date `YYYY-MM-DD`.
///
/// Accepts plain ISO dates (no-op), RFC 3339 date-times and a few common
/// date shapes. Any time-of-day or zone component is discarded without
/// converting between zones.
pub fn normalize_date(raw: &str) -> Result<String> {
    let trimmed = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date.format("%Y-%m-%d").to_string());
    }

    // 含時區的日期時間：取其自身時區下的日曆日期，不做轉換
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(datetime.date_naive().format("%Y-%m-%d").to_string());
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(datetime.date().format("%Y-%m-%d").to_string());
        }
    }

    for format in ["%Y/%m/%d", "%m/%d/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date.format("%Y-%m-%d").to_string());
        }
    }

    Err(SubmitError::ValidationError {
        message: format!("Unrecognized date value: '{}'", raw),
    })
}
