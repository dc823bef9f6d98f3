//! Watchlist domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// A fund the user follows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteFund {
    pub code: String,
    pub name: String,
    pub category_label: String,
    pub added_at: NaiveDateTime,
}

/// Input model for following a fund
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFavoriteFund {
    pub code: String,
    pub name: String,
    pub category_label: String,
}

impl NewFavoriteFund {
    pub fn validate(&self) -> Result<()> {
        validate_fund_code(&self.code)
    }
}

/// A named group of funds, e.g. a planned portfolio.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FundCollection {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
    /// Member fund codes in insertion order
    pub fund_codes: Vec<String>,
}

/// Fund codes are short alphanumeric identifiers such as "110022".
pub fn validate_fund_code(code: &str) -> Result<()> {
    if code.trim().is_empty() {
        return Err(ValidationError::MissingField("code".to_string()).into());
    }
    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::InvalidInput(format!("invalid fund code '{}'", code)).into());
    }
    Ok(())
}

pub fn validate_collection_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::MissingField("name".to_string()).into());
    }
    Ok(())
}
