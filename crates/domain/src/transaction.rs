use crate::shared::entity::{Entity, ID};
use crate::shared::payload::Payload;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Normal,
    High,
    Critical,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Normal => "\u{1F7E2}",
            Self::High => "\u{1F7E1}",
            Self::Critical => "\u{1F534}",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::Normal
    }
}

#[derive(Error, Debug)]
#[error("Invalid priority: {0}")]
pub struct InvalidPriorityError(String);

impl FromStr for Priority {
    type Err = InvalidPriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Self::Normal),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(InvalidPriorityError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Active,
    Completed,
    Cancelled,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl Default for TransactionStatus {
    fn default() -> Self {
        Self::Active
    }
}

#[derive(Error, Debug)]
#[error("Invalid transaction status: {0}")]
pub struct InvalidStatusError(String);

impl FromStr for TransactionStatus {
    type Err = InvalidStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(InvalidStatusError(s.to_string())),
        }
    }
}

/// A time-bounded administrative record. `end_date` is the scheduling anchor
/// for reminders; a transaction without one never produces any.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: ID,
    pub transaction_type_id: ID,
    pub owner_id: i64,
    pub responsible_id: Option<i64>,
    pub title: String,
    pub description: String,
    pub payload: Payload,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub priority: Priority,
    pub status: TransactionStatus,
    pub deleted: bool,
    pub created: i64,
    pub updated: i64,
}

impl Transaction {
    /// Users that receive the reminders of this transaction
    pub fn recipients(&self) -> Vec<i64> {
        let mut recipients = vec![self.owner_id];
        if let Some(responsible) = self.responsible_id {
            if responsible != self.owner_id {
                recipients.push(responsible);
            }
        }
        recipients
    }

    /// Whether pending reminders of this transaction may still be dispatched
    pub fn is_schedulable(&self) -> bool {
        self.status == TransactionStatus::Active && !self.deleted && self.end_date.is_some()
    }
}

impl Entity for Transaction {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_roundtrips_through_str() {
        for p in [Priority::Normal, Priority::High, Priority::Critical].iter() {
            assert_eq!(p.as_str().parse::<Priority>().unwrap(), *p);
        }
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn status_roundtrips_through_str() {
        for s in [
            TransactionStatus::Active,
            TransactionStatus::Completed,
            TransactionStatus::Cancelled,
        ]
        .iter()
        {
            assert_eq!(s.as_str().parse::<TransactionStatus>().unwrap(), *s);
        }
        assert!("done".parse::<TransactionStatus>().is_err());
    }

    #[test]
    fn responsible_user_is_a_recipient_when_distinct() {
        let mut transaction = Transaction {
            id: Default::default(),
            transaction_type_id: Default::default(),
            owner_id: 10,
            responsible_id: Some(20),
            title: "MOT".into(),
            description: String::new(),
            payload: Default::default(),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            end_date: None,
            priority: Default::default(),
            status: Default::default(),
            deleted: false,
            created: 0,
            updated: 0,
        };
        assert_eq!(transaction.recipients(), vec![10, 20]);

        transaction.responsible_id = Some(10);
        assert_eq!(transaction.recipients(), vec![10]);

        transaction.responsible_id = None;
        assert_eq!(transaction.recipients(), vec![10]);
    }
}
