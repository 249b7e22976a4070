use crate::shared::entity::{Entity, ID};
use crate::transaction::Transaction;
use chrono::{Duration, NaiveDate};

/// Days before a `Transaction`s end date at which reminders fire
pub const THRESHOLD_DAYS: [i64; 5] = [30, 15, 7, 3, 0];

/// A `Reminder` is a scheduled message tied to one `Transaction` at one
/// threshold before its end date. Its firing date is always
/// `end_date - days_before` in civil days.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: ID,
    /// The `Transaction` this `Reminder` is associated with
    pub transaction_id: ID,
    pub days_before: i64,
    /// Users to notify when the reminder fires
    pub recipients: Vec<i64>,
    /// Template message chosen at planning time
    pub message: String,
    /// Once true the reminder is never dispatched again
    pub sent: bool,
    pub sent_at: Option<i64>,
    pub created: i64,
}

impl Reminder {
    /// Materialises the reminder schedule for a transaction. One reminder is
    /// created per threshold whose firing date is today or later; thresholds
    /// already in the past are dropped, never pre-sent.
    pub fn plan(transaction: &Transaction, today: NaiveDate, now: i64) -> Vec<Reminder> {
        let end_date = match transaction.end_date {
            Some(end_date) => end_date,
            None => return Vec::new(),
        };

        THRESHOLD_DAYS
            .iter()
            .filter(|&&days_before| end_date - Duration::days(days_before) >= today)
            .map(|&days_before| Reminder {
                id: Default::default(),
                transaction_id: transaction.id.clone(),
                days_before,
                recipients: transaction.recipients(),
                message: if days_before == 0 {
                    "ends today".to_string()
                } else {
                    format!("ends in {} days", days_before)
                },
                sent: false,
                sent_at: None,
                created: now,
            })
            .collect()
    }

    /// The civil date on which this reminder becomes due
    pub fn fires_on(&self, end_date: NaiveDate) -> NaiveDate {
        end_date - Duration::days(self.days_before)
    }
}

impl Entity for Reminder {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::{Priority, TransactionStatus};

    fn transaction_factory(end_date: Option<NaiveDate>) -> Transaction {
        Transaction {
            id: Default::default(),
            transaction_type_id: Default::default(),
            owner_id: 100,
            responsible_id: None,
            title: "Residence permit".into(),
            description: String::new(),
            payload: Default::default(),
            start_date: date(2025, 1, 1),
            end_date,
            priority: Priority::Normal,
            status: TransactionStatus::Active,
            deleted: false,
            created: 0,
            updated: 0,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn plans_every_threshold_for_a_distant_end_date() {
        let transaction = transaction_factory(Some(date(2025, 3, 1)));
        let reminders = Reminder::plan(&transaction, date(2025, 1, 10), 0);

        assert_eq!(reminders.len(), THRESHOLD_DAYS.len());
        let days: Vec<_> = reminders.iter().map(|r| r.days_before).collect();
        assert_eq!(days, vec![30, 15, 7, 3, 0]);
        for r in &reminders {
            assert!(!r.sent);
            assert!(r.sent_at.is_none());
            assert_eq!(r.transaction_id, transaction.id);
            assert_eq!(r.recipients, vec![100]);
        }
    }

    #[test]
    fn drops_thresholds_already_in_the_past() {
        // end date in five days: the 30, 15 and 7 day thresholds are history
        let transaction = transaction_factory(Some(date(2025, 1, 15)));
        let reminders = Reminder::plan(&transaction, date(2025, 1, 10), 0);

        let days: Vec<_> = reminders.iter().map(|r| r.days_before).collect();
        assert_eq!(days, vec![3, 0]);
    }

    #[test]
    fn end_date_today_plans_exactly_the_zero_threshold() {
        let transaction = transaction_factory(Some(date(2025, 1, 10)));
        let reminders = Reminder::plan(&transaction, date(2025, 1, 10), 0);

        assert_eq!(reminders.len(), 1);
        assert_eq!(reminders[0].days_before, 0);
        assert_eq!(reminders[0].message, "ends today");
        assert_eq!(reminders[0].fires_on(date(2025, 1, 10)), date(2025, 1, 10));
    }

    #[test]
    fn end_date_in_the_past_plans_nothing() {
        let transaction = transaction_factory(Some(date(2025, 1, 9)));
        let reminders = Reminder::plan(&transaction, date(2025, 1, 10), 0);
        assert!(reminders.is_empty());
    }

    #[test]
    fn missing_end_date_plans_nothing() {
        let transaction = transaction_factory(None);
        let reminders = Reminder::plan(&transaction, date(2025, 1, 10), 0);
        assert!(reminders.is_empty());
    }

    #[test]
    fn recipients_include_distinct_responsible_user() {
        let mut transaction = transaction_factory(Some(date(2025, 2, 1)));
        transaction.responsible_id = Some(200);

        let reminders = Reminder::plan(&transaction, date(2025, 1, 10), 0);
        assert!(!reminders.is_empty());
        for r in reminders {
            assert_eq!(r.recipients, vec![100, 200]);
        }
    }

    #[test]
    fn threshold_messages_name_the_day_count() {
        let transaction = transaction_factory(Some(date(2025, 3, 1)));
        let reminders = Reminder::plan(&transaction, date(2025, 1, 10), 0);

        assert_eq!(reminders[0].message, "ends in 30 days");
        assert_eq!(reminders[4].message, "ends today");
    }
}
