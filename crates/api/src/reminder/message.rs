use plazo_domain::{Reminder, Transaction};

/// Renders the chat text for a due reminder. Pure string assembly: no I/O
/// and no hidden state.
///
/// The threshold set only contains 0 as its smallest member, but the
/// renderer still covers the "tomorrow" case so a configurable set does not
/// silently produce "ends in 1 days".
pub fn render_reminder(reminder: &Reminder, transaction: &Transaction, type_name: &str) -> String {
    let deadline_phrase = match reminder.days_before {
        0 => "ends today".to_string(),
        1 => "ends tomorrow".to_string(),
        days => format!("ends in {} days", days),
    };
    let end_date = transaction
        .end_date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    format!(
        "{} <b>{}</b> ({}) {}.\nDeadline: {}\nId: {}",
        transaction.priority.glyph(),
        transaction.title,
        type_name,
        deadline_phrase,
        end_date,
        transaction.id
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use plazo_domain::{Priority, TransactionStatus};

    fn transaction_factory(priority: Priority) -> Transaction {
        Transaction {
            id: Default::default(),
            transaction_type_id: Default::default(),
            owner_id: 1,
            responsible_id: None,
            title: "Lease agreement".into(),
            description: String::new(),
            payload: Default::default(),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            end_date: Some(NaiveDate::from_ymd_opt(2025, 1, 20).unwrap()),
            priority,
            status: TransactionStatus::Active,
            deleted: false,
            created: 0,
            updated: 0,
        }
    }

    fn reminder_factory(days_before: i64) -> Reminder {
        Reminder {
            id: Default::default(),
            transaction_id: Default::default(),
            days_before,
            recipients: vec![1],
            message: String::new(),
            sent: false,
            sent_at: None,
            created: 0,
        }
    }

    #[test]
    fn renders_the_three_deadline_phrases() {
        let transaction = transaction_factory(Priority::Normal);
        let today = render_reminder(&reminder_factory(0), &transaction, "Other");
        let tomorrow = render_reminder(&reminder_factory(1), &transaction, "Other");
        let next_week = render_reminder(&reminder_factory(7), &transaction, "Other");

        assert!(today.contains("ends today"));
        assert!(tomorrow.contains("ends tomorrow"));
        assert!(next_week.contains("ends in 7 days"));
    }

    #[test]
    fn embeds_title_type_deadline_and_id() {
        let transaction = transaction_factory(Priority::Normal);
        let text = render_reminder(&reminder_factory(3), &transaction, "Employment contract");

        assert!(text.contains("Lease agreement"));
        assert!(text.contains("Employment contract"));
        assert!(text.contains("2025-01-20"));
        assert!(text.contains(&transaction.id.as_string()));
    }

    #[test]
    fn priority_glyph_matches_the_priority() {
        for (priority, glyph) in [
            (Priority::Normal, "\u{1F7E2}"),
            (Priority::High, "\u{1F7E1}"),
            (Priority::Critical, "\u{1F534}"),
        ]
        .iter()
        {
            let transaction = transaction_factory(*priority);
            let text = render_reminder(&reminder_factory(0), &transaction, "Other");
            assert!(text.starts_with(glyph));
        }
    }
}
