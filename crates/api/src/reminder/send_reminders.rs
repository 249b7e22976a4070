use crate::reminder::message::render_reminder;
use crate::shared::usecase::UseCase;
use plazo_domain::{Transaction, ID};
use plazo_infra::{Delivery, PlazoContext};
use std::collections::HashMap;
use tracing::{error, info};

/// One dispatch sweep: collects the reminders due today, renders and
/// delivers each one, and retires the delivered ones. Delivery is
/// at-least-once: only the stored `sent` flag de-duplicates across sweeps
/// and restarts.
#[derive(Debug)]
pub struct SendRemindersUseCase {}

#[derive(Debug)]
pub enum UseCaseError {}

#[derive(Debug, PartialEq)]
pub struct SweepReport {
    pub due_count: usize,
    pub sent_count: usize,
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendRemindersUseCase {
    type Response = SweepReport;

    type Error = UseCaseError;

    const NAME: &'static str = "SendReminders";

    async fn execute(&mut self, ctx: &PlazoContext) -> Result<Self::Response, Self::Error> {
        let today = ctx.sys.today(&ctx.config.timezone);
        let due = ctx.repos.reminders.find_due(today).await;
        let due_count = due.len();

        let transaction_ids: Vec<ID> = due.iter().map(|r| r.transaction_id.clone()).collect();
        let transaction_lookup: HashMap<String, Transaction> = ctx
            .repos
            .transactions
            .find_many(&transaction_ids)
            .await
            .unwrap_or_default()
            .into_iter()
            .map(|t| (t.id.as_string(), t))
            .collect();

        let mut sent_count = 0;
        for reminder in due {
            let transaction = match transaction_lookup.get(&reminder.transaction_id.as_string()) {
                Some(transaction) => transaction,
                None => continue,
            };
            let type_name = match ctx
                .repos
                .transaction_types
                .find(&transaction.transaction_type_id)
                .await
            {
                Some(transaction_type) => transaction_type.name,
                None => "Transaction".to_string(),
            };

            let text = render_reminder(&reminder, transaction, &type_name);

            let mut delivered = false;
            for recipient in &reminder.recipients {
                if ctx.transport.send(*recipient, &text).await == Delivery::Delivered {
                    delivered = true;
                }
            }
            if !delivered {
                // Stays unsent, the next sweep retries
                continue;
            }

            match ctx
                .repos
                .reminders
                .mark_sent(&reminder.id, ctx.sys.get_timestamp_millis())
                .await
            {
                Ok(_) => sent_count += 1,
                Err(e) => {
                    // Delivered but not retired, so the next sweep may
                    // deliver this reminder a second time
                    error!("Unable to mark reminder {} as sent: {:?}", reminder.id, e);
                }
            }
        }

        info!(
            "Reminder sweep delivered {} of {} due reminders",
            sent_count, due_count
        );
        Ok(SweepReport {
            due_count,
            sent_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::usecase::execute;
    use crate::transaction::create_transaction::CreateTransactionUseCase;
    use crate::transaction::update_transaction::UpdateTransactionUseCase;
    use chrono::NaiveDate;
    use plazo_domain::{
        Priority, Reminder, TransactionStatus, TransactionType,
    };
    use plazo_infra::{IReminderRepo, ISys, ITransport};
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    struct StaticTimeSys {
        millis: i64,
    }
    impl ISys for StaticTimeSys {
        fn get_timestamp_millis(&self) -> i64 {
            self.millis
        }
    }

    // 2025-01-10 12:00:00 UTC
    const JAN_10: i64 = 1736510400000;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Transport double: replays a scripted list of outcomes and records
    /// every attempted send. An exhausted script keeps delivering.
    struct ScriptedTransport {
        script: Mutex<VecDeque<Delivery>>,
        sent: Mutex<Vec<(i64, String)>>,
    }

    impl ScriptedTransport {
        fn deliver_all() -> Arc<Self> {
            Self::with_script(Vec::new())
        }

        fn with_script(outcomes: Vec<Delivery>) -> Arc<Self> {
            Arc::new(Self {
                script: Mutex::new(outcomes.into()),
                sent: Mutex::new(Vec::new()),
            })
        }

        fn attempts(&self) -> Vec<(i64, String)> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl ITransport for ScriptedTransport {
        async fn send(&self, recipient: i64, message: &str) -> Delivery {
            self.sent
                .lock()
                .unwrap()
                .push((recipient, message.to_string()));
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Delivery::Delivered)
        }
    }

    /// Store double for the crash between send and mark: delivery succeeds
    /// but retiring the reminder fails.
    struct FailingMarkReminderRepo {
        inner: Arc<dyn IReminderRepo>,
    }

    #[async_trait::async_trait]
    impl IReminderRepo for FailingMarkReminderRepo {
        async fn find_due(&self, today: NaiveDate) -> Vec<Reminder> {
            self.inner.find_due(today).await
        }

        async fn mark_sent(&self, _reminder_id: &plazo_domain::ID, _sent_at: i64) -> anyhow::Result<bool> {
            Err(anyhow::anyhow!("Lost connection to the store"))
        }

        async fn find_by_transaction(&self, transaction_id: &plazo_domain::ID) -> Vec<Reminder> {
            self.inner.find_by_transaction(transaction_id).await
        }
    }

    struct TestContext {
        ctx: PlazoContext,
        transport: Arc<ScriptedTransport>,
    }

    async fn setup(transport: Arc<ScriptedTransport>) -> TestContext {
        let mut ctx = PlazoContext::create_inmemory();
        ctx.sys = Arc::new(StaticTimeSys { millis: JAN_10 });
        ctx.transport = transport.clone();

        TestContext { ctx, transport }
    }

    async fn create_transaction(
        ctx: &PlazoContext,
        end_date: NaiveDate,
        responsible_id: Option<i64>,
    ) -> Transaction {
        let transaction_type = TransactionType::new("Vehicle documents", &["plate_number"]);
        ctx.repos
            .transaction_types
            .insert(&transaction_type)
            .await
            .unwrap();

        let mut usecase = CreateTransactionUseCase {
            transaction_type_id: transaction_type.id.clone(),
            owner_id: 42,
            responsible_id,
            title: "MOT certificate".into(),
            description: String::new(),
            payload: Default::default(),
            start_date: None,
            end_date: Some(end_date),
            priority: Priority::High,
        };
        usecase.execute(ctx).await.unwrap()
    }

    async fn run_tick(ctx: &PlazoContext) -> SweepReport {
        execute(SendRemindersUseCase {}, ctx).await.unwrap()
    }

    #[actix_web::test]
    async fn delivers_a_reminder_due_today_and_retires_it() {
        let TestContext { ctx, transport } = setup(ScriptedTransport::deliver_all()).await;
        let transaction = create_transaction(&ctx, date(2025, 1, 10), None).await;

        let reminders = ctx
            .repos
            .reminders
            .find_by_transaction(&transaction.id)
            .await;
        assert_eq!(reminders.len(), 1);
        assert!(!reminders[0].sent);

        let report = run_tick(&ctx).await;
        assert_eq!(
            report,
            SweepReport {
                due_count: 1,
                sent_count: 1
            }
        );

        let attempts = transport.attempts();
        assert_eq!(attempts.len(), 1);
        assert_eq!(attempts[0].0, 42);
        assert!(attempts[0].1.contains("ends today"));

        let reminders = ctx
            .repos
            .reminders
            .find_by_transaction(&transaction.id)
            .await;
        assert!(reminders[0].sent);
        assert_eq!(reminders[0].sent_at, Some(JAN_10));
    }

    #[actix_web::test]
    async fn a_sent_reminder_is_never_redispatched() {
        let TestContext { ctx, transport } = setup(ScriptedTransport::deliver_all()).await;
        create_transaction(&ctx, date(2025, 1, 10), None).await;

        run_tick(&ctx).await;
        let report = run_tick(&ctx).await;

        assert_eq!(
            report,
            SweepReport {
                due_count: 0,
                sent_count: 0
            }
        );
        assert_eq!(transport.attempts().len(), 1);
    }

    #[actix_web::test]
    async fn cancelling_before_the_tick_suppresses_dispatch() {
        let TestContext { ctx, transport } = setup(ScriptedTransport::deliver_all()).await;
        let transaction = create_transaction(&ctx, date(2025, 1, 10), None).await;

        let mut cancel = UpdateTransactionUseCase {
            transaction_id: transaction.id.clone(),
            title: None,
            description: None,
            end_date: None,
            priority: None,
            status: Some(TransactionStatus::Cancelled),
            responsible_id: None,
        };
        cancel.execute(&ctx).await.unwrap();

        let report = run_tick(&ctx).await;
        assert_eq!(report.sent_count, 0);
        assert!(transport.attempts().is_empty());

        // The reminder is still there, merely suppressed
        let reminders = ctx
            .repos
            .reminders
            .find_by_transaction(&transaction.id)
            .await;
        assert!(!reminders[0].sent);
    }

    #[actix_web::test]
    async fn soft_deleting_suppresses_dispatch() {
        let TestContext { ctx, transport } = setup(ScriptedTransport::deliver_all()).await;
        let transaction = create_transaction(&ctx, date(2025, 1, 10), None).await;

        ctx.repos.transactions.delete(&transaction.id).await.unwrap();

        let report = run_tick(&ctx).await;
        assert_eq!(report.due_count, 0);
        assert!(transport.attempts().is_empty());
    }

    #[actix_web::test]
    async fn transient_failure_is_retried_on_the_next_tick() {
        let transport =
            ScriptedTransport::with_script(vec![Delivery::TransientFailure, Delivery::Delivered]);
        let TestContext { ctx, transport } = setup(transport).await;
        let transaction = create_transaction(&ctx, date(2025, 1, 10), None).await;

        let report = run_tick(&ctx).await;
        assert_eq!(report.sent_count, 0);
        let reminders = ctx
            .repos
            .reminders
            .find_by_transaction(&transaction.id)
            .await;
        assert!(!reminders[0].sent);

        let report = run_tick(&ctx).await;
        assert_eq!(report.sent_count, 1);
        assert_eq!(transport.attempts().len(), 2);
        let reminders = ctx
            .repos
            .reminders
            .find_by_transaction(&transaction.id)
            .await;
        assert!(reminders[0].sent);
    }

    #[actix_web::test]
    async fn permanent_failure_is_not_demoted_to_delivered() {
        let transport = ScriptedTransport::with_script(vec![Delivery::PermanentFailure]);
        let TestContext { ctx, transport } = setup(transport).await;
        let transaction = create_transaction(&ctx, date(2025, 1, 10), None).await;

        let report = run_tick(&ctx).await;

        assert_eq!(report.sent_count, 0);
        assert_eq!(transport.attempts().len(), 1);
        let reminders = ctx
            .repos
            .reminders
            .find_by_transaction(&transaction.id)
            .await;
        assert!(!reminders[0].sent);
    }

    #[actix_web::test]
    async fn one_delivered_recipient_is_enough_to_retire() {
        // Owner delivery fails for good, the responsible user gets through
        let transport =
            ScriptedTransport::with_script(vec![Delivery::PermanentFailure, Delivery::Delivered]);
        let TestContext { ctx, transport } = setup(transport).await;
        let transaction = create_transaction(&ctx, date(2025, 1, 10), Some(77)).await;

        let report = run_tick(&ctx).await;

        assert_eq!(report.sent_count, 1);
        let attempts = transport.attempts();
        assert_eq!(attempts.len(), 2);
        assert_eq!(attempts[0].0, 42);
        assert_eq!(attempts[1].0, 77);
        let reminders = ctx
            .repos
            .reminders
            .find_by_transaction(&transaction.id)
            .await;
        assert!(reminders[0].sent);
    }

    #[actix_web::test]
    async fn crash_between_send_and_mark_delivers_at_least_once() {
        let TestContext { ctx, transport } = setup(ScriptedTransport::deliver_all()).await;
        create_transaction(&ctx, date(2025, 1, 10), None).await;

        // First sweep: delivery succeeds but the store loses the mark
        let reminder_repo = ctx.repos.reminders.clone();
        let mut failing_ctx = ctx.clone();
        failing_ctx.repos.reminders = Arc::new(FailingMarkReminderRepo {
            inner: reminder_repo,
        });
        let report = run_tick(&failing_ctx).await;
        assert_eq!(report.sent_count, 0);
        assert_eq!(transport.attempts().len(), 1);

        // Next sweep against the healthy store delivers a second time and
        // finally retires the reminder
        let report = run_tick(&ctx).await;
        assert_eq!(report.sent_count, 1);
        assert_eq!(transport.attempts().len(), 2);
    }
}
