use crate::reminder::send_reminders::SendRemindersUseCase;
use crate::shared::usecase::execute;
use actix_web::rt;
use plazo_infra::PlazoContext;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// Owns the lifecycle of the dispatch sweeper. `start` is idempotent while
/// running; `stop` is cooperative and observed within one second, also when
/// the sweeper is asleep between ticks. An exception in the loop body never
/// escapes: it is logged and the next tick is scheduled normally.
#[derive(Clone)]
pub struct ReminderScheduler {
    running: Arc<AtomicBool>,
}

impl ReminderScheduler {
    pub fn new() -> Self {
        Self {
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    pub fn start(&self, ctx: PlazoContext) {
        if self.running.swap(true, Ordering::SeqCst) {
            return;
        }

        let running = self.running.clone();
        rt::spawn(async move {
            let period = Duration::from_secs(ctx.config.tick_period_secs);
            info!("Reminder dispatcher started, sweeping every {:?}", period);

            while running.load(Ordering::SeqCst) {
                run_tick(&ctx).await;
                sleep_observing_stop(&running, period).await;
            }
            info!("Reminder dispatcher stopped");
        });
    }

    /// Signals the sweeper to wind down. An in-flight delivery is allowed to
    /// complete; the loop exits at its next flag check.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }
}

impl Default for ReminderScheduler {
    fn default() -> Self {
        Self::new()
    }
}

async fn run_tick(ctx: &PlazoContext) {
    let usecase = SendRemindersUseCase {};
    if let Err(e) = execute(usecase, ctx).await {
        error!("Reminder sweep failed: {:?}", e);
    }
}

/// Sleeps through the tick period in slices of at most one second so that a
/// stop signal interrupts the idle wait quickly
async fn sleep_observing_stop(running: &AtomicBool, period: Duration) {
    const SLICE: Duration = Duration::from_secs(1);
    let mut slept = Duration::from_secs(0);
    while slept < period && running.load(Ordering::SeqCst) {
        let nap = std::cmp::min(SLICE, period - slept);
        rt::time::sleep(nap).await;
        slept += nap;
    }
}
