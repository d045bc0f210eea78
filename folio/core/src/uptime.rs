//! Uptime Counter
//!
//! "Uptime" for active roles in the parallel-processes section: wall-clock
//! time since the role started, refreshed once a minute.
//!
//! The wall clock is read once, at mount. After that the counter adds the
//! scheduler's virtual elapsed time, so it stays deterministic under test.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};

use crate::lifecycle::{Component, Context};
use crate::scheduler::TimerId;

/// Refresh cadence
pub const UPTIME_REFRESH: Duration = Duration::from_secs(60);

/// Format as `"{days}d {hours}h {minutes}m"`
pub fn format_uptime(elapsed: Duration) -> String {
    let minutes = elapsed.as_secs() / 60;
    let days = minutes / (24 * 60);
    let hours = (minutes % (24 * 60)) / 60;
    format!("{}d {}h {}m", days, hours, minutes % 60)
}

/// Timer armed by the counter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Refresh;

/// Live uptime label
#[derive(Clone, Debug)]
pub struct UptimeCounter {
    started: DateTime<Utc>,
    mounted_at: DateTime<Utc>,
    text: String,
    timer: Option<TimerId>,
}

impl UptimeCounter {
    /// Count from `started`, with `mounted_at` as the wall clock at mount
    pub fn new(started: DateTime<Utc>, mounted_at: DateTime<Utc>) -> Self {
        Self {
            started,
            mounted_at,
            text: String::new(),
            timer: None,
        }
    }

    /// Current label (empty until mounted)
    pub fn text(&self) -> &str {
        &self.text
    }

    fn recompute(&mut self, elapsed: Duration, ctx: &mut Context<'_, Refresh>) {
        let offset = TimeDelta::from_std(elapsed).unwrap_or(TimeDelta::zero());
        let now = self.mounted_at + offset;
        let uptime = (now - self.started).to_std().unwrap_or(Duration::ZERO);

        let text = format_uptime(uptime);
        if text != self.text {
            self.text = text;
            ctx.mark_dirty();
        }
    }
}

impl Component for UptimeCounter {
    type Timer = Refresh;

    fn on_mount(&mut self, ctx: &mut Context<'_, Refresh>) {
        let now = ctx.now();
        self.recompute(now, ctx);
        self.timer = Some(ctx.set_interval(UPTIME_REFRESH, Refresh));
    }

    fn on_timer(&mut self, _timer: Refresh, ctx: &mut Context<'_, Refresh>) {
        let now = ctx.now();
        self.recompute(now, ctx);
    }

    fn on_unmount(&mut self, ctx: &mut Context<'_, Refresh>) {
        if let Some(id) = self.timer.take() {
            ctx.clear_timer(id);
        }
    }
}
