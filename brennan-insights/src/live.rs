//! Live refresh of a dashboard panel
//!
//! A [`LivePoller`] re-runs one generator on a fixed interval on its own
//! Tokio task and publishes each result through a `watch` channel. Ticks
//! never overlap: the next one is only awaited after the previous call has
//! returned, and missed ticks are delayed rather than fired in a burst.
//!
//! A [`LiveBoard`] holds at most one poller per display and replaces it when
//! a new capability is selected.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use brennan_core::constants::time::LIVE_REFRESH_MS;
use brennan_core::time::{Clock, SystemClock, Timestamp};
use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::Capability;

/// Default refresh period of a live panel
pub const DEFAULT_REFRESH: Duration = Duration::from_millis(LIVE_REFRESH_MS);

/// One published refresh
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveFrame<T> {
    /// 1-based refresh counter
    pub tick: u64,
    pub data: T,
    pub refreshed_at: Timestamp,
    pub is_live: bool,
}

/// Periodic generator run on a background task
#[derive(Debug)]
pub struct LivePoller<T> {
    handle: JoinHandle<()>,
    active: Arc<AtomicBool>,
    frames: watch::Receiver<Option<LiveFrame<T>>>,
}

impl<T> LivePoller<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Start polling `produce` every `period`, first result after one period
    ///
    /// Must be called inside a Tokio runtime. A zero period is raised to 1 ms.
    pub fn start<F, Fut>(period: Duration, produce: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = T> + Send + 'static,
    {
        Self::start_with_clock(period, SystemClock, produce)
    }

    /// Like [`LivePoller::start`], stamping frames with `clock`
    pub fn start_with_clock<C, F, Fut>(period: Duration, clock: C, mut produce: F) -> Self
    where
        C: Clock + 'static,
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = T> + Send + 'static,
    {
        let period = period.max(Duration::from_millis(1));
        let (sender, frames) = watch::channel(None);
        let active = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&active);

        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut tick = 0u64;

            loop {
                ticker.tick().await;
                let data = produce().await;
                let frame = LiveFrame {
                    tick: tick + 1,
                    data,
                    refreshed_at: clock.now(),
                    is_live: true,
                };

                // the flag is read under the channel's write lock, which stop() also takes
                let published = sender.send_if_modified(|slot| {
                    if !flag.load(Ordering::Acquire) {
                        return false;
                    }
                    *slot = Some(frame);
                    true
                });
                if !published {
                    log::debug!("live poller stopped mid-refresh, dropping result");
                    break;
                }
                tick += 1;
                if sender.is_closed() {
                    // every receiver is gone
                    break;
                }
            }
        });

        log::info!("live poller started ({:?} period)", period);
        Self { handle, active, frames }
    }

    /// Stop refreshing. Nothing is published after this returns.
    pub fn stop(&self) {
        if self.active.swap(false, Ordering::AcqRel) {
            // wait out a publish that read the flag before the swap
            drop(self.frames.borrow());
            self.handle.abort();
            log::info!("live poller stopped");
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire) && !self.handle.is_finished()
    }

    /// Most recent frame, if any refresh has completed
    pub fn latest(&self) -> Option<LiveFrame<T>> {
        self.frames.borrow().clone()
    }

    /// Independent receiver of future frames
    pub fn subscribe(&self) -> watch::Receiver<Option<LiveFrame<T>>> {
        self.frames.clone()
    }

    /// Wait for the next published frame; `None` once stopped
    pub async fn next_frame(&mut self) -> Option<LiveFrame<T>> {
        if !self.active.load(Ordering::Acquire) {
            return None;
        }
        self.frames.changed().await.ok()?;
        self.frames.borrow_and_update().clone()
    }
}

impl<T> Drop for LivePoller<T> {
    fn drop(&mut self) {
        self.active.store(false, Ordering::Release);
        self.handle.abort();
    }
}

/// Failure to start a live panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotRealTime(pub Capability);

impl std::fmt::Display for NotRealTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} does not support live refresh", self.0)
    }
}

impl std::error::Error for NotRealTime {}

/// The live slot of one display
#[derive(Debug)]
pub struct LiveBoard<T> {
    current: Option<(Capability, LivePoller<T>)>,
}

impl<T> Default for LiveBoard<T> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<T> LiveBoard<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin live refresh of `capability`, stopping whatever ran before
    pub fn start<F, Fut>(&mut self, capability: Capability, period: Duration, produce: F) -> Result<&mut LivePoller<T>, NotRealTime>
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = T> + Send + 'static,
    {
        if !capability.is_real_time() {
            return Err(NotRealTime(capability));
        }
        self.stop();
        log::info!("live panel switched to {}", capability);
        let (_, poller) = self.current.insert((capability, LivePoller::start(period, produce)));
        Ok(poller)
    }

    /// Stop the running poller, if any
    pub fn stop(&mut self) {
        if let Some((_, poller)) = self.current.take() {
            poller.stop();
        }
    }

    pub fn capability(&self) -> Option<Capability> {
        self.current.as_ref().map(|(capability, _)| *capability)
    }

    pub fn poller(&mut self) -> Option<&mut LivePoller<T>> {
        self.current.as_mut().map(|(_, poller)| poller)
    }
}
