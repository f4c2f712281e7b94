//! Live message channel over Server-Sent Events.
//!
//! Best-effort and single-subscriber: on error the source is closed and
//! reopened after `attempt * retry_step_ms`, until `max_attempts` is
//! exhausted. Any successfully parsed message resets the attempt counter.
//! The open source lives in a [`SourceSlot`] and is closed with its owner.

use crate::shared::config::LiveUpdatesConfig;
use contracts::enums::Language;
use contracts::shared::live_event::LiveEvent;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{EventSource, MessageEvent};

/// Linear backoff: attempt `n` waits `n * step_ms`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconnectPolicy {
    pub max_attempts: u32,
    pub step_ms: u32,
}

impl ReconnectPolicy {
    /// Delay before reconnect attempt `attempt` (1-based), `None` once exhausted
    pub fn delay_for(&self, attempt: u32) -> Option<u32> {
        if attempt == 0 || attempt > self.max_attempts {
            return None;
        }
        Some(attempt.saturating_mul(self.step_ms))
    }
}

impl From<&LiveUpdatesConfig> for ReconnectPolicy {
    fn from(config: &LiveUpdatesConfig) -> Self {
        Self {
            max_attempts: config.max_attempts,
            step_ms: config.retry_step_ms,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelStatus {
    Disabled,
    Connecting,
    Connected,
    Reconnecting { attempt: u32 },
    GaveUp,
}

impl ChannelStatus {
    pub fn label(&self, lang: Language) -> String {
        match self {
            ChannelStatus::Disabled => lang.pick("Sin conexión en vivo", "Live updates off").to_string(),
            ChannelStatus::Connecting => lang.pick("Conectando…", "Connecting…").to_string(),
            ChannelStatus::Connected => lang.pick("En vivo", "Live").to_string(),
            ChannelStatus::Reconnecting { attempt } => match lang {
                Language::EsEs => format!("Reconectando (intento {attempt})"),
                Language::EnUs => format!("Reconnecting (attempt {attempt})"),
            },
            ChannelStatus::GaveUp => lang
                .pick("Conexión en vivo perdida", "Live connection lost")
                .to_string(),
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            ChannelStatus::Connected => "badge badge--success",
            ChannelStatus::Connecting | ChannelStatus::Reconnecting { .. } => "badge badge--warning",
            ChannelStatus::GaveUp => "badge badge--error",
            ChannelStatus::Disabled => "badge badge--neutral",
        }
    }
}

/// Connection that can be shut down from outside its own callbacks
pub trait CloseSource {
    fn close_source(&self);
}

impl CloseSource for EventSource {
    fn close_source(&self) {
        self.close();
    }
}

/// Holds the one open connection of a channel
pub struct SourceSlot<S: CloseSource> {
    current: Option<S>,
}

impl<S: CloseSource> SourceSlot<S> {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Install a fresh connection; a previous one is closed first
    pub fn replace(&mut self, source: S) {
        if let Some(previous) = self.current.replace(source) {
            previous.close_source();
        }
    }

    pub fn shutdown(&mut self) {
        if let Some(source) = self.current.take() {
            source.close_source();
        }
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }
}

impl<S: CloseSource> Default for SourceSlot<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: CloseSource> Drop for SourceSlot<S> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

struct Channel {
    url: String,
    policy: ReconnectPolicy,
    on_event: Rc<dyn Fn(LiveEvent)>,
    set_status: WriteSignal<ChannelStatus>,
    stopped: Arc<AtomicBool>,
    source: StoredValue<SourceSlot<EventSource>, LocalStorage>,
}

/// Open the live channel for the current owner; it stops when the owner is cleaned up
pub fn use_live_updates<F>(config: &LiveUpdatesConfig, on_event: F) -> ReadSignal<ChannelStatus>
where
    F: Fn(LiveEvent) + 'static,
{
    let (status, set_status) = signal(ChannelStatus::Disabled);
    if !config.enabled {
        log::info!("Live updates disabled by configuration");
        return status;
    }

    let stopped = Arc::new(AtomicBool::new(false));
    let stop_flag = Arc::clone(&stopped);
    let source = StoredValue::new_local(SourceSlot::new());
    on_cleanup(move || {
        stop_flag.store(true, Ordering::Relaxed);
        if source.try_update_value(SourceSlot::shutdown).is_some() {
            log::debug!("Live channel closed on cleanup");
        }
    });

    let channel = Rc::new(Channel {
        url: config.url.clone(),
        policy: ReconnectPolicy::from(config),
        on_event: Rc::new(on_event),
        set_status,
        stopped,
        source,
    });
    open(channel, 0);
    status
}

fn open(channel: Rc<Channel>, attempt: u32) {
    if channel.stopped.load(Ordering::Relaxed) {
        return;
    }
    channel.set_status.set(if attempt == 0 {
        ChannelStatus::Connecting
    } else {
        ChannelStatus::Reconnecting { attempt }
    });

    let source = match EventSource::new(&channel.url) {
        Ok(source) => source,
        Err(err) => {
            log::warn!("Failed to open live channel {}: {:?}", channel.url, err);
            schedule_reconnect(channel, attempt + 1);
            return;
        }
    };
    log::debug!("Live channel opened: {} (attempt {})", channel.url, attempt);
    if channel
        .source
        .try_update_value(|slot| slot.replace(source.clone()))
        .is_none()
    {
        source.close();
        return;
    }

    let attempts = Rc::new(Cell::new(attempt));
    let failed = Rc::new(Cell::new(false));

    let on_open = {
        let channel = Rc::clone(&channel);
        Closure::<dyn FnMut()>::new(move || {
            channel.set_status.set(ChannelStatus::Connected);
        })
    };

    let on_message = {
        let channel = Rc::clone(&channel);
        let attempts = Rc::clone(&attempts);
        let source = source.clone();
        Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
            if channel.stopped.load(Ordering::Relaxed) {
                source.close();
                return;
            }
            let Some(data) = event.data().as_string() else {
                return;
            };
            match LiveEvent::parse(&data) {
                Ok(live_event) => {
                    attempts.set(0);
                    channel.set_status.set(ChannelStatus::Connected);
                    (channel.on_event)(live_event);
                }
                Err(err) => log::warn!("Skipping malformed live event: {err}"),
            }
        })
    };

    let on_error = {
        let channel = Rc::clone(&channel);
        let source = source.clone();
        Closure::<dyn FnMut()>::new(move || {
            if failed.replace(true) {
                return;
            }
            source.close();
            log::warn!("Live channel error, closing {}", channel.url);
            schedule_reconnect(Rc::clone(&channel), attempts.get() + 1);
        })
    };

    source.set_onopen(Some(on_open.as_ref().unchecked_ref()));
    source.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
    source.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    on_open.forget();
    on_message.forget();
    on_error.forget();
}

fn schedule_reconnect(channel: Rc<Channel>, attempt: u32) {
    if channel.stopped.load(Ordering::Relaxed) {
        return;
    }
    match channel.policy.delay_for(attempt) {
        Some(delay) => {
            channel.set_status.set(ChannelStatus::Reconnecting { attempt });
            log::info!("Reconnecting live channel in {delay} ms (attempt {attempt})");
            spawn_local(async move {
                TimeoutFuture::new(delay).await;
                open(channel, attempt);
            });
        }
        None => {
            log::warn!("Live channel gave up after {} attempts", channel.policy.max_attempts);
            channel.set_status.set(ChannelStatus::GaveUp);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingSource {
        closed: Rc<Cell<u32>>,
    }

    impl CloseSource for CountingSource {
        fn close_source(&self) {
            self.closed.set(self.closed.get() + 1);
        }
    }

    fn counting(closed: &Rc<Cell<u32>>) -> CountingSource {
        CountingSource {
            closed: Rc::clone(closed),
        }
    }

    #[test]
    fn test_shutdown_closes_quiet_source() {
        let closed = Rc::new(Cell::new(0));
        let mut slot = SourceSlot::new();
        slot.replace(counting(&closed));
        assert!(slot.is_open());
        assert_eq!(closed.get(), 0);

        slot.shutdown();
        assert!(!slot.is_open());
        assert_eq!(closed.get(), 1);
        slot.shutdown();
        assert_eq!(closed.get(), 1);
    }

    #[test]
    fn test_reopen_keeps_single_connection() {
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let mut slot = SourceSlot::new();
        slot.replace(counting(&first));
        slot.replace(counting(&second));
        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 0);

        drop(slot);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn test_delay_grows_linearly() {
        let policy = ReconnectPolicy {
            max_attempts: 3,
            step_ms: 1500,
        };
        assert_eq!(policy.delay_for(1), Some(1500));
        assert_eq!(policy.delay_for(2), Some(3000));
        assert_eq!(policy.delay_for(3), Some(4500));
    }

    #[test]
    fn test_gives_up_after_max_attempts() {
        let policy = ReconnectPolicy {
            max_attempts: 3,
            step_ms: 1500,
        };
        assert_eq!(policy.delay_for(4), None);
        assert_eq!(policy.delay_for(0), None);
    }

    #[test]
    fn test_zero_attempts_never_reconnects() {
        let policy = ReconnectPolicy {
            max_attempts: 0,
            step_ms: 1000,
        };
        assert_eq!(policy.delay_for(1), None);
    }

    #[test]
    fn test_policy_from_config() {
        let config = LiveUpdatesConfig {
            enabled: true,
            url: "/live".into(),
            max_attempts: 5,
            retry_step_ms: 2000,
        };
        let policy = ReconnectPolicy::from(&config);
        assert_eq!(policy.delay_for(5), Some(10_000));
        assert_eq!(policy.delay_for(6), None);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(
            ChannelStatus::Reconnecting { attempt: 2 }.label(Language::EnUs),
            "Reconnecting (attempt 2)"
        );
        assert_eq!(ChannelStatus::Connected.label(Language::EsEs), "En vivo");
        assert_eq!(ChannelStatus::GaveUp.badge_class(), "badge badge--error");
    }
}
