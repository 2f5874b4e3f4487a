//! Access rules that sit in front of a [`NameWheel`].
//!
//! Two independent gates: the host lock (only someone holding the key may
//! edit the list) and the per-device spin limit (one spin, remembered in a
//! key-value store such as `localStorage`). Neither is part of the wheel's own
//! state machine; [`GatedWheel`] applies them before delegating.

use std::collections::HashMap;

use crate::constants::{LOCKED_HINT, SPIN_LIMIT_KEY, SPIN_USED_VALUE, UNLOCKED_HINT};
use crate::error::{SpinRejected, UnlockError, WheelError};
use crate::random::{RandomIndex, ThreadRngIndex};
use crate::render::{Palette, WheelFrame};
use crate::shared_wheel_game::{Clock, FrameScheduler, NameWheel, SpinPlan, SpinTick};
use crate::validation::validate_host_key;

/// String storage keyed by fixed identifiers.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str);
    fn remove_item(&mut self, key: &str);
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_string(), value.to_string());
    }

    fn remove_item(&mut self, key: &str) {
        self.items.remove(key);
    }
}

/// One spin per device.
#[derive(Debug, Clone)]
pub struct SpinLimit<S> {
    store: S,
}

impl<S: KeyValueStore> SpinLimit<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn has_spin_available(&self) -> bool {
        self.store.get_item(SPIN_LIMIT_KEY).as_deref() != Some(SPIN_USED_VALUE)
    }

    pub fn mark_spin_used(&mut self) {
        self.store.set_item(SPIN_LIMIT_KEY, SPIN_USED_VALUE);
        log::debug!("spin limit reached for this device");
    }

    /// Gives the device its spin back.
    pub fn reset(&mut self) {
        self.store.remove_item(SPIN_LIMIT_KEY);
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Host-only gate for editing the name list.
#[derive(Debug, Clone)]
pub struct HostLock {
    secret: String,
    unlocked: bool,
}

impl HostLock {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            unlocked: false,
        }
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    pub fn unlock(&mut self, attempt: &str) -> Result<(), UnlockError> {
        let key = validate_host_key(attempt).map_err(|_| UnlockError::BlankKey)?;
        if key != self.secret {
            log::warn!("host unlock attempt with the wrong key");
            return Err(UnlockError::WrongKey);
        }
        self.unlocked = true;
        log::info!("host controls unlocked");
        Ok(())
    }

    pub fn lock(&mut self) {
        self.unlocked = false;
        log::info!("host controls locked");
    }

    pub fn hint(&self) -> &'static str {
        if self.unlocked {
            UNLOCKED_HINT
        } else {
            LOCKED_HINT
        }
    }
}

/// A wheel behind the host lock and the per-device spin limit.
#[derive(Debug, Clone)]
pub struct GatedWheel<S, R = ThreadRngIndex> {
    wheel: NameWheel<R>,
    lock: HostLock,
    limit: SpinLimit<S>,
    spin_requires_host: bool,
}

impl<S: KeyValueStore, R: RandomIndex> GatedWheel<S, R> {
    pub fn new(wheel: NameWheel<R>, lock: HostLock, store: S) -> Self {
        Self {
            wheel,
            lock,
            limit: SpinLimit::new(store),
            spin_requires_host: false,
        }
    }

    /// Also require the host lock to be open before spinning.
    pub fn with_spin_requires_host(mut self, required: bool) -> Self {
        self.spin_requires_host = required;
        self
    }

    pub fn wheel(&self) -> &NameWheel<R> {
        &self.wheel
    }

    pub fn lock(&self) -> &HostLock {
        &self.lock
    }

    pub fn lock_mut(&mut self) -> &mut HostLock {
        &mut self.lock
    }

    pub fn limit(&self) -> &SpinLimit<S> {
        &self.limit
    }

    pub fn limit_mut(&mut self) -> &mut SpinLimit<S> {
        &mut self.limit
    }

    fn ensure_host(&self) -> Result<(), WheelError> {
        if !self.lock.is_unlocked() {
            log::warn!("name list change attempted while locked");
            return Err(WheelError::Locked);
        }
        Ok(())
    }

    pub fn add_name(&mut self, raw: &str) -> Result<bool, WheelError> {
        self.ensure_host()?;
        self.wheel.add_name(raw)
    }

    /// Removing a single name stays open to everyone.
    pub fn remove_name(&mut self, index: usize) -> Result<String, WheelError> {
        self.wheel.remove_name(index)
    }

    pub fn clear_all(&mut self) -> Result<(), WheelError> {
        self.ensure_host()?;
        self.wheel.clear_all()
    }

    pub fn request_spin(&mut self, now_ms: f64) -> Result<SpinPlan, SpinRejected> {
        if self.wheel.is_spinning() {
            return Err(SpinRejected::AlreadySpinning);
        }
        if self.spin_requires_host && !self.lock.is_unlocked() {
            log::warn!("spin attempted while locked");
            return Err(SpinRejected::Locked);
        }
        if !self.limit.has_spin_available() {
            log::warn!("spin attempted after this device used its spin");
            return Err(SpinRejected::RateLimited);
        }
        self.wheel.request_spin(now_ms)
    }

    pub fn advance(&mut self, now_ms: f64) -> SpinTick {
        let tick = self.wheel.advance(now_ms);
        self.record_completion(&tick);
        tick
    }

    pub fn start_spin(
        &mut self,
        clock: &dyn Clock,
        scheduler: &mut dyn FrameScheduler,
    ) -> Result<SpinPlan, SpinRejected> {
        let plan = self.request_spin(clock.now_ms())?;
        scheduler.request_frame();
        Ok(plan)
    }

    pub fn on_frame(&mut self, clock: &dyn Clock, scheduler: &mut dyn FrameScheduler) -> SpinTick {
        let tick = self.wheel.on_frame(clock, scheduler);
        self.record_completion(&tick);
        tick
    }

    fn record_completion(&mut self, tick: &SpinTick) {
        if matches!(tick, SpinTick::Finished(_) | SpinTick::Inconsistent { .. }) {
            self.limit.mark_spin_used();
        }
    }

    /// True while spinning or once the device's spin is spent.
    pub fn spin_controls_disabled(&self) -> bool {
        self.wheel.is_spinning() || !self.limit.has_spin_available()
    }

    pub fn frame(&self, palette: Palette) -> WheelFrame {
        self.wheel.frame(palette)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::FixedIndex;
    use crate::shared_wheel_game::{WinnerEvent, SPIN_DURATION_MS};

    const SECRET: &str = "navidad2024";

    fn gated() -> GatedWheel<MemoryStore, FixedIndex> {
        GatedWheel::new(NameWheel::with_rng(FixedIndex(0)), HostLock::new(SECRET), MemoryStore::new())
    }

    #[test]
    fn test_unlock_rules() {
        let mut lock = HostLock::new(SECRET);
        assert_eq!(lock.hint(), LOCKED_HINT);
        assert_eq!(lock.unlock("   "), Err(UnlockError::BlankKey));
        assert_eq!(lock.unlock("nope"), Err(UnlockError::WrongKey));
        assert!(!lock.is_unlocked());
        assert_eq!(lock.unlock(" navidad2024 "), Ok(()));
        assert!(lock.is_unlocked());
        assert_eq!(lock.hint(), UNLOCKED_HINT);
        lock.lock();
        assert!(!lock.is_unlocked());
    }

    #[test]
    fn test_locked_wheel_rejects_edits() {
        let mut wheel = gated();
        assert_eq!(wheel.add_name("Ana"), Err(WheelError::Locked));
        assert_eq!(wheel.clear_all(), Err(WheelError::Locked));
        assert!(wheel.wheel().pool().is_empty());

        wheel.lock_mut().unlock(SECRET).unwrap();
        assert_eq!(wheel.add_name("Ana"), Ok(true));
        wheel.lock_mut().lock();
        // Single removals are not host-gated.
        assert_eq!(wheel.remove_name(0), Ok("Ana".to_string()));
    }

    #[test]
    fn test_one_spin_per_device() {
        let mut wheel = gated();
        wheel.lock_mut().unlock(SECRET).unwrap();
        for name in ["Ana", "Bob", "Cleo"] {
            wheel.add_name(name).unwrap();
        }

        assert!(!wheel.spin_controls_disabled());
        wheel.request_spin(0.0).unwrap();
        assert!(wheel.spin_controls_disabled());
        assert_eq!(wheel.request_spin(1.0), Err(SpinRejected::AlreadySpinning));

        let tick = wheel.advance(SPIN_DURATION_MS);
        assert_eq!(
            tick,
            SpinTick::Finished(WinnerEvent {
                name: "Ana".to_string(),
                index: 0
            })
        );
        assert!(!wheel.limit().has_spin_available());
        assert_eq!(wheel.limit().store().get_item(SPIN_LIMIT_KEY).as_deref(), Some("true"));
        assert_eq!(wheel.request_spin(5000.0), Err(SpinRejected::RateLimited));
        assert_eq!(wheel.wheel().names(), ["Bob", "Cleo"]);

        wheel.limit_mut().reset();
        assert!(wheel.request_spin(6000.0).is_ok());
    }

    #[test]
    fn test_spent_store_is_honoured_on_startup() {
        let mut store = MemoryStore::new();
        store.set_item(SPIN_LIMIT_KEY, SPIN_USED_VALUE);
        let mut wheel = GatedWheel::new(NameWheel::with_rng(FixedIndex(0)), HostLock::new(SECRET), store);
        wheel.lock_mut().unlock(SECRET).unwrap();
        wheel.add_name("Ana").unwrap();
        assert!(wheel.spin_controls_disabled());
        assert_eq!(wheel.request_spin(0.0), Err(SpinRejected::RateLimited));
        assert!(!wheel.wheel().is_spinning());
    }

    #[test]
    fn test_spin_can_require_host() {
        let mut wheel = gated().with_spin_requires_host(true);
        wheel.lock_mut().unlock(SECRET).unwrap();
        wheel.add_name("Ana").unwrap();
        wheel.lock_mut().lock();
        assert_eq!(wheel.request_spin(0.0), Err(SpinRejected::Locked));
        wheel.lock_mut().unlock(SECRET).unwrap();
        assert!(wheel.request_spin(0.0).is_ok());
    }

    #[test]
    fn test_empty_pool_does_not_spend_the_spin() {
        let mut wheel = gated();
        assert_eq!(wheel.request_spin(0.0), Err(SpinRejected::EmptyPool));
        assert!(wheel.limit().has_spin_available());
    }
}
