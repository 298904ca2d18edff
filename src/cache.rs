use std::{
    any::{Any, TypeId},
    collections::HashMap,
    marker::PhantomData,
    ops::Deref,
    sync::{Arc, LazyLock},
    time::{Duration, Instant},
};

use actix_web::Either;
use tokio::sync::{OwnedRwLockReadGuard, OwnedRwLockWriteGuard, RwLock};

pub static CACHE: LazyLock<Cache> = LazyLock::new(Cache::default);

struct Stamped {
    stored_at: Instant,
    value: Box<dyn Any + Send + Sync>,
}

type Slot = Option<Stamped>;

fn is_fresh(slot: &Slot, max_age: Duration) -> bool {
    slot.as_ref()
        .is_some_and(|stamped| stamped.stored_at.elapsed() < max_age)
}

#[derive(Default)]
pub struct Cache {
    #[allow(clippy::type_complexity)]
    inner: Arc<std::sync::RwLock<HashMap<(String, TypeId), Arc<RwLock<Slot>>>>>,
}

pub struct CacheEntry<T> {
    inner: Arc<RwLock<Slot>>,
    max_age: Duration,
    any_type: PhantomData<T>,
}

pub struct ReadCacheEntryValue<T> {
    inner: OwnedRwLockReadGuard<Slot>,
    any_type: PhantomData<T>,
}

impl<T: 'static> ReadCacheEntryValue<T> {
    pub fn get(&self) -> Option<&T> {
        let stamped = (*self.inner).as_ref()?;
        let data = stamped.value.downcast_ref::<T>().unwrap();
        Some(data)
    }
}

pub struct WriteCacheEntryValue<T> {
    inner: OwnedRwLockWriteGuard<Slot>,
    any_type: PhantomData<T>,
}

impl<T: Send + Sync + 'static> WriteCacheEntryValue<T> {
    pub fn set(&mut self, val: T) {
        *self.inner = Some(Stamped {
            stored_at: Instant::now(),
            value: Box::new(val),
        });
    }

    pub fn into_read(self) -> ReadCacheEntryValue<T> {
        ReadCacheEntryValue {
            inner: self.inner.downgrade(),
            any_type: PhantomData,
        }
    }
}

impl<T: Send + Sync + 'static> CacheEntry<T> {
    pub async fn get_or_write_lock(&self) -> Either<RefVal<T>, WriteCacheEntryValue<T>> {
        loop {
            let read_guard = self.inner.clone().read_owned().await;
            if is_fresh(&read_guard, self.max_age) {
                return Either::Left(RefVal(ReadCacheEntryValue {
                    inner: read_guard,
                    any_type: PhantomData,
                }));
            }
            drop(read_guard);
            let write_guard = self.inner.clone().write_owned().await;
            if is_fresh(&write_guard, self.max_age) {
                // Another task refilled the slot while we waited.
                continue;
            }
            return Either::Right(WriteCacheEntryValue {
                inner: write_guard,
                any_type: PhantomData,
            });
        }
    }
}

impl Cache {
    fn get_value_guard<T: 'static>(&self, key: String) -> Arc<RwLock<Slot>> {
        let key = (key, TypeId::of::<T>());
        let hash_map = self.inner.read().unwrap();
        if let Some(data) = hash_map.get(&key) {
            return data.clone();
        }
        drop(hash_map);
        let mut hash_map = self.inner.write().unwrap();
        hash_map.entry(key).or_default().clone()
    }

    pub async fn entry<T: Send + 'static>(&self, key: String, max_age: Duration) -> CacheEntry<T> {
        let data_guard = self.get_value_guard::<T>(key);
        CacheEntry {
            inner: data_guard,
            max_age,
            any_type: PhantomData,
        }
    }
}

pub struct RefVal<T>(pub(crate) ReadCacheEntryValue<T>);

impl<T: Send + 'static> Deref for RefVal<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.0.get().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: Duration = Duration::from_secs(86_400);

    #[actix_web::test]
    async fn empty_slot_hands_out_the_write_lock() {
        let cache = Cache::default();
        let entry = cache.entry::<u32>("pikachu".into(), DAY).await;
        match entry.get_or_write_lock().await {
            Either::Left(_) => panic!("slot was never filled"),
            Either::Right(_) => {}
        }
    }

    #[actix_web::test]
    async fn fresh_entry_is_read_back() {
        let cache = Cache::default();
        let entry = cache.entry::<u32>("pikachu".into(), DAY).await;
        let mut write_lock = match entry.get_or_write_lock().await {
            Either::Left(_) => panic!("slot was never filled"),
            Either::Right(write_lock) => write_lock,
        };
        write_lock.set(25);
        drop(write_lock);

        let entry = cache.entry::<u32>("pikachu".into(), DAY).await;
        match entry.get_or_write_lock().await {
            Either::Left(val) => assert_eq!(*val, 25),
            Either::Right(_) => panic!("fresh slot must be readable"),
        }
    }

    #[actix_web::test]
    async fn zero_window_always_takes_the_write_path() {
        let cache = Cache::default();
        let entry = cache.entry::<u32>("pikachu".into(), Duration::ZERO).await;
        let mut write_lock = match entry.get_or_write_lock().await {
            Either::Left(_) => panic!("slot was never filled"),
            Either::Right(write_lock) => write_lock,
        };
        write_lock.set(25);
        drop(write_lock);

        let entry = cache.entry::<u32>("pikachu".into(), Duration::ZERO).await;
        match entry.get_or_write_lock().await {
            Either::Left(_) => panic!("expired slot must not be readable"),
            Either::Right(_) => {}
        }
    }

    #[actix_web::test]
    async fn write_guard_downgrades_to_a_filled_read() {
        let cache = Cache::default();
        let entry = cache.entry::<String>("pikachu".into(), DAY).await;
        let mut write_lock = match entry.get_or_write_lock().await {
            Either::Left(_) => panic!("slot was never filled"),
            Either::Right(write_lock) => write_lock,
        };
        write_lock.set("electric".to_string());
        let read = write_lock.into_read();
        assert_eq!(read.get().map(String::as_str), Some("electric"));
    }

    #[actix_web::test]
    async fn distinct_types_do_not_collide_on_one_key() {
        let cache = Cache::default();
        let entry = cache.entry::<u32>("pikachu".into(), DAY).await;
        let mut write_lock = match entry.get_or_write_lock().await {
            Either::Left(_) => panic!("slot was never filled"),
            Either::Right(write_lock) => write_lock,
        };
        write_lock.set(25);
        drop(write_lock);

        let entry = cache.entry::<String>("pikachu".into(), DAY).await;
        match entry.get_or_write_lock().await {
            Either::Left(_) => panic!("string slot was never filled"),
            Either::Right(_) => {}
        }
    }
}
