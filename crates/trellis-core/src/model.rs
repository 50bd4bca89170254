//! Value holders bound into components.
//!
//! A [`Model`] is read when a component needs its value and may be written
//! back (form input). Models that cache backend state release it in
//! [`Model::detach`].

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{Error, Result};

pub trait Model<T>: Send + Sync {
    fn get(&self) -> Result<T>;

    fn set(&self, _value: T) -> Result<()> {
        Err(Error::ReadOnly(std::any::type_name::<Self>()))
    }

    /// Drop any cached state; the next `get` reloads.
    fn detach(&self) {}
}

pub type SharedModel<T> = Arc<dyn Model<T>>;

/// A writable model holding its value directly.
pub struct StaticModel<T> {
    value: RwLock<T>,
}

impl<T> StaticModel<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }
}

impl<T: Clone + Send + Sync> Model<T> for StaticModel<T> {
    fn get(&self) -> Result<T> {
        Ok(self.value.read().clone())
    }

    fn set(&self, value: T) -> Result<()> {
        *self.value.write() = value;
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for StaticModel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StaticModel").field(&*self.value.read()).finish()
    }
}

/// A model computing its value on every read.
pub struct ReadOnlyModel<F> {
    compute: F,
}

impl<T, F> Model<T> for ReadOnlyModel<F>
where
    F: Fn() -> Result<T> + Send + Sync,
{
    fn get(&self) -> Result<T> {
        (self.compute)()
    }
}

/// Shared writable model holding `value`.
pub fn of<T: Clone + Send + Sync + 'static>(value: T) -> SharedModel<T> {
    Arc::new(StaticModel::new(value))
}

/// Shared read-only model evaluating `compute` on each read.
pub fn read_only<T, F>(compute: F) -> SharedModel<T>
where
    T: 'static,
    F: Fn() -> Result<T> + Send + Sync + 'static,
{
    Arc::new(ReadOnlyModel { compute })
}
