//! The Fibonacci device: an engine behind a single-holder gate.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::calculator::{Calculator, FibError};
use crate::constants::DEVICE_NAME;
use crate::fastdoubling::FastDoubling;
use crate::registry::CalculatorFactory;
use crate::session::Session;

/// Offset-addressed Fibonacci device.
///
/// Each device carries its own gate, so independent devices never contend.
/// Opening is a non-blocking attempt: a held device fails fast with
/// [`FibError::Busy`].
///
/// # Example
/// ```
/// use fibdev_core::cursor::SeekBase;
/// use fibdev_core::device::FibDevice;
/// use fibdev_core::session::Channel;
///
/// let device = FibDevice::default();
/// let mut session = device.open().unwrap();
/// session.seek(SeekBase::Start, 10);
/// assert_eq!(session.read(), 55);
/// assert!(device.open().is_err());
/// session.close();
/// assert!(device.open().is_ok());
/// ```
pub struct FibDevice {
    gate: Mutex<()>,
    engine: Arc<dyn Calculator>,
}

impl FibDevice {
    /// Create a device computing through `engine`.
    #[must_use]
    pub fn new(engine: Arc<dyn Calculator>) -> Self {
        Self {
            gate: Mutex::new(()),
            engine,
        }
    }

    /// Create a device using the engine registered under `name`.
    pub fn with_method(factory: &dyn CalculatorFactory, name: &str) -> Result<Self, FibError> {
        Ok(Self::new(factory.get(name)?))
    }

    /// Acquire the device for one session.
    pub fn open(&self) -> Result<Session<'_>, FibError> {
        let Some(guard) = self.gate.try_lock() else {
            tracing::warn!(
                device = DEVICE_NAME,
                engine = self.engine.name(),
                "device is in use"
            );
            return Err(FibError::Busy);
        };
        tracing::trace!(engine = self.engine.name(), "session acquired");
        Ok(Session::new(guard, self.engine.as_ref()))
    }

    /// Whether a session currently holds the device.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.gate.is_locked()
    }

    /// Name of the engine behind this device.
    #[must_use]
    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }
}

impl Default for FibDevice {
    fn default() -> Self {
        Self::new(Arc::new(FastDoubling::new()))
    }
}

impl std::fmt::Debug for FibDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FibDevice")
            .field("engine", &self.engine.name())
            .field("busy", &self.is_busy())
            .finish()
    }
}
