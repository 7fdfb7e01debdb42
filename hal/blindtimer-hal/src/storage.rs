//! Persistent key-value storage abstractions
//!
//! A board provides one [`KvStore`]. The core keeps two things in it: the
//! volume setting and the session log (a lifetime game counter plus the
//! packed record blob).

/// Namespace every key lives under
///
/// Boards with a shared store (e.g. a flash partition used by other
/// firmware) prefix or partition by this identifier.
pub const STORE_NAMESPACE: &str = "poker_chip";

/// Storage keys for persisted data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum StorageKey {
    /// Buzzer volume, single byte 0-10
    Volume = 0,
    /// Lifetime game counter (u32, never reset by log eviction)
    GameCount = 1,
    /// Packed session log records, oldest first
    GameLog = 2,
}

impl StorageKey {
    /// Get the key as a byte value
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Create a key from a byte value
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(StorageKey::Volume),
            1 => Some(StorageKey::GameCount),
            2 => Some(StorageKey::GameLog),
            _ => None,
        }
    }

    /// Human-readable key name
    pub fn name(self) -> &'static str {
        match self {
            StorageKey::Volume => "volume",
            StorageKey::GameCount => "game_count",
            StorageKey::GameLog => "game_blob",
        }
    }
}

/// Errors from key-value storage operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// Key not found
    NotFound,
    /// Buffer too small for the data
    BufferTooSmall,
    /// Data corrupted or of the wrong shape
    Corrupted,
    /// Underlying storage operation failed
    Storage,
    /// Storage is full
    Full,
}

/// Key-value store trait
///
/// Operations are synchronous: the core calls them from its single
/// main-loop context. Implementations backed by async flash drivers
/// block on completion.
pub trait KvStore {
    /// Read a blob into `buffer`, returning the number of bytes read
    fn get_blob(&mut self, key: StorageKey, buffer: &mut [u8]) -> Result<usize, StorageError>;

    /// Replace the blob stored under `key`
    fn set_blob(&mut self, key: StorageKey, data: &[u8]) -> Result<(), StorageError>;

    /// Read a little-endian `u32`
    fn get_u32(&mut self, key: StorageKey) -> Result<u32, StorageError> {
        let mut buf = [0u8; 4];
        let len = self.get_blob(key, &mut buf)?;
        if len != buf.len() {
            return Err(StorageError::Corrupted);
        }
        Ok(u32::from_le_bytes(buf))
    }

    /// Write a little-endian `u32`
    fn set_u32(&mut self, key: StorageKey, value: u32) -> Result<(), StorageError> {
        self.set_blob(key, &value.to_le_bytes())
    }

    /// Read a single byte
    fn get_u8(&mut self, key: StorageKey) -> Result<u8, StorageError> {
        let mut buf = [0u8; 1];
        match self.get_blob(key, &mut buf)? {
            1 => Ok(buf[0]),
            _ => Err(StorageError::Corrupted),
        }
    }

    /// Write a single byte
    fn set_u8(&mut self, key: StorageKey, value: u8) -> Result<(), StorageError> {
        self.set_blob(key, &[value])
    }
}

impl<T: KvStore + ?Sized> KvStore for &mut T {
    fn get_blob(&mut self, key: StorageKey, buffer: &mut [u8]) -> Result<usize, StorageError> {
        (**self).get_blob(key, buffer)
    }

    fn set_blob(&mut self, key: StorageKey, data: &[u8]) -> Result<(), StorageError> {
        (**self).set_blob(key, data)
    }
}

// Implement the sequential-storage Key trait when the feature is enabled
#[cfg(feature = "sequential-storage")]
impl sequential_storage::map::Key for StorageKey {
    fn serialize_into(
        &self,
        buffer: &mut [u8],
    ) -> Result<usize, sequential_storage::map::SerializationError> {
        if buffer.is_empty() {
            return Err(sequential_storage::map::SerializationError::BufferTooSmall);
        }
        buffer[0] = self.as_u8();
        Ok(1)
    }

    fn deserialize_from(
        buffer: &[u8],
    ) -> Result<(Self, usize), sequential_storage::map::SerializationError> {
        if buffer.is_empty() {
            return Err(sequential_storage::map::SerializationError::BufferTooSmall);
        }
        match StorageKey::from_u8(buffer[0]) {
            Some(key) => Ok((key, 1)),
            None => Err(sequential_storage::map::SerializationError::InvalidFormat),
        }
    }
}
