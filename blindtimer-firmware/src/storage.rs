//! Flash-backed key-value store
//!
//! Uses sequential-storage for wear-leveled key-value storage in the last
//! 64KB of flash. The core calls the store synchronously from the main
//! loop, so every operation blocks on the async flash driver.

use defmt::*;
use embassy_futures::block_on;
use embassy_rp::flash::{Async, Flash};
use embassy_rp::peripherals::{DMA_CH0, FLASH};
use embassy_rp::Peri;
use sequential_storage::cache::NoCache;
use sequential_storage::map;

use blindtimer_hal::{KvStore, StorageError, StorageKey, STORE_NAMESPACE};

/// 2MB flash on the board
pub const FLASH_SIZE: usize = 2 * 1024 * 1024;

/// Partition reserved in memory.x for persisted data
pub const STORE_PARTITION_SIZE: usize = 64 * 1024;
pub const STORE_PARTITION_START: usize = FLASH_SIZE - STORE_PARTITION_SIZE;

const STORE_RANGE: core::ops::Range<u32> = (STORE_PARTITION_START as u32)..(FLASH_SIZE as u32);

/// Scratch space for one item; the session log blob is the largest
const ITEM_BUFFER_SIZE: usize = 2048;

pub struct FlashKvStore {
    flash: Flash<'static, FLASH, Async, FLASH_SIZE>,
}

impl FlashKvStore {
    pub fn new(flash: Peri<'static, FLASH>, dma: Peri<'static, DMA_CH0>) -> Self {
        info!(
            "Store '{}' at 0x{:x}, {} KB",
            STORE_NAMESPACE,
            STORE_PARTITION_START,
            STORE_PARTITION_SIZE / 1024
        );
        Self {
            flash: Flash::new(flash, dma),
        }
    }
}

impl KvStore for FlashKvStore {
    fn get_blob(&mut self, key: StorageKey, buffer: &mut [u8]) -> Result<usize, StorageError> {
        let mut data_buffer = [0u8; ITEM_BUFFER_SIZE];

        let result = block_on(map::fetch_item::<StorageKey, &[u8], _>(
            &mut self.flash,
            STORE_RANGE,
            &mut NoCache::new(),
            &mut data_buffer,
            &key,
        ));

        match result {
            Ok(Some(data)) => {
                let len = data.len();
                if buffer.len() < len {
                    return Err(StorageError::BufferTooSmall);
                }
                buffer[..len].copy_from_slice(data);
                Ok(len)
            }
            Ok(None) => Err(StorageError::NotFound),
            Err(e) => {
                warn!("Flash read of {} failed: {:?}", key.name(), Debug2Format(&e));
                Err(StorageError::Storage)
            }
        }
    }

    fn set_blob(&mut self, key: StorageKey, data: &[u8]) -> Result<(), StorageError> {
        let mut data_buffer = [0u8; ITEM_BUFFER_SIZE];

        let result = block_on(map::store_item(
            &mut self.flash,
            STORE_RANGE,
            &mut NoCache::new(),
            &mut data_buffer,
            &key,
            &data,
        ));

        match result {
            Ok(()) => {
                debug!("Stored {} ({} bytes)", key.name(), data.len());
                Ok(())
            }
            Err(sequential_storage::Error::FullStorage) => Err(StorageError::Full),
            Err(e) => {
                warn!("Flash write of {} failed: {:?}", key.name(), Debug2Format(&e));
                Err(StorageError::Storage)
            }
        }
    }
}
