//! Frame encoding for the panel link
//!
//! Frame format:
//! - START (1 byte): 0xA5 synchronization byte
//! - LENGTH (1 byte): payload length (0-64)
//! - TYPE (1 byte): message type identifier
//! - PAYLOAD (0-64 bytes): type-specific data
//! - CHECKSUM (1 byte): XOR of LENGTH, TYPE, and all PAYLOAD bytes

use heapless::Vec;

/// Frame synchronization byte
pub const FRAME_START: u8 = 0xA5;

/// Maximum payload size in bytes
pub const MAX_PAYLOAD_SIZE: usize = 64;

/// START + LENGTH + TYPE + CHECKSUM
const OVERHEAD: usize = 4;

/// Maximum complete frame size
pub const MAX_FRAME_SIZE: usize = MAX_PAYLOAD_SIZE + OVERHEAD;

/// Errors that can occur during frame encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Payload exceeds maximum allowed size
    PayloadTooLarge,
    /// Buffer too small for encoding
    BufferTooSmall,
}

/// A frame ready for encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Message type identifier
    pub msg_type: u8,
    /// Payload data
    pub payload: Vec<u8, MAX_PAYLOAD_SIZE>,
}

fn checksum(msg_type: u8, payload: &[u8]) -> u8 {
    payload
        .iter()
        .fold(payload.len() as u8 ^ msg_type, |acc, &b| acc ^ b)
}

impl Frame {
    /// Create a frame, copying `payload`
    pub fn new(msg_type: u8, payload: &[u8]) -> Result<Self, FrameError> {
        let payload = Vec::from_slice(payload).map_err(|_| FrameError::PayloadTooLarge)?;
        Ok(Self { msg_type, payload })
    }

    /// Create a frame with no payload
    pub fn empty(msg_type: u8) -> Self {
        Self {
            msg_type,
            payload: Vec::new(),
        }
    }

    /// Size of this frame on the wire
    pub fn encoded_len(&self) -> usize {
        self.payload.len() + OVERHEAD
    }

    /// Encode this frame into `buffer`, returning the bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, FrameError> {
        let len = self.encoded_len();
        let out = buffer.get_mut(..len).ok_or(FrameError::BufferTooSmall)?;
        let (header, rest) = out.split_at_mut(3);
        header.copy_from_slice(&[FRAME_START, self.payload.len() as u8, self.msg_type]);
        let (body, tail) = rest.split_at_mut(self.payload.len());
        body.copy_from_slice(&self.payload);
        tail[0] = checksum(self.msg_type, &self.payload);
        Ok(len)
    }

    /// Encode this frame into a heapless Vec
    pub fn to_bytes(&self) -> Result<Vec<u8, MAX_FRAME_SIZE>, FrameError> {
        let mut buffer = [0u8; MAX_FRAME_SIZE];
        let len = self.encode(&mut buffer)?;
        Vec::from_slice(&buffer[..len]).map_err(|_| FrameError::BufferTooSmall)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_frame_layout() {
        let frame = Frame::empty(0x30);
        let mut buffer = [0u8; 8];
        let len = frame.encode(&mut buffer).unwrap();

        assert_eq!(len, 4);
        assert_eq!(&buffer[..4], &[FRAME_START, 0, 0x30, 0x30]);
    }

    #[test]
    fn test_payload_frame_layout() {
        let frame = Frame::new(0x31, &[0x01, b'2', b'5']).unwrap();
        let bytes = frame.to_bytes().unwrap();

        assert_eq!(bytes.len(), 7);
        assert_eq!(bytes[1], 3);
        assert_eq!(bytes[2], 0x31);
        assert_eq!(&bytes[3..6], &[0x01, b'2', b'5']);
        assert_eq!(bytes[6], 3 ^ 0x31 ^ 0x01 ^ b'2' ^ b'5');
    }

    #[test]
    fn test_encode_into_short_buffer() {
        let frame = Frame::new(0x31, &[1, 2, 3]).unwrap();
        let mut buffer = [0u8; 6];
        assert_eq!(frame.encode(&mut buffer), Err(FrameError::BufferTooSmall));
    }

    #[test]
    fn test_payload_too_large() {
        let large = [0u8; MAX_PAYLOAD_SIZE + 1];
        assert_eq!(Frame::new(0x31, &large), Err(FrameError::PayloadTooLarge));
    }

    proptest! {
        #[test]
        fn prop_encoded_frame_is_self_describing(
            msg_type in any::<u8>(),
            payload in proptest::collection::vec(any::<u8>(), 0..=MAX_PAYLOAD_SIZE),
        ) {
            let bytes = Frame::new(msg_type, &payload).unwrap().to_bytes().unwrap();
            prop_assert_eq!(bytes.len(), payload.len() + 4);
            prop_assert_eq!(bytes[0], FRAME_START);
            prop_assert_eq!(bytes[1] as usize, payload.len());
            prop_assert_eq!(bytes[2], msg_type);
            // XOR over length, type, payload and checksum cancels out
            let folded = bytes[1..].iter().fold(0u8, |acc, &b| acc ^ b);
            prop_assert_eq!(folded, 0);
        }
    }
}
