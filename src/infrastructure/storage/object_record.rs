use bytes::{Buf, BufMut, Bytes, BytesMut};
use serde::{Deserialize, Serialize};

use crate::application::ports::{FetchedObject, StorageError};
use crate::domain::value_objects::{ContentType, ObjectKey};

/// Size of the little-endian header length prefix
const HEADER_LEN_BYTES: usize = 4;

#[derive(Debug, Serialize, Deserialize)]
struct ObjectHeader {
    key: String,
    content_type: String,
    size_bytes: u64,
}

/// On-disk object format.
///
/// `[u32 LE header length][JSON header][payload]`. The content type travels in
/// the same file as the bytes, so a single rename publishes both.
pub struct ObjectRecord;

impl ObjectRecord {
    pub fn encode(
        key: &ObjectKey,
        content_type: &ContentType,
        payload: &[u8],
    ) -> Result<Bytes, StorageError> {
        let header = serde_json::to_vec(&ObjectHeader {
            key: key.to_string(),
            content_type: content_type.to_string(),
            size_bytes: payload.len() as u64,
        })?;
        let header_len = u32::try_from(header.len())
            .map_err(|_| StorageError::Internal("Object header too large".to_string()))?;

        let mut record = BytesMut::with_capacity(HEADER_LEN_BYTES + header.len() + payload.len());
        record.put_u32_le(header_len);
        record.put_slice(&header);
        record.put_slice(payload);
        Ok(record.freeze())
    }

    pub fn decode(raw: Bytes) -> Result<FetchedObject, StorageError> {
        if raw.len() < HEADER_LEN_BYTES {
            return Err(StorageError::Internal("Object record truncated".to_string()));
        }
        let header_len = (&raw[..HEADER_LEN_BYTES]).get_u32_le() as usize;
        let payload_start = HEADER_LEN_BYTES + header_len;
        if raw.len() < payload_start {
            return Err(StorageError::Internal(
                "Object record header truncated".to_string(),
            ));
        }

        let header: ObjectHeader = serde_json::from_slice(&raw[HEADER_LEN_BYTES..payload_start])?;
        let bytes = raw.slice(payload_start..);
        if bytes.len() as u64 != header.size_bytes {
            return Err(StorageError::Internal(format!(
                "Object record size mismatch: header says {}, found {}",
                header.size_bytes,
                bytes.len()
            )));
        }

        let content_type = ContentType::new(header.content_type)
            .map_err(|e| StorageError::Internal(e.to_string()))?;
        Ok(FetchedObject {
            bytes,
            content_type,
        })
    }
}
