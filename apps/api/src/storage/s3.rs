use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use tracing::{debug, info};

use super::{validate_name, StorageError, StorageSink};

/// Stores generated PDFs in an S3-compatible bucket under a key prefix.
#[derive(Clone)]
pub struct S3Storage {
    client: aws_sdk_s3::Client,
    bucket: String,
    prefix: String,
}

impl S3Storage {
    pub fn new(client: aws_sdk_s3::Client, bucket: String, prefix: &str) -> Self {
        Self {
            client,
            bucket,
            prefix: prefix.trim_matches('/').to_string(),
        }
    }

    fn key(&self, name: &str) -> String {
        object_key(&self.prefix, name)
    }
}

fn object_key(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}/{name}")
    }
}

#[async_trait]
impl StorageSink for S3Storage {
    async fn write(&self, name: &str, bytes: Vec<u8>) -> Result<String, StorageError> {
        validate_name(name)?;
        let key = self.key(name);
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(ByteStream::from(bytes))
            .content_type("application/pdf")
            .send()
            .await
            .map_err(|e| StorageError::S3(format!("upload failed: {e}")))?;

        info!("Uploaded s3://{}/{}", self.bucket, key);
        Ok(format!("s3://{}/{}", self.bucket, key))
    }

    async fn read(&self, name: &str) -> Result<Option<Vec<u8>>, StorageError> {
        validate_name(name)?;
        let key = self.key(name);
        let output = match self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(&key)
            .send()
            .await
        {
            Ok(output) => output,
            Err(e) if e.as_service_error().is_some_and(|se| se.is_no_such_key()) => {
                return Ok(None)
            }
            Err(e) => return Err(StorageError::S3(format!("download failed: {e}"))),
        };
        let bytes = output
            .body
            .collect()
            .await
            .map_err(|e| StorageError::S3(format!("download failed: {e}")))?
            .into_bytes();
        debug!("Read s3://{}/{} ({} bytes)", self.bucket, key, bytes.len());
        Ok(Some(bytes.to_vec()))
    }

    async fn delete(&self, name: &str) -> Result<(), StorageError> {
        validate_name(name)?;
        let key = self.key(name);
        // DeleteObject succeeds for keys that do not exist.
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(&key)
            .send()
            .await
            .map_err(|e| StorageError::S3(format!("delete failed: {e}")))?;
        info!("Deleted s3://{}/{}", self.bucket, key);
        Ok(())
    }
}
