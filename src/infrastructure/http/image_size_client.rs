//! Learns image dimensions by downloading the image and reading its header.

use std::io::Cursor;

use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use image::ImageReader;
use reqwest::Client;
use tracing::debug;

use super::{DEFAULT_TIMEOUT_SECS, USER_AGENT, map_request_error};
use crate::domain::errors::EmbedError;
use crate::domain::ports::{ImageSize, ImageSizePort};

/// Images larger than this are not downloaded just to be measured.
pub const MAX_IMAGE_BYTES: u64 = 20 * 1024 * 1024;

/// Image size probe backed by reqwest and the `image` decoders.
pub struct HttpImageSizeClient {
    client: Client,
    max_bytes: u64,
}

impl HttpImageSizeClient {
    /// Creates new client with the default timeout.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new() -> Result<Self, EmbedError> {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    /// Creates client with a custom timeout.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_timeout(timeout_secs: u64) -> Result<Self, EmbedError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| EmbedError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            max_bytes: MAX_IMAGE_BYTES,
        })
    }

    /// Overrides the download cap.
    #[must_use]
    pub const fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Downloads the body, giving up once it passes `max_bytes` whether or
    /// not the server announced a length.
    async fn download(&self, uri: &str) -> Result<Bytes, EmbedError> {
        let mut response = self
            .client
            .get(uri)
            .send()
            .await
            .map_err(|e| map_request_error(&e))?;

        if !response.status().is_success() {
            return Err(EmbedError::image_size(
                uri,
                format!(
                    "HTTP {}: {}",
                    response.status(),
                    response.status().canonical_reason().unwrap_or("Unknown")
                ),
            ));
        }

        if let Some(len) = response.content_length()
            && len > self.max_bytes
        {
            return Err(EmbedError::image_size(uri, format!("image too large ({len} bytes)")));
        }

        let capacity = response.content_length().unwrap_or(0).min(self.max_bytes);
        let mut body = BytesMut::with_capacity(usize::try_from(capacity).unwrap_or(0));
        let mut total: u64 = 0;

        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| EmbedError::image_size(uri, format!("failed to read body: {e}")))?
        {
            total = total.saturating_add(chunk.len() as u64);
            if total > self.max_bytes {
                return Err(EmbedError::image_size(
                    uri,
                    format!("image too large (over {} bytes)", self.max_bytes),
                ));
            }
            body.extend_from_slice(&chunk);
        }

        Ok(body.freeze())
    }
}

/// Reads the dimensions from an encoded image header.
///
/// # Errors
/// Returns error if the format is unknown or the header is malformed.
pub fn decode_dimensions(uri: &str, bytes: &[u8]) -> Result<ImageSize, EmbedError> {
    let (width, height) = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| EmbedError::image_size(uri, e.to_string()))?
        .into_dimensions()
        .map_err(|e| EmbedError::image_size(uri, e.to_string()))?;

    Ok(ImageSize::new(width, height))
}

#[async_trait]
impl ImageSizePort for HttpImageSizeClient {
    async fn image_size(&self, uri: &str) -> Result<ImageSize, EmbedError> {
        debug!(uri, "Downloading image to measure it");
        let bytes = self.download(uri).await?;

        let owned_uri = uri.to_string();
        tokio::task::spawn_blocking(move || decode_dimensions(&owned_uri, &bytes))
            .await
            .map_err(|e| EmbedError::unexpected(format!("decode task panicked: {e}")))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn encode_png(width: u32, height: u32) -> Vec<u8> {
        let image = image::RgbImage::new(width, height);
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .expect("encode png");
        bytes
    }

    #[test]
    fn test_decode_dimensions_from_png_header() {
        let size = decode_dimensions("mem://a.png", &encode_png(7, 3)).expect("png");
        assert_eq!(size, ImageSize::new(7, 3));
    }

    #[test]
    fn test_decode_dimensions_rejects_garbage() {
        let err = decode_dimensions("mem://a.png", b"definitely not an image").expect_err("garbage");
        assert!(matches!(err, EmbedError::ImageSize { .. }));
    }

    /// Serves `body` once with no `Content-Length`, delimited by closing the connection.
    async fn serve_unsized(body: Vec<u8>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");

        tokio::spawn(async move {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let mut request = [0u8; 4096];
            let _ = socket.read(&mut request).await;
            let head = b"HTTP/1.1 200 OK\r\nContent-Type: image/png\r\nConnection: close\r\n\r\n";
            let _ = socket.write_all(head).await;
            let _ = socket.write_all(&body).await;
            let _ = socket.shutdown().await;
        });

        format!("http://{addr}/image.png")
    }

    #[tokio::test]
    async fn test_body_without_length_is_capped() {
        let mut body = encode_png(7, 3);
        body.extend(std::iter::repeat_n(0u8, 64 * 1024));
        let uri = serve_unsized(body).await;
        let client = HttpImageSizeClient::new().expect("client").with_max_bytes(16 * 1024);

        let err = client.image_size(&uri).await.expect_err("over the cap");

        match err {
            EmbedError::ImageSize { message, .. } => assert!(message.contains("too large")),
            other => panic!("Expected image size error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_body_without_length_under_cap_is_measured() {
        let uri = serve_unsized(encode_png(7, 3)).await;
        let client = HttpImageSizeClient::new().expect("client").with_max_bytes(16 * 1024);

        let size = client.image_size(&uri).await.expect("measured");

        assert_eq!(size, ImageSize::new(7, 3));
    }
}
