use std::io::Cursor;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::LlmError;
use crate::model::{GenerativeModel, Part};

/// Model double that returns a canned reply and records every prompt.
pub(crate) struct StubModel {
    reply: Result<String, u16>,
    pub(crate) calls: Mutex<Vec<Vec<Part>>>,
}

impl StubModel {
    pub(crate) fn replying(reply: &str) -> Self {
        Self { reply: Ok(reply.to_owned()), calls: Mutex::new(Vec::new()) }
    }

    pub(crate) fn failing(code: u16) -> Self {
        Self { reply: Err(code), calls: Mutex::new(Vec::new()) }
    }

    pub(crate) fn last_call(&self) -> Vec<Part> {
        self.calls.lock().unwrap().last().cloned().unwrap_or_default()
    }
}

#[async_trait]
impl GenerativeModel for StubModel {
    async fn generate(&self, parts: &[Part]) -> Result<String, LlmError> {
        self.calls.lock().unwrap().push(parts.to_vec());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(code) => Err(LlmError::HttpStatus { code: *code, body: "stub failure".to_owned() }),
        }
    }
}

pub(crate) fn tiny_image(format: image::ImageFormat) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(2, 2, image::Rgb([255, 255, 255]));
    let mut buf = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(img).write_to(&mut buf, format).unwrap();
    buf.into_inner()
}

pub(crate) fn tiny_png() -> Vec<u8> {
    tiny_image(image::ImageFormat::Png)
}
