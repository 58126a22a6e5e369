//! Cloudinary unsigned-upload adapter.
//!
//! Posts the file as multipart form data (`file` + `upload_preset`) and returns
//! the `secure_url` of the stored image.

use async_trait::async_trait;
use gloo_net::http::Request;
use js_sys::{Array, Uint8Array};
use serde::Deserialize;
use web_sys::{Blob, BlobPropertyBag, FormData};

use nutri_core::ports::{ImageHostPort, UploadRequest};
use nutri_types::{NutriError, Result, upload::SelectedFile};

pub const CLOUDINARY_BASE_URL: &str = "https://api.cloudinary.com/v1_1";

pub struct CloudinaryUploader {
    base_url: String,
}

impl CloudinaryUploader {
    pub fn new() -> Self {
        Self {
            base_url: CLOUDINARY_BASE_URL.to_string(),
        }
    }
}

impl Default for CloudinaryUploader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn upload_url(base_url: &str, cloud_name: &str) -> String {
    format!("{}/{}/image/upload", base_url.trim_end_matches('/'), cloud_name)
}

fn js_err(e: wasm_bindgen::JsValue) -> NutriError {
    NutriError::JsInterop(format!("{:?}", e))
}

fn file_blob(file: &SelectedFile) -> Result<Blob> {
    let bytes = Uint8Array::from(file.bytes.as_slice());
    let parts = Array::new();
    parts.push(&bytes);

    let options = BlobPropertyBag::new();
    options.set_type(&file.mime_type);
    Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)
}

fn form_data(req: &UploadRequest) -> Result<FormData> {
    let form = FormData::new().map_err(js_err)?;
    let blob = file_blob(&req.file)?;
    form.append_with_blob_and_filename("file", &blob, &req.file.name)
        .map_err(js_err)?;
    form.append_with_str("upload_preset", &req.credentials.upload_preset)
        .map_err(js_err)?;
    Ok(form)
}

#[derive(Deserialize)]
pub struct UploadReply {
    pub secure_url: Option<String>,
    pub error: Option<UploadError>,
}

#[derive(Deserialize)]
pub struct UploadError {
    pub message: Option<String>,
}

#[async_trait(?Send)]
impl ImageHostPort for CloudinaryUploader {
    async fn upload(&self, req: UploadRequest) -> Result<String> {
        let url = upload_url(&self.base_url, &req.credentials.cloud_name);
        let form = form_data(&req)?;
        log::info!("Uploading {} ({} bytes)", req.file.name, req.file.size());

        // No Content-Type header: the browser adds the multipart boundary
        let response = Request::post(&url)
            .body(form)
            .map_err(|e| NutriError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| NutriError::Network(e.to_string()))?;

        let ok = response.ok();
        let status = response.status();
        let reply: Option<UploadReply> = response.json().await.ok();

        interpret(ok, status, reply)
    }
}

/// Map a decoded reply to the secure URL or an error
pub fn interpret(ok: bool, status: u16, reply: Option<UploadReply>) -> Result<String> {
    if !ok {
        let message = reply
            .and_then(|r| r.error)
            .and_then(|e| e.message)
            .unwrap_or_else(|| format!("Upload failed with status: {}", status));
        return Err(NutriError::Http {
            status,
            message: Some(message),
        });
    }

    reply
        .and_then(|r| r.secure_url)
        .filter(|u| !u.is_empty())
        .ok_or_else(|| NutriError::MalformedResponse("upload response has no secure_url".to_string()))
}
