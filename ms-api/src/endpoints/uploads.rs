//! Media upload.
//!
//! An upload is two calls: the raw file is PUT to the server's file-server
//! area, then `CreateMediaUpload` tells the service to ingest it and returns
//! the id of the processing job. The second call is only made once the first
//! has returned 201.

use std::io;
use std::path::Path;
use std::time::Duration;

use reqwest::StatusCode;
use tracing::{info, warn};

use ms_core::error::{MsError, MsResult};
use ms_models::{NewMediaUpload, StringValue};

use super::resource::PRESENTATIONS;
use crate::client::MediasiteClient;
use crate::device::DeviceClient;
use crate::query::entity_path;
use crate::response::{expect_status, ApiResponse, Exchange};

/// Path segments of an uploaded file below the file-server root.
fn file_server_segments<'a>(presentation_id: &'a str, file_name: &'a str) -> [&'a str; 4] {
    ["FileServer", "Presentation", presentation_id, file_name]
}

fn file_server_path(presentation_id: &str, file_name: &str) -> String {
    file_server_segments(presentation_id, file_name).join("/")
}

fn media_upload_path(presentation_id: &str) -> String {
    format!("{}/CreateMediaUpload", entity_path(PRESENTATIONS, presentation_id))
}

fn file_name_of(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
}

impl MediasiteClient {
    /// PUT the file to the file server.
    async fn put_media(&self, presentation_id: &str, path: &Path, file_name: &str) -> MsResult<Exchange> {
        let config = self.config()?;
        let device = DeviceClient::file_server(config)?;
        let segments = file_server_segments(presentation_id, file_name);
        info!("uploading {} to {}{}", path.display(), device.base_url(), segments.join("/"));
        Ok(device
            .put_file(&segments, path, Duration::from_millis(config.upload_timeout_ms))
            .await)
    }

    /// Upload a media file and start ingesting it. Returns the job id.
    pub async fn upload_media_file(&self, presentation_id: &str, path: &Path) -> MsResult<String> {
        let file_name = file_name_of(path).ok_or_else(|| {
            MsError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("no file name in {}", path.display()),
            ))
        })?;
        let exchange = self.put_media(presentation_id, path, &file_name).await?;
        expect_status(StatusCode::CREATED, exchange)?;
        self.post_media_upload(presentation_id, &file_name).await
    }

    /// Upload a media file under `send_as_name`, recording each step's
    /// outcome instead of failing.
    ///
    /// The returned envelope describes the file transfer. When it succeeded,
    /// `inner` holds the `CreateMediaUpload` envelope, whose `value` is the
    /// job id.
    pub async fn upload_media_file_with_response(
        &self,
        presentation_id: &str,
        path: &Path,
        send_as_name: &str,
    ) -> ApiResponse<String> {
        let resource = file_server_path(presentation_id, send_as_name);
        let exchange = match self.put_media(presentation_id, path, send_as_name).await {
            Ok(exchange) => exchange,
            Err(e) => return ApiResponse::failed(&resource, e.to_string()),
        };

        let uploaded = ApiResponse::from_exchange(StatusCode::CREATED, exchange);
        if !uploaded.success {
            warn!(
                "upload of {} failed: {} {}",
                send_as_name, uploaded.status, uploaded.status_text
            );
            return uploaded;
        }

        let registered = self.post_media_upload_with_response(presentation_id, send_as_name).await;
        uploaded.with_inner(registered)
    }

    /// Register an uploaded file with its presentation. Returns the job id.
    pub async fn post_media_upload(&self, presentation_id: &str, file_name: &str) -> MsResult<String> {
        let resource = media_upload_path(presentation_id);
        let body = NewMediaUpload {
            file_name: file_name.to_string(),
        };
        let result: StringValue = self.post_json(&resource, &body, StatusCode::OK).await?;
        let job_id = result.value.ok_or_else(|| {
            MsError::Serialization(format!("{resource}: response carried no job id"))
        })?;
        info!("media upload {} queued as job {}", file_name, job_id);
        Ok(job_id)
    }

    /// Envelope form of [`post_media_upload`](Self::post_media_upload).
    pub async fn post_media_upload_with_response(
        &self,
        presentation_id: &str,
        file_name: &str,
    ) -> ApiResponse<String> {
        let resource = media_upload_path(presentation_id);
        let body = NewMediaUpload {
            file_name: file_name.to_string(),
        };
        let exchange = match self.post(&resource, &body).await {
            Ok(exchange) => exchange,
            Err(e) => return ApiResponse::failed(&resource, e.to_string()),
        };

        let job_id = if exchange.is(StatusCode::OK) {
            exchange.json::<StringValue>().ok().and_then(|v| v.value)
        } else {
            None
        };
        if let Some(job_id) = &job_id {
            info!("media upload {} queued as job {}", file_name, job_id);
        }
        ApiResponse::from_exchange(StatusCode::OK, exchange).with_value(job_id)
    }
}
