/// Profile handlers: profile fetch and profile-picture upload.
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use futures_util::StreamExt;
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::middleware::SessionUser;
use crate::models::ProfileUser;
use crate::services;

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub success: bool,
    pub user: ProfileUser,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    pub profilepic: String,
}

/// GET /api/profile
pub async fn get_profile(pool: web::Data<PgPool>, session: SessionUser) -> Result<HttpResponse> {
    let user = services::profile::fetch(&pool, session.user_id).await?;

    Ok(HttpResponse::Ok().json(ProfileResponse {
        success: true,
        user,
    }))
}

/// POST /api/upload
///
/// Accepts a multipart `image` field, writes it under a fresh name in the
/// uploads directory, and stores the filename on the user record. The file
/// is then served statically under `/images/uploads/`.
pub async fn upload_profile_pic(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    session: SessionUser,
    mut payload: Multipart,
) -> Result<HttpResponse> {
    let image = read_image_field(&mut payload, config.uploads.max_bytes).await?;

    let filename = format!("{}.{}", Uuid::new_v4(), image.extension);
    let dest = std::path::Path::new(&config.uploads.dir).join(&filename);

    tokio::fs::write(&dest, &image.bytes)
        .await
        .map_err(|e| AppError::Internal(format!("failed to store upload: {}", e)))?;

    let profilepic = services::profile::set_picture(&pool, session.user_id, &filename).await?;

    Ok(HttpResponse::Ok().json(UploadResponse {
        success: true,
        message: "Profile picture updated".to_string(),
        profilepic,
    }))
}

struct UploadedImage {
    bytes: Vec<u8>,
    extension: String,
}

/// Read the `image` field out of the multipart payload, enforcing the
/// image content type and the size cap.
async fn read_image_field(payload: &mut Multipart, max_bytes: usize) -> Result<UploadedImage> {
    while let Some(item) = payload.next().await {
        let mut field =
            item.map_err(|e| AppError::InvalidArgument(format!("multipart error: {}", e)))?;

        if field.name() != "image" {
            // Drain and ignore unknown fields.
            while field.next().await.is_some() {}
            continue;
        }

        match field.content_type() {
            Some(ct) if ct.type_() == mime::IMAGE => {}
            _ => {
                return Err(AppError::InvalidArgument(
                    "An image file is required".to_string(),
                ))
            }
        }

        let extension = file_extension(
            field.content_disposition().get_filename(),
            field.content_type().map(|ct| ct.subtype().as_str().to_string()),
        );

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let data =
                chunk.map_err(|e| AppError::InvalidArgument(format!("upload read error: {}", e)))?;
            if bytes.len() + data.len() > max_bytes {
                return Err(AppError::InvalidArgument(
                    "Image exceeds the maximum upload size".to_string(),
                ));
            }
            bytes.extend_from_slice(&data);
        }

        if bytes.is_empty() {
            return Err(AppError::InvalidArgument(
                "An image file is required".to_string(),
            ));
        }

        return Ok(UploadedImage { bytes, extension });
    }

    Err(AppError::InvalidArgument(
        "An image file is required".to_string(),
    ))
}

/// Pick a file extension for the stored image: the client filename's
/// extension when present, otherwise the MIME subtype.
fn file_extension(filename: Option<&str>, mime_subtype: Option<String>) -> String {
    if let Some(name) = filename {
        if name.contains('.') {
            if let Some(ext) = name.rsplit('.').next() {
                if !ext.is_empty() {
                    return ext.to_lowercase();
                }
            }
        }
    }

    mime_subtype.unwrap_or_else(|| "png".to_string())
}
