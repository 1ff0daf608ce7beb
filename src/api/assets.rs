// src/api/assets.rs
use std::path::{Path, PathBuf};

use actix_files::{Files, NamedFile};
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
use actix_web::HttpResponse;

const ROOT_DOCUMENT: &str = "index.html";

/// Serves the prebuilt frontend from `dir`, mounted at `/`.
///
/// Paths that match no file fall back to `index.html` so client-side routes
/// resolve. If the root document itself is missing the answer is 404.
pub fn static_files(dir: &Path) -> Files {
    let root_document: PathBuf = dir.join(ROOT_DOCUMENT);

    Files::new("/", dir)
        .index_file(ROOT_DOCUMENT)
        .prefer_utf8(true)
        .default_handler(fn_service(move |req: ServiceRequest| {
            let root_document = root_document.clone();
            async move {
                let (req, _) = req.into_parts();
                let res = match NamedFile::open_async(&root_document).await {
                    Ok(file) => file.into_response(&req),
                    Err(e) => {
                        log::warn!("Cannot serve {}: {}", root_document.display(), e);
                        HttpResponse::NotFound().body("404 Not Found")
                    }
                };
                Ok::<_, actix_web::Error>(ServiceResponse::new(req, res))
            }
        }))
}
