//! Static catalogue images.
//!
//! ```text
//! GET /catalogue/images/{path}
//! ```
//!
//! Files are read through a `cap_std` directory capability, so request paths
//! cannot reach outside the configured images directory.

use std::io;
use std::path::Path;
use std::sync::Arc;

use actix_web::{HttpResponse, get, http::header, web};
use cap_std::{ambient_authority, fs::Dir};
use tracing::{debug, warn};

/// Read-only handle on the images directory.
#[derive(Clone, Debug, Default)]
pub struct ImageStore {
    root: Option<Arc<Dir>>,
}

impl ImageStore {
    /// Open `path` as the images root.
    ///
    /// # Errors
    /// Returns the I/O error when the directory cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let dir = Dir::open_ambient_dir(path, ambient_authority())?;
        Ok(Self {
            root: Some(Arc::new(dir)),
        })
    }

    /// A store with no directory; every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    fn read(&self, relative: &str) -> io::Result<Vec<u8>> {
        match &self.root {
            Some(dir) => dir.read(relative),
            None => Err(io::Error::from(io::ErrorKind::NotFound)),
        }
    }
}

/// Content type for an image file name, chosen by extension.
pub fn content_type_for(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

/// Serve one image file.
#[utoipa::path(
    get,
    path = "/catalogue/images/{path}",
    params(("path" = String, Path, description = "File path relative to the images directory")),
    responses(
        (status = 200, description = "Image bytes", content_type = "application/octet-stream"),
        (status = 404, description = "No such image")
    ),
    tags = ["catalogue"],
    operation_id = "getImage"
)]
#[get("/catalogue/images/{path:.*}")]
pub async fn serve_image(store: web::Data<ImageStore>, path: web::Path<String>) -> HttpResponse {
    let relative = path.into_inner();
    let store = store.get_ref().clone();
    let lookup = relative.clone();
    match web::block(move || store.read(&lookup)).await {
        Ok(Ok(bytes)) => HttpResponse::Ok()
            .insert_header((header::CONTENT_TYPE, content_type_for(&relative)))
            .body(bytes),
        Ok(Err(error)) => {
            debug!(%error, path = relative, "image lookup missed");
            HttpResponse::NotFound().finish()
        }
        Err(error) => {
            warn!(%error, path = relative, "image read task failed");
            HttpResponse::NotFound().finish()
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    use super::*;
    use crate::test_support::cap_fs::write_file;

    /// Temp root holding `images/` plus a sibling file that must stay unreachable.
    #[fixture]
    fn images_dir() -> TempDir {
        let dir = TempDir::new().expect("temp dir");
        write_file(dir.path(), "images/holy_1.jpeg", b"jpeg bytes").expect("write image");
        write_file(dir.path(), "images/nested/cross.PNG", b"png bytes").expect("write image");
        write_file(dir.path(), "secret.txt", b"secret").expect("write sibling");
        dir
    }

    fn open_store(root: &TempDir) -> ImageStore {
        ImageStore::open(root.path().join("images")).expect("open images dir")
    }

    async fn get(store: ImageStore, uri: &str) -> actix_web::dev::ServiceResponse {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .service(serve_image),
        )
        .await;
        actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await
    }

    #[rstest]
    #[case("/catalogue/images/holy_1.jpeg", "image/jpeg", b"jpeg bytes".as_slice())]
    #[case("/catalogue/images/nested/cross.PNG", "image/png", b"png bytes".as_slice())]
    #[actix_web::test]
    async fn serves_files_with_their_content_type(
        images_dir: TempDir,
        #[case] uri: &str,
        #[case] content_type: &str,
        #[case] body: &[u8],
    ) {
        let res = get(open_store(&images_dir), uri).await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            res.headers()
                .get(header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok()),
            Some(content_type)
        );
        assert_eq!(actix_test::read_body(res).await.as_ref(), body);
    }

    #[rstest]
    #[case("/catalogue/images/missing.jpeg")]
    #[case("/catalogue/images/../secret.txt")]
    #[case("/catalogue/images/%2E%2E/secret.txt")]
    #[case("/catalogue/images/nested")]
    #[actix_web::test]
    async fn misses_and_escapes_are_404(images_dir: TempDir, #[case] uri: &str) {
        let res = get(open_store(&images_dir), uri).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn empty_store_never_serves() {
        let res = get(ImageStore::empty(), "/catalogue/images/holy_1.jpeg").await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[rstest]
    #[case("a.jpg", "image/jpeg")]
    #[case("a.JPEG", "image/jpeg")]
    #[case("a.svg", "image/svg+xml")]
    #[case("a", "application/octet-stream")]
    fn content_types_follow_extension(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(content_type_for(name), expected);
    }
}
