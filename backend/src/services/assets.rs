//! Serves the compiled frontend bundle embedded into the binary.
//!
//! The site routes pages on the client, so any path that does not name an
//! embedded file and does not look like a file itself is answered with
//! `index.html`. Missing files (paths with an extension) get a 404 rather
//! than the HTML shell.

use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use log::debug;
use mime_guess::from_path;
use std::path::Path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";

pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    respond(&STATIC_DIR, req.path())
}

/// Resolves `request_path` against `dir`.
pub fn respond(dir: &Dir, request_path: &str) -> HttpResponse {
    let path = request_path.trim_start_matches('/');
    let file_path = if path.is_empty() { INDEX } else { path };

    if let Some(file) = dir.get_file(file_path) {
        let mime = from_path(file_path).first_or_octet_stream();
        return HttpResponse::Ok()
            .content_type(mime.as_ref())
            .body(file.contents().to_vec());
    }

    if Path::new(file_path).extension().is_some() {
        debug!("No embedded asset for {}", request_path);
        return HttpResponse::NotFound().body("Not Found");
    }

    match dir.get_file(INDEX) {
        Some(index) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(index.contents().to_vec()),
        None => HttpResponse::NotFound().body("Not Found"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::{header, StatusCode};
    use include_dir::{DirEntry, File};

    static BUNDLE: Dir = Dir::new(
        "",
        &[
            DirEntry::File(File::new("index.html", b"<html>igtf</html>")),
            DirEntry::File(File::new("main.css", b"body{}")),
            DirEntry::Dir(Dir::new(
                "pkg",
                &[DirEntry::File(File::new("pkg/app.wasm", b"\0asm"))],
            )),
        ],
    );

    static EMPTY: Dir = Dir::new("", &[]);

    async fn body_of(response: HttpResponse) -> Vec<u8> {
        to_bytes(response.into_body()).await.unwrap().to_vec()
    }

    fn content_type(response: &HttpResponse) -> String {
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    #[actix_web::test]
    async fn root_serves_index() {
        let response = respond(&BUNDLE, "/");
        assert_eq!(response.status(), StatusCode::OK);
        assert!(content_type(&response).starts_with("text/html"));
        assert_eq!(body_of(response).await, b"<html>igtf</html>");
    }

    #[actix_web::test]
    async fn embedded_asset_gets_its_mime_type() {
        let response = respond(&BUNDLE, "/main.css");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(content_type(&response), "text/css");
    }

    #[actix_web::test]
    async fn nested_asset_is_found() {
        let response = respond(&BUNDLE, "/pkg/app.wasm");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(content_type(&response), "application/wasm");
    }

    #[actix_web::test]
    async fn client_route_falls_back_to_index() {
        for path in ["/categories", "/visitors/", "/exhibition"] {
            let response = respond(&BUNDLE, path);
            assert_eq!(response.status(), StatusCode::OK, "{path}");
            assert_eq!(body_of(response).await, b"<html>igtf</html>");
        }
    }

    #[actix_web::test]
    async fn missing_file_is_not_found() {
        let response = respond(&BUNDLE, "/categories/spices.webp");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn missing_bundle_is_not_found() {
        let response = respond(&EMPTY, "/");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
