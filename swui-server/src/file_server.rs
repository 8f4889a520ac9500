//! File server over an in-memory asset bundle
//!
//! Semantics follow a conventional static file server:
//! - `dir/` serves `dir/index.html`, `.../index.html` redirects to `./`
//! - a directory named without its trailing slash redirects to `name/`
//! - single byte ranges are honoured, multiple ranges get the full body
//! - `Last-Modified` / `If-Modified-Since` / `If-Range` use the asset mtime
//! - anything missing is a 404

use axum::body::Body;
use axum::http::{header, HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use http_range_header::parse_range_header;
use percent_encoding::percent_decode_str;
use std::time::SystemTime;
use swui_core::{Asset, AssetBundle};
use tracing::debug;

const INDEX_PAGE: &str = "index.html";

/// Serve `uri` (already relative to the mount) from `bundle`.
///
/// `original` is the URI as the client sent it, before any prefix was
/// stripped; it decides whether the mount root needs a trailing slash.
pub fn serve(
    bundle: &AssetBundle,
    method: &Method,
    uri: &Uri,
    original: &Uri,
    headers: &HeaderMap,
) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            [(header::ALLOW, "GET, HEAD")],
        )
            .into_response();
    }

    let Ok(decoded) = percent_decode_str(uri.path()).decode_utf8() else {
        return not_found(uri);
    };
    let path = decoded.trim_start_matches('/');
    if path.split('/').any(|segment| segment == "..") {
        return not_found(uri);
    }

    if path == INDEX_PAGE || path.ends_with("/index.html") {
        return redirect("./".to_string(), uri);
    }

    let response = if path.is_empty() || path.ends_with('/') {
        let dir = path.trim_end_matches('/');
        if !bundle.is_dir(dir) {
            return not_found(uri);
        }
        if !original.path().ends_with('/') {
            // Mount root requested as `/name`; relative asset links need `/name/`
            return redirect(format!("{}/", original.path()), original);
        }

        let index = if dir.is_empty() {
            INDEX_PAGE.to_string()
        } else {
            format!("{dir}/{INDEX_PAGE}")
        };
        match bundle.get(&index) {
            Some(asset) => asset_response(asset, &index, headers),
            None => not_found(uri),
        }
    } else if let Some(asset) = bundle.get(path) {
        asset_response(asset, path, headers)
    } else if bundle.is_dir(path) {
        let name = path.rsplit('/').next().unwrap_or(path);
        return redirect(format!("{name}/"), uri);
    } else {
        return not_found(uri);
    };

    if method == Method::HEAD {
        let (parts, _) = response.into_parts();
        return Response::from_parts(parts, Body::empty());
    }
    response
}

fn asset_response(asset: &Asset, path: &str, request: &HeaderMap) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(header::ACCEPT_RANGES, HeaderValue::from_static("bytes"));

    if let Some(modified) = asset.last_modified() {
        insert(&mut headers, header::LAST_MODIFIED, &http_date(modified));
        if not_modified(request, modified) {
            return (StatusCode::NOT_MODIFIED, headers).into_response();
        }
    }

    let len = asset.len() as u64;
    let range = request
        .get(header::RANGE)
        .and_then(|v| v.to_str().ok())
        .filter(|_| if_range_allows(request, asset.last_modified()))
        .map(|r| ByteRange::parse(r, len))
        .unwrap_or(ByteRange::Full);

    let mime = mime_guess::from_path(path).first_or_octet_stream();

    match range {
        ByteRange::Full => {
            insert(&mut headers, header::CONTENT_TYPE, mime.as_ref());
            headers.insert(header::CONTENT_LENGTH, HeaderValue::from(len));
            (StatusCode::OK, headers, asset.data().clone()).into_response()
        }
        ByteRange::Partial { start, end } => {
            insert(&mut headers, header::CONTENT_TYPE, mime.as_ref());
            insert(
                &mut headers,
                header::CONTENT_RANGE,
                &format!("bytes {start}-{end}/{len}"),
            );
            headers.insert(header::CONTENT_LENGTH, HeaderValue::from(end - start + 1));
            let body = asset.data().slice(start as usize..=end as usize);
            (StatusCode::PARTIAL_CONTENT, headers, body).into_response()
        }
        ByteRange::Unsatisfiable => {
            debug!("Unsatisfiable range for {} ({} bytes)", path, len);
            insert(&mut headers, header::CONTENT_RANGE, &format!("bytes */{len}"));
            (StatusCode::RANGE_NOT_SATISFIABLE, headers).into_response()
        }
    }
}

/// Outcome of interpreting a `Range` header against a body length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteRange {
    /// No usable range: send everything
    Full,
    /// Inclusive byte offsets
    Partial { start: u64, end: u64 },
    Unsatisfiable,
}

impl ByteRange {
    /// Only single `bytes=` ranges are honoured. Other units and multi-range
    /// requests fall back to the full body.
    pub fn parse(header: &str, len: u64) -> Self {
        if !header.trim_start().starts_with("bytes=") {
            return ByteRange::Full;
        }
        if len == 0 {
            return ByteRange::Unsatisfiable;
        }

        let ranges = match parse_range_header(header.trim()).and_then(|r| r.validate(len)) {
            Ok(ranges) => ranges,
            Err(_) => return ByteRange::Unsatisfiable,
        };
        match ranges.as_slice() {
            [range] => ByteRange::Partial {
                start: *range.start(),
                end: *range.end(),
            },
            _ => ByteRange::Full,
        }
    }
}

/// IMF-fixdate, as sent in `Last-Modified`
pub fn http_date(time: DateTime<Utc>) -> String {
    httpdate::fmt_http_date(SystemTime::from(time))
}

/// Accepts all three HTTP date formats (IMF-fixdate, RFC 850, asctime)
fn parse_http_date(value: &HeaderValue) -> Option<DateTime<Utc>> {
    let value = value.to_str().ok()?;
    httpdate::parse_http_date(value).ok().map(DateTime::<Utc>::from)
}

/// HTTP dates have whole-second resolution
fn not_modified(request: &HeaderMap, modified: DateTime<Utc>) -> bool {
    request
        .get(header::IF_MODIFIED_SINCE)
        .and_then(parse_http_date)
        .map(|since| modified.timestamp() <= since.timestamp())
        .unwrap_or(false)
}

fn if_range_allows(request: &HeaderMap, modified: Option<DateTime<Utc>>) -> bool {
    let Some(if_range) = request.get(header::IF_RANGE) else {
        return true;
    };
    match (parse_http_date(if_range), modified) {
        (Some(date), Some(modified)) => date.timestamp() == modified.timestamp(),
        _ => false,
    }
}

fn insert(headers: &mut HeaderMap, name: HeaderName, value: &str) {
    if let Ok(value) = HeaderValue::from_str(value) {
        headers.insert(name, value);
    }
}

fn redirect(location: String, uri: &Uri) -> Response {
    let location = match uri.query() {
        Some(query) => format!("{location}?{query}"),
        None => location,
    };
    (
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, location)],
    )
        .into_response()
}

fn not_found(uri: &Uri) -> Response {
    debug!("No asset for {}", uri.path());
    (StatusCode::NOT_FOUND, "404 page not found").into_response()
}
