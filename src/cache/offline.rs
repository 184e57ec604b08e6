//! Typed offline fallback responses, one per content class.

use crate::cache::entry::{Request, StoredResponse};

/// Served to HTML navigations when no shell page is cached.
const OFFLINE_NOTICE: &str = "<!doctype html>\
<html lang=\"en\"><head><meta charset=\"utf-8\"><title>Offline</title></head>\
<body><h1>You are offline</h1>\
<p>This page is not available without a network connection.</p>\
</body></html>";

/// Inline placeholder graphic for image requests.
const PLACEHOLDER_SVG: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\" \
width=\"200\" height=\"200\" viewBox=\"0 0 200 200\">\
<rect width=\"200\" height=\"200\" fill=\"#e0e0e0\"/>\
<text x=\"100\" y=\"104\" text-anchor=\"middle\" font-family=\"sans-serif\" \
font-size=\"14\" fill=\"#888\">offline</text></svg>";

const OFFLINE_CSS: &str = "body { background: #f0f0f0; }";

const OFFLINE_JS: &str = "console.log(\"Offline mode\");";

/// Pick the fallback for a failed fetch by content class. `shell` is the
/// precached shell page, when one exists.
pub fn fallback_for(request: &Request, shell: Option<StoredResponse>) -> StoredResponse {
    if request.wants_html() {
        return shell.unwrap_or_else(|| StoredResponse::html(OFFLINE_NOTICE));
    }
    if request.wants_image() {
        return StoredResponse::ok("image/svg+xml", PLACEHOLDER_SVG);
    }
    if request.is_stylesheet() {
        return StoredResponse::ok("text/css", OFFLINE_CSS);
    }
    if request.is_script() {
        return StoredResponse::ok("application/javascript", OFFLINE_JS);
    }
    // Distinguishable from any real response the app serves.
    StoredResponse::new(408, "text/plain", "Offline")
}
