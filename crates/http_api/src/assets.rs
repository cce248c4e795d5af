// The web UI ships separately; the fallback serves this static page so
// the server answers something sensible at "/".
pub const INDEX_HTML: &str = include_str!("../assets/index.html");
