/// Turns an `<img src>` value into an absolute URL
///
/// | Input            | Output                  |
/// |------------------|-------------------------|
/// | `http…`          | unchanged               |
/// | `//host/a.png`   | `https://host/a.png`    |
/// | `/a.png`         | `<origin>/a.png`        |
/// | `a.png`          | `<origin>/a.png`        |
///
/// # Examples
///
/// ```
/// use boj_notion::url::normalize_image_url;
///
/// let url = normalize_image_url("/upload/images/a.png", "https://www.acmicpc.net");
/// assert_eq!(url, "https://www.acmicpc.net/upload/images/a.png");
/// ```
pub fn normalize_image_url(src: &str, origin: &str) -> String {
    let origin = origin.trim_end_matches('/');

    if src.starts_with("http") {
        src.to_string()
    } else if let Some(rest) = src.strip_prefix("//") {
        format!("https://{}", rest)
    } else if src.starts_with('/') {
        format!("{}{}", origin, src)
    } else {
        format!("{}/{}", origin, src)
    }
}
