use url::Url;

/// Origin the base pathname is resolved against. Only the path survives.
const PLACEHOLDER_ORIGIN: &str = "https://fob.invalid/";

/// Turn a user-supplied base pathname into a path that starts and ends with `/`.
///
/// The input is joined onto a placeholder origin with WHATWG URL semantics,
/// so `docs`, `/docs` and `https://cdn.example.com/docs` all become `/docs/`.
/// Query strings and fragments are dropped. Input the URL parser rejects
/// falls back to `/`.
pub fn normalize_base_pathname(input: Option<&str>) -> String {
    let Some(raw) = input else {
        return "/".to_string();
    };

    let joined = Url::parse(PLACEHOLDER_ORIGIN).and_then(|origin| origin.join(raw));
    let mut pathname = match joined {
        Ok(url) => url.path().to_string(),
        Err(err) => {
            tracing::warn!(base_pathname = raw, error = %err, "unparsable base pathname, using `/`");
            return "/".to_string();
        }
    };

    if !pathname.starts_with('/') {
        pathname.insert(0, '/');
    }
    if !pathname.ends_with('/') {
        pathname.push('/');
    }
    pathname
}
