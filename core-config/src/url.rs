//! URL building with colon-parameter substitution.

use std::borrow::Cow;

/// Build a request URL from a base and a colon-parameterized template.
///
/// A path segment `:name` is replaced by the matching value from `params`,
/// URL-encoded. Substitution is by exact token match per segment;
/// unmatched tokens are left intact and surface as a 404 downstream.
pub fn build_url(base: &str, template: &str, params: &[(&str, &str)]) -> String {
    let path: Vec<Cow<'_, str>> = template
        .split('/')
        .map(|segment| match segment.strip_prefix(':') {
            Some(name) => params
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| Cow::Owned(urlencoding::encode(value).into_owned()))
                .unwrap_or(Cow::Borrowed(segment)),
            None => Cow::Borrowed(segment),
        })
        .collect();

    format!("{}{}", base.trim_end_matches('/'), path.join("/"))
}
