// ============================================================================
// URLS - Endpoints REST y objetos públicos de storage
// ============================================================================

use ::url::{form_urlencoded, Url};
use crate::error::FetchError;

fn parse_base(base_url: &str) -> Result<Url, FetchError> {
    Url::parse(base_url).map_err(|e| FetchError::Network(format!("invalid base URL {}: {}", base_url, e)))
}

/// Construye `{base}/{segmentos...}` codificando cada segmento
pub fn endpoint_url<'a, I>(base_url: &str, segments: I) -> Result<Url, FetchError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut url = parse_base(base_url)?;
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|_| FetchError::Network(format!("base URL cannot hold a path: {}", base_url)))?;
        path.pop_if_empty();
        path.extend(segments.into_iter().filter(|s| !s.is_empty()));
    }
    Ok(url)
}

/// URL pública de un objeto: `{base}/storage/v1/object/public/{bucket}/{path}`
pub fn public_object_url(base_url: &str, bucket: &str, path: &str) -> Result<String, FetchError> {
    let segments = ["storage", "v1", "object", "public", bucket]
        .into_iter()
        .chain(path.split('/'));
    endpoint_url(base_url, segments).map(|url| url.to_string())
}

/// Codifica pares `clave=valor` para el query string de PostgREST
pub fn encode_query<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}
