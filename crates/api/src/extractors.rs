//! Request extractors.

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::{StatusCode, request::Parts},
};
use kinoteka_common::client_ip::{FORWARDED_FOR_HEADER, resolve_client_ip};
use kinoteka_db::entities::user;

/// Authenticated user extractor.
#[derive(Debug, Clone)]
pub struct AuthUser(pub user::Model);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Get user from request extensions (set by auth middleware)
        parts
            .extensions
            .get::<user::Model>()
            .cloned()
            .map(AuthUser)
            .ok_or((StatusCode::UNAUTHORIZED, "Unauthorized"))
    }
}

/// Optional authenticated user extractor.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<user::Model>);

impl<S> FromRequestParts<S> for MaybeAuthUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(parts.extensions.get::<user::Model>().cloned()))
    }
}

/// Resolved client identity extractor.
///
/// First entry of the forwarded-for header when present, otherwise the remote
/// address of the connection. Always succeeds; the identity may be empty when
/// no metadata is available at all (e.g. in tests without connect info).
#[derive(Debug, Clone)]
pub struct ClientIp(pub String);

impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let forwarded = parts
            .headers
            .get(FORWARDED_FOR_HEADER)
            .and_then(|value| value.to_str().ok());

        let remote = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip());

        Ok(Self(resolve_client_ip(forwarded, remote)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract_ip(request: Request<()>) -> String {
        let (mut parts, ()) = request.into_parts();
        let ClientIp(ip) = ClientIp::from_request_parts(&mut parts, &()).await.unwrap();
        ip
    }

    #[tokio::test]
    async fn test_client_ip_prefers_forwarded_header() {
        let request = Request::builder()
            .header(FORWARDED_FOR_HEADER, "203.0.113.7, 10.0.0.2")
            .body(())
            .unwrap();

        assert_eq!(extract_ip(request).await, "203.0.113.7");
    }

    #[tokio::test]
    async fn test_client_ip_falls_back_to_connect_info() {
        let mut request = Request::builder().body(()).unwrap();
        request
            .extensions_mut()
            .insert(ConnectInfo(SocketAddr::from(([10, 0, 0, 1], 4000))));

        assert_eq!(extract_ip(request).await, "10.0.0.1");
    }

    #[tokio::test]
    async fn test_client_ip_without_metadata_is_empty() {
        let request = Request::builder().body(()).unwrap();

        assert_eq!(extract_ip(request).await, "");
    }
}
