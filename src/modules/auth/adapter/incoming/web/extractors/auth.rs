use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Role;
use crate::modules::auth::application::ports::outgoing::{
    TokenBlacklistRepository, TokenProvider,
};
use crate::shared::api::ApiResponse;

/// Caller identity on write paths. Extraction fails on a missing,
/// invalid, expired or blacklisted token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub role: Role,
    /// The raw bearer token, for logout to blacklist.
    pub token: String,
}

/// Caller identity on read paths, used purely for enrichment
/// (own-vote, bookmark flags). An absent or invalid token degrades to
/// anonymous; revocation is enforced where state changes.
#[derive(Debug, Clone)]
pub struct MaybeUser {
    pub user_id: Option<Uuid>,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

fn app_services(
    req: &HttpRequest,
) -> Option<(
    Arc<dyn TokenProvider>,
    Arc<dyn TokenBlacklistRepository>,
)> {
    let provider = req
        .app_data::<actix_web::web::Data<Arc<dyn TokenProvider>>>()?
        .get_ref()
        .clone();
    let blacklist = req
        .app_data::<actix_web::web::Data<Arc<dyn TokenBlacklistRepository>>>()?
        .get_ref()
        .clone();
    Some((provider, blacklist))
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let services = app_services(req);
        let token = extract_token_from_header(req);

        Box::pin(async move {
            let (provider, blacklist) = services
                .ok_or_else(|| create_api_error(ApiResponse::internal_error()))?;

            let token = token.ok_or_else(|| {
                create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))
            })?;

            let claims = provider.verify_token(&token).map_err(|_| {
                create_api_error(ApiResponse::unauthorized(
                    "INVALID_TOKEN",
                    "Invalid or expired token",
                ))
            })?;

            let revoked = blacklist.is_token_blacklisted(&token).await.map_err(|e| {
                tracing::error!("Token blacklist lookup failed: {}", e);
                create_api_error(ApiResponse::internal_error())
            })?;
            if revoked {
                return Err(create_api_error(ApiResponse::unauthorized(
                    "TOKEN_REVOKED",
                    "Token has been revoked",
                )));
            }

            Ok(AuthenticatedUser {
                user_id: claims.sub,
                role: claims.role(),
                token,
            })
        })
    }
}

impl FromRequest for MaybeUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let provider = req
            .app_data::<actix_web::web::Data<Arc<dyn TokenProvider>>>()
            .map(|data| data.get_ref().clone());
        let token = extract_token_from_header(req);

        Box::pin(async move {
            let user_id = match (provider, token) {
                (Some(provider), Some(token)) => {
                    provider.verify_token(&token).ok().map(|claims| claims.sub)
                }
                _ => None,
            };
            Ok(MaybeUser { user_id })
        })
    }
}
