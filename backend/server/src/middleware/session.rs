/// Cookie session guard.
///
/// Wraps every protected scope: extracts the session cookie, verifies the
/// token, and attaches the decoded identity to the request before any
/// handler runs. Requests without a verifiable token are answered with 401
/// directly from the middleware and never reach a handler. The verifying
/// codec is injected at construction.
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::error::ResponseError;
use actix_web::{web, Error, FromRequest, HttpMessage, HttpRequest};
use auth_crypto::TokenCodec;
use futures_util::future::{ready, LocalBoxFuture, Ready};
use std::rc::Rc;
use uuid::Uuid;

use crate::error::AppError;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "token";

/// Identity decoded from a verified session token.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub user_id: Uuid,
    pub email: String,
}

pub struct SessionGuard {
    codec: web::Data<TokenCodec>,
}

impl SessionGuard {
    pub fn new(codec: web::Data<TokenCodec>) -> Self {
        Self { codec }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = SessionGuardService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionGuardService {
            service: Rc::new(service),
            codec: self.codec.clone(),
        }))
    }
}

pub struct SessionGuardService<S> {
    service: Rc<S>,
    codec: web::Data<TokenCodec>,
}

fn verify_session(req: &ServiceRequest, codec: &TokenCodec) -> Result<SessionUser, AppError> {
    let token = req
        .cookie(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::Unauthorized("Unauthorized".to_string()))?;

    let claims = codec.verify(&token).map_err(|e| {
        tracing::warn!("session token rejected: {}", e);
        AppError::Unauthorized("Invalid token".to_string())
    })?;

    let user_id = claims
        .user_id()
        .map_err(|_| AppError::Unauthorized("Invalid token".to_string()))?;

    Ok(SessionUser {
        user_id,
        email: claims.email,
    })
}

impl<S, B> Service<ServiceRequest> for SessionGuardService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match verify_session(&req, &self.codec) {
            Ok(session) => {
                req.extensions_mut().insert(session);
                let fut = self.service.call(req);
                Box::pin(async move {
                    let res = fut.await?;
                    Ok(res.map_into_left_body())
                })
            }
            Err(err) => {
                let (req, _payload) = req.into_parts();
                let response = err.error_response().map_into_right_body();
                Box::pin(async move { Ok(ServiceResponse::new(req, response)) })
            }
        }
    }
}

impl FromRequest for SessionUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<SessionUser>() {
            Some(session) => ready(Ok(session.clone())),
            None => ready(Err(
                AppError::Unauthorized("Unauthorized".to_string()).into()
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::cookie::Cookie;
    use actix_web::{test, App, HttpResponse};
    use serde_json::Value;

    async fn whoami(session: SessionUser) -> HttpResponse {
        HttpResponse::Ok().json(serde_json::json!({
            "user_id": session.user_id,
            "email": session.email,
        }))
    }

    fn codec() -> web::Data<TokenCodec> {
        web::Data::new(TokenCodec::from_secret("guard-test-secret"))
    }

    macro_rules! guarded_app {
        ($codec:expr) => {
            test::init_service(
                App::new().service(
                    web::scope("")
                        .wrap(SessionGuard::new($codec))
                        .route("/whoami", web::get().to(whoami)),
                ),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn missing_cookie_is_rejected() {
        let app = guarded_app!(codec());

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/whoami").to_request()).await;
        assert_eq!(resp.status(), 401);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
    }

    #[actix_web::test]
    async fn garbage_cookie_is_rejected() {
        let app = guarded_app!(codec());

        let req = test::TestRequest::get()
            .uri("/whoami")
            .cookie(Cookie::new(SESSION_COOKIE, "garbage.token.value"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn empty_cookie_is_rejected() {
        let app = guarded_app!(codec());

        let req = test::TestRequest::get()
            .uri("/whoami")
            .cookie(Cookie::new(SESSION_COOKIE, ""))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn signed_cookie_passes_and_exposes_identity() {
        let codec = codec();
        let user_id = Uuid::new_v4();
        let token = codec.sign(user_id, "a@x.com").unwrap();

        let app = guarded_app!(codec.clone());

        let req = test::TestRequest::get()
            .uri("/whoami")
            .cookie(Cookie::new(SESSION_COOKIE, token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["user_id"], user_id.to_string());
        assert_eq!(body["email"], "a@x.com");
    }

    #[actix_web::test]
    async fn token_signed_with_other_secret_is_rejected() {
        let other = TokenCodec::from_secret("some-other-secret");
        let token = other.sign(Uuid::new_v4(), "a@x.com").unwrap();

        let app = guarded_app!(codec());

        let req = test::TestRequest::get()
            .uri("/whoami")
            .cookie(Cookie::new(SESSION_COOKIE, token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }
}
