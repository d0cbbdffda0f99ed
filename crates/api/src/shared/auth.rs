use crate::error::BillwatchError;
use actix_web::HttpRequest;
use billwatch_infra::BillwatchContext;

fn parse_authtoken_header(token_header_value: &str) -> String {
    token_header_value
        .replace("Bearer", "")
        .replace("bearer", "")
        .trim()
        .to_string()
}

/// Establishes the caller identity by exchanging the bearer token from
/// the `Authorization` header with the identity provider. Fails the
/// request before any engine logic runs.
pub async fn protect_route(
    http_req: &HttpRequest,
    ctx: &BillwatchContext,
) -> Result<String, BillwatchError> {
    let token = http_req
        .headers()
        .get("authorization")
        .and_then(|header| header.to_str().ok())
        .map(parse_authtoken_header)
        .ok_or_else(|| {
            BillwatchError::Unauthorized("Missing authorization header with token".into())
        })?;

    match ctx.verifier.verify(&token).await {
        Some(identity) => Ok(identity.user_id),
        None => Err(BillwatchError::Unauthorized(
            "Invalid or expired token".into(),
        )),
    }
}
