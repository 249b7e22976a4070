use crate::error::PlazoError;
use actix_web::HttpRequest;
use plazo_infra::PlazoContext;

const API_KEY_HEADER: &str = "x-api-key";

/// Gates the tool API behind the shared secret from the configuration
pub fn protect_tool_route(http_req: &HttpRequest, ctx: &PlazoContext) -> Result<(), PlazoError> {
    match http_req.headers().get(API_KEY_HEADER) {
        Some(key) if key.to_str().map(|k| k == ctx.config.api_key).unwrap_or(false) => Ok(()),
        Some(_) => Err(PlazoError::Unauthorized(
            "The provided api key was invalid".into(),
        )),
        None => Err(PlazoError::Unauthorized(format!(
            "Missing the `{}` header",
            API_KEY_HEADER
        ))),
    }
}
