use actix_web::HttpResponse;
use actix_web::web::{Data, Json};

use crate::consts;
use crate::errors::ReviewError;
use crate::models::api::{ErrorResponse, ReviewRequest, ReviewResponse};
use crate::service::ReviewService;

pub async fn review(
    service: Data<ReviewService>,
    request: Json<ReviewRequest>,
) -> impl actix_web::Responder {
    let code = match request.0.code {
        Some(code) if !code.is_empty() => code,
        _ => {
            log::info!("error: review request without code");
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: consts::NO_CODE_MESSAGE.to_string(),
            });
        }
    };

    match service.review(&code).await {
        Ok(feedback) => HttpResponse::Ok().json(ReviewResponse { feedback }),
        Err(e) => {
            log::error!("review error: {:?}", e);
            // Upstream detail stays in the log; the caller only ever sees
            // one of the two generic messages.
            let message = match e {
                ReviewError::Timeout => consts::TIMEOUT_MESSAGE,
                ReviewError::ApiError(_)
                | ReviewError::NetworkError(_)
                | ReviewError::ParseError(_)
                | ReviewError::ConfigError(_) => consts::FETCH_FAILURE_MESSAGE,
            };
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: message.to_string(),
            })
        }
    }
}
