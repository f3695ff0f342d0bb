use crate::protocol::{request_to_state, ErrorResponse, MoveRequest, MoveResponse, SnakeInfo};
use crate::selector::select_move;
use actix_web::{web, HttpResponse, Responder};
use log::warn;

async fn info() -> impl Responder {
    HttpResponse::Ok().json(SnakeInfo::default())
}

async fn get_move(req: web::Json<MoveRequest>) -> impl Responder {
    let state = request_to_state(&req);

    match select_move(&state) {
        Ok(decision) => HttpResponse::Ok().json(MoveResponse {
            r#move: decision.direction,
            strategy: decision.strategy,
        }),
        Err(e) => {
            warn!("rejected move request: {}", e);
            HttpResponse::BadRequest().json(ErrorResponse {
                error: e.to_string(),
            })
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/move", web::post().to(get_move))
        .route("/", web::get().to(info));
}
