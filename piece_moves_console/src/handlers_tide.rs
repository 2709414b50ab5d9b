use std::sync::Arc;

use piece_moves::Registry;
use piece_moves::reply::{self, Reply, ReplyStatus};
use serde::Serialize;
use tide::{Body, Request, Response, StatusCode};


// The registry is never modified after startup, so handlers share it without locks.
pub type ServerState = Arc<Registry>;

pub fn register_handlers(app: &mut tide::Server<ServerState>) {
    app.with(tide::log::LogMiddleware::new());

    app.at("/api/v1/:figure/:current_field").get(handle_available_moves);
    app.at("/api/v1/:figure/:current_field/:dest_field").get(handle_validate_move);
}

async fn handle_available_moves(req: Request<ServerState>) -> tide::Result {
    let figure = req.param("figure")?;
    let current_field = req.param("current_field")?;
    json_response(reply::moves_reply(req.state(), figure, current_field))
}

async fn handle_validate_move(req: Request<ServerState>) -> tide::Result {
    let figure = req.param("figure")?;
    let current_field = req.param("current_field")?;
    let dest_field = req.param("dest_field")?;
    json_response(reply::move_reply(req.state(), figure, current_field, dest_field))
}

fn status_code(status: ReplyStatus) -> StatusCode {
    match status {
        ReplyStatus::Ok => StatusCode::Ok,
        ReplyStatus::NotFound => StatusCode::NotFound,
        ReplyStatus::Conflict => StatusCode::Conflict,
    }
}

fn json_response<T: Serialize>(reply: Reply<T>) -> tide::Result {
    let mut resp = Response::new(status_code(reply.status));
    resp.set_body(Body::from_json(&reply.body)?);
    Ok(resp)
}
