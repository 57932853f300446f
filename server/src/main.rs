use crate::api::{PushRequest, RelayResponse, ScheduleRequest};
use actix_web::{App, HttpResponse, HttpServer, http::StatusCode, post, web};
use common::{PlatformRegistry, PushError, Transport};
use log::*;
use urbanairship::{AirshipPlatformFactory, Push, ScheduledPush};

mod api;

const DEFAULT_BIND: &str = "127.0.0.1:8888";

fn error_status(err: &PushError) -> StatusCode {
    match err {
        PushError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        PushError::RequestFailure { .. } | PushError::NetworkError(_) => StatusCode::BAD_GATEWAY,
        PushError::ConfigError(_) => StatusCode::BAD_REQUEST,
        PushError::MessageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(err: PushError) -> HttpResponse {
    HttpResponse::build(error_status(&err))
        .json(RelayResponse::upstream_error(err.to_string(), err.status()))
}

fn create_transport(
    registry: &PlatformRegistry,
    platform: &str,
    config: serde_json::Value,
) -> Result<Box<dyn Transport>, HttpResponse> {
    let factory = registry.get_factory(platform).ok_or_else(|| {
        HttpResponse::BadRequest().json(RelayResponse::error(format!(
            "Platform '{}' not found",
            platform
        )))
    })?;

    factory.create(config).map_err(|e| {
        HttpResponse::BadRequest().json(RelayResponse::error(format!(
            "Failed to create platform: {}",
            e
        )))
    })
}

#[post("/push")]
async fn push(req: web::Json<PushRequest>, registry: web::Data<PlatformRegistry>) -> HttpResponse {
    info!("Received push request for platform: {}", req.platform);
    let req = req.into_inner();

    let transport = match create_transport(&registry, &req.platform, req.config) {
        Ok(t) => t,
        Err(resp) => return resp,
    };

    match Push::from_payload(&*transport, req.push).send().await {
        Ok(response) => HttpResponse::Ok().json(RelayResponse::ok(response)),
        Err(e) => {
            warn!("Push to {} failed: {}", req.platform, e);
            error_response(e)
        }
    }
}

#[post("/schedules")]
async fn schedules(
    req: web::Json<ScheduleRequest>,
    registry: web::Data<PlatformRegistry>,
) -> HttpResponse {
    info!("Received schedule request for platform: {}", req.platform);
    let req = req.into_inner();

    let transport = match create_transport(&registry, &req.platform, req.config) {
        Ok(t) => t,
        Err(resp) => return resp,
    };

    let mut scheduled = ScheduledPush::new(&*transport)
        .schedule(req.schedule)
        .push(Push::from_payload(&*transport, req.push));
    scheduled.name = req.name;

    match scheduled.send().await {
        Ok(response) => HttpResponse::Created().json(RelayResponse::ok(response)),
        Err(e) => {
            warn!("Schedule to {} failed: {}", req.platform, e);
            error_response(e)
        }
    }
}

fn registry() -> PlatformRegistry {
    let mut registry = PlatformRegistry::new();
    registry.register(Box::new(AirshipPlatformFactory));
    registry
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));

    let registry = registry();
    info!("Registered platforms: {:?}", registry.list_platforms());

    let registry_data = web::Data::new(registry);
    let bind = std::env::var("MULTI_PUSH_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());
    info!("Listening on {}", bind);

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .app_data(registry_data.clone())
            .service(push)
            .service(schedules)
    })
    .bind(bind)?
    .run()
    .await
}
