use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use brewrec_core::Error;
use brewrec_engine::Recommender;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

#[derive(Deserialize)]
struct RecommendParams {
    drink: Option<String>,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(engine: Arc<Recommender>, port: u16) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(engine.clone()))
                .route("/recommend", web::get().to(recommend))
                .route("/drinks", web::get().to(list_drinks))
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

async fn recommend(
    engine: web::Data<Arc<Recommender>>,
    params: web::Query<RecommendParams>,
) -> ActixResult<HttpResponse> {
    let name = match params.drink.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name,
        _ => {
            return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "error": "drink query parameter is required"
            })));
        }
    };

    debug!("recommend query for {:?}", name);

    match engine.recommend(name) {
        Ok(result) => Ok(HttpResponse::Ok().json(result)),
        Err(err @ Error::DrinkNotFound(_)) => {
            Ok(HttpResponse::NotFound().json(serde_json::json!({
                "error": err.to_string()
            })))
        }
        Err(err) => Ok(HttpResponse::InternalServerError().json(serde_json::json!({
            "error": err.to_string()
        }))),
    }
}

async fn list_drinks(engine: web::Data<Arc<Recommender>>) -> ActixResult<HttpResponse> {
    let names: Vec<&str> = engine
        .catalog()
        .drinks()
        .iter()
        .map(|d| d.name.as_str())
        .collect();
    Ok(HttpResponse::Ok().json(names))
}
