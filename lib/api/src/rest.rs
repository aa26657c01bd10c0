use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use serde::Serialize;
use std::sync::Arc;
use tracing::error;

use vendx_core::{rank, Error, RankingResult};
use vendx_store::{TenderStore, VendorStore};

struct AppState {
    tenders: Arc<dyn TenderStore>,
    vendors: Arc<dyn VendorStore>,
}

#[derive(Serialize)]
struct RecommendationResponse {
    #[serde(rename = "tenderId")]
    tender_id: i64,
    recommended_vendors: Vec<RecommendedVendor>,
}

#[derive(Serialize)]
struct RecommendedVendor {
    id: i64,
    name: String,
    category: String,
    similarity: String,
}

impl From<RankingResult> for RecommendationResponse {
    fn from(result: RankingResult) -> Self {
        Self {
            tender_id: result.query_id,
            recommended_vendors: result
                .top_k
                .into_iter()
                .map(|scored| RecommendedVendor {
                    id: scored.id,
                    name: scored.display_name,
                    category: scored.category,
                    similarity: format!("{:.2}%", scored.combined_score * 100.0),
                })
                .collect(),
        }
    }
}

pub struct RestApi;

impl RestApi {
    pub async fn start(
        tenders: Arc<dyn TenderStore>,
        vendors: Arc<dyn VendorStore>,
        port: u16,
    ) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(AppState {
                    tenders: tenders.clone(),
                    vendors: vendors.clone(),
                }))
                .route(
                    "/recommend-vendors/{tenderId}",
                    web::get().to(recommend_vendors),
                )
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

async fn recommend_vendors(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    let tender_id = path.into_inner();

    let description = match state.tenders.get_tender_description(tender_id) {
        Some(description) => description,
        None => {
            return Ok(HttpResponse::NotFound().json(serde_json::json!({
                "message": "Tender not found"
            })));
        }
    };

    let candidates = state.vendors.list_candidates();
    if candidates.is_empty() {
        return Ok(HttpResponse::NotFound().json(serde_json::json!({
            "message": "No vendors available"
        })));
    }

    match rank(tender_id, &description, &candidates) {
        Ok(result) => Ok(HttpResponse::Ok().json(RecommendationResponse::from(result))),
        Err(Error::TenderNotFound(_)) => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "message": "Tender not found"
        }))),
        Err(Error::NoVendors) => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "message": "No vendors available"
        }))),
        Err(e) => {
            error!("recommendation failed for tender {}: {}", tender_id, e);
            Ok(HttpResponse::InternalServerError().json(serde_json::json!({
                "message": "AI Recommendation failed"
            })))
        }
    }
}
