use crate::db::ArticleRepository;
use crate::error::ApiError;
use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

/// Body of create and update requests. Absent fields deserialize as empty
/// strings so they fail the same length check as explicit empty ones.
#[derive(Serialize, Deserialize, Validate, Debug)]
pub struct ArticleRequest {
    #[serde(default)]
    #[validate(length(min = 1))]
    title: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    content: String,
}

impl ArticleRequest {
    /// Only a JSON object carrying two non-empty strings is accepted.
    fn from_body(body: Map<String, Value>) -> Result<Self, ApiError> {
        let request: Self =
            serde_json::from_value(Value::Object(body)).map_err(|_| ApiError::Validation)?;
        request.validate().map_err(|_| ApiError::Validation)?;
        Ok(request)
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct DeleteResponse {
    pub message: String,
}

#[get("/articles")]
pub async fn list_articles(repo: web::Data<ArticleRepository>) -> Result<HttpResponse, ApiError> {
    let articles = web::block(move || repo.list_all()).await?;
    Ok(HttpResponse::Ok().json(articles))
}

#[get("/articles/{id}")]
pub async fn get_article(
    repo: web::Data<ArticleRepository>,
    path: web::Path<(i32,)>,
) -> Result<HttpResponse, ApiError> {
    let (id,) = path.into_inner();
    match web::block(move || repo.get_by_id(id)).await? {
        Some(article) => Ok(HttpResponse::Ok().json(article)),
        None => Err(ApiError::NotFound),
    }
}

#[post("/articles")]
pub async fn create_article(
    repo: web::Data<ArticleRepository>,
    data: web::Json<Map<String, Value>>,
) -> Result<HttpResponse, ApiError> {
    let data = ArticleRequest::from_body(data.into_inner())?;
    let article = web::block(move || repo.create(&data.title, &data.content)).await?;
    Ok(HttpResponse::Created().json(article))
}

#[put("/articles/{id}")]
pub async fn update_article(
    repo: web::Data<ArticleRepository>,
    path: web::Path<(i32,)>,
    data: web::Json<Map<String, Value>>,
) -> Result<HttpResponse, ApiError> {
    let (id,) = path.into_inner();
    let data = ArticleRequest::from_body(data.into_inner())?;
    match web::block(move || repo.update(id, &data.title, &data.content)).await? {
        Some(article) => Ok(HttpResponse::Ok().json(article)),
        None => Err(ApiError::NotFound),
    }
}

#[delete("/articles/{id}")]
pub async fn delete_article(
    repo: web::Data<ArticleRepository>,
    path: web::Path<(i32,)>,
) -> Result<HttpResponse, ApiError> {
    let (id,) = path.into_inner();
    match web::block(move || repo.delete(id)).await? {
        Some(_) => Ok(HttpResponse::Ok().json(DeleteResponse {
            message: "Article deleted successfully".to_owned(),
        })),
        None => Err(ApiError::NotFound),
    }
}
