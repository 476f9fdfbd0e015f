use actix_web::{HttpResponse, Responder, get, web};

use crate::dto::students::StudentIndexQuery;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::services::{api as api_service, students as students_service};

#[get("/v1/students")]
/// One page of students as JSON, driven by the same query parameters as the
/// HTML index.
pub async fn api_v1_students(
    params: web::Query<StudentIndexQuery>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    match students_service::load_students_index(
        repo.student_source(),
        params.into_inner(),
        server_config.page_size,
    ) {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(err) => {
            log::error!("Failed to list students: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/v1/courses")]
pub async fn api_v1_courses(repo: web::Data<DieselRepository>) -> impl Responder {
    match api_service::list_courses(repo.get_ref()) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => {
            log::error!("Failed to list courses: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
