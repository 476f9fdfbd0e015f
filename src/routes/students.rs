//! Student listing and maintenance pages.

use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::dto::students::StudentIndexQuery;
use crate::forms::students::StudentForm;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, students as students_service};

#[get("/students")]
pub async fn show_students(
    params: web::Query<StudentIndexQuery>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match students_service::load_students_index(
        repo.student_source(),
        params.into_inner(),
        server_config.page_size,
    ) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "students");
            context.insert("students", &data.students);
            context.insert("current_sort", &data.current_sort);
            context.insert(
                "current_filter",
                data.current_filter.as_deref().unwrap_or_default(),
            );
            context.insert("name_sort_token", &data.name_sort_token);
            context.insert("date_sort_token", &data.date_sort_token);

            render_template(&tera, "students/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to list students: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/students/{student_id}")]
pub async fn show_student(
    student_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match students_service::load_student(repo.get_ref(), student_id.into_inner()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "students");
            context.insert("student", &data.student);
            context.insert("enrollments", &data.enrollments);

            render_template(&tera, "students/show.html", &context)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Student not found.").send();
            redirect("/students")
        }
        Err(err) => {
            log::error!("Failed to load student: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/students/create")]
pub async fn create_student(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<StudentForm>,
) -> impl Responder {
    match students_service::create_student(repo.get_ref(), form) {
        Ok(student) => {
            FlashMessage::success(format!("Student {} added.", student.last_name)).send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to add a student: {err}");
            FlashMessage::error("Failed to add the student.").send();
        }
    }
    redirect("/students")
}

#[post("/students/{student_id}/edit")]
pub async fn edit_student(
    student_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<StudentForm>,
) -> impl Responder {
    let student_id = student_id.into_inner();

    match students_service::update_student(repo.get_ref(), student_id, form) {
        Ok(_) => {
            FlashMessage::success("Student updated.").send();
            redirect(&format!("/students/{student_id}"))
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Student not found.").send();
            redirect("/students")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect(&format!("/students/{student_id}"))
        }
        Err(err) => {
            log::error!("Failed to update student: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/students/{student_id}/delete")]
pub async fn delete_student(
    student_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let student_id = student_id.into_inner();

    match students_service::delete_student(repo.get_ref(), student_id) {
        Ok(true) => {
            FlashMessage::success("Student deleted.").send();
            redirect("/students")
        }
        Ok(false) => redirect("/students"),
        Err(err) => {
            log::error!("Failed to delete student: {err}");
            FlashMessage::error(
                "Delete failed. Try again, and if the problem persists see your system administrator.",
            )
            .send();
            redirect(&format!("/students/{student_id}"))
        }
    }
}
