use actix_web::{HttpResponse, Responder, get, post, web};
use tera::Tera;

use crate::forms::videos::{AddVideoForm, FormErrors};
use crate::repository::DieselRepository;
use crate::routes::{base_context, render_template, service_error_response};
use crate::services::categories::{
    CategoryPage, show_add_video_control, show_category as show_category_service,
    submit_video as submit_video_service,
};

fn render_category_page(tera: &Tera, page: CategoryPage) -> HttpResponse {
    let mut context = base_context("category");
    context.insert("category", &page.category);
    context.insert("form", &page.form);
    context.insert("errors", &page.errors);
    context.insert("rows", &page.rows);
    render_template(tera, "category.html", &context)
}

#[get("/category/{name}")]
pub async fn show_category(
    name: web::Path<String>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match show_category_service(&name, repo.get_ref()) {
        Ok(page) => render_category_page(&tera, page),
        Err(err) => service_error_response(err, "render category page"),
    }
}

#[post("/category/{name}")]
pub async fn submit_video(
    name: web::Path<String>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<AddVideoForm>,
) -> impl Responder {
    match submit_video_service(&name, form, repo.get_ref()) {
        Ok(page) => render_category_page(&tera, page),
        Err(err) => service_error_response(err, "submit video"),
    }
}

#[get("/category/{name}/add-video-form")]
pub async fn add_video_form(
    name: web::Path<String>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match show_add_video_control(&name, repo.get_ref()) {
        Ok(category) => {
            let mut context = base_context("category");
            context.insert("category", &category);
            context.insert("form", &AddVideoForm::default());
            context.insert("errors", &FormErrors::default());
            render_template(&tera, "partials/add_video_form.html", &context)
        }
        Err(err) => service_error_response(err, "render add video form"),
    }
}

#[get("/category/{name}/add-video-link")]
pub async fn add_video_link(
    name: web::Path<String>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match show_add_video_control(&name, repo.get_ref()) {
        Ok(category) => {
            let mut context = base_context("category");
            context.insert("category", &category);
            render_template(&tera, "partials/add_video_link.html", &context)
        }
        Err(err) => service_error_response(err, "render add video link"),
    }
}
