use actix_web::{Responder, get, web};
use tera::Tera;

use crate::repository::DieselRepository;
use crate::routes::{base_context, render_template, service_error_response};
use crate::services::main::show_home;

#[get("/")]
pub async fn home(repo: web::Data<DieselRepository>, tera: web::Data<Tera>) -> impl Responder {
    match show_home(repo.get_ref()) {
        Ok(rows) => {
            let mut context = base_context("home");
            context.insert("rows", &rows);
            render_template(&tera, "home.html", &context)
        }
        Err(err) => service_error_response(err, "render home page"),
    }
}

#[get("/about")]
pub async fn about(tera: web::Data<Tera>) -> impl Responder {
    render_template(&tera, "partials/about.html", &base_context("about"))
}
