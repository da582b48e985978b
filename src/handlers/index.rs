// src/handlers/index.rs
// DOCUMENTATION: Landing page handler
// PURPOSE: Serve the browser front end that calls the JSON routes

use actix_web::{http::header::ContentType, web, HttpResponse, Responder};

const INDEX_HTML: &str = include_str!("../../templates/index.html");

pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_rt::test]
    async fn test_index_serves_html() {
        let app = test::init_service(App::new().configure(config)).await;
        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        assert!(resp.status().is_success());
        let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));

        let body = test::read_body(resp).await;
        assert!(std::str::from_utf8(&body).unwrap().contains("searchForm"));
    }
}
