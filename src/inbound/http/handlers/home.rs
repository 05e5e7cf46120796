use actix_web::HttpResponse;

#[derive(serde::Serialize)]
struct StatusResponse {
    status: &'static str,
    docs: &'static str,
    redoc: &'static str,
}

pub async fn home() -> HttpResponse {
    HttpResponse::Ok().json(StatusResponse {
        status: "Notification relay is running",
        docs: "/docs",
        redoc: "/redoc",
    })
}
