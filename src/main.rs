use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};

use wiki_quiz_server::{
    app_state::AppState, config::Config, graphql::create_schema, handlers,
    middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let bind_addr = (config.web_server_host.clone(), config.web_server_port);

    let app_state = AppState::new(config)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    let schema = create_schema(app_state.clone());

    log::info!("Starting HTTP server on {}:{}", bind_addr.0, bind_addr.1);
    log::info!(
        "GraphiQL playground: http://{}:{}/graphiql",
        bind_addr.0,
        bind_addr.1
    );

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&app_state.config.frontend_origin)
            .allowed_origin("http://localhost:3000")
            .allow_any_method()
            .allow_any_header()
            .expose_headers([header::HeaderName::from_static("x-request-id")])
            .supports_credentials();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::Data::new(schema.clone()))
            .wrap(RequestIdMiddleware)
            .wrap(Logger::default())
            .wrap(cors)
            .configure(handlers::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
