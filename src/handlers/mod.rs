pub mod graphql_handler;
pub mod health_handler;
pub mod quiz_handler;

use actix_web::web;

pub use graphql_handler::{graphiql, graphql};
pub use health_handler::{health_check, health_check_ready};
pub use quiz_handler::{generate_quiz, get_quiz, history, root};

/// Registers every REST and GraphQL route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(root)
        .service(generate_quiz)
        .service(history)
        .service(get_quiz)
        .service(health_check)
        .service(health_check_ready)
        .service(graphql)
        .service(graphiql);
}
