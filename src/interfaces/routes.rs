use actix_web::web;

use crate::{
    handlers::{contact::submit_contact, home::home, system::health_check},
    infrastructure::email::ResendMailer,
};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
    cfg.service(health_check);
    cfg.route("/contact", web::post().to(submit_contact::<ResendMailer>));
}
