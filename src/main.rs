#[macro_use]
extern crate rocket;

use std::path::PathBuf;

use rocket::fs::FileServer;
use rocket::response::content::RawHtml;

mod boot;
mod data;
mod nav;
mod render;
mod reveal;
mod routes;
mod sections;

/// Path of the portfolio document, read fresh on every page render.
/// Shared via Rocket managed state so routes don't hardcode it.
pub struct DataFile(pub PathBuf);

#[catch(404)]
fn not_found() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>404</h1><p>Page not found.</p><a href='/'>← Home</a></body></html>".to_string())
}

#[catch(500)]
fn server_error() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>500</h1><p>Internal server error.</p><a href='/'>← Home</a></body></html>".to_string())
}

#[launch]
fn rocket() -> _ {
    env_logger::init();

    // Boot check — verify/create directories, warn about missing site files
    boot::run();

    rocket::build()
        .manage(DataFile(PathBuf::from(data::DATA_FILE)))
        .mount("/static", FileServer::from("website/static"))
        .mount("/", routes::routes())
        .register("/", catchers![not_found, server_error])
}
