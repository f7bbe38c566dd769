use log::error;
use rocket::response::content::RawHtml;
use rocket::State;

use crate::data::PortfolioDoc;
use crate::render;
use crate::DataFile;

// ── Portfolio page ─────────────────────────────────────

/// The one public page. The document is read fresh per request and
/// discarded once the markup is built; a failed load renders the error
/// page and leaves retrying to the next request.
#[get("/")]
pub fn home(data: &State<DataFile>) -> RawHtml<String> {
    match PortfolioDoc::load(&data.0) {
        Ok(doc) => RawHtml(render::render_page(&doc)),
        Err(e) => {
            error!("Failed to load portfolio data: {}", e);
            RawHtml(render::render_error_page())
        }
    }
}

pub fn routes() -> Vec<rocket::Route> {
    routes![home]
}
