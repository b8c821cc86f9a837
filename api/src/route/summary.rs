use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::summary::show_booking_summary;

pub fn build_booking_routers() -> Router<AppRegistry> {
    let booking_routers = Router::new().route("/summary", get(show_booking_summary));

    Router::new().nest("/booking", booking_routers)
}
