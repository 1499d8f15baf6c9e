use crate::modules::customers::controller::{
    delete_customer, get_all_customers, get_customer_by_id,
};
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_customers_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all_customers))
        .route("/{id}", get(get_customer_by_id).delete(delete_customer))
}
