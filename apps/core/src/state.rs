use std::sync::Arc;

use crate::client::ApiClient;
use crate::config::Config;
use crate::favorites::FavoriteGate;
use crate::services::{
    AdminService, CarService, FavoriteService, FeedbackService, HttpAdminService,
    HttpCarService, HttpFavoriteService, HttpFeedbackService, HttpReviewService,
    HttpUserService, ReviewService, UserService,
};
use crate::session::Session;

/// Everything a frontend needs, wired once and injected into views.
///
/// Services are trait objects so tests (and alternative transports) can
/// swap implementations without touching consumers.
#[derive(Clone)]
pub struct AppContext {
    pub config: Config,
    pub session: Session,
    pub cars: Arc<dyn CarService>,
    pub reviews: Arc<dyn ReviewService>,
    pub favorites: Arc<dyn FavoriteService>,
    pub users: Arc<dyn UserService>,
    pub admin: Arc<dyn AdminService>,
    pub feedback: Arc<dyn FeedbackService>,
    pub favorite_gate: Arc<FavoriteGate>,
}

impl AppContext {
    /// Wires the HTTP service stack against one shared client and a
    /// fresh (logged-out) session.
    pub fn new(config: Config) -> Self {
        let session = Session::new();
        let api = ApiClient::new(&config, session.clone());

        let favorites: Arc<dyn FavoriteService> =
            Arc::new(HttpFavoriteService::new(api.clone()));
        let favorite_gate = Arc::new(FavoriteGate::new(favorites.clone(), session.clone()));

        AppContext {
            cars: Arc::new(HttpCarService::new(api.clone())),
            reviews: Arc::new(HttpReviewService::new(api.clone())),
            users: Arc::new(HttpUserService::new(api.clone())),
            admin: Arc::new(HttpAdminService::new(api.clone())),
            feedback: Arc::new(HttpFeedbackService::new(api)),
            favorites,
            favorite_gate,
            session,
            config,
        }
    }
}
