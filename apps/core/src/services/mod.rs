//! Abstract contracts for the external backend, one trait per resource,
//! plus their HTTP implementations over the shared [`ApiClient`].
//!
//! The traits are the seams: presentation and the stateful gates depend
//! on `Arc<dyn …Service>`, so tests swap in hand-rolled fakes without a
//! network.

pub mod admin;
pub mod cars;
pub mod favorites;
pub mod feedback;
pub mod reviews;
pub mod users;

pub use admin::{AdminService, DashboardStats, HttpAdminService};
pub use cars::{CarService, HttpCarService};
pub use favorites::{FavoriteService, HttpFavoriteService};
pub use feedback::{FeedbackService, HttpFeedbackService};
pub use reviews::{HttpReviewService, ReactionCounts, ReviewService, UploadedImage};
pub use users::{HttpUserService, UserService};
