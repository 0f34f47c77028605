mod landing;
pub use landing::{AuthMode, FormError, Landing, LandingForm, AUTH_FAILED};

mod dashboard;
pub use dashboard::{
    customer_orders, load_dashboard, Dashboard, DashboardData, RolePanel, INVALID_ROLE, NO_ORDERS,
    NO_RESTAURANTS,
};

mod shell;
pub use shell::MarsDash;
