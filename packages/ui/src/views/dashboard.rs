use dioxus::prelude::*;

use api::{Backend, Direction, Order, Query, Restaurant, Role, User};

use crate::icons::{FaChevronRight, FaCircleUser, FaCube, FaGear, FaRightFromBracket};
use crate::{use_session, Icon, StatusIndicator};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

pub const NO_RESTAURANTS: &str = "No restaurants available on Mars yet.";
pub const NO_ORDERS: &str = "You haven't placed any orders.";
pub const INVALID_ROLE: &str = "Invalid user role.";

/// Entities shown on a customer dashboard. Rebuilt from scratch on every load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub restaurants: Vec<Restaurant>,
    pub orders: Vec<Order>,
}

/// Orders placed by `customer_id`, newest first, with their restaurant inlined.
pub fn customer_orders(customer_id: &str) -> Query {
    Query::new()
        .with(["restaurant"])
        .filter("customer", customer_id)
        .order_by("createdAt", Direction::Desc)
}

/// Fetch what the dashboard needs for `user`.
///
/// Only customers trigger queries. Failures are logged and leave the
/// affected list empty.
pub async fn load_dashboard<B: Backend>(backend: &B, user: &User) -> DashboardData {
    let mut data = DashboardData::default();
    if user.role != Role::Customer {
        return data;
    }

    match backend.find::<Restaurant>("restaurant", &Query::new()).await {
        Ok(page) => data.restaurants = page.data,
        Err(e) => {
            tracing::error!("Failed to fetch restaurants: {}", e);
            return data;
        }
    }

    match backend.find::<Order>("order", &customer_orders(&user.id)).await {
        Ok(page) => data.orders = page.data,
        Err(e) => tracing::error!("Failed to fetch orders: {}", e),
    }

    data
}

/// Dashboard for a signed-in user.
#[component]
pub fn Dashboard(user: User) -> Element {
    let session = use_session();
    let admin_url = session.client().config().admin_url();
    let online = session.read().backend_online;

    // Reload whenever the user changes
    let dep_user = user.clone();
    let data = use_resource(use_reactive!(|(dep_user,)| {
        let client = session.client();
        async move { load_dashboard(&client, &dep_user).await }
    }));

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "dashboard",
            DashboardHeader {
                user: user.clone(),
                online,
                admin_url: admin_url.clone(),
                on_logout: move |_| async move { session.logout().await },
            }
            main {
                class: "dashboard-main",
                {match data.cloned() {
                    None => rsx! {
                        div {
                            class: "loading-panel",
                            div { class: "spinner" }
                            p { "Loading Martian Data..." }
                        }
                    },
                    Some(data) => rsx! {
                        RolePanel { role: user.role, data, admin_url }
                    },
                }}
            }
        }
    }
}

#[component]
fn DashboardHeader(user: User, online: bool, admin_url: String, on_logout: EventHandler<()>) -> Element {
    rsx! {
        header {
            class: "dashboard-header",
            div {
                class: "dashboard-header__brand",
                h1 { "MarsDash" }
                StatusIndicator { online }
            }
            div {
                class: "dashboard-header__user",
                div {
                    class: "user-summary",
                    p { class: "user-summary__name", "{user.display_name()}" }
                    p { class: "user-summary__role", "{user.role.as_str()}" }
                }
                Icon { icon: FaCircleUser, width: 36, height: 36, class: "user-avatar" }
                if user.role == Role::Admin {
                    a {
                        class: "icon-button",
                        href: "{admin_url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        title: "Admin Panel",
                        Icon { icon: FaGear, width: 20, height: 20 }
                    }
                }
                button {
                    class: "icon-button icon-button--danger",
                    title: "Sign out",
                    onclick: move |_| on_logout.call(()),
                    Icon { icon: FaRightFromBracket, width: 20, height: 20 }
                }
            }
        }
    }
}

/// Body of the dashboard, chosen by role.
#[component]
pub fn RolePanel(role: Role, data: DashboardData, admin_url: String) -> Element {
    match role {
        Role::Customer => rsx! {
            CustomerDashboard { data }
        },
        Role::Courier => rsx! {
            div {
                class: "role-panel",
                Icon { icon: FaCube, width: 48, height: 48, class: "role-panel__icon" }
                h2 { "Courier Dashboard" }
                p { "Delivery assignments will appear here. Stay tuned for system updates!" }
            }
        },
        Role::Admin => rsx! {
            div {
                class: "role-panel",
                Icon { icon: FaGear, width: 48, height: 48, class: "role-panel__icon" }
                h2 { "Admin Access" }
                p { "All management functions are available in the dedicated Admin Panel." }
                a {
                    class: "primary-button",
                    href: "{admin_url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "Go to Admin Panel"
                    Icon { icon: FaChevronRight, width: 14, height: 14 }
                }
            }
        },
        Role::Unknown => rsx! {
            p { class: "role-panel role-panel--invalid", "{INVALID_ROLE}" }
        },
    }
}

#[component]
fn CustomerDashboard(data: DashboardData) -> Element {
    rsx! {
        div {
            class: "customer-dashboard",
            section {
                class: "restaurants",
                h2 { "Restaurants" }
                if data.restaurants.is_empty() {
                    p { class: "empty-state", "{NO_RESTAURANTS}" }
                } else {
                    div {
                        class: "restaurant-grid",
                        for restaurant in data.restaurants.iter() {
                            div {
                                key: "{restaurant.id}",
                                class: "restaurant-card",
                                img { src: "{restaurant.logo_url()}", alt: "{restaurant.name}" }
                                div {
                                    class: "restaurant-card__body",
                                    h3 { "{restaurant.name}" }
                                    p { "{restaurant.description}" }
                                    span { class: "cuisine-tag", "{restaurant.cuisine}" }
                                }
                            }
                        }
                    }
                }
            }
            section {
                class: "orders",
                h2 { "My Orders" }
                if data.orders.is_empty() {
                    p { class: "empty-state", "{NO_ORDERS}" }
                } else {
                    div {
                        class: "order-list",
                        for order in data.orders.iter() {
                            div {
                                key: "{order.id}",
                                class: "order-row",
                                div {
                                    p { class: "order-row__restaurant", "{order.restaurant_name()}" }
                                    p { class: "order-row__total", "Total: {order.total_label()}" }
                                }
                                span {
                                    class: if order.is_delivered() { "order-status order-status--delivered" } else { "order-status" },
                                    "{order.status_label()}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
