//! Main application component with routing.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::AppConfig;
use crate::pages::{DashboardPage, ReportsPage, TasksPage};

/// Application routes.
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/tasks")]
    Tasks,
    #[at("/reports")]
    Reports,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Route switch function.
fn switch(routes: Route) -> Html {
    match routes {
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Tasks => html! { <TasksPage /> },
        Route::Reports => html! { <ReportsPage /> },
        Route::NotFound => html! {
            <div class="page">
                <div class="card">
                    <h1>{"404 - Page Not Found"}</h1>
                    <p>{"The page you're looking for doesn't exist."}</p>
                </div>
            </div>
        },
    }
}

/// Properties for the root component.
#[derive(Properties, PartialEq)]
pub struct AppProps {
    #[prop_or_default]
    pub config: AppConfig,
}

/// Main application component.
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <ContextProvider<AppConfig> context={props.config.clone()}>
            <BrowserRouter>
                <div class="app-container">
                    <Sidebar />
                    <main class="main-content">
                        <Switch<Route> render={switch} />
                    </main>
                </div>
            </BrowserRouter>
        </ContextProvider<AppConfig>>
    }
}

/// Sidebar navigation component.
#[function_component(Sidebar)]
fn sidebar() -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let current = use_route::<Route>();

    let nav_link = |to: Route, label: &'static str| {
        let classes = if current.as_ref() == Some(&to) {
            "nav-link active"
        } else {
            "nav-link"
        };
        html! {
            <li>
                <Link<Route> to={to} classes={classes!(classes)}>
                    { label }
                </Link<Route>>
            </li>
        }
    };

    html! {
        <aside class="sidebar">
            <Link<Route> to={Route::Dashboard} classes="nav-brand">
                <span class="brand-mark"></span>
                { &config.brand_name }
            </Link<Route>>
            <nav>
                <ul class="nav-links">
                    { nav_link(Route::Dashboard, "Dashboard") }
                    { nav_link(Route::Tasks, "Task") }
                    { nav_link(Route::Reports, "Report") }
                </ul>
            </nav>
            <div class="sidebar-footer">
                <button class="nav-link">{"Settings"}</button>
                <button class="nav-link">{"Support"}</button>
            </div>
        </aside>
    }
}
