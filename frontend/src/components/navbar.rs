use crate::auth::use_auth;
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let on_logout = move |_| {
        auth.logout();
        router.navigate_to_route(AppRoute::auth_failure_redirect());
    };

    view! {
        <nav class="navbar bg-base-100 shadow-md px-4 print:hidden">
            <div class="flex-1">
                <Link to=AppRoute::Dashboard class="btn btn-ghost text-xl">
                    "Disease Predictor"
                </Link>
            </div>
            <div class="flex-none gap-2">
                <Show
                    when=move || auth.is_authenticated()
                    fallback=|| {
                        view! {
                            <Link to=AppRoute::Login class="btn btn-ghost btn-sm">"Login"</Link>
                            <Link to=AppRoute::Register class="btn btn-ghost btn-sm">"Register"</Link>
                        }
                    }
                >
                    <Link to=AppRoute::History class="btn btn-ghost btn-sm">"History"</Link>
                    <span class="text-sm">
                        "Hello, " {move || auth.display_name().unwrap_or_default()}
                    </span>
                    <button on:click=on_logout class="btn btn-outline btn-error btn-sm">
                        "Logout"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
