use crate::auth::use_auth;
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use leptos::task::spawn_local;
use predictor_shared::LoginRequest;
use predictor_workflow::driver::sign_in;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_is_submitting.set(true);
        set_error_msg.set(None);

        let request = LoginRequest {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        spawn_local(async move {
            match sign_in(&auth.session, &auth.api(), request).await {
                Ok(()) => router.navigate_to_route(AppRoute::auth_success_redirect()),
                Err(message) => set_error_msg.set(Some(message)),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-[80vh]">
            <div class="card shrink-0 w-full max-w-md shadow-2xl bg-base-100">
                <form class="card-body" on:submit=on_submit>
                    <h2 class="card-title text-2xl">"Welcome Back"</h2>
                    <p class="text-base-content/70">"Login to continue"</p>

                    <Show when=move || error_msg.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{move || error_msg.get().unwrap_or_default()}</span>
                        </div>
                    </Show>

                    <div class="form-control">
                        <label class="label" for="username">
                            <span class="label-text">"Username"</span>
                        </label>
                        <input
                            id="username"
                            type="text"
                            placeholder="Enter your username"
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            prop:value=username
                            class="input input-bordered"
                            required
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">"Password"</span>
                        </label>
                        <input
                            id="password"
                            type="password"
                            placeholder="Enter your password"
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            prop:value=password
                            class="input input-bordered"
                            required
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" disabled=move || is_submitting.get()>
                            {move || if is_submitting.get() {
                                view! { <span class="loading loading-spinner"></span> "Logging in..." }.into_any()
                            } else {
                                "Login".into_any()
                            }}
                        </button>
                    </div>
                    <p class="text-sm text-center mt-2">
                        "Don't have an account? "
                        <Link to=AppRoute::Register class="link link-primary">"Register here"</Link>
                    </p>
                </form>
            </div>
        </div>
    }
}
