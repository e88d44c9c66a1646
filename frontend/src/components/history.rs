use crate::auth::use_auth;
use crate::state::LocalCell;
use crate::web::route::AppRoute;
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use predictor_workflow::driver::load_history;
use predictor_workflow::history::CardDetail;
use predictor_workflow::{HistoryCard, HistoryContent, HistoryLoader};

#[component]
fn HistoryCardView(card: HistoryCard) -> impl IntoView {
    let detail = match card.detail {
        CardDetail::Symptoms(lines) => view! {
            <details class="collapse collapse-arrow bg-base-200 mt-2">
                <summary class="collapse-title text-sm font-medium">"View Symptoms"</summary>
                <ul class="collapse-content space-y-1">
                    {lines
                        .into_iter()
                        .map(|line| view! {
                            <li class="flex items-center gap-2 text-sm">
                                <span class=format!("inline-block w-2 h-2 rounded-full {}", line.marker().css_class())></span>
                                {line.text()}
                            </li>
                        })
                        .collect_view()}
                </ul>
            </details>
        }
        .into_any(),
        CardDetail::File(filename) => view! {
            <p class="text-sm text-base-content/70 mt-2">"File: " {filename}</p>
        }
        .into_any(),
    };

    view! {
        <div class="card bg-base-100 shadow-md" data-entry=card.id>
            <div class="card-body p-4">
                <div class="flex justify-between items-start">
                    <h3 class="font-bold text-lg text-primary">{card.prediction}</h3>
                    <span class="text-xs text-base-content/60">{card.time}</span>
                </div>
                <p class="text-sm">"Type: " {card.kind}</p>
                {detail}
            </div>
        </div>
    }
}

#[component]
pub fn HistoryPage() -> impl IntoView {
    let auth = use_auth();
    let loader = LocalCell::new(HistoryLoader::new());

    // 每次进入页面加载一次
    let api = auth.api();
    spawn_local(async move {
        load_history(&loader, &api).await;
    });

    let content = move || {
        match loader.with(HistoryLoader::content) {
            HistoryContent::Loading => view! {
                <div class="flex justify-center items-center gap-2 py-8">
                    <span class="loading loading-spinner"></span>
                    "Loading history..."
                </div>
            }
            .into_any(),
            HistoryContent::Error(message) => view! {
                <div role="alert" class="alert alert-error">
                    <span>{message}</span>
                </div>
            }
            .into_any(),
            HistoryContent::Empty(message) => view! {
                <p class="text-center text-base-content/60 py-8">{message}</p>
            }
            .into_any(),
            HistoryContent::Cards(cards) => view! {
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    {cards
                        .into_iter()
                        .map(|card| view! { <HistoryCardView card=card /> })
                        .collect_view()}
                </div>
            }
            .into_any(),
        }
    };

    view! {
        <div class="max-w-5xl mx-auto space-y-6">
            <Link to=AppRoute::Dashboard class="btn btn-ghost btn-sm">"← Back to Dashboard"</Link>
            <h1 class="text-3xl font-bold">"Patient History"</h1>
            {content}
        </div>
    }
}
