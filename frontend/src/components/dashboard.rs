//! 诊断面板
//!
//! 模式选择器决定显示哪条流水线；两条流水线的状态都挂在面板上，
//! 切换模式不会丢失输入或结果，离开页面后全部重置。

mod photo_panel;
mod report;
mod symptom_panel;

use crate::state::LocalCell;
use crate::web::BrowserFile;
use leptos::prelude::*;
use photo_panel::PhotoPanel;
use predictor_workflow::{ImagePipeline, Mode, ModeSelector, SymptomPipeline};
use symptom_panel::SymptomPanel;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let selector = LocalCell::new(ModeSelector::new());
    let symptoms = LocalCell::new(SymptomPipeline::new());
    let images = LocalCell::new(ImagePipeline::<BrowserFile>::new());

    let active = move || selector.with(ModeSelector::active);

    view! {
        <div class="max-w-5xl mx-auto space-y-6">
            <h1 class="text-3xl font-bold print:hidden">"Disease Predictor"</h1>

            <div role="tablist" class="tabs tabs-bordered print:hidden">
                {Mode::SELECTABLE
                    .into_iter()
                    .map(|mode| {
                        view! {
                            <button
                                role="tab"
                                class=move || if active() == mode { "tab tab-active font-bold" } else { "tab" }
                                on:click=move |_| selector.update(|s| {
                                    s.select(mode);
                                })
                            >
                                {mode.title()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    {move || match active() {
                        Mode::None => view! {
                            <p class="text-base-content/70">
                                "Choose Symptom Checker or Photo Diagnosis to begin."
                            </p>
                        }
                        .into_any(),
                        Mode::Symptoms => view! { <SymptomPanel pipeline=symptoms /> }.into_any(),
                        Mode::Photo => view! { <PhotoPanel pipeline=images /> }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}
