use super::report::SymptomReportView;
use crate::auth::use_auth;
use crate::state::LocalCell;
use leptos::prelude::*;
use leptos::task::spawn_local;
use predictor_shared::Symptom;
use predictor_workflow::SymptomPipeline;
use predictor_workflow::driver::submit_symptoms;

/// 单项症状的是/否选择
#[component]
fn SymptomSelect(pipeline: LocalCell<SymptomPipeline>, symptom: Symptom) -> impl IntoView {
    let key = symptom.wire_key();

    let on_change = move |ev: leptos::ev::Event| {
        // 非数字输入按越界值处理，交给流水线拒绝
        let value = event_target_value(&ev).parse::<u8>().unwrap_or(u8::MAX);
        pipeline.update(|p| {
            if let Err(err) = p.set_raw(key, value) {
                tracing::warn!(error = %err, "symptom input ignored");
            }
        });
    };

    view! {
        <div class="form-control">
            <label class="label" for=key>
                <span class="label-text">{symptom.label()}</span>
            </label>
            <select
                id=key
                name=key
                class="select select-bordered"
                on:change=on_change
                prop:value=move || if pipeline.with(|p| p.vector().get(symptom)) { "1" } else { "0" }
            >
                <option value="0">"No"</option>
                <option value="1">"Yes"</option>
            </select>
        </div>
    }
}

#[component]
pub fn SymptomPanel(pipeline: LocalCell<SymptomPipeline>) -> impl IntoView {
    let auth = use_auth();

    let is_pending = move || pipeline.with(|p| p.state().is_pending());
    let error = move || pipeline.with(|p| p.state().error().map(str::to_string));
    let result = move || pipeline.with(|p| p.state().result().cloned());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let api = auth.api();
        spawn_local(async move {
            submit_symptoms(&pipeline, &api).await;
        });
    };

    view! {
        <div class="space-y-4">
            <div class="print:hidden">
                <h2 class="card-title text-2xl">"Check Symptoms"</h2>
                <p class="text-base-content/70">"Select your symptoms to get a prediction."</p>
            </div>

            <form class="print:hidden" on:submit=on_submit>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    {Symptom::ALL
                        .into_iter()
                        .map(|symptom| view! { <SymptomSelect pipeline=pipeline symptom=symptom /> })
                        .collect_view()}
                </div>
                <button type="submit" class="btn btn-primary mt-4" disabled=is_pending>
                    {move || if is_pending() { "Predicting..." } else { "Predict Disease" }}
                </button>
            </form>

            {move || error().map(|message| view! {
                <div role="alert" class="alert alert-error text-sm print:hidden">
                    <span>{message}</span>
                </div>
            })}

            {move || result().map(|result| view! { <SymptomReportView result=result /> })}
        </div>
    }
}
