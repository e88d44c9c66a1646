use super::report::ImageReportView;
use crate::auth::use_auth;
use crate::state::LocalCell;
use crate::web::BrowserFile;
use leptos::prelude::*;
use leptos::task::spawn_local;
use predictor_workflow::ImagePipeline;
use predictor_workflow::driver::submit_image;
use web_sys::HtmlInputElement;

#[component]
pub fn PhotoPanel(pipeline: LocalCell<ImagePipeline<BrowserFile>>) -> impl IntoView {
    let auth = use_auth();

    let has_file = move || pipeline.with(ImagePipeline::has_file);
    let is_pending = move || pipeline.with(|p| p.state().is_pending());
    let preview = move || pipeline.with(|p| p.preview_url().map(str::to_string));
    let error = move || pipeline.with(|p| p.state().error().map(str::to_string));
    let result = move || pipeline.with(|p| p.state().result().cloned());

    let on_file_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        // 取消选择时保留原文件
        if let Some(file) = BrowserFile::from_input(&input) {
            pipeline.update(|p| p.select_file(file));
        }
    };

    let on_analyze = move |_| {
        let api = auth.api();
        spawn_local(async move {
            submit_image(&pipeline, &api).await;
        });
    };

    view! {
        <div class="space-y-4">
            <div class="print:hidden">
                <h2 class="card-title text-2xl">"Upload Photo"</h2>
                <p class="text-base-content/70">
                    "Upload a clear photo of the skin issue for AI analysis."
                </p>
            </div>

            <div class="flex flex-col items-center gap-4 p-8 border-2 border-dashed border-base-300 rounded-lg print:hidden">
                <input
                    type="file"
                    accept="image/*"
                    class="file-input file-input-bordered w-full max-w-xs"
                    on:change=on_file_change
                />

                {move || preview().map(|url| view! {
                    <img src=url alt="Preview" class="max-h-72 max-w-full rounded-lg shadow-md" />
                })}

                <button
                    class="btn btn-success w-full max-w-xs"
                    disabled=move || !has_file() || is_pending()
                    on:click=on_analyze
                >
                    {move || if is_pending() { "Analyzing..." } else { "Analyze Photo" }}
                </button>
            </div>

            {move || error().map(|message| view! {
                <div role="alert" class="alert alert-error text-sm print:hidden">
                    <span>{message}</span>
                </div>
            })}

            {move || result().map(|result| view! { <ImageReportView result=result /> })}
        </div>
    }
}
