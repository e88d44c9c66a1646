use crate::auth::use_auth;
use crate::web::print_page;
use chrono::Local;
use leptos::prelude::*;
use predictor_workflow::image::ImageResult;
use predictor_workflow::report::{image_report, symptom_report};
use predictor_workflow::symptom::SymptomResult;

#[component]
pub fn SymptomReportView(result: SymptomResult) -> impl IntoView {
    let auth = use_auth();
    let report = symptom_report(
        auth.identity().as_ref(),
        Local::now().date_naive(),
        &result,
    );

    view! {
        <div class="prediction-report card bg-base-200 border border-base-300">
            <div class="card-body">
                <h3 class="card-title border-b-2 border-primary pb-2">"Prediction Report"</h3>
                <p><strong>"Patient Name: "</strong>{report.patient}</p>
                <p><strong>"Date: "</strong>{report.date}</p>
                <p>
                    <strong>"Disease Predicted: "</strong>
                    <span class="text-primary font-bold">{report.prediction}</span>
                </p>

                <h4 class="font-semibold mt-4">"Symptoms Reported:"</h4>
                <ul class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-4 gap-2">
                    {report
                        .lines
                        .into_iter()
                        .map(|line| {
                            let class = if line.present {
                                "p-2 rounded bg-sky-100 border border-sky-300"
                            } else {
                                "p-2 rounded bg-gray-100"
                            };
                            view! { <li class=class>{line.text()}</li> }
                        })
                        .collect_view()}
                </ul>

                <div class="card-actions mt-4 print:hidden">
                    <button class="btn btn-neutral" on:click=|_| print_page()>"Print Report"</button>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ImageReportView(result: ImageResult) -> impl IntoView {
    let auth = use_auth();
    let report = image_report(
        auth.identity().as_ref(),
        Local::now().date_naive(),
        &result,
    );

    view! {
        <div class="prediction-report card bg-emerald-50 border border-emerald-500">
            <div class="card-body">
                <h3 class="card-title border-b-2 border-emerald-500 pb-2">"Photo Diagnosis Report"</h3>
                <p><strong>"Patient Name: "</strong>{report.patient}</p>
                <p><strong>"Date: "</strong>{report.date}</p>
                <p>
                    <strong>"Detected Infection: "</strong>
                    <span class="text-emerald-600 font-bold">{report.prediction}</span>
                </p>
                <p class="text-sm text-base-content/60">"File: " {report.filename}</p>
                <p class="mt-4 italic text-sm text-base-content/70">{report.disclaimer}</p>

                <div class="card-actions mt-4 print:hidden">
                    <button class="btn btn-neutral" on:click=|_| print_page()>"Print Report"</button>
                </div>
            </div>
        </div>
    }
}
