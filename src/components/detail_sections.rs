//! Detail Sections
//!
//! Read-only panels of the idea page: pitch, problem, solution, market,
//! business model, execution, scores and documents.

use leptos::prelude::*;

use market_core::DetailRecord;

use crate::format::{demand_tone, score_tone};

fn or_text(value: &Option<String>, fallback: &str) -> String {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(fallback)
        .to_string()
}

/// Label/value row with a fallback for missing values
#[component]
fn Fact(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="fact">
            <span class="fact-label">{label}</span>
            <span class="fact-value">{value}</span>
        </div>
    }
}

#[component]
fn ScoreTile(label: &'static str, score: f64) -> impl IntoView {
    view! {
        <div class="score-tile">
            <div class="score-label">{label}</div>
            <div class=format!("score-value {}", score_tone(score))>{format!("{}", score)}</div>
        </div>
    }
}

#[component]
pub fn IdeaOverview(record: DetailRecord) -> impl IntoView {
    let docs: Vec<String> = record.additional_docs().into_iter().map(String::from).collect();
    let has_problem_meta = record.who_faces_problem.is_some() || record.pain_level.is_some();

    view! {
        <div class="idea-overview">
            <section class="card">
                <div class="badges">
                    <span class="badge category">{or_text(&record.category, "Business")}</span>
                    <span class="badge stage">{or_text(&record.stage, "Concept")}</span>
                </div>
                <h1 class="idea-title">{record.title.clone()}</h1>
                <p class="idea-pitch">{record.one_line_description.clone().unwrap_or_default()}</p>
            </section>

            <section class="card">
                <h2>"The Problem"</h2>
                <p class="long-text">
                    {or_text(&record.problem_description, "No problem description provided.")}
                </p>
                {has_problem_meta.then(|| view! {
                    <div class="fact-row">
                        {record.who_faces_problem.clone().map(|who| view! {
                            <Fact label="Who faces it" value=who />
                        })}
                        {record.pain_level.map(|level| view! {
                            <Fact label="Pain level" value=format!("{}/5", level) />
                        })}
                    </div>
                })}
            </section>

            <section class="card">
                <h2>"The Solution"</h2>
                <p class="long-text">
                    {or_text(&record.solution_summary, "No solution summary provided.")}
                </p>
                {record.primary_advantage.clone().map(|advantage| view! {
                    <div class="advantage">
                        <span class="fact-label">"Primary advantage"</span>
                        <p>{advantage}</p>
                    </div>
                })}
            </section>

            <div class="two-col">
                <section class="card">
                    <h2>"Market"</h2>
                    <Fact label="Market size" value=or_text(&record.market_size, "N/A") />
                    <Fact label="Growth trend" value=or_text(&record.market_growth_trend, "N/A") />
                    <Fact label="Geographic scope" value=or_text(&record.geographic_scope, "N/A") />
                </section>
                <section class="card">
                    <h2>"Business Model"</h2>
                    <Fact label="Revenue model" value=or_text(&record.revenue_model_type, "N/A") />
                    <Fact label="Price per customer" value=or_text(&record.expected_price_per_customer, "N/A") />
                    <Fact label="Cost intensity" value=or_text(&record.cost_intensity, "N/A") />
                </section>
            </div>

            <section class="card">
                <h2>"Execution"</h2>
                <div class="fact-row">
                    <Fact label="Build difficulty" value=or_text(&record.build_difficulty, "Unknown") />
                    <Fact label="Time to first version" value=or_text(&record.time_to_first_version, "Unknown") />
                    <Fact label="Validation" value=or_text(&record.validation_level, "None") />
                </div>
                {record.validation_notes.clone().map(|notes| view! {
                    <div class="validation-notes">
                        <span class="fact-label">"Validation notes"</span>
                        <p>{notes}</p>
                    </div>
                })}
            </section>

            <section class="card">
                <h2>"AI Analysis"</h2>
                <div class="score-grid">
                    <ScoreTile label="Uniqueness" score=record.uniqueness />
                    <div class="score-tile">
                        <div class="score-label">"Demand"</div>
                        <div class=format!("score-value {}", demand_tone(&record.demand))>
                            {record.demand.clone()}
                        </div>
                    </div>
                    <ScoreTile label="Problem impact" score=record.problem_impact />
                    <ScoreTile label="Viability" score=record.viability />
                    <ScoreTile label="Scalability" score=record.scalability />
                    <div class="score-tile">
                        <div class="score-label">"Overall"</div>
                        <div class=format!("score-value {}", score_tone(record.overall_score))>
                            {format!("{:.1}", record.overall_score)}
                        </div>
                    </div>
                </div>
                {record.profitability.clone().map(|text| view! {
                    <div class="profitability">
                        <span class="fact-label">"Profitability"</span>
                        <p>{text}</p>
                    </div>
                })}
            </section>

            <section class="card">
                <h2>"Documents"</h2>
                <div class="documents">
                    {record.document_url.clone().map(|url| view! {
                        <a class="document-link" href=url target="_blank" rel="noreferrer">
                            "Full business document"
                        </a>
                    })}
                    {docs.into_iter().enumerate().map(|(i, url)| view! {
                        <a class="document-link" href=url target="_blank" rel="noreferrer">
                            {format!("Additional document {}", i + 1)}
                        </a>
                    }).collect_view()}
                </div>
            </section>
        </div>
    }
}
