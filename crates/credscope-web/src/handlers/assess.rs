//! Credit risk assessment page — the applicant form and its result cards.
//!
//! The page is a pure function of the submitted snapshot: every request
//! re-renders the whole document from the form values it carries, so no
//! widget state lives on the server between requests.

use axum::{extract::State, response::Html, Form};
use std::fmt;

use credscope_common::{
    ApplicantInput, LoanPurpose, LoanType, ResidenceType, ScoringResult, Theme,
};
use crate::state::SharedState;

/// Page masthead shared across the site
const HEADER_HTML: &str = include_str!("../../templates/header.html");

pub async fn assess_page(State(state): State<SharedState>) -> Html<String> {
    Html(render_assess_page(&state.theme, &ApplicantInput::default(), None))
}

pub async fn assess_submit(
    State(state): State<SharedState>,
    Form(input): Form<ApplicantInput>,
) -> Html<String> {
    // One scoring call per submission
    let result = state.scorer.predict(&input);

    tracing::info!(
        probability = result.probability,
        credit_score = result.credit_score,
        rating = %result.rating,
        "assessment computed"
    );

    Html(render_assess_page(&state.theme, &input, Some(&result)))
}

/// Probability as a percentage with two decimal places, e.g. "45.67%".
fn format_percent(probability: f64) -> String {
    format!("{:.2}%", probability * 100.0)
}

fn number_input(label: &str, name: &str, value: u64, min: u64, max: Option<u64>) -> String {
    let max_attr = max.map(|m| format!(r#" max="{m}""#)).unwrap_or_default();
    format!(
        r#"<div class="form-group">
                <label for="{name}">{label}</label>
                <input type="number" id="{name}" name="{name}" value="{value}" min="{min}"{max_attr} step="1" required>
            </div>"#
    )
}

fn select_input<T>(label: &str, name: &str, options: &[T], selected: T) -> String
where
    T: fmt::Display + PartialEq + Copy,
{
    let options_html: String = options
        .iter()
        .map(|option| {
            let selected_attr = if *option == selected { " selected" } else { "" };
            format!(r#"<option value="{option}"{selected_attr}>{option}</option>"#)
        })
        .collect();
    format!(
        r#"<div class="form-group">
                <label for="{name}">{label}</label>
                <select id="{name}" name="{name}">{options_html}</select>
            </div>"#
    )
}

/// Palette as CSS custom properties, so the static stylesheet follows
/// whatever theme the server was started with.
fn theme_style_block(theme: &Theme) -> String {
    format!(
        r#"<style>
        :root {{
            --brand-primary: {};
            --risk-red: {};
            --risk-amber: {};
            --risk-green: {};
            --surface: {};
            --border: {};
            --text-muted: {};
        }}
    </style>"#,
        theme.primary,
        theme.risk_red,
        theme.risk_amber,
        theme.risk_green,
        theme.surface,
        theme.border,
        theme.text_muted,
    )
}

fn render_results(theme: &Theme, result: &ScoringResult) -> String {
    let rating = result.rating.to_string();
    let rating_color = theme.rating_color(&rating);
    format!(
        r#"<hr class="divider">
    <h2 class="results-title">📋 Risk Assessment Results</h2>
    <div class="row-3">
        <div class="result-card">
            <div class="result-label">Default Probability</div>
            <div class="result-value">{probability}</div>
        </div>
        <div class="result-card">
            <div class="result-label">Credit Score</div>
            <div class="result-value">{score}</div>
        </div>
        <div class="result-card">
            <div class="result-label">Risk Rating</div>
            <div class="result-value" style="color: {rating_color};">{rating}</div>
        </div>
    </div>"#,
        probability = format_percent(result.probability),
        score = result.credit_score,
    )
}

/// Render the whole assessment page from one input snapshot. Submitted
/// values are echoed back into the widgets so the form keeps its state
/// across posts.
pub fn render_assess_page(
    theme: &Theme,
    input: &ApplicantInput,
    result: Option<&ScoringResult>,
) -> String {
    let results_html = result
        .map(|r| render_results(theme, r))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Credscope — Credit Risk Assessment</title>
    <link rel="stylesheet" href="/static/css/main.css">
    {style_block}
</head>
<body>
<div class="app-container">
{header}
<main class="main-content">
    <form method="POST" action="/">
        <div class="section-title">👤 Applicant Information</div>
        <div class="row-3">
            {age}
            {income}
            {loan_amount}
        </div>

        <div class="section-title">📊 Financial Metrics</div>
        <div class="row-3">
            <div class="metric-card">
                <div class="metric-label">Loan to Income Ratio</div>
                <div class="metric-value" id="lti-value">{lti}</div>
            </div>
            {tenure}
            {avg_dpd}
        </div>

        <div class="section-title">📈 Credit History</div>
        <div class="row-3">
            {delinquency}
            {utilization}
            {accounts}
        </div>

        <div class="section-title">🏠 Loan Details</div>
        <div class="row-3">
            {residence}
            {purpose}
            {loan_type}
        </div>

        <button type="submit" class="btn-primary">📊 Calculate Credit Risk</button>
    </form>
    {results}
</main>
</div>
<script src="/static/js/main.js"></script>
</body>
</html>"#,
        style_block = theme_style_block(theme),
        header = HEADER_HTML,
        age = number_input(
            "Age",
            "age",
            input.age as u64,
            ApplicantInput::AGE_MIN as u64,
            Some(ApplicantInput::AGE_MAX as u64),
        ),
        income = number_input("Income (₹)", "income", input.income, 0, None),
        loan_amount = number_input("Loan Amount (₹)", "loan_amount", input.loan_amount, 0, None),
        lti = format!("{:.2}", input.loan_to_income_ratio()),
        tenure = number_input(
            "Loan Tenure (months)",
            "loan_tenure_months",
            input.loan_tenure_months as u64,
            0,
            None,
        ),
        avg_dpd = number_input(
            "Avg DPD",
            "avg_dpd_per_delinquency",
            input.avg_dpd_per_delinquency as u64,
            0,
            None,
        ),
        delinquency = number_input(
            "Delinquency Ratio (%)",
            "delinquency_ratio",
            input.delinquency_ratio as u64,
            0,
            Some(ApplicantInput::PERCENT_MAX as u64),
        ),
        utilization = number_input(
            "Credit Utilization (%)",
            "credit_utilization_ratio",
            input.credit_utilization_ratio as u64,
            0,
            Some(ApplicantInput::PERCENT_MAX as u64),
        ),
        accounts = number_input(
            "Open Loan Accounts",
            "num_open_accounts",
            input.num_open_accounts as u64,
            ApplicantInput::OPEN_ACCOUNTS_MIN as u64,
            Some(ApplicantInput::OPEN_ACCOUNTS_MAX as u64),
        ),
        residence = select_input(
            "Residence Type",
            "residence_type",
            &ResidenceType::ALL,
            input.residence_type,
        ),
        purpose = select_input(
            "Loan Purpose",
            "loan_purpose",
            &LoanPurpose::ALL,
            input.loan_purpose,
        ),
        loan_type = select_input("Loan Type", "loan_type", &LoanType::ALL, input.loan_type),
        results = results_html,
    )
}
