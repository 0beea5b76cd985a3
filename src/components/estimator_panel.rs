use log::error;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};
use yew::prelude::*;

use crate::contact::links::{whatsapp_link, CUSTOM_QUOTE};
use crate::estimator::catalog::PackageChoice;
use crate::estimator::format::{format_lakhs, format_rate};
use crate::estimator::state::{AreaInput, Estimate, EstimatorState, AREA_MAX, AREA_MIN, AREA_STEP};
use crate::intent::Intent;

#[derive(Properties, PartialEq)]
pub struct EstimatorPanelProps {
    pub is_open: bool,
    pub estimator: EstimatorState,
    pub on_intent: Callback<Intent>,
}

const PANEL_CSS: &str = r#"
    .panel-backdrop {
        position: fixed;
        inset: 0;
        background: rgba(0, 0, 0, 0.6);
        backdrop-filter: blur(4px);
        z-index: 90;
        animation: fadeIn 0.3s ease-out;
    }
    .blueprint-panel {
        position: fixed;
        top: 0;
        right: 0;
        height: 100%;
        width: 100%;
        max-width: 600px;
        background: #0F4C81;
        background-image:
            linear-gradient(rgba(255,255,255,0.1) 1px, transparent 1px),
            linear-gradient(90deg, rgba(255,255,255,0.1) 1px, transparent 1px);
        background-size: 20px 20px;
        border-left: 4px solid #fff;
        z-index: 100;
        overflow-y: auto;
        color: #fff;
        font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
        display: flex;
        flex-direction: column;
        padding: 2.5rem 2.5rem 0 2.5rem;
        animation: slideInRight 0.4s ease-out;
    }
    .panel-header {
        display: flex;
        justify-content: space-between;
        align-items: flex-start;
        border-bottom: 1px solid rgba(255,255,255,0.3);
        padding-bottom: 1rem;
        margin-bottom: 2rem;
    }
    .panel-header h2 {
        margin: 0;
        font-size: 1.5rem;
        letter-spacing: -0.05em;
    }
    .panel-header p {
        margin: 0;
        font-size: 0.75rem;
        color: #bfdbfe;
    }
    .panel-close {
        background: none;
        border: none;
        color: #fff;
        font-size: 1.5rem;
        cursor: pointer;
    }
    .panel-label {
        display: block;
        font-size: 0.75rem;
        font-weight: bold;
        text-transform: uppercase;
        letter-spacing: 0.1em;
        color: #bfdbfe;
        margin-bottom: 0.75rem;
    }
    .area-block {
        margin-bottom: 2rem;
        transition: opacity 0.3s;
    }
    .area-block.disabled {
        opacity: 0.5;
        pointer-events: none;
    }
    .area-inputs {
        display: flex;
        align-items: center;
        gap: 1rem;
    }
    .area-inputs input[type=range] {
        width: 100%;
        accent-color: #E63946;
    }
    .area-inputs input[type=number] {
        width: 6rem;
        background: rgba(255,255,255,0.1);
        border: 1px solid rgba(255,255,255,0.3);
        color: #fff;
        padding: 0.5rem;
        text-align: center;
        font-weight: bold;
        border-radius: 4px;
    }
    .package-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 0.5rem;
        margin-bottom: 2rem;
    }
    .package-card {
        border: 2px solid rgba(255,255,255,0.3);
        padding: 0.5rem;
        cursor: pointer;
        transition: all 0.2s;
    }
    .package-card:hover {
        background: rgba(255,255,255,0.1);
    }
    .package-card .card-title {
        display: flex;
        justify-content: space-between;
        font-size: 0.75rem;
        font-weight: bold;
        text-transform: uppercase;
    }
    .package-card .card-rate {
        font-size: 1.125rem;
        font-weight: 900;
    }
    .package-card.selected.basic {
        background: #fff;
        color: #0F4C81;
        border-color: #fff;
    }
    .package-card.selected.classic {
        background: #E63946;
        border-color: #E63946;
    }
    .package-card.selected.custom {
        background: #22c55e;
        border-color: #22c55e;
    }
    .package-details {
        flex-grow: 1;
        margin-bottom: 2rem;
    }
    .feature-row {
        display: flex;
        gap: 0.75rem;
        font-size: 0.875rem;
        border-bottom: 1px solid rgba(255,255,255,0.1);
        padding: 0.5rem 0;
    }
    .feature-row .tick {
        color: #4ade80;
    }
    .exclusion-note {
        font-size: 0.75rem;
        font-style: italic;
        color: #bfdbfe;
        margin-top: 1rem;
    }
    .custom-block {
        background: rgba(255,255,255,0.1);
        border: 1px solid rgba(255,255,255,0.2);
        border-radius: 8px;
        padding: 1.5rem;
        text-align: center;
    }
    .custom-block ul {
        text-align: left;
        max-width: 200px;
        margin: 0 auto;
        list-style: none;
        padding: 0;
    }
    .panel-footer {
        margin: auto -2.5rem 0 -2.5rem;
        background: rgba(0,0,0,0.3);
        border-top: 1px solid rgba(255,255,255,0.2);
        padding: 2.5rem;
    }
    .estimate-row {
        display: flex;
        justify-content: space-between;
        align-items: flex-end;
        margin-bottom: 1.5rem;
    }
    .estimate-value {
        font-size: 2.25rem;
        font-weight: 900;
        color: #E63946;
    }
    .panel-cta {
        display: block;
        width: 100%;
        padding: 1rem;
        border: none;
        font-weight: 900;
        font-size: 1.125rem;
        text-transform: uppercase;
        letter-spacing: 0.1em;
        text-align: center;
        text-decoration: none;
        cursor: pointer;
        background: #fff;
        color: #0F4C81;
    }
    .panel-cta:hover {
        background: #E63946;
        color: #fff;
    }
    .panel-cta.whatsapp {
        background: #22c55e;
        color: #fff;
        border-radius: 8px;
    }
    @keyframes slideInRight {
        from { transform: translateX(100%); }
        to { transform: translateX(0); }
    }
"#;

#[function_component(EstimatorPanel)]
pub fn estimator_panel(props: &EstimatorPanelProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let estimator = &props.estimator;
    let selected = estimator.selected();
    let is_custom = selected == PackageChoice::Custom;

    let close = {
        let on_intent = props.on_intent.clone();
        Callback::from(move |_: MouseEvent| on_intent.emit(Intent::ClosePanel))
    };

    let on_slider = {
        let on_intent = props.on_intent.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(value) = input.value().parse::<u32>() {
                on_intent.emit(Intent::SetArea(AreaInput::Slider(value)));
            }
        })
    };

    let on_typed = {
        let on_intent = props.on_intent.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_intent.emit(Intent::SetArea(AreaInput::Typed(input.value())));
        })
    };

    // One handler for all cards, the card carries its package in data-package.
    let on_pick = {
        let on_intent = props.on_intent.clone();
        Callback::from(move |e: MouseEvent| {
            let card = e
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest("[data-package]").ok().flatten());
            let Some(card) = card else { return };
            let raw = card.get_attribute("data-package").unwrap_or_default();
            match raw.parse::<PackageChoice>() {
                Ok(choice) => on_intent.emit(Intent::SetPackage(choice)),
                Err(e) => error!("Package card carries a bad id: {}", e),
            }
        })
    };

    let request_quote = {
        let on_intent = props.on_intent.clone();
        Callback::from(move |_: MouseEvent| on_intent.emit(Intent::OpenModal))
    };

    let cards = PackageChoice::ALL.iter().map(|choice| {
        let label = choice.as_str().to_uppercase();
        let price = match choice.package() {
            Some(package) => format_rate(package.rate),
            None => "QUOTE".to_string(),
        };
        let is_selected = *choice == selected;
        html! {
            <div
                class={classes!("package-card", choice.as_str(), is_selected.then(|| "selected"))}
                data-package={choice.as_str()}
                onclick={on_pick.clone()}
            >
                <div class="card-title">
                    <span>{label}</span>
                    { if is_selected { html! { <span>{"✔"}</span> } } else { html! {} } }
                </div>
                <div class="card-rate">{price}</div>
            </div>
        }
    }).collect::<Html>();

    let details = match selected.package() {
        Some(package) => html! {
            <>
                <h3 style="margin: 0 0 0.5rem 0;">{package.name}</h3>
                <ul style="list-style: none; padding: 0; margin: 0;">
                    { for package.features.iter().map(|feature| html! {
                        <li class="feature-row">
                            <span class="tick">{"✓"}</span>
                            <span>{*feature}</span>
                        </li>
                    }) }
                </ul>
                <p class="exclusion-note">
                    {"* Rates typically exclude compound wall, sump, septic tank, over head tank and additional works."}
                </p>
            </>
        },
        None => html! {
            <div class="custom-block">
                <div style="font-size: 2rem; color: #4ade80;">{"🔨"}</div>
                <h3>{"Tailored For You"}</h3>
                <p style="font-size: 0.875rem; opacity: 0.8;">
                    {"Need a specific material brand? Luxury finish? Or a commercial complex? We create custom BOQs matching your exact requirements and budget."}
                </p>
                <ul>
                    <li>{"✓ Specific Brands"}</li>
                    <li>{"✓ Architectural Designs"}</li>
                    <li>{"✓ Turnkey Solutions"}</li>
                </ul>
            </div>
        },
    };

    let footer = match estimator.estimate() {
        Estimate::Priced(paise) => html! {
            <>
                <div class="estimate-row">
                    <span style="font-size: 0.875rem; font-weight: bold; opacity: 0.7;">{"ESTIMATED COST"}</span>
                    <span class="estimate-value">{format_lakhs(paise)}</span>
                </div>
                <button class="panel-cta" onclick={request_quote}>
                    {"GET DETAILED QUOTE →"}
                </button>
            </>
        },
        Estimate::QuoteRequired => html! {
            <a
                class="panel-cta whatsapp"
                href={whatsapp_link(Some(CUSTOM_QUOTE))}
                target="_blank"
                rel="noopener noreferrer"
            >
                {"💬 CHAT FOR ESTIMATE"}
            </a>
        },
    };

    html! {
        <>
            <style>{PANEL_CSS}</style>
            <div class="panel-backdrop" onclick={close.clone()}></div>
            <aside class="blueprint-panel">
                <div class="panel-header">
                    <div>
                        <h2>{"COST_ESTIMATOR"}</h2>
                        <p>{"LIVE RATES 2025"}</p>
                    </div>
                    <button class="panel-close" onclick={close}>{"✕"}</button>
                </div>

                <div class={classes!("area-block", is_custom.then(|| "disabled"))}>
                    <label class="panel-label">{"01 // BUILD AREA (SQ.FT)"}</label>
                    <div class="area-inputs">
                        <input
                            type="range"
                            min={AREA_MIN.to_string()}
                            max={AREA_MAX.to_string()}
                            step={AREA_STEP.to_string()}
                            value={estimator.slider_value().to_string()}
                            oninput={on_slider}
                        />
                        <input
                            type="number"
                            value={estimator.area_label()}
                            oninput={on_typed}
                        />
                    </div>
                </div>

                <label class="panel-label">{"02 // SELECT PACKAGE"}</label>
                <div class="package-grid">
                    {cards}
                </div>

                <div class="package-details">
                    <label class="panel-label">{"DETAILS:"}</label>
                    {details}
                </div>

                <div class="panel-footer">
                    {footer}
                </div>
            </aside>
        </>
    }
}
