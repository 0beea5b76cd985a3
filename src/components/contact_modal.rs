use yew::prelude::*;

use crate::config;
use crate::contact::links::{tel_link, whatsapp_link, GENERAL_ENQUIRY};
use crate::contact::modal::CopyStatus;
use crate::intent::Intent;

#[derive(Properties, PartialEq)]
pub struct ContactModalProps {
    pub is_open: bool,
    pub contact_number: AttrValue,
    pub copy_status: CopyStatus,
    pub on_intent: Callback<Intent>,
}

fn copy_label(status: CopyStatus) -> &'static str {
    match status {
        CopyStatus::Idle => "⧉ COPY NUMBER",
        CopyStatus::Copying => "COPYING...",
        CopyStatus::Copied => "✓ COPIED",
        CopyStatus::Failed => "COPY FAILED",
    }
}

#[function_component(ContactModal)]
pub fn contact_modal(props: &ContactModalProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let close = {
        let on_intent = props.on_intent.clone();
        Callback::from(move |_: MouseEvent| on_intent.emit(Intent::CloseModal))
    };

    let copy = {
        let on_intent = props.on_intent.clone();
        Callback::from(move |_: MouseEvent| on_intent.emit(Intent::CopyNumber))
    };

    html! {
        <>
            <style>
                {r#"
                    .call-backdrop {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.8);
                        backdrop-filter: blur(12px);
                        z-index: 100;
                        animation: fadeIn 0.3s ease-out;
                    }
                    .call-modal {
                        position: fixed;
                        top: 50%;
                        left: 50%;
                        transform: translate(-50%, -50%);
                        width: 90%;
                        max-width: 24rem;
                        background: linear-gradient(135deg, #0F4C81, #0a3356);
                        border: 1px solid rgba(255,255,255,0.1);
                        border-radius: 2rem;
                        padding: 2rem;
                        z-index: 101;
                        text-align: center;
                        color: #fff;
                        box-shadow: 0 25px 50px rgba(0,0,0,0.5);
                        animation: popIn 0.35s ease-out;
                    }
                    .call-icon {
                        width: 6rem;
                        height: 6rem;
                        margin: 0 auto 1.5rem auto;
                        border-radius: 50%;
                        background: rgba(255,255,255,0.1);
                        border: 1px solid rgba(255,255,255,0.2);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 2.5rem;
                        position: relative;
                    }
                    .call-icon::after {
                        content: '';
                        position: absolute;
                        inset: 0;
                        border-radius: 50%;
                        background: rgba(255,255,255,0.3);
                        animation: ping 1.5s cubic-bezier(0, 0, 0.2, 1) infinite;
                    }
                    .call-modal h3 {
                        font-size: 1.875rem;
                        font-weight: 900;
                        margin: 0 0 0.25rem 0;
                    }
                    .call-role {
                        color: #bfdbfe;
                        font-size: 0.875rem;
                        font-weight: bold;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        margin-bottom: 1.5rem;
                    }
                    .call-number {
                        display: block;
                        background: rgba(255,255,255,0.05);
                        border: 1px solid rgba(255,255,255,0.1);
                        border-radius: 0.75rem;
                        padding: 1rem;
                        margin-bottom: 1.5rem;
                        font-size: 1.5rem;
                        font-weight: 900;
                        letter-spacing: 0.05em;
                        color: #fff;
                        text-decoration: none;
                    }
                    .call-action {
                        display: block;
                        width: 100%;
                        padding: 1rem;
                        margin-bottom: 1rem;
                        border-radius: 0.75rem;
                        font-weight: bold;
                        font-size: 1rem;
                        text-decoration: none;
                        color: #fff;
                        cursor: pointer;
                        border: 1px solid rgba(255,255,255,0.2);
                        background: rgba(255,255,255,0.1);
                        box-sizing: border-box;
                    }
                    .call-action.whatsapp {
                        background: #25D366;
                        border: none;
                    }
                    .call-action.whatsapp:hover {
                        background: #20b858;
                    }
                    .call-action.dismiss {
                        background: rgba(255,255,255,0.05);
                        color: rgba(255,255,255,0.7);
                        margin-bottom: 0;
                    }
                    @keyframes popIn {
                        from { opacity: 0; transform: translate(-50%, -40%) scale(0.8); }
                        to { opacity: 1; transform: translate(-50%, -50%) scale(1); }
                    }
                    @keyframes ping {
                        75%, 100% { transform: scale(1.6); opacity: 0; }
                    }
                "#}
            </style>
            <div class="call-backdrop" onclick={close.clone()}></div>
            <div class="call-modal">
                <div class="call-icon">{"💬"}</div>
                <h3>{config::PROPRIETOR}</h3>
                <p class="call-role">{config::PROPRIETOR_TITLE}</p>
                <a class="call-number" href={tel_link()}>{props.contact_number.clone()}</a>

                <a
                    class="call-action whatsapp"
                    href={whatsapp_link(Some(GENERAL_ENQUIRY))}
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    {"💬 CHAT ON WHATSAPP"}
                </a>
                <button
                    class="call-action"
                    onclick={copy}
                    disabled={props.copy_status == CopyStatus::Copying}
                >
                    {copy_label(props.copy_status)}
                </button>
                <button class="call-action dismiss" onclick={close}>
                    {"Close"}
                </button>
            </div>
        </>
    }
}
