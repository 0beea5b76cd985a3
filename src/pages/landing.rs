use std::rc::Rc;

use chrono::Datelike;
use gloo_timers::callback::Timeout;
use log::{debug, info};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::contact_modal::ContactModal;
use crate::components::estimator_panel::EstimatorPanel;
use crate::components::service_card::ServiceCard;
use crate::config;
use crate::contact::clipboard::{ClipboardCopier, WebClipboard};
use crate::contact::links::{mailto_link, whatsapp_link};
use crate::contact::modal::arm_auto_open;
use crate::intent::{Intent, Session};
use crate::timer::{BrowserScheduler, Scheduler};

const SERVICES: [(&str, &str, &str, &str); 4] = [
    (
        "01",
        "Construction",
        "Building your dream home from the ground up.",
        "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?q=80&w=2053",
    ),
    (
        "02",
        "Commercial",
        "High-performance workspaces driving growth.",
        "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?q=80&w=2070",
    ),
    (
        "03",
        "Renovation",
        "Breathing new life into existing structures.",
        "https://images.unsplash.com/photo-1503387762-592deb58ef4e?q=80&w=2031",
    ),
    (
        "04",
        "Land Advisory",
        "Finding the perfect plot for your investment.",
        "https://images.unsplash.com/photo-1500382017468-9049fed747ef?q=80&w=2000",
    ),
];

const PROMISES: [&str; 3] = [
    "Premium Quality Materials",
    "On-time Delivery",
    "Transparent Pricing",
];

pub struct Landing {
    session: Session,
    copier: Rc<ClipboardCopier<WebClipboard>>,
    // Pending timers. Dropping a handle cancels it.
    auto_open: Option<Timeout>,
    copy_reset: Option<Timeout>,
}

impl Component for Landing {
    type Message = Intent;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let auto_open = arm_auto_open(
            &BrowserScheduler,
            config::AUTO_OPEN_DELAY_MS,
            move |intent| link.send_message(intent),
        );

        Self {
            session: Session::default(),
            copier: Rc::new(ClipboardCopier::new(WebClipboard)),
            auto_open: Some(auto_open),
            copy_reset: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Intent::AutoOpenElapsed => {
                self.auto_open = None;
                self.session.apply(Intent::AutoOpenElapsed)
            }
            // The controller refuses a copy while one is in flight or after teardown.
            Intent::CopyNumber => {
                if !self.session.apply(Intent::CopyNumber) {
                    return false;
                }
                let copier = self.copier.clone();
                let number = self.session.contact.contact_number();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let outcome = copier.copy(number).await;
                    link.send_message(Intent::CopyFinished(outcome));
                });
                true
            }
            Intent::CopyFinished(outcome) => {
                info!("Copy number finished: {:?}", outcome);
                if !self.session.apply(Intent::CopyFinished(outcome)) {
                    return false;
                }
                let link = ctx.link().clone();
                // replacing the handle cancels an older reset still in flight
                self.copy_reset = Some(BrowserScheduler.schedule(
                    config::COPY_STATUS_RESET_MS,
                    Box::new(move || link.send_message(Intent::CopyStatusExpired)),
                ));
                true
            }
            intent @ (Intent::SetArea(_) | Intent::SetPackage(_)) => {
                let changed = self.session.apply(intent);
                if changed {
                    debug!("Estimate now ₹{}", self.session.estimator.total_cost());
                }
                changed
            }
            intent => self.session.apply(intent),
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.session.contact.dispose();
        self.auto_open.take();
        self.copy_reset.take();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_intent = ctx.link().callback(|intent: Intent| intent);
        let open_panel = ctx.link().callback(|_: MouseEvent| Intent::OpenPanel);
        let open_modal = ctx.link().callback(|_: MouseEvent| Intent::OpenModal);
        let year = chrono::Local::now().year();
        let contact = &self.session.contact;

        html! {
            <div class="landing-page">
                <style>{LANDING_CSS}</style>

                <EstimatorPanel
                    is_open={self.session.panel.is_open()}
                    estimator={self.session.estimator.clone()}
                    on_intent={on_intent.clone()}
                />
                <ContactModal
                    is_open={contact.is_open()}
                    contact_number={contact.contact_number()}
                    copy_status={contact.copy_status()}
                    on_intent={on_intent}
                />

                <button class="fab-calculator" onclick={open_panel.clone()}>
                    <span class="fab-icon">{"🧮"}</span>
                    <span class="fab-text">
                        <span class="fab-caption">{"Estimate Cost"}</span>
                        <span class="fab-title">{"CALCULATOR"}</span>
                    </span>
                </button>
                <button class="fab-phone" onclick={open_modal.clone()}>{"📞"}</button>

                <header class="hero">
                    <div class="hero-background"></div>
                    <div class="hero-overlay"></div>
                    <div class="hero-content">
                        <div class="hero-kicker">
                            <div class="kicker-line"></div>
                            <span>{"Skr Builders & Promoters"}</span>
                        </div>
                        <h1>
                            {"CRAFTING"}<br />
                            <span class="hero-gradient">{"LEGACIES"}</span>
                        </h1>
                        <p class="hero-subtitle">
                            {"We don't just pour concrete. We engineer lifestyles. Experience the pinnacle of construction with Chennai's finest."}
                        </p>
                        <button class="hero-cta" onclick={open_panel}>
                            {"OPEN COST CALCULATOR"}
                        </button>
                    </div>
                </header>

                <section id="services" class="services-section">
                    <div class="section-heading">
                        <h2>{"Mastery in Motion"}</h2>
                        <div class="heading-bar"></div>
                        <p>{"Comprehensive solutions for all your property needs"}</p>
                    </div>
                    <div class="services-grid">
                        { for SERVICES.iter().map(|(number, title, desc, image)| html! {
                            <ServiceCard number={*number} title={*title} desc={*desc} image={*image} />
                        }) }
                    </div>
                </section>

                <section class="about-section">
                    <div class="about-grid">
                        <div>
                            <h3 class="about-kicker">{"About Us"}</h3>
                            <h2>{"Quality You Can Trust"}</h2>
                            <p>
                                {format!(
                                    "At {}, we don't just build structures; we build relationships. Led by {}, our team is committed to delivering excellence.",
                                    config::BUSINESS_NAME,
                                    config::PROPRIETOR,
                                )}
                            </p>
                            <ul class="promise-list">
                                { for PROMISES.iter().map(|item| html! {
                                    <li><span class="promise-tick">{"✔"}</span>{*item}</li>
                                }) }
                            </ul>
                        </div>
                        <div class="about-image"></div>
                    </div>
                </section>

                <section class="contact-section">
                    <div class="section-heading">
                        <h2 style="color: #fff;">{"Start the Conversation"}</h2>
                        <div class="heading-bar"></div>
                        <p>{"Choose how you'd like to connect with us"}</p>
                    </div>
                    <div class="contact-grid">
                        <a class="contact-card whatsapp" href={whatsapp_link(None)} target="_blank" rel="noopener noreferrer">
                            <div class="contact-card-inner">
                                <div class="contact-icon">{"💬"}</div>
                                <h3>{"WhatsApp"}</h3>
                                <p>{"Immediate response for quick queries"}</p>
                                <span class="contact-cta">{"Chat Now"}</span>
                            </div>
                        </a>
                        <a class="contact-card email" href={mailto_link()}>
                            <div class="contact-card-inner">
                                <div class="contact-icon">{"✉"}</div>
                                <h3>{"Email Us"}</h3>
                                <p>{"Send floor plans & documents"}</p>
                                <span class="contact-cta">{"Send Email"}</span>
                            </div>
                        </a>
                        <div class="contact-card phone" onclick={open_modal}>
                            <div class="contact-card-inner">
                                <div class="contact-icon">{"📞"}</div>
                                <h3>{"Call Directly"}</h3>
                                <p>{"Speak with us now"}</p>
                                <span class="contact-cta">{"View Number"}</span>
                            </div>
                        </div>
                    </div>
                </section>

                <footer class="site-footer">
                    <p>{format!("© {} {}.", year, config::BUSINESS_NAME)}</p>
                    <p class="footer-address">{format!("📍 {}", config::ADDRESS)}</p>
                </footer>
                <div class="developer-credit">
                    <p>{format!("© {} {}. All rights reserved.", year, config::DEVELOPER_CREDIT)}</p>
                </div>
            </div>
        }
    }
}

const LANDING_CSS: &str = r#"
    .landing-page {
        background: #fff;
        min-height: 100vh;
        color: #1A1A1A;
        overflow-x: hidden;
    }
    .landing-page ::selection {
        background: #E63946;
        color: #fff;
    }
    .fab-calculator {
        position: fixed;
        bottom: 2rem;
        right: 2rem;
        z-index: 40;
        display: flex;
        align-items: center;
        gap: 0.75rem;
        padding: 1rem 1.5rem 1rem 1rem;
        background: #0F4C81;
        color: #fff;
        border: none;
        border-radius: 9999px;
        box-shadow: 0 0 0 4px #fff, 0 0 20px rgba(15,76,129,0.5);
        cursor: pointer;
        transition: transform 0.2s;
    }
    .fab-calculator:hover {
        transform: scale(1.05);
    }
    .fab-icon {
        background: #fff;
        color: #0F4C81;
        padding: 0.75rem;
        border-radius: 50%;
        font-size: 1.5rem;
    }
    .fab-text {
        text-align: left;
    }
    .fab-caption {
        display: block;
        font-size: 0.75rem;
        font-weight: bold;
        text-transform: uppercase;
        opacity: 0.8;
    }
    .fab-title {
        display: block;
        font-size: 1.125rem;
        font-weight: 900;
    }
    .fab-phone {
        display: none;
        position: fixed;
        bottom: 2rem;
        right: 1rem;
        z-index: 40;
        background: #22c55e;
        color: #fff;
        border: none;
        border-radius: 50%;
        padding: 1rem;
        font-size: 1.5rem;
        cursor: pointer;
    }
    .hero {
        position: relative;
        height: 100vh;
        width: 100%;
        overflow: hidden;
    }
    .hero-background {
        position: absolute;
        inset: 0;
        background-image: url('https://images.unsplash.com/photo-1600585154340-be6161a56a0c?q=80&w=2070&auto=format&fit=crop');
        background-size: cover;
        background-position: center;
        animation: heroReveal 1.5s ease-out;
    }
    .hero-overlay {
        position: absolute;
        inset: 0;
        background: linear-gradient(to bottom, rgba(0,0,0,0.6), rgba(0,0,0,0.4), rgba(0,0,0,0.8));
    }
    .hero-content {
        position: relative;
        z-index: 2;
        max-width: 56rem;
        height: 100%;
        margin: 0 auto;
        padding: 0 1rem;
        display: flex;
        flex-direction: column;
        justify-content: center;
        align-items: flex-start;
        animation: fadeIn 0.8s ease-out;
    }
    .hero-kicker {
        display: flex;
        align-items: center;
        gap: 1rem;
        margin-bottom: 1.5rem;
        color: #E63946;
        letter-spacing: 0.3em;
        font-weight: bold;
        text-transform: uppercase;
    }
    .kicker-line {
        height: 2px;
        width: 5rem;
        background: #E63946;
    }
    .hero h1 {
        font-size: clamp(3.75rem, 8vw, 6rem);
        font-weight: 900;
        color: #fff;
        line-height: 1;
        margin: 0 0 2rem 0;
    }
    .hero-gradient {
        background: linear-gradient(to right, #E63946, #f97316);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
    .hero-subtitle {
        font-size: 1.25rem;
        color: #e5e7eb;
        max-width: 36rem;
        margin-bottom: 3rem;
        border-left: 4px solid #0F4C81;
        padding: 1rem 0 1rem 1.5rem;
        background: rgba(0,0,0,0.2);
    }
    .hero-cta {
        padding: 1rem 2rem;
        background: #fff;
        color: #1A1A1A;
        font-weight: bold;
        border: none;
        cursor: pointer;
        transition: background 0.3s, color 0.3s;
    }
    .hero-cta:hover {
        background: #E63946;
        color: #fff;
    }
    .section-heading {
        text-align: center;
        margin-bottom: 4rem;
    }
    .section-heading h2 {
        font-size: 2.25rem;
        color: #0F4C81;
        margin-bottom: 1rem;
    }
    .section-heading p {
        color: #6b7280;
    }
    .heading-bar {
        width: 6rem;
        height: 4px;
        background: #E63946;
        margin: 0 auto;
        border-radius: 9999px;
    }
    .services-section {
        padding: 6rem 1rem;
    }
    .services-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
        gap: 2rem;
        max-width: 80rem;
        margin: 0 auto;
    }
    .service-card {
        position: relative;
        height: 450px;
        overflow: hidden;
        background: #111827;
        border-radius: 1rem;
        cursor: pointer;
        transition: transform 0.3s;
    }
    .service-card:hover {
        transform: translateY(-10px);
    }
    .service-card img {
        position: absolute;
        inset: 0;
        width: 100%;
        height: 100%;
        object-fit: cover;
        opacity: 0.6;
        transition: all 0.7s;
    }
    .service-card:hover img {
        opacity: 0.4;
        transform: scale(1.1);
    }
    .service-card-body {
        position: absolute;
        inset: 0;
        padding: 2rem;
        display: flex;
        flex-direction: column;
        justify-content: space-between;
        z-index: 1;
    }
    .service-number {
        font-size: 3.75rem;
        font-weight: 900;
        color: rgba(255,255,255,0.1);
        transition: color 0.3s;
    }
    .service-card:hover .service-number {
        color: rgba(255,255,255,0.3);
    }
    .service-text h3 {
        font-size: 1.875rem;
        color: #fff;
        margin-bottom: 0.5rem;
    }
    .service-text p {
        color: #d1d5db;
        font-size: 0.875rem;
        opacity: 0;
        transition: opacity 0.5s;
    }
    .service-card:hover .service-text p {
        opacity: 1;
    }
    .service-underline {
        margin-top: 1.5rem;
        width: 3rem;
        height: 4px;
        background: #E63946;
        transform: scaleX(0);
        transform-origin: left;
        transition: transform 0.5s;
    }
    .service-card:hover .service-underline {
        transform: scaleX(1);
    }
    .about-section {
        padding: 5rem 1rem;
        background: #0F4C81;
        color: #fff;
    }
    .about-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
        gap: 3rem;
        align-items: center;
        max-width: 80rem;
        margin: 0 auto;
    }
    .about-kicker {
        color: #E63946;
        letter-spacing: 0.1em;
        text-transform: uppercase;
    }
    .about-grid h2 {
        font-size: 2.25rem;
        margin-bottom: 1.5rem;
    }
    .about-grid p {
        color: #dbeafe;
        line-height: 1.6;
    }
    .promise-list {
        list-style: none;
        padding: 0;
    }
    .promise-list li {
        display: flex;
        gap: 0.75rem;
        margin-bottom: 0.75rem;
    }
    .promise-tick {
        color: #E63946;
    }
    .about-image {
        height: 400px;
        border-radius: 1rem;
        background-image: url('https://images.unsplash.com/photo-1600585154340-be6161a56a0c?q=80&w=2070');
        background-size: cover;
        background-position: center;
        box-shadow: 0 25px 50px rgba(0,0,0,0.4);
    }
    .contact-section {
        padding: 6rem 1rem;
        background: #1A1A1A;
    }
    .contact-section .section-heading p {
        color: #9ca3af;
    }
    .contact-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
        gap: 2rem;
        max-width: 72rem;
        margin: 0 auto;
    }
    .contact-card {
        display: block;
        padding: 4px;
        border-radius: 1rem;
        text-decoration: none;
        cursor: pointer;
        transition: transform 0.3s;
    }
    .contact-card:hover {
        transform: translateY(-8px);
    }
    .contact-card.whatsapp { background: #25D366; }
    .contact-card.email { background: #0F4C81; }
    .contact-card.phone { background: #374151; }
    .contact-card-inner {
        height: 100%;
        border-radius: 0.75rem;
        padding: 2rem;
        display: flex;
        flex-direction: column;
        align-items: center;
        text-align: center;
        color: #fff;
        box-sizing: border-box;
    }
    .contact-card.whatsapp .contact-card-inner { background: #1a3c29; }
    .contact-card.email .contact-card-inner { background: #0a1f33; }
    .contact-card.phone .contact-card-inner { background: #1a1a1a; }
    .contact-icon {
        font-size: 2rem;
        margin-bottom: 1.5rem;
    }
    .contact-card p {
        color: #9ca3af;
        font-size: 0.875rem;
        margin-bottom: 1.5rem;
    }
    .contact-cta {
        width: 100%;
        padding: 0.75rem 2rem;
        border-radius: 0.5rem;
        font-weight: bold;
        background: rgba(255,255,255,0.1);
        box-sizing: border-box;
    }
    .site-footer {
        background: #000;
        color: #6b7280;
        padding: 2.5rem 1rem;
        text-align: center;
        font-size: 0.875rem;
        border-top: 1px solid #111827;
    }
    .developer-credit {
        background: #0a0a0a;
        padding: 0.75rem;
        text-align: center;
        font-size: 0.75rem;
        color: #4b5563;
    }
    @keyframes fadeIn {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    @keyframes heroReveal {
        from { transform: scale(1.2); filter: grayscale(100%); }
        to { transform: scale(1); filter: grayscale(0%); }
    }
    @media (max-width: 768px) {
        .fab-calculator {
            display: none;
        }
        .fab-phone {
            display: flex;
        }
    }
"#;
