//! Landing page
//!
//! The single routed page of the site. It owns the navigation state and swaps
//! between the long-scroll home view and the full-page views (ROI calculator,
//! strategy call booking, contact form) without changing the URL.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::Page;
use crate::ui::navigation::provide_nav_context;
use crate::ui::pages::{ContactPage, RoiCalculatorPage, StrategyCallPage};
use crate::ui::sections::{
    CaseStudy, Faq, FinalCta, Footer, Guarantee, Header, Hero, Pain, Roadmap, SolutionBridge,
    SolutionStatement, Testimonials, Urgency, Usp,
};

const SITE_URL: &str = "https://buddybots.ai/";

const DESCRIPTION: &str = "Our AI buddies bolt onto your systems, streamline workflows and amplify ROI without disrupting your teams. 90-day ROI-or-free guarantee.";

const STRUCTURED_DATA: &str = r#"{"@context":"https://schema.org","@type":"ProfessionalService","name":"BuddyBots.ai","url":"https://buddybots.ai","description":"AI automation agency cutting operating costs by 30% in 90 days without layoffs","email":"hello@buddybots.ai","areaServed":"Worldwide","serviceType":["AI Automation","Workflow Automation","AI Transformation Consulting"],"offers":{"@type":"Offer","name":"6-Week AI Transformation Sprint","description":"90-day ROI-or-free guarantee"}}"#;

#[component]
pub fn LandingPage() -> impl IntoView {
    let nav = provide_nav_context();

    view! {
        <SeoMeta page=Signal::derive(move || nav.page())/>

        <div class="bg-canvas-navy min-h-screen overflow-x-hidden">
            {move || match nav.page() {
                Page::Home => view! { <HomeView/> }.into_any(),
                Page::RoiCalculator => view! { <RoiCalculatorPage/> }.into_any(),
                Page::StrategyCall => view! { <StrategyCallPage/> }.into_any(),
                Page::Contact => view! { <ContactPage/> }.into_any(),
            }}
        </div>
    }
}

/// Long-scroll home view, sections in page order
#[component]
fn HomeView() -> impl IntoView {
    view! {
        <Header/>
        <main>
            <Hero/>
            <Pain/>
            <SolutionBridge/>
            <SolutionStatement/>
            <Usp/>
            <CaseStudy/>
            <Roadmap/>
            <Faq/>
            <Guarantee/>
            <Urgency/>
            <Testimonials/>
            <FinalCta/>
        </main>
        <Footer/>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta(page: Signal<Page>) -> impl IntoView {
    view! {
        <Title text=move || page.get().title()/>

        <Meta name="description" content=DESCRIPTION/>
        <Meta name="keywords" content="AI automation, AI agency, workflow automation, cost reduction, ROI, business process automation, AI transformation"/>

        // Open Graph / Facebook
        <Meta property="og:type" content="website"/>
        <Meta property="og:url" content=SITE_URL/>
        <Meta property="og:title" content=Page::Home.title()/>
        <Meta property="og:description" content=DESCRIPTION/>

        // Twitter
        <Meta name="twitter:card" content="summary_large_image"/>
        <Meta name="twitter:url" content=SITE_URL/>
        <Meta name="twitter:title" content=Page::Home.title()/>
        <Meta name="twitter:description" content=DESCRIPTION/>

        <Link rel="canonical" href=SITE_URL/>

        <script type="application/ld+json" inner_html=STRUCTURED_DATA></script>
    }
}
