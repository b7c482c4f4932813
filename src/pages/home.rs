use yew::prelude::*;
use yew_router::components::Link;

use crate::components::animated_section::AnimatedSection;
use crate::components::hero_section::HeroSection;
use crate::Route;

const OVERVIEW_CARDS: [(&str, &str, &str, Route); 3] = [
    (
        "AI-Driven Analytics",
        "Predictive maintenance and quality control through machine learning",
        "\u{1F9E0}",
        Route::Technology,
    ),
    (
        "Industry 4.0/5.0 Ready",
        "Complete digital transformation for regulated manufacturing",
        "\u{1F3ED}",
        Route::Industries,
    ),
    (
        "Compliance Automation",
        "Automated regulatory reporting and audit trail management",
        "\u{2696}\u{FE0F}",
        Route::Solutions,
    ),
];

const INDUSTRY_CARDS: [(&str, &str); 5] = [
    ("Pharmaceuticals", "\u{1F48A}"),
    ("Medical Devices", "\u{1FA7A}"),
    ("Food & Beverage", "\u{1F37D}\u{FE0F}"),
    ("Biotech", "\u{1F9EC}"),
    ("Nutraceuticals", "\u{1F33F}"),
];

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <div>
            <HeroSection />

            <AnimatedSection class="section section-light">
                <div class="section-inner">
                    <h2 class="section-title">{"Transforming Regulated Industries"}</h2>
                    <p class="section-intro">
                        {"Building smart, future-ready platforms that enable safe, efficient, and \
                          fully compliant operations across regulated industries."}
                    </p>
                    <div class="card-grid">
                        { for OVERVIEW_CARDS.iter().enumerate().map(|(index, (title, desc, icon, route))| html! {
                            <AnimatedSection stagger_index={index as u32}>
                                <Link<Route> to={route.clone()}>
                                    <div class="card" style="text-align: center;">
                                        <div class="card-icon">{*icon}</div>
                                        <h3>{*title}</h3>
                                        <p>{*desc}</p>
                                    </div>
                                </Link<Route>>
                            </AnimatedSection>
                        }) }
                    </div>
                </div>
            </AnimatedSection>

            <AnimatedSection class="section section-tint">
                <div class="section-inner">
                    <h2 class="section-title">{"Industries We Serve"}</h2>
                    <p class="section-intro">
                        {"Specialized solutions for regulated industries demanding the highest standards."}
                    </p>
                    <div class="card-grid">
                        { for INDUSTRY_CARDS.iter().map(|(name, icon)| html! {
                            <Link<Route> to={Route::Industries}>
                                <div class="card" style="text-align: center;">
                                    <div class="card-icon">{*icon}</div>
                                    <h3>{*name}</h3>
                                    <p>{"GxP Compliant Solutions"}</p>
                                </div>
                            </Link<Route>>
                        }) }
                    </div>
                </div>
            </AnimatedSection>

            <AnimatedSection class="section section-dark">
                <div class="section-inner" style="text-align: center;">
                    <h2 class="section-title">{"Ready to Transform Your Operations?"}</h2>
                    <p class="section-intro">
                        {"Join the industry leaders already redefining regulated manufacturing \
                          with BhriguOne."}
                    </p>
                    <div class="cta-row">
                        <Link<Route> to={Route::Contact}>
                            <button class="cta-primary">{"Schedule a Demo"}</button>
                        </Link<Route>>
                        <Link<Route> to={Route::Products}>
                            <button class="cta-secondary">{"Explore the Platform"}</button>
                        </Link<Route>>
                    </div>
                </div>
            </AnimatedSection>
        </div>
    }
}
