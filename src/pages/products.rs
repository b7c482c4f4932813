use yew::prelude::*;
use yew_router::components::Link;

use crate::components::animated_section::AnimatedSection;
use crate::Route;

struct ProductModule {
    name: &'static str,
    icon: &'static str,
    tagline: &'static str,
    features: [&'static str; 4],
}

const MODULES: [ProductModule; 6] = [
    ProductModule {
        name: "MES",
        icon: "\u{2699}\u{FE0F}",
        tagline: "Manufacturing Execution System for paperless, real-time production control.",
        features: [
            "Electronic Batch Records",
            "Work Order Management",
            "Equipment Integration",
            "Exception Handling",
        ],
    },
    ProductModule {
        name: "LIMS",
        icon: "\u{1F52C}",
        tagline: "Laboratory Information Management tying every sample to its batch.",
        features: [
            "Sample Lifecycle Tracking",
            "Instrument Interfacing",
            "Stability Studies",
            "Certificate of Analysis",
        ],
    },
    ProductModule {
        name: "QMS",
        icon: "\u{1F6E1}\u{FE0F}",
        tagline: "Quality Management with deviations, CAPAs, and change control in one flow.",
        features: [
            "Deviation Management",
            "CAPA Workflows",
            "Change Control",
            "Training Records",
        ],
    },
    ProductModule {
        name: "Regulatory Compliance",
        icon: "\u{2696}\u{FE0F}",
        tagline: "Automated evidence collection and submission-ready documentation.",
        features: [
            "Audit Trail Review",
            "Electronic Signatures",
            "Periodic Review Automation",
            "Inspection Readiness",
        ],
    },
    ProductModule {
        name: "Analytics & Reporting",
        icon: "\u{1F4CA}",
        tagline: "Dashboards and AI insights across every module and every site.",
        features: [
            "Real-time KPI Dashboards",
            "Predictive Models",
            "Cross-site Benchmarking",
            "Scheduled Reports",
        ],
    },
    ProductModule {
        name: "Integration Hub",
        icon: "\u{1F517}",
        tagline: "Connect ERP, historians, instruments, and legacy systems without custom glue.",
        features: [
            "Prebuilt ERP Connectors",
            "OPC-UA & MQTT Support",
            "REST & Event APIs",
            "Data Mapping Studio",
        ],
    },
];

#[function_component(ProductsPage)]
pub fn products_page() -> Html {
    html! {
        <div class="page">
            <section
                class="page-hero"
                style="background-image: linear-gradient(135deg, rgba(0, 102, 255, 0.9) 0%, rgba(139, 92, 246, 0.8) 100%), url('https://images.pexels.com/photos/3862632/pexels-photo-3862632.jpeg');"
            >
                <div>
                    <h1>
                        {"BhriguOne Platform"}
                        <br />
                        <span class="hero-accent">{"Modules"}</span>
                    </h1>
                    <p class="hero-lead">
                        {"Six integrated modules, one data model. Deploy what you need today and \
                          extend without migrations tomorrow."}
                    </p>
                </div>
            </section>

            <AnimatedSection class="section section-light">
                <div class="section-inner">
                    <h2 class="section-title">{"The Product Suite"}</h2>
                    <p class="section-intro">
                        {"Every module shares the same audit trail, user model, and analytics layer."}
                    </p>
                    <div class="card-grid">
                        { for MODULES.iter().enumerate().map(|(index, module)| html! {
                            <AnimatedSection stagger_index={(index % 3) as u32}>
                                <div class="card">
                                    <div class="card-icon">{module.icon}</div>
                                    <h3>{module.name}</h3>
                                    <p>{module.tagline}</p>
                                    { for module.features.iter().map(|feature| html! {
                                        <div class="check-list">
                                            <span>{"\u{2713}"}</span>
                                            <span>{*feature}</span>
                                        </div>
                                    }) }
                                </div>
                            </AnimatedSection>
                        }) }
                    </div>
                </div>
            </AnimatedSection>

            <AnimatedSection class="section section-dark">
                <div class="section-inner" style="text-align: center;">
                    <h2 class="section-title">{"One Platform. Zero Silos."}</h2>
                    <p class="section-intro">
                        {"Start with a single module or the full suite. Our team will map the right \
                          rollout for your operation."}
                    </p>
                    <div class="cta-row">
                        <Link<Route> to={Route::Contact}>
                            <button class="cta-primary">{"Request Pricing"}</button>
                        </Link<Route>>
                        <Link<Route> to={Route::Technology}>
                            <button class="cta-secondary">{"Under the Hood"}</button>
                        </Link<Route>>
                    </div>
                </div>
            </AnimatedSection>
        </div>
    }
}
