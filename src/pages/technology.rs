use yew::prelude::*;
use yew_router::components::Link;

use crate::components::animated_section::AnimatedSection;
use crate::Route;

struct ArchitectureLayer {
    title: &'static str,
    icon: &'static str,
    description: &'static str,
    features: [&'static str; 4],
}

const ARCHITECTURE_LAYERS: [ArchitectureLayer; 3] = [
    ArchitectureLayer {
        title: "Cloud-Native Core",
        icon: "\u{2601}\u{FE0F}",
        description: "Microservices architecture built for scale and resilience.",
        features: [
            "Kubernetes Orchestration",
            "Auto-scaling Services",
            "Multi-region Deployment",
            "Zero-downtime Updates",
        ],
    },
    ArchitectureLayer {
        title: "Data Platform",
        icon: "\u{1F5C4}\u{FE0F}",
        description: "Unified data lake and warehouse with compliance-grade lineage.",
        features: [
            "Stream Processing",
            "Data Lineage Tracking",
            "Schema Governance",
            "Encrypted at Rest",
        ],
    },
    ArchitectureLayer {
        title: "Security & Compliance",
        icon: "\u{1F512}",
        description: "Defense-in-depth security with validated audit infrastructure.",
        features: [
            "Role-based Access Control",
            "Immutable Audit Trails",
            "Electronic Signatures",
            "SOC 2 Type II",
        ],
    },
];

const AI_CAPABILITIES: [(&str, &str); 4] = [
    ("Predictive Maintenance", "Equipment failure prediction from sensor telemetry"),
    ("Quality Prediction", "In-process models flagging deviations before they occur"),
    ("Anomaly Detection", "Continuous monitoring of process parameters"),
    ("Yield Optimization", "Recommendation engines for process improvements"),
];

const IOT_STACK: [(&str, &str, &str); 3] = [
    ("Edge Gateways", "Protocol translation and local buffering at the line", "\u{1F4E1}"),
    ("Sensor Mesh", "Plug-and-play onboarding for thousands of devices", "\u{1F310}"),
    ("Digital Twin", "Live virtual models of equipment and processes", "\u{1F9FF}"),
];

#[function_component(TechnologyPage)]
pub fn technology_page() -> Html {
    html! {
        <div class="page">
            <section
                class="page-hero"
                style="background-image: linear-gradient(135deg, rgba(0, 102, 255, 0.9) 0%, rgba(139, 92, 246, 0.8) 100%), url('https://images.pexels.com/photos/7663144/pexels-photo-7663144.jpeg');"
            >
                <div>
                    <h1>
                        {"Advanced Platform"}
                        <br />
                        <span class="hero-accent">{"Architecture"}</span>
                    </h1>
                    <p class="hero-lead">
                        {"The technology foundation behind BhriguOne: cloud-native, AI-first, and \
                          engineered for regulated environments."}
                    </p>
                </div>
            </section>

            <AnimatedSection class="section section-light">
                <div class="section-inner">
                    <h2 class="section-title">{"Core Architecture"}</h2>
                    <p class="section-intro">
                        {"Three layers working together to deliver compliant intelligence at scale."}
                    </p>
                    <div class="card-grid">
                        { for ARCHITECTURE_LAYERS.iter().enumerate().map(|(index, layer)| html! {
                            <AnimatedSection stagger_index={index as u32}>
                                <div class="card">
                                    <div class="card-icon">{layer.icon}</div>
                                    <h3>{layer.title}</h3>
                                    <p>{layer.description}</p>
                                    { for layer.features.iter().map(|feature| html! {
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

            <AnimatedSection class="section section-tint">
                <div class="section-inner split-section">
                    <div>
                        <h2>{"AI & Machine Learning"}</h2>
                        <p style="font-size: 1.1rem; color: #374151; margin-bottom: 1.5rem;">
                            {"Models trained on manufacturing data, deployed with the explainability \
                              and validation documentation regulators expect."}
                        </p>
                        { for AI_CAPABILITIES.iter().map(|(title, desc)| html! {
                            <div class="feature-row">
                                <span>{"\u{1F9E0}"}</span>
                                <span>
                                    <strong>{*title}</strong>
                                    {" \u{2014} "}
                                    {*desc}
                                </span>
                            </div>
                        }) }
                    </div>
                    <img
                        src="https://images.pexels.com/photos/8386440/pexels-photo-8386440.jpeg"
                        alt="Machine learning model training"
                        loading="lazy"
                    />
                </div>
            </AnimatedSection>

            <AnimatedSection class="section section-dark">
                <div class="section-inner">
                    <h2 class="section-title">{"IoT Ecosystem"}</h2>
                    <p class="section-intro">
                        {"From shop-floor sensors to cloud analytics, one connected fabric."}
                    </p>
                    <div class="card-grid">
                        { for IOT_STACK.iter().map(|(title, desc, icon)| html! {
                            <div class="card-dark" style="text-align: center;">
                                <div class="card-icon">{*icon}</div>
                                <h3>{*title}</h3>
                                <p>{*desc}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </AnimatedSection>

            <AnimatedSection class="section section-light">
                <div class="section-inner" style="text-align: center;">
                    <h2 class="section-title">{"See the Architecture in Action"}</h2>
                    <p class="section-intro">
                        {"Our engineers will walk you through a live environment built for your use case."}
                    </p>
                    <div class="cta-row">
                        <Link<Route> to={Route::Contact}>
                            <button class="cta-primary">{"Book a Technical Session"}</button>
                        </Link<Route>>
                        <Link<Route> to={Route::Resources}>
                            <button class="cta-secondary">{"Read the Docs"}</button>
                        </Link<Route>>
                    </div>
                </div>
            </AnimatedSection>
        </div>
    }
}
