use yew::prelude::*;
use yew_router::components::Link;

use crate::components::animated_section::AnimatedSection;
use crate::Route;

const PLATFORM_MODULES: [(&str, &str, &str); 4] = [
    ("Manufacturing Execution", "Real-time production control", "\u{2699}\u{FE0F}"),
    ("Quality Management", "Automated QA processes", "\u{1F6E1}\u{FE0F}"),
    ("Compliance Engine", "Regulatory automation", "\u{1F4C4}"),
    ("Analytics Dashboard", "Advanced reporting", "\u{1F4CA}"),
];

const AI_FEATURES: [&str; 4] = [
    "Predictive Maintenance Algorithms",
    "Quality Prediction Models",
    "Anomaly Detection Systems",
    "Performance Optimization AI",
];

const IOT_FEATURES: [(&str, &str); 3] = [
    ("Sensor Integration", "Connect all manufacturing sensors"),
    ("Real-time Monitoring", "Live data visualization dashboards"),
    ("Edge Computing", "Local processing and analysis"),
];

const DATA_FEATURES: [(&str, &str); 4] = [
    ("Data Lake Architecture", "Scalable storage for structured and unstructured data"),
    ("Real-time Processing", "Stream processing for immediate insights"),
    ("Data Governance", "Compliance-ready data management"),
    ("Advanced Analytics", "Machine learning and statistical analysis"),
];

const OPTIMIZATION_FEATURES: [&str; 4] = [
    "Production Planning",
    "Resource Optimization",
    "Quality Control",
    "Performance Monitoring",
];

#[function_component(SolutionsPage)]
pub fn solutions_page() -> Html {
    html! {
        <div class="page">
            <section
                class="page-hero"
                style="background-image: linear-gradient(135deg, rgba(0, 102, 255, 0.9) 0%, rgba(139, 92, 246, 0.8) 100%), url('https://images.pexels.com/photos/16053029/pexels-photo-16053029.jpeg');"
            >
                <div>
                    <h1>
                        {"BhriguOne Platform"}
                        <br />
                        <span class="hero-accent">{"Deep Dive"}</span>
                    </h1>
                    <p class="hero-lead">
                        {"Comprehensive solutions for regulated industries combining AI, IoT, \
                          and compliance automation in one unified platform."}
                    </p>
                </div>
            </section>

            <AnimatedSection class="section section-light">
                <div class="section-inner">
                    <h2 class="section-title">{"Platform Overview"}</h2>
                    <p class="section-intro">
                        {"The complete BhriguOne ecosystem for regulated manufacturing."}
                    </p>
                    <div class="card-grid">
                        { for PLATFORM_MODULES.iter().map(|(title, desc, icon)| html! {
                            <div class="card" style="text-align: center;">
                                <div class="card-icon">{*icon}</div>
                                <h3>{*title}</h3>
                                <p>{*desc}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </AnimatedSection>

            <AnimatedSection class="section section-tint">
                <div class="section-inner split-section">
                    <div>
                        <h2>{"AI-Powered Analytics"}</h2>
                        <p style="font-size: 1.1rem; color: #374151; margin-bottom: 1.5rem;">
                            {"Neural network models for predictive maintenance, quality prediction, \
                              and operational optimization across all manufacturing processes."}
                        </p>
                        { for AI_FEATURES.iter().map(|feature| html! {
                            <div class="feature-row">
                                <span>{"\u{1F9E0}"}</span>
                                <span>{*feature}</span>
                            </div>
                        }) }
                    </div>
                    <img
                        src="https://images.pexels.com/photos/5475750/pexels-photo-5475750.jpeg"
                        alt="AI analytics dashboard"
                        loading="lazy"
                    />
                </div>
            </AnimatedSection>

            <AnimatedSection class="section section-dark">
                <div class="section-inner">
                    <h2 class="section-title">{"IoT Integration"}</h2>
                    <p class="section-intro">
                        {"Real-time sensor networks and comprehensive monitoring solutions."}
                    </p>
                    <div class="card-grid">
                        { for IOT_FEATURES.iter().map(|(title, desc)| html! {
                            <div class="card-dark">
                                <h3>{*title}</h3>
                                <p>{*desc}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </AnimatedSection>

            <AnimatedSection class="section section-light">
                <div class="section-inner">
                    <h2 class="section-title">{"Data Management"}</h2>
                    <p class="section-intro">
                        {"Data lake and warehouse systems for comprehensive data governance."}
                    </p>
                    <div class="card-grid">
                        { for DATA_FEATURES.iter().map(|(title, desc)| html! {
                            <div class="card">
                                <h3>{*title}</h3>
                                <p>{*desc}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </AnimatedSection>

            <AnimatedSection class="section section-tint">
                <div class="section-inner split-section">
                    <img
                        src="https://images.unsplash.com/photo-1655393001768-d946c97d6fd1"
                        alt="Smart factory floor"
                        loading="lazy"
                    />
                    <div>
                        <h2>{"Manufacturing Optimization"}</h2>
                        <p style="font-size: 1.1rem; color: #374151; margin-bottom: 1.5rem;">
                            {"Smart factory floor simulations and optimization algorithms for maximum \
                              efficiency and minimal downtime in regulated manufacturing environments."}
                        </p>
                        <div class="card-grid" style="grid-template-columns: repeat(2, 1fr); gap: 1rem;">
                            { for OPTIMIZATION_FEATURES.iter().map(|title| html! {
                                <div class="card" style="padding: 1rem;">
                                    <h3 style="font-size: 1rem; margin-bottom: 0;">{*title}</h3>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </AnimatedSection>

            <AnimatedSection class="section section-dark">
                <div class="section-inner" style="text-align: center;">
                    <h2 class="section-title">{"Ready to Transform Your Manufacturing?"}</h2>
                    <p class="section-intro">
                        {"Experience the power of BhriguOne with a personalized demo tailored to your industry."}
                    </p>
                    <div class="cta-row">
                        <Link<Route> to={Route::Contact}>
                            <button class="cta-primary">{"Schedule Demo"}</button>
                        </Link<Route>>
                        <Link<Route> to={Route::Products}>
                            <button class="cta-secondary">{"View Products"}</button>
                        </Link<Route>>
                    </div>
                </div>
            </AnimatedSection>
        </div>
    }
}
