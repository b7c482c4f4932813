use yew::prelude::*;
use yew_router::components::Link;

use crate::components::animated_section::AnimatedSection;
use crate::Route;

struct IndustrySection {
    name: &'static str,
    icon: &'static str,
    summary: &'static str,
    image: &'static str,
    capabilities: [(&'static str, &'static str); 4],
    image_left: bool,
}

const INDUSTRIES: [IndustrySection; 5] = [
    IndustrySection {
        name: "Pharmaceuticals",
        icon: "\u{1F48A}",
        summary: "End-to-end pharmaceutical manufacturing solutions with complete regulatory \
                  compliance, from API production to finished dosage forms.",
        image: "https://images.pexels.com/photos/3825572/pexels-photo-3825572.jpeg",
        capabilities: [
            ("API Manufacturing", "Complete batch genealogy and yield tracking"),
            ("Quality Control", "Automated testing workflows and release decisions"),
            ("Batch Tracking", "Full electronic batch records with audit trails"),
            ("FDA Compliance", "21 CFR Part 11 ready documentation"),
        ],
        image_left: false,
    },
    IndustrySection {
        name: "Medical Devices",
        icon: "\u{1FA7A}",
        summary: "Device history records, design controls, and post-market surveillance in a \
                  single validated platform.",
        image: "https://images.pexels.com/photos/3912979/pexels-photo-3912979.jpeg",
        capabilities: [
            ("Manufacturing Control", "Device history record automation"),
            ("Traceability", "UDI tracking from component to patient"),
            ("Post-Market Surveillance", "Complaint handling and trend analysis"),
            ("ISO 13485", "Quality system alignment out of the box"),
        ],
        image_left: true,
    },
    IndustrySection {
        name: "Food & Beverage",
        icon: "\u{1F37D}\u{FE0F}",
        summary: "Recipe management, allergen control, and farm-to-fork traceability for food \
                  safety excellence.",
        image: "https://images.pexels.com/photos/2252584/pexels-photo-2252584.jpeg",
        capabilities: [
            ("Recipe Management", "Version-controlled formulations and scaling"),
            ("Quality Control", "In-line inspection and hold management"),
            ("Supply Chain Tracking", "Lot-level ingredient traceability"),
            ("HACCP", "Critical control point monitoring"),
        ],
        image_left: false,
    },
    IndustrySection {
        name: "Biotech",
        icon: "\u{1F9EC}",
        summary: "From process development through commercial scale, with the data integrity \
                  biologics manufacturing demands.",
        image: "https://images.pexels.com/photos/2280571/pexels-photo-2280571.jpeg",
        capabilities: [
            ("Process Development", "Experiment tracking and tech transfer"),
            ("Scale-up", "Parameter mapping across equipment trains"),
            ("Batch Records", "Electronic records for upstream and downstream"),
            ("GMP", "Continuous compliance monitoring"),
        ],
        image_left: true,
    },
    IndustrySection {
        name: "Nutraceuticals",
        icon: "\u{1F33F}",
        summary: "Ingredient integrity and label claim substantiation for supplement \
                  manufacturers under cGMP.",
        image: "https://images.pexels.com/photos/3850689/pexels-photo-3850689.jpeg",
        capabilities: [
            ("Ingredient Tracking", "Supplier qualification and CoA management"),
            ("Potency Testing", "Stability and assay result tracking"),
            ("Label Claims", "Formulation-to-label verification"),
            ("cGMP", "Part 111 compliant operations"),
        ],
        image_left: false,
    },
];

const METRICS: [(&str, &str); 4] = [
    ("99.9%", "Compliance Rate"),
    ("40%", "Efficiency Gain"),
    ("60%", "Faster Audits"),
    ("24/7", "Monitoring"),
];

#[function_component(IndustriesPage)]
pub fn industries_page() -> Html {
    html! {
        <div class="page">
            <section
                class="page-hero"
                style="background-image: linear-gradient(135deg, rgba(0, 102, 255, 0.9) 0%, rgba(139, 92, 246, 0.8) 100%), url('https://images.pexels.com/photos/8532850/pexels-photo-8532850.jpeg');"
            >
                <div>
                    <h1>
                        {"Sector-Specific"}
                        <br />
                        <span class="hero-accent">{"Excellence"}</span>
                    </h1>
                    <p class="hero-lead">
                        {"Tailored BhriguOne deployments for the unique regulatory and operational \
                          demands of each industry we serve."}
                    </p>
                </div>
            </section>

            { for INDUSTRIES.iter().enumerate().map(|(index, industry)| {
                let section_class = if index % 2 == 0 { "section section-light" } else { "section section-tint" };
                let text_column = html! {
                    <div>
                        <h2>
                            <span style="margin-right: 0.75rem;">{industry.icon}</span>
                            {industry.name}
                        </h2>
                        <p style="font-size: 1.1rem; color: #374151; margin: 1rem 0 1.5rem;">
                            {industry.summary}
                        </p>
                        <div class="card-grid" style="grid-template-columns: repeat(2, 1fr); gap: 1rem;">
                            { for industry.capabilities.iter().map(|(title, desc)| html! {
                                <div class="card" style="padding: 1rem;">
                                    <h3 style="font-size: 1rem;">{*title}</h3>
                                    <p style="font-size: 0.9rem;">{*desc}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                };
                let image = html! {
                    <img src={industry.image} alt={industry.name} loading="lazy" />
                };
                html! {
                    <AnimatedSection class={section_class}>
                        <div class="section-inner split-section">
                            if industry.image_left {
                                {image}
                                {text_column}
                            } else {
                                {text_column}
                                {image}
                            }
                        </div>
                    </AnimatedSection>
                }
            }) }

            <AnimatedSection class="section section-dark">
                <div class="section-inner">
                    <h2 class="section-title">{"Proven Results Across Industries"}</h2>
                    <div class="card-grid">
                        { for METRICS.iter().map(|(value, label)| html! {
                            <div class="card-dark" style="text-align: center;">
                                <div style="font-size: 2.5rem; font-weight: 700; color: #60a5fa;">{*value}</div>
                                <p>{*label}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </AnimatedSection>

            <AnimatedSection class="section section-light">
                <div class="section-inner" style="text-align: center;">
                    <h2 class="section-title">{"Your Industry. Your Platform."}</h2>
                    <p class="section-intro">
                        {"Talk to our specialists about a BhriguOne deployment configured for your \
                          regulatory environment."}
                    </p>
                    <div class="cta-row">
                        <Link<Route> to={Route::Contact}>
                            <button class="cta-primary">{"Request Consultation"}</button>
                        </Link<Route>>
                        <Link<Route> to={Route::Solutions}>
                            <button class="cta-secondary">{"Explore Solutions"}</button>
                        </Link<Route>>
                    </div>
                </div>
            </AnimatedSection>
        </div>
    }
}
