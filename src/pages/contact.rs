use serde::Serialize;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::config;

/// Regulated verticals offered in the inquiry form. `Unselected` is the
/// placeholder option and fails validation.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub enum Industry {
    Unselected,
    Pharmaceuticals,
    MedicalDevices,
    FoodAndBeverage,
    Biotech,
    Nutraceuticals,
    Other,
}

impl Industry {
    pub fn from_form_value(value: &str) -> Self {
        match value {
            "pharmaceutical" => Self::Pharmaceuticals,
            "medical-devices" => Self::MedicalDevices,
            "food-beverage" => Self::FoodAndBeverage,
            "biotech" => Self::Biotech,
            "nutraceuticals" => Self::Nutraceuticals,
            "other" => Self::Other,
            _ => Self::Unselected,
        }
    }

    pub fn is_selected(&self) -> bool {
        !matches!(self, Self::Unselected)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub enum ConsultationType {
    GeneralInquiry,
    ProductDemo,
    TechnicalDiscussion,
    ComplianceConsultation,
}

impl ConsultationType {
    pub fn from_form_value(value: &str) -> Self {
        match value {
            "demo" => Self::ProductDemo,
            "technical" => Self::TechnicalDiscussion,
            "compliance" => Self::ComplianceConsultation,
            _ => Self::GeneralInquiry,
        }
    }
}

impl Default for ConsultationType {
    fn default() -> Self {
        Self::GeneralInquiry
    }
}

/// Payload assembled from the inquiry form. There is no submission backend;
/// validated payloads are serialized and logged to the console.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub company: String,
    pub industry: Industry,
    pub consultation_type: ConsultationType,
    pub message: String,
}

impl ContactSubmission {
    /// Name, email, and industry are required. Email just needs the rough
    /// shape of an address; real verification would happen server-side.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Please enter your name");
        }
        if self.email.trim().is_empty() {
            return Err("Please enter your email address");
        }
        if !looks_like_email(self.email.trim()) {
            return Err("Please enter a valid email address");
        }
        if !self.industry.is_selected() {
            return Err("Please select your industry");
        }
        Ok(())
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}

const CONTACT_OPTIONS: [(&str, &str, &str, &str); 4] = [
    ("Sales Inquiries", "\u{1F4BC}", "Platform demos and pricing", config::SALES_EMAIL),
    ("General Information", "\u{2139}\u{FE0F}", "Questions about Bhrigu.tech", config::INFO_EMAIL),
    ("Partnerships", "\u{1F91D}", "Integration and reseller programs", config::PARTNERS_EMAIL),
    ("Media & Press", "\u{1F4F0}", "Interviews and press resources", config::MEDIA_EMAIL),
];

const CONSULTATION_CARDS: [(&str, &str); 3] = [
    ("Compliance Assessment", "A structured review of your current regulatory posture and gaps."),
    ("Digital Roadmap", "A phased plan from legacy systems to a validated BhriguOne deployment."),
    ("Platform Demo", "A hands-on session with BhriguOne configured for your industry."),
];

const OFFICES: [(&str, &str); 3] = [
    ("Bengaluru", "Global headquarters and engineering"),
    ("Boston", "North America operations"),
    ("Frankfurt", "European compliance center"),
];

const FAQ: [(&str, &str); 4] = [
    (
        "How long does a typical implementation take?",
        "Most single-site deployments go live in 12 to 16 weeks, including validation.",
    ),
    (
        "Is BhriguOne 21 CFR Part 11 compliant?",
        "Yes. Electronic records, signatures, and audit trails are built into every module.",
    ),
    (
        "Can BhriguOne integrate with our existing ERP?",
        "The Integration Hub ships with prebuilt connectors for major ERP systems.",
    ),
    (
        "Do you support multi-site rollouts?",
        "Yes. The platform is multi-tenant by design with cross-site analytics.",
    ),
];

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let company = use_state(String::new);
    let industry = use_state(|| Industry::Unselected);
    let consultation_type = use_state(ConsultationType::default);
    let message = use_state(String::new);
    let error = use_state(|| None::<&'static str>);
    let submitted = use_state(|| false);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_company = {
        let company = company.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            company.set(input.value());
        })
    };
    let on_industry = {
        let industry = industry.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            industry.set(Industry::from_form_value(&select.value()));
        })
    };
    let on_consultation_type = {
        let consultation_type = consultation_type.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            consultation_type.set(ConsultationType::from_form_value(&select.value()));
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(area.value());
        })
    };

    let on_submit = {
        let name = name.clone();
        let email = email.clone();
        let company = company.clone();
        let industry = industry.clone();
        let consultation_type = consultation_type.clone();
        let message = message.clone();
        let error = error.clone();
        let submitted = submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let submission = ContactSubmission {
                name: (*name).clone(),
                email: (*email).clone(),
                company: (*company).clone(),
                industry: *industry,
                consultation_type: *consultation_type,
                message: (*message).clone(),
            };
            match submission.validate() {
                Ok(()) => {
                    match serde_json::to_string(&submission) {
                        Ok(payload) => gloo_console::log!("contact inquiry:", payload),
                        Err(err) => gloo_console::error!("failed to serialize inquiry:", err.to_string()),
                    }
                    error.set(None);
                    submitted.set(true);
                }
                Err(reason) => {
                    error.set(Some(reason));
                }
            }
        })
    };

    html! {
        <div class="page">
            <section
                class="page-hero"
                style="background-image: linear-gradient(135deg, rgba(0, 102, 255, 0.9) 0%, rgba(139, 92, 246, 0.8) 100%), url('https://images.unsplash.com/photo-1578665086925-8d3f2f01d644');"
            >
                <div>
                    <h1>
                        {"Let's Shape the"}
                        <br />
                        <span class="hero-accent">{"Future Together"}</span>
                    </h1>
                    <p class="hero-lead">
                        {"Talk to the team about demos, consultations, partnerships, or anything \
                          else on your mind."}
                    </p>
                </div>
            </section>

            <AnimatedSection class="section section-light">
                <div class="section-inner">
                    <h2 class="section-title">{"How Can We Help?"}</h2>
                    <div class="card-grid">
                        { for CONTACT_OPTIONS.iter().enumerate().map(|(index, (title, icon, desc, address))| html! {
                            <AnimatedSection stagger_index={index as u32}>
                                <div class="card" style="text-align: center;">
                                    <div class="card-icon">{*icon}</div>
                                    <h3>{*title}</h3>
                                    <p>{*desc}</p>
                                    <a href={format!("mailto:{}", address)} style="color: #2563eb;">{*address}</a>
                                </div>
                            </AnimatedSection>
                        }) }
                    </div>
                    <p style="text-align: center; margin-top: 2rem; color: #374151;">
                        {"Prefer to talk? Call us at "}
                        <a href={format!("tel:{}", config::SUPPORT_PHONE)} style="color: #2563eb;">
                            {config::SUPPORT_PHONE}
                        </a>
                    </p>
                </div>
            </AnimatedSection>

            <AnimatedSection class="section section-tint">
                <div class="section-inner">
                    <h2 class="section-title">{"Send Us a Message"}</h2>
                    if *submitted {
                        <div class="form-confirmation">
                            <div class="card-icon">{"\u{2705}"}</div>
                            <h3>{"Thank you for reaching out!"}</h3>
                            <p>{"Your inquiry has been received. Our team will get back to you within one business day."}</p>
                        </div>
                    } else {
                        <form class="contact-form" onsubmit={on_submit}>
                            if let Some(reason) = *error {
                                <div class="form-error">{reason}</div>
                            }
                            <div class="form-row">
                                <label>
                                    {"Name *"}
                                    <input
                                        type="text"
                                        value={(*name).clone()}
                                        oninput={on_name}
                                        placeholder="Your full name"
                                    />
                                </label>
                                <label>
                                    {"Email *"}
                                    <input
                                        type="email"
                                        value={(*email).clone()}
                                        oninput={on_email}
                                        placeholder="you@company.com"
                                    />
                                </label>
                            </div>
                            <div class="form-row">
                                <label>
                                    {"Company"}
                                    <input
                                        type="text"
                                        value={(*company).clone()}
                                        oninput={on_company}
                                        placeholder="Company name"
                                    />
                                </label>
                                <label>
                                    {"Industry *"}
                                    <select onchange={on_industry}>
                                        <option value="" selected={!industry.is_selected()}>{"Select your industry"}</option>
                                        <option value="pharmaceutical">{"Pharmaceutical"}</option>
                                        <option value="medical-devices">{"Medical Devices"}</option>
                                        <option value="food-beverage">{"Food & Beverage"}</option>
                                        <option value="biotech">{"Biotech"}</option>
                                        <option value="nutraceuticals">{"Nutraceuticals"}</option>
                                        <option value="other">{"Other"}</option>
                                    </select>
                                </label>
                            </div>
                            <label>
                                {"Consultation Type"}
                                <select onchange={on_consultation_type}>
                                    <option value="general">{"General Inquiry"}</option>
                                    <option value="demo">{"Product Demo"}</option>
                                    <option value="technical">{"Technical Discussion"}</option>
                                    <option value="compliance">{"Compliance Consultation"}</option>
                                </select>
                            </label>
                            <label>
                                {"Message"}
                                <textarea
                                    rows="5"
                                    value={(*message).clone()}
                                    oninput={on_message}
                                    placeholder="Tell us about your project or question"
                                />
                            </label>
                            <button type="submit" class="cta-primary">{"Send Message"}</button>
                        </form>
                    }
                </div>
            </AnimatedSection>

            <AnimatedSection class="section section-light">
                <div class="section-inner">
                    <h2 class="section-title">{"Industry Consultations"}</h2>
                    <p class="section-intro">
                        {"Structured sessions with our specialists, free of charge."}
                    </p>
                    <div class="card-grid">
                        { for CONSULTATION_CARDS.iter().map(|(title, desc)| html! {
                            <div class="card">
                                <h3>{*title}</h3>
                                <p>{*desc}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </AnimatedSection>

            <AnimatedSection class="section section-dark">
                <div class="section-inner">
                    <h2 class="section-title">{"Global Offices"}</h2>
                    <div class="card-grid">
                        { for OFFICES.iter().map(|(city, desc)| html! {
                            <div class="card-dark" style="text-align: center;">
                                <h3>{*city}</h3>
                                <p>{*desc}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </AnimatedSection>

            <AnimatedSection class="section section-tint">
                <div class="section-inner">
                    <h2 class="section-title">{"Frequently Asked Questions"}</h2>
                    <div class="faq-list">
                        { for FAQ.iter().map(|(question, answer)| html! {
                            <div class="card" style="margin-bottom: 1rem;">
                                <h3>{*question}</h3>
                                <p>{*answer}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </AnimatedSection>

            <style>{CONTACT_CSS}</style>
        </div>
    }
}

const CONTACT_CSS: &str = r#"
    .contact-form {
        max-width: 48rem;
        margin: 0 auto;
        display: flex;
        flex-direction: column;
        gap: 1.25rem;
        background: white;
        padding: 2rem;
        border-radius: 1rem;
        box-shadow: 0 4px 20px rgba(0, 0, 0, 0.08);
    }
    .form-row {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 1.25rem;
    }
    .contact-form label {
        display: flex;
        flex-direction: column;
        gap: 0.4rem;
        font-weight: 600;
        color: #1f2937;
    }
    .contact-form input,
    .contact-form select,
    .contact-form textarea {
        padding: 0.75rem;
        border: 1px solid #d1d5db;
        border-radius: 0.5rem;
        font-size: 1rem;
        font-family: inherit;
        font-weight: 400;
    }
    .contact-form input:focus,
    .contact-form select:focus,
    .contact-form textarea:focus {
        outline: none;
        border-color: #2563eb;
        box-shadow: 0 0 0 3px rgba(37, 99, 235, 0.15);
    }
    .form-error {
        background: #fef2f2;
        color: #b91c1c;
        border: 1px solid #fecaca;
        border-radius: 0.5rem;
        padding: 0.75rem 1rem;
    }
    .form-confirmation {
        max-width: 48rem;
        margin: 0 auto;
        text-align: center;
        background: white;
        padding: 3rem 2rem;
        border-radius: 1rem;
        box-shadow: 0 4px 20px rgba(0, 0, 0, 0.08);
    }
    .faq-list {
        max-width: 52rem;
        margin: 0 auto;
    }
    @media (max-width: 768px) {
        .form-row {
            grid-template-columns: 1fr;
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_submission() -> ContactSubmission {
        ContactSubmission {
            name: "Priya Nair".into(),
            email: "priya@acmepharma.com".into(),
            company: "Acme Pharma".into(),
            industry: Industry::Pharmaceuticals,
            consultation_type: ConsultationType::ProductDemo,
            message: "We would like a demo of the MES module.".into(),
        }
    }

    #[test]
    fn complete_submission_passes_validation() {
        assert!(valid_submission().validate().is_ok());
    }

    #[test]
    fn company_and_message_are_optional() {
        let mut submission = valid_submission();
        submission.company.clear();
        submission.message.clear();
        assert!(submission.validate().is_ok());
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut submission = valid_submission();
        submission.name = "   ".into();
        assert_eq!(submission.validate(), Err("Please enter your name"));
    }

    #[test]
    fn missing_email_is_rejected() {
        let mut submission = valid_submission();
        submission.email.clear();
        assert_eq!(submission.validate(), Err("Please enter your email address"));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut submission = valid_submission();
        for bad in ["no-at-sign", "dangling@", "user@nodot", "user@.com", "user@domain."] {
            submission.email = bad.into();
            assert_eq!(
                submission.validate(),
                Err("Please enter a valid email address"),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn unselected_industry_is_rejected() {
        let mut submission = valid_submission();
        submission.industry = Industry::Unselected;
        assert_eq!(submission.validate(), Err("Please select your industry"));
    }

    #[test]
    fn form_values_map_to_industries() {
        assert_eq!(Industry::from_form_value("pharmaceutical"), Industry::Pharmaceuticals);
        assert_eq!(Industry::from_form_value("medical-devices"), Industry::MedicalDevices);
        assert_eq!(Industry::from_form_value(""), Industry::Unselected);
        assert_eq!(Industry::from_form_value("garbage"), Industry::Unselected);
    }

    #[test]
    fn form_values_map_to_consultation_types() {
        assert_eq!(ConsultationType::from_form_value("demo"), ConsultationType::ProductDemo);
        assert_eq!(
            ConsultationType::from_form_value("technical"),
            ConsultationType::TechnicalDiscussion
        );
        assert_eq!(ConsultationType::from_form_value(""), ConsultationType::GeneralInquiry);
    }

    #[test]
    fn submission_serializes_for_logging() {
        let payload = serde_json::to_string(&valid_submission()).unwrap();
        assert!(payload.contains("\"industry\":\"Pharmaceuticals\""));
        assert!(payload.contains("\"consultation_type\":\"ProductDemo\""));
        assert!(payload.contains("priya@acmepharma.com"));
    }
}
