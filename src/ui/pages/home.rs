//! Home page component
//!
//! The whole site on one scrolling page:
//! - SEO meta tags
//! - Hero section with logo and calls to action
//! - Leadership team grid
//! - Randao.net flagship section
//! - Auto-rotating products carousel
//! - Infrastructure and partner grids
//! - Contact section and footer
//!
//! Section ids are the anchor targets of the navigation bar.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::carousel::Carousel;
use crate::core::content::{
    CONTACT_EMAIL, FLAGSHIP_FEATURES, FLAGSHIP_LOGO, FLAGSHIP_URL, FlagshipFeature, INFRA_GROUPS,
    InfraGroup, LOGO_SOLID, LOGO_TEXT, PARTNERS, PRODUCT_COUNT, PRODUCTS, Partner, TEAM_MEMBERS,
};
use crate::ui::carousel::{ProductCarousel, use_autoplay};
use crate::ui::common::DetailModal;
use crate::ui::team_member::TeamMemberCard;

/// Home page component
#[component]
pub fn HomePage() -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(PRODUCT_COUNT));
    use_autoplay(carousel);

    // Reserved for per-section detail views; nothing opens it yet
    let selected_detail = RwSignal::new(None::<String>);

    view! {
        <SeoMeta />

        <div class="cipherplay-home">
            <Hero />

            // Team/Founders Section
            <section class="team" id="team">
                <div class="container">
                    <h2 class="section-title">"Leadership Team"</h2>
                    <p class="section-subtitle">"Experienced founders building the decentralized future"</p>
                    <div class="team-grid">
                        {TEAM_MEMBERS
                            .iter()
                            .map(|member| view! { <TeamMemberCard member=*member /> })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <FlagshipSection />

            // Products & Consulting Section
            <section class="products" id="products">
                <div class="products-wrapper">
                    <div class="container">
                        <h2 class="section-title">"Products & Services"</h2>
                        <p class="section-subtitle">"Licensed technology and custom blockchain solutions"</p>
                    </div>
                    <ProductCarousel products=PRODUCTS carousel=carousel />
                </div>
            </section>

            // Infrastructure Section
            <section class="infrastructure" id="infrastructure">
                <div class="container">
                    <h2 class="section-title">"Blockchain Infrastructure"</h2>
                    <p class="section-subtitle">"Running critical nodes to power the decentralized web"</p>
                    <div class="infra-grid">
                        {INFRA_GROUPS
                            .iter()
                            .map(|group| view! { <InfraCard group=*group /> })
                            .collect_view()}
                    </div>
                </div>
            </section>

            // Partners Section
            <section class="partners" id="partners">
                <div class="container">
                    <h2 class="section-title">"Strategic Partners"</h2>
                    <p class="section-subtitle">"Collaborating with industry leaders to build the future"</p>
                    <div class="partners-grid">
                        {PARTNERS
                            .iter()
                            .map(|partner| view! { <PartnerCard partner=*partner /> })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <ContactSection />

            <Footer />

            <DetailModal selected=selected_detail />
        </div>
    }
}

#[component]
fn SeoMeta() -> impl IntoView {
    let description = "CipherPlay builds Web3 infrastructure and Randao.net, a trustless random number generation protocol on the AO blockchain.";

    view! {
        <Title text="CipherPlay - Decentralized Randomness & Web3 Infrastructure" />
        <Meta name="description" content=description />
        <Meta property="og:title" content="CipherPlay" />
        <Meta property="og:description" content=description />
        <Meta property="og:type" content="website" />
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-background" aria-hidden="true">
                <div class="grid-overlay"></div>
                <div class="glow-orb glow-orb-1"></div>
                <div class="glow-orb glow-orb-2"></div>
            </div>
            <div class="hero-content">
                <img src=LOGO_TEXT alt="CipherPlay" class="hero-logo" />
                <h1 class="hero-title">"Building the Future of Decentralized Randomness"</h1>
                <p class="hero-subtitle">
                    "Web3 infrastructure, cutting-edge protocols, and blockchain innovation"
                </p>
                <div class="hero-cta">
                    <a href="#randao" class="btn btn-primary">"Explore Randao.net"</a>
                    <a href="#contact" class="btn btn-secondary">"Get in Touch"</a>
                </div>
            </div>
            <div class="scroll-indicator">
                <div class="scroll-arrow"></div>
            </div>
        </section>
    }
}

#[component]
fn FlagshipSection() -> impl IntoView {
    view! {
        <section class="flagship" id="randao">
            <div class="container">
                <div class="flagship-content">
                    <div class="flagship-visual">
                        <img src=FLAGSHIP_LOGO alt="Randao.net Protocol" class="flagship-image" />
                        <div class="flagship-glow"></div>
                    </div>
                    <div class="flagship-info">
                        <div class="flagship-badge">"Flagship Product"</div>
                        <h2 class="flagship-title">"Randao.net"</h2>
                        <p class="flagship-tagline">"Trustless Random Number Generation on AO Blockchain"</p>
                        <p class="flagship-description">
                            "Randao.net is our revolutionary RNG protocol built on the AO blockchain running on Arweave. "
                            "Providing verifiable, unbiased randomness for Web3 applications, gaming, and decentralized systems."
                        </p>
                        <div class="flagship-features">
                            {FLAGSHIP_FEATURES
                                .iter()
                                .map(|feature| view! { <FeatureItem feature=*feature /> })
                                .collect_view()}
                        </div>
                        <a href=FLAGSHIP_URL target="_blank" rel="noopener noreferrer" class="btn btn-primary">
                            "Visit Randao.net →"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureItem(feature: FlagshipFeature) -> impl IntoView {
    view! {
        <div class="feature-item">
            <div class="feature-icon">{feature.icon}</div>
            <div>
                <h4>{feature.title}</h4>
                <p>{feature.caption}</p>
            </div>
        </div>
    }
}

#[component]
fn InfraCard(group: InfraGroup) -> impl IntoView {
    view! {
        <div class="infra-card">
            <div class="infra-icon">{group.icon}</div>
            <h3>{group.title}</h3>
            <ul class="infra-list">
                {group.items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn PartnerCard(partner: Partner) -> impl IntoView {
    let logos = match partner.logos {
        [first, second] => view! {
            <div class="dual-logo-container">
                <img src=first.image alt=first.alt class="partner-logo partner-logo-dual" />
                <span class="logo-separator">"+"</span>
                <img src=second.image alt=second.alt class="partner-logo partner-logo-dual" />
            </div>
        }
        .into_any(),
        logos => logos
            .iter()
            .map(|logo| view! { <img src=logo.image alt=logo.alt class="partner-logo" /> })
            .collect_view()
            .into_any(),
    };

    view! {
        <div class="partner-card" class:partner-card-dual=partner.is_dual()>
            {logos}
            <h3>{partner.name}</h3>
            <p>{partner.description}</p>
        </div>
    }
}

#[component]
fn ContactSection() -> impl IntoView {
    let mailto = format!("mailto:{}", CONTACT_EMAIL);

    view! {
        <section class="contact" id="contact">
            <div class="container">
                <div class="contact-content">
                    <div class="contact-info">
                        <img src=LOGO_SOLID alt="CipherPlay Logo" class="contact-logo" />
                        <h2>"Let's Build Together"</h2>
                        <p class="contact-description">
                            "Whether you're seeking investment opportunities, need blockchain infrastructure, "
                            "or want to license our technology - we're here to help shape the decentralized future."
                        </p>
                        <div class="contact-methods">
                            <a href=mailto.clone() class="contact-method">
                                <span class="contact-icon">"📧"</span>
                                <span>{CONTACT_EMAIL}</span>
                            </a>
                            <a href=FLAGSHIP_URL target="_blank" rel="noopener noreferrer" class="contact-method">
                                <span class="contact-icon">"🔗"</span>
                                <span>"randao.net"</span>
                            </a>
                        </div>
                    </div>
                    <div class="contact-cta">
                        <h3>"Ready to get started?"</h3>
                        <p>"Connect with our team to discuss partnerships, investments, or custom solutions."</p>
                        <a href=mailto class="btn btn-primary btn-large">"Get in Touch"</a>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-content">
                    <div class="footer-links">
                        <a href=FLAGSHIP_URL target="_blank" rel="noopener noreferrer">"Randao.net"</a>
                        <span class="footer-divider">"•"</span>
                        <a href="#team">"Team"</a>
                        <span class="footer-divider">"•"</span>
                        <a href="#products">"Products"</a>
                        <span class="footer-divider">"•"</span>
                        <a href="#infrastructure">"Infrastructure"</a>
                    </div>
                    <p class="footer-copyright">"© 2024 CipherPlay. Building on Arweave & AO."</p>
                </div>
            </div>
        </footer>
    }
}
