//! Static page content
//!
//! Every table here is fixed at compile time and rendered in declaration order.
//! Image references are site-root relative paths served by the static asset
//! pipeline; nothing here validates them.

use std::num::NonZeroUsize;

/// A member of the leadership team
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub image: &'static str,
}

/// One slide of the products carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductEntry {
    pub name: &'static str,
    /// Category label shown under the name, e.g. "Flagship Product • RNG Protocol"
    pub category: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub link: &'static str,
    /// External links open in a new browsing context
    pub external: bool,
}

impl ProductEntry {
    /// Value for the anchor's `target` attribute
    pub fn link_target(&self) -> Option<&'static str> {
        self.external.then_some("_blank")
    }

    /// Value for the anchor's `rel` attribute
    pub fn link_rel(&self) -> Option<&'static str> {
        self.external.then_some("noopener noreferrer")
    }

    /// Call-to-action text for the product link
    pub fn link_label(&self) -> String {
        if self.external {
            format!("Visit {} →", self.name)
        } else {
            "Learn More →".to_string()
        }
    }
}

/// A card in the infrastructure grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfraGroup {
    pub icon: &'static str,
    pub title: &'static str,
    pub items: &'static [&'static str],
}

/// Logo of a partner card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartnerLogo {
    pub image: &'static str,
    pub alt: &'static str,
}

/// A card in the partners grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partner {
    pub name: &'static str,
    pub description: &'static str,
    /// One logo, or two for joint partners
    pub logos: &'static [PartnerLogo],
}

impl Partner {
    pub fn is_dual(&self) -> bool {
        self.logos.len() > 1
    }
}

/// Feature bullet in the Randao flagship section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagshipFeature {
    pub icon: &'static str,
    pub title: &'static str,
    pub caption: &'static str,
}

pub const COMPANY_NAME: &str = "CipherPlay";
pub const CONTACT_EMAIL: &str = "hello@cipherplay.com";
pub const FLAGSHIP_URL: &str = "https://randao.net";

pub const LOGO_SOLID: &str = "/images/logos/Logo_Solid_LightBlue.svg";
pub const LOGO_TEXT: &str = "/images/logos/LogoText_V1.svg";
pub const FLAGSHIP_LOGO: &str = "/images/logos/rng-logo.svg";

pub const TEAM_MEMBERS: &[TeamMember] = &[
    TeamMember {
        name: "Allan Pedin",
        role: "CEO & Co-Founder",
        bio: "Published blockchain author with a Master's in Computer Science, leading CipherPlay's strategic vision",
        image: "/images/headshots/Allan.png",
    },
    TeamMember {
        name: "Alex Posey",
        role: "COO & Co-Founder",
        bio: "Blockchain researcher with 8+ years experience developing smart contracts and building Web3 protocols",
        image: "/images/headshots/Alex.png",
    },
    TeamMember {
        name: "Tyler Warburton",
        role: "CTO & Co-Founder",
        bio: "Cybersecurity thought leader and public speaker, architecting next-generation blockchain infrastructure",
        image: "/images/headshots/Tyler.png",
    },
];

pub const PRODUCTS: &[ProductEntry] = &[
    ProductEntry {
        name: "Randao.net",
        category: "Flagship Product • RNG Protocol",
        description: "Trustless random number generation protocol on AO blockchain, providing verifiable randomness for Web3 applications.",
        image: "/images/logos/rng-logo.svg",
        link: "https://randao.net",
        external: true,
    },
    ProductEntry {
        name: "infrAO",
        category: "Infrastructure • AO Ecosystem",
        description: "Running critical AO ecosystem nodes including Hyperbeam nodes, MU, SU, and CU units to power the decentralized network.",
        image: "/images/logos/infrao.png",
        link: "#infrastructure",
        external: false,
    },
    ProductEntry {
        name: "arcao",
        category: "Gaming Studio • Marketing",
        description: "Onchain Web3 gaming guild and studio with integrated marketing division, building the future of blockchain gaming.",
        image: "/images/logos/arcao.png",
        link: "https://game.ar.io",
        external: true,
    },
    ProductEntry {
        name: "RuneRealm",
        category: "Client Project • Gaming",
        description: "Pokemon-inspired blockchain game leveraging Randao protocol for fair, verifiable gameplay mechanics and item generation.",
        image: "/images/logos/rune-realm-transparent.png",
        link: "#",
        external: false,
    },
    ProductEntry {
        name: "Rewind",
        category: "Client Project • Archive",
        description: "Wayback Machine for AR.IO - browse historical snapshots of the permaweb with powerful search and discovery tools.",
        image: "/images/logos/REWIND-WHITE.png",
        link: "#",
        external: false,
    },
];

/// Number of carousel slides. An empty product table fails to compile.
pub const PRODUCT_COUNT: NonZeroUsize = match NonZeroUsize::new(PRODUCTS.len()) {
    Some(count) => count,
    None => panic!("PRODUCTS must contain at least one entry"),
};

pub const FLAGSHIP_FEATURES: &[FlagshipFeature] = &[
    FlagshipFeature {
        icon: "⚡",
        title: "Lightning Fast",
        caption: "Sub-second randomness generation",
    },
    FlagshipFeature {
        icon: "🔒",
        title: "Cryptographically Secure",
        caption: "Provably fair and tamper-proof",
    },
    FlagshipFeature {
        icon: "🌐",
        title: "Decentralized",
        caption: "No single point of failure",
    },
];

pub const INFRA_GROUPS: &[InfraGroup] = &[
    InfraGroup {
        icon: "🚀",
        title: "AO Ecosystem Nodes",
        items: &[
            "Hyperbeam Nodes",
            "Messenger Units (MU)",
            "Scheduler Units (SU)",
            "Compute Units (CU)",
        ],
    },
    InfraGroup {
        icon: "🌐",
        title: "AR.IO Gateways",
        items: &[
            "Permaweb Access Points",
            "High-Availability Infrastructure",
            "Global Distribution",
            "Arweave Network Support",
        ],
    },
    InfraGroup {
        icon: "⛏️",
        title: "Mining Operations",
        items: &[
            "Virginia Blockchain Council Partnership",
            "Mining Hardware Setup & Management",
            "Infrastructure Consulting",
            "Enterprise-Grade Operations",
        ],
    },
];

pub const PARTNERS: &[Partner] = &[
    Partner {
        name: "AR.IO",
        description: "Permaweb gateway infrastructure partner powering decentralized access to Arweave",
        logos: &[PartnerLogo {
            image: "/images/logos/ARIO-Dark.png",
            alt: "AR.IO",
        }],
    },
    Partner {
        name: "Virginia Blockchain Council",
        description: "Strategic partnership for crypto mining hardware setup and blockchain infrastructure consulting",
        logos: &[PartnerLogo {
            image: "/images/logos/virginia-blockchain-council.png",
            alt: "Virginia Blockchain Council",
        }],
    },
    Partner {
        name: "AO & Arweave",
        description: "Built on the hyperscaling onchain compute layer (AO) and permanent data storage blockchain (Arweave)",
        logos: &[
            PartnerLogo {
                image: "/images/logos/ao.svg",
                alt: "AO",
            },
            PartnerLogo {
                image: "/images/logos/ar.png",
                alt: "Arweave",
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_count_matches_table() {
        assert_eq!(PRODUCT_COUNT.get(), PRODUCTS.len());
        assert_eq!(PRODUCT_COUNT.get(), 5);
    }

    #[test]
    fn test_team_members_in_order() {
        let names: Vec<_> = TEAM_MEMBERS.iter().map(|m| m.name).collect();
        assert_eq!(names, ["Allan Pedin", "Alex Posey", "Tyler Warburton"]);
    }

    #[test]
    fn test_external_product_opens_new_context() {
        let randao = &PRODUCTS[0];
        assert!(randao.external);
        assert_eq!(randao.link_target(), Some("_blank"));
        assert_eq!(randao.link_rel(), Some("noopener noreferrer"));
        assert_eq!(randao.link_label(), "Visit Randao.net →");
    }

    #[test]
    fn test_internal_product_stays_in_page() {
        let infrao = &PRODUCTS[1];
        assert!(!infrao.external);
        assert_eq!(infrao.link, "#infrastructure");
        assert_eq!(infrao.link_target(), None);
        assert_eq!(infrao.link_rel(), None);
        assert_eq!(infrao.link_label(), "Learn More →");
    }

    #[test]
    fn test_external_links_are_absolute() {
        for product in PRODUCTS.iter() {
            assert_eq!(
                product.external,
                product.link.starts_with("https://"),
                "{} has inconsistent link kind",
                product.name
            );
        }
    }

    #[test]
    fn test_only_joint_partner_is_dual() {
        let dual: Vec<_> = PARTNERS.iter().filter(|p| p.is_dual()).map(|p| p.name).collect();
        assert_eq!(dual, ["AO & Arweave"]);
    }

    #[test]
    fn test_infra_groups_have_items() {
        for group in INFRA_GROUPS.iter() {
            assert_eq!(group.items.len(), 4, "{}", group.title);
        }
    }
}
