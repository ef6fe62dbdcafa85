//! Static copy for the brochure pages.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Service {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub highlights: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Industry {
    pub name: &'static str,
    pub summary: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub city: &'static str,
    pub region: &'static str,
    pub blurb: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaseStudy {
    pub client: &'static str,
    pub industry: &'static str,
    pub challenge: &'static str,
    pub outcome: &'static str,
    pub stack: &'static [&'static str],
}

pub const SERVICES: &[Service] = &[
    Service {
        slug: "web-apps",
        title: "Web Applications",
        summary: "Customer portals, internal tools and SaaS products built to be maintained, not just launched.",
        highlights: &["Discovery and product scoping", "Accessible, fast front ends", "APIs and integrations"],
    },
    Service {
        slug: "mobile",
        title: "Mobile Apps",
        summary: "Native-quality iOS and Android apps that share one codebase where it makes sense.",
        highlights: &["Offline-first data sync", "App store release management", "Push and deep linking"],
    },
    Service {
        slug: "cloud",
        title: "Cloud & DevOps",
        summary: "Infrastructure as code, CI/CD and observability so releases stop being events.",
        highlights: &["Migration from legacy hosting", "Cost reviews", "On-call runbooks"],
    },
    Service {
        slug: "team-extension",
        title: "Team Extension",
        summary: "Senior engineers who join your standups and ship inside your process.",
        highlights: &["Two-week onboarding", "Timezone overlap guaranteed", "Knowledge handover built in"],
    },
];

pub const INDUSTRIES: &[Industry] = &[
    Industry {
        name: "Healthcare",
        summary: "Patient-facing apps and clinical tooling with privacy requirements handled from day one.",
    },
    Industry {
        name: "Logistics",
        summary: "Fleet tracking, dispatch and warehouse systems that keep working when the network doesn't.",
    },
    Industry {
        name: "Fintech",
        summary: "Onboarding flows, ledgers and reporting that auditors can follow.",
    },
    Industry {
        name: "Education",
        summary: "Learning platforms and school administration tools used by thousands every morning.",
    },
];

pub const LOCATIONS: &[Location] = &[
    Location {
        city: "Helsinki",
        region: "Finland",
        blurb: "Our headquarters and main delivery studio.",
    },
    Location {
        city: "Tallinn",
        region: "Estonia",
        blurb: "Mobile and QA team, two hours by ferry from Helsinki.",
    },
    Location {
        city: "Berlin",
        region: "Germany",
        blurb: "Client partners for the DACH region.",
    },
];

pub const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        client: "Nordic Freight Co.",
        industry: "Logistics",
        challenge: "Dispatchers juggled three legacy systems and a spreadsheet to plan routes.",
        outcome: "One dispatch console; planning time dropped from hours to minutes.",
        stack: &["Rust", "PostgreSQL", "React Native"],
    },
    CaseStudy {
        client: "Clinic Network",
        industry: "Healthcare",
        challenge: "Appointment no-shows cost the network a day of capacity each week.",
        outcome: "Reminder and rebooking flow cut no-shows by a third.",
        stack: &["TypeScript", "AWS", "Twilio"],
    },
    CaseStudy {
        client: "LedgerLine",
        industry: "Fintech",
        challenge: "Month-end reconciliation needed four people and a week.",
        outcome: "Automated reconciliation with an audit trail, closed in a day.",
        stack: &["Rust", "Kafka", "Kubernetes"],
    },
];

pub fn service_by_slug(slug: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.slug == slug)
}
