//! Page Content
//!
//! Everything the page says, as static tables. Surfaces decide layout; this
//! module only answers "what is in section X".

use chrono::{DateTime, NaiveDate, Utc};

use crate::carousel::{ImageItem, MetadataLookup, PhotoMeta};
use crate::typewriter::{LineStyle, TextLine};

/// Page sections, in scroll order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    /// Name, descriptor and boot terminal
    Hero,
    /// Engineering principles and topology
    Systems,
    /// Project cards
    Projects,
    /// Technology layers and certifications
    Stack,
    /// Leadership and volunteering
    Processes,
    /// Runtime log and photo gallery
    Human,
    /// Links and copy button
    Contact,
}

impl Section {
    /// All sections in scroll order
    pub const ALL: [Section; 7] = [
        Section::Hero,
        Section::Systems,
        Section::Projects,
        Section::Stack,
        Section::Processes,
        Section::Human,
        Section::Contact,
    ];

    /// Nav label
    pub fn title(self) -> &'static str {
        match self {
            Section::Hero => "IDENTITY",
            Section::Systems => "SYSTEMS",
            Section::Projects => "ACTIVE OPS",
            Section::Stack => "STACK",
            Section::Processes => "PARALLEL PROCESSES",
            Section::Human => "HUMAN LAYER",
            Section::Contact => "CONNECT",
        }
    }

    /// Position in [`Section::ALL`]
    pub fn index(self) -> usize {
        Section::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Section at `index`, if any
    pub fn from_index(index: usize) -> Option<Section> {
        Section::ALL.get(index).copied()
    }

    /// Next section, wrapping
    pub fn next(self) -> Section {
        Section::ALL[(self.index() + 1) % Section::ALL.len()]
    }

    /// Previous section, wrapping
    pub fn prev(self) -> Section {
        let len = Section::ALL.len();
        Section::ALL[(self.index() + len - 1) % len]
    }
}

/// Palette accent a piece of content is drawn in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Accent {
    /// Warm orange
    Amber,
    /// Blue-grey
    Steel,
    /// Green
    Moss,
    /// Off-white
    Cream,
}

// ============================================================================
// Hero
// ============================================================================

/// Display name
pub const HERO_NAME: &str = "KUNDHAVE S";
/// Role line under the name
pub const HERO_ROLE: &str = "SYSTEMS ENGINEER";
/// Label above the name
pub const HERO_LABEL: &str = "IDENTITY MODULE / v2025.1";
/// Descriptor paragraphs
pub const HERO_DESCRIPTOR: [&str; 2] = [
    "Backend & AI engineer. Builds production-grade systems that survive failure, scale under load, and ship at velocity.",
    "From architecture decisions to deployment, observability, and failure recovery. Full ownership, no hand-offs.",
];
/// Availability line
pub const HERO_AVAILABILITY: &str = "Open to work.";
/// Title bar of the boot terminal
pub const TERMINAL_TITLE: &str = "system.init — bash";

const TERMINAL_SCRIPT: [(f32, &str, LineStyle); 6] = [
    (0.0, "$ init system_identity --engineer=backend+ai", LineStyle::Cmd),
    (0.8, "> loading distributed_systems.core...", LineStyle::Log),
    (1.4, "> fault_tolerance: ENABLED", LineStyle::Ok),
    (1.9, "> event_driven_arch: ACTIVE", LineStyle::Ok),
    (2.4, "> observability: INSTRUMENTED", LineStyle::Ok),
    (2.9, "$ status: READY FOR PRODUCTION", LineStyle::Cmd),
];

/// Boot terminal lines with their reveal delays
pub fn hero_terminal_lines() -> Vec<TextLine> {
    TERMINAL_SCRIPT
        .iter()
        .map(|(delay, text, style)| TextLine::new(*text, *style).after_secs(*delay))
        .collect()
}

// ============================================================================
// Systems
// ============================================================================

/// An engineering principle card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Principle {
    /// `P-NN` code
    pub code: &'static str,
    /// Headline
    pub title: &'static str,
    /// Paragraph
    pub body: &'static str,
    /// Card color
    pub accent: Accent,
}

/// Principle cards
pub const PRINCIPLES: [Principle; 4] = [
    Principle {
        code: "P-01",
        title: "FAULT ISOLATION",
        body: "Design for failure, not against it. Every service boundary is a blast radius limiter. Dead-letter queues, circuit breakers and idempotency keys are not afterthoughts.",
        accent: Accent::Amber,
    },
    Principle {
        code: "P-02",
        title: "OBSERVABLE BY DEFAULT",
        body: "If it runs in production and isn't instrumented, it doesn't exist. Metrics, structured logs and distributed traces are wired in from day one.",
        accent: Accent::Steel,
    },
    Principle {
        code: "P-03",
        title: "EVENT-DRIVEN FIRST",
        body: "Decouple services through durable event streams. Async processing, at-least-once semantics and backpressure handling as architectural primitives.",
        accent: Accent::Moss,
    },
    Principle {
        code: "P-04",
        title: "OWNERSHIP MENTALITY",
        body: "Architecture → code → deploy → monitor → fix. No partial ownership. Comfortable holding the pager and the pull request simultaneously.",
        accent: Accent::Cream,
    },
];

/// Nodes of the simplified topology diagram
pub const TOPOLOGY_NODES: [&str; 6] = ["API GATEWAY", "EVENT HUB", "CACHE", "WORKER", "DB", "MONITOR"];

/// Directed edges between [`TOPOLOGY_NODES`] indices
pub const TOPOLOGY_EDGES: [(usize, usize); 7] = [(0, 1), (0, 2), (1, 3), (2, 4), (3, 4), (3, 5), (4, 5)];

// ============================================================================
// Projects
// ============================================================================

/// A sub-system listed on a project card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectModule {
    /// Module name
    pub name: &'static str,
    /// One-line description
    pub detail: &'static str,
}

/// A project card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    /// Stable slug
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// One-line summary
    pub subtitle: &'static str,
    /// Domain tag
    pub class: &'static str,
    /// Status badge text
    pub status: &'static str,
    /// Status badge color
    pub accent: Accent,
    /// Release tag
    pub version: &'static str,
    /// Uptime figure, or a status word for unreleased work
    pub uptime: &'static str,
    /// Technologies used
    pub stack: &'static [&'static str],
    /// Card body
    pub description: &'static str,
    /// Expandable module list
    pub modules: &'static [ProjectModule],
    /// Callout line
    pub highlight: &'static str,
}

/// Project cards
pub const PROJECTS: [Project; 4] = [
    Project {
        id: "custos",
        name: "CUSTOS",
        subtitle: "Pre-Trade Risk & Regulatory Intelligence Platform",
        class: "FINTECH / COMPLIANCE",
        status: "IN PROGRESS",
        accent: Accent::Amber,
        version: "v0.8.2-alpha",
        uptime: "IN PROGRESS",
        stack: &["Azure Event Hubs", "Azure Functions", "GPT-4o", "RAG", "Redis", "Python", "Entra ID"],
        description: "Cloud-native, event-driven pre-trade risk engine on Microsoft Azure. Intercepts and validates institutional trade orders using stateless Functions with sub-millisecond deterministic checks for fat-finger errors and position limits.",
        modules: &[
            ProjectModule { name: "Risk Engine", detail: "Sub-ms fat-finger + position limit checks" },
            ProjectModule { name: "Regulatory AI", detail: "RAG-powered SEC/FINRA PDF extraction" },
            ProjectModule { name: "Audit Trail", detail: "WORM-policy immutable Golden Record" },
            ProjectModule { name: "Zero-Trust Auth", detail: "Microsoft Entra ID enforcement" },
        ],
        highlight: "AI-driven compliance automation, reducing regulatory update latency from days to minutes.",
    },
    Project {
        id: "relay",
        name: "RELAY",
        subtitle: "Fault-Tolerant Distributed Webhook Orchestrator",
        class: "INFRA / PAYMENTS",
        status: "STABLE",
        accent: Accent::Moss,
        version: "v1.2.0",
        uptime: "99.94%",
        stack: &["FastAPI", "PostgreSQL", "Redis", "Celery", "Docker", "Prometheus"],
        description: "Fault-tolerant event delivery system for asynchronous notification of external services across payment lifecycle events. Decoupled architecture with durable event persistence and instrumented delivery pipeline.",
        modules: &[
            ProjectModule { name: "Event Bus", detail: "Decoupled event creation from delivery" },
            ProjectModule { name: "Worker Pool", detail: "Redis-backed Celery with exponential backoff" },
            ProjectModule { name: "DLQ Handler", detail: "Dead-letter handling for unreliable endpoints" },
            ProjectModule { name: "Observability", detail: "Prometheus latency, retry, failure metrics" },
        ],
        highlight: "At-least-once delivery semantics with idempotency keys: zero duplicate payment events.",
    },
    Project {
        id: "entitled",
        name: "ENTITLED",
        subtitle: "Secure Privileged Access Management System",
        class: "SECURITY / FINTECH",
        status: "OPERATIONAL",
        accent: Accent::Moss,
        version: "v1.0.4",
        uptime: "99.98%",
        stack: &["FastAPI", "PostgreSQL", "SQLAlchemy", "JWT", "TOTP MFA"],
        description: "Security-focused PAM backend implementing role-based access control for sensitive financial vault data. Zero-trust architecture with just-in-time access provisioning.",
        modules: &[
            ProjectModule { name: "RBAC Engine", detail: "Role-based financial vault access control" },
            ProjectModule { name: "JIT Provisioner", detail: "Admin-approved time-bound sessions" },
            ProjectModule { name: "MFA Layer", detail: "TOTP for privileged action enforcement" },
            ProjectModule { name: "Audit Logger", detail: "Immutable access request trail" },
        ],
        highlight: "Automatic access revocation: privilege escalation with zero standing permissions.",
    },
    Project {
        id: "techtrendgpt",
        name: "TECHTRENDGPT",
        subtitle: "RAG-Based Technology Intelligence Chatbot",
        class: "AI / NLP",
        status: "ACTIVE",
        accent: Accent::Steel,
        version: "v2.1.0",
        uptime: "99.80%",
        stack: &["Next.js", "TypeScript", "LangChain", "Vector DB", "OpenAI API"],
        description: "Retrieval-Augmented Generation chatbot for real-time technology discourse and news analysis. Vector similarity search over indexed tech articles with streaming AI responses.",
        modules: &[
            ProjectModule { name: "RAG Pipeline", detail: "Vector similarity over tech article corpus" },
            ProjectModule { name: "Stream Engine", detail: "Streaming responses with markdown render" },
            ProjectModule { name: "Content Sync", detail: "Automated article indexing + time-awareness" },
        ],
        highlight: "Context-aware responses grounded in recent tech articles, not just training data.",
    },
];

// ============================================================================
// Stack
// ============================================================================

/// A layer of the technology stack
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StackLayer {
    /// `L0`..`L5`
    pub code: &'static str,
    /// Layer name
    pub name: &'static str,
    /// Layer color
    pub accent: Accent,
    /// Technologies in the layer
    pub items: &'static [&'static str],
}

/// Stack layers, bottom (L0) up
pub const STACK_LAYERS: [StackLayer; 6] = [
    StackLayer { code: "L0", name: "CORE LANGUAGES", accent: Accent::Amber, items: &["Python", "SQL", "Java"] },
    StackLayer {
        code: "L1",
        name: "BACKEND & APIs",
        accent: Accent::Steel,
        items: &["FastAPI", "REST API Design", "Redis", "Celery"],
    },
    StackLayer {
        code: "L2",
        name: "DATA LAYER",
        accent: Accent::Moss,
        items: &["PostgreSQL", "MongoDB", "MySQL", "Pandas / NumPy"],
    },
    StackLayer {
        code: "L3",
        name: "AI / ML",
        accent: Accent::Amber,
        items: &["OpenAI API / GPT-4o", "LangChain", "Vector Databases", "Scikit-learn", "PyTorch / TensorFlow"],
    },
    StackLayer {
        code: "L4",
        name: "INFRA & OBSERVABILITY",
        accent: Accent::Steel,
        items: &["Docker", "Prometheus", "Git"],
    },
    StackLayer { code: "L5", name: "CLOUD PLATFORMS", accent: Accent::Moss, items: &["Azure", "AWS", "GCP"] },
];

/// A certification
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cert {
    /// Course name
    pub name: &'static str,
    /// Issuing body
    pub issuer: &'static str,
}

/// Certifications
pub const CERTS: [Cert; 6] = [
    Cert { name: "Snowflake Data Warehousing", issuer: "Snowflake" },
    Cert { name: "Developing Serverless Solutions on AWS", issuer: "AWS" },
    Cert { name: "Supervised ML: Regression and Classification", issuer: "DeepLearning.AI" },
    Cert { name: "Full-stack Development", issuer: "Udemy" },
    Cert { name: "Intro to Deep Learning", issuer: "DataCamp" },
    Cert { name: "PyTorch Workshop", issuer: "IETE" },
];

// ============================================================================
// Parallel processes
// ============================================================================

/// Whether a role is still running
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceStatus {
    /// Still running; shows a live uptime
    Active,
    /// Ended
    Archived,
}

impl ServiceStatus {
    /// Badge text
    pub fn label(self) -> &'static str {
        match self {
            ServiceStatus::Active => "ACTIVE",
            ServiceStatus::Archived => "ARCHIVED",
        }
    }
}

/// A leadership or volunteering role
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    /// `SVC-NNN` / `VOL-NNN`
    pub pid: &'static str,
    /// Role title
    pub name: &'static str,
    /// Organisation
    pub org: &'static str,
    /// Area of work
    pub scope: &'static str,
    /// Human-readable period
    pub period: &'static str,
    /// `YYYY-MM-DD`, UTC midnight
    pub start_date: &'static str,
    /// Running or ended
    pub status: ServiceStatus,
    /// Card color
    pub accent: Accent,
}

impl Service {
    /// Parsed start date
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        NaiveDate::parse_from_str(self.start_date, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }

    /// Whether this role gets a live uptime counter
    pub fn is_active(&self) -> bool {
        self.status == ServiceStatus::Active
    }
}

/// Leadership roles
pub const SERVICES: [Service; 4] = [
    Service {
        pid: "SVC-001",
        name: "Technical Team Member (AI/ML)",
        org: "IETE Amrita",
        scope: "R&D / Applied ML",
        period: "Aug 2025 – Present",
        start_date: "2025-08-01",
        status: ServiceStatus::Active,
        accent: Accent::Amber,
    },
    Service {
        pid: "SVC-002",
        name: "General Manager",
        org: "iDea Amrita",
        scope: "Operations / Strategy",
        period: "Dec 2025 – Present",
        start_date: "2025-12-01",
        status: ServiceStatus::Active,
        accent: Accent::Steel,
    },
    Service {
        pid: "SVC-003",
        name: "Co-Head, PR & Sponsorship",
        org: "Anokha Tech Fest",
        scope: "Outreach / Sponsorship",
        period: "Dec 2025 – Jan 2026",
        start_date: "2025-12-01",
        status: ServiceStatus::Archived,
        accent: Accent::Moss,
    },
    Service {
        pid: "SVC-004",
        name: "State Publicity Head",
        org: "Youth United Council of India",
        scope: "Governance / Communications",
        period: "Jun 2024 – Jan 2025",
        start_date: "2024-06-01",
        status: ServiceStatus::Archived,
        accent: Accent::Amber,
    },
];

/// Volunteering role
pub const VOLUNTEER: Service = Service {
    pid: "VOL-001",
    name: "Joint Secretary",
    org: "Interact Club",
    scope: "Community Service / Outreach",
    period: "Jun 2021 – Jun 2022",
    start_date: "2021-06-01",
    status: ServiceStatus::Archived,
    accent: Accent::Cream,
};

// ============================================================================
// Human layer
// ============================================================================

/// An entry of the personal "runtime log"
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuntimeLog {
    /// Bracketed level tag
    pub level: &'static str,
    /// Log message
    pub message: &'static str,
    /// Dimmed trailer
    pub meta: &'static str,
    /// Level color
    pub accent: Accent,
}

/// Runtime log
pub const RUNTIME_LOG: [RuntimeLog; 6] = [
    RuntimeLog {
        level: "PROCESS",
        message: "NatyaSudha Dance Club: active node",
        meta: "Nov 2023 – Jun 2025",
        accent: Accent::Steel,
    },
    RuntimeLog {
        level: "EVENT",
        message: "Multiple dance competitions: wins logged",
        meta: "Performance metrics nominal",
        accent: Accent::Amber,
    },
    RuntimeLog {
        level: "DAEMON",
        message: "Sudoku solver: low-priority background task",
        meta: "PID: persistent",
        accent: Accent::Moss,
    },
    RuntimeLog {
        level: "THREAD",
        message: "Chess engine: target 1000 ELO",
        meta: "Worker in progress",
        accent: Accent::Steel,
    },
    RuntimeLog {
        level: "SIGNAL",
        message: "Cafe hopping • Food • Beach • Friends",
        meta: "I/O channels open",
        accent: Accent::Amber,
    },
    RuntimeLog {
        level: "OUTPUT",
        message: "Painting: visual artifacts generated",
        meta: "See memory cluster below",
        accent: Accent::Moss,
    },
];

/// Number of gallery photos
pub const PHOTO_COUNT: usize = 11;

/// Frame shape for each gallery slot, cycled by position
pub const FRAME_SHAPES: [&str; PHOTO_COUNT] = [
    "TALL", "STANDARD", "WIDE", "STANDARD", "TALL", "STANDARD", "STANDARD", "WIDE", "STANDARD", "TALL", "STANDARD",
];

/// Gallery photos `MEM-01..MEM-11`, in source order
pub fn photos() -> Vec<ImageItem> {
    (1..=PHOTO_COUNT)
        .map(|n| ImageItem::new(format!("MEM-{:02}", n), format!("photos/photo-{:02}.jpeg", n)))
        .collect()
}

/// Captions and frame shapes for [`photos`]
pub fn photo_metadata() -> MetadataLookup {
    let entries = (1..=PHOTO_COUNT)
        .map(|n| {
            let caption = format!("memory cluster {:02}/{:02}", n, PHOTO_COUNT);
            PhotoMeta::new(format!("MEM-{:02}", n), caption, FRAME_SHAPES[n - 1])
        })
        .collect();
    MetadataLookup::new(entries)
}

// ============================================================================
// Contact
// ============================================================================

/// Address the copy button writes
pub const CONTACT_EMAIL: &str = "kundhave05@gmail.com";

/// A contact link row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactLink {
    /// Row label
    pub label: &'static str,
    /// Displayed value
    pub value: &'static str,
    /// Link target
    pub href: &'static str,
    /// Glyph in front of the row
    pub icon: &'static str,
}

/// Contact links
pub const CONTACT_LINKS: [ContactLink; 3] = [
    ContactLink {
        label: "EMAIL",
        value: CONTACT_EMAIL,
        href: "mailto:kundhave05@gmail.com",
        icon: "✉",
    },
    ContactLink {
        label: "GITHUB",
        value: "github.com/kundhave",
        href: "https://github.com/kundhave",
        icon: "◈",
    },
    ContactLink {
        label: "LINKEDIN",
        value: "linkedin.com/in/kundhavesrinivasan",
        href: "https://www.linkedin.com/in/kundhavesrinivasan/",
        icon: "◇",
    },
];

/// Status rows next to the links
pub const CONTACT_STATUS: [(&str, &str); 2] = [("LOCATION", "Tamil Nadu, India"), ("STATUS", "Open to work")];

/// Footer lines
pub const FOOTER: [&str; 2] = [
    "SYS://KUNDHAVE_S — ALL SYSTEMS OPERATIONAL",
    "B.TECH CSE · AMRITA VISHWA VIDYAPEETHAM · EXP. 2027",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_section_order_roundtrips() {
        for (i, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
            assert_eq!(Section::from_index(i), Some(*section));
        }
        assert_eq!(Section::from_index(7), None);
        assert_eq!(Section::Contact.next(), Section::Hero);
        assert_eq!(Section::Hero.prev(), Section::Contact);
    }

    #[test]
    fn test_terminal_delays() {
        let delays: Vec<u128> = hero_terminal_lines().iter().map(|l| l.reveal_delay.as_millis()).collect();
        assert_eq!(delays, vec![0, 800, 1400, 1900, 2400, 2900]);
        assert_eq!(hero_terminal_lines()[5].style, LineStyle::Cmd);
    }

    #[test]
    fn test_photos_and_metadata_line_up() {
        let photos = photos();
        let meta = photo_metadata();
        assert_eq!(photos.len(), 11);
        assert_eq!(photos[0].source_path, "photos/photo-01.jpeg");
        assert_eq!(photos[10].id, "MEM-11");
        for photo in &photos {
            assert_eq!(meta.find(&photo.id).map(|m| m.id.as_str()), Some(photo.id.as_str()));
        }
        assert_eq!(meta.find("MEM-03").unwrap().tag, "WIDE");
    }

    #[test]
    fn test_service_start_dates_parse() {
        for service in SERVICES.iter().chain(std::iter::once(&VOLUNTEER)) {
            assert!(service.started_at().is_some(), "{} has a bad date", service.pid);
        }
        let started = SERVICES[0].started_at().unwrap();
        assert_eq!(started.to_rfc3339(), "2025-08-01T00:00:00+00:00");
        assert_eq!(SERVICES.iter().filter(|s| s.is_active()).count(), 2);
    }

    #[test]
    fn test_copy_target_is_first_link() {
        assert_eq!(CONTACT_LINKS[0].value, CONTACT_EMAIL);
        assert!(hero_terminal_lines().iter().all(|l| l.reveal_delay < Duration::from_secs(3)));
    }
}
