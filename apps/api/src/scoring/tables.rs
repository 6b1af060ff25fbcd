//! Scoring tables: the fixed dictionaries and compiled patterns every analyzer reads.
//!
//! Built once at start-up (`ScoringTables::new`) and shared behind an `Arc`.
//! Nothing in here is mutated after construction, so concurrent analyses need no locking.

use regex::Regex;
use thiserror::Error;

// ────────────────────────────────────────────────────────────────────────────
// Dictionaries
// ────────────────────────────────────────────────────────────────────────────

pub const ACTION_VERBS: &[&str] = &[
    "achieved", "accomplished", "administered", "analyzed", "built", "collaborated",
    "created", "delivered", "developed", "directed", "enhanced", "established",
    "executed", "facilitated", "generated", "implemented", "improved", "increased",
    "initiated", "launched", "led", "managed", "optimized", "organized", "performed",
    "planned", "produced", "reduced", "resolved", "streamlined", "supervised",
    "transformed", "utilized", "coordinated", "maintained", "designed", "conducted",
];

/// Technical skills grouped by category. Category order is the match order.
pub const TECHNICAL_SKILLS: &[(&str, &[&str])] = &[
    (
        "programming",
        &[
            "python", "java", "javascript", "typescript", "c++", "c#", "php", "ruby", "go",
            "rust", "scala", "kotlin", "swift",
        ],
    ),
    (
        "web",
        &[
            "html", "css", "react", "angular", "vue.js", "node.js", "express.js", "django",
            "flask", "laravel", "spring boot",
        ],
    ),
    (
        "databases",
        &[
            "mysql", "postgresql", "mongodb", "redis", "elasticsearch", "oracle", "sqlite",
            "cassandra",
        ],
    ),
    (
        "cloud",
        &[
            "aws", "azure", "google cloud", "docker", "kubernetes", "jenkins", "terraform",
            "ansible",
        ],
    ),
    (
        "tools",
        &[
            "git", "jira", "confluence", "tableau", "power bi", "excel", "photoshop", "figma",
            "sketch",
        ],
    ),
];

pub const SOFT_SKILLS: &[&str] = &[
    "leadership", "management", "communication", "teamwork", "collaboration",
    "problem solving", "analytical thinking", "creative", "organized", "adaptable",
    "detail-oriented", "time management", "critical thinking", "negotiation",
    "presentation", "customer service", "project management", "strategic planning",
];

pub const CERTIFICATIONS: &[&str] = &[
    "pmp", "project management professional", "aws certified", "azure certified",
    "google certified", "cissp", "cisa", "cism", "comptia", "cisco certified",
    "microsoft certified", "salesforce certified", "scrum master", "csm", "six sigma", "itil",
    "cfa", "cpa",
];

pub const CERTIFICATION_ACRONYMS: &[&str] = &["pmp", "cfa", "cpa", "cissp", "aws", "csm"];

pub const ATS_FONTS: &[&str] = &[
    "arial", "calibri", "times new roman", "helvetica", "georgia", "trebuchet ms", "verdana",
];

pub const STOP_WORDS: &[&str] = &[
    "that", "with", "have", "will", "from", "they", "been", "were", "said", "each", "which",
    "their",
];

pub const LOCATION_KEYWORDS: &[&str] =
    &["city", "state", "location", "address", "remote", "relocation"];
pub const PORTFOLIO_MARKERS: &[&str] =
    &["github.com", "portfolio", "website", "https://", "http://"];
pub const LEADING_CONTACT_MARKERS: &[&str] = &["phone", "email", "@", "linkedin"];

pub const HEADLINE_INDICATORS: &[&str] = &[
    "summary", "objective", "profile", "professional summary", "career objective",
];
pub const HEADLINE_ROLE_KEYWORDS: &[&str] = &[
    "experience", "skilled", "expertise", "specialist", "professional", "manager",
    "developer", "analyst",
];
pub const GENERIC_PHRASES: &[&str] = &[
    "hard working", "hardworking", "team player", "detail oriented", "motivated",
    "passionate",
];

pub const SKILLS_HEADINGS: &[&str] = &[
    "skills", "technical skills", "core competencies", "technologies", "expertise",
];

pub const INSTITUTION_INDICATORS: &[&str] =
    &["university", "college", "institute", "school", "academy"];
pub const COURSEWORK_INDICATORS: &[&str] =
    &["coursework", "relevant courses", "courses", "curriculum"];
pub const ENTRY_LEVEL_MARKER: &str = "entry";

pub const CERTIFICATION_HEADINGS: &[&str] = &["certification", "license", "credential"];

pub const PROJECT_INDICATORS: &[&str] =
    &["project", "achievement", "accomplishment", "portfolio", "volunteer"];
/// Words whose occurrences form the denominator of the measurable-outcome ratio.
pub const ACHIEVEMENT_MARKERS: &[&str] = &["project", "achievement", "volunteer"];
pub const VOLUNTEER_KEYWORDS: &[&str] =
    &["volunteer", "community", "nonprofit", "charity", "leadership"];
pub const VOLUNTEER_MARKER: &str = "volunteer";
pub const VAGUE_PHRASES: &[&str] =
    &["helped", "worked on", "participated", "involved", "responsible for"];

pub const IMPORTANT_KEYWORDS: &[&str] =
    &["experience", "management", "development", "analysis", "project"];

pub const STANDARD_HEADINGS: &[&str] = &["experience", "education", "skills", "summary"];

/// An industry recognised from a job title, with the vocabulary expected in matching résumés.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Industry {
    pub name: &'static str,
    pub title_cues: &'static [&'static str],
    pub terms: &'static [&'static str],
}

/// Checked in order; the first industry whose cue appears in the title wins.
pub const INDUSTRIES: &[Industry] = &[
    Industry {
        name: "technology",
        title_cues: &["engineer", "developer", "programmer", "software", "tech"],
        terms: &[
            "software", "development", "programming", "coding", "algorithm", "database", "api",
        ],
    },
    Industry {
        name: "marketing",
        title_cues: &["marketing", "brand", "digital", "content"],
        terms: &[
            "campaign", "branding", "social media", "content", "analytics", "seo", "conversion",
        ],
    },
    Industry {
        name: "finance",
        title_cues: &["finance", "financial", "accounting", "analyst"],
        terms: &[
            "financial", "analysis", "modeling", "risk", "compliance", "reporting", "budgeting",
        ],
    },
    Industry {
        name: "healthcare",
        title_cues: &["nurse", "doctor", "medical", "healthcare"],
        terms: &[
            "patient", "clinical", "medical", "treatment", "diagnosis", "therapy", "care",
        ],
    },
    Industry {
        name: "sales",
        title_cues: &["sales", "account", "business development"],
        terms: &[
            "sales", "revenue", "client", "customer", "relationship", "negotiation", "pipeline",
        ],
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Patterns
// ────────────────────────────────────────────────────────────────────────────

const PHONE: &str = r"(\+?1?[-.\s]?)?\(?([0-9]{3})\)?[-.\s]?([0-9]{3})[-.\s]?([0-9]{4})";
const EMAIL: &str = r"(?i)\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b";
const LINKEDIN: &str = r"(?i)linkedin\.com/in/[\w-]+";
const CITY_STATE: &str = r"\b[A-Z][a-z]+,\s*[A-Z]{2}\b";
const YEAR: &str = r"\b(?:19|20)[0-9]{2}\b";
const JOB_TITLE: &str = r"(?i)\b(manager|director|engineer|analyst|specialist|coordinator|assistant|supervisor|lead|senior|junior)\b";
const COMPANY: &str = r"(?i)\b(inc|llc|corp|company|ltd|organization|university|hospital)\b";
const DATE_SLASH: &str = r"\b[0-9]{1,2}/[0-9]{4}";
const DATE_RANGE: &str = r"\b[0-9]{4}[-–][0-9]{4}";
const DATE_MONTH: &str = r"(?i)\b(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)\s+[0-9]{4}";
const BULLET_MARKER: &str = r"[•●▪]|-\s|\*\s";
const BULLET_COUNT: &str = r"[•●▪*-]\s";
const WORD_TOKEN: &str = r"\b\w{4,}\b";
const STRONG_GPA: &str = r"gpa\s*:?\s*([3-4]\.[5-9]|4\.0)";

const HEADLINE_MEASURABLE: &[&str] = &[
    r"(?i)\d+\+?\s*years?",
    r"(?i)\d+%",
    r"(?i)\$\d+",
    r"(?i)\d+\s*(million|thousand|k\b)",
    r"(?i)increased?.*\d+",
    r"(?i)improved?.*\d+",
];

const QUANTIFIABLE: &[&str] = &[
    r"(?i)\b\d+%",
    r"(?i)\$\d+",
    r"(?i)\b\d+\s*(million|thousand|k\b)",
    r"(?i)\b\d+\+?\s*(people|employees|team|members)",
    r"(?i)increased?.*\d+",
    r"(?i)decreased?.*\d+",
    r"(?i)improved?.*\d+",
    r"(?i)reduced?.*\d+",
    r"(?i)achieved?.*\d+",
    r"(?i)generated?.*\d+",
    r"(?i)saved?.*\d+",
];

const PROJECT_MEASURABLE: &[&str] = &[
    r"(?i)\b\d+%",
    r"(?i)\$\d+",
    r"(?i)\b\d+\s*(users|students|people|clients)",
    r"(?i)trained \d+",
    r"(?i)helped \d+",
];

/// Applied to lower-cased text.
const DEGREE: &[&str] = &[
    r"\b(bachelor|master|phd|doctorate|associate|diploma)\b",
    r"\b(b\.?[sa]\.?|m\.?[sa]\.?|ph\.?d\.?|m\.?b\.?a\.?)\b",
];

#[derive(Debug, Error)]
pub enum TablesError {
    #[error("invalid scoring pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: &'static str,
        #[source]
        source: regex::Error,
    },
}

/// Compiled regular expressions used by the signal detectors.
#[derive(Debug, Clone)]
pub struct Patterns {
    pub phone: Regex,
    pub email: Regex,
    pub linkedin: Regex,
    pub city_state: Regex,
    pub year: Regex,
    pub job_title: Regex,
    pub company: Regex,
    pub date_slash: Regex,
    pub date_range: Regex,
    pub date_month: Regex,
    pub bullet_marker: Regex,
    pub bullet_count: Regex,
    pub word_token: Regex,
    pub strong_gpa: Regex,
    pub headline_measurable: Vec<Regex>,
    pub quantifiable: Vec<Regex>,
    pub project_measurable: Vec<Regex>,
    pub degree: Vec<Regex>,
}

impl Patterns {
    fn compile() -> Result<Self, TablesError> {
        Ok(Self {
            phone: compile(PHONE)?,
            email: compile(EMAIL)?,
            linkedin: compile(LINKEDIN)?,
            city_state: compile(CITY_STATE)?,
            year: compile(YEAR)?,
            job_title: compile(JOB_TITLE)?,
            company: compile(COMPANY)?,
            date_slash: compile(DATE_SLASH)?,
            date_range: compile(DATE_RANGE)?,
            date_month: compile(DATE_MONTH)?,
            bullet_marker: compile(BULLET_MARKER)?,
            bullet_count: compile(BULLET_COUNT)?,
            word_token: compile(WORD_TOKEN)?,
            strong_gpa: compile(STRONG_GPA)?,
            headline_measurable: compile_all(HEADLINE_MEASURABLE)?,
            quantifiable: compile_all(QUANTIFIABLE)?,
            project_measurable: compile_all(PROJECT_MEASURABLE)?,
            degree: compile_all(DEGREE)?,
        })
    }
}

fn compile(pattern: &'static str) -> Result<Regex, TablesError> {
    Regex::new(pattern).map_err(|source| TablesError::InvalidPattern { pattern, source })
}

fn compile_all(patterns: &'static [&'static str]) -> Result<Vec<Regex>, TablesError> {
    patterns.iter().copied().map(compile).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tables
// ────────────────────────────────────────────────────────────────────────────

/// Read-only configuration shared by every analyzer.
#[derive(Debug, Clone)]
pub struct ScoringTables {
    pub patterns: Patterns,
    pub industries: &'static [Industry],
}

impl ScoringTables {
    pub fn new() -> Result<Self, TablesError> {
        Ok(Self {
            patterns: Patterns::compile()?,
            industries: INDUSTRIES,
        })
    }

    /// Iterates every technical skill in dictionary order.
    pub fn technical_skills(&self) -> impl Iterator<Item = &'static str> {
        TECHNICAL_SKILLS
            .iter()
            .flat_map(|(_, skills)| skills.iter().copied())
    }

    /// Detects the industry implied by a job title. `None` when no cue matches.
    pub fn industry_for_title(&self, title: &str) -> Option<&'static Industry> {
        let title_lower = title.to_lowercase();
        self.industries
            .iter()
            .find(|industry| industry.title_cues.iter().any(|cue| title_lower.contains(cue)))
    }
}
