//! Built-in skills dictionary and field checklists, used when no
//! `SKILLS_CONFIG` file is configured.

pub const BASE_SKILLS: &[&str] = &[
    // Technical
    "python",
    "java",
    "c++",
    "sql",
    "machine learning",
    "data analysis",
    "tensorflow",
    "pytorch",
    "scikit-learn",
    "nlp",
    "deep learning",
    "html",
    "css",
    "javascript",
    "react",
    "angular",
    "node.js",
    "django",
    "flask",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "cybersecurity",
    "data visualization",
    "software development",
    "api development",
    "cloud computing",
    "blockchain",
    "microservices",
    // Non-technical
    "communication",
    "project management",
    "leadership",
    "teamwork",
    "problem solving",
    "time management",
    "critical thinking",
    "creativity",
    "adaptability",
    "conflict resolution",
    "customer service",
    "sales",
    "marketing",
    "strategic planning",
    "negotiation",
    "budget management",
    "public speaking",
    "event planning",
    "human resources",
    "finance",
    "accounting",
    "research",
    "writing",
    "organization",
    "interpersonal skills",
];

pub const FIELD_SKILLS: &[(&str, &[&str])] = &[
    (
        "Computer Science",
        &[
            "python",
            "java",
            "c++",
            "sql",
            "machine learning",
            "data analysis",
            "tensorflow",
            "pytorch",
            "scikit-learn",
            "nlp",
            "deep learning",
            "software development",
            "api development",
            "cloud computing",
        ],
    ),
    (
        "Teaching",
        &[
            "communication",
            "leadership",
            "teamwork",
            "time management",
            "critical thinking",
            "creativity",
            "curriculum development",
            "public speaking",
        ],
    ),
    (
        "Marketing",
        &[
            "communication",
            "strategic planning",
            "negotiation",
            "sales",
            "marketing",
            "digital marketing",
            "seo",
            "content creation",
            "social media",
        ],
    ),
    (
        "Finance",
        &[
            "accounting",
            "budget management",
            "financial analysis",
            "data analysis",
            "excel",
            "risk management",
            "finance",
        ],
    ),
    (
        "Healthcare",
        &[
            "patient care",
            "medical terminology",
            "communication",
            "empathy",
            "teamwork",
            "data analysis",
            "organization",
        ],
    ),
];
