//! Résumé texts shared by the scoring tests.

/// Five technical and three soft skills under a "Skills" heading, at low density.
pub const EIGHT_SKILLS: &str = r#"Skills
Python, Docker, Kubernetes, PostgreSQL, Terraform
Leadership, Communication, Teamwork
Experience
Platform engineer at Initech Inc building internal tooling for the data team.
Wrote deployment pipelines and maintained the build system used by forty engineers.
Reworked the release checklist so that new hires could ship on their first week.
Ran weekly office hours for product engineers who needed help with their services.
Education
Bachelor of Science in Computer Science, State University
"#;

/// Phone, email and no leading contact line; no name, location or profile link.
pub const HALF_CONTACT: &str = r#"Resume
jane@example.com
555 123 4567
Backend work, 10 years
Skills 2024
Built payment services and internal tooling for a logistics team over many years of steady work."#;

/// A complete, well-structured résumé.
pub const FULL_RESUME: &str = r#"Jane Doe
Senior Backend Engineer
jane.doe@example.com | (555) 123-4567 | Austin, TX | linkedin.com/in/jane-doe
Professional Summary
Backend developer with 8+ years of experience building payment systems.
Reduced checkout latency by 40% across three regions.
Skills
Python, Docker, Kubernetes, PostgreSQL, Terraform, AWS, Jira
Leadership, Communication, Teamwork
Experience
Senior Engineer, Acme Corp, Austin, TX | 03/2021 - Present
• Increased throughput by 45% by redesigning the ingestion pipeline
• Reduced cloud spend by $120k per year
• Led a team of 6 engineers and managed the migration roadmap
• Developed, implemented and optimized the billing service
Engineer, Globex Inc, Dallas, TX | until 02/2021
• Built internal tooling adopted by 300 people
• Designed the alerting strategy and resolved incident backlog
Education
Bachelor of Science in Computer Science, State University, 2014
Relevant coursework: distributed systems, databases
Certifications
AWS Certified Solutions Architect (Amazon Web Services)
Projects
Open source payment reconciliation project used by 200 users
"#;
