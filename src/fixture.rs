// src/fixture.rs
//! Compiled-in CV served when no document is configured

use serde_json::{json, Value};

pub fn builtin_cv() -> Value {
    json!({
        "Personal": {
            "name": "Alex Marin",
            "title": "Backend Developer",
            "phone": "0700000000",
            "email": "alex.marin@example.com",
            "linkedin": "https://www.linkedin.com/in/alex-marin-example",
            "github": "https://github.com/alex-marin-example"
        },
        "Core Competencies": [
            "Rust", "Tokio", "PostgreSQL", "REST APIs", "Docker", "Git", "Linux", "CI/CD"
        ],
        "Professional Experience": [
            {
                "company_name": "Northwind Systems",
                "job_title": "Backend Developer",
                "date": "March, 2022 - Present",
                "job description": [
                    "Design and maintain HTTP services for order processing and invoicing",
                    "Model relational schemas and write data migrations between releases",
                    "Write unit, integration and end-to-end tests for every new feature",
                    "Integrate third-party payment and shipping providers over their APIs",
                    "Review pull requests and keep the build green on CI",
                    "Work directly with customers to reproduce and fix production issues"
                ]
            },
            {
                "company_name": "Bluefield Labs",
                "job_title": "Junior Developer",
                "date": "June, 2020 - February, 2022",
                "job description": [
                    "Maintained internal reporting tools",
                    "Automated nightly data exports"
                ]
            }
        ],
        "Personal Projects": [
            {
                "name": "Self-hosted link shortener",
                "description": "Small web service with persistent storage, rate limiting, authentication and integration tests",
                "skills": ["Rust", "Rocket", "SQLite", "HTML", "CSS"]
            },
            {
                "name": "Flowchart renderer",
                "description": "Command line tool that reads edge declarations (e.g. A->B) and draws an SVG flowchart",
                "skills": ["Rust", "SVG"]
            },
            {
                "name": "River pollution model",
                "description": "Numerical model of pollutant dispersion in rivers after spill events",
                "skills": ["Python", "NumPy"]
            }
        ],
        "Education": [
            {
                "institution_name": "Open Code School",
                "description": "Software Development Bootcamp",
                "date": "2019 - 2020",
                "skills": [
                    "Algorithms and problem solving",
                    "Data structures",
                    "Object oriented design",
                    "Test driven development",
                    "Clean code"
                ]
            },
            {
                "institution_name": "State Technical University",
                "description": "Master's degree in Environmental Engineering",
                "date": "2017 - 2019"
            },
            {
                "institution_name": "State Technical University",
                "description": "Bachelor's degree in Environmental Engineering",
                "date": "2013 - 2017"
            }
        ]
    })
}
