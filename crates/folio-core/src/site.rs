//! Static site content: everything the page renders is declared here.
//!
//! All data is `'static` so the web crate can build the DOM without any
//! allocation or parsing step.

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub highlights: &'static [&'static str],
    pub live_url: Option<&'static str>,
    pub github_url: Option<&'static str>,
}

pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub dates: &'static str,
    pub bullets: &'static [&'static str],
}

pub struct Social {
    pub name: &'static str,
    pub url: &'static str,
}

pub struct HobbyImage {
    pub src: &'static str,
    pub alt: &'static str,
}

pub struct Hobby {
    pub name: &'static str,
    pub icon: &'static str,
    pub images: &'static [HobbyImage],
}

pub struct SiteConfig {
    pub name: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub tagline: &'static str,
    pub hero_subheadline: &'static str,
    pub about: &'static str,
    pub interests: &'static [&'static str],
    pub leadership: &'static [&'static str],
    pub hobbies: &'static [Hobby],
    pub socials: &'static [Social],
    pub projects: &'static [Project],
    pub experience: &'static [Experience],
}

/// (label, anchor) pairs for the fixed top navigation.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", "#hero"),
    ("Projects", "#projects"),
    ("About", "#about"),
    ("Experience", "#experience"),
    ("Contact", "#contact"),
];

pub static SITE: SiteConfig = SiteConfig {
    name: "Amresh Balakrishnan",
    title: "Software Engineer | AI/ML | Systems & Data",
    location: "Hoboken, NJ",
    email: "amreshbalakrishnan@gmail.com",
    tagline: "Building reliable systems and intelligent products.",
    hero_subheadline: "I\u{2019}m a computer engineering student and software engineer focused on data-driven systems, AI tooling, and clean, scalable infrastructure.",
    about: "I\u{2019}m a Computer Engineering student at Stevens Institute of Technology with experience building data pipelines, cloud-based systems, and AI-driven applications. I enjoy working close to data, performance constraints, and real-world use cases, and I\u{2019}m especially interested in applied ML, systems engineering, and infrastructure.",
    interests: &[
        "Distributed systems",
        "Data infrastructure",
        "Applied machine learning",
        "Full-stack product engineering",
    ],
    leadership: &[
        "Founder & Mentor, Stevens Venture Capitalist Fund",
        "NCAA Division III Varsity Baseball Player, Leadership Council",
        "Pledge Class President Alpha Kappa Psi",
    ],
    hobbies: &[
        Hobby {
            name: "Baseball",
            icon: "baseball",
            images: &[
                HobbyImage {
                    src: "/hobbies/baseball/IMG_9615.jpg",
                    alt: "Tournaments",
                },
                HobbyImage {
                    src: "/hobbies/baseball/baseball_2.png",
                    alt: "College Team",
                },
                HobbyImage {
                    src: "/hobbies/baseball/baseball_3.png",
                    alt: "Player of the Game",
                },
            ],
        },
        Hobby {
            name: "Fishing",
            icon: "fish",
            images: &[
                HobbyImage {
                    src: "/hobbies/fishing/IMG_9610.jpg",
                    alt: "Freshwater Bass",
                },
                HobbyImage {
                    src: "/hobbies/fishing/IMG_9611.jpg",
                    alt: "Sea Flounder",
                },
                HobbyImage {
                    src: "/hobbies/fishing/IMG_9614.jpg",
                    alt: "More Bass!!!",
                },
            ],
        },
    ],
    socials: &[
        Social {
            name: "GitHub",
            url: "https://github.com/Amresh-Bala29",
        },
        Social {
            name: "LinkedIn",
            url: "https://www.linkedin.com/in/amreshbalakrishnan/",
        },
        Social {
            name: "Resume",
            url: "/resume.pdf",
        },
    ],
    projects: &[
        Project {
            title: "Agentic Infrastructure Development Advisor",
            description: "An agent-based AI platform that analyzes infrastructure opportunities and computes ROI from public datasets.",
            tags: &["React", "TypeScript", "Node.js", "IBM watsonX", "REST APIs"],
            highlights: &[
                "Built a six-agent AI pipeline for document parsing, opportunity detection, and ranking.",
                "Delivered end-to-end analysis with automated reporting and geospatial visualization.",
            ],
            live_url: None,
            github_url: Some("https://github.com/Amresh-Bala29"),
        },
        Project {
            title: "Smart IoT Watering System",
            description: "A sensor-driven IoT system for automated plant watering and environmental monitoring.",
            tags: &["ESP32", "C++", "MQTT", "SolidWorks", "Excel"],
            highlights: &[
                "Collected and published real-time environmental data to a cloud dashboard.",
                "Designed and 3D-modeled a compact hardware enclosure.",
                "Validated system performance using multi-day moisture trend analysis.",
            ],
            live_url: None,
            github_url: Some("https://github.com/Amresh-Bala29"),
        },
    ],
    experience: &[
        Experience {
            company: "The Wharton School",
            role: "Symbal Growth Intern & Researcher",
            dates: "Jan 2026 \u{2013} Present",
            bullets: &[
                "Applied machine learning using PyTorch, TensorFlow, and LangChain to optimize talent acquisition, forecast employee attrition risk, and build a data flywheel.",
                "Designed and implemented a Python-based automation pipeline leveraging REST APIs and workflow orchestration tools to automate outreach to senior industry leaders.",
                "Collaborated with industry partners including CHROs at Oracle, NYC government, Penn Medicine, and Liberty Mutual to inform strategic HR decision-making.",
            ],
        },
        Experience {
            company: "NovaFlow (YC S25)",
            role: "Software Engineering Intern",
            dates: "June 2025 \u{2013} August 2025",
            bullets: &[
                "Built Python data pipelines using Pandas, NumPy, and Dask to ingest and normalize large biological datasets.",
                "Designed and deployed a PostgreSQL star-schema database, improving query performance by ~60%.",
                "Supported scalable analytics for a natural-language based platform.",
            ],
        },
        Experience {
            company: "The Valley Hospital",
            role: "Database Intern",
            dates: "February 2024 \u{2013} June 2024",
            bullets: &[
                "Developed Python and SQL workflows to consolidate patient survey data across systems.",
                "Cleaned legacy datasets to improve reporting accuracy.",
                "Supported AWS migration and integrated Spring Boot REST APIs for internal dashboards.",
            ],
        },
    ],
};
