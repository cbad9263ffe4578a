//! Copy shown on the portfolio page.

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech_stack: &'static str,
}

pub struct Social {
    pub label: &'static str,
    pub url: &'static str,
}

pub struct Profile {
    pub logo: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub description: &'static str,
    pub portrait: &'static str,
    pub portrait_alt: &'static str,
    pub services: &'static [Service],
    pub stats: &'static [Stat],
    pub projects: &'static [Project],
    pub about: &'static str,
    pub quote: &'static str,
    pub email: &'static str,
    pub socials: &'static [Social],
    pub copyright: &'static str,
}

pub static PROFILE: Profile = Profile {
    logo: "Jannah Ada",
    name: "Jannah Loraine L. Ada",
    role: "UI/UX Enthusiast",
    description: "I design intuitive and user-centered interfaces with a focus on clarity, \
                  accessibility, and long-term usability.",
    portrait: "/static/images/profile.svg",
    portrait_alt: "Portrait of Jannah Loraine Ada",
    services: &[
        Service {
            title: "UI Design",
            description: "I create clean and visually balanced user interfaces that prioritize \
                          clarity, consistency, and ease of navigation.",
        },
        Service {
            title: "UX Thinking",
            description: "I focus on user-centered design by understanding user needs, mapping \
                          user flows, and reducing friction in digital experiences.",
        },
        Service {
            title: "System-Oriented Design",
            description: "I design interfaces with scalability in mind, ensuring they remain \
                          usable even as systems grow or tools evolve.",
        },
    ],
    stats: &[
        Stat {
            value: "3",
            label: "Years of Experience",
        },
        Stat {
            value: "10+",
            label: "Technologies Used",
        },
        Stat {
            value: "CDMP",
            label: "Certification",
        },
    ],
    projects: &[
        Project {
            title: "Pawsitivity (Web Design)",
            description: "A web-based project that spreads awareness about adopting and showing \
                          compassion for stray animals.",
            tech_stack: "Figma (Low-Fidelity Design), Google Slides (Final Output)",
        },
        Project {
            title: "POS System (Admin / Cashier Database System)",
            description: "A simple CRUD-based database system designed to manage products, \
                          users, and transactions efficiently.",
            tech_stack: "VB.NET, MySQL, Python, VS Code",
        },
    ],
    about: "I am an IT student and UI/UX enthusiast with experience in designing user-friendly \
            systems and interfaces. I value strong fundamentals, thoughtful design decisions, \
            and continuous learning.",
    quote: "“I build systems with the assumption that tools will change, but \
            fundamentals—clarity, security, and usability—should not.”",
    email: "jannahsnow13@gmail.com",
    socials: &[
        Social {
            label: "GitHub",
            url: "https://github.com/jannahnah",
        },
        Social {
            label: "Facebook",
            url: "https://www.facebook.com/jannahsnow13",
        },
    ],
    copyright: "© 2026 Jannah Loraine Ada",
};
