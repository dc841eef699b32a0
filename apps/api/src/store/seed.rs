use portfolio_types::{Profile, ProjectInput, Socials};

/// Profile the server starts with.
pub fn seed_profile() -> Profile {
    Profile {
        name: "Alex Morgan".to_string(),
        title: "Full Stack Developer".to_string(),
        bio: "I build fast, accessible web applications and the services behind them."
            .to_string(),
        location: Some("San Francisco, CA".to_string()),
        email: "alex.morgan@example.com".to_string(),
        website: Some("https://alexmorgan.dev".to_string()),
        profile_picture: None,
        skills: ["TypeScript", "React", "Node.js", "Rust", "PostgreSQL"]
            .into_iter()
            .map(String::from)
            .collect(),
        socials: Socials {
            github: Some("https://github.com/alexmorgan".to_string()),
            linkedin: Some("https://linkedin.com/in/alexmorgan".to_string()),
            twitter: None,
        },
    }
}

/// Profile used when seeding is disabled: no content yet, but still valid.
pub fn blank_profile() -> Profile {
    Profile {
        name: "Your Name".to_string(),
        title: "Your Title".to_string(),
        bio: String::new(),
        location: None,
        email: "you@example.com".to_string(),
        website: None,
        profile_picture: None,
        skills: Vec::new(),
        socials: Socials::default(),
    }
}

/// Projects the server starts with.
pub fn seed_projects() -> Vec<ProjectInput> {
    vec![
        ProjectInput {
            title: "E-Commerce Platform".to_string(),
            description: "A storefront with cart, checkout and an admin dashboard for inventory."
                .to_string(),
            image: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d".to_string(),
            tech: ["React", "Node.js", "PostgreSQL", "Stripe"]
                .into_iter()
                .map(String::from)
                .collect(),
        },
        ProjectInput {
            title: "Task Management App".to_string(),
            description: "Collaborative boards with drag-and-drop cards and live updates."
                .to_string(),
            image: "https://images.unsplash.com/photo-1484480974693-6ca0a78fb36b".to_string(),
            tech: ["TypeScript", "Rust", "WebSockets"]
                .into_iter()
                .map(String::from)
                .collect(),
        },
    ]
}
