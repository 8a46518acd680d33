//! The hard-coded resume behind the generator.

use serde::{Deserialize, Serialize};

/// One group of skills ("Languages", "Tooling", ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    pub items: Vec<String>,
}

/// One role in the experience list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub company: String,
    pub title: String,
    pub period: String,
    pub bullets: Vec<String>,
}

/// One education entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub period: String,
}

/// The whole resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resume {
    pub name: String,
    pub title: String,
    pub location: String,
    pub email: String,
    pub website: String,
    pub summary: String,
    pub skills: Vec<SkillGroup>,
    pub experience: Vec<Role>,
    pub education: Vec<Education>,
}

/// The resume the studio renders and prints.
pub fn resume() -> Resume {
    Resume {
        name: "Arjun Mehta".to_string(),
        title: "Full-stack Developer".to_string(),
        location: "Pune, India".to_string(),
        email: "arjun.mehta.dev@gmail.com".to_string(),
        website: "arjunmehta.dev".to_string(),
        summary: "Full-stack developer with four years of product work across \
                  e-commerce and tooling. Comfortable owning features end to end, \
                  from data model to pixel polish."
            .to_string(),
        skills: vec![
            SkillGroup {
                name: "Languages".to_string(),
                items: vec![
                    "TypeScript".to_string(),
                    "Rust".to_string(),
                    "Python".to_string(),
                ],
            },
            SkillGroup {
                name: "Frontend".to_string(),
                items: vec![
                    "React".to_string(),
                    "Leptos".to_string(),
                    "Tailwind".to_string(),
                ],
            },
            SkillGroup {
                name: "Tooling".to_string(),
                items: vec![
                    "Spin".to_string(),
                    "GitHub Actions".to_string(),
                    "Figma".to_string(),
                ],
            },
        ],
        experience: vec![
            Role {
                company: "Kirana Labs".to_string(),
                title: "Product Engineer".to_string(),
                period: "2023 - present".to_string(),
                bullets: vec![
                    "Built the storefront catalog and checkout flows".to_string(),
                    "Cut page weight 40% by moving rendering to the edge".to_string(),
                ],
            },
            Role {
                company: "Freelance".to_string(),
                title: "Web Developer".to_string(),
                period: "2021 - 2023".to_string(),
                bullets: vec![
                    "Shipped sites and dashboards for a dozen small businesses".to_string(),
                ],
            },
        ],
        education: vec![Education {
            school: "Savitribai Phule Pune University".to_string(),
            degree: "B.E. Computer Engineering".to_string(),
            period: "2017 - 2021".to_string(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_is_complete() {
        let r = resume();
        assert!(!r.skills.is_empty());
        assert!(!r.experience.is_empty());
        assert!(r.experience.iter().all(|role| !role.bullets.is_empty()));
    }
}
